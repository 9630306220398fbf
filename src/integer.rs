use crate::ring::*;
use crate::pid::*;

///
/// Trait for rings that are isomorphic to the ring of integers `Z`.
///
/// Apart from the euclidean structure, integer rings give access to the binary
/// representation of the absolute value, which is what square-and-multiply needs.
///
pub trait IntegerRing: EuclideanRing + ComparableElRing {

    fn abs_is_bit_set(&self, value: &Self::Element, i: usize) -> bool;
    fn abs_highest_set_bit(&self, value: &Self::Element) -> Option<usize>;
    fn is_neg(&self, value: &Self::Element) -> bool;
}

///
/// [`RingStore`] for [`IntegerRing`]s
///
pub trait IntegerRingStore: RingStore
    where Self::Type: IntegerRing
{
    delegate!{ fn abs_is_bit_set(&self, value: &El<Self>, i: usize) -> bool }
    delegate!{ fn abs_highest_set_bit(&self, value: &El<Self>) -> Option<usize> }
    delegate!{ fn is_neg(&self, value: &El<Self>) -> bool }

    fn is_odd(&self, value: &El<Self>) -> bool {
        self.abs_is_bit_set(value, 0)
    }

    fn abs(&self, value: El<Self>) -> El<Self> {
        if self.is_neg(&value) {
            self.negate(value)
        } else {
            value
        }
    }
}

impl<R> IntegerRingStore for R
    where R: RingStore,
        R::Type: IntegerRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_integer_axioms<R: IntegerRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: IntegerRing
    {
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            let abs = ring.abs(ring.clone_el(a));
            assert!(!ring.is_neg(&abs));
            match ring.abs_highest_set_bit(a) {
                None => assert!(ring.is_zero(a)),
                Some(i) => {
                    assert!(ring.abs_is_bit_set(a, i));
                    let mut bits = ring.zero();
                    for j in (0..=i).rev() {
                        bits = ring.add(ring.clone_el(&bits), ring.clone_el(&bits));
                        if ring.abs_is_bit_set(a, j) {
                            bits = ring.add(bits, ring.one());
                        }
                    }
                    assert_el_eq!(&ring, &abs, &bits);
                }
            }
        }
    }
}

#[cfg(test)]
use crate::primitive_int::StaticRing;

#[test]
fn test_is_odd_abs() {
    let ZZ = StaticRing::<i64>::RING;
    assert!(ZZ.is_odd(&-3));
    assert!(!ZZ.is_odd(&0));
    assert_eq!(7, ZZ.abs(-7));
    generic_tests::test_integer_axioms(ZZ, [0, 1, -1, 6, -13, i64::MAX, i64::MIN + 1].into_iter());
}
