use crate::ring::*;

///
/// Trait for rings that support checking divisibility, i.e.
/// whether for `x, y` there is `k` such that `x = ky`.
///
/// This is the minimal structure on the coefficient ring that is required for
/// top-reduction of polynomials, see [`crate::algorithms::poly_div`].
///
pub trait DivisibilityRing: RingBase {

    ///
    /// Checks whether there is an element `x` such that `rhs * x = lhs`, and
    /// returns it if it exists. Note that `0/0 = 0` by convention.
    ///
    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element>;

    fn is_unit(&self, x: &Self::Element) -> bool {
        self.checked_div(&self.one(), x).is_some()
    }
}

///
/// [`RingStore`] for [`DivisibilityRing`]s
///
pub trait DivisibilityRingStore: RingStore
    where Self::Type: DivisibilityRing
{
    delegate!{ fn checked_div(&self, lhs: &El<Self>, rhs: &El<Self>) -> Option<El<Self>> }
    delegate!{ fn is_unit(&self, x: &El<Self>) -> bool }

    ///
    /// Returns whether `lhs` divides `rhs`.
    ///
    fn divides(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool {
        self.checked_div(rhs, lhs).is_some()
    }
}

impl<R> DivisibilityRingStore for R
    where R: RingStore,
        R::Type: DivisibilityRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_divisibility_axioms<R: DivisibilityRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: DivisibilityRing
    {
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            for b in &elements {
                let ab = ring.mul_ref(a, b);
                let c = ring.checked_div(&ab, a);
                assert!(c.is_some(), "divisibility test failed: {} should divide {}", ring.format(a), ring.format(&ab));
                if let Some(c) = c {
                    assert_el_eq!(&ring, &ab, &ring.mul_ref(a, &c));
                }
                if let Some(c) = ring.checked_div(a, b) {
                    assert_el_eq!(&ring, a, &ring.mul(c, ring.clone_el(b)));
                }
            }
        }
        for a in &elements {
            if ring.is_unit(a) {
                assert!(ring.divides(a, &ring.one()));
            }
        }
    }
}
