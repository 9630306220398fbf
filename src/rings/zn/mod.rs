use crate::divisibility::DivisibilityRing;
use crate::ring::*;
use super::finite::FiniteRing;

///
/// This module contains [`zn_64::Zn`], an implementation of `Z/nZ` for moduli
/// `n` that fit into 62 bits.
///
pub mod zn_64;

///
/// Trait for all rings that represent a quotient of the integers `Z/nZ` for some integer `n`.
///
pub trait ZnRing: DivisibilityRing + FiniteRing {

    fn modulus(&self) -> i64;

    ///
    /// Computes the smallest positive lift for some `x` in `Z/nZ`, i.e. the smallest positive integer `m` such that
    /// `m = x mod n`.
    ///
    /// This will be one of `0, 1, ..., n - 1`. If an integer in `-(n - 1)/2, ..., -1, 0, 1, ..., (n - 1)/2` (for odd `n`)
    /// is needed instead, use [`ZnRingStore::smallest_lift()`].
    ///
    fn smallest_positive_lift(&self, el: &Self::Element) -> i64;

    ///
    /// Maps an integer to its residue class modulo `n`.
    ///
    fn from_i64(&self, value: i64) -> Self::Element;
}

///
/// [`RingStore`] for [`ZnRing`]s
///
pub trait ZnRingStore: RingStore
    where Self::Type: ZnRing
{
    delegate!{ fn modulus(&self) -> i64 }
    delegate!{ fn smallest_positive_lift(&self, el: &El<Self>) -> i64 }
    delegate!{ fn from_i64(&self, value: i64) -> El<Self> }

    ///
    /// Computes the smallest lift for some `x` in `Z/nZ`, i.e. the integer `m`
    /// of smallest absolute value such that `m = x mod n`.
    ///
    fn smallest_lift(&self, el: &El<Self>) -> i64 {
        let n = self.modulus();
        let lift = self.smallest_positive_lift(el);
        if lift > n / 2 {
            lift - n
        } else {
            lift
        }
    }
}

impl<R> ZnRingStore for R
    where R: RingStore,
        R::Type: ZnRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_zn_axioms<R: ZnRingStore>(ring: R)
        where R::Type: ZnRing
    {
        let n = ring.modulus();
        assert_eq!(n, ring.characteristic());
        assert_eq!(Some(n), ring.get_ring().size());
        for k in [-n - 3, -n, -1, 0, 1, n - 1, n, n + 2] {
            let x = ring.from_i64(k);
            let lift = ring.smallest_positive_lift(&x);
            assert!(0 <= lift && lift < n);
            assert_eq!(0, (k - lift).rem_euclid(n));
            let small = ring.smallest_lift(&x);
            assert!(2 * small.abs() <= n);
            assert_el_eq!(&ring, &x, &ring.from_i64(small));
        }
    }
}
