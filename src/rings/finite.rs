use crate::ring::*;

///
/// Trait for rings that are finite.
///
pub trait FiniteRing: RingBase {

    ///
    /// Returns a uniformly random element from this ring, using the randomness
    /// provided by `rng`.
    ///
    fn random_element<G: FnMut() -> u64>(&self, rng: G) -> <Self as RingBase>::Element;

    ///
    /// Returns the number of elements in this ring, if it fits within an `i64`.
    ///
    fn size(&self) -> Option<i64>;
}

///
/// [`RingStore`] for [`FiniteRing`]
///
pub trait FiniteRingStore: RingStore
    where Self::Type: FiniteRing
{
    fn random_element<G: FnMut() -> u64>(&self, rng: G) -> El<Self> {
        self.get_ring().random_element(rng)
    }

    fn size(&self) -> Option<i64> {
        self.get_ring().size()
    }
}

impl<R: RingStore> FiniteRingStore for R
    where R::Type: FiniteRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_finite_ring_axioms<R>(ring: &R)
        where R: RingStore,
            R::Type: FiniteRing
    {
        let size = ring.size().unwrap();
        let char = ring.characteristic();
        assert!(char > 0);
        assert_eq!(0, size % char);

        let mut rng = oorandom::Rand64::new(1);
        for _ in 0..20 {
            let x = ring.random_element(|| rng.rand_u64());
            assert_el_eq!(ring, &ring.zero(), &ring.mul(x, ring.from_int(char as i32)));
        }
    }
}
