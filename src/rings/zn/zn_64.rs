use std::cmp::Ordering;

use crate::algorithms::int_factor::is_prime;
use crate::divisibility::*;
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::field::{AsField, AsFieldBase};
use crate::rings::finite::FiniteRing;
use crate::rings::zn::*;

///
/// Implementation of `Z/nZ` for integers `n` with `2 <= n < 2^62`.
///
/// Elements are stored as their smallest nonnegative representative, and
/// products are computed using 128-bit intermediates.
///
/// # Example
/// ```
/// # use ideal_arith::assert_el_eq;
/// # use ideal_arith::ring::*;
/// # use ideal_arith::field::*;
/// # use ideal_arith::rings::zn::*;
/// # use ideal_arith::rings::zn::zn_64::*;
/// let Fp = Zn::new(17).as_field().ok().unwrap();
/// let x = Fp.from_int(5);
/// assert_el_eq!(&Fp, &Fp.one(), &Fp.mul_ref(&x, &Fp.div(&Fp.one(), &x)));
/// assert_eq!(-2, Fp.smallest_lift(&Fp.from_int(15)));
/// ```
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ZnBase {
    modulus: u64
}

pub type Zn = RingValue<ZnBase>;

impl Zn {

    pub fn new(modulus: u64) -> Self {
        RingValue::from(ZnBase::new(modulus))
    }

    ///
    /// Returns the ring as a [`crate::field::Field`] if the modulus is prime, and
    /// the ring itself otherwise.
    ///
    pub fn as_field(self) -> Result<AsField<Self>, Self> {
        if is_prime(self.get_ring().modulus as i64) {
            Ok(RingValue::from(AsFieldBase::promise_is_field(self)))
        } else {
            Err(self)
        }
    }
}

impl ZnBase {

    pub fn new(modulus: u64) -> Self {
        assert!(modulus >= 2, "modulus must be at least 2");
        assert!(modulus < (1 << 62), "modulus must fit into 62 bits");
        ZnBase { modulus }
    }

    fn reduce_i128(&self, value: i128) -> u64 {
        value.rem_euclid(self.modulus as i128) as u64
    }
}

impl RingBase for ZnBase {

    type Element = u64;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        debug_assert!(*lhs < self.modulus && rhs < self.modulus);
        *lhs += rhs;
        if *lhs >= self.modulus {
            *lhs -= self.modulus;
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        if *lhs != 0 {
            *lhs = self.modulus - *lhs;
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs = ((*lhs as u128 * rhs as u128) % (self.modulus as u128)) as u64
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.from_i64(value as i64)
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        *lhs == *rhs
    }

    fn is_commutative(&self) -> bool { true }

    fn characteristic(&self) -> i64 {
        self.modulus as i64
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", *value)
    }
}

impl DivisibilityRing for ZnBase {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        let (s, _, d) = StaticRing::<i64>::RING.extended_ideal_gen(&(*rhs as i64), &(self.modulus as i64));
        let rhs_inv = self.from_i64(s);
        if *lhs % d as u64 == 0 {
            Some(self.mul(*lhs / d as u64, rhs_inv))
        } else {
            None
        }
    }
}

impl PrincipalIdealRing for ZnBase {

    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        let (s, t, d) = StaticRing::<i64>::RING.extended_ideal_gen(&(*lhs as i64), &(*rhs as i64));
        (self.from_i64(s), self.from_i64(t), self.from_i64(d))
    }
}

impl FiniteRing for ZnBase {

    fn random_element<G: FnMut() -> u64>(&self, mut rng: G) -> Self::Element {
        rng() % self.modulus
    }

    fn size(&self) -> Option<i64> {
        Some(self.modulus as i64)
    }
}

impl ComparableElRing for ZnBase {

    fn cmp_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl ZnRing for ZnBase {

    fn modulus(&self) -> i64 {
        self.modulus as i64
    }

    fn smallest_positive_lift(&self, el: &Self::Element) -> i64 {
        *el as i64
    }

    fn from_i64(&self, value: i64) -> Self::Element {
        self.reduce_i128(value as i128)
    }
}

#[cfg(test)]
use crate::rings::finite::FiniteRingStore;

#[test]
fn test_ring_axioms() {
    let ring = Zn::new(12);
    crate::ring::generic_tests::test_ring_axioms(&ring, (0..12).map(|x| ring.from_int(x)));
    crate::divisibility::generic_tests::test_divisibility_axioms(&ring, (0..12).map(|x| ring.from_int(x)));
    crate::rings::zn::generic_tests::test_zn_axioms(&ring);
    crate::rings::finite::generic_tests::test_finite_ring_axioms(&ring);

    let ring = Zn::new((1 << 62) - 57);
    crate::ring::generic_tests::test_ring_axioms(&ring, [0, 1, 2, (1 << 61), (1 << 62) - 58].into_iter());
    crate::rings::zn::generic_tests::test_zn_axioms(&ring);
}

#[test]
fn test_checked_div() {
    let ring = Zn::new(12);
    assert_el_eq!(&ring, &ring.from_int(3), &ring.checked_div(&ring.from_int(9), &ring.from_int(7)).unwrap());
    assert_el_eq!(&ring, &ring.from_int(6), &ring.mul(ring.checked_div(&ring.from_int(6), &ring.from_int(2)).unwrap(), ring.from_int(2)));
    assert!(ring.checked_div(&ring.from_int(3), &ring.from_int(2)).is_none());
    assert!(ring.checked_div(&ring.one(), &ring.zero()).is_none());
    assert!(ring.is_unit(&ring.from_int(5)));
    assert!(!ring.is_unit(&ring.from_int(4)));
}

#[test]
fn test_as_field() {
    assert!(Zn::new(12).as_field().is_err());
    assert!(Zn::new(2).as_field().is_ok());
    let Fp = Zn::new(1009).as_field().ok().unwrap();
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..10 {
        let x = Fp.random_element(|| rng.rand_u64());
        if !Fp.is_zero(&x) {
            assert!(Fp.is_unit(&x));
        }
    }
}

#[test]
fn test_from_int_negative() {
    let ring = Zn::new(7);
    assert_el_eq!(&ring, &ring.from_int(4), &ring.from_int(-3));
    assert_eq!(-3, ring.smallest_lift(&ring.from_int(4)));
    assert_eq!(3, ring.smallest_lift(&ring.from_int(3)));
}
