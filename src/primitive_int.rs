use std::cmp::Ordering;
use std::fmt::Display;
use std::marker::PhantomData;
use std::ops::{AddAssign, SubAssign, MulAssign, Mul, Neg, Div, Rem};

use crate::algorithms;
use crate::divisibility::*;
use crate::integer::*;
use crate::pid::*;
use crate::ring::*;

///
/// Trait for the primitive signed integer types that can be used as
/// elements of a [`StaticRing`].
///
pub trait PrimitiveInt: 'static + AddAssign + SubAssign + MulAssign + Neg<Output = Self> + Mul<Self, Output = Self> + Eq + Ord + From<i32> + Into<i128> + TryFrom<i128> + Copy + Div<Self, Output = Self> + Rem<Self, Output = Self> + Display {

    fn bits() -> usize;
}

impl PrimitiveInt for i32 {
    fn bits() -> usize { Self::BITS as usize }
}

impl PrimitiveInt for i64 {
    fn bits() -> usize { Self::BITS as usize }
}

impl PrimitiveInt for i128 {
    fn bits() -> usize { Self::BITS as usize }
}

///
/// The ring of integers, represented by one of the primitive signed integer types.
/// All operations panic on overflow in debug builds, as the underlying primitive
/// operations do.
///
pub struct StaticRingBase<T> {
    element: PhantomData<T>
}

impl<T> PartialEq for StaticRingBase<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Copy for StaticRingBase<T> {}

impl<T> Clone for StaticRingBase<T> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<T> std::fmt::Debug for StaticRingBase<T> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Z")
    }
}

impl<T: PrimitiveInt> RingBase for StaticRingBase<T> {

    type Element = T;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs += rhs;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs -= rhs;
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        *lhs = -*lhs;
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs *= rhs;
    }

    fn from_int(&self, value: i32) -> Self::Element {
        T::from(value)
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        *lhs == *rhs
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn characteristic(&self) -> i64 {
        0
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", *value)
    }
}

impl<T: PrimitiveInt> DivisibilityRing for StaticRingBase<T> {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if self.is_zero(lhs) && self.is_zero(rhs) {
            return Some(self.zero());
        } else if self.is_zero(rhs) {
            return None;
        }
        let (quo, rem) = self.euclidean_div_rem(*lhs, rhs);
        if self.is_zero(&rem) {
            return Some(quo);
        } else {
            return None;
        }
    }
}

impl<T: PrimitiveInt> PrincipalIdealRing for StaticRingBase<T> {

    ///
    /// Returns `(s, t, d)` with `s * lhs + t * rhs = d`, where `d` is the
    /// nonnegative generator of the ideal `(lhs, rhs)`.
    ///
    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        let (s, t, d) = algorithms::eea::signed_eea(*lhs, *rhs, RingRef::new(self));
        if self.is_neg(&d) {
            return (-s, -t, -d);
        } else {
            return (s, t, d);
        }
    }
}

impl<T: PrimitiveInt> EuclideanRing for StaticRingBase<T> {

    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        (lhs / *rhs, lhs % *rhs)
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        let val: i128 = (*val).into();
        usize::try_from(val.unsigned_abs()).ok()
    }
}

impl<T: PrimitiveInt> ComparableElRing for StaticRingBase<T> {

    fn cmp_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl<T: PrimitiveInt> IntegerRing for StaticRingBase<T> {

    fn abs_is_bit_set(&self, value: &Self::Element, i: usize) -> bool {
        let value: i128 = (*value).into();
        i < u128::BITS as usize && (value.unsigned_abs() >> i) & 1 == 1
    }

    fn abs_highest_set_bit(&self, value: &Self::Element) -> Option<usize> {
        let value: i128 = (*value).into();
        match value.unsigned_abs() {
            0 => None,
            x => Some(u128::BITS as usize - x.leading_zeros() as usize - 1)
        }
    }

    fn is_neg(&self, value: &Self::Element) -> bool {
        *value < self.zero()
    }
}

pub type StaticRing<T> = RingValue<StaticRingBase<T>>;

impl<T: PrimitiveInt> RingValue<StaticRingBase<T>> {
    pub const RING: StaticRing<T> = RingValue::from(StaticRingBase { element: PhantomData });
}

#[test]
fn test_ring_axioms() {
    crate::ring::generic_tests::test_ring_axioms(StaticRing::<i64>::RING, [-7, -2, -1, 0, 1, 2, 3, 12].into_iter());
    crate::ring::generic_tests::test_ring_axioms(StaticRing::<i128>::RING, [-7, -1, 0, 1, 5].into_iter());
}

#[test]
fn test_divisibility_axioms() {
    crate::divisibility::generic_tests::test_divisibility_axioms(StaticRing::<i64>::RING, [-12, -3, -1, 0, 1, 2, 6, 7].into_iter());
}

#[test]
fn test_euclidean_axioms() {
    crate::pid::generic_tests::test_euclidean_ring_axioms(StaticRing::<i64>::RING, [-12, -3, -1, 0, 1, 2, 6, 7].into_iter());
    crate::pid::generic_tests::test_principal_ideal_ring_axioms(StaticRing::<i64>::RING, [-12, -3, -1, 0, 1, 2, 6, 7].into_iter());
}

#[test]
fn test_extended_ideal_gen_sign() {
    let ZZ = StaticRing::<i64>::RING;
    for (a, b) in [(12, 8), (-12, 8), (12, -8), (-12, -8), (0, -5), (-5, 0), (0, 0), (7, 1)] {
        let (s, t, d) = ZZ.extended_ideal_gen(&a, &b);
        assert!(d >= 0);
        assert_eq!(d, s * a + t * b);
        assert!(a == 0 || a % d == 0);
        assert!(b == 0 || b % d == 0);
    }
    assert_eq!(4, ZZ.ideal_gen(&12, &-8));
}

#[test]
fn test_checked_div() {
    let ZZ = StaticRing::<i64>::RING;
    assert_eq!(Some(-3), ZZ.checked_div(&12, &-4));
    assert_eq!(None, ZZ.checked_div(&12, &5));
    assert_eq!(None, ZZ.checked_div(&12, &0));
    assert_eq!(Some(0), ZZ.checked_div(&0, &0));
    assert!(ZZ.is_unit(&-1));
    assert!(!ZZ.is_unit(&2));
    assert!(!ZZ.is_approximate());
    assert_eq!(0, ZZ.characteristic());
}
