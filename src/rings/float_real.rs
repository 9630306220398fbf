use std::cmp::Ordering;

use crate::divisibility::*;
use crate::field::*;
use crate::pid::*;
use crate::ring::*;

///
/// The field of real numbers, approximated by `f64`.
///
/// Elements whose absolute value is at most [`Real64Base::ZERO_TOLERANCE`] are considered
/// to be zero, and two elements are equal if their difference is considered to be zero.
/// In particular, this is how vanishing leading coefficients are detected when normalizing
/// polynomials over this ring.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Real64Base;

pub type Real64 = RingValue<Real64Base>;

impl Real64 {

    pub const RING: RingValue<Real64Base> = RingValue::from(Real64Base);
}

impl Real64Base {

    pub const ZERO_TOLERANCE: f64 = 1e-8;
}

impl RingBase for Real64Base {

    type Element = f64;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs += rhs;
    }

    fn negate_inplace(&self, x: &mut Self::Element) {
        *x = -*x;
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs *= rhs;
    }

    fn from_int(&self, value: i32) -> Self::Element {
        value as f64
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        self.is_zero(&(*lhs - *rhs))
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.abs() <= Self::ZERO_TOLERANCE
    }

    fn is_commutative(&self) -> bool { true }

    fn is_approximate(&self) -> bool { true }

    fn characteristic(&self) -> i64 { 0 }

    fn dbg<'a>(&self, x: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", x)
    }
}

impl DivisibilityRing for Real64Base {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if self.is_zero(lhs) && self.is_zero(rhs) {
            Some(self.zero())
        } else if self.is_zero(rhs) {
            None
        } else {
            Some(*lhs / *rhs)
        }
    }
}

impl PrincipalIdealRing for Real64Base {

    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        if !self.is_zero(lhs) {
            (1. / *lhs, 0., 1.)
        } else if !self.is_zero(rhs) {
            (0., 1. / *rhs, 1.)
        } else {
            (0., 0., 0.)
        }
    }
}

impl EuclideanRing for Real64Base {

    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        assert!(!self.is_zero(rhs), "division by zero");
        (lhs / *rhs, 0.)
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        if self.is_zero(val) { Some(0) } else { Some(1) }
    }
}

impl Field for Real64Base {}

impl ComparableElRing for Real64Base {

    fn cmp_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering {
        lhs.total_cmp(rhs)
    }
}

#[test]
fn test_zero_tolerance() {
    let RR = Real64::RING;
    assert!(RR.is_zero(&1e-9));
    assert!(RR.is_zero(&-1e-9));
    assert!(!RR.is_zero(&1e-7));
    assert!(RR.eq_el(&(0.1 + 0.2), &0.3));
    assert!(RR.is_approximate());
}

#[test]
fn test_division() {
    let RR = Real64::RING;
    assert_el_eq!(&RR, &2.5, &RR.div(&5., &2.));
    assert_eq!(None, RR.invert(&0.));
    assert_eq!(None, RR.checked_div(&1., &0.));
    assert_el_eq!(&RR, &0., &RR.checked_div(&0., &0.).unwrap());
    assert_el_eq!(&RR, &0., &RR.checked_div(&1e-9, &0.).unwrap());
    assert!(RR.divides(&0., &0.));
    let (s, t, d) = RR.extended_ideal_gen(&0., &4.);
    assert_el_eq!(&RR, &d, &(s * 0. + t * 4.));
    assert_el_eq!(&RR, &1., &d);
}
