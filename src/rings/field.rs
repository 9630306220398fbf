use std::cmp::Ordering;

use crate::divisibility::*;
use crate::field::Field;
use crate::pid::{EuclideanRing, PrincipalIdealRing};
use crate::ring::*;
use crate::rings::finite::FiniteRing;
use crate::rings::zn::ZnRing;

///
/// A wrapper around a ring that is known to be a field, and exposes its field structure.
///
/// This is used to turn `Z/pZ` into a [`Field`] once `p` has been checked to be prime,
/// see [`crate::rings::zn::zn_64::Zn::as_field()`]. Elements are the elements of the
/// underlying ring.
///
#[derive(Clone, Copy, Debug)]
pub struct AsFieldBase<R: RingStore>
    where R::Type: DivisibilityRing
{
    base: R
}

impl<R> PartialEq for AsFieldBase<R>
    where R: RingStore,
        R::Type: DivisibilityRing + PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.base.get_ring() == other.base.get_ring()
    }
}

#[allow(type_alias_bounds)]
pub type AsField<R: RingStore> = RingValue<AsFieldBase<R>>;

impl<R: RingStore> AsFieldBase<R>
    where R::Type: DivisibilityRing
{
    ///
    /// Users should be careful to only use this with rings that are fields. This cannot
    /// be checked in here, so must be checked by the caller.
    ///
    pub fn promise_is_field(base: R) -> Self {
        Self { base }
    }

    pub fn get_delegate(&self) -> &R {
        &self.base
    }

    pub fn unwrap_self(self) -> R {
        self.base
    }
}

impl<R: RingStore> RingBase for AsFieldBase<R>
    where R::Type: DivisibilityRing
{
    type Element = El<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        self.base.clone_el(val)
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base.add_assign_ref(lhs, rhs)
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.base.add_assign(lhs, rhs)
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base.sub_assign_ref(lhs, rhs)
    }

    fn sub_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.base.sub_assign(lhs, rhs)
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        self.base.negate_inplace(lhs)
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.base.mul_assign(lhs, rhs)
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base.mul_assign_ref(lhs, rhs)
    }

    fn zero(&self) -> Self::Element {
        self.base.zero()
    }

    fn one(&self) -> Self::Element {
        self.base.one()
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.base.from_int(value)
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        self.base.eq_el(lhs, rhs)
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        self.base.is_zero(value)
    }

    fn is_commutative(&self) -> bool {
        self.base.is_commutative()
    }

    fn is_approximate(&self) -> bool {
        self.base.is_approximate()
    }

    fn characteristic(&self) -> i64 {
        self.base.characteristic()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        self.base.get_ring().dbg(value, out)
    }
}

impl<R: RingStore> DivisibilityRing for AsFieldBase<R>
    where R::Type: DivisibilityRing
{
    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        self.base.checked_div(lhs, rhs)
    }

    fn is_unit(&self, x: &Self::Element) -> bool {
        !self.is_zero(x)
    }
}

impl<R: RingStore> PrincipalIdealRing for AsFieldBase<R>
    where R::Type: DivisibilityRing
{
    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        if let Some(inv) = self.checked_div(&self.one(), lhs) {
            (inv, self.zero(), self.one())
        } else if let Some(inv) = self.checked_div(&self.one(), rhs) {
            (self.zero(), inv, self.one())
        } else {
            (self.zero(), self.zero(), self.zero())
        }
    }
}

impl<R: RingStore> EuclideanRing for AsFieldBase<R>
    where R::Type: DivisibilityRing
{
    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        assert!(!self.is_zero(rhs), "division by zero");
        match self.checked_div(&lhs, rhs) {
            Some(quo) => (quo, self.zero()),
            None => panic!("ring is not a field, {} has no inverse", RingRef::new(self).format(rhs))
        }
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        if self.is_zero(val) { Some(0) } else { Some(1) }
    }
}

impl<R: RingStore> Field for AsFieldBase<R>
    where R::Type: DivisibilityRing
{}

impl<R: RingStore> FiniteRing for AsFieldBase<R>
    where R::Type: DivisibilityRing + FiniteRing
{
    fn random_element<G: FnMut() -> u64>(&self, rng: G) -> Self::Element {
        self.base.get_ring().random_element(rng)
    }

    fn size(&self) -> Option<i64> {
        self.base.get_ring().size()
    }
}

impl<R: RingStore> ComparableElRing for AsFieldBase<R>
    where R::Type: DivisibilityRing + ComparableElRing
{
    fn cmp_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering {
        self.base.get_ring().cmp_el(lhs, rhs)
    }
}

impl<R: RingStore> ZnRing for AsFieldBase<R>
    where R::Type: ZnRing
{
    fn modulus(&self) -> i64 {
        self.base.get_ring().modulus()
    }

    fn smallest_positive_lift(&self, el: &Self::Element) -> i64 {
        self.base.get_ring().smallest_positive_lift(el)
    }

    fn from_i64(&self, value: i64) -> Self::Element {
        self.base.get_ring().from_i64(value)
    }
}

#[cfg(test)]
use crate::rings::zn::zn_64::Zn;

#[test]
fn test_field_axioms() {
    let Fp = Zn::new(7).as_field().ok().unwrap();
    crate::ring::generic_tests::test_ring_axioms(&Fp, (0..7).map(|x| Fp.from_int(x)));
    crate::pid::generic_tests::test_euclidean_ring_axioms(&Fp, (0..7).map(|x| Fp.from_int(x)));
    crate::pid::generic_tests::test_principal_ideal_ring_axioms(&Fp, (0..7).map(|x| Fp.from_int(x)));
    crate::rings::finite::generic_tests::test_finite_ring_axioms(&Fp);
}
