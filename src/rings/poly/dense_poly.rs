use std::cmp::{min, Ordering};

use crate::algorithms;
use crate::divisibility::*;
use crate::field::Field;
use crate::pid::*;
use crate::ring::*;
use crate::rings::poly::*;

///
/// The univariate polynomial ring `R[X]`. Polynomials are stored as dense vectors of
/// coefficients, in ascending order of degree.
///
/// The representation is kept normalized, i.e. the highest stored coefficient is
/// nonzero (as decided by [`RingBase::is_zero()`] of the base ring), and the zero
/// polynomial is stored as the single coefficient `0`. Hence the degree of a polynomial
/// is always one less than the number of stored coefficients, except for zero.
///
/// # Example
/// ```
/// # use ideal_arith::ring::*;
/// # use ideal_arith::rings::poly::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::primitive_int::*;
/// let ZZ = StaticRing::<i64>::RING;
/// let P = DensePolyRing::new(ZZ, "x");
/// let x_plus_1 = P.add(P.indeterminate(), P.one());
/// let binomial_coefficients = P.pow(x_plus_1, 10);
/// assert_eq!(10 * 9 * 8 * 7 * 6 / 120, *P.coefficient_at(&binomial_coefficients, 5));
/// assert_eq!("x^2 + 3x + 1", format!("{}", P.format(&P.from_coefficients(vec![1, 3, 1]))));
/// ```
///
pub struct DensePolyRingBase<R: RingStore> {
    base_ring: R,
    unknown_name: &'static str,
    zero: El<R>
}

impl<R: RingStore + Clone> Clone for DensePolyRingBase<R> {

    fn clone(&self) -> Self {
        DensePolyRingBase {
            base_ring: <R as Clone>::clone(&self.base_ring),
            unknown_name: self.unknown_name,
            zero: self.base_ring.zero()
        }
    }
}

impl<R: RingStore> PartialEq for DensePolyRingBase<R>
    where R::Type: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.base_ring.get_ring() == other.base_ring.get_ring()
    }
}

///
/// The univariate polynomial ring `R[X]`, with polynomials being stored as dense vectors of coefficients.
/// For details, see [`DensePolyRingBase`].
///
pub type DensePolyRing<R> = RingValue<DensePolyRingBase<R>>;

impl<R: RingStore> DensePolyRing<R> {

    pub fn new(base_ring: R, unknown_name: &'static str) -> Self {
        let zero = base_ring.zero();
        RingValue::from(DensePolyRingBase { base_ring, unknown_name, zero })
    }

    ///
    /// Creates the polynomial with the given coefficients, given in ascending order
    /// of degree. Trailing zeros are removed, and an empty vector gives the zero polynomial.
    ///
    pub fn from_coefficients(&self, coefficients: Vec<El<R>>) -> El<Self> {
        self.get_ring().from_coefficients(coefficients)
    }

    ///
    /// Returns the normalized coefficient vector of the polynomial, in ascending
    /// order of degree.
    ///
    pub fn coefficients<'a>(&'a self, f: &'a El<Self>) -> &'a [El<R>] {
        &f.data
    }
}

impl<R: RingStore> DensePolyRingBase<R> {

    pub fn from_coefficients(&self, coefficients: Vec<El<R>>) -> DensePolyRingEl<R> {
        let mut result = DensePolyRingEl { data: coefficients };
        self.normalize(&mut result);
        return result;
    }

    pub fn unknown_name(&self) -> &'static str {
        self.unknown_name
    }

    fn normalize(&self, f: &mut DensePolyRingEl<R>) {
        while f.data.len() > 1 && self.base_ring.is_zero(&f.data[f.data.len() - 1]) {
            f.data.pop();
        }
        if f.data.len() == 1 && self.base_ring.is_zero(&f.data[0]) {
            f.data[0] = self.base_ring.zero();
        }
        if f.data.is_empty() {
            f.data.push(self.base_ring.zero());
        }
    }

    fn is_zero_poly(&self, f: &DensePolyRingEl<R>) -> bool {
        f.data.len() == 1 && self.base_ring.is_zero(&f.data[0])
    }

    fn mul_scalar_inplace(&self, f: &mut DensePolyRingEl<R>, c: &El<R>) {
        if self.base_ring.is_zero(c) {
            *f = self.zero();
            return;
        }
        for x in f.data.iter_mut() {
            self.base_ring.mul_assign_ref(x, c);
        }
        // over rings with zero divisors, the leading coefficient might vanish
        self.normalize(f);
    }
}

///
/// An element of [`DensePolyRing`].
///
pub struct DensePolyRingEl<R: RingStore> {
    data: Vec<El<R>>
}

impl<R: RingStore> std::fmt::Debug for DensePolyRingEl<R>
    where El<R>: std::fmt::Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<R: RingStore> RingBase for DensePolyRingBase<R> {

    type Element = DensePolyRingEl<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        DensePolyRingEl { data: val.data.iter().map(|c| self.base_ring.clone_el(c)).collect() }
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            self.base_ring.add_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        for i in min(lhs.data.len(), rhs.data.len())..rhs.data.len() {
            lhs.data.push(self.base_ring.clone_el(&rhs.data[i]));
        }
        self.normalize(lhs);
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.add_assign_ref(lhs, &rhs);
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            self.base_ring.sub_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        for i in min(lhs.data.len(), rhs.data.len())..rhs.data.len() {
            lhs.data.push(self.base_ring.negate(self.base_ring.clone_el(&rhs.data[i])));
        }
        self.normalize(lhs);
    }

    fn sub_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.sub_assign_ref(lhs, &rhs);
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        for i in 0..lhs.data.len() {
            self.base_ring.negate_inplace(&mut lhs.data[i]);
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.mul_assign_ref(lhs, &rhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs = self.mul_ref(lhs, rhs);
    }

    fn zero(&self) -> Self::Element {
        DensePolyRingEl { data: vec![self.base_ring.zero()] }
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.from_coefficients(vec![self.base_ring.from_int(value)])
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            if !self.base_ring.eq_el(&lhs.data[i], &rhs.data[i]) {
                return false;
            }
        }
        let longer = if lhs.data.len() > rhs.data.len() { lhs } else { rhs };
        for i in min(lhs.data.len(), rhs.data.len())..longer.data.len() {
            if !self.base_ring.is_zero(&longer.data[i]) {
                return false;
            }
        }
        return true;
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        self.is_zero_poly(value)
    }

    fn is_commutative(&self) -> bool {
        self.base_ring.is_commutative()
    }

    fn is_approximate(&self) -> bool {
        self.base_ring.is_approximate()
    }

    fn characteristic(&self) -> i64 {
        self.base_ring.characteristic()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        super::generic_impls::dbg_poly(self, value, out, self.unknown_name)
    }

    fn square(&self, value: &mut Self::Element) {
        *value = self.mul_ref(&value, &value);
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let (Some(lhs_deg), Some(rhs_deg)) = (self.degree(lhs), self.degree(rhs)) else {
            return self.zero();
        };
        if rhs_deg == 0 {
            let mut result = self.clone_el(lhs);
            self.mul_scalar_inplace(&mut result, &rhs.data[0]);
            return result;
        } else if lhs_deg == 0 {
            let mut result = self.clone_el(rhs);
            self.mul_scalar_inplace(&mut result, &lhs.data[0]);
            return result;
        }
        let mut result = (0..=(lhs_deg + rhs_deg)).map(|_| self.base_ring.zero()).collect::<Vec<_>>();
        for i in 0..=lhs_deg {
            for j in 0..=rhs_deg {
                self.base_ring.add_assign(&mut result[i + j], self.base_ring.mul_ref(&lhs.data[i], &rhs.data[j]));
            }
        }
        let mut result = DensePolyRingEl { data: result };
        self.normalize(&mut result);
        return result;
    }

    fn mul_assign_int(&self, lhs: &mut Self::Element, rhs: i32) {
        self.mul_scalar_inplace(lhs, &self.base_ring.from_int(rhs));
    }
}

impl<R: RingStore> RingExtension for DensePolyRingBase<R> {

    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base_ring
    }

    fn from_base(&self, x: El<Self::BaseRing>) -> Self::Element {
        self.from_coefficients(vec![x])
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        self.mul_scalar_inplace(lhs, rhs);
    }
}

///
/// Iterator over all terms of an element of [`DensePolyRing`].
///
pub struct TermIterator<'a, R>
    where R: RingStore
{
    iter: std::iter::Enumerate<std::slice::Iter<'a, El<R>>>,
    ring: &'a R
}

impl<'a, R> Clone for TermIterator<'a, R>
    where R: RingStore
{
    fn clone(&self) -> Self {
        TermIterator {
            iter: self.iter.clone(),
            ring: self.ring
        }
    }
}

impl<'a, R> Iterator for TermIterator<'a, R>
    where R: RingStore
{
    type Item = (&'a El<R>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((i, c)) = self.iter.next() {
            if !self.ring.is_zero(c) {
                return Some((c, i));
            }
        }
        return None;
    }
}

impl<R> PolyRing for DensePolyRingBase<R>
    where R: RingStore
{
    type TermsIterator<'a> = TermIterator<'a, R>
        where Self: 'a;

    fn indeterminate(&self) -> Self::Element {
        DensePolyRingEl { data: vec![self.base_ring.zero(), self.base_ring.one()] }
    }

    fn terms<'a>(&'a self, f: &'a Self::Element) -> TermIterator<'a, R> {
        TermIterator {
            iter: f.data.iter().enumerate(),
            ring: self.base_ring()
        }
    }

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: IntoIterator<Item = (El<Self::BaseRing>, usize)>
    {
        for (c, i) in rhs {
            if lhs.data.len() <= i {
                lhs.data.resize_with(i + 1, || self.base_ring.zero());
            }
            self.base_ring.add_assign(&mut lhs.data[i], c);
        }
        self.normalize(lhs);
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing> {
        if i < f.data.len() {
            return &f.data[i];
        } else {
            return &self.zero;
        }
    }

    fn degree(&self, f: &Self::Element) -> Option<usize> {
        if self.is_zero_poly(f) {
            None
        } else {
            Some(f.data.len() - 1)
        }
    }

    fn mul_assign_monomial(&self, f: &mut Self::Element, power: usize) {
        if !self.is_zero_poly(f) {
            f.data.splice(0..0, (0..power).map(|_| self.base_ring.zero()));
        }
    }
}

impl<R> DivisibilityRing for DensePolyRingBase<R>
    where R: RingStore,
        R::Type: DivisibilityRing
{
    ///
    /// Exact division by repeated top-reduction. For non-field base rings, this only
    /// succeeds if all quotients of leading coefficients exist in the base ring.
    ///
    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if self.is_zero(rhs) {
            if self.is_zero(lhs) {
                return Some(self.zero());
            } else {
                return None;
            }
        }
        let (quo, rem) = algorithms::poly_div::poly_div_rem(RingRef::new(self), self.clone_el(lhs), rhs);
        if self.is_zero(&rem) {
            return Some(quo);
        } else {
            return None;
        }
    }

    fn is_unit(&self, x: &Self::Element) -> bool {
        self.degree(x) == Some(0) && self.base_ring.get_ring().is_unit(&x.data[0])
    }
}

impl<R> PrincipalIdealRing for DensePolyRingBase<R>
    where R: RingStore,
        R::Type: Field
{
    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        algorithms::eea::eea(self.clone_el(lhs), self.clone_el(rhs), RingRef::new(self))
    }
}

impl<R> EuclideanRing for DensePolyRingBase<R>
    where R: RingStore,
        R::Type: Field
{
    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        assert!(!self.is_zero(rhs), "division by zero polynomial");
        algorithms::poly_div::poly_div_rem(RingRef::new(self), lhs, rhs)
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        Some(self.degree(val).map(|d| d + 1).unwrap_or(0))
    }
}

impl<R> ComparableElRing for DensePolyRingBase<R>
    where R: RingStore,
        R::Type: ComparableElRing
{
    ///
    /// Orders polynomials first by degree (the zero polynomial being the smallest),
    /// and then lexicographically by their coefficients, starting at the constant one.
    ///
    fn cmp_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering {
        self.degree(lhs).cmp(&self.degree(rhs)).then_with(|| {
            for (l, r) in lhs.data.iter().zip(rhs.data.iter()) {
                match self.base_ring.get_ring().cmp_el(l, r) {
                    Ordering::Equal => {},
                    ord => return ord
                }
            }
            return Ordering::Equal;
        })
    }
}

#[cfg(test)]
use crate::primitive_int::StaticRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;
#[cfg(test)]
use crate::rings::float_real::Real64;

#[cfg(test)]
fn edge_case_elements<P: PolyRingStore>(poly_ring: P) -> impl Iterator<Item = El<P>>
    where P::Type: PolyRing
{
    let base_ring = poly_ring.base_ring();
    vec![
        poly_ring.from_terms([]),
        poly_ring.from_terms([(base_ring.from_int(1), 0)]),
        poly_ring.from_terms([(base_ring.from_int(1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(1), 0), (base_ring.from_int(1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(-1), 0)]),
        poly_ring.from_terms([(base_ring.from_int(-1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(-1), 0), (base_ring.from_int(1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(1), 0), (base_ring.from_int(-1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(2), 0), (base_ring.from_int(3), 2)])
    ].into_iter()
}

#[test]
fn test_ring_axioms() {
    let poly_ring = DensePolyRing::new(Zn::new(7), "X");
    crate::ring::generic_tests::test_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
    let poly_ring = DensePolyRing::new(StaticRing::<i64>::RING, "X");
    crate::ring::generic_tests::test_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
}

#[test]
fn test_poly_ring_axioms() {
    let poly_ring = DensePolyRing::new(Zn::new(7), "X");
    super::generic_tests::test_poly_ring_axioms(&poly_ring, (0..7).map(|x| Zn::new(7).from_int(x)));
}

#[test]
fn test_divisibility_ring_axioms() {
    let poly_ring = DensePolyRing::new(Zn::new(7).as_field().ok().unwrap(), "X");
    crate::divisibility::generic_tests::test_divisibility_axioms(&poly_ring, edge_case_elements(&poly_ring));
    let poly_ring = DensePolyRing::new(StaticRing::<i64>::RING, "X");
    crate::divisibility::generic_tests::test_divisibility_axioms(&poly_ring, edge_case_elements(&poly_ring));
}

#[test]
fn test_euclidean_ring_axioms() {
    let poly_ring = DensePolyRing::new(Zn::new(7).as_field().ok().unwrap(), "X");
    crate::pid::generic_tests::test_euclidean_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
    crate::pid::generic_tests::test_principal_ideal_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
}

#[test]
fn test_normalization() {
    let ZZ = StaticRing::<i64>::RING;
    let P = DensePolyRing::new(ZZ, "x");
    assert_eq!(&[0][..], P.coefficients(&P.from_coefficients(vec![])));
    assert_eq!(&[0][..], P.coefficients(&P.from_coefficients(vec![0, 0, 0])));
    assert_eq!(&[1, 2][..], P.coefficients(&P.from_coefficients(vec![1, 2, 0, 0])));
    assert_eq!(None, P.degree(&P.zero()));
    assert_eq!(Some(1), P.degree(&P.from_coefficients(vec![1, 2, 0])));

    let f = P.from_coefficients(vec![1, 2, 3]);
    let g = P.from_coefficients(vec![0, 0, -3]);
    assert_eq!(&[1, 2][..], P.coefficients(&P.add_ref(&f, &g)));
    assert!(P.is_zero(&P.sub_ref(&f, &f)));
    assert_eq!(&[0][..], P.coefficients(&P.sub_ref(&f, &f)));
}

#[test]
fn test_zero_divisors_in_base_ring() {
    let Z6 = Zn::new(6);
    let P = DensePolyRing::new(Z6, "x");
    let f = P.from_coefficients(vec![Z6.from_int(1), Z6.from_int(2)]);
    let g = P.from_coefficients(vec![Z6.from_int(1), Z6.from_int(3)]);
    // (1 + 2x)(1 + 3x) = 1 + 5x + 6x^2 = 1 + 5x
    assert_eq!(Some(1), P.degree(&P.mul_ref(&f, &g)));
    assert!(P.is_zero(&P.mul_scalar(P.clone_el(&f), &Z6.from_int(0))));
    assert_eq!(Some(0), P.degree(&P.mul_scalar(f, &Z6.from_int(3))));
}

#[test]
fn test_approximate_normalization() {
    let RR = Real64::RING;
    let P = DensePolyRing::new(RR, "x");
    let f = P.from_coefficients(vec![1., 0.1 + 0.2]);
    let g = P.from_coefficients(vec![0., 0.3]);
    assert_eq!(Some(0), P.degree(&P.sub_ref(&f, &g)));
    assert_eq!(None, P.degree(&P.from_coefficients(vec![1e-10, -1e-12])));
}

#[test]
fn test_evaluate_derivative() {
    let ZZ = StaticRing::<i64>::RING;
    let P = DensePolyRing::new(ZZ, "x");
    let f = P.from_coefficients(vec![1, -3, 0, 2]);
    assert_eq!(1 - 3 * 5 + 2 * 125, P.evaluate(&f, &5));
    assert_eq!(0, P.evaluate(&P.zero(), &5));
    assert_el_eq!(&P, &P.from_coefficients(vec![-3, 0, 6]), &P.derivative(&f));
    assert!(P.is_zero(&P.derivative(&P.from_int(7))));
}

#[test]
fn test_div_exact() {
    let ZZ = StaticRing::<i64>::RING;
    let P = DensePolyRing::new(ZZ, "x");
    let f = P.from_coefficients(vec![1, 1]);
    let g = P.from_coefficients(vec![-3, 0, 2]);
    let fg = P.mul_ref(&f, &g);
    assert_el_eq!(&P, &f, &P.div_exact(&fg, &g));
    assert_el_eq!(&P, &g, &P.div_exact(&fg, &f));
    assert!(P.checked_div(&P.from_coefficients(vec![1, 2]), &P.from_coefficients(vec![0, 2])).is_none());
}

#[test]
#[should_panic]
fn test_div_exact_inexact() {
    let ZZ = StaticRing::<i64>::RING;
    let P = DensePolyRing::new(ZZ, "x");
    P.div_exact(&P.from_coefficients(vec![1, 0, 1]), &P.from_coefficients(vec![1, 1]));
}

#[test]
fn test_format() {
    let ZZ = StaticRing::<i64>::RING;
    let P = DensePolyRing::new(ZZ, "x");
    assert_eq!("0", format!("{}", P.format(&P.zero())));
    assert_eq!("x^2 + 3x + 1", format!("{}", P.format(&P.from_coefficients(vec![1, 3, 1]))));
    assert_eq!("2x^3 + -1", format!("{}", P.format(&P.from_coefficients(vec![-1, 0, 0, 2]))));
}

#[test]
fn test_cmp_el() {
    let ZZ = StaticRing::<i64>::RING;
    let P = DensePolyRing::new(ZZ, "x");
    assert_eq!(Ordering::Less, P.cmp_el(&P.zero(), &P.from_int(-5)));
    assert_eq!(Ordering::Less, P.cmp_el(&P.from_int(7), &P.from_coefficients(vec![0, 1])));
    assert_eq!(Ordering::Less, P.cmp_el(&P.from_coefficients(vec![1, 2]), &P.from_coefficients(vec![2, 1])));
    assert_eq!(Ordering::Equal, P.cmp_el(&P.from_coefficients(vec![1, 2]), &P.from_coefficients(vec![1, 2])));
}
