use crate::algorithms::int_factor::prime_factorize;
use crate::divisibility::*;
use crate::primitive_int::StaticRingBase;
use crate::ring::*;
use crate::rings::poly::*;

///
/// This module contains [`ideal::QuadraticIdeal`], ideals of a [`QuadraticOrder`],
/// together with their factorization into prime ideals.
///
pub mod ideal;

///
/// The maximal order of the quadratic number field `Q(sqrt(d))`, for a squarefree
/// integer `d` different from `0` and `1`.
///
/// Elements are represented as `a + b w` with integers `a, b`, where the generator `w`
/// is `sqrt(d)` if `d = 2, 3 mod 4` and `(1 + sqrt(d))/2` if `d = 1 mod 4`. Hence
/// the ring is isomorphic to `Z[X]/(f)` for the minimal polynomial `f` of `w`, see
/// [`QuadraticOrder::minimal_polynomial()`].
///
/// # Example
/// ```
/// # use ideal_arith::assert_el_eq;
/// # use ideal_arith::ring::*;
/// # use ideal_arith::divisibility::*;
/// # use ideal_arith::rings::quadratic::*;
/// let ZZi = QuadraticOrder::new(-1);
/// let i = ZZi.generator();
/// assert_el_eq!(&ZZi, &ZZi.neg_one(), &ZZi.mul_ref(&i, &i));
/// let x = ZZi.from_coordinates(3, 4);
/// assert_eq!(25, ZZi.norm(&x));
/// assert!(ZZi.divides(&ZZi.from_coordinates(2, 1), &ZZi.from_int(5)));
/// ```
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct QuadraticOrderBase {
    d: i64
}

///
/// An element `a + b w` of a [`QuadraticOrder`].
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct QuadraticOrderEl {
    a: i64,
    b: i64
}

pub type QuadraticOrder = RingValue<QuadraticOrderBase>;

impl QuadraticOrder {

    pub fn new(d: i64) -> Self {
        RingValue::from(QuadraticOrderBase::new(d))
    }

    pub fn d(&self) -> i64 {
        self.get_ring().d
    }

    pub fn from_coordinates(&self, a: i64, b: i64) -> QuadraticOrderEl {
        QuadraticOrderEl { a, b }
    }

    ///
    /// Returns `(a, b)` for the element `a + b w`.
    ///
    pub fn coordinates(&self, x: &QuadraticOrderEl) -> (i64, i64) {
        (x.a, x.b)
    }

    pub fn generator(&self) -> QuadraticOrderEl {
        QuadraticOrderEl { a: 0, b: 1 }
    }

    pub fn conjugate(&self, x: &QuadraticOrderEl) -> QuadraticOrderEl {
        self.get_ring().conjugate(x)
    }

    pub fn norm(&self, x: &QuadraticOrderEl) -> i64 {
        self.get_ring().norm(x)
    }

    ///
    /// Returns the minimal polynomial of the generator `w` over `Z`, i.e. `X^2 - d`
    /// or `X^2 - X - (d - 1)/4`.
    ///
    pub fn minimal_polynomial<P>(&self, poly_ring: P) -> El<P>
        where P: RingStore,
            P::Type: PolyRing,
            <P::Type as RingExtension>::BaseRing: RingStore<Type = StaticRingBase<i64>>
    {
        let d = self.d();
        if self.get_ring().is_half_integral() {
            poly_ring.from_terms([(-(d - 1) / 4, 0), (-1, 1), (1, 2)])
        } else {
            poly_ring.from_terms([(-d, 0), (1, 2)])
        }
    }

    ///
    /// Returns the polynomial `a + bX`, which maps to `a + b w` under `Z[X] -> Z[X]/(f)`.
    ///
    pub fn to_poly<P>(&self, poly_ring: P, x: &QuadraticOrderEl) -> El<P>
        where P: RingStore,
            P::Type: PolyRing,
            <P::Type as RingExtension>::BaseRing: RingStore<Type = StaticRingBase<i64>>
    {
        poly_ring.from_terms([(x.a, 0), (x.b, 1)])
    }

    ///
    /// Returns the image of `a_0 + a_1 X + ... + a_k X^k` under `Z[X] -> Z[X]/(f)`, i.e.
    /// evaluates the polynomial at the generator.
    ///
    pub fn from_poly<P>(&self, poly_ring: P, f: &El<P>) -> QuadraticOrderEl
        where P: RingStore,
            P::Type: PolyRing,
            <P::Type as RingExtension>::BaseRing: RingStore<Type = StaticRingBase<i64>>
    {
        let w = self.generator();
        let Some(deg) = poly_ring.degree(f) else {
            return self.zero();
        };
        let mut result = self.from_coordinates(*poly_ring.coefficient_at(f, deg), 0);
        for i in (0..deg).rev() {
            self.mul_assign_ref(&mut result, &w);
            self.add_assign(&mut result, self.from_coordinates(*poly_ring.coefficient_at(f, i), 0));
        }
        return result;
    }
}

impl QuadraticOrderBase {

    pub fn new(d: i64) -> Self {
        assert!(d != 0 && d != 1, "d must be different from 0 and 1");
        assert!(prime_factorize(d.abs()).into_iter().all(|(_, e)| e == 1), "d = {} must be squarefree", d);
        QuadraticOrderBase { d }
    }

    fn is_half_integral(&self) -> bool {
        self.d.rem_euclid(4) == 1
    }

    pub fn conjugate(&self, x: &QuadraticOrderEl) -> QuadraticOrderEl {
        if self.is_half_integral() {
            // (1 + sqrt(d))/2 maps to (1 - sqrt(d))/2 = 1 - w
            QuadraticOrderEl { a: x.a + x.b, b: -x.b }
        } else {
            QuadraticOrderEl { a: x.a, b: -x.b }
        }
    }

    pub fn norm(&self, x: &QuadraticOrderEl) -> i64 {
        let result = self.mul_ref(x, &self.conjugate(x));
        debug_assert!(result.b == 0);
        return result.a;
    }
}

impl RingBase for QuadraticOrderBase {

    type Element = QuadraticOrderEl;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        lhs.a += rhs.a;
        lhs.b += rhs.b;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        lhs.a -= rhs.a;
        lhs.b -= rhs.b;
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        lhs.a = -lhs.a;
        lhs.b = -lhs.b;
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        let (a, b, c, e) = (lhs.a, lhs.b, rhs.a, rhs.b);
        if self.is_half_integral() {
            // w^2 = w + (d - 1)/4
            lhs.a = a * c + b * e * ((self.d - 1) / 4);
            lhs.b = a * e + b * c + b * e;
        } else {
            // w^2 = d
            lhs.a = a * c + b * e * self.d;
            lhs.b = a * e + b * c;
        }
    }

    fn from_int(&self, value: i32) -> Self::Element {
        QuadraticOrderEl { a: value as i64, b: 0 }
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        lhs == rhs
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn characteristic(&self) -> i64 {
        0
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        match (value.a, value.b) {
            (a, 0) => write!(out, "{}", a),
            (0, 1) => write!(out, "w"),
            (0, b) => write!(out, "{}w", b),
            (a, 1) => write!(out, "{} + w", a),
            (a, b) => write!(out, "{} + {}w", a, b)
        }
    }
}

impl DivisibilityRing for QuadraticOrderBase {

    ///
    /// Computes `lhs / rhs` as `lhs * conj(rhs) / N(rhs)`.
    ///
    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if self.is_zero(rhs) {
            return if self.is_zero(lhs) { Some(self.zero()) } else { None };
        }
        let norm = self.norm(rhs);
        let numerator = self.mul_ref(lhs, &self.conjugate(rhs));
        if numerator.a % norm == 0 && numerator.b % norm == 0 {
            Some(QuadraticOrderEl { a: numerator.a / norm, b: numerator.b / norm })
        } else {
            None
        }
    }

    fn is_unit(&self, x: &Self::Element) -> bool {
        self.norm(x).abs() == 1
    }
}

#[cfg(test)]
use crate::primitive_int::StaticRing;
#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;

#[cfg(test)]
fn edge_case_elements(ring: QuadraticOrder) -> impl Iterator<Item = QuadraticOrderEl> {
    [(0, 0), (1, 0), (-1, 0), (0, 1), (2, -1), (-3, 2), (5, 5)].into_iter().map(move |(a, b)| ring.from_coordinates(a, b))
}

#[test]
fn test_ring_axioms() {
    for d in [-5, -3, -1, 2, 5, 6] {
        let ring = QuadraticOrder::new(d);
        crate::ring::generic_tests::test_ring_axioms(&ring, edge_case_elements(ring));
        crate::divisibility::generic_tests::test_divisibility_axioms(&ring, edge_case_elements(ring));
    }
}

#[test]
fn test_mul() {
    let ring = QuadraticOrder::new(-5);
    // (1 + sqrt(-5))(1 - sqrt(-5)) = 6
    assert_el_eq!(&ring, &ring.from_int(6), &ring.mul(ring.from_coordinates(1, 1), ring.from_coordinates(1, -1)));

    // w = (1 + sqrt(-3))/2 is a primitive 6-th root of unity
    let ring = QuadraticOrder::new(-3);
    let w = ring.generator();
    assert_el_eq!(&ring, &ring.from_coordinates(-1, 1), &ring.mul_ref(&w, &w));
    assert_el_eq!(&ring, &ring.one(), &ring.pow(w, 6));
    assert!(!ring.is_one(&ring.pow(w, 3)));
}

#[test]
fn test_norm_conjugate() {
    let ring = QuadraticOrder::new(-5);
    let x = ring.from_coordinates(2, 3);
    assert_eq!(49, ring.norm(&x));
    assert_el_eq!(&ring, &ring.from_coordinates(2, -3), &ring.conjugate(&x));

    let ring = QuadraticOrder::new(5);
    // w = (1 + sqrt(5))/2 has norm -1
    assert_eq!(-1, ring.norm(&ring.generator()));
    assert_el_eq!(&ring, &ring.from_coordinates(1, -1), &ring.conjugate(&ring.generator()));
    let x = ring.from_coordinates(3, -7);
    assert_el_eq!(&ring, &x, &ring.conjugate(&ring.conjugate(&x)));
    let y = ring.from_coordinates(-2, 5);
    assert_eq!(ring.norm(&x) * ring.norm(&y), ring.norm(&ring.mul(x, y)));
}

#[test]
fn test_checked_div() {
    let ring = QuadraticOrder::new(-1);
    let x = ring.from_coordinates(2, 1);
    let y = ring.from_coordinates(2, -1);
    assert_el_eq!(&ring, &y, &ring.checked_div(&ring.from_int(5), &x).unwrap());
    assert!(ring.checked_div(&ring.from_int(3), &x).is_none());
    assert!(ring.checked_div(&ring.one(), &ring.zero()).is_none());
    assert!(ring.is_unit(&ring.generator()));
    assert!(!ring.is_unit(&ring.from_coordinates(1, 1)));

    let ring = QuadraticOrder::new(2);
    // 1 + sqrt(2) is a fundamental unit
    let unit = ring.from_coordinates(1, 1);
    assert!(ring.is_unit(&unit));
    assert_el_eq!(&ring, &ring.from_coordinates(-1, 1), &ring.checked_div(&ring.one(), &unit).unwrap());
}

#[test]
fn test_minimal_polynomial() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    for d in [-5, -3, -1, 2, 5, 13] {
        let ring = QuadraticOrder::new(d);
        let f = ring.minimal_polynomial(&ZZX);
        assert_eq!(Some(2), ZZX.degree(&f));
        assert!(ring.is_zero(&ring.from_poly(&ZZX, &f)));
        let x = ring.from_coordinates(4, -3);
        assert_el_eq!(&ring, &x, &ring.from_poly(&ZZX, &ring.to_poly(&ZZX, &x)));
    }
    let ring = QuadraticOrder::new(-3);
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![1, -1, 1]), &ring.minimal_polynomial(&ZZX));
}

#[test]
fn test_format() {
    let ring = QuadraticOrder::new(-5);
    assert_eq!("3 + -2w", format!("{}", ring.format(&ring.from_coordinates(3, -2))));
    assert_eq!("w", format!("{}", ring.format(&ring.generator())));
    assert_eq!("0", format!("{}", ring.format(&ring.zero())));
}

#[test]
#[should_panic]
fn test_not_squarefree() {
    QuadraticOrder::new(-12);
}
