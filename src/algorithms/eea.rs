use crate::field::Field;
use crate::integer::*;
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::*;

use std::mem::swap;

///
/// For a, b computes s, t, d such that `s*a + t*b == d` is a greatest
/// common divisor of a and b. d is only unique up to units, and s, t
/// are not unique at all. No guarantees are given on which
/// of these solutions is returned. For integers, see [`signed_eea()`]
/// which gives more guarantees.
///
/// The given ring must be euclidean.
///
pub fn eea<R>(fst: El<R>, snd: El<R>, ring: R) -> (El<R>, El<R>, El<R>)
    where R: RingStore,
        R::Type: EuclideanRing
{
    let (mut a, mut b) = (fst, snd);

    let (mut sa, mut ta) = (ring.one(), ring.zero());
    let (mut sb, mut tb) = (ring.zero(), ring.one());

    while !ring.is_zero(&b) {
        let (quo, rem) = ring.euclidean_div_rem(a, &b);
        ta = ring.sub(ta, ring.mul_ref(&quo, &tb));
        sa = ring.sub(sa, ring.mul_ref(&quo, &sb));
        a = rem;

        swap(&mut a, &mut b);
        swap(&mut sa, &mut sb);
        swap(&mut ta, &mut tb);
    }
    return (sa, ta, a);
}

///
/// For integers a, b finds integers s, t so that `s*a + t*b == gcd(a, b)`,
/// where the sign of the greatest common divisor matches the sign of a.
///
/// In particular, have
/// ```
/// # use ideal_arith::algorithms::eea::*;
/// # use ideal_arith::primitive_int::*;
/// assert_eq!(2, signed_gcd(6, 8, &StaticRing::<i64>::RING));
/// assert_eq!(0, signed_gcd(0, 0, &StaticRing::<i64>::RING));
/// assert_eq!(5, signed_gcd(0, -5, &StaticRing::<i64>::RING));
/// assert_eq!(-5, signed_gcd(-5, 0, &StaticRing::<i64>::RING));
/// assert_eq!(-2, signed_gcd(-6, 8, &StaticRing::<i64>::RING));
/// ```
///
pub fn signed_eea<R>(fst: El<R>, snd: El<R>, ring: R) -> (El<R>, El<R>, El<R>)
    where R: RingStore,
        R::Type: IntegerRing
{
    if ring.is_zero(&fst) {
        if ring.is_zero(&snd) {
            return (ring.zero(), ring.zero(), ring.zero());
        } else if ring.is_neg(&snd) {
            return (ring.zero(), ring.neg_one(), ring.negate(snd));
        } else {
            return (ring.zero(), ring.one(), snd);
        }
    }
    let fst_negative = ring.is_neg(&fst);

    let (s, t, d) = eea(fst, snd, &ring);

    // the sign is not consistent (potentially toggled each iteration),
    // so normalize here
    if ring.is_neg(&d) == fst_negative {
        return (s, t, d);
    } else {
        return (ring.negate(s), ring.negate(t), ring.negate(d));
    }
}

///
/// Computes the greatest common divisor of a and b in a euclidean ring.
/// The result is only unique up to units.
///
pub fn gcd<R>(a: El<R>, b: El<R>, ring: R) -> El<R>
    where R: RingStore,
        R::Type: EuclideanRing
{
    let (mut a, mut b) = (a, b);
    while !ring.is_zero(&b) {
        let rem = ring.euclidean_rem(a, &b);
        a = b;
        b = rem;
    }
    return a;
}

///
/// Computes the greatest common divisor of integers, whose sign matches the sign of a.
/// See also [`signed_eea()`].
///
pub fn signed_gcd<R>(a: El<R>, b: El<R>, ring: R) -> El<R>
    where R: RingStore,
        R::Type: IntegerRing
{
    signed_eea(a, b, ring).2
}

///
/// Computes the nonnegative least common multiple of integers.
///
pub fn signed_lcm<R>(fst: El<R>, snd: El<R>, ring: R) -> El<R>
    where R: RingStore,
        R::Type: IntegerRing
{
    if ring.is_zero(&fst) || ring.is_zero(&snd) {
        return ring.zero();
    }
    let d = signed_gcd(ring.clone_el(&fst), ring.clone_el(&snd), &ring);
    ring.abs(ring.mul(ring.euclidean_div(fst, &d), snd))
}

///
/// Returns `(x, y)` with `a * x + b * y = gcd(a, b)`, where the gcd is nonnegative.
/// If `a = b = 0`, then `(x, y)` is unspecified and `gcd(a, b) = 0`.
///
/// # Example
/// ```
/// # use ideal_arith::algorithms::eea::*;
/// let (x, y) = solve_linear_diophantine(12, 8);
/// assert_eq!(4, 12 * x + 8 * y);
/// ```
///
pub fn solve_linear_diophantine(a: i64, b: i64) -> (i64, i64) {
    let (x, y, _) = StaticRing::<i64>::RING.extended_ideal_gen(&a, &b);
    return (x, y);
}

///
/// Computes the monic greatest common divisor of two polynomials over a field.
/// If both are zero, zero is returned.
///
pub fn poly_gcd_monic<P>(poly_ring: P, a: &El<P>, b: &El<P>) -> El<P>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let d = gcd(poly_ring.clone_el(a), poly_ring.clone_el(b), &poly_ring);
    if poly_ring.is_zero(&d) {
        return d;
    }
    return poly_ring.monicize(d);
}

#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;

#[test]
fn test_eea_sign() {
    assert_eq!((2, -1, 1), signed_eea(3, 5, StaticRing::<i64>::RING));
    assert_eq!((-1, 1, 2), signed_eea(6, 8, StaticRing::<i64>::RING));
    assert_eq!((0, 0, 0), signed_eea(0, 0, StaticRing::<i64>::RING));
    let (s, t, d) = signed_eea(-6, 8, StaticRing::<i64>::RING);
    assert_eq!(-2, d);
    assert_eq!(d, s * -6 + t * 8);
}

#[test]
fn test_signed_lcm() {
    assert_eq!(24, signed_lcm(6, 8, StaticRing::<i64>::RING));
    assert_eq!(24, signed_lcm(-6, 8, StaticRing::<i64>::RING));
    assert_eq!(0, signed_lcm(0, 8, StaticRing::<i64>::RING));
}

#[test]
fn test_solve_linear_diophantine() {
    let (x, y) = solve_linear_diophantine(12, 8);
    assert_eq!(4, 12 * x + 8 * y);
    let (x, y) = solve_linear_diophantine(-12, 8);
    assert_eq!(4, -12 * x + 8 * y);
    let (x, y) = solve_linear_diophantine(7, 0);
    assert_eq!(7, 7 * x + 0 * y);
    let (x, y) = solve_linear_diophantine(0, -3);
    assert_eq!(3, 0 * x - 3 * y);
    let (x, y) = solve_linear_diophantine(35, 15);
    assert_eq!(5, 35 * x + 15 * y);
}

#[test]
fn test_poly_gcd_monic() {
    let Fp = Zn::new(5).as_field().ok().unwrap();
    let P = DensePolyRing::new(Fp, "x");
    let f = P.from_coefficients(vec![Fp.from_int(1), Fp.from_int(1)]);
    let g = P.from_coefficients(vec![Fp.from_int(2), Fp.from_int(1)]);
    let h = P.from_coefficients(vec![Fp.from_int(3), Fp.from_int(0), Fp.from_int(1)]);
    let a = P.mul_ref(&P.mul_ref(&f, &g), &P.from_int(3));
    let b = P.mul_ref(&f, &h);
    assert_el_eq!(&P, &f, &poly_gcd_monic(&P, &a, &b));
    assert_el_eq!(&P, &P.one(), &poly_gcd_monic(&P, &g, &h));
    assert_el_eq!(&P, &P.monicize(P.clone_el(&a)), &poly_gcd_monic(&P, &a, &P.zero()));
    assert!(P.is_zero(&poly_gcd_monic(&P, &P.zero(), &P.zero())));
}
