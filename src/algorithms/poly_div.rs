use crate::divisibility::*;
use crate::ring::*;
use crate::rings::poly::*;

///
/// If `divisor` top-reduces `target`, returns the factor `c` and the shift `k` such that
/// the leading term of `target` is the leading term of `c * X^k * divisor`.
///
fn top_reduction_factor<P>(poly_ring: &P, divisor: &El<P>, target: &El<P>) -> Option<(El<<P::Type as RingExtension>::BaseRing>, usize)>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    let divisor_deg = poly_ring.degree(divisor)?;
    let target_deg = poly_ring.degree(target)?;
    if target_deg < divisor_deg {
        return None;
    }
    let factor = poly_ring.base_ring().checked_div(poly_ring.coefficient_at(target, target_deg), poly_ring.coefficient_at(divisor, divisor_deg))?;
    return Some((factor, target_deg - divisor_deg));
}

///
/// Returns whether `divisor` top-reduces `target`, i.e. whether the leading term of `target`
/// is a multiple of the leading term of `divisor`.
///
/// This is the case if and only if `divisor` is nonzero, `deg(target) >= deg(divisor)`
/// and the leading coefficient of `divisor` divides the leading coefficient of `target`.
/// Over a field, the last condition always holds.
///
/// # Example
/// ```
/// # use ideal_arith::ring::*;
/// # use ideal_arith::algorithms::poly_div::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::primitive_int::*;
/// let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
/// let f = ZZX.from_coefficients(vec![1, 0, 4]);
/// assert!(top_reduces(&ZZX, &ZZX.from_coefficients(vec![3, 2]), &f));
/// assert!(!top_reduces(&ZZX, &ZZX.from_coefficients(vec![3, 3]), &f));
/// assert!(!top_reduces(&ZZX, &ZZX.zero(), &f));
/// ```
///
pub fn top_reduces<P>(poly_ring: P, divisor: &El<P>, target: &El<P>) -> bool
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    top_reduction_factor(&poly_ring, divisor, target).is_some()
}

///
/// Eliminates the leading term of `target` by subtracting a suitable multiple `c * X^k * divisor`.
///
/// Panics if `divisor` does not top-reduce `target`, see [`top_reduces()`].
///
pub fn top_reduction_by<P>(poly_ring: P, mut target: El<P>, divisor: &El<P>) -> El<P>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    let Some((factor, shift)) = top_reduction_factor(&poly_ring, divisor, &target) else {
        panic!("{} does not top-reduce {}", poly_ring.format(divisor), poly_ring.format(&target));
    };
    let target_deg = poly_ring.degree(&target);
    subtract_shifted_multiple(&poly_ring, &mut target, divisor, &factor, shift);
    assert!(poly_ring.degree(&target) < target_deg, "leading term was not eliminated, the base ring might be too imprecise");
    return target;
}

///
/// Subtracts `factor * X^shift * divisor` from `target`, where this is supposed to eliminate the
/// leading term of `target`.
///
/// Over approximate rings, rounding errors might leave a small but nonzero leading coefficient,
/// which is then cancelled explicitly.
///
fn subtract_shifted_multiple<P>(poly_ring: &P, target: &mut El<P>, divisor: &El<P>, factor: &El<<P::Type as RingExtension>::BaseRing>, shift: usize)
    where P: RingStore,
        P::Type: PolyRing
{
    let base_ring = poly_ring.base_ring();
    let target_deg = poly_ring.degree(target);
    let neg_factor = base_ring.negate(base_ring.clone_el(factor));
    poly_ring.get_ring().add_assign_from_terms(target, poly_ring.terms(divisor).map(|(c, j)| (base_ring.mul_ref(&neg_factor, c), j + shift)));
    if let Some(d) = target_deg {
        if base_ring.is_approximate() && poly_ring.degree(target) == Some(d) {
            let residue = base_ring.negate(base_ring.clone_el(poly_ring.coefficient_at(target, d)));
            poly_ring.get_ring().add_assign_from_terms(target, [(residue, d)]);
        }
    }
}

///
/// Reduces `f` by the given basis, until no basis element top-reduces it anymore.
///
/// The reduction proceeds in passes. In each pass, the basis elements are considered
/// in order, and every one that top-reduces the current value is applied once. The
/// computation stops after a pass in which no reduction happened, or as soon as the
/// value becomes zero. Zero basis elements are ignored.
///
/// # Example
/// ```
/// # use ideal_arith::ring::*;
/// # use ideal_arith::algorithms::poly_div::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::primitive_int::*;
/// let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
/// let basis = [ZZX.from_coefficients(vec![-1, 1]), ZZX.from_int(3)];
/// let f = ZZX.from_coefficients(vec![5, 0, 1]);
/// // x^2 + 5 = (x + 1)(x - 1) + 6
/// assert!(ZZX.is_zero(&normal_form(&ZZX, f, &basis)));
/// ```
///
pub fn normal_form<P>(poly_ring: P, mut f: El<P>, basis: &[El<P>]) -> El<P>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    while !poly_ring.is_zero(&f) {
        let mut reduced = false;
        for g in basis {
            if top_reduces(&poly_ring, g, &f) {
                f = top_reduction_by(&poly_ring, f, g);
                reduced = true;
            }
        }
        if !reduced {
            break;
        }
    }
    return f;
}

///
/// Computes `q, r` with `lhs = q * rhs + r`, by top-reducing `lhs` with `rhs` as long as
/// possible. The quotient coefficients are produced from the highest to the lowest degree.
///
/// If the base ring is a field, this is the standard polynomial division and `deg(r) < deg(rhs)`.
/// Otherwise, the reduction stops as soon as the leading coefficient of the remainder is
/// not divisible by the leading coefficient of `rhs`, and `deg(r) >= deg(rhs)` is possible.
///
/// Panics if `rhs` is zero.
///
pub fn poly_div_rem<P>(poly_ring: P, lhs: El<P>, rhs: &El<P>) -> (El<P>, El<P>)
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    assert!(!poly_ring.is_zero(rhs), "division by zero polynomial");
    let mut quotient = poly_ring.zero();
    let mut remainder = lhs;
    while let Some((factor, shift)) = top_reduction_factor(&poly_ring, rhs, &remainder) {
        let remainder_deg = poly_ring.degree(&remainder);
        subtract_shifted_multiple(&poly_ring, &mut remainder, rhs, &factor, shift);
        assert!(poly_ring.degree(&remainder) < remainder_deg, "leading term was not eliminated, the base ring might be too imprecise");
        poly_ring.get_ring().add_assign_from_terms(&mut quotient, [(factor, shift)]);
    }
    return (quotient, remainder);
}

///
/// Computes the remainder of `lhs` modulo `rhs` by repeated top-reduction, see [`poly_div_rem()`].
///
pub fn poly_rem<P>(poly_ring: P, mut lhs: El<P>, rhs: &El<P>) -> El<P>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    assert!(!poly_ring.is_zero(rhs), "division by zero polynomial");
    while top_reduces(&poly_ring, rhs, &lhs) {
        lhs = top_reduction_by(&poly_ring, lhs, rhs);
    }
    return lhs;
}

///
/// Computes `lhs / rhs`, assuming that `rhs` divides `lhs`. Panics if this is not the case.
///
/// If the base ring is approximate, the size of the rounding errors in the remainder depends
/// on the size of the coefficients, so the remainder is not checked and divisibility is only
/// assumed.
///
pub fn poly_div_exact<P>(poly_ring: P, lhs: &El<P>, rhs: &El<P>) -> El<P>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    let (quotient, remainder) = poly_div_rem(&poly_ring, poly_ring.clone_el(lhs), rhs);
    assert!(poly_ring.base_ring().is_approximate() || poly_ring.is_zero(&remainder), "{} is not divisible by {}", poly_ring.format(lhs), poly_ring.format(rhs));
    return quotient;
}

#[cfg(test)]
use crate::primitive_int::StaticRing;
#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;
#[cfg(test)]
use crate::rings::float_real::Real64;

#[test]
fn test_top_reduces() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let f = ZZX.from_coefficients(vec![1, 2, 6]);
    assert!(top_reduces(&ZZX, &ZZX.from_coefficients(vec![5, 3]), &f));
    assert!(top_reduces(&ZZX, &ZZX.from_int(-2), &f));
    assert!(top_reduces(&ZZX, &f, &f));
    assert!(!top_reduces(&ZZX, &ZZX.from_coefficients(vec![5, 4]), &f));
    assert!(!top_reduces(&ZZX, &ZZX.from_coefficients(vec![0, 0, 0, 1]), &f));
    assert!(!top_reduces(&ZZX, &ZZX.zero(), &f));
    assert!(!top_reduces(&ZZX, &f, &ZZX.zero()));

    let F7 = Zn::new(7).as_field().ok().unwrap();
    let F7X = DensePolyRing::new(F7, "x");
    let f = F7X.from_coefficients(vec![F7.from_int(1), F7.from_int(2), F7.from_int(6)]);
    assert!(top_reduces(&F7X, &F7X.from_coefficients(vec![F7.from_int(5), F7.from_int(4)]), &f));
}

#[test]
fn test_top_reduction_by() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let f = ZZX.from_coefficients(vec![1, 2, 6]);
    let g = ZZX.from_coefficients(vec![5, 3]);
    // 6x^2 + 2x + 1 - 2x(3x + 5) = -8x + 1
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![1, -8]), &top_reduction_by(&ZZX, ZZX.clone_el(&f), &g));
    assert!(ZZX.is_zero(&top_reduction_by(&ZZX, ZZX.clone_el(&f), &f)));

    let mut current = ZZX.clone_el(&f);
    let divisor = ZZX.from_coefficients(vec![1, 1]);
    while top_reduces(&ZZX, &divisor, &current) {
        let next = top_reduction_by(&ZZX, ZZX.clone_el(&current), &divisor);
        assert!(ZZX.degree(&next) < ZZX.degree(&current));
        current = next;
    }
    // 6 - 2 + 1
    assert_el_eq!(&ZZX, &ZZX.from_int(5), &current);
}

#[test]
#[should_panic]
fn test_top_reduction_by_not_reducing() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    top_reduction_by(&ZZX, ZZX.from_coefficients(vec![1, 3]), &ZZX.from_coefficients(vec![1, 2]));
}

#[test]
#[should_panic]
fn test_top_reduction_by_zero() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    top_reduction_by(&ZZX, ZZX.from_coefficients(vec![1, 3]), &ZZX.zero());
}

#[test]
fn test_normal_form() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let basis = [ZZX.from_coefficients(vec![1, 0, 1]), ZZX.from_coefficients(vec![0, 2])];
    let f = ZZX.from_coefficients(vec![3, 1, 0, 1]);
    // x^3 + x + 3 - x(x^2 + 1) = 3
    let nf = normal_form(&ZZX, ZZX.clone_el(&f), &basis);
    assert_el_eq!(&ZZX, &ZZX.from_int(3), &nf);
    assert_el_eq!(&ZZX, &nf, &normal_form(&ZZX, ZZX.clone_el(&nf), &basis));

    // the x-coefficient 3 is not divisible by 2
    let f = ZZX.from_coefficients(vec![0, 3]);
    assert_el_eq!(&ZZX, &f, &normal_form(&ZZX, ZZX.clone_el(&f), &basis));
    assert!(ZZX.is_zero(&normal_form(&ZZX, ZZX.zero(), &basis)));
    assert_el_eq!(&ZZX, &f, &normal_form(&ZZX, ZZX.clone_el(&f), &[]));
    assert_el_eq!(&ZZX, &f, &normal_form(&ZZX, ZZX.clone_el(&f), &[ZZX.zero()]));
}

#[test]
fn test_normal_form_applies_all_reducers_per_pass() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let basis = [ZZX.from_coefficients(vec![1, 1]), ZZX.from_coefficients(vec![0, 2])];
    // x + 1 turns 2x^2 into -2x, which 2x then reduces to zero within the same pass;
    // reducing only with the first match each time would end at 2 instead
    assert!(ZZX.is_zero(&normal_form(&ZZX, ZZX.from_coefficients(vec![0, 0, 2]), &basis)));
    assert_el_eq!(&ZZX, &ZZX.from_int(2), &normal_form(&ZZX, ZZX.from_coefficients(vec![0, -2]), &basis[..1]));
}

#[test]
fn test_poly_div_rem() {
    let F7 = Zn::new(7).as_field().ok().unwrap();
    let F7X = DensePolyRing::new(F7, "x");
    let f = F7X.from_coefficients(vec![F7.from_int(1), F7.from_int(2), F7.from_int(3), F7.from_int(4)]);
    let g = F7X.from_coefficients(vec![F7.from_int(6), F7.from_int(2)]);
    let (q, r) = poly_div_rem(&F7X, F7X.clone_el(&f), &g);
    assert_eq!(Some(2), F7X.degree(&q));
    assert!(F7X.degree(&r).unwrap_or(0) < 1);
    assert_el_eq!(&F7X, &f, &F7X.add(F7X.mul_ref(&q, &g), r));
    assert_el_eq!(&F7X, &poly_rem(&F7X, F7X.clone_el(&f), &g), &poly_div_rem(&F7X, F7X.clone_el(&f), &g).1);

    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let f = ZZX.from_coefficients(vec![1, 1, 4]);
    let g = ZZX.from_coefficients(vec![1, 2]);
    let (q, r) = poly_div_rem(&ZZX, ZZX.clone_el(&f), &g);
    // 4x^2 + x + 1 = 2x(2x + 1) - x + 1, and 2 does not divide -1
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![0, 2]), &q);
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![1, -1]), &r);
}

#[test]
fn test_poly_div_exact() {
    let F7 = Zn::new(7).as_field().ok().unwrap();
    let F7X = DensePolyRing::new(F7, "x");
    let f = F7X.from_coefficients(vec![F7.from_int(3), F7.from_int(0), F7.from_int(5)]);
    let g = F7X.from_coefficients(vec![F7.from_int(1), F7.from_int(4), F7.from_int(1), F7.from_int(2)]);
    assert_el_eq!(&F7X, &f, &poly_div_exact(&F7X, &F7X.mul_ref(&f, &g), &g));
    assert_el_eq!(&F7X, &g, &poly_div_exact(&F7X, &F7X.mul_ref(&f, &g), &f));

    let RX = DensePolyRing::new(Real64::RING, "x");
    let f = RX.from_coefficients(vec![0.5, -1.25, 3.]);
    let g = RX.from_coefficients(vec![2., 0.1]);
    assert_el_eq!(&RX, &f, &poly_div_exact(&RX, &RX.mul_ref(&f, &g), &g));
}

#[test]
fn test_poly_div_exact_large_float_coefficients() {
    let RX = DensePolyRing::new(Real64::RING, "x");
    let assert_coefficients_close = |expected: &El<DensePolyRing<Real64>>, actual: &El<DensePolyRing<Real64>>| {
        assert_eq!(RX.degree(expected), RX.degree(actual));
        for i in 0..=RX.degree(expected).unwrap_or(0) {
            let (e, a) = (*RX.coefficient_at(expected, i), *RX.coefficient_at(actual, i));
            assert!((e - a).abs() <= 1e-6 * e.abs().max(1.), "expected {}, got {}", RX.format(expected), RX.format(actual));
        }
    };

    let f = RX.from_coefficients(vec![-824.18, 194.88, 322.91, 562.72]);
    let g = RX.from_coefficients(vec![473.93, -859.60, -92.12]);
    let fg = RX.mul_ref(&f, &g);
    assert_coefficients_close(&f, &poly_div_exact(&RX, &fg, &g));
    assert_coefficients_close(&g, &poly_div_exact(&RX, &fg, &f));
    assert_eq!(Some(4), RX.degree(&top_reduction_by(&RX, RX.clone_el(&fg), &g)));

    let mut rng = oorandom::Rand64::new(1);
    let mut random_coefficient = || 2000. * rng.rand_float() - 1000.;
    for _ in 0..200 {
        let f = RX.from_coefficients((0..4).map(|_| random_coefficient()).collect());
        let mut g_coeffs: Vec<f64> = (0..3).map(|_| random_coefficient()).collect();
        // keep the leading coefficient away from zero, so the quotient is well-conditioned
        g_coeffs[2] = g_coeffs[2].signum() * (g_coeffs[2].abs() + 100.);
        let g = RX.from_coefficients(g_coeffs);
        let (q, _) = poly_div_rem(&RX, RX.mul_ref(&f, &g), &g);
        assert_coefficients_close(&f, &q);
        assert_coefficients_close(&f, &poly_div_exact(&RX, &RX.mul_ref(&f, &g), &g));
    }
}
