use crate::algorithms::poly_div::*;
use crate::computation::*;
use crate::divisibility::*;
use crate::pid::*;
use crate::primitive_int::*;
use crate::ring::*;
use crate::rings::poly::*;

use std::cmp::max;

fn nonzero_leading_term<P>(poly_ring: &P, f: &El<P>) -> (usize, El<<P::Type as RingExtension>::BaseRing>)
    where P: RingStore,
        P::Type: PolyRing
{
    let Some(deg) = poly_ring.degree(f) else {
        panic!("S- and G-polynomials are only defined for nonzero polynomials");
    };
    (deg, poly_ring.base_ring().clone_el(poly_ring.coefficient_at(f, deg)))
}

fn shifted_multiple<P>(poly_ring: &P, f: &El<P>, factor: &El<<P::Type as RingExtension>::BaseRing>, shift: usize) -> El<P>
    where P: RingStore,
        P::Type: PolyRing
{
    let mut result = poly_ring.mul_scalar(poly_ring.clone_el(f), factor);
    poly_ring.mul_assign_monomial(&mut result, shift);
    return result;
}

///
/// Computes the S-polynomial `(a/lc(f)) f - (a/lc(g)) g` of nonzero `f, g`, where both
/// summands are shifted to the larger degree and `a` is the least common multiple
/// of the leading coefficients. Hence the leading terms cancel.
///
pub fn spoly<P>(poly_ring: P, f: &El<P>, g: &El<P>) -> El<P>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: PrincipalIdealRing
{
    let base_ring = poly_ring.base_ring();
    let (f_deg, f_lc) = nonzero_leading_term(&poly_ring, f);
    let (g_deg, g_lc) = nonzero_leading_term(&poly_ring, g);
    let d = base_ring.ideal_gen(&f_lc, &g_lc);
    let (Some(f_factor), Some(g_factor)) = (base_ring.checked_div(&g_lc, &d), base_ring.checked_div(&f_lc, &d)) else {
        unreachable!("the ideal generator of two elements divides both of them")
    };
    let deg = max(f_deg, g_deg);
    return poly_ring.sub(
        shifted_multiple(&poly_ring, f, &f_factor, deg - f_deg),
        shifted_multiple(&poly_ring, g, &g_factor, deg - g_deg)
    );
}

///
/// Computes the G-polynomial `s f + t g` of nonzero `f, g`, where both summands are
/// shifted to the larger degree and `s lc(f) + t lc(g)` is a generator of the ideal
/// generated by the leading coefficients.
///
/// Over rings that are not fields, this is required to find polynomials whose leading
/// coefficient is the gcd of existing leading coefficients.
///
pub fn gpoly<P>(poly_ring: P, f: &El<P>, g: &El<P>) -> El<P>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: PrincipalIdealRing
{
    let (f_deg, f_lc) = nonzero_leading_term(&poly_ring, f);
    let (g_deg, g_lc) = nonzero_leading_term(&poly_ring, g);
    let (s, t, _) = poly_ring.base_ring().extended_ideal_gen(&f_lc, &g_lc);
    let deg = max(f_deg, g_deg);
    return poly_ring.add(
        shifted_multiple(&poly_ring, f, &s, deg - f_deg),
        shifted_multiple(&poly_ring, g, &t, deg - g_deg)
    );
}

///
/// A set of polynomials that are still to be reduced, from which always the smallest
/// polynomial w.r.t. [`ComparableElRing::cmp_el()`] is removed first.
/// Zero and duplicate polynomials are never stored.
///
#[stability::unstable(feature = "enable")]
pub struct PairQueue<P>
    where P: RingStore,
        P::Type: ComparableElRing
{
    poly_ring: P,
    // sorted in descending order
    elements: Vec<El<P>>
}

impl<P> PairQueue<P>
    where P: RingStore,
        P::Type: ComparableElRing
{
    #[stability::unstable(feature = "enable")]
    pub fn new(poly_ring: P) -> Self {
        PairQueue { poly_ring, elements: Vec::new() }
    }

    #[stability::unstable(feature = "enable")]
    pub fn insert(&mut self, f: El<P>) {
        if self.poly_ring.is_zero(&f) {
            return;
        }
        match self.elements.binary_search_by(|other| self.poly_ring.cmp_el(other, &f).reverse()) {
            Ok(_) => {},
            Err(index) => self.elements.insert(index, f)
        }
    }

    #[stability::unstable(feature = "enable")]
    pub fn pop_min(&mut self) -> Option<El<P>> {
        self.elements.pop()
    }

    #[stability::unstable(feature = "enable")]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

///
/// Removes every basis element whose leading term is a multiple of the leading term of
/// another remaining basis element. This keeps the property of being a strong Groebner basis.
///
fn minimize_basis<P>(poly_ring: P, mut basis: Vec<El<P>>) -> Vec<El<P>>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
{
    let mut i = 0;
    while i < basis.len() {
        if (0..basis.len()).any(|j| j != i && top_reduces(&poly_ring, &basis[j], &basis[i])) {
            basis.remove(i);
        } else {
            i += 1;
        }
    }
    return basis;
}

///
/// If `basis` contains a nonzero constant `n`, replaces every coefficient of `f` except the
/// leading one by its remainder modulo `n`. This keeps the leading term and changes `f` only
/// by a multiple of `n`, but prevents the coefficients from growing during the computation.
///
fn reduce_coefficients<P>(poly_ring: P, f: El<P>, basis: &[El<P>]) -> El<P>
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: EuclideanRing
{
    let Some(n) = basis.iter().find(|g| poly_ring.degree(g) == Some(0)) else {
        return f;
    };
    let Some(deg) = poly_ring.degree(&f) else {
        return f;
    };
    let base_ring = poly_ring.base_ring();
    let n = poly_ring.coefficient_at(n, 0);
    let result = poly_ring.from_terms(poly_ring.terms(&f).map(|(c, i)| if i == deg {
        (base_ring.clone_el(c), i)
    } else {
        (base_ring.euclidean_rem(base_ring.clone_el(c), n), i)
    }));
    return result;
}

///
/// Computes a strong Groebner basis of the ideal generated by the given polynomials,
/// which are polynomials over a euclidean domain.
///
/// A strong Groebner basis `G` of an ideal `I` has the property that every nonzero
/// element of `I` is top-reduced by some element of `G`. In particular, `f in I` if
/// and only if [`normal_form()`] of `f` w.r.t. `G` is zero.
///
/// The algorithm starts with the nonzero generators, and adds the S- and G-polynomials
/// of all pairs to a queue. Then the smallest queued polynomial is reduced w.r.t. the
/// current basis and, if it does not reduce to zero, added to the basis together with
/// its S- and G-polynomials with all existing basis elements. Finally, all basis elements
/// that are top-reduced by other basis elements are removed.
///
/// As soon as the basis contains a nonzero constant `n`, all non-leading coefficients of
/// new basis elements are reduced modulo `n`, and the same is done for the final basis.
/// Over the integers, this keeps the coefficients of the result bounded by `n`.
///
/// If the passed computation controller accepts the logging, it will receive the following symbols:
///  - `-` means a queued polynomial reduced to zero
///  - `s` means a queued polynomial did not reduce to zero and was added to the basis
///  - `(b=n)` gives the current size `n` of the basis
///
/// # Example
/// ```
/// # use ideal_arith::ring::*;
/// # use ideal_arith::computation::*;
/// # use ideal_arith::algorithms::buchberger::*;
/// # use ideal_arith::algorithms::poly_div::*;
/// # use ideal_arith::rings::poly::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::primitive_int::*;
/// let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
/// let gens = vec![ZZX.from_coefficients(vec![-1, 0, 1]), ZZX.from_coefficients(vec![-1, 1])];
/// let basis = strong_groebner_basis(&ZZX, gens, DontObserve);
/// assert_eq!(1, basis.len());
/// assert_eq!(Some(1), ZZX.degree(&basis[0]));
/// assert!(ZZX.is_zero(&normal_form(&ZZX, ZZX.from_coefficients(vec![1, 0, -1]), &basis)));
/// ```
///
pub fn strong_groebner_basis<P, Controller>(poly_ring: P, generators: Vec<El<P>>, controller: Controller) -> Vec<El<P>>
    where P: RingStore,
        P::Type: PolyRing + ComparableElRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: EuclideanRing,
        Controller: ComputationController
{
    controller.run_computation(format_args!("strong_groebner_basis(len={})", generators.len()), |controller| {
        let mut basis = generators.into_iter().filter(|f| !poly_ring.is_zero(f)).collect::<Vec<_>>();
        let mut queue = PairQueue::new(&poly_ring);
        for i in 0..basis.len() {
            for j in 0..i {
                queue.insert(spoly(&poly_ring, &basis[i], &basis[j]));
                queue.insert(gpoly(&poly_ring, &basis[i], &basis[j]));
            }
        }

        while let Some(h) = queue.pop_min() {
            let h = reduce_coefficients(&poly_ring, normal_form(&poly_ring, h, &basis), &basis);
            if poly_ring.is_zero(&h) {
                log_progress!(controller, "-");
                continue;
            }
            log_progress!(controller, "s");
            for g in &basis {
                queue.insert(spoly(&poly_ring, g, &h));
                queue.insert(gpoly(&poly_ring, g, &h));
            }
            basis.push(h);
            log_progress!(controller, "(b={})", basis.len());
        }
        let mut basis = minimize_basis(&poly_ring, basis);
        for i in 0..basis.len() {
            let f = std::mem::replace(&mut basis[i], poly_ring.zero());
            basis[i] = reduce_coefficients(&poly_ring, f, &basis);
        }
        return basis;
    })
}

///
/// Computes a strong Groebner basis for ideals of the form `(X^2 - d, a_1 + b_1 X, ..., a_k + b_k X)`
/// in `Z[X]`, as they occur when working with ideals in the quadratic order `Z[X]/(X^2 - d)`.
///
/// The first generator must be `X^2 - d`, and all others must have degree at most 1.
/// Furthermore, the gcd of all coefficients `a_i, b_i` must be 1. Under these conditions,
/// the ideal is of the form `(X + c, n)`, and this function returns `(X + c, n)` with
/// `0 <= c < n`, unless `n = 0`.
///
/// This gives the same ideal as [`strong_groebner_basis()`], but is much cheaper, since
/// it only performs gcd computations on the coefficients.
///
/// Intermediate values are computed with 128 bits, but may still overflow if the
/// coefficients are too large.
///
/// # Example
/// ```
/// # use ideal_arith::assert_el_eq;
/// # use ideal_arith::ring::*;
/// # use ideal_arith::algorithms::buchberger::*;
/// # use ideal_arith::rings::poly::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::primitive_int::*;
/// let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
/// // the ideal (2, 1 + sqrt(-5)) in Z[sqrt(-5)]
/// let gens = [ZZX.from_coefficients(vec![5, 0, 1]), ZZX.from_int(2), ZZX.from_coefficients(vec![1, 1])];
/// let (f, n) = strong_groebner_basis_quadratic_order(&ZZX, &gens);
/// assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![1, 1]), &f);
/// assert_el_eq!(&ZZX, &ZZX.from_int(2), &n);
/// ```
///
pub fn strong_groebner_basis_quadratic_order<P>(poly_ring: P, generators: &[El<P>]) -> (El<P>, El<P>)
    where P: RingStore,
        P::Type: PolyRing,
        <P::Type as RingExtension>::BaseRing: RingStore<Type = StaticRingBase<i64>>
{
    let ZZ = StaticRing::<i128>::RING;
    assert!(generators.len() > 0, "the first generator must be X^2 - d");
    let modulus = &generators[0];
    assert!(
        poly_ring.degree(modulus) == Some(2) && *poly_ring.coefficient_at(modulus, 2) == 1 && *poly_ring.coefficient_at(modulus, 1) == 0,
        "the first generator must be X^2 - d, but got {}", poly_ring.format(modulus)
    );
    let d = -(*poly_ring.coefficient_at(modulus, 0) as i128);

    let linear_generators = generators[1..].iter().map(|f| {
        assert!(poly_ring.degree(f).unwrap_or(0) <= 1, "generators must be linear, but got {}", poly_ring.format(f));
        (*poly_ring.coefficient_at(f, 0) as i128, *poly_ring.coefficient_at(f, 1) as i128)
    }).collect::<Vec<_>>();

    // every a + bX with content g gives rise to gX + c in the ideal, and to the
    // integer (a^2 - b^2 d) / g, which is (a + bX)(a - bX) / g mod X^2 - d
    let mut linear_parts = Vec::new();
    let mut n = 0;
    for (a, b) in linear_generators.iter().copied() {
        let (s, t, g) = ZZ.extended_ideal_gen(&b, &a);
        if g == 0 {
            continue;
        }
        let (s, t) = if b != 0 {
            let (a_red, b_red) = (a / g, b / g);
            let t = t.rem_euclid(b_red.abs());
            ((1 - a_red * t) / b_red, t)
        } else {
            (s, t)
        };
        linear_parts.push((g, a * s + b * t * d));
        n = ZZ.ideal_gen(&n, &((b * b * d - a * a).abs() / g));
    }

    let (mut x_coeff, mut c) = (0, 0);
    for (g, c_i) in linear_parts {
        let (u, v, new_x_coeff) = ZZ.extended_ideal_gen(&x_coeff, &g);
        c = u * c + v * c_i;
        if n != 0 {
            c = c.rem_euclid(n);
        }
        x_coeff = new_x_coeff;
    }
    assert!(x_coeff == 1, "the coefficients of the linear generators must have gcd 1");

    for (a, b) in linear_generators.iter().copied() {
        n = ZZ.ideal_gen(&n, &(a - b * c).abs());
    }
    n = ZZ.ideal_gen(&n, &(d - c * c).abs());
    if n != 0 {
        c = c.rem_euclid(n);
    }

    let (Ok(c), Ok(n)) = (i64::try_from(c), i64::try_from(n)) else {
        panic!("result does not fit into 64 bits")
    };
    return (
        poly_ring.from_terms([(c, 0), (1, 1)]),
        poly_ring.from_terms([(n, 0)])
    );
}

#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;

#[cfg(test)]
fn assert_is_strong_groebner_basis_of<P>(poly_ring: P, basis: &[El<P>], generators: &[El<P>])
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: PrincipalIdealRing
{
    for f in generators {
        assert!(poly_ring.is_zero(&normal_form(&poly_ring, poly_ring.clone_el(f), basis)), "{} does not reduce to zero", poly_ring.format(f));
    }
    for f in basis {
        for g in basis {
            if !poly_ring.is_zero(f) && !poly_ring.is_zero(g) {
                assert!(poly_ring.is_zero(&normal_form(&poly_ring, spoly(&poly_ring, f, g), basis)));
                assert!(poly_ring.is_zero(&normal_form(&poly_ring, gpoly(&poly_ring, f, g), basis)));
            }
        }
    }
}

#[test]
fn test_spoly_gpoly() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let f = ZZX.from_coefficients(vec![1, 0, 2]);
    let g = ZZX.from_coefficients(vec![1, 3]);
    // 3(2x^2 + 1) - 2x(3x + 1)
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![3, -2]), &spoly(&ZZX, &f, &g));
    assert_el_eq!(&ZZX, &ZZX.negate(spoly(&ZZX, &f, &g)), &spoly(&ZZX, &g, &f));

    let h = gpoly(&ZZX, &f, &g);
    assert_eq!(Some(2), ZZX.degree(&h));
    assert_eq!(1, *ZZX.lc(&h).unwrap());

    let f = ZZX.from_coefficients(vec![0, 4]);
    let g = ZZX.from_coefficients(vec![1, 6]);
    assert_el_eq!(&ZZX, &ZZX.from_int(-2), &spoly(&ZZX, &f, &g));
    assert_eq!(2, ZZX.lc(&gpoly(&ZZX, &f, &g)).unwrap().abs());
}

#[test]
#[should_panic]
fn test_spoly_zero() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    spoly(&ZZX, &ZZX.zero(), &ZZX.one());
}

#[test]
fn test_pair_queue() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let mut queue = PairQueue::new(&ZZX);
    queue.insert(ZZX.from_coefficients(vec![1, 1]));
    queue.insert(ZZX.zero());
    queue.insert(ZZX.from_int(3));
    queue.insert(ZZX.from_coefficients(vec![1, 1]));
    queue.insert(ZZX.from_coefficients(vec![0, 0, 1]));
    queue.insert(ZZX.from_int(-2));
    assert_eq!(4, queue.len());
    assert_el_eq!(&ZZX, &ZZX.from_int(-2), &queue.pop_min().unwrap());
    assert_el_eq!(&ZZX, &ZZX.from_int(3), &queue.pop_min().unwrap());
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![1, 1]), &queue.pop_min().unwrap());
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![0, 0, 1]), &queue.pop_min().unwrap());
    assert!(queue.pop_min().is_none());
}

#[test]
fn test_strong_groebner_basis_divisible_generator() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let gens = vec![ZZX.from_coefficients(vec![-1, 0, 1]), ZZX.from_coefficients(vec![-1, 1])];
    let basis = strong_groebner_basis(&ZZX, gens, LogProgress);
    assert_eq!(1, basis.len());
    let expected = ZZX.from_coefficients(vec![-1, 1]);
    assert!(ZZX.eq_el(&expected, &basis[0]) || ZZX.eq_el(&ZZX.negate(expected), &basis[0]));
}

#[test]
fn test_strong_groebner_basis_integers() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let gens = vec![ZZX.from_coefficients(vec![1, 0, 1]), ZZX.from_coefficients(vec![1, 2]), ZZX.from_int(5)];
    let basis = strong_groebner_basis(&ZZX, gens.iter().map(|f| ZZX.clone_el(f)).collect(), DontObserve);
    assert_is_strong_groebner_basis_of(&ZZX, &basis, &gens);
    // 2x + 1 = 2(x - 2) mod 5, so the ideal is (x - 2, 5)
    assert!(ZZX.is_zero(&normal_form(&ZZX, ZZX.from_coefficients(vec![-2, 1]), &basis)));
    assert!(!ZZX.is_zero(&normal_form(&ZZX, ZZX.from_coefficients(vec![-1, 1]), &basis)));
    assert!(!ZZX.is_zero(&normal_form(&ZZX, ZZX.one(), &basis)));

    let gens = vec![ZZX.from_coefficients(vec![0, 2]), ZZX.from_coefficients(vec![0, 3])];
    let basis = strong_groebner_basis(&ZZX, gens.iter().map(|f| ZZX.clone_el(f)).collect(), DontObserve);
    assert_is_strong_groebner_basis_of(&ZZX, &basis, &gens);
    assert_eq!(1, basis.len());
    assert_eq!(1, ZZX.lc(&basis[0]).unwrap().abs());
}

#[test]
fn test_strong_groebner_basis_bounded_coefficients() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let gens = vec![ZZX.from_coefficients(vec![0, 6]), ZZX.from_coefficients(vec![-1, -5, 4]), ZZX.from_coefficients(vec![5, 3, -4])];
    let basis = strong_groebner_basis(&ZZX, gens.iter().map(|f| ZZX.clone_el(f)).collect(), DontObserve);
    assert_is_strong_groebner_basis_of(&ZZX, &basis, &gens);

    // the ideal is (2, x + 1)
    let expected = [ZZX.from_int(2), ZZX.from_coefficients(vec![1, 1])];
    assert_is_strong_groebner_basis_of(&ZZX, &basis, &expected);
    assert_is_strong_groebner_basis_of(&ZZX, &expected, &basis);
    assert_eq!(2, basis.len());
    for f in &basis {
        for (c, _) in ZZX.terms(f) {
            assert!(c.abs() <= 2, "unreduced coefficient in {}", ZZX.format(f));
        }
    }

    // 3x^4 + 1 = 3 + 1 = 0 mod (2, x + 1)
    assert!(ZZX.is_zero(&normal_form(&ZZX, ZZX.from_coefficients(vec![1, 0, 0, 0, 3]), &basis)));
    assert!(!ZZX.is_zero(&normal_form(&ZZX, ZZX.from_coefficients(vec![1, 1, 0, 0, 1]), &basis)));
}

#[test]
fn test_strong_groebner_basis_zero_generators() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    assert!(strong_groebner_basis(&ZZX, vec![], DontObserve).is_empty());
    assert!(strong_groebner_basis(&ZZX, vec![ZZX.zero(), ZZX.zero()], DontObserve).is_empty());
    let basis = strong_groebner_basis(&ZZX, vec![ZZX.zero(), ZZX.from_coefficients(vec![3, 6])], DontObserve);
    assert_eq!(1, basis.len());
    assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![3, 6]), &basis[0]);
}

#[test]
fn test_strong_groebner_basis_field() {
    let F7 = Zn::new(7).as_field().ok().unwrap();
    let F7X = DensePolyRing::new(F7, "x");
    let x_minus_1 = F7X.from_coefficients(vec![F7.from_int(-1), F7.one()]);
    let f = F7X.mul_ref(&x_minus_1, &F7X.from_coefficients(vec![F7.from_int(2), F7.from_int(1), F7.from_int(3)]));
    let g = F7X.mul_ref(&x_minus_1, &F7X.from_coefficients(vec![F7.from_int(5), F7.from_int(1)]));
    let gens = vec![f, g];
    let basis = strong_groebner_basis(&F7X, gens.iter().map(|f| F7X.clone_el(f)).collect(), DontObserve);
    assert_is_strong_groebner_basis_of(&F7X, &basis, &gens);
    assert_eq!(1, basis.len());
    assert_el_eq!(&F7X, &x_minus_1, &F7X.monicize(F7X.clone_el(&basis[0])));
}

#[test]
fn test_strong_groebner_basis_quadratic_order() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let check = |d: i64, linear_gens: &[(i64, i64)], expected_c: i64, expected_n: i64| {
        let mut gens = vec![ZZX.from_coefficients(vec![-d, 0, 1])];
        gens.extend(linear_gens.iter().map(|(a, b)| ZZX.from_coefficients(vec![*a, *b])));
        let (f, n) = strong_groebner_basis_quadratic_order(&ZZX, &gens);
        assert_el_eq!(&ZZX, &ZZX.from_coefficients(vec![expected_c, 1]), &f);
        assert_el_eq!(&ZZX, &ZZX.from_int(expected_n as i32), &n);

        let general = strong_groebner_basis(&ZZX, gens.iter().map(|f| ZZX.clone_el(f)).collect(), DontObserve);
        let special = [f, n];
        assert_is_strong_groebner_basis_of(&ZZX, &general, &special);
        assert_is_strong_groebner_basis_of(&ZZX, &special, &general);
    };
    check(-5, &[(2, 0), (1, 1)], 1, 2);
    check(-5, &[(3, 0), (1, 1)], 1, 3);
    check(-5, &[(3, 0), (2, 1)], 2, 3);
    check(-1, &[(1, 2)], 3, 5);
    check(-1, &[(5, 0), (2, 1)], 2, 5);
    check(-1, &[(3, 0), (0, 1)], 0, 1);
    check(2, &[(0, 1)], 0, 2);
    check(-5, &[(6, 0), (2, 2), (1, 1)], 1, 6);
}

#[test]
#[should_panic]
fn test_strong_groebner_basis_quadratic_order_content() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    strong_groebner_basis_quadratic_order(&ZZX, &[ZZX.from_coefficients(vec![1, 0, 1]), ZZX.from_int(3)]);
}
