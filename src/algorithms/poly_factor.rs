use crate::algorithms::cantor_zassenhaus::*;
use crate::algorithms::poly_squarefree::*;
use crate::computation::*;
use crate::field::*;
use crate::pid::*;
use crate::ring::*;
use crate::rings::finite::*;
use crate::rings::poly::*;

use oorandom::Rand64;

///
/// Factors a nonzero polynomial over a prime field `F_p` into monic irreducible factors.
///
/// The result consists of pairs `(g, m)`, where `g` is a monic irreducible polynomial and `m` is
/// its multiplicity in `f`. The factors are pairwise different, and their product with multiplicities
/// is `f`, up to the leading coefficient of `f`. A constant polynomial has no factors.
///
/// This uses a deterministic source of randomness, seeded with `p`. To use a different source, see
/// [`factorize_with_rng()`]. It is required that `p^d` fits into 63 bits, where `d` is the largest
/// degree of an irreducible factor of `f`.
///
/// # Example
/// ```
/// # use ideal_arith::ring::*;
/// # use ideal_arith::rings::poly::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::rings::zn::zn_64::*;
/// # use ideal_arith::algorithms::poly_factor::*;
/// let Fp = Zn::new(3).as_field().ok().unwrap();
/// let FpX = DensePolyRing::new(Fp, "x");
/// // x^3 - x = x (x + 1) (x + 2)
/// let f = FpX.from_coefficients(vec![Fp.zero(), Fp.neg_one(), Fp.zero(), Fp.one()]);
/// let factorization = factorize(&FpX, &f);
/// assert_eq!(3, factorization.len());
/// assert!(factorization.iter().all(|(g, m)| FpX.degree(g) == Some(1) && *m == 1));
/// ```
///
pub fn factorize<P>(poly_ring: P, f: &El<P>) -> Vec<(El<P>, usize)>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    let mut rng = Rand64::new(poly_ring.base_ring().characteristic() as u128);
    factorize_with_rng(poly_ring, f, &mut rng, DontObserve)
}

///
/// Factors a nonzero polynomial over a prime field `F_p` into monic irreducible factors,
/// using the given source of randomness. For details, see [`factorize()`].
///
/// The polynomial is first decomposed into square-free parts, which are then split by
/// [`distinct_degree_factorization()`] and finally by [`cantor_zassenhaus()`].
///
/// If the passed computation controller accepts the logging, it will receive the following symbols:
///  - `sqf` means the square-free decomposition was computed
///  - `ddf(i)` means a product of irreducible factors of degree `i` was found
///  - `cz` means an irreducible factor was found
///
pub fn factorize_with_rng<P, Controller>(poly_ring: P, f: &El<P>, rng: &mut Rand64, controller: Controller) -> Vec<(El<P>, usize)>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing,
        Controller: ComputationController
{
    assert!(!poly_ring.is_zero(f), "cannot factor the zero polynomial");
    controller.run_computation(format_args!("factorize(deg={})", poly_ring.degree(f).unwrap_or(0)), |controller| {
        let square_free_parts = square_free_decomposition(&poly_ring, f);
        log_progress!(controller, "sqf");
        let mut result = Vec::new();
        for (square_free_part, multiplicity) in square_free_parts {
            for (equal_degree_part, d) in distinct_degree_factorization(&poly_ring, square_free_part) {
                log_progress!(controller, "ddf({})", d);
                for factor in cantor_zassenhaus(&poly_ring, equal_degree_part, d, rng) {
                    log_progress!(controller, "cz");
                    result.push((factor, multiplicity));
                }
            }
        }
        return result;
    })
}

#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;
#[cfg(test)]
use crate::algorithms::eea::poly_gcd_monic;

#[cfg(test)]
fn assert_is_factorization_of<P>(poly_ring: P, factorization: &[(El<P>, usize)], f: &El<P>)
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    let product = poly_ring.prod(factorization.iter().map(|(g, m)| poly_ring.pow(poly_ring.clone_el(g), *m)));
    assert_el_eq!(&poly_ring, &poly_ring.monicize(poly_ring.clone_el(f)), &product);
    for (i, (g, _)) in factorization.iter().enumerate() {
        assert!(poly_ring.base_ring().is_one(poly_ring.lc(g).unwrap()));
        // irreducible factors do not split any further, in particular they are coprime
        for (h, _) in &factorization[(i + 1)..] {
            assert_eq!(Some(0), poly_ring.degree(&poly_gcd_monic(&poly_ring, g, h)));
        }
        let deg = poly_ring.degree(g).unwrap();
        let parts = distinct_degree_factorization(&poly_ring, poly_ring.clone_el(g));
        assert_eq!(1, parts.len());
        assert_eq!(deg, parts[0].1);
    }
}

#[test]
fn test_factorize() {
    let F5 = Zn::new(5).as_field().ok().unwrap();
    let F5X = DensePolyRing::new(F5, "x");
    let poly = |coeffs: &[i32]| F5X.from_coefficients(coeffs.iter().map(|c| F5.from_int(*c)).collect());

    let x_plus_1 = poly(&[1, 1]);
    let factorization = factorize(&F5X, &F5X.pow(F5X.clone_el(&x_plus_1), 2));
    assert_eq!(1, factorization.len());
    assert_el_eq!(&F5X, &x_plus_1, &factorization[0].0);
    assert_eq!(2, factorization[0].1);

    // x^2 + 2 and x^3 + x + 1 are irreducible over F5
    let f = F5X.prod([
        F5X.from_int(2),
        F5X.pow(poly(&[2, 0, 1]), 3),
        poly(&[1, 1, 0, 1]),
        F5X.pow(poly(&[4, 1]), 5),
        poly(&[3, 1]),
        poly(&[0, 1])
    ]);
    let factorization = factorize(&F5X, &f);
    assert_is_factorization_of(&F5X, &factorization, &f);
    assert_eq!(5, factorization.len());
    assert!(factorization.iter().any(|(g, m)| *m == 3 && F5X.eq_el(g, &poly(&[2, 0, 1]))));
    assert!(factorization.iter().any(|(g, m)| *m == 5 && F5X.eq_el(g, &poly(&[4, 1]))));
    assert!(factorization.iter().any(|(g, m)| *m == 1 && F5X.eq_el(g, &poly(&[1, 1, 0, 1]))));

    assert!(factorize(&F5X, &F5X.from_int(3)).is_empty());
}

#[test]
fn test_factorize_with_rng() {
    let F2 = Zn::new(2).as_field().ok().unwrap();
    let F2X = DensePolyRing::new(F2, "x");
    // x^15 - 1 is the product of all irreducible polynomials of degree 1, 2 and 4 except x
    let f = F2X.sub(F2X.pow(F2X.indeterminate(), 15), F2X.one());
    for seed in 0..4 {
        let factorization = factorize_with_rng(&F2X, &f, &mut Rand64::new(seed), LogProgress);
        assert_is_factorization_of(&F2X, &factorization, &f);
        assert_eq!(5, factorization.len());
        assert_eq!(1, factorization.iter().filter(|(g, _)| F2X.degree(g) == Some(1)).count());
        assert_eq!(1, factorization.iter().filter(|(g, _)| F2X.degree(g) == Some(2)).count());
        assert_eq!(3, factorization.iter().filter(|(g, _)| F2X.degree(g) == Some(4)).count());
    }
}

#[test]
fn test_factorize_larger_prime() {
    let Fp = Zn::new(65537).as_field().ok().unwrap();
    let FpX = DensePolyRing::new(Fp, "x");
    let poly = |coeffs: &[i32]| FpX.from_coefficients(coeffs.iter().map(|c| Fp.from_int(*c)).collect());
    let f = FpX.prod([
        poly(&[1, 0, 1]),
        poly(&[3, 1]),
        poly(&[3, 1]),
        poly(&[-3, 1])
    ]);
    let factorization = factorize(&FpX, &f);
    assert_is_factorization_of(&FpX, &factorization, &f);
    // 65537 = 1 mod 4, so x^2 + 1 splits
    assert_eq!(4, factorization.len());
}
