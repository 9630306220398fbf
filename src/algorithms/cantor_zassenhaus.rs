use crate::algorithms::eea::poly_gcd_monic;
use crate::algorithms::poly_div::poly_rem;
use crate::algorithms::sqr_mul::generic_abs_square_and_multiply;
use crate::field::*;
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::finite::*;
use crate::rings::poly::*;

use oorandom::Rand64;

const CANTOR_ZASSENHAUS_ATTEMPTS: usize = 1000;

///
/// Computes `g^power mod f` using square-and-multiply in `F[X]/(f)`.
///
fn pow_mod_f<P>(poly_ring: P, g: El<P>, f: &El<P>, power: i64) -> El<P>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    assert!(power >= 0);
    return generic_abs_square_and_multiply(
        poly_rem(&poly_ring, g, f),
        &power,
        StaticRing::<i64>::RING,
        |a| poly_rem(&poly_ring, poly_ring.mul_ref(&a, &a), f),
        |a, b| poly_rem(&poly_ring, poly_ring.mul_ref_fst(a, b), f),
        poly_ring.one()
    );
}

fn characteristic_of_prime_field<P>(poly_ring: &P) -> i64
    where P: RingStore,
        P::Type: PolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    let p = poly_ring.base_ring().characteristic();
    assert!(p > 0 && poly_ring.base_ring().size() == Some(p), "factoring is only implemented over prime fields");
    return p;
}

///
/// Splits a nonzero, square-free polynomial over a prime field `F_p` into the products of
/// its irreducible factors of equal degree.
///
/// More concretely, the result consists of pairs `(g, i)` with monic `g` of positive degree,
/// such that `g` is the product of all monic irreducible factors of `f` of degree `i`. For the
/// computation, note that the product of all monic irreducible polynomials of degree dividing
/// `i` is `X^(p^i) - X`, so `g` is found as `gcd(f, X^(p^i) - X)` after removing the factors of
/// smaller degree. Once the degree of the remaining polynomial is smaller than `2i`, it must be
/// irreducible and is returned as a whole.
///
/// The order of the result is by ascending degree `i`.
///
pub fn distinct_degree_factorization<P>(poly_ring: P, mut f: El<P>) -> Vec<(El<P>, usize)>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    assert!(!poly_ring.is_zero(&f));
    let p = characteristic_of_prime_field(&poly_ring);
    let x = poly_ring.indeterminate();

    let mut result = Vec::new();
    // always equal to X^(p^i) mod f
    let mut x_power_mod_f = poly_ring.clone_el(&x);
    let mut i = 1;
    while poly_ring.degree(&f).unwrap_or(0) >= 2 * i {
        x_power_mod_f = pow_mod_f(&poly_ring, x_power_mod_f, &f, p);
        let deg_i_factor = poly_gcd_monic(&poly_ring, &f, &poly_ring.sub_ref(&x_power_mod_f, &x));
        if poly_ring.degree(&deg_i_factor).unwrap_or(0) > 0 {
            f = poly_ring.div_exact(&f, &deg_i_factor);
            x_power_mod_f = poly_rem(&poly_ring, x_power_mod_f, &f);
            result.push((deg_i_factor, i));
        }
        i += 1;
    }
    if let Some(d) = poly_ring.degree(&f).filter(|d| *d > 0) {
        result.push((poly_ring.monicize(f), d));
    }
    return result;
}

///
/// Computes the monic irreducible factors of a nonzero polynomial `f` over a prime field `F_p`, which
/// is assumed to be square-free and a product of irreducible polynomials of degree `d`.
///
/// # Algorithm
///
/// Let `Q = p^d`. For every `T in F_p[X]`, `f` divides `T^Q - T = T (T^((Q - 1)/2) + 1) (T^((Q - 1)/2) - 1)`,
/// since every root `a` of `f` lives in `F_Q`. For a random `T`, the value `T(a)` is a nonzero square in `F_Q`
/// with probability about `1/2`, independently for the different roots. Hence `gcd(f, T^((Q - 1)/2) - 1)`
/// is a proper factor of `f` with probability at least `1/2`. In characteristic 2, the trace map
/// `T + T^2 + ... + T^(2^(d - 1))` takes the role of `T^((Q - 1)/2)`, since it maps half of `F_Q` to zero.
/// Both parts are then split recursively.
///
/// Since `Q` is stored in an `i64`, it is required that `p^d` fits into 63 bits.
///
/// Panics if no proper factor is found after 1000 random choices of `T`, which can only happen
/// with negligible probability if the assumptions on `f` are satisfied.
///
pub fn cantor_zassenhaus<P>(poly_ring: P, f: El<P>, d: usize, rng: &mut Rand64) -> Vec<El<P>>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    cantor_zassenhaus_rec(&poly_ring, f, d, rng)
}

fn cantor_zassenhaus_rec<P>(poly_ring: &P, f: El<P>, d: usize, rng: &mut Rand64) -> Vec<El<P>>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    let Some(f_deg) = poly_ring.degree(&f) else {
        panic!("cannot factor the zero polynomial");
    };
    assert!(d > 0 && f_deg % d == 0, "degree of {} is not a multiple of {}", poly_ring.format(&f), d);
    if f_deg == d {
        return vec![poly_ring.monicize(f)];
    } else if f_deg == 0 {
        return Vec::new();
    }
    let p = characteristic_of_prime_field(poly_ring);
    let base_ring = poly_ring.base_ring();
    let exponent = (StaticRing::<i64>::RING.pow(p, d) - 1) / 2;

    for _ in 0..CANTOR_ZASSENHAUS_ATTEMPTS {
        let t_deg = rng.rand_range(0..(2 * d as u64)) as usize;
        let T = poly_ring.from_terms(
            (0..t_deg).map(|i| (base_ring.random_element(|| rng.rand_u64()), i))
                .chain(Some((base_ring.one(), t_deg)))
        );
        let G = if p == 2 {
            let mut current = poly_rem(poly_ring, T, &f);
            let mut trace = poly_ring.zero();
            for _ in 0..d {
                poly_ring.add_assign_ref(&mut trace, &current);
                current = poly_rem(poly_ring, poly_ring.mul_ref(&current, &current), &f);
            }
            trace
        } else {
            poly_ring.sub(pow_mod_f(poly_ring, T, &f, exponent), poly_ring.one())
        };
        let g = poly_gcd_monic(poly_ring, &f, &G);
        let g_deg = poly_ring.degree(&g).unwrap_or(0);
        if g_deg > 0 && g_deg < f_deg {
            let cofactor = poly_ring.div_exact(&f, &g);
            let mut result = cantor_zassenhaus_rec(poly_ring, g, d, rng);
            result.extend(cantor_zassenhaus_rec(poly_ring, cofactor, d, rng));
            return result;
        }
    }
    panic!("Cantor-Zassenhaus found no factor of {} after {} attempts, it is probably not a product of distinct irreducible polynomials of degree {}", poly_ring.format(&f), CANTOR_ZASSENHAUS_ATTEMPTS, d);
}

#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;

#[test]
fn test_pow_mod_f() {
    let Fp = Zn::new(7).as_field().ok().unwrap();
    let FpX = DensePolyRing::new(Fp, "x");
    let f = FpX.from_coefficients(vec![Fp.one(), Fp.zero(), Fp.one()]);
    // x^2 = -1 mod f, so x^7 = -x
    assert_el_eq!(&FpX, &FpX.negate(FpX.indeterminate()), &pow_mod_f(&FpX, FpX.indeterminate(), &f, 7));
    assert_el_eq!(&FpX, &FpX.one(), &pow_mod_f(&FpX, FpX.indeterminate(), &f, 0));
    assert_el_eq!(&FpX, &FpX.neg_one(), &pow_mod_f(&FpX, FpX.indeterminate(), &f, 2));
}

#[test]
fn test_distinct_degree_factorization() {
    let F2 = Zn::new(2).as_field().ok().unwrap();
    let F2X = DensePolyRing::new(F2, "x");
    let poly = |coeffs: &[i32]| F2X.from_coefficients(coeffs.iter().map(|c| F2.from_int(*c)).collect());
    let a1 = F2X.mul(poly(&[0, 1]), poly(&[1, 1]));
    let a2 = poly(&[1, 1, 1]);
    let a3 = F2X.mul(poly(&[1, 1, 0, 1]), poly(&[1, 0, 1, 1]));
    let f = F2X.prod([F2X.clone_el(&a1), F2X.clone_el(&a2), F2X.clone_el(&a3)]);
    let factorization = distinct_degree_factorization(&F2X, f);
    assert_eq!(3, factorization.len());
    assert_el_eq!(&F2X, &a1, &factorization[0].0);
    assert_eq!(1, factorization[0].1);
    assert_el_eq!(&F2X, &a2, &factorization[1].0);
    assert_eq!(2, factorization[1].1);
    assert_el_eq!(&F2X, &a3, &factorization[2].0);
    assert_eq!(3, factorization[2].1);
}

#[test]
fn test_distinct_degree_factorization_irreducible_rest() {
    let F5 = Zn::new(5).as_field().ok().unwrap();
    let F5X = DensePolyRing::new(F5, "x");
    let poly = |coeffs: &[i32]| F5X.from_coefficients(coeffs.iter().map(|c| F5.from_int(*c)).collect());
    // x^3 + x + 1 has no roots modulo 5, so it is irreducible
    let irred = poly(&[1, 1, 0, 1]);
    let f = F5X.mul(poly(&[3, 1]), F5X.mul_ref(&irred, &F5X.from_int(2)));
    let factorization = distinct_degree_factorization(&F5X, f);
    assert_eq!(2, factorization.len());
    assert_el_eq!(&F5X, &poly(&[3, 1]), &factorization[0].0);
    assert_el_eq!(&F5X, &irred, &factorization[1].0);
    assert_eq!(3, factorization[1].1);
}

#[test]
fn test_cantor_zassenhaus() {
    let F7 = Zn::new(7).as_field().ok().unwrap();
    let F7X = DensePolyRing::new(F7, "x");
    let poly = |coeffs: &[i32]| F7X.from_coefficients(coeffs.iter().map(|c| F7.from_int(*c)).collect());
    let f = poly(&[1, 0, 1]);
    let g = poly(&[3, 1, 1]);
    let mut rng = Rand64::new(1);
    let factors = cantor_zassenhaus(&F7X, F7X.mul_ref(&f, &g), 2, &mut rng);
    assert_eq!(2, factors.len());
    assert!(factors.iter().any(|h| F7X.eq_el(h, &f)));
    assert!(factors.iter().any(|h| F7X.eq_el(h, &g)));

    let linear_factors = (0..5).map(|a| poly(&[a, 1])).collect::<Vec<_>>();
    let h = F7X.mul(F7X.prod(linear_factors.iter().map(|f| F7X.clone_el(f))), F7X.from_int(3));
    let factors = cantor_zassenhaus(&F7X, h, 1, &mut rng);
    assert_eq!(5, factors.len());
    for f in &linear_factors {
        assert!(factors.iter().any(|h| F7X.eq_el(h, f)));
    }
}

#[test]
fn test_cantor_zassenhaus_characteristic_two() {
    let F2 = Zn::new(2).as_field().ok().unwrap();
    let F2X = DensePolyRing::new(F2, "x");
    let poly = |coeffs: &[i32]| F2X.from_coefficients(coeffs.iter().map(|c| F2.from_int(*c)).collect());
    let f = poly(&[1, 1, 0, 1]);
    let g = poly(&[1, 0, 1, 1]);
    let mut rng = Rand64::new(2);
    let factors = cantor_zassenhaus(&F2X, F2X.mul_ref(&f, &g), 3, &mut rng);
    assert_eq!(2, factors.len());
    assert!(factors.iter().any(|h| F2X.eq_el(h, &f)));
    assert!(factors.iter().any(|h| F2X.eq_el(h, &g)));

    let factors = cantor_zassenhaus(&F2X, F2X.mul(poly(&[0, 1]), poly(&[1, 1])), 1, &mut rng);
    assert_eq!(2, factors.len());
}

#[test]
#[should_panic]
fn test_cantor_zassenhaus_wrong_degree() {
    let F7 = Zn::new(7).as_field().ok().unwrap();
    let F7X = DensePolyRing::new(F7, "x");
    // x^2 + 1 is irreducible, so it cannot be split into linear factors
    let f = F7X.from_coefficients(vec![F7.one(), F7.zero(), F7.one()]);
    cantor_zassenhaus(&F7X, f, 1, &mut Rand64::new(1));
}
