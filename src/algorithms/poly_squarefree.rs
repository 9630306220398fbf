use crate::algorithms::eea::poly_gcd_monic;
use crate::divisibility::*;
use crate::field::*;
use crate::pid::*;
use crate::ring::*;
use crate::rings::finite::*;
use crate::rings::poly::*;

///
/// Computes the square-free decomposition of a nonzero polynomial over a prime field `F_p`.
///
/// The result is a list of pairs `(g_i, m_i)` of monic, square-free and pairwise coprime
/// polynomials `g_i` of positive degree, such that `f` is the product of all `g_i^m_i`, up
/// to multiplication by a unit. A constant polynomial has an empty decomposition.
///
/// Since the base field has characteristic `p`, factors whose multiplicity is divisible by `p`
/// are invisible to the derivative. They are handled by recursively decomposing the `p`-th root
/// of the remaining polynomial, which is a polynomial in `X^p`.
///
/// # Example
/// ```
/// # use ideal_arith::assert_el_eq;
/// # use ideal_arith::ring::*;
/// # use ideal_arith::rings::poly::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::rings::zn::zn_64::*;
/// # use ideal_arith::algorithms::poly_squarefree::*;
/// let Fp = Zn::new(5).as_field().ok().unwrap();
/// let FpX = DensePolyRing::new(Fp, "x");
/// let x_plus_1 = FpX.from_coefficients(vec![Fp.one(), Fp.one()]);
/// let decomposition = square_free_decomposition(&FpX, &FpX.pow(FpX.clone_el(&x_plus_1), 2));
/// assert_eq!(1, decomposition.len());
/// assert_el_eq!(&FpX, &x_plus_1, &decomposition[0].0);
/// assert_eq!(2, decomposition[0].1);
/// ```
///
pub fn square_free_decomposition<P>(poly_ring: P, f: &El<P>) -> Vec<(El<P>, usize)>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    square_free_decomposition_rec(&poly_ring, f)
}

fn square_free_decomposition_rec<P>(poly_ring: &P, f: &El<P>) -> Vec<(El<P>, usize)>
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    assert!(!poly_ring.is_zero(f), "the zero polynomial has no square-free decomposition");
    let p = poly_ring.base_ring().characteristic();
    assert!(p > 0 && poly_ring.base_ring().size() == Some(p), "square-free decomposition is only implemented over prime fields");

    let mut result = Vec::new();
    let mut f = poly_ring.clone_el(f);
    let derivative = poly_ring.derivative(&f);
    if !poly_ring.is_zero(&derivative) {
        let mut flat = poly_ring.div_exact(&f, &poly_gcd_monic(poly_ring, &f, &derivative));
        let mut multiplicity = 0;
        while poly_ring.degree(&flat).unwrap_or(0) > 0 {
            while let Some(quotient) = poly_ring.checked_div(&f, &flat) {
                f = quotient;
                multiplicity += 1;
            }
            let next_flat = poly_gcd_monic(poly_ring, &f, &flat);
            let factor = poly_ring.div_exact(&flat, &next_flat);
            result.push((poly_ring.monicize(factor), multiplicity));
            flat = next_flat;
        }
    }

    // the remaining part is a p-th power, i.e. a polynomial in X^p
    if poly_ring.degree(&f).unwrap_or(0) > 0 {
        let p = p as usize;
        let root = poly_ring.from_terms(poly_ring.terms(&f).map(|(c, i)| {
            debug_assert!(i % p == 0);
            (poly_ring.base_ring().clone_el(c), i / p)
        }));
        result.extend(square_free_decomposition_rec(poly_ring, &root).into_iter().map(|(g, m)| (g, m * p)));
    }
    return result;
}

#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;

#[cfg(test)]
fn assert_is_decomposition_of<P>(poly_ring: P, decomposition: &[(El<P>, usize)], f: &El<P>)
    where P: RingStore,
        P::Type: PolyRing + EuclideanRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field + FiniteRing
{
    let product = poly_ring.prod(decomposition.iter().map(|(g, m)| poly_ring.pow(poly_ring.clone_el(g), *m)));
    assert_el_eq!(&poly_ring, &poly_ring.monicize(poly_ring.clone_el(f)), &product);
    for (g, _) in decomposition {
        assert!(poly_ring.base_ring().is_one(poly_ring.lc(g).unwrap()));
        assert!(poly_ring.degree(&poly_gcd_monic(&poly_ring, g, &poly_ring.derivative(g))) == Some(0));
    }
}

#[test]
fn test_square_free_decomposition() {
    let Fp = Zn::new(5).as_field().ok().unwrap();
    let FpX = DensePolyRing::new(Fp, "x");
    let poly = |coeffs: &[i32]| FpX.from_coefficients(coeffs.iter().map(|c| Fp.from_int(*c)).collect());

    let x_plus_1 = poly(&[1, 1]);
    let x_plus_2 = poly(&[2, 1]);
    let irred = poly(&[2, 0, 1]);

    let f = FpX.mul(FpX.pow(FpX.clone_el(&x_plus_1), 2), FpX.clone_el(&irred));
    let f = FpX.mul(f, FpX.pow(FpX.clone_el(&x_plus_2), 3));
    let f = FpX.mul(f, FpX.from_int(3));
    let decomposition = square_free_decomposition(&FpX, &f);
    assert_is_decomposition_of(&FpX, &decomposition, &f);
    assert_eq!(3, decomposition.len());
    assert!(decomposition.iter().any(|(g, m)| *m == 1 && FpX.eq_el(g, &irred)));
    assert!(decomposition.iter().any(|(g, m)| *m == 2 && FpX.eq_el(g, &x_plus_1)));
    assert!(decomposition.iter().any(|(g, m)| *m == 3 && FpX.eq_el(g, &x_plus_2)));

    let f = FpX.mul_ref(&x_plus_1, &x_plus_2);
    let decomposition = square_free_decomposition(&FpX, &f);
    assert_eq!(1, decomposition.len());
    assert_el_eq!(&FpX, &f, &decomposition[0].0);
    assert_eq!(1, decomposition[0].1);

    assert!(square_free_decomposition(&FpX, &FpX.from_int(2)).is_empty());
}

#[test]
fn test_square_free_decomposition_pth_powers() {
    let Fp = Zn::new(3).as_field().ok().unwrap();
    let FpX = DensePolyRing::new(Fp, "x");
    let poly = |coeffs: &[i32]| FpX.from_coefficients(coeffs.iter().map(|c| Fp.from_int(*c)).collect());

    // (x + 1)^3 has zero derivative
    let x_plus_1 = poly(&[1, 1]);
    let decomposition = square_free_decomposition(&FpX, &FpX.pow(FpX.clone_el(&x_plus_1), 3));
    assert_eq!(1, decomposition.len());
    assert_el_eq!(&FpX, &x_plus_1, &decomposition[0].0);
    assert_eq!(3, decomposition[0].1);

    let x = poly(&[0, 1]);
    let irred = poly(&[1, 0, 1]);
    let f = FpX.prod([
        FpX.pow(FpX.clone_el(&x_plus_1), 4),
        FpX.pow(FpX.clone_el(&irred), 6),
        FpX.clone_el(&x)
    ]);
    let decomposition = square_free_decomposition(&FpX, &f);
    assert_is_decomposition_of(&FpX, &decomposition, &f);
    assert_eq!(3, decomposition.len());
    assert!(decomposition.iter().any(|(g, m)| *m == 1 && FpX.eq_el(g, &x)));
    assert!(decomposition.iter().any(|(g, m)| *m == 4 && FpX.eq_el(g, &x_plus_1)));
    assert!(decomposition.iter().any(|(g, m)| *m == 6 && FpX.eq_el(g, &irred)));
}
