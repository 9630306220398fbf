use std::cell::OnceCell;

use crate::algorithms::buchberger::*;
use crate::algorithms::poly_div::normal_form;
use crate::computation::*;
use crate::pid::*;
use crate::primitive_int::StaticRingBase;
use crate::ring::*;
use crate::rings::poly::*;

///
/// An ideal in a univariate polynomial ring `R[X]`, given by a list of generators.
///
/// If `R` is a euclidean domain, the ideal can compute its strong Groebner basis,
/// which is cached and then used to decide membership and equality of ideals.
///
/// # Example
/// ```
/// # use ideal_arith::ring::*;
/// # use ideal_arith::primitive_int::*;
/// # use ideal_arith::rings::poly::*;
/// # use ideal_arith::rings::poly::dense_poly::*;
/// # use ideal_arith::rings::poly::ideal::*;
/// let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
/// let ideal = PolyIdeal::new(&ZZX, vec![ZZX.from_coefficients(vec![-1, 0, 1]), ZZX.from_coefficients(vec![-1, 1])]);
/// assert!(ideal.contains(&ZZX.from_coefficients(vec![-1, 0, 0, 1])));
/// assert!(!ideal.contains(&ZZX.one()));
/// assert!(ideal.is_eq(&PolyIdeal::new(&ZZX, vec![ZZX.from_coefficients(vec![1, -1])])));
/// ```
///
pub struct PolyIdeal<P>
    where P: RingStore,
        P::Type: PolyRing
{
    poly_ring: P,
    generators: Vec<El<P>>,
    basis: OnceCell<Vec<El<P>>>
}

impl<P> PolyIdeal<P>
    where P: RingStore,
        P::Type: PolyRing
{
    pub fn new(poly_ring: P, generators: Vec<El<P>>) -> Self {
        PolyIdeal { poly_ring, generators, basis: OnceCell::new() }
    }

    pub fn poly_ring(&self) -> &P {
        &self.poly_ring
    }

    pub fn generators(&self) -> &[El<P>] {
        &self.generators
    }
}

impl<P> PolyIdeal<P>
    where P: RingStore,
        P::Type: PolyRing + ComparableElRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: EuclideanRing
{
    ///
    /// Returns a strong Groebner basis of this ideal, see [`strong_groebner_basis()`].
    /// The basis is computed on first use only.
    ///
    pub fn strong_groebner_basis(&self) -> &[El<P>] {
        self.strong_groebner_basis_with(DontObserve)
    }

    ///
    /// Same as [`PolyIdeal::strong_groebner_basis()`], but reports the progress of the computation
    /// to the given controller. If the basis has already been computed, nothing is reported.
    ///
    pub fn strong_groebner_basis_with<Controller>(&self, controller: Controller) -> &[El<P>]
        where Controller: ComputationController
    {
        self.basis.get_or_init(|| strong_groebner_basis(
            &self.poly_ring,
            self.generators.iter().map(|f| self.poly_ring.clone_el(f)).collect(),
            controller
        ))
    }

    ///
    /// Checks whether `f` is in this ideal, by reducing it w.r.t. the strong Groebner basis.
    ///
    pub fn contains(&self, f: &El<P>) -> bool {
        self.poly_ring.is_zero(&normal_form(&self.poly_ring, self.poly_ring.clone_el(f), self.strong_groebner_basis()))
    }

    ///
    /// Checks whether every generator of `other` is in this ideal.
    ///
    pub fn contains_ideal<Q>(&self, other: &PolyIdeal<Q>) -> bool
        where Q: RingStore<Type = P::Type>
    {
        other.generators().iter().all(|f| self.contains(f))
    }

    pub fn is_eq<Q>(&self, other: &PolyIdeal<Q>) -> bool
        where Q: RingStore<Type = P::Type>
    {
        self.contains_ideal(other) && other.contains_ideal(self)
    }
}

impl<P> PolyIdeal<P>
    where P: RingStore,
        P::Type: PolyRing,
        <P::Type as RingExtension>::BaseRing: RingStore<Type = StaticRingBase<i64>>
{
    ///
    /// Computes the two generators `(X + c, n)` of an ideal `(X^2 - d, a_1 + b_1 X, ..., a_k + b_k X)`
    /// of `Z[X]`, see [`strong_groebner_basis_quadratic_order()`].
    ///
    /// This does not use or fill the cached strong Groebner basis.
    ///
    pub fn strong_groebner_basis_for_quadratic_order(&self) -> (El<P>, El<P>) {
        strong_groebner_basis_quadratic_order(&self.poly_ring, &self.generators)
    }
}

#[cfg(test)]
use crate::primitive_int::StaticRing;
#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::zn_64::Zn;

#[test]
fn test_contains() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let poly = |coeffs: &[i64]| ZZX.from_coefficients(coeffs.to_vec());

    // (2, x + 1) in Z[x]
    let ideal = PolyIdeal::new(&ZZX, vec![poly(&[2]), poly(&[1, 1])]);
    assert!(ideal.contains(&poly(&[0, 2])));
    assert!(ideal.contains(&poly(&[3, 1])));
    assert!(ideal.contains(&poly(&[1, 0, 1])));
    assert!(ideal.contains(&ZZX.zero()));
    assert!(!ideal.contains(&poly(&[1])));
    assert!(!ideal.contains(&poly(&[0, 1])));
    assert!(!ideal.contains(&poly(&[1, 0, 0, 1, 1])));

    // every combination of the generators is contained
    let f = poly(&[-1, 0, 1]);
    let g = poly(&[6, 4]);
    let ideal = PolyIdeal::new(&ZZX, vec![ZZX.clone_el(&f), ZZX.clone_el(&g)]);
    for a in [poly(&[1]), poly(&[-3, 2]), poly(&[0, 0, 7])] {
        for b in [poly(&[0]), poly(&[5, 1]), poly(&[1, -1, 1])] {
            let element = ZZX.add(ZZX.mul_ref(&a, &f), ZZX.mul_ref(&b, &g));
            assert!(ideal.contains(&element));
        }
    }
    assert!(!ideal.contains(&poly(&[2])));
}

#[test]
fn test_basis_is_cached() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let ideal = PolyIdeal::new(&ZZX, vec![ZZX.from_coefficients(vec![4, 0, 1]), ZZX.from_coefficients(vec![0, 2])]);
    let first = ideal.strong_groebner_basis_with(LogProgress).as_ptr();
    let second = ideal.strong_groebner_basis().as_ptr();
    assert_eq!(first, second);
}

#[test]
fn test_is_eq() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let poly = |coeffs: &[i64]| ZZX.from_coefficients(coeffs.to_vec());

    let lhs = PolyIdeal::new(&ZZX, vec![poly(&[-1, 0, 1]), poly(&[-1, 1])]);
    let rhs = PolyIdeal::new(&ZZX, vec![poly(&[-1, 1])]);
    assert!(lhs.is_eq(&rhs));
    assert!(rhs.is_eq(&lhs));

    // (6, 2x) != (2, 2x)
    let lhs = PolyIdeal::new(&ZZX, vec![poly(&[6]), poly(&[0, 2])]);
    let rhs = PolyIdeal::new(&ZZX, vec![poly(&[2]), poly(&[0, 2])]);
    assert!(!lhs.is_eq(&rhs));
    assert!(rhs.contains_ideal(&lhs));
    assert!(!lhs.contains_ideal(&rhs));

    let zero = PolyIdeal::new(&ZZX, Vec::new());
    assert!(zero.is_eq(&PolyIdeal::new(&ZZX, vec![ZZX.zero()])));
    assert!(!zero.contains(&poly(&[1])));
}

#[test]
fn test_contains_over_field() {
    let Fp = Zn::new(7).as_field().ok().unwrap();
    let FpX = DensePolyRing::new(&Fp, "x");
    let poly = |coeffs: &[i32]| FpX.from_coefficients(coeffs.iter().map(|c| Fp.from_int(*c)).collect());

    // gcd(x^2 - 1, x^2 + x - 2) = x - 1
    let ideal = PolyIdeal::new(&FpX, vec![poly(&[-1, 0, 1]), poly(&[-2, 1, 1])]);
    assert_eq!(1, ideal.strong_groebner_basis().len());
    assert!(ideal.contains(&poly(&[-1, 1])));
    assert!(!ideal.contains(&poly(&[1, 1])));
    assert!(ideal.is_eq(&PolyIdeal::new(&FpX, vec![poly(&[3, -3])])));
}

#[test]
fn test_strong_groebner_basis_for_quadratic_order() {
    let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
    let poly = |coeffs: &[i64]| ZZX.from_coefficients(coeffs.to_vec());

    // the ideal (3, 2 + sqrt(-5)) in Z[sqrt(-5)]
    let ideal = PolyIdeal::new(&ZZX, vec![poly(&[5, 0, 1]), poly(&[3]), poly(&[2, 1])]);
    let (f, n) = ideal.strong_groebner_basis_for_quadratic_order();
    assert_el_eq!(&ZZX, &poly(&[2, 1]), &f);
    assert_el_eq!(&ZZX, &poly(&[3]), &n);
    assert!(ideal.is_eq(&PolyIdeal::new(&ZZX, vec![poly(&[5, 0, 1]), f, n])));
}
