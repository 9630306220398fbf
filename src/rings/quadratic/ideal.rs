use crate::algorithms::int_factor::prime_factorize;
use crate::algorithms::poly_div::poly_rem;
use crate::algorithms::poly_factor::factorize;
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::poly::ideal::PolyIdeal;
use crate::rings::poly::*;
use crate::rings::zn::zn_64::Zn;
use crate::rings::zn::*;

use super::{QuadraticOrder, QuadraticOrderEl};

///
/// An ideal in a [`QuadraticOrder`].
///
/// Since the order is isomorphic to `Z[X]/(f)` for the minimal polynomial `f` of its
/// generator, the ideal `I = (x_1, ..., x_k)` corresponds to the ideal `(f, x_1(X), ..., x_k(X))`
/// of `Z[X]`. All operations work with the strong Groebner basis of the latter. The generators
/// stored in the ideal are the elements of this basis, reduced modulo `f`.
///
/// # Example
/// ```
/// # use ideal_arith::ring::*;
/// # use ideal_arith::rings::quadratic::*;
/// # use ideal_arith::rings::quadratic::ideal::*;
/// let ring = QuadraticOrder::new(-5);
/// // (2) = (2, 1 + sqrt(-5))^2, although 2 is irreducible
/// let two = QuadraticIdeal::new(&ring, vec![ring.from_int(2)]);
/// let prime = QuadraticIdeal::new(&ring, vec![ring.from_int(2), ring.from_coordinates(1, 1)]);
/// assert!(two.is_eq(&prime.mul(&prime)));
/// assert_eq!(2, prime.norm());
/// let factorization = two.prime_factorize();
/// assert_eq!(1, factorization.len());
/// assert!(factorization[0].0.is_eq(&prime));
/// assert_eq!(2, factorization[0].1);
/// ```
///
pub struct QuadraticIdeal {
    order: QuadraticOrder,
    poly_ideal: PolyIdeal<DensePolyRing<StaticRing<i64>>>,
    generators: Vec<QuadraticOrderEl>
}

impl QuadraticIdeal {

    pub fn new(order: &QuadraticOrder, generators: Vec<QuadraticOrderEl>) -> Self {
        let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "x");
        let modulus = order.minimal_polynomial(&ZZX);
        let poly_generators = std::iter::once(ZZX.clone_el(&modulus))
            .chain(generators.iter().map(|x| order.to_poly(&ZZX, x)))
            .collect();
        let poly_ideal = PolyIdeal::new(ZZX, poly_generators);
        let generators = poly_ideal.strong_groebner_basis().iter()
            .map(|f| poly_rem(poly_ideal.poly_ring(), poly_ideal.poly_ring().clone_el(f), &modulus))
            .filter(|f| !poly_ideal.poly_ring().is_zero(f))
            .map(|f| order.from_poly(poly_ideal.poly_ring(), &f))
            .collect();
        QuadraticIdeal { order: *order, poly_ideal, generators }
    }

    pub fn order(&self) -> &QuadraticOrder {
        &self.order
    }

    ///
    /// Returns a list of generators of this ideal. The zero ideal has no generators.
    ///
    pub fn generators(&self) -> &[QuadraticOrderEl] {
        &self.generators
    }

    pub fn is_zero(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn contains(&self, x: &QuadraticOrderEl) -> bool {
        self.poly_ideal.contains(&self.order.to_poly(self.poly_ideal.poly_ring(), x))
    }

    pub fn contains_ideal(&self, other: &QuadraticIdeal) -> bool {
        assert!(self.order == other.order, "ideals belong to different orders");
        other.generators.iter().all(|x| self.contains(x))
    }

    pub fn is_eq(&self, other: &QuadraticIdeal) -> bool {
        self.contains_ideal(other) && other.contains_ideal(self)
    }

    pub fn add(&self, other: &QuadraticIdeal) -> QuadraticIdeal {
        assert!(self.order == other.order, "ideals belong to different orders");
        QuadraticIdeal::new(&self.order, self.generators.iter().chain(other.generators.iter()).copied().collect())
    }

    pub fn mul(&self, other: &QuadraticIdeal) -> QuadraticIdeal {
        assert!(self.order == other.order, "ideals belong to different orders");
        let products = self.generators.iter()
            .flat_map(|x| other.generators.iter().map(move |y| self.order.mul_ref(x, y)))
            .collect();
        QuadraticIdeal::new(&self.order, products)
    }

    pub fn pow(&self, power: usize) -> QuadraticIdeal {
        let mut result = QuadraticIdeal::new(&self.order, vec![self.order.one()]);
        for _ in 0..power {
            result = result.mul(self);
        }
        return result;
    }

    ///
    /// Returns the norm of this ideal, i.e. the index `[A : I]`, where `A` is the order.
    /// The zero ideal has norm `0`.
    ///
    /// With `J` the corresponding ideal of `Z[X]`, the quotient `A/I` is isomorphic to the
    /// quotient of `Z + ZX` by the polynomials of degree at most 1 in `J`. This lattice has
    /// a triangular basis, whose diagonal consists of the generators of the ideals of leading
    /// coefficients of elements of degree 0 resp. degree at most 1 in `J`, and these can be
    /// read off the strong Groebner basis.
    ///
    pub fn norm(&self) -> i64 {
        let ZZ = StaticRing::<i64>::RING;
        let ZZX = self.poly_ideal.poly_ring();
        let basis = self.poly_ideal.strong_groebner_basis();
        let lc_ideal_gen = |max_deg: usize| basis.iter()
            .filter(|f| ZZX.degree(f).unwrap_or(0) <= max_deg)
            .filter_map(|f| ZZX.lc(f))
            .fold(0, |current, c| ZZ.ideal_gen(&current, c));
        let constant_part = lc_ideal_gen(0);
        if constant_part == 0 {
            return 0;
        }
        return constant_part * lc_ideal_gen(1);
    }

    ///
    /// Factors this ideal into prime ideals, and returns the list of pairs `(P, e)` such
    /// that this ideal is the product of all `P^e`. Since the order is the maximal order,
    /// this factorization exists and is unique. The unit ideal has the empty factorization.
    ///
    /// Every prime ideal `P` dividing this ideal lies over a rational prime `p` dividing the
    /// norm. These are found by factoring the minimal polynomial `f` over `F_p` as
    /// `f = g_1^e_1 ... g_r^e_r`, which gives the prime ideals `(p, g_i(w))` over `p`.
    ///
    /// Panics if this is the zero ideal.
    ///
    pub fn prime_factorize(&self) -> Vec<(QuadraticIdeal, usize)> {
        let norm = self.norm();
        assert!(norm != 0, "the zero ideal has no prime factorization");
        let ZZX = self.poly_ideal.poly_ring();
        let modulus = self.order.minimal_polynomial(ZZX);
        let mut result = Vec::new();
        for (p, _) in prime_factorize(norm.abs()) {
            let Ok(Fp) = Zn::new(p as u64).as_field() else {
                panic!("{} is not a prime", p);
            };
            let FpX = DensePolyRing::new(&Fp, "x");
            let reduced_modulus = FpX.from_terms(ZZX.terms(&modulus).map(|(c, i)| (Fp.from_i64(*c), i)));
            for (factor, _) in factorize(&FpX, &reduced_modulus) {
                let lifted_factor = ZZX.from_terms(FpX.terms(&factor).map(|(c, i)| (Fp.smallest_positive_lift(c), i)));
                let prime = QuadraticIdeal::new(&self.order, vec![
                    self.order.from_coordinates(p, 0),
                    self.order.from_poly(ZZX, &lifted_factor)
                ]);
                let exponent = self.prime_exponent(&prime);
                if exponent > 0 {
                    result.push((prime, exponent));
                }
            }
        }
        return result;
    }

    ///
    /// Returns the largest `k` such that `P^k` contains this ideal.
    ///
    fn prime_exponent(&self, prime: &QuadraticIdeal) -> usize {
        let mut exponent = 0;
        let mut current = QuadraticIdeal::new(&self.order, prime.generators.clone());
        while current.contains_ideal(self) {
            exponent += 1;
            current = current.mul(prime);
        }
        return exponent;
    }
}

#[cfg(test)]
fn assert_is_factorization_of(factorization: &[(QuadraticIdeal, usize)], ideal: &QuadraticIdeal) {
    let mut product = QuadraticIdeal::new(ideal.order(), vec![ideal.order().one()]);
    for (prime, exponent) in factorization {
        product = product.mul(&prime.pow(*exponent));
    }
    assert!(product.is_eq(ideal));
}

#[test]
fn test_contains() {
    let ring = QuadraticOrder::new(-5);
    let ideal = QuadraticIdeal::new(&ring, vec![ring.from_int(2), ring.from_coordinates(1, 1)]);
    assert!(ideal.contains(&ring.from_int(2)));
    assert!(ideal.contains(&ring.from_coordinates(1, 1)));
    assert!(ideal.contains(&ring.from_coordinates(3, 1)));
    assert!(ideal.contains(&ring.from_coordinates(1, -1)));
    assert!(ideal.contains(&ring.zero()));
    assert!(!ideal.contains(&ring.one()));
    assert!(!ideal.contains(&ring.generator()));

    let ideal = QuadraticIdeal::new(&ring, vec![ring.from_coordinates(1, 1)]);
    assert!(ideal.contains(&ring.from_int(6)));
    assert!(!ideal.contains(&ring.from_int(2)));
    assert!(!ideal.contains(&ring.from_int(3)));
}

#[test]
fn test_add_mul() {
    let ring = QuadraticOrder::new(-5);
    let two = QuadraticIdeal::new(&ring, vec![ring.from_int(2)]);
    let three = QuadraticIdeal::new(&ring, vec![ring.from_int(3)]);
    let one = QuadraticIdeal::new(&ring, vec![ring.one()]);
    assert!(two.add(&three).is_eq(&one));
    assert!(two.mul(&three).is_eq(&QuadraticIdeal::new(&ring, vec![ring.from_int(6)])));
    assert!(two.pow(0).is_eq(&one));

    // (6) = (1 + sqrt(-5))(1 - sqrt(-5))
    let lhs = QuadraticIdeal::new(&ring, vec![ring.from_coordinates(1, 1)]);
    let rhs = QuadraticIdeal::new(&ring, vec![ring.from_coordinates(1, -1)]);
    assert!(lhs.mul(&rhs).is_eq(&two.mul(&three)));
    assert!(!lhs.is_eq(&rhs));

    let zero = QuadraticIdeal::new(&ring, Vec::new());
    assert!(zero.is_zero());
    assert!(zero.mul(&two).is_zero());
    assert!(zero.add(&two).is_eq(&two));
    assert!(two.contains_ideal(&zero));
}

#[test]
fn test_norm() {
    let ring = QuadraticOrder::new(-5);
    assert_eq!(2, QuadraticIdeal::new(&ring, vec![ring.from_int(2), ring.from_coordinates(1, 1)]).norm());
    assert_eq!(4, QuadraticIdeal::new(&ring, vec![ring.from_int(2)]).norm());
    assert_eq!(1, QuadraticIdeal::new(&ring, vec![ring.from_int(2), ring.from_int(3)]).norm());
    assert_eq!(0, QuadraticIdeal::new(&ring, Vec::new()).norm());

    // the norm of a principal ideal is the absolute value of the norm of its generator
    for d in [-5, -3, -1, 2, 5] {
        let ring = QuadraticOrder::new(d);
        for (a, b) in [(1, 2), (3, -1), (4, 4), (7, 0), (0, 5)] {
            let x = ring.from_coordinates(a, b);
            assert_eq!(ring.norm(&x).abs(), QuadraticIdeal::new(&ring, vec![x]).norm());
        }
    }
}

#[test]
fn test_prime_factorize_ramified() {
    let ring = QuadraticOrder::new(-5);
    let two = QuadraticIdeal::new(&ring, vec![ring.from_int(2)]);
    let factorization = two.prime_factorize();
    assert_eq!(1, factorization.len());
    assert!(factorization[0].0.is_eq(&QuadraticIdeal::new(&ring, vec![ring.from_int(2), ring.from_coordinates(1, 1)])));
    assert_eq!(2, factorization[0].1);

    // (3) = P^2 with P = (1 + w) in Z[(1 + sqrt(-3))/2]
    let ring = QuadraticOrder::new(-3);
    let three = QuadraticIdeal::new(&ring, vec![ring.from_int(3)]);
    let factorization = three.prime_factorize();
    assert_eq!(1, factorization.len());
    assert!(factorization[0].0.is_eq(&QuadraticIdeal::new(&ring, vec![ring.from_coordinates(1, 1)])));
    assert_eq!(2, factorization[0].1);
}

#[test]
fn test_prime_factorize_split() {
    let ring = QuadraticOrder::new(-5);
    let three = QuadraticIdeal::new(&ring, vec![ring.from_int(3)]);
    let factorization = three.prime_factorize();
    assert_eq!(2, factorization.len());
    assert!(factorization.iter().all(|(_, e)| *e == 1));
    assert!(factorization.iter().any(|(prime, _)| prime.is_eq(&QuadraticIdeal::new(&ring, vec![ring.from_int(3), ring.from_coordinates(1, 1)]))));
    assert!(factorization.iter().any(|(prime, _)| prime.is_eq(&QuadraticIdeal::new(&ring, vec![ring.from_int(3), ring.from_coordinates(2, 1)]))));
    assert_is_factorization_of(&factorization, &three);

    let ring = QuadraticOrder::new(2);
    let seven = QuadraticIdeal::new(&ring, vec![ring.from_int(7)]);
    let factorization = seven.prime_factorize();
    assert_eq!(2, factorization.len());
    assert!(factorization.iter().all(|(prime, e)| *e == 1 && prime.norm() == 7));
    assert_is_factorization_of(&factorization, &seven);
}

#[test]
fn test_prime_factorize_inert() {
    let ring = QuadraticOrder::new(-1);
    let three = QuadraticIdeal::new(&ring, vec![ring.from_int(3)]);
    assert_eq!(9, three.norm());
    let factorization = three.prime_factorize();
    assert_eq!(1, factorization.len());
    assert!(factorization[0].0.is_eq(&three));
    assert_eq!(1, factorization[0].1);

    let ring = QuadraticOrder::new(-3);
    let two = QuadraticIdeal::new(&ring, vec![ring.from_int(2)]);
    let factorization = two.prime_factorize();
    assert_eq!(1, factorization.len());
    assert_eq!(4, factorization[0].0.norm());
    assert_eq!(1, factorization[0].1);
}

#[test]
fn test_prime_factorize() {
    let ring = QuadraticOrder::new(-5);
    // N(1 + 2 sqrt(-5)) = 21
    let ideal = QuadraticIdeal::new(&ring, vec![ring.from_coordinates(1, 2)]);
    let factorization = ideal.prime_factorize();
    assert_eq!(2, factorization.len());
    assert!(factorization.iter().any(|(prime, _)| prime.is_eq(&QuadraticIdeal::new(&ring, vec![ring.from_int(3), ring.from_coordinates(2, 1)]))));
    assert_is_factorization_of(&factorization, &ideal);

    let ideal = QuadraticIdeal::new(&ring, vec![ring.from_int(12), ring.from_coordinates(6, 6)]);
    let factorization = ideal.prime_factorize();
    assert_is_factorization_of(&factorization, &ideal);

    let ring = QuadraticOrder::new(5);
    let ideal = QuadraticIdeal::new(&ring, vec![ring.from_coordinates(11, 3)]);
    assert_is_factorization_of(&ideal.prime_factorize(), &ideal);

    assert!(QuadraticIdeal::new(&ring, vec![ring.generator()]).prime_factorize().is_empty());
}
