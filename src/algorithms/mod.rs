///
/// Contains [`sqr_mul::generic_abs_square_and_multiply()`] and other functions
/// for computing a power of an element in a generic monoid.
///
pub mod sqr_mul;
///
/// Contains multiple variants of the Extended Euclidean Algorithm, and
/// [`eea::solve_linear_diophantine()`].
///
pub mod eea;
///
/// Contains [`crt::mod_reduce()`] and [`crt::garner_combine()`] for combining
/// congruences with possibly non-coprime moduli.
///
pub mod crt;
///
/// Contains [`int_factor::prime_factorize()`], factorization of small integers
/// by trial division.
///
pub mod int_factor;
///
/// Contains top-reduction, the normal form w.r.t. a set of polynomials and polynomial
/// division over rings that are not necessarily fields.
///
pub mod poly_div;
///
/// Contains an implementation of Buchberger's algorithm for strong Groebner bases
/// of ideals in univariate polynomial rings over principal ideal domains.
///
pub mod buchberger;
///
/// Contains [`poly_squarefree::square_free_decomposition()`] for polynomials over
/// prime fields.
///
pub mod poly_squarefree;
///
/// Contains distinct-degree factorization and the Cantor-Zassenhaus algorithm
/// for equal-degree factorization over prime fields.
///
pub mod cantor_zassenhaus;
///
/// Contains [`poly_factor::factorize()`], the factorization of polynomials over
/// prime fields.
///
pub mod poly_factor;
