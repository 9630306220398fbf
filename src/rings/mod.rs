///
/// This module contains the trait [`zn::ZnRing`] for all rings that represent a
/// quotient `Z/nZ` of the integers `Z`, and the implementation [`zn::zn_64::Zn`].
///
pub mod zn;

///
/// This module contains the trait [`poly::PolyRing`] for all rings that represent a
/// univariate polynomial ring `R[X]` over any base ring. Furthermore, it provides
/// the implementation [`poly::dense_poly::DensePolyRing`] and ideals [`poly::ideal::PolyIdeal`]
/// of such rings.
///
pub mod poly;

///
/// This module contains the wrapper [`field::AsField`] that can be used to create a ring
/// implementing [`crate::field::Field`] from rings that are fields, but do not implement
/// the trait (e.g. because being a field for them might be only determinable at runtime).
///
pub mod field;

///
/// An approximate implementation of the field of real numbers `R`, using 64-bit floating point
/// numbers.
///
pub mod float_real;

///
/// This module contains the trait [`finite::FiniteRing`] for all rings with finitely many elements.
///
pub mod finite;

///
/// This module contains [`quadratic::QuadraticOrder`], the maximal order of a quadratic number
/// field, and its ideals [`quadratic::ideal::QuadraticIdeal`].
///
pub mod quadratic;
