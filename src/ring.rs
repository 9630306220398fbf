use std::cmp::Ordering;
use std::fmt::Formatter;

use crate::algorithms;
use crate::primitive_int::StaticRing;

///
/// Basic trait for objects that have a ring structure.
///
/// Implementors of this trait should provide the basic ring operations,
/// and additionally operators for displaying and equality testing. If
/// a performance advantage can be achieved by accepting some arguments by
/// reference instead of by value, the default-implemented functions for
/// ring operations on references should be overwritten.
///
/// Note that usually, this trait will not be used directly, but always
/// through a [`RingStore`]. In more detail, while this trait defines the
/// functionality, [`RingStore`] allows abstracting the storage - everything
/// that allows access to a ring then is a [`RingStore`], for example references
/// to rings or the no-op container [`RingValue`].
///
/// # Zero test
///
/// All normalization of composite elements (e.g. removing vanishing leading
/// coefficients of polynomials) goes through [`RingBase::is_zero()`]. For exact
/// rings, this is an exact comparison. Approximate rings (see [`RingBase::is_approximate()`])
/// override it with a tolerance-based check, which is the only difference algorithms
/// will observe between these two kinds of rings.
///
pub trait RingBase {

    type Element: Sized;

    fn clone_el(&self, val: &Self::Element) -> Self::Element;
    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.add_assign(lhs, self.clone_el(rhs)) }
    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.sub_assign(lhs, self.clone_el(rhs)) }
    fn negate_inplace(&self, lhs: &mut Self::Element);
    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.mul_assign(lhs, self.clone_el(rhs)) }
    fn zero(&self) -> Self::Element { self.from_int(0) }
    fn one(&self) -> Self::Element { self.from_int(1) }
    fn neg_one(&self) -> Self::Element { self.from_int(-1) }
    fn from_int(&self, value: i32) -> Self::Element;
    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;
    fn is_zero(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.zero()) }
    fn is_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.one()) }
    fn is_neg_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.neg_one()) }
    fn is_commutative(&self) -> bool;

    ///
    /// Whether elements of this ring are only approximations, e.g. floating point numbers.
    /// In this case, [`RingBase::is_zero()`] and [`RingBase::eq_el()`] are tolerance-based.
    ///
    fn is_approximate(&self) -> bool { false }

    ///
    /// Returns the characteristic of the ring, i.e. the nonnegative generator of the
    /// kernel of `Z -> R`.
    ///
    fn characteristic(&self) -> i64;

    fn dbg<'a>(&self, value: &Self::Element, out: &mut Formatter<'a>) -> std::fmt::Result;

    fn square(&self, value: &mut Self::Element) {
        *value = self.mul_ref(value, value);
    }

    fn negate(&self, mut value: Self::Element) -> Self::Element {
        self.negate_inplace(&mut value);
        return value;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, mut rhs: Self::Element) {
        self.negate_inplace(&mut rhs);
        self.add_assign(lhs, rhs);
    }

    fn mul_assign_int(&self, lhs: &mut Self::Element, rhs: i32) {
        self.mul_assign(lhs, self.from_int(rhs));
    }

    fn add_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.add_assign_ref(&mut result, rhs);
        return result;
    }

    fn add_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.add_assign_ref(&mut rhs, lhs);
        return rhs;
    }

    fn add_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn add(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.add_assign(&mut lhs, rhs);
        return lhs;
    }

    fn sub_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.sub_assign_ref(&mut result, rhs);
        return result;
    }

    fn sub_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut rhs, lhs);
        self.negate_inplace(&mut rhs);
        return rhs;
    }

    fn sub_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn sub(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.sub_assign(&mut lhs, rhs);
        return lhs;
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.mul_assign_ref(&mut result, rhs);
        return result;
    }

    fn mul_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        if self.is_commutative() {
            self.mul_assign_ref(&mut rhs, lhs);
            return rhs;
        } else {
            let mut result = self.clone_el(lhs);
            self.mul_assign(&mut result, rhs);
            return result;
        }
    }

    fn mul_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.mul_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn mul(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.mul_assign(&mut lhs, rhs);
        return lhs;
    }
}

macro_rules! delegate {
    (fn $name:ident (&self, $($pname:ident: $ptype:ty),*) -> $rtype:ty) => {
        fn $name (&self, $($pname: $ptype),*) -> $rtype {
            self.get_ring().$name($($pname),*)
        }
    };
    (fn $name:ident (&self) -> $rtype:ty) => {
        fn $name (&self) -> $rtype {
            self.get_ring().$name()
        }
    };
}

///
/// Basic trait for objects that store (in some sense) a ring. This can
/// be a ring-by-value, a reference to a ring, or a box to a ring.
///
/// As opposed to [`RingBase`], which is responsible for the functionality
/// and ring operations, this trait is solely responsible for the storage.
/// All algorithms in this crate take their rings as [`RingStore`]s, so they
/// can be called both with a ring and with a reference to a ring.
///
pub trait RingStore: Sized {

    type Type: RingBase + ?Sized;

    fn get_ring<'a>(&'a self) -> &'a Self::Type;

    delegate!{ fn clone_el(&self, val: &El<Self>) -> El<Self> }
    delegate!{ fn add_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn add_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn sub_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn sub_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn negate_inplace(&self, lhs: &mut El<Self>) -> () }
    delegate!{ fn mul_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn mul_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn mul_assign_int(&self, lhs: &mut El<Self>, rhs: i32) -> () }
    delegate!{ fn zero(&self) -> El<Self> }
    delegate!{ fn one(&self) -> El<Self> }
    delegate!{ fn neg_one(&self) -> El<Self> }
    delegate!{ fn from_int(&self, value: i32) -> El<Self> }
    delegate!{ fn eq_el(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_zero(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_neg_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_commutative(&self) -> bool }
    delegate!{ fn is_approximate(&self) -> bool }
    delegate!{ fn characteristic(&self) -> i64 }
    delegate!{ fn square(&self, value: &mut El<Self>) -> () }
    delegate!{ fn negate(&self, value: El<Self>) -> El<Self> }
    delegate!{ fn add_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn add_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }

    fn pow(&self, x: El<Self>, power: usize) -> El<Self> {
        algorithms::sqr_mul::generic_abs_square_and_multiply(
            x,
            &(power as i64),
            StaticRing::<i64>::RING,
            |mut a| {
                self.square(&mut a);
                a
            },
            |a, b| self.mul_ref_fst(a, b),
            self.one()
        )
    }

    fn sum<I>(&self, els: I) -> El<Self>
        where I: IntoIterator<Item = El<Self>>
    {
        els.into_iter().fold(self.zero(), |a, b| self.add(a, b))
    }

    fn prod<I>(&self, els: I) -> El<Self>
        where I: IntoIterator<Item = El<Self>>
    {
        els.into_iter().fold(self.one(), |a, b| self.mul(a, b))
    }

    fn base_ring<'a>(&'a self) -> &'a <Self::Type as RingExtension>::BaseRing
        where Self::Type: RingExtension
    {
        self.get_ring().base_ring()
    }

    fn from_base(&self, x: El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from_base(x)
    }

    fn from_base_ref(&self, x: &El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from_base_ref(x)
    }

    fn mul_assign_base(&self, lhs: &mut El<Self>, rhs: &El<<Self::Type as RingExtension>::BaseRing>)
        where Self::Type: RingExtension
    {
        self.get_ring().mul_assign_base(lhs, rhs)
    }

    fn format<'a>(&'a self, value: &'a El<Self>) -> RingElementDisplayWrapper<'a, Self> {
        RingElementDisplayWrapper { ring: self, element: value }
    }

    fn println(&self, value: &El<Self>) {
        println!("{}", self.format(value));
    }
}

pub struct RingElementDisplayWrapper<'a, R: RingStore> {
    ring: &'a R,
    element: &'a El<R>
}

impl<'a, R: RingStore> std::fmt::Display for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.get_ring().dbg(self.element, f)
    }
}

///
/// Trait for rings that are an extension of a base ring, i.e. come with
/// a canonical inclusion `S -> R`. The main example are polynomial rings `S[X]`.
///
pub trait RingExtension: RingBase {

    type BaseRing: RingStore;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing;

    fn from_base(&self, x: El<Self::BaseRing>) -> Self::Element;

    fn from_base_ref(&self, x: &El<Self::BaseRing>) -> Self::Element {
        self.from_base(self.base_ring().clone_el(x))
    }

    ///
    /// Multiplies the given element by the image of an element of the base ring,
    /// i.e. performs scalar multiplication.
    ///
    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        self.mul_assign(lhs, self.from_base_ref(rhs));
    }
}

///
/// Trait for rings whose elements can be sorted deterministically.
///
/// The order does not have to be compatible with the ring operations (e.g.
/// for `Z/nZ`, the elements are usually compared by their smallest nonnegative
/// representative). It is used whenever algorithms need a deterministic processing
/// order, e.g. for the queue of S-polynomials during Groebner basis computations.
///
pub trait ComparableElRing: RingBase {

    fn cmp_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering;
}

///
/// [`RingStore`] for [`ComparableElRing`]s
///
pub trait ComparableElRingStore: RingStore
    where Self::Type: ComparableElRing
{
    delegate!{ fn cmp_el(&self, lhs: &El<Self>, rhs: &El<Self>) -> Ordering }
}

impl<R> ComparableElRingStore for R
    where R: RingStore,
        R::Type: ComparableElRing
{}

pub type El<R> = <<R as RingStore>::Type as RingBase>::Element;

///
/// The most fundamental [`RingStore`]. It is basically a no-op container,
/// i.e. stores a [`RingBase`] object by value, and allows accessing it.
///
/// The usual pattern is to create a ring type as
/// ```ignore
/// struct ABase { ... }
/// impl RingBase for ABase { ... }
/// ```
/// and then provide a type alias
/// ```ignore
/// type A = RingValue<ABase>;
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RingValue<R: RingBase> {
    ring: R
}

impl<R: RingBase> RingValue<R> {

    pub const fn from(value: R) -> Self {
        RingValue { ring: value }
    }

    pub fn into(self) -> R {
        self.ring
    }
}

impl<R: RingBase> RingStore for RingValue<R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        &self.ring
    }
}

///
/// The second most basic [`RingStore`]. Similarly to [`RingValue`] it is just
/// a no-op container, but stores a reference.
///
/// This is mainly required to implement ring functionality on the level of
/// [`RingBase`] through algorithms that take a [`RingStore`], e.g. implementing
/// euclidean division of polynomials through [`crate::algorithms::poly_div`].
///
pub struct RingRef<'a, R: RingBase + ?Sized> {
    ring: &'a R
}

impl<'a, R: RingBase + ?Sized> Clone for RingRef<'a, R> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: RingBase + ?Sized> Copy for RingRef<'a, R> {}

impl<'a, R: RingBase + ?Sized> RingRef<'a, R> {

    pub const fn new(value: &'a R) -> Self {
        RingRef { ring: value }
    }
}

impl<'a, R: RingBase + ?Sized> RingStore for RingRef<'a, R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        self.ring
    }
}

impl<'a, S: RingStore> RingStore for &'a S {

    type Type = <S as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

///
/// Asserts that two elements are equal w.r.t. the given ring. All three
/// arguments are expected to be references.
///
#[macro_export]
macro_rules! assert_el_eq {
    ($ring:expr, $lhs:expr, $rhs:expr) => {
        match ($ring, $lhs, $rhs) {
            (ring_val, lhs_val, rhs_val) => {
                assert!(
                    $crate::ring::RingStore::eq_el(&ring_val, lhs_val, rhs_val),
                    "Assertion failed: {} != {}",
                    $crate::ring::RingStore::format(&ring_val, lhs_val),
                    $crate::ring::RingStore::format(&ring_val, rhs_val)
                );
            }
        }
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_ring_axioms<R: RingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = ring.zero();
        let one = ring.one();

        // check self-subtraction
        for a in &elements {
            assert!(ring.eq_el(&zero, &ring.sub_ref(a, a)), "{} - {} != 0", ring.format(a), ring.format(a));
        }

        // check identity elements
        for a in &elements {
            assert!(ring.eq_el(a, &ring.add_ref(a, &zero)));
            assert!(ring.eq_el(a, &ring.mul_ref(a, &one)));
        }

        // check commutativity
        for a in &elements {
            for b in &elements {
                assert!(ring.eq_el(&ring.add_ref(a, b), &ring.add_ref(b, a)));
                if ring.is_commutative() {
                    assert!(ring.eq_el(&ring.mul_ref(a, b), &ring.mul_ref(b, a)));
                }
            }
        }

        // check associativity and distributivity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert!(ring.eq_el(
                        &ring.add_ref_fst(a, ring.add_ref(b, c)),
                        &ring.add_ref_snd(ring.add_ref(a, b), c)
                    ));
                    assert!(ring.eq_el(
                        &ring.mul_ref_fst(a, ring.mul_ref(b, c)),
                        &ring.mul_ref_snd(ring.mul_ref(a, b), c)
                    ));
                    assert!(ring.eq_el(
                        &ring.mul_ref_fst(a, ring.add_ref(b, c)),
                        &ring.add(ring.mul_ref(a, b), ring.mul_ref(a, c))
                    ));
                }
            }
        }

        // check negation
        for a in &elements {
            assert!(ring.is_zero(&ring.add_ref_fst(a, ring.negate(ring.clone_el(a)))));
        }
    }
}

#[cfg(test)]
use crate::rings::zn::zn_64::Zn;

#[test]
fn test_ring_stores_dont_matter() {
    let ZZ = StaticRing::<i64>::RING;
    let ZZ_ref = RingRef::new(ZZ.get_ring());
    assert_eq!(ZZ.add(3, 4), ZZ_ref.add(3, 4));
    assert_eq!(ZZ.mul(3, 4), (&&ZZ).mul(3, 4));
    assert_el_eq!(&ZZ_ref, &12, &(&ZZ).mul(3, 4));
}

#[test]
fn test_pow() {
    let ZZ = StaticRing::<i64>::RING;
    assert_eq!(1, ZZ.pow(7, 0));
    assert_eq!(7, ZZ.pow(7, 1));
    assert_eq!(7 * 7 * 7 * 7 * 7, ZZ.pow(7, 5));

    let ring = Zn::new(11);
    assert_el_eq!(&ring, &ring.one(), &ring.pow(ring.from_int(3), 10));
}

#[test]
fn test_sum_prod() {
    let ZZ = StaticRing::<i64>::RING;
    assert_eq!(10, ZZ.sum([1, 2, 3, 4]));
    assert_eq!(24, ZZ.prod([1, 2, 3, 4]));
    assert_eq!(0, ZZ.sum([]));
    assert_eq!(1, ZZ.prod([]));
}

#[test]
fn test_format() {
    let ZZ = StaticRing::<i64>::RING;
    assert_eq!("-5", format!("{}", ZZ.format(&-5)));
}
