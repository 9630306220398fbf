use crate::divisibility::*;
use crate::field::*;
use crate::ring::*;

pub mod dense_poly;
pub mod ideal;

///
/// Trait for all rings that represent the polynomial ring `R[X]` with
/// any base ring R.
///
/// The degree of the zero polynomial is `None`, which plays the role of `-1`.
///
pub trait PolyRing: RingExtension {

    type TermsIterator<'a>: Iterator<Item = (&'a El<Self::BaseRing>, usize)>
        where Self: 'a;

    fn indeterminate(&self) -> Self::Element;

    ///
    /// Returns all nonzero terms `c * X^i` of the polynomial as pairs `(c, i)`,
    /// in ascending order of `i`.
    ///
    fn terms<'a>(&'a self, f: &'a Self::Element) -> Self::TermsIterator<'a>;

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: IntoIterator<Item = (El<Self::BaseRing>, usize)>
    {
        let self_ring = RingRef::new(self);
        self.add_assign(lhs, self_ring.sum(
            rhs.into_iter().map(|(c, i)| self.mul(self.from_base(c), self_ring.pow(self.indeterminate(), i)))
        ));
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing>;

    fn degree(&self, f: &Self::Element) -> Option<usize>;

    ///
    /// Multiplies the given polynomial by `X^power`.
    ///
    fn mul_assign_monomial(&self, f: &mut Self::Element, power: usize) {
        let self_ring = RingRef::new(self);
        self.mul_assign(f, self_ring.pow(self.indeterminate(), power));
    }

    ///
    /// Evaluates the polynomial at the given element of the base ring, using Horner's scheme.
    ///
    fn evaluate(&self, f: &Self::Element, value: &El<Self::BaseRing>) -> El<Self::BaseRing> {
        let base_ring = self.base_ring();
        let Some(d) = self.degree(f) else {
            return base_ring.zero();
        };
        let mut result = base_ring.clone_el(self.coefficient_at(f, d));
        for i in (0..d).rev() {
            base_ring.mul_assign_ref(&mut result, value);
            base_ring.add_assign_ref(&mut result, self.coefficient_at(f, i));
        }
        return result;
    }

    ///
    /// Computes the formal derivative of the polynomial.
    ///
    fn derivative(&self, f: &Self::Element) -> Self::Element {
        let mut result = self.zero();
        self.add_assign_from_terms(&mut result, self.terms(f).filter(|(_, i)| *i > 0).map(|(c, i)| {
            let mut coeff = self.base_ring().clone_el(c);
            self.base_ring().mul_assign(&mut coeff, scaled_index(self.base_ring(), i));
            (coeff, i - 1)
        }));
        return result;
    }
}

fn scaled_index<R: RingStore>(ring: R, i: usize) -> El<R> {
    let mut result = ring.zero();
    let mut remaining = i;
    while remaining > i32::MAX as usize {
        ring.add_assign(&mut result, ring.from_int(i32::MAX));
        remaining -= i32::MAX as usize;
    }
    ring.add_assign(&mut result, ring.from_int(remaining as i32));
    return result;
}

///
/// [`RingStore`] for [`PolyRing`]s
///
pub trait PolyRingStore: RingStore
    where Self::Type: PolyRing
{
    delegate!{ fn indeterminate(&self) -> El<Self> }
    delegate!{ fn degree(&self, f: &El<Self>) -> Option<usize> }
    delegate!{ fn mul_assign_monomial(&self, f: &mut El<Self>, power: usize) -> () }
    delegate!{ fn derivative(&self, f: &El<Self>) -> El<Self> }

    fn coefficient_at<'a>(&'a self, f: &'a El<Self>, i: usize) -> &'a El<<Self::Type as RingExtension>::BaseRing> {
        self.get_ring().coefficient_at(f, i)
    }

    fn terms<'a>(&'a self, f: &'a El<Self>) -> <Self::Type as PolyRing>::TermsIterator<'a> {
        self.get_ring().terms(f)
    }

    fn from_terms<I>(&self, iter: I) -> El<Self>
        where I: IntoIterator<Item = (El<<Self::Type as RingExtension>::BaseRing>, usize)>,
    {
        let mut result = self.zero();
        self.get_ring().add_assign_from_terms(&mut result, iter);
        return result;
    }

    fn evaluate(&self, f: &El<Self>, value: &El<<Self::Type as RingExtension>::BaseRing>) -> El<<Self::Type as RingExtension>::BaseRing> {
        self.get_ring().evaluate(f, value)
    }

    ///
    /// Returns the leading coefficient of the polynomial, or `None` if it is zero.
    ///
    fn lc<'a>(&'a self, f: &'a El<Self>) -> Option<&'a El<<Self::Type as RingExtension>::BaseRing>> {
        Some(self.coefficient_at(f, self.degree(f)?))
    }

    ///
    /// Multiplies the polynomial by a scalar from the base ring.
    ///
    fn mul_scalar(&self, mut f: El<Self>, c: &El<<Self::Type as RingExtension>::BaseRing>) -> El<Self> {
        self.mul_assign_base(&mut f, c);
        return f;
    }

    ///
    /// Computes `lhs / rhs`, assuming that the division is exact. Panics otherwise,
    /// in particular if `rhs` is zero.
    ///
    fn div_exact(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self>
        where <<Self::Type as RingExtension>::BaseRing as RingStore>::Type: DivisibilityRing
    {
        crate::algorithms::poly_div::poly_div_exact(self, lhs, rhs)
    }

    ///
    /// Divides the polynomial by its leading coefficient. Panics if the polynomial is zero.
    ///
    fn monicize(&self, f: El<Self>) -> El<Self>
        where <<Self::Type as RingExtension>::BaseRing as RingStore>::Type: Field
    {
        let Some(lc) = self.lc(&f) else {
            panic!("cannot make the zero polynomial monic");
        };
        let lc_inv = self.base_ring().div(&self.base_ring().one(), lc);
        return self.mul_scalar(f, &lc_inv);
    }
}

impl<R: RingStore> PolyRingStore for R
    where R::Type: PolyRing
{}

pub mod generic_impls {
    use crate::ring::*;
    use super::PolyRing;

    pub fn dbg_poly<P: PolyRing + ?Sized>(ring: &P, el: &P::Element, out: &mut std::fmt::Formatter, unknown_name: &str) -> std::fmt::Result {
        let terms = ring.terms(el).collect::<Vec<_>>();
        let print_unknown = |i: usize, out: &mut std::fmt::Formatter| {
            if i == 0 {
                // print nothing
                Ok(())
            } else if i == 1 {
                write!(out, "{}", unknown_name)
            } else {
                write!(out, "{}^{}", unknown_name, i)
            }
        };
        let print_term = |c: &El<P::BaseRing>, i: usize, out: &mut std::fmt::Formatter| {
            if i == 0 || !ring.base_ring().is_one(c) {
                ring.base_ring().get_ring().dbg(c, out)?;
            }
            print_unknown(i, out)
        };
        let mut iter = terms.into_iter().rev();
        if let Some((c, i)) = iter.next() {
            print_term(c, i, out)?;
        } else {
            write!(out, "0")?;
        }
        for (c, i) in iter {
            write!(out, " + ")?;
            print_term(c, i, out)?;
        }
        return Ok(());
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_poly_ring_axioms<R: PolyRingStore, I: Iterator<Item = El<<R::Type as RingExtension>::BaseRing>>>(ring: R, interesting_base_ring_elements: I)
        where R::Type: PolyRing
    {
        let x = ring.indeterminate();
        let elements = interesting_base_ring_elements.collect::<Vec<_>>();
        let base_ring = ring.base_ring();

        // test linear independence of X
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    for d in &elements {
                        let a_bx = ring.add(ring.from_base_ref(a), ring.mul_ref_snd(ring.from_base_ref(b), &x));
                        let c_dx = ring.add(ring.from_base_ref(c), ring.mul_ref_snd(ring.from_base_ref(d), &x));
                        assert!(ring.eq_el(&a_bx, &c_dx) == (base_ring.eq_el(a, c) && base_ring.eq_el(b, d)));
                    }
                }
            }
        }

        // test terms(), from_terms(), degree()
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    let f = ring.sum([
                        ring.from_base_ref(a),
                        ring.mul_ref_snd(ring.from_base_ref(b), &x),
                        ring.mul(ring.from_base_ref(c), ring.pow(ring.clone_el(&x), 3))
                    ]);
                    let actual = ring.from_terms([(base_ring.clone_el(a), 0), (base_ring.clone_el(c), 3), (base_ring.clone_el(b), 1)]);
                    assert_el_eq!(&ring, &f, &actual);
                    assert_el_eq!(&ring, &f, &ring.from_terms(ring.terms(&f).map(|(c, i)| (base_ring.clone_el(c), i))));
                    let expected_degree = if !base_ring.is_zero(c) {
                        Some(3)
                    } else if !base_ring.is_zero(b) {
                        Some(1)
                    } else if !base_ring.is_zero(a) {
                        Some(0)
                    } else {
                        None
                    };
                    assert_eq!(expected_degree, ring.degree(&f));
                }
            }
        }

        // test evaluate(), mul_assign_monomial(), derivative()
        for a in &elements {
            for b in &elements {
                let f = ring.from_terms([(base_ring.clone_el(a), 0), (base_ring.clone_el(b), 2)]);
                for c in &elements {
                    let expected = base_ring.add_ref_fst(a, base_ring.mul_ref_fst(b, base_ring.mul_ref(c, c)));
                    assert_el_eq!(base_ring, &expected, &ring.evaluate(&f, c));
                }
                let mut shifted = ring.clone_el(&f);
                ring.mul_assign_monomial(&mut shifted, 3);
                assert_el_eq!(&ring, &ring.mul(ring.clone_el(&f), ring.pow(ring.clone_el(&x), 3)), &shifted);
                assert_el_eq!(&ring, &ring.from_terms([(base_ring.mul_ref_fst(b, base_ring.from_int(2)), 1)]), &ring.derivative(&f));
            }
        }
    }
}
