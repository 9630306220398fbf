use crate::ring::*;
use crate::divisibility::*;
use crate::pid::*;

///
/// Trait for rings that are fields, i.e. where every nonzero element has an inverse.
///
/// Polynomial rings over fields are euclidean, which is the setting of all
/// factorization algorithms in this crate.
///
pub trait Field: EuclideanRing {}

///
/// [`RingStore`] for [`Field`]s
///
pub trait FieldStore: RingStore
    where Self::Type: Field
{
    ///
    /// Divides `lhs` by `rhs`. Panics if `rhs` is zero.
    ///
    fn div(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> {
        assert!(!self.is_zero(rhs), "division by zero");
        match self.checked_div(lhs, rhs) {
            Some(result) => result,
            None => unreachable!("nonzero element of a field has no inverse")
        }
    }

    fn invert(&self, x: &El<Self>) -> Option<El<Self>> {
        self.checked_div(&self.one(), x)
    }
}

impl<R> FieldStore for R
    where R: RingStore,
        R::Type: Field
{}
