//! Leaf filters: constants and wrapped closures.

use std::fmt;
use std::marker::PhantomData;

use crate::error::FilterError;
use crate::tri::Tri;

use super::traits::TernaryFilter;

/// A filter answering the same outcome for every element.
pub struct ConstantFilter<E> {
    outcome: Tri,
    _phantom: PhantomData<fn(&E) -> Tri>,
}

impl<E> ConstantFilter<E> {
    #[inline]
    pub const fn new(outcome: Tri) -> Self {
        Self {
            outcome,
            _phantom: PhantomData,
        }
    }

    #[inline]
    pub const fn outcome(&self) -> Tri {
        self.outcome
    }
}

// Manual impls: derives would require `E: Clone` and friends.
impl<E> Clone for ConstantFilter<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ConstantFilter<E> {}

impl<E> fmt::Debug for ConstantFilter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstantFilter").field(&self.outcome).finish()
    }
}

impl<E> TernaryFilter<E> for ConstantFilter<E> {
    #[inline]
    fn evaluate(&self, _: &E) -> Tri {
        self.outcome
    }

    fn describe(&self) -> String {
        match self.outcome {
            Tri::Accept => String::from("accepts_all()"),
            Tri::Reject => String::from("accepts_none()"),
            Tri::Unsupported => String::from("supports_none()"),
        }
    }
}

/// A filter wrapping a closure that answers a [`Tri`] directly.
pub struct FnFilter<E, F> {
    f: F,
    _phantom: PhantomData<fn(&E) -> Tri>,
}

impl<E, F> FnFilter<E, F>
where
    F: Fn(&E) -> Tri,
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<E, F> TernaryFilter<E> for FnFilter<E, F>
where
    F: Fn(&E) -> Tri,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        (self.f)(element)
    }

    fn describe(&self) -> String {
        String::from("from_fn(..)")
    }
}

/// A filter wrapping a strict predicate. Never answers `Unsupported`.
pub struct PredicateFilter<E, P> {
    predicate: P,
    _phantom: PhantomData<fn(&E) -> Tri>,
}

impl<E, P> PredicateFilter<E, P>
where
    P: Fn(&E) -> bool,
{
    #[inline]
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<E, P> TernaryFilter<E> for PredicateFilter<E, P>
where
    P: Fn(&E) -> bool,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        Tri::from((self.predicate)(element))
    }

    fn describe(&self) -> String {
        String::from("from_predicate(..)")
    }
}

/// A filter built from a support predicate and an acceptance predicate.
///
/// The acceptance predicate is only called on supported elements.
pub struct SupportedPredicateFilter<E, S, A> {
    is_supported: S,
    is_accepted: A,
    _phantom: PhantomData<fn(&E) -> Tri>,
}

impl<E, S, A> SupportedPredicateFilter<E, S, A>
where
    S: Fn(&E) -> bool,
    A: Fn(&E) -> bool,
{
    #[inline]
    pub fn new(is_supported: S, is_accepted: A) -> Self {
        Self {
            is_supported,
            is_accepted,
            _phantom: PhantomData,
        }
    }
}

impl<E, S, A> TernaryFilter<E> for SupportedPredicateFilter<E, S, A>
where
    S: Fn(&E) -> bool,
    A: Fn(&E) -> bool,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        if (self.is_supported)(element) {
            Tri::from((self.is_accepted)(element))
        } else {
            Tri::Unsupported
        }
    }

    fn describe(&self) -> String {
        String::from("from_predicates(..)")
    }
}

/// Returns a filter answering `outcome` for every element.
#[inline]
pub const fn constant<E>(outcome: Tri) -> ConstantFilter<E> {
    ConstantFilter::new(outcome)
}

/// Returns a filter accepting every element.
#[inline]
pub const fn accepts_all<E>() -> ConstantFilter<E> {
    ConstantFilter::new(Tri::Accept)
}

/// Returns a filter rejecting every element.
#[inline]
pub const fn accepts_none<E>() -> ConstantFilter<E> {
    ConstantFilter::new(Tri::Reject)
}

/// Returns a filter supporting no element.
///
/// This is the usual starting point for building a filter rule by rule.
#[inline]
pub const fn supports_none<E>() -> ConstantFilter<E> {
    ConstantFilter::new(Tri::Unsupported)
}

/// Wraps a closure answering a [`Tri`].
#[inline]
pub fn from_fn<E, F>(f: F) -> FnFilter<E, F>
where
    F: Fn(&E) -> Tri,
{
    FnFilter::new(f)
}

/// Wraps a strict predicate: `true` accepts, `false` rejects.
///
/// # Example
///
/// ```
/// use trifilter_core::{from_predicate, TernaryFilter, Tri};
///
/// let positive = from_predicate(|n: &i32| *n > 0);
/// assert_eq!(positive.evaluate(&3), Tri::Accept);
/// assert_eq!(positive.evaluate(&-3), Tri::Reject);
/// ```
#[inline]
pub fn from_predicate<E, P>(predicate: P) -> PredicateFilter<E, P>
where
    P: Fn(&E) -> bool,
{
    PredicateFilter::new(predicate)
}

/// Combines a support predicate with an acceptance predicate.
///
/// Elements failing `is_supported` are `Unsupported`, and `is_accepted` is
/// not called for them.
///
/// # Example
///
/// ```
/// use trifilter_core::{from_predicates, TernaryFilter, Tri};
///
/// let small_even = from_predicates(|n: &i32| *n < 10, |n: &i32| n % 2 == 0);
/// assert_eq!(small_even.evaluate(&4), Tri::Accept);
/// assert_eq!(small_even.evaluate(&5), Tri::Reject);
/// assert_eq!(small_even.evaluate(&12), Tri::Unsupported);
/// ```
#[inline]
pub fn from_predicates<E, S, A>(is_supported: S, is_accepted: A) -> SupportedPredicateFilter<E, S, A>
where
    S: Fn(&E) -> bool,
    A: Fn(&E) -> bool,
{
    SupportedPredicateFilter::new(is_supported, is_accepted)
}

/// Fallible form of [`from_predicate`] for a predicate that may be absent.
///
/// # Errors
///
/// Returns [`FilterError::InvalidArgument`] when `predicate` is `None`.
pub fn try_from_predicate<E, P>(predicate: Option<P>) -> Result<PredicateFilter<E, P>, FilterError<E>>
where
    P: Fn(&E) -> bool,
{
    let predicate = predicate.ok_or_else(|| missing("No predicate provided"))?;
    Ok(PredicateFilter::new(predicate))
}

/// Fallible form of [`from_predicates`] for predicates that may be absent.
///
/// # Errors
///
/// Returns [`FilterError::InvalidArgument`] naming the first absent predicate.
pub fn try_from_predicates<E, S, A>(
    is_supported: Option<S>,
    is_accepted: Option<A>,
) -> Result<SupportedPredicateFilter<E, S, A>, FilterError<E>>
where
    S: Fn(&E) -> bool,
    A: Fn(&E) -> bool,
{
    let is_supported = is_supported.ok_or_else(|| missing("No support predicate provided"))?;
    let is_accepted = is_accepted.ok_or_else(|| missing("No acceptance predicate provided"))?;
    Ok(SupportedPredicateFilter::new(is_supported, is_accepted))
}

fn missing<E>(message: &str) -> FilterError<E> {
    FilterError::InvalidArgument(message.to_string())
}
