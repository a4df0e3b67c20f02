//! The ternary filter capability and its fluent combinators.

use std::hash::Hash;
use std::sync::Arc;

use crate::apply::{self, FilteredIter, StrictPredicate};
use crate::error::FilterError;
use crate::tri::Tri;

use super::composition::{Fallback, PointOverride, Priority, Reverse, SetOverride};

/// A three-valued membership test over elements of type `E`.
///
/// A filter answers [`Tri::Accept`] or [`Tri::Reject`] for the elements it
/// knows about and [`Tri::Unsupported`] for the others. Filters are values:
/// every combinator consumes its receiver and returns a new filter that owns
/// it, so the result of a chain is a single nested type with no dynamic
/// dispatch. Borrow (`&filter`) to keep using a filter after combining it, or
/// erase the type with [`boxed`](Self::boxed) / [`shared`](Self::shared).
///
/// # Concurrency
///
/// The trait does not require `Send + Sync`. Built-in filters hold no interior
/// mutability, so a composed filter is `Send + Sync` exactly when everything it
/// captured (closures, elements, membership sets) is. Such a filter can be
/// evaluated from any number of threads at once.
///
/// # Example
///
/// ```
/// use trifilter_core::{supports_none, TernaryFilter, Tri};
///
/// let odd = supports_none().plus(1).plus(3).plus(5).minus_not_supported();
///
/// let outcomes: Vec<Tri> = (1..=5).map(|n| odd.evaluate(&n)).collect();
/// assert_eq!(
///     outcomes,
///     [Tri::Accept, Tri::Reject, Tri::Accept, Tri::Reject, Tri::Accept]
/// );
/// ```
pub trait TernaryFilter<E> {
    /// Evaluates the element.
    ///
    /// Must be a pure function of `element`: equal elements give equal outcomes.
    fn evaluate(&self, element: &E) -> Tri;

    /// Renders the filter chain for diagnostics.
    fn describe(&self) -> String {
        String::from("custom")
    }

    /// Swaps accepted and rejected elements. Unsupported elements stay unsupported.
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse::new(self)
    }

    /// Accepts `element`, relying on this filter for the others.
    fn plus(self, element: E) -> PointOverride<Self, E>
    where
        Self: Sized,
        E: PartialEq,
    {
        PointOverride::new(self, element, Tri::Accept)
    }

    /// Accepts every given element, relying on this filter for the others.
    ///
    /// An empty collection leaves the filter's behaviour unchanged.
    fn plus_all<I>(self, elements: I) -> SetOverride<Self, E>
    where
        Self: Sized,
        I: IntoIterator<Item = E>,
        E: Eq + Hash,
    {
        SetOverride::new(self, elements, Tri::Accept)
    }

    /// Rejects `element`, relying on this filter for the others.
    fn minus(self, element: E) -> PointOverride<Self, E>
    where
        Self: Sized,
        E: PartialEq,
    {
        PointOverride::new(self, element, Tri::Reject)
    }

    /// Rejects every given element, relying on this filter for the others.
    fn minus_all<I>(self, elements: I) -> SetOverride<Self, E>
    where
        Self: Sized,
        I: IntoIterator<Item = E>,
        E: Eq + Hash,
    {
        SetOverride::new(self, elements, Tri::Reject)
    }

    /// Stops supporting `element`, relying on this filter for the others.
    fn ignore(self, element: E) -> PointOverride<Self, E>
    where
        Self: Sized,
        E: PartialEq,
    {
        PointOverride::new(self, element, Tri::Unsupported)
    }

    /// Stops supporting every given element, relying on this filter for the others.
    fn ignore_all<I>(self, elements: I) -> SetOverride<Self, E>
    where
        Self: Sized,
        I: IntoIterator<Item = E>,
        E: Eq + Hash,
    {
        SetOverride::new(self, elements, Tri::Unsupported)
    }

    /// Conservative completion: accepts whatever this filter does not support.
    fn plus_not_supported(self) -> Fallback<Self>
    where
        Self: Sized,
    {
        Fallback::new(self, Tri::Accept)
    }

    /// Expeditive completion: rejects whatever this filter does not support.
    fn minus_not_supported(self) -> Fallback<Self>
    where
        Self: Sized,
    {
        Fallback::new(self, Tri::Reject)
    }

    /// Consults this filter first and `other` for what it does not support.
    fn before<G>(self, other: G) -> Priority<Self, G>
    where
        Self: Sized,
        G: TernaryFilter<E>,
    {
        Priority::new(self, other)
    }

    /// Consults `other` first and this filter for what `other` does not support.
    ///
    /// `a.after(b)` behaves exactly like `b.before(a)`.
    fn after<G>(self, other: G) -> Priority<G, Self>
    where
        Self: Sized,
        G: TernaryFilter<E>,
    {
        Priority::new(other, self)
    }

    /// Converts this filter into a strict two-valued test.
    ///
    /// The predicate fails with [`FilterError::UnsupportedElement`] for the
    /// elements this filter does not support. Nothing is precomputed.
    fn to_predicate(self) -> StrictPredicate<Self>
    where
        Self: Sized,
    {
        StrictPredicate::new(self)
    }

    /// Keeps the accepted items, in order.
    ///
    /// Fails without producing anything on the first unsupported item.
    ///
    /// ```
    /// use trifilter_core::{from_predicate, TernaryFilter};
    ///
    /// let even = from_predicate(|n: &i32| n % 2 == 0);
    /// let kept: Vec<i32> = even.apply_to_sequence(1..=6).unwrap();
    /// assert_eq!(kept, [2, 4, 6]);
    /// ```
    fn apply_to_sequence<I, C>(&self, items: I) -> Result<C, FilterError<E>>
    where
        Self: Sized,
        I: IntoIterator<Item = E>,
        C: FromIterator<E>,
    {
        apply::sequence(self, items)
    }

    /// Keeps the entries whose key is accepted, with their values.
    ///
    /// Fails without producing anything on the first unsupported key.
    fn apply_to_map_keys<V, M, C>(&self, map: M) -> Result<C, FilterError<E>>
    where
        Self: Sized,
        M: IntoIterator<Item = (E, V)>,
        C: FromIterator<(E, V)>,
    {
        apply::map_keys(self, map)
    }

    /// Keeps the entries whose value is accepted, with their keys.
    ///
    /// Fails without producing anything on the first unsupported value.
    fn apply_to_map_values<K, M, C>(&self, map: M) -> Result<C, FilterError<E>>
    where
        Self: Sized,
        M: IntoIterator<Item = (K, E)>,
        C: FromIterator<(K, E)>,
    {
        apply::map_values(self, map)
    }

    /// Filters a single-pass source lazily.
    ///
    /// See [`FilteredIter`] for the failure semantics.
    fn apply_to_iter<I>(&self, items: I) -> FilteredIter<'_, I::IntoIter, Self>
    where
        Self: Sized,
        I: IntoIterator<Item = E>,
    {
        FilteredIter::new(self, items.into_iter())
    }

    /// Erases the filter type behind a `Box`.
    fn boxed<'a>(self) -> Box<dyn TernaryFilter<E> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Erases the filter type behind an `Arc` that can cross threads.
    fn shared<'a>(self) -> Arc<dyn TernaryFilter<E> + Send + Sync + 'a>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Arc::new(self)
    }
}

impl<E, F> TernaryFilter<E> for &F
where
    F: TernaryFilter<E> + ?Sized,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        (**self).evaluate(element)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<E, F> TernaryFilter<E> for Box<F>
where
    F: TernaryFilter<E> + ?Sized,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        (**self).evaluate(element)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<E, F> TernaryFilter<E> for Arc<F>
where
    F: TernaryFilter<E> + ?Sized,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        (**self).evaluate(element)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
