//! Strict boundary: turning three-valued answers into kept or dropped items.
//!
//! Everything in this module demands a decided answer. An `Unsupported`
//! element is never defaulted to kept or dropped; it surfaces as
//! [`FilterError::UnsupportedElement`].
//!
//! Eager operations ([`sequence`], [`map_keys`], [`map_values`]) fail before
//! producing any output. The lazy [`FilteredIter`] fails at the offending
//! element, after the accepted items before it were handed out.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::FilterError;
use crate::filter::TernaryFilter;
use crate::tri::Tri;

#[cfg(test)]
mod tests;

/// A strict two-valued view of a filter, built by
/// [`to_predicate`](TernaryFilter::to_predicate).
///
/// # Example
///
/// ```
/// use trifilter_core::{supports_none, TernaryFilter};
///
/// let predicate = supports_none().plus(1).minus(2).to_predicate();
/// assert!(predicate.test(&1).unwrap());
/// assert!(!predicate.test(&2).unwrap());
/// assert!(predicate.test(&3).is_err());
/// ```
pub struct StrictPredicate<F> {
    filter: F,
}

impl<F> StrictPredicate<F> {
    #[inline]
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Returns the underlying filter.
    pub fn into_inner(self) -> F {
        self.filter
    }

    /// Tests the element.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedElement`] carrying a clone of the
    /// element when the filter does not support it.
    pub fn test<E>(&self, element: &E) -> Result<bool, FilterError<E>>
    where
        F: TernaryFilter<E>,
        E: Clone,
    {
        match self.filter.evaluate(element) {
            Tri::Accept => Ok(true),
            Tri::Reject => Ok(false),
            Tri::Unsupported => Err(unsupported(&self.filter, element.clone())),
        }
    }

    /// Turns the predicate into a plain closure.
    pub fn into_fn<E>(self) -> impl Fn(&E) -> Result<bool, FilterError<E>>
    where
        F: TernaryFilter<E>,
        E: Clone,
    {
        move |element| self.test(element)
    }
}

/// Keeps the accepted items in order, failing on the first unsupported one.
pub fn sequence<E, F, I, C>(filter: &F, items: I) -> Result<C, FilterError<E>>
where
    F: TernaryFilter<E> + ?Sized,
    I: IntoIterator<Item = E>,
    C: FromIterator<E>,
{
    keep_accepted(filter, items, identity, identity_into, "sequence")
}

/// Keeps the entries whose key is accepted, failing on the first unsupported key.
pub fn map_keys<K, V, F, M, C>(filter: &F, map: M) -> Result<C, FilterError<K>>
where
    F: TernaryFilter<K> + ?Sized,
    M: IntoIterator<Item = (K, V)>,
    C: FromIterator<(K, V)>,
{
    keep_accepted(filter, map, entry_key, into_key, "map_keys")
}

/// Keeps the entries whose value is accepted, failing on the first unsupported value.
pub fn map_values<K, V, F, M, C>(filter: &F, map: M) -> Result<C, FilterError<V>>
where
    F: TernaryFilter<V> + ?Sized,
    M: IntoIterator<Item = (K, V)>,
    C: FromIterator<(K, V)>,
{
    keep_accepted(filter, map, entry_value, into_value, "map_values")
}

// Evaluates `project(item)` for every item. Nothing is returned unless every
// projected element is decided.
fn keep_accepted<T, E, F, I, C>(
    filter: &F,
    items: I,
    project: fn(&T) -> &E,
    extract: fn(T) -> E,
    operation: &'static str,
) -> Result<C, FilterError<E>>
where
    F: TernaryFilter<E> + ?Sized,
    I: IntoIterator<Item = T>,
    C: FromIterator<T>,
{
    let mut kept = 0usize;
    let mut dropped = 0usize;
    let collected = items
        .into_iter()
        .filter_map(|item| match filter.evaluate(project(&item)) {
            Tri::Accept => {
                kept += 1;
                Some(Ok(item))
            }
            Tri::Reject => {
                dropped += 1;
                None
            }
            Tri::Unsupported => Some(Err(item)),
        })
        .collect::<Result<C, T>>();

    match collected {
        Ok(result) => {
            trace!(event = "apply", operation, kept, dropped);
            Ok(result)
        }
        Err(item) => Err(unsupported(filter, extract(item))),
    }
}

fn identity<E>(element: &E) -> &E {
    element
}

fn identity_into<E>(element: E) -> E {
    element
}

fn entry_key<K, V>(entry: &(K, V)) -> &K {
    &entry.0
}

fn into_key<K, V>(entry: (K, V)) -> K {
    entry.0
}

fn entry_value<K, V>(entry: &(K, V)) -> &V {
    &entry.1
}

fn into_value<K, V>(entry: (K, V)) -> V {
    entry.1
}

fn unsupported<E, F>(filter: &F, element: E) -> FilterError<E>
where
    F: TernaryFilter<E> + ?Sized,
{
    let chain = filter.describe();
    debug!(event = "unsupported_element", chain = %chain);
    FilterError::UnsupportedElement { element, chain }
}

/// Lazy, single-pass filtering of an iterator, built by
/// [`apply_to_iter`](TernaryFilter::apply_to_iter).
///
/// Each upstream item is pulled once and evaluated once. Accepted items are
/// yielded as `Ok`, rejected items are skipped. The first unsupported item is
/// yielded as `Err(FilterError::UnsupportedElement)` and ends the iteration:
/// the upstream source is not pulled again. Items yielded before the failure
/// stay with the consumer.
///
/// Collecting into `Result<Vec<_>, _>` turns the failure into the result of
/// the whole consuming operation.
///
/// # Example
///
/// ```
/// use trifilter_core::{supports_none, TernaryFilter};
///
/// let filter = supports_none().plus(1).minus(2);
/// let mut filtered = filter.apply_to_iter(vec![1, 2, 3, 1]);
///
/// assert_eq!(filtered.next().unwrap().unwrap(), 1);
/// assert!(filtered.next().unwrap().is_err());
/// assert!(filtered.next().is_none());
/// ```
pub struct FilteredIter<'a, I, F> {
    filter: &'a F,
    items: I,
    failed: bool,
}

impl<'a, I, F> FilteredIter<'a, I, F> {
    #[inline]
    pub fn new(filter: &'a F, items: I) -> Self {
        Self {
            filter,
            items,
            failed: false,
        }
    }
}

impl<I, F> Iterator for FilteredIter<'_, I, F>
where
    I: Iterator,
    F: TernaryFilter<I::Item>,
{
    type Item = Result<I::Item, FilterError<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for item in self.items.by_ref() {
            match self.filter.evaluate(&item) {
                Tri::Accept => return Some(Ok(item)),
                Tri::Reject => continue,
                Tri::Unsupported => {
                    self.failed = true;
                    return Some(Err(unsupported(self.filter, item)));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.items.size_hint().1)
        }
    }
}

impl<I, F> FusedIterator for FilteredIter<'_, I, F>
where
    I: FusedIterator,
    F: TernaryFilter<I::Item>,
{
}
