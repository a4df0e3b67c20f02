//! Combinators layering new answers over existing filters.

use std::collections::HashSet;
use std::hash::Hash;

use crate::tri::Tri;

use super::traits::TernaryFilter;

/// Swaps `Accept` and `Reject` of the inner filter.
pub struct Reverse<F> {
    inner: F,
}

impl<F> Reverse<F> {
    #[inline]
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<E, F> TernaryFilter<E> for Reverse<F>
where
    F: TernaryFilter<E>,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        self.inner.evaluate(element).reversed()
    }

    fn describe(&self) -> String {
        format!("{}.reverse()", self.inner.describe())
    }
}

/// Forces an outcome for one element, delegating the others.
///
/// Built by [`plus`](TernaryFilter::plus), [`minus`](TernaryFilter::minus)
/// and [`ignore`](TernaryFilter::ignore).
pub struct PointOverride<F, E> {
    inner: F,
    element: E,
    outcome: Tri,
}

impl<F, E> PointOverride<F, E> {
    #[inline]
    pub fn new(inner: F, element: E, outcome: Tri) -> Self {
        Self {
            inner,
            element,
            outcome,
        }
    }
}

impl<E, F> TernaryFilter<E> for PointOverride<F, E>
where
    F: TernaryFilter<E>,
    E: PartialEq,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        if *element == self.element {
            self.outcome
        } else {
            self.inner.evaluate(element)
        }
    }

    fn describe(&self) -> String {
        format!("{}.{}(..)", self.inner.describe(), override_name(self.outcome))
    }
}

// Captured membership, sized at construction.
enum Members<E> {
    Empty,
    One(E),
    Many(HashSet<E>),
}

/// Forces an outcome for a set of elements, delegating the others.
///
/// Built by [`plus_all`](TernaryFilter::plus_all),
/// [`minus_all`](TernaryFilter::minus_all) and
/// [`ignore_all`](TernaryFilter::ignore_all). An empty set delegates every
/// element and a single element is compared directly, without hashing.
pub struct SetOverride<F, E> {
    inner: F,
    members: Members<E>,
    outcome: Tri,
}

impl<F, E> SetOverride<F, E>
where
    E: Eq + Hash,
{
    pub fn new<I>(inner: F, elements: I, outcome: Tri) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut set: HashSet<E> = elements.into_iter().collect();
        let members = match set.len() {
            0 => Members::Empty,
            1 => match set.drain().next() {
                Some(element) => Members::One(element),
                None => Members::Empty,
            },
            _ => Members::Many(set),
        };
        Self {
            inner,
            members,
            outcome,
        }
    }

    /// Returns the number of distinct elements overridden.
    pub fn len(&self) -> usize {
        match &self.members {
            Members::Empty => 0,
            Members::One(_) => 1,
            Members::Many(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.members, Members::Empty)
    }

    #[inline]
    fn contains(&self, element: &E) -> bool {
        match &self.members {
            Members::Empty => false,
            Members::One(member) => member == element,
            Members::Many(set) => set.contains(element),
        }
    }
}

impl<E, F> TernaryFilter<E> for SetOverride<F, E>
where
    F: TernaryFilter<E>,
    E: Eq + Hash,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        if self.contains(element) {
            self.outcome
        } else {
            self.inner.evaluate(element)
        }
    }

    fn describe(&self) -> String {
        match self.len() {
            0 => self.inner.describe(),
            1 => format!("{}.{}(..)", self.inner.describe(), override_name(self.outcome)),
            n => format!(
                "{}.{}_all([{} elements])",
                self.inner.describe(),
                override_name(self.outcome),
                n
            ),
        }
    }
}

/// Replaces `Unsupported` answers of the inner filter with a fixed outcome.
///
/// Built by [`plus_not_supported`](TernaryFilter::plus_not_supported) and
/// [`minus_not_supported`](TernaryFilter::minus_not_supported).
pub struct Fallback<F> {
    inner: F,
    outcome: Tri,
}

impl<F> Fallback<F> {
    #[inline]
    pub fn new(inner: F, outcome: Tri) -> Self {
        Self { inner, outcome }
    }
}

impl<E, F> TernaryFilter<E> for Fallback<F>
where
    F: TernaryFilter<E>,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        self.inner.evaluate(element).or(self.outcome)
    }

    fn describe(&self) -> String {
        let name = match self.outcome {
            Tri::Accept => "plus_not_supported",
            Tri::Reject => "minus_not_supported",
            Tri::Unsupported => "ignore_not_supported",
        };
        format!("{}.{}()", self.inner.describe(), name)
    }
}

/// Consults `first`, then `second` for what `first` does not support.
///
/// Built by [`before`](TernaryFilter::before) and [`after`](TernaryFilter::after).
pub struct Priority<F1, F2> {
    first: F1,
    second: F2,
}

impl<F1, F2> Priority<F1, F2> {
    #[inline]
    pub fn new(first: F1, second: F2) -> Self {
        Self { first, second }
    }
}

impl<E, F1, F2> TernaryFilter<E> for Priority<F1, F2>
where
    F1: TernaryFilter<E>,
    F2: TernaryFilter<E>,
{
    #[inline]
    fn evaluate(&self, element: &E) -> Tri {
        self.first
            .evaluate(element)
            .or_else(|| self.second.evaluate(element))
    }

    fn describe(&self) -> String {
        format!("{}.before({})", self.first.describe(), self.second.describe())
    }
}

fn override_name(outcome: Tri) -> &'static str {
    match outcome {
        Tri::Accept => "plus",
        Tri::Reject => "minus",
        Tri::Unsupported => "ignore",
    }
}
