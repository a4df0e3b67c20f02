//! The three-valued outcome of a filter evaluation.

use std::fmt;

/// Outcome of evaluating a [`TernaryFilter`](crate::TernaryFilter) on an element.
///
/// `Tri` is a flat enumeration: there is no ordering between the variants and
/// no join or meet. Filters are combined by priority, where the first decided
/// outcome wins and `Unsupported` hands over to the next filter.
///
/// # Example
///
/// ```
/// use trifilter_core::Tri;
///
/// assert!(Tri::Accept.is_decided());
/// assert_eq!(Tri::Reject.reversed(), Tri::Accept);
/// assert_eq!(Tri::Unsupported.or(Tri::Reject), Tri::Reject);
/// assert_eq!(Option::<bool>::from(Tri::Unsupported), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tri {
    /// The element is kept.
    Accept,
    /// The element is dropped.
    Reject,
    /// The filter has no opinion on the element.
    Unsupported,
}

impl Tri {
    /// Returns true for `Accept` and `Reject`.
    #[inline]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Tri::Unsupported)
    }

    #[inline]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Tri::Accept)
    }

    #[inline]
    pub const fn is_rejected(self) -> bool {
        matches!(self, Tri::Reject)
    }

    /// Swaps `Accept` and `Reject`. `Unsupported` is left as is.
    #[inline]
    pub const fn reversed(self) -> Tri {
        match self {
            Tri::Accept => Tri::Reject,
            Tri::Reject => Tri::Accept,
            Tri::Unsupported => Tri::Unsupported,
        }
    }

    /// Returns `self` when decided, `fallback` otherwise.
    #[inline]
    pub const fn or(self, fallback: Tri) -> Tri {
        match self {
            Tri::Unsupported => fallback,
            decided => decided,
        }
    }

    /// Returns `self` when decided, otherwise computes the fallback.
    ///
    /// The closure is only called for `Unsupported`.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Tri
    where
        F: FnOnce() -> Tri,
    {
        match self {
            Tri::Unsupported => fallback(),
            decided => decided,
        }
    }
}

impl From<bool> for Tri {
    #[inline]
    fn from(accepted: bool) -> Self {
        if accepted {
            Tri::Accept
        } else {
            Tri::Reject
        }
    }
}

impl From<Option<bool>> for Tri {
    #[inline]
    fn from(accepted: Option<bool>) -> Self {
        accepted.map_or(Tri::Unsupported, Tri::from)
    }
}

impl From<Tri> for Option<bool> {
    #[inline]
    fn from(tri: Tri) -> Self {
        match tri {
            Tri::Accept => Some(true),
            Tri::Reject => Some(false),
            Tri::Unsupported => None,
        }
    }
}

impl fmt::Display for Tri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tri::Accept => write!(f, "accept"),
            Tri::Reject => write!(f, "reject"),
            Tri::Unsupported => write!(f, "unsupported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_keeps_unsupported() {
        assert_eq!(Tri::Accept.reversed(), Tri::Reject);
        assert_eq!(Tri::Reject.reversed(), Tri::Accept);
        assert_eq!(Tri::Unsupported.reversed(), Tri::Unsupported);
    }

    #[test]
    fn test_or_prefers_decided() {
        assert_eq!(Tri::Accept.or(Tri::Reject), Tri::Accept);
        assert_eq!(Tri::Reject.or(Tri::Accept), Tri::Reject);
        assert_eq!(Tri::Unsupported.or(Tri::Accept), Tri::Accept);
        assert_eq!(Tri::Unsupported.or(Tri::Unsupported), Tri::Unsupported);
    }

    #[test]
    fn test_or_else_is_lazy() {
        let decided = Tri::Reject.or_else(|| panic!("fallback must not run"));
        assert_eq!(decided, Tri::Reject);
        assert_eq!(Tri::Unsupported.or_else(|| Tri::Accept), Tri::Accept);
    }

    #[test]
    fn test_option_bool_conversions() {
        assert_eq!(Tri::from(true), Tri::Accept);
        assert_eq!(Tri::from(false), Tri::Reject);
        assert_eq!(Tri::from(None::<bool>), Tri::Unsupported);
        assert_eq!(Option::<bool>::from(Tri::Accept), Some(true));
        assert_eq!(Option::<bool>::from(Tri::Reject), Some(false));
        assert_eq!(Option::<bool>::from(Tri::Unsupported), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tri::Accept.to_string(), "accept");
        assert_eq!(Tri::Unsupported.to_string(), "unsupported");
    }
}
