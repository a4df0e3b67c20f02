//! Error types for trifilter

use thiserror::Error;

/// Main error type for filter operations.
///
/// Generic over the element type so that a failure at the strict boundary
/// hands the offending element back to the caller.
#[derive(Debug, Error)]
pub enum FilterError<E> {
    /// A required argument was absent when building a filter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A decided answer was demanded for an element the filter does not support
    #[error("Filter {chain} does not support element {element:?}")]
    UnsupportedElement {
        /// The element the filter answered `Unsupported` for.
        element: E,
        /// Rendering of the filter chain, see [`TernaryFilter::describe`](crate::TernaryFilter::describe).
        chain: String,
    },
}

impl<E> FilterError<E> {
    /// Returns the unsupported element, if this error carries one.
    pub fn element(&self) -> Option<&E> {
        match self {
            FilterError::UnsupportedElement { element, .. } => Some(element),
            FilterError::InvalidArgument(_) => None,
        }
    }

    /// Consumes the error and returns the unsupported element, if any.
    pub fn into_element(self) -> Option<E> {
        match self {
            FilterError::UnsupportedElement { element, .. } => Some(element),
            FilterError::InvalidArgument(_) => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, FilterError::UnsupportedElement { .. })
    }
}

/// Result type alias for filter operations
pub type Result<T, E> = std::result::Result<T, FilterError<E>>;
