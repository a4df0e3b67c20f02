//! trifilter - Composable Three-Valued Filters
//!
//! Build filters rule by rule: each rule accepts, rejects, or leaves an
//! element unsupported for the next rule to decide.
//!
//! # Example
//!
//! ```rust
//! use trifilter::prelude::*;
//!
//! let odd = supports_none().plus(1).plus(3).plus(5).minus_not_supported();
//! assert_eq!(odd.evaluate(&3), Tri::Accept);
//! assert_eq!(odd.evaluate(&4), Tri::Reject);
//! ```

// Outcome and capability
pub use trifilter_core::{FilterError, TernaryFilter, Tri};

// Factories
pub use trifilter_core::{
    accepts_all, accepts_none, constant, from_fn, from_predicate, from_predicates,
    supports_none, try_from_predicate, try_from_predicates,
};

// Combinator and boundary types
pub use trifilter_core::filter;
pub use trifilter_core::{FilteredIter, StrictPredicate};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        accepts_all, accepts_none, from_fn, from_predicate, from_predicates, supports_none,
    };
    pub use super::{FilterError, TernaryFilter, Tri};
}
