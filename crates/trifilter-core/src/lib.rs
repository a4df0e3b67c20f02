//! Three-valued filters for trifilter.
//!
//! A [`TernaryFilter`] maps an element to [`Tri::Accept`], [`Tri::Reject`] or
//! [`Tri::Unsupported`]. The third outcome lets partial rules be layered:
//! each stage decides what it knows and leaves the rest to the next one.
//!
//! This crate provides:
//! - Factories (`accepts_all`, `supports_none`, `from_predicate`, ...)
//! - Combinators (`reverse`, `plus`, `minus_all`, `before`, ...), composed by value
//! - The strict boundary (`to_predicate`, `apply_to_sequence`, `apply_to_iter`, ...)
//!
//! # Example
//!
//! ```
//! use trifilter_core::{from_predicates, TernaryFilter};
//!
//! // Known users are decided by role; admins are always in, "mallory" never.
//! let roles = from_predicates(
//!     |name: &&str| name.len() > 3,
//!     |name: &&str| name.starts_with('a'),
//! );
//! let access = roles.plus("bob").minus("mallory").minus_not_supported();
//!
//! let kept: Vec<&str> = access
//!     .apply_to_sequence(["alice", "bob", "mallory", "eve", "andrew"])
//!     .unwrap();
//! assert_eq!(kept, ["alice", "bob", "andrew"]);
//! ```

pub mod apply;
pub mod error;
pub mod filter;
pub mod tri;

pub use apply::{FilteredIter, StrictPredicate};
pub use error::FilterError;
pub use filter::{
    accepts_all, accepts_none, constant, from_fn, from_predicate, from_predicates,
    supports_none, try_from_predicate, try_from_predicates, TernaryFilter,
};
pub use tri::Tri;
