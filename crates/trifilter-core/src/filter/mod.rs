//! Ternary filters composed by value.
//!
//! Every combinator wraps its receiver in a small generic struct, so a chain
//! such as `supports_none().plus(1).minus_not_supported()` is a single nested
//! type evaluated without dynamic dispatch. `Box` and `Arc` erasure is
//! available when the chain has to be rebuilt in a loop.

mod composition;
mod traits;
mod wrappers;

pub use composition::{Fallback, PointOverride, Priority, Reverse, SetOverride};
pub use traits::TernaryFilter;
pub use wrappers::{
    accepts_all, accepts_none, constant, from_fn, from_predicate, from_predicates,
    supports_none, try_from_predicate, try_from_predicates, ConstantFilter, FnFilter,
    PredicateFilter, SupportedPredicateFilter,
};
