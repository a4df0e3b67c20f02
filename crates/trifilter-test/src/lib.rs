//! Shared test fixtures for trifilter crates.
//!
//! This crate provides predicates and sample data for testing.
//! It does NOT depend on `trifilter-core` so that the core crate can use it
//! as a dev-dependency without a cycle.
//!
//! - [`counter`] - predicates that record how often they are called
//! - [`data`] - sample sequences and keyed maps
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! trifilter-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use trifilter_test::counter::CallCounter;
//! use trifilter_test::data::{mixed_case_map, numbers};
//! ```

pub mod counter;
pub mod data;

pub use counter::{panicking, CallCounter};
pub use data::{is_lowercase, mixed_case_map, numbers};
