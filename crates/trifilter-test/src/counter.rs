//! Predicates that record their calls.
//!
//! # Example
//!
//! ```
//! use trifilter_test::counter::CallCounter;
//!
//! let counter = CallCounter::new();
//! let always = counter.predicate(true);
//! assert!(always(&7));
//! assert!(always(&8));
//! assert_eq!(counter.calls(), 2);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared call counter. Clones observe the same count.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded calls.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns a predicate answering `verdict` and recording each call.
    pub fn predicate<E>(&self, verdict: bool) -> impl Fn(&E) -> bool + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |_: &E| {
            calls.fetch_add(1, Ordering::SeqCst);
            verdict
        }
    }

    /// Wraps `predicate`, recording each call.
    pub fn wrap<E, P>(&self, predicate: P) -> impl Fn(&E) -> bool + Send + Sync + 'static
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |element: &E| {
            calls.fetch_add(1, Ordering::SeqCst);
            predicate(element)
        }
    }
}

/// A predicate that must never be called.
pub fn panicking<E>() -> impl Fn(&E) -> bool + Send + Sync + 'static {
    |_: &E| panic!("Should not be executed")
}
