//! Guard predicates for gating commands.
//!
//! Guards are pure boolean functions over a state. The machine consults them
//! before running a command; a failing guard turns the command into a no-op.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that determines if a command may run.
///
/// # Example
///
/// ```rust
/// use filterstate::core::{FilterState, Guard, State};
///
/// let editable = Guard::new(|s: &FilterState| s.accepts_edits());
///
/// assert!(editable.check(&FilterState::empty()));
/// assert!(!editable.check(&FilterState::empty().reset()));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes only while the state accepts edits.
    pub fn editable() -> Self
    where
        S: 'static,
    {
        Self::new(|s: &S| s.accepts_edits())
    }

    /// Check if the guard allows running from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
