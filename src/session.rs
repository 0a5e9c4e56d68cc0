//! Editing session: one state machine plus snapshot publication.
//!
//! Observers subscribe to a `tokio::sync::watch` channel. Every command
//! publishes exactly one snapshot, including rejected toggles, so observers see
//! one update per user action.

use crate::core::FilterState;
use crate::machine::{Command, FilterStateMachine, StepResult};
use crate::view::ControlsView;
use tokio::sync::watch;

/// Single owner of a session's filter state.
///
/// `&mut self` on every command serializes calls; share a session across
/// threads only behind a lock.
///
/// # Example
///
/// ```rust
/// use filterstate::session::FilterSession;
///
/// let mut session = FilterSession::default();
/// let rx = session.subscribe();
///
/// session.toggle_gray();
/// assert!(rx.borrow().is_gray_applied());
/// ```
#[derive(Debug)]
pub struct FilterSession {
    machine: FilterStateMachine,
    sender: watch::Sender<FilterState>,
    published: u64,
}

impl Default for FilterSession {
    fn default() -> Self {
        Self::new(FilterStateMachine::new())
    }
}

impl FilterSession {
    pub fn new(machine: FilterStateMachine) -> Self {
        let (sender, _) = watch::channel(machine.current_state().clone());
        tracing::debug!(mode = %machine.current_state().mode(), "filter session started");
        Self {
            machine,
            sender,
            published: 0,
        }
    }

    /// Receiver whose current value is always the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.sender.subscribe()
    }

    /// Current state by value.
    pub fn snapshot(&self) -> FilterState {
        self.machine.current_state().clone()
    }

    pub fn machine(&self) -> &FilterStateMachine {
        &self.machine
    }

    /// Label and enablement for the current state.
    pub fn controls(&self) -> ControlsView {
        ControlsView::from_state(self.machine.current_state())
    }

    /// Number of snapshots published since the session started.
    pub fn published(&self) -> u64 {
        self.published
    }

    /// Run one command and publish the resulting snapshot.
    pub fn dispatch(&mut self, command: Command) -> StepResult {
        let result = self.machine.apply(command);
        self.publish();
        result
    }

    pub fn toggle_gray(&mut self) -> FilterState {
        self.dispatch(Command::ToggleGray);
        self.snapshot()
    }

    pub fn toggle_bright(&mut self) -> FilterState {
        self.dispatch(Command::ToggleBright);
        self.snapshot()
    }

    pub fn reset(&mut self) -> FilterState {
        self.dispatch(Command::Reset);
        self.snapshot()
    }

    fn publish(&mut self) {
        self.sender.send_replace(self.machine.current_state().clone());
        self.published += 1;
    }
}
