// trolley/src/core/control.rs

//! Defines signals for controlling dispatch flow and the outcome of a dispatch.

/// Signal from a guard indicating whether the dispatch should continue or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchControl {
  /// Let the intent through to the next guard and then the reducer.
  Continue,
  /// Drop the intent. No further guards run, the reducer is not called and
  /// subscribers are not notified.
  Stop,
}

/// Outcome of a single `Store::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
  /// The reducer produced a new state; it is now the current snapshot.
  Applied,
  /// The reducer accepted the intent but the state did not change.
  Unchanged,
  /// A guard returned `DispatchControl::Stop`.
  Stopped,
}

impl DispatchResult {
  /// Whether subscribers were notified for this dispatch.
  pub fn notified(self) -> bool {
    !matches!(self, DispatchResult::Stopped)
  }
}
