// trolley/src/core/reducer.rs

//! Defines the `Reducer` trait: the pure function from (state, intent) to the next state
//! that a `Store` applies on every dispatch.

use crate::error::TrolleyError;
use std::fmt;

/// Result of reducing one intent against the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<S> {
  /// The intent produced a new state that replaces the current snapshot.
  Changed(S),
  /// The intent was valid but left the state structurally equal (e.g. increment on an absent line).
  Unchanged,
}

impl<S> Transition<S> {
  pub fn is_changed(&self) -> bool {
    matches!(self, Transition::Changed(_))
  }
}

/// A pure state transition function.
///
/// `reduce` receives a shared reference to the current state and must not mutate it:
/// on error the store keeps the current snapshot, so a reducer that fails half-way
/// can never leave a partially-applied state behind.
///
/// `Error` must be constructible from `TrolleyError` so that framework-level failures
/// (guard rejections) flow through the same error type as the reducer's own.
pub trait Reducer: Send + Sync + 'static {
  type State: Default + Send + Sync + 'static;
  type Intent: fmt::Debug + Send + 'static;
  type Error: std::error::Error + From<TrolleyError> + Send + Sync + 'static;

  fn reduce(&self, state: &Self::State, intent: Self::Intent) -> Result<Transition<Self::State>, Self::Error>;
}
