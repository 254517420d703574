// trolley/src/store/definition.rs

//! Contains the `Store<R>` struct definition and its constructors and read accessors.

use crate::core::listener::{Guard, Subscription};
use crate::core::reducer::Reducer;
use crate::core::snapshot::Snapshot;
use std::fmt;

/// An explicitly owned, observable state container driven by a `Reducer`.
///
/// There is no ambient global instance: a host builds one `Store` and passes it
/// (or a `StoreHandle` wrapping it) to whoever needs to read or dispatch. Tests
/// build as many independent stores as they like.
pub struct Store<R: Reducer> {
  pub(crate) reducer: R,
  pub(crate) state: Snapshot<R::State>,
  /// Number of dispatches that replaced the snapshot.
  pub(crate) version: u64,

  pub(crate) guards: Vec<Guard<R::State, R::Intent>>,
  pub(crate) subscriptions: Vec<Subscription<R::State>>,
  pub(crate) next_subscription_id: u64,
}

impl<R: Reducer> Store<R> {
  /// Creates a store holding `R::State::default()`.
  pub fn new(reducer: R) -> Self {
    Self::with_state(reducer, R::State::default())
  }

  /// Creates a store starting from the given state.
  pub fn with_state(reducer: R, state: R::State) -> Self {
    Self {
      reducer,
      state: Snapshot::new(state),
      version: 0,
      guards: Vec::new(),
      subscriptions: Vec::new(),
      next_subscription_id: 0,
    }
  }

  /// The current state. Never a partially applied one.
  pub fn snapshot(&self) -> Snapshot<R::State> {
    self.state.clone()
  }

  pub fn version(&self) -> u64 {
    self.version
  }

  pub fn reducer(&self) -> &R {
    &self.reducer
  }
}

impl<R: Reducer + Default> Default for Store<R> {
  fn default() -> Self {
    Self::new(R::default())
  }
}

// Guards and listeners are closures, so Debug only reports counts.
impl<R: Reducer + fmt::Debug> fmt::Debug for Store<R>
where
  R::State: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Store")
      .field("reducer", &self.reducer)
      .field("state", &*self.state)
      .field("version", &self.version)
      .field("guards", &self.guards.len())
      .field("subscriptions", &self.subscriptions.len())
      .finish()
  }
}
