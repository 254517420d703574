// trolley/src/store/hooks.rs

//! Contains methods for registering subscribers (notified after a dispatch) and
//! guards (run before the reducer).

use tracing::{event, Level};

use crate::core::control::DispatchControl;
use crate::core::listener::{Subscription, SubscriptionId};
use crate::core::reducer::Reducer;
use crate::core::snapshot::Snapshot;
use crate::store::definition::Store;
use std::sync::Arc;

impl<R: Reducer> Store<R> {
  /// Registers a listener called with the new snapshot after every successful dispatch,
  /// in subscription order.
  ///
  /// Listeners run synchronously inside `dispatch`. A listener must not dispatch into
  /// the store that is notifying it.
  pub fn subscribe(&mut self, listener: impl Fn(&Snapshot<R::State>) + Send + Sync + 'static) -> SubscriptionId {
    let id = SubscriptionId(self.next_subscription_id);
    self.next_subscription_id += 1;
    self.subscriptions.push(Subscription {
      id,
      listener: Box::new(listener),
    });
    event!(Level::DEBUG, subscription = %id, subscribers = self.subscriptions.len(), "Listener subscribed.");
    id
  }

  /// Removes a listener. Returns `false` if the id was unknown or already removed.
  pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    let before = self.subscriptions.len();
    self.subscriptions.retain(|sub| sub.id != id);
    let removed = self.subscriptions.len() != before;
    if removed {
      event!(Level::DEBUG, subscription = %id, "Listener unsubscribed.");
    } else {
      event!(Level::DEBUG, subscription = %id, "Unsubscribe for unknown listener ignored.");
    }
    removed
  }

  pub fn subscriber_count(&self) -> usize {
    self.subscriptions.len()
  }

  /// Registers a guard run before the reducer on every dispatch, in registration order.
  ///
  /// The guard sees the current state and the pending intent. `Ok(DispatchControl::Stop)`
  /// drops the intent; `Err(_)` rejects it with `TrolleyError::Rejected`.
  pub fn before_dispatch(
    &mut self,
    guard: impl Fn(&R::State, &R::Intent) -> anyhow::Result<DispatchControl> + Send + Sync + 'static,
  ) {
    self.guards.push(Arc::new(guard));
    event!(Level::DEBUG, guards = self.guards.len(), "Guard registered.");
  }
}
