// trolley/src/core/listener.rs

//! Subscriber and guard callback types.

use crate::core::control::DispatchControl;
use crate::core::snapshot::Snapshot;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the current snapshot after every successful dispatch.
pub type Listener<S> = Box<dyn Fn(&Snapshot<S>) + Send + Sync>;

/// Middleware run before the reducer. Sees the current state and the pending intent.
///
/// Returning an error rejects the intent (`TrolleyError::Rejected`); returning
/// `DispatchControl::Stop` drops it silently.
pub type Guard<S, I> = Arc<dyn Fn(&S, &I) -> anyhow::Result<DispatchControl> + Send + Sync>;

/// Handle returned by `Store::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "sub-{}", self.0)
  }
}

pub(crate) struct Subscription<S> {
  pub(crate) id: SubscriptionId,
  pub(crate) listener: Listener<S>,
}

// Listener (Box<dyn Fn>) doesn't implement Debug.
impl<S> fmt::Debug for Subscription<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Subscription").field("id", &self.id).finish()
  }
}
