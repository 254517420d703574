// trolley/src/core/handle.rs

use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::sync::Arc;

use crate::core::control::DispatchResult;
use crate::core::listener::SubscriptionId;
use crate::core::reducer::Reducer;
use crate::core::snapshot::Snapshot;
use crate::store::Store;

/// A cloneable handle to one `Store`, for hosts that share the store between
/// threads or async tasks (e.g. web workers).
///
/// Every `dispatch` takes the lock for the whole intent (guards, reducer, listeners), so
/// intents are serialized and each runs to completion before the next starts. Readers
/// only ever get a `Snapshot` out of the handle, never a reference into the store.
///
/// IMPORTANT: the lock is blocking. Never hold a guard from `lock()` across an `.await`,
/// and never dispatch through the same handle from inside a guard or listener.
pub struct StoreHandle<R: Reducer>(Arc<Mutex<Store<R>>>);

impl<R: Reducer> StoreHandle<R> {
  pub fn new(store: Store<R>) -> Self {
    StoreHandle(Arc::new(Mutex::new(store)))
  }

  pub fn dispatch(&self, intent: R::Intent) -> Result<DispatchResult, R::Error> {
    self.0.lock().dispatch(intent)
  }

  pub fn snapshot(&self) -> Snapshot<R::State> {
    self.0.lock().snapshot()
  }

  pub fn version(&self) -> u64 {
    self.0.lock().version()
  }

  pub fn subscribe(&self, listener: impl Fn(&Snapshot<R::State>) + Send + Sync + 'static) -> SubscriptionId {
    self.0.lock().subscribe(listener)
  }

  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    self.0.lock().unsubscribe(id)
  }

  /// Exclusive access to the underlying store, e.g. to register guards or run
  /// several reads under one lock. The guard MUST be dropped before any `.await` point.
  pub fn lock(&self) -> MutexGuard<'_, Store<R>> {
    self.0.lock()
  }

  /// Attempts to acquire the store without blocking.
  pub fn try_lock(&self) -> Option<MutexGuard<'_, Store<R>>> {
    self.0.try_lock()
  }
}

impl<R: Reducer> Clone for StoreHandle<R> {
  fn clone(&self) -> Self {
    StoreHandle(Arc::clone(&self.0))
  }
}

impl<R: Reducer> From<Store<R>> for StoreHandle<R> {
  fn from(store: Store<R>) -> Self {
    Self::new(store)
  }
}

impl<R: Reducer> fmt::Debug for StoreHandle<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StoreHandle")
      .field("strong_count", &Arc::strong_count(&self.0))
      .finish()
  }
}
