// trolley/src/core/snapshot.rs

use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// An immutable read of a store's state at one point in time.
///
/// Cloning is an `Arc` clone. A snapshot handed out before a dispatch keeps showing
/// the old state; the store never mutates a state that has been published.
#[derive(Debug)]
pub struct Snapshot<S>(Arc<S>);

impl<S> Snapshot<S> {
  pub fn new(state: S) -> Self {
    Snapshot(Arc::new(state))
  }

  /// True if both snapshots point at the very same published state.
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl<S> Clone for Snapshot<S> {
  fn clone(&self) -> Self {
    Snapshot(Arc::clone(&self.0))
  }
}

impl<S> Deref for Snapshot<S> {
  type Target = S;

  fn deref(&self) -> &S {
    &self.0
  }
}

impl<S> AsRef<S> for Snapshot<S> {
  fn as_ref(&self) -> &S {
    &self.0
  }
}

impl<S: PartialEq> PartialEq for Snapshot<S> {
  fn eq(&self, other: &Self) -> bool {
    self.ptr_eq(other) || *self.0 == *other.0
  }
}

impl<S: Default> Default for Snapshot<S> {
  fn default() -> Self {
    Self::new(S::default())
  }
}

impl<S: Serialize> Serialize for Snapshot<S> {
  fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
    self.0.serialize(serializer)
  }
}
