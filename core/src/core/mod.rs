pub mod control;
pub mod handle;
pub mod listener;
pub mod reducer;
pub mod snapshot;

// Re-export key types for easier access from other trolley modules (and lib.rs)
pub use control::{DispatchControl, DispatchResult};
pub use handle::StoreHandle;
pub use listener::{Guard, Listener, SubscriptionId};
pub use reducer::{Reducer, Transition};
pub use snapshot::Snapshot;
