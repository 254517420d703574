// trolley/src/lib.rs

//! Trolley: a synchronous, observable cart store for Rust.
//!
//! Trolley keeps a shopping cart as a sequence of immutable snapshots:
//!  - Intents (`CartIntent`) are dispatched to a `Store`, which runs guards, then a pure
//!    `Reducer`, then swaps in the new `Snapshot` in one step.
//!  - Subscribers are notified once per successful dispatch.
//!  - Cart lines keep insertion order for display and a by-id index for lookup.
//!  - Stores are explicitly constructed and owned; `StoreHandle` shares one between threads.
//!  - A `ProductFeed` supplies the read-once `Catalog` the cart is filled from.

pub mod cart;
pub mod catalog;
pub mod core;
pub mod error;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::core::control::{DispatchControl, DispatchResult};
pub use crate::core::handle::StoreHandle;
pub use crate::core::listener::{Guard, Listener, SubscriptionId};
pub use crate::core::reducer::{Reducer, Transition};
pub use crate::core::snapshot::Snapshot;

pub use crate::store::definition::Store;

pub use crate::cart::{
  CartConfig, CartHandle, CartIntent, CartLine, CartReducer, CartState, CartStore, Product, ProductId, Rating,
};

pub use crate::catalog::{Catalog, CatalogStatus, FeedError, FunctionalProductFeed, ProductFeed, StaticProductFeed};

pub use crate::error::{TrolleyError, TrolleyResult};

/*
    Typical use:
    1. Build a `CartStore::new(CartReducer::new())` (or `CartStore::with_config(..)`).
    2. `subscribe` the views that render the cart.
    3. Load a `Catalog` from a `ProductFeed` once and render it.
    4. Turn user actions into `add_to_cart`, `increment_quantity`, `decrement_quantity`
       and `update_quantity` calls; each returns the snapshot the views were notified with.
    5. Share the store across threads with `StoreHandle::new(store)` when the host needs to.
*/
