// trolley/src/store/mod.rs

//! Defines the `Store<R>` struct, its construction, subscriptions/guards, and dispatch logic.

pub mod definition;
pub mod dispatch;
pub mod hooks;

// Re-export the main Store struct
pub use definition::Store;
