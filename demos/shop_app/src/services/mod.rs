// demos/shop_app/src/services/mod.rs

//! Clients for the external collaborators of the app.

pub mod fake_store;

pub use fake_store::FakeStoreFeed;
