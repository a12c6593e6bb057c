//! File-backed snapshot storage for the Flora storefront.
//!
//! The storefront keeps its cart on the local device only; this crate is that
//! device storage, a directory of JSON files addressed by key. It knows
//! nothing about carts: any serde type goes in and comes back out.

mod error;
mod store;

pub use error::StoreError;
pub use store::Store;
