//! Catalog, cart, and order-message domain logic for the Flora storefront.
//!
//! This crate is the part of the shop with actual rules in it:
//!
//! - **Catalog**: flowers, categories, accessories (read-only inputs)
//! - **Cart**: lines keyed by configuration (flower + accessory bundle),
//!   with total, always-safe mutations
//! - **Checkout**: delivery details, the deterministic order message, and
//!   the `wa.me` dispatch link
//! - **Session** (`storage` feature, on by default): best-effort cart
//!   snapshots around every mutation
//!
//! # Example
//!
//! ```rust,ignore
//! use flora_commerce::prelude::*;
//!
//! let catalog = Catalog::from_path("demos/catalog.json")?;
//! let ramo = catalog.flower(&FlowerId::new("ramo-primavera")).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_line(ramo, &[]);
//!
//! let details = CheckoutDetails::from_input("Ana Pérez", "Calle 23 #456", "58702873");
//! let message = order_message(&cart, Some(&details));
//! let link = whatsapp_link("5358702873", &message);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

#[cfg(feature = "storage")]
pub mod session;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Accessory, Catalog, Category, Flower};

    // Cart
    pub use crate::cart::{selection, AccessorySelection, Cart, CartLine};

    // Checkout
    pub use crate::checkout::{order_message, whatsapp_link, CheckoutDetails};

    // Session
    #[cfg(feature = "storage")]
    pub use crate::session::CartSession;
}
