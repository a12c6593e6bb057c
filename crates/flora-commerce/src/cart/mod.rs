//! Shopping cart module.
//!
//! Contains the cart itself and the pure accessory-selection functions that
//! decide how extras attach to a line.

mod cart;
pub mod selection;

pub use cart::{Cart, CartLine};
pub use selection::AccessorySelection;
