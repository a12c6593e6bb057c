//! CLI commands.

pub mod add;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use add::AddArgs;
pub use cart::{CartArgs, DropArgs, QtyArgs, RemoveArgs, StripArgs};
pub use catalog::CatalogArgs;
pub use checkout::CheckoutArgs;
