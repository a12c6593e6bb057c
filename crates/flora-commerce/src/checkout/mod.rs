//! Checkout module.
//!
//! Delivery details with their input filters, the deterministic order
//! message, and the dispatch link.

mod details;
mod dispatch;
mod message;

pub use details::{sanitize_name, sanitize_phone, CheckoutDetails};
pub use dispatch::whatsapp_link;
pub use message::order_message;
