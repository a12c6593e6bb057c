//! Customer delivery details collected at checkout.
//!
//! Details live only for the duration of a checkout attempt; they are never
//! persisted with the cart.

use serde::{Deserialize, Serialize};

/// Name, delivery address, and the customer's local phone number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutDetails {
    /// Customer name, letters and spaces only.
    pub name: String,
    /// Free-form delivery address.
    pub address: String,
    /// Digits only, exactly 8 when complete.
    pub phone: String,
}

impl CheckoutDetails {
    /// Build details from raw input, applying the same character filters the
    /// storefront applies while the customer types.
    pub fn from_input(name: &str, address: &str, phone: &str) -> Self {
        Self {
            name: sanitize_name(name),
            address: address.trim().to_string(),
            phone: sanitize_phone(phone),
        }
    }

    /// Whether the order can be dispatched with these details.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.address.trim().is_empty() && self.phone.len() == 8
    }
}

/// Keep letters (including accented vowels and enye) and spaces; drop the rest.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || "áéíóúÁÉÍÓÚñÑ".contains(*c) || *c == ' ')
        .collect()
}

/// Keep digits only, capped at eight.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(8).collect()
}
