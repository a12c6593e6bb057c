//! Optional accessories sold alongside arrangements.

use crate::ids::AccessoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An optional extra a customer can attach to an arrangement.
///
/// Accessories are priced per unit; their cost is added per bundle instance
/// and scales with the owning cart line's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Accessory {
    /// Unique accessory identifier.
    pub id: AccessoryId,
    /// Display name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    pub image_url: String,
}

impl Accessory {
    /// Create a catalog entry with an empty description and image.
    pub fn new(id: impl Into<AccessoryId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
        }
    }
}
