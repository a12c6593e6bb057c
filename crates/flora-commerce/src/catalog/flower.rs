//! Purchasable flower arrangements.

use crate::ids::{CategoryId, FlowerId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable arrangement in the catalog.
///
/// Catalog entries are immutable inputs. The cart snapshots a flower at add
/// time, so later catalog edits never reprice lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flower {
    /// Unique flower identifier.
    pub id: FlowerId,
    /// Display name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    pub image_url: String,
    /// Category this flower is filed under.
    pub category_id: CategoryId,
}

impl Flower {
    /// Create a catalog entry with an empty description and image.
    pub fn new(
        id: impl Into<FlowerId>,
        name: impl Into<String>,
        price: Money,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            category_id: category_id.into(),
        }
    }
}
