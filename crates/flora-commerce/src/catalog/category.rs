//! Categories for catalog browsing.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A flat category the catalog filter groups flowers by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Whether products in this category are composed with accessories
    /// (bouquets and potted arrangements are; loose stems are not).
    #[serde(default)]
    pub accessorizable: bool,
}
