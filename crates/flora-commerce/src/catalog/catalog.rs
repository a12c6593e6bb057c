//! The catalog aggregate, loaded once at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::{AccessoryId, CategoryId, FlowerId};

use super::{Accessory, Category, Flower};

/// Everything the shop sells, as one read-only document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Purchasable arrangements.
    #[serde(default)]
    pub flowers: Vec<Flower>,
    /// Categories for browsing.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Optional accessories.
    #[serde(default)]
    pub accessories: Vec<Accessory>,
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Look up a flower by id.
    pub fn flower(&self, id: &FlowerId) -> Option<&Flower> {
        self.flowers.iter().find(|f| &f.id == id)
    }

    /// Look up an accessory by id.
    pub fn accessory(&self, id: &AccessoryId) -> Option<&Accessory> {
        self.accessories.iter().find(|a| &a.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Iterate the flowers filed under a category.
    pub fn flowers_in<'a>(
        &'a self,
        category_id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a Flower> {
        self.flowers.iter().filter(move |f| &f.category_id == category_id)
    }

    /// Whether a flower takes accessory selections, per its category.
    pub fn accessorizable(&self, flower: &Flower) -> bool {
        self.category(&flower.category_id)
            .is_some_and(|c| c.accessorizable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    const SAMPLE: &str = r#"{
        "categories": [
            {"id": "sueltas", "name": "Flores Sueltas", "description": "Por tallo"},
            {"id": "ramos", "name": "Ramos", "description": "Armados al gusto", "accessorizable": true}
        ],
        "flowers": [
            {
                "id": "rosa-roja",
                "name": "Rosa Roja",
                "description": "Tallo largo",
                "price": {"amount_cents": 15000, "currency": "CUP"},
                "image_url": "img/rosa-roja.webp",
                "category_id": "sueltas"
            },
            {
                "id": "ramo-primavera",
                "name": "Ramo Primavera",
                "description": "Mezcla de temporada",
                "price": {"amount_cents": 450000, "currency": "CUP"},
                "image_url": "img/ramo-primavera.webp",
                "category_id": "ramos"
            }
        ],
        "accessories": [
            {
                "id": "lazo",
                "name": "Lazo",
                "description": "Lazo decorativo",
                "price": {"amount_cents": 20000, "currency": "CUP"},
                "image_url": "img/lazo.webp"
            }
        ]
    }"#;

    #[test]
    fn test_parse_and_lookup() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.flowers.len(), 2);

        let rosa = catalog.flower(&FlowerId::new("rosa-roja")).unwrap();
        assert_eq!(rosa.price, Money::new(15000, Currency::CUP));
        assert!(catalog.flower(&FlowerId::new("girasol")).is_none());

        let lazo = catalog.accessory(&AccessoryId::new("lazo")).unwrap();
        assert_eq!(lazo.name, "Lazo");
    }

    #[test]
    fn test_flowers_in_category() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let ramos = CategoryId::new("ramos");
        let names: Vec<&str> = catalog.flowers_in(&ramos).map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Ramo Primavera"]);
    }

    #[test]
    fn test_accessorizable_follows_category() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let rosa = catalog.flower(&FlowerId::new("rosa-roja")).unwrap().clone();
        let ramo = catalog
            .flower(&FlowerId::new("ramo-primavera"))
            .unwrap()
            .clone();

        assert!(!catalog.accessorizable(&rosa));
        assert!(catalog.accessorizable(&ramo));
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        assert!(Catalog::from_json_str("{not json").is_err());
    }
}
