//! Cart and cart line types.

use serde::{Deserialize, Serialize};

use crate::cart::selection::{self, AccessorySelection};
use crate::catalog::Flower;
use crate::ids::{AccessoryId, FlowerId, LineId};
use crate::money::Money;

/// One orderable configuration: a flower plus a specific accessory bundle,
/// with its own quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Opaque line identifier, distinct from the flower id: the same flower
    /// appears in several lines when attached with different bundles.
    pub id: LineId,
    /// Snapshot of the flower at the moment it was added.
    pub flower: Flower,
    /// How many of this configuration.
    pub quantity: i64,
    /// The accessory bundle attached to each unit. Always normalized.
    pub accessories: Vec<AccessorySelection>,
}

impl CartLine {
    fn new(flower: Flower, accessories: Vec<AccessorySelection>) -> Self {
        Self {
            id: LineId::generate(),
            flower,
            quantity: 1,
            accessories,
        }
    }

    /// Price of one unit of this configuration: the flower plus its bundle.
    pub fn unit_total(&self) -> Money {
        self.accessories
            .iter()
            .fold(self.flower.price, |acc, sel| {
                acc.saturating_add(&sel.bundle_price())
            })
    }

    /// Price of the whole line.
    pub fn line_total(&self) -> Money {
        self.unit_total().scale(self.quantity)
    }

    fn is_configuration(&self, flower_id: &FlowerId, bundle: &[AccessorySelection]) -> bool {
        &self.flower.id == flower_id && selection::same_bundle(&self.accessories, bundle)
    }
}

/// The cart: an insertion-ordered sequence of lines.
///
/// The cart is the single source of truth for "what is being ordered".
/// Every mutation is total: unknown ids are silently ignored, nothing here
/// can fail or panic. Line order is preserved for display; it has no other
/// meaning except as the tie-break for [`Cart::remove_most_recent_line`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines, oldest first.
    pub lines: Vec<CartLine>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last mutation.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add one unit of a flower with the given accessory selections.
    ///
    /// Selections are normalized first (duplicate ids merged, non-positive
    /// quantities dropped). If a line with the same configuration already
    /// exists its quantity goes up by one; otherwise a new line is appended.
    /// Returns the id of the line that absorbed the addition.
    pub fn add_line(&mut self, flower: &Flower, selections: &[AccessorySelection]) -> LineId {
        let bundle = selection::normalize(selections);

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.is_configuration(&flower.id, &bundle))
        {
            existing.quantity = existing.quantity.saturating_add(1);
            let id = existing.id.clone();
            self.touch();
            return id;
        }

        let line = CartLine::new(flower.clone(), bundle);
        let id = line.id.clone();
        self.lines.push(line);
        self.touch();
        id
    }

    /// Remove a line. Removing an unknown id is a no-op.
    pub fn remove_line(&mut self, id: &LineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity at or below zero removes the line. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: &LineId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_line(id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == id) {
            line.quantity = quantity;
            self.touch();
            true
        } else {
            false
        }
    }

    /// Strip one accessory from every line of the given flower.
    ///
    /// The lines themselves always survive: a flower with no accessories left
    /// is still a valid configuration.
    pub fn remove_accessory(&mut self, flower_id: &FlowerId, accessory_id: &AccessoryId) {
        let mut changed = false;
        for line in self.lines.iter_mut().filter(|l| &l.flower.id == flower_id) {
            let before = line.accessories.len();
            line.accessories.retain(|s| &s.accessory.id != accessory_id);
            changed |= line.accessories.len() != before;
        }
        if changed {
            self.touch();
        }
    }

    /// Remove the most recently added line for a flower, whole.
    ///
    /// Tie-break is insertion order. The storefront's per-product minus
    /// button discards the newest configuration of that product rather than
    /// decrementing it.
    pub fn remove_most_recent_line(&mut self, flower_id: &FlowerId) -> bool {
        if let Some(pos) = self.lines.iter().rposition(|l| &l.flower.id == flower_id) {
            self.lines.remove(pos);
            self.touch();
            true
        } else {
            false
        }
    }

    /// Summed quantity of a flower across all of its configurations.
    pub fn quantity_of(&self, flower_id: &FlowerId) -> i64 {
        self.lines
            .iter()
            .filter(|l| &l.flower.id == flower_id)
            .map(|l| l.quantity)
            .sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.touch();
    }

    /// Total price across all lines.
    pub fn total_price(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map(|l| l.flower.price.currency)
            .unwrap_or_default();
        Money::sum(self.lines.iter().map(CartLine::line_total), currency)
    }

    /// Total item count: the sum of line quantities. Accessories are not
    /// counted as items of their own.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (distinct configurations).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by id.
    pub fn line(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Accessory;
    use crate::money::Currency;

    fn ramo() -> Flower {
        Flower::new("ramo", "Ramo Primavera", Money::new(1000, Currency::CUP), "ramos")
    }

    fn rosa() -> Flower {
        Flower::new("rosa", "Rosa Roja", Money::new(150, Currency::CUP), "sueltas")
    }

    fn lazo(quantity: i64) -> AccessorySelection {
        AccessorySelection::new(
            Accessory::new("lazo", "Lazo", Money::new(500, Currency::CUP)),
            quantity,
        )
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add_line(&ramo(), &[lazo(1)]);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 4);
    }

    #[test]
    fn test_distinct_bundles_make_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_line(&ramo(), &[lazo(1)]);
        cart.add_line(&ramo(), &[lazo(2)]);
        cart.add_line(&ramo(), &[]);

        assert_eq!(cart.line_count(), 3);
        assert!(cart.lines.iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn test_add_normalizes_selections_before_matching() {
        let mut cart = Cart::new();
        cart.add_line(&ramo(), &[lazo(1), lazo(1)]);
        cart.add_line(&ramo(), &[lazo(2)]);

        // 1+1 merges to 2, so both adds hit the same configuration.
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let id = cart.add_line(&ramo(), &[]);
        cart.add_line(&rosa(), &[]);
        assert_eq!(cart.item_count(), 2);

        assert!(cart.set_quantity(&id, 0));
        assert!(cart.line(&id).is_none());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        let id = cart.add_line(&ramo(), &[]);

        cart.set_quantity(&id, 5);
        cart.set_quantity(&id, 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_unknown_ids_are_silently_ignored() {
        let mut cart = Cart::new();
        cart.add_line(&ramo(), &[]);

        assert!(!cart.remove_line(&LineId::new("nope")));
        assert!(!cart.set_quantity(&LineId::new("nope"), 5));
        assert!(!cart.remove_most_recent_line(&FlowerId::new("nope")));
        cart.remove_accessory(&FlowerId::new("nope"), &AccessoryId::new("nope"));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_price_scales_accessories_with_line_quantity() {
        // unit 10.00, qty 2, accessory 5.00 x3 => 10*2 + 5*3*2 = 50.00
        let flower = Flower::new("f", "F", Money::new(1000, Currency::CUP), "ramos");
        let sel = AccessorySelection::new(
            Accessory::new("a", "A", Money::new(500, Currency::CUP)),
            3,
        );

        let mut cart = Cart::new();
        let id = cart.add_line(&flower, &[sel]);
        cart.set_quantity(&id, 2);

        assert_eq!(cart.total_price(), Money::new(5000, Currency::CUP));
    }

    #[test]
    fn test_remove_accessory_keeps_the_line() {
        let mut cart = Cart::new();
        let id = cart.add_line(&ramo(), &[lazo(2)]);
        cart.set_quantity(&id, 3);

        cart.remove_accessory(&FlowerId::new("ramo"), &AccessoryId::new("lazo"));

        let line = cart.line(&id).expect("line must survive");
        assert!(line.accessories.is_empty());
        assert_eq!(line.quantity, 3);
        assert_eq!(cart.total_price(), Money::new(3000, Currency::CUP));
    }

    #[test]
    fn test_remove_accessory_hits_every_line_of_the_flower() {
        let mut cart = Cart::new();
        cart.add_line(&ramo(), &[lazo(1)]);
        cart.add_line(&ramo(), &[lazo(2)]);

        cart.remove_accessory(&FlowerId::new("ramo"), &AccessoryId::new("lazo"));

        assert!(cart.lines.iter().all(|l| l.accessories.is_empty()));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_remove_most_recent_line_takes_the_newest() {
        let mut cart = Cart::new();
        let first = cart.add_line(&ramo(), &[]);
        let second = cart.add_line(&ramo(), &[lazo(1)]);

        assert!(cart.remove_most_recent_line(&FlowerId::new("ramo")));
        assert!(cart.line(&first).is_some());
        assert!(cart.line(&second).is_none());
    }

    #[test]
    fn test_quantity_of_sums_across_configurations() {
        let mut cart = Cart::new();
        let plain = cart.add_line(&ramo(), &[]);
        cart.set_quantity(&plain, 2);
        cart.add_line(&ramo(), &[lazo(1)]);
        cart.add_line(&rosa(), &[]);

        assert_eq!(cart.quantity_of(&FlowerId::new("ramo")), 3);
        assert_eq!(cart.quantity_of(&FlowerId::new("rosa")), 1);
        assert_eq!(cart.quantity_of(&FlowerId::new("girasol")), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(&ramo(), &[lazo(1)]);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_snapshot_insulates_lines_from_catalog_edits() {
        let mut flower = ramo();
        let mut cart = Cart::new();
        cart.add_line(&flower, &[]);

        flower.price = Money::new(9999, Currency::CUP);

        assert_eq!(cart.total_price(), Money::new(1000, Currency::CUP));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add_line(&ramo(), &[lazo(2)]);
        let id = cart.add_line(&rosa(), &[]);
        cart.set_quantity(&id, 4);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
