//! Accessory attachment: how optional extras bind to a cart line.
//!
//! Everything here is a pure function over selection sets. The cart calls
//! [`normalize`] when a line is added; the accessory picker UI drives
//! [`adjust`] one step at a time.

use serde::{Deserialize, Serialize};

use crate::catalog::Accessory;
use crate::money::Money;

/// An accessory attached to a cart line, with how many of it.
///
/// A selection present in a collection always has quantity >= 1; reaching
/// zero removes the entry instead of leaving it behind. A selection set holds
/// at most one entry per accessory id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessorySelection {
    /// The accessory, snapshotted from the catalog.
    pub accessory: Accessory,
    /// How many of it ride along with each unit of the owning line.
    pub quantity: i64,
}

impl AccessorySelection {
    /// Create a selection.
    pub fn new(accessory: Accessory, quantity: i64) -> Self {
        Self {
            accessory,
            quantity,
        }
    }

    /// Price this selection adds to one unit of the owning line.
    pub fn bundle_price(&self) -> Money {
        self.accessory.price.scale(self.quantity)
    }
}

/// Merge duplicate accessory ids (summing quantities) and drop entries that
/// ended up at zero or below. First-seen order is preserved.
pub fn normalize(selections: &[AccessorySelection]) -> Vec<AccessorySelection> {
    let mut out: Vec<AccessorySelection> = Vec::new();
    for sel in selections {
        match out.iter_mut().find(|s| s.accessory.id == sel.accessory.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(sel.quantity),
            None => out.push(sel.clone()),
        }
    }
    out.retain(|s| s.quantity > 0);
    out
}

/// Adjust one accessory's quantity by `delta` within a selection set.
///
/// Absent plus a positive delta appends; present adds the delta; a result at
/// or below zero drops the entry, so negative quantities never persist. The
/// empty set is the valid "no accessories" state.
pub fn adjust(
    current: &[AccessorySelection],
    accessory: &Accessory,
    delta: i64,
) -> Vec<AccessorySelection> {
    let mut out: Vec<AccessorySelection> = current.to_vec();
    match out.iter_mut().find(|s| s.accessory.id == accessory.id) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(delta),
        None if delta > 0 => out.push(AccessorySelection::new(accessory.clone(), delta)),
        None => {}
    }
    out.retain(|s| s.quantity > 0);
    out
}

/// Whether two selection sets describe the same bundle, regardless of the
/// order selections were made in.
pub fn same_bundle(a: &[AccessorySelection], b: &[AccessorySelection]) -> bool {
    bundle_key(a) == bundle_key(b)
}

/// Canonical comparison key: (accessory id, quantity) pairs sorted by id.
fn bundle_key(selections: &[AccessorySelection]) -> Vec<(&str, i64)> {
    let mut key: Vec<(&str, i64)> = selections
        .iter()
        .map(|s| (s.accessory.id.as_str(), s.quantity))
        .collect();
    key.sort();
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn lazo() -> Accessory {
        Accessory::new("lazo", "Lazo", Money::new(2000, Currency::CUP))
    }

    fn tarjeta() -> Accessory {
        Accessory::new("tarjeta", "Tarjeta", Money::new(500, Currency::CUP))
    }

    #[test]
    fn test_normalize_merges_duplicates() {
        let raw = vec![
            AccessorySelection::new(lazo(), 1),
            AccessorySelection::new(tarjeta(), 2),
            AccessorySelection::new(lazo(), 3),
        ];
        let normalized = normalize(&raw);

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].accessory.id.as_str(), "lazo");
        assert_eq!(normalized[0].quantity, 4);
        assert_eq!(normalized[1].quantity, 2);
    }

    #[test]
    fn test_normalize_drops_nonpositive() {
        let raw = vec![
            AccessorySelection::new(lazo(), 0),
            AccessorySelection::new(tarjeta(), -1),
        ];
        assert!(normalize(&raw).is_empty());
    }

    #[test]
    fn test_adjust_appends_when_absent() {
        let out = adjust(&[], &lazo(), 2);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].quantity, 2);
    }

    #[test]
    fn test_adjust_removing_absent_entry_is_noop() {
        assert!(adjust(&[], &lazo(), -1).is_empty());
    }

    #[test]
    fn test_adjust_drops_at_zero() {
        let current = vec![AccessorySelection::new(lazo(), 1)];
        assert!(adjust(&current, &lazo(), -1).is_empty());
        assert!(adjust(&current, &lazo(), -5).is_empty());
    }

    #[test]
    fn test_adjust_increments_existing() {
        let current = vec![AccessorySelection::new(lazo(), 1)];
        let out = adjust(&current, &lazo(), 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].quantity, 2);
    }

    #[test]
    fn test_same_bundle_ignores_order() {
        let a = vec![
            AccessorySelection::new(lazo(), 1),
            AccessorySelection::new(tarjeta(), 2),
        ];
        let b = vec![
            AccessorySelection::new(tarjeta(), 2),
            AccessorySelection::new(lazo(), 1),
        ];
        assert!(same_bundle(&a, &b));
    }

    #[test]
    fn test_same_bundle_distinguishes_quantity() {
        let a = vec![AccessorySelection::new(lazo(), 1)];
        let b = vec![AccessorySelection::new(lazo(), 2)];
        assert!(!same_bundle(&a, &b));
        assert!(!same_bundle(&a, &[]));
    }

    #[test]
    fn test_bundle_price_scales_with_quantity() {
        let sel = AccessorySelection::new(lazo(), 3);
        assert_eq!(sel.bundle_price(), Money::new(6000, Currency::CUP));
    }
}
