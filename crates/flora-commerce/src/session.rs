//! Cart persistence session: best-effort snapshots around every mutation.
//!
//! The cart in memory is the source of truth; the snapshot store exists so a
//! cart survives process restarts. Storage trouble never surfaces to the
//! caller: a missing or corrupt snapshot loads as an empty cart, and a failed
//! save leaves the in-memory cart correct for the rest of the run.

use flora_store::{store_key, Store};
use tracing::warn;

use crate::cart::{AccessorySelection, Cart};
use crate::catalog::Flower;
use crate::ids::{AccessoryId, FlowerId, LineId};

/// A cart bound to a snapshot store.
///
/// Mutations mirror [`Cart`]'s and snapshot the whole cart after each one.
pub struct CartSession {
    store: Store,
    key: String,
    cart: Cart,
}

impl CartSession {
    /// Open the session for a named cart, restoring any previous snapshot.
    pub fn open(store: Store, name: &str) -> Self {
        let key = store_key!("cart", name);
        let cart = match store.get::<Cart>(&key) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(key = %key, "discarding unreadable cart snapshot: {err}");
                Cart::new()
            }
        };
        Self { store, key, cart }
    }

    /// Read access to the live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// See [`Cart::add_line`].
    pub fn add_line(&mut self, flower: &Flower, selections: &[AccessorySelection]) -> LineId {
        let id = self.cart.add_line(flower, selections);
        self.persist();
        id
    }

    /// See [`Cart::remove_line`].
    pub fn remove_line(&mut self, id: &LineId) -> bool {
        let removed = self.cart.remove_line(id);
        self.persist();
        removed
    }

    /// See [`Cart::set_quantity`].
    pub fn set_quantity(&mut self, id: &LineId, quantity: i64) -> bool {
        let updated = self.cart.set_quantity(id, quantity);
        self.persist();
        updated
    }

    /// See [`Cart::remove_accessory`].
    pub fn remove_accessory(&mut self, flower_id: &FlowerId, accessory_id: &AccessoryId) {
        self.cart.remove_accessory(flower_id, accessory_id);
        self.persist();
    }

    /// See [`Cart::remove_most_recent_line`].
    pub fn remove_most_recent_line(&mut self, flower_id: &FlowerId) -> bool {
        let removed = self.cart.remove_most_recent_line(flower_id);
        self.persist();
        removed
    }

    /// See [`Cart::clear`].
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.store.set(&self.key, &self.cart) {
            warn!(key = %self.key, "failed to snapshot cart: {err}");
        }
    }
}
