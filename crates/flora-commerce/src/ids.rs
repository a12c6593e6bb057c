//! Newtype ids for the catalog and cart.
//!
//! Newtypes keep the id spaces apart: a `FlowerId` cannot be passed where a
//! `LineId` is expected. That distinction carries weight here because a cart
//! line has its own identity, separate from the flower it holds; the same
//! flower shows up in several lines when attached with different accessory
//! bundles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(FlowerId);
define_id!(AccessoryId);
define_id!(CategoryId);
define_id!(LineId);

/// Generate an opaque unique id from the clock and a process-local counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{nanos:x}-{counter:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = FlowerId::new("rosa-roja");
        assert_eq!(id.as_str(), "rosa-roja");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: Vec<LineId> = (0..100).map(|_| LineId::generate()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_id_display() {
        let id = AccessoryId::new("lazo");
        assert_eq!(format!("{}", id), "lazo");
    }

    #[test]
    fn test_id_from_str() {
        let id: CategoryId = "ramos".into();
        assert_eq!(id.as_str(), "ramos");
    }
}
