//! In-memory storage medium for tests and persistence-disabled runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StorageMedium;
use crate::error::GatewayError;

/// `HashMap`-backed [`StorageMedium`].
///
/// Conditional writes take the write lock for the whole check-then-insert,
/// so `set_if_absent` is atomic within the process.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryMedium {
    /// Creates an empty medium.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageMedium for MemoryMedium {
    async fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, GatewayError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(true)
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, GatewayError> {
        Ok(self
            .entries
            .read()
            .await
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_get_round_trip() {
        let medium = MemoryMedium::new();
        let Ok(()) = medium.set("booking_T-1", "{}").await else {
            panic!("set failed");
        };
        let Ok(value) = medium.get("booking_T-1").await else {
            panic!("get failed");
        };
        assert_eq!(value.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn get_absent_key_is_none() {
        let medium = MemoryMedium::new();
        let Ok(value) = medium.get("missing").await else {
            panic!("get failed");
        };
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn set_if_absent_writes_once() {
        let medium = MemoryMedium::new();
        let Ok(first) = medium.set_if_absent("checkin_T-1", "a").await else {
            panic!("first write failed");
        };
        assert!(first);

        let Ok(second) = medium.set_if_absent("checkin_T-1", "b").await else {
            panic!("second write failed");
        };
        assert!(!second);

        // Losing writer must not clobber the stored value.
        let Ok(value) = medium.get("checkin_T-1").await else {
            panic!("get failed");
        };
        assert_eq!(value.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn keys_with_prefix_filters() {
        let medium = MemoryMedium::new();
        for key in ["booking_T-1", "booking_T-2", "checkin_T-1"] {
            let Ok(()) = medium.set(key, "x").await else {
                panic!("set failed");
            };
        }

        let Ok(mut keys) = medium.keys_with_prefix("booking_").await else {
            panic!("enumerate failed");
        };
        keys.sort();
        assert_eq!(keys, vec!["booking_T-1", "booking_T-2"]);
    }

    #[tokio::test]
    async fn concurrent_set_if_absent_has_one_winner() {
        use std::sync::Arc;
        let medium = Arc::new(MemoryMedium::new());

        let a = Arc::clone(&medium);
        let b = Arc::clone(&medium);
        let (ra, rb) = tokio::join!(
            tokio::spawn(async move { a.set_if_absent("checkin_T-9", "a").await }),
            tokio::spawn(async move { b.set_if_absent("checkin_T-9", "b").await }),
        );

        let (Ok(Ok(wa)), Ok(Ok(wb))) = (ra, rb) else {
            panic!("writes failed");
        };
        assert!(wa ^ wb, "exactly one writer must win");
    }
}
