//! Admin ticket inventory with typed partial updates.
//!
//! [`InventoryRegistry`] stores the sellable ticket stock managed from the
//! admin dashboard. Mutations go through [`InventoryPatch`], which names
//! exactly the fields an admin may change; everything else on an item is
//! immutable after creation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::GatewayError;

/// A sellable ticket stock line on the admin dashboard.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct InventoryItem {
    /// Stock line identifier.
    pub id: Uuid,
    /// Ticket type label (e.g. `"Standard"`).
    pub ticket_type: String,
    /// Unit price in minor currency units. Mutable via patch.
    pub price: u32,
    /// Remaining sellable tickets. Mutable via patch.
    pub available: u32,
    /// Tickets sold so far.
    pub sold: u32,
    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Creates a new stock line with zero sales.
    #[must_use]
    pub fn new(ticket_type: String, price: u32, available: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_type,
            price,
            available,
            sold: 0,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for an inventory item.
///
/// Only `price` and `available` are admin-mutable; omitted fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct InventoryPatch {
    /// New unit price, if changing.
    #[serde(default)]
    pub price: Option<u32>,
    /// New availability, if changing.
    #[serde(default)]
    pub available: Option<u32>,
}

/// Aggregate figures across the whole inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct InventoryTotals {
    /// Revenue from sold tickets: `Σ sold · price`, minor units.
    pub revenue: u64,
    /// Total capacity: available plus sold across all lines.
    pub capacity: u64,
    /// Tickets sold across all lines.
    pub sold: u64,
}

/// Concurrent store for admin ticket inventory.
///
/// Uses a `RwLock<HashMap<...>>`; reads are concurrent, writes serialized.
/// Inventory is small (a handful of lines) so a single outer lock is
/// sufficient.
#[derive(Debug, Default)]
pub struct InventoryRegistry {
    items: RwLock<HashMap<Uuid, InventoryItem>>,
}

impl InventoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new stock line, returning its id.
    pub async fn insert(&self, item: InventoryItem) -> Uuid {
        let id = item.id;
        self.items.write().await.insert(id, item);
        id
    }

    /// Returns a snapshot of the stock line with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if no such line exists.
    pub async fn get(&self, id: Uuid) -> Result<InventoryItem, GatewayError> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| GatewayError::InvalidRequest(format!("no inventory item {id}")))
    }

    /// Applies a typed patch to a stock line, returning the updated item.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if no such line exists.
    pub async fn apply_patch(
        &self,
        id: Uuid,
        patch: &InventoryPatch,
    ) -> Result<InventoryItem, GatewayError> {
        let mut map = self.items.write().await;
        let item = map
            .get_mut(&id)
            .ok_or_else(|| GatewayError::InvalidRequest(format!("no inventory item {id}")))?;
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(available) = patch.available {
            item.available = available;
        }
        Ok(item.clone())
    }

    /// Removes a stock line.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if no such line exists.
    pub async fn remove(&self, id: Uuid) -> Result<InventoryItem, GatewayError> {
        self.items
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| GatewayError::InvalidRequest(format!("no inventory item {id}")))
    }

    /// Returns all stock lines, ordered by creation time.
    pub async fn list(&self) -> Vec<InventoryItem> {
        let map = self.items.read().await;
        let mut items: Vec<InventoryItem> = map.values().cloned().collect();
        items.sort_by_key(|item| item.created_at);
        items
    }

    /// Computes revenue, capacity, and sold counts across all lines.
    pub async fn totals(&self) -> InventoryTotals {
        let map = self.items.read().await;
        let mut totals = InventoryTotals {
            revenue: 0,
            capacity: 0,
            sold: 0,
        };
        for item in map.values() {
            totals.revenue += u64::from(item.sold) * u64::from(item.price);
            totals.capacity += u64::from(item.available) + u64::from(item.sold);
            totals.sold += u64::from(item.sold);
        }
        totals
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_get() {
        let registry = InventoryRegistry::new();
        let id = registry
            .insert(InventoryItem::new("Standard".to_string(), 50, 150))
            .await;

        let Ok(item) = registry.get(id).await else {
            panic!("item not found");
        };
        assert_eq!(item.ticket_type, "Standard");
        assert_eq!(item.sold, 0);
    }

    #[tokio::test]
    async fn patch_touches_only_named_fields() {
        let registry = InventoryRegistry::new();
        let id = registry
            .insert(InventoryItem::new("Premium".to_string(), 100, 75))
            .await;

        let patch = InventoryPatch {
            price: Some(120),
            available: None,
        };
        let Ok(updated) = registry.apply_patch(id, &patch).await else {
            panic!("patch failed");
        };
        assert_eq!(updated.price, 120);
        assert_eq!(updated.available, 75);
        assert_eq!(updated.ticket_type, "Premium");
    }

    #[tokio::test]
    async fn patch_unknown_item_fails() {
        let registry = InventoryRegistry::new();
        let result = registry
            .apply_patch(Uuid::new_v4(), &InventoryPatch::default())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn remove_deletes_item() {
        let registry = InventoryRegistry::new();
        let id = registry
            .insert(InventoryItem::new("VIP".to_string(), 200, 30))
            .await;

        assert!(registry.remove(id).await.is_ok());
        assert!(registry.get(id).await.is_err());
    }

    #[tokio::test]
    async fn totals_sum_revenue_capacity_and_sold() {
        let registry = InventoryRegistry::new();
        let mut standard = InventoryItem::new("Standard".to_string(), 50, 150);
        standard.sold = 50;
        let mut premium = InventoryItem::new("Premium".to_string(), 100, 75);
        premium.sold = 25;
        registry.insert(standard).await;
        registry.insert(premium).await;

        let totals = registry.totals().await;
        assert_eq!(totals.revenue, 50 * 50 + 25 * 100);
        assert_eq!(totals.capacity, 200 + 100);
        assert_eq!(totals.sold, 75);
    }

    #[tokio::test]
    async fn list_orders_by_creation() {
        let registry = InventoryRegistry::new();
        registry
            .insert(InventoryItem::new("Standard".to_string(), 50, 150))
            .await;
        registry
            .insert(InventoryItem::new("Premium".to_string(), 100, 75))
            .await;

        let items = registry.list().await;
        assert_eq!(items.len(), 2);
        assert!(items.windows(2).all(|w| match w {
            [a, b] => a.created_at <= b.created_at,
            _ => true,
        }));
    }
}
