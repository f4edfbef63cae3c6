//! Admin inventory DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::{InventoryItem, InventoryTotals};

/// Request body for `POST /admin/tickets`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateInventoryRequest {
    /// Ticket type label.
    pub ticket_type: String,
    /// Unit price in minor currency units.
    pub price: u32,
    /// Initial availability.
    pub available: u32,
}

/// Inventory listing for `GET /admin/tickets`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct InventoryListResponse {
    /// All stock lines in creation order.
    pub data: Vec<InventoryItem>,
    /// Revenue, capacity, and sold figures across all lines.
    pub totals: InventoryTotals,
}
