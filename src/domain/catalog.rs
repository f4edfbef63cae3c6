//! Ticket catalog and the pricing calculator.
//!
//! The catalog is a static table of [`TicketOffering`]s, immutable at
//! runtime. All prices are integers in minor currency units. Pricing is a
//! pure function over the catalog: no clocks, no storage, no randomness.

use serde::Serialize;

use crate::error::GatewayError;

/// A priced ticket category with separate adult and child rates.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TicketOffering {
    /// Catalog identifier (e.g. `"Classic"`).
    pub id: &'static str,
    /// Human-readable name shown on the booking form.
    pub name: &'static str,
    /// Price per adult in minor currency units.
    pub adult_price: u32,
    /// Price per child in minor currency units. Zero means children enter
    /// free and are never charged for this offering.
    pub child_price: u32,
    /// Marketing description.
    pub description: &'static str,
}

impl TicketOffering {
    /// Returns `true` if this offering charges for child tickets.
    #[must_use]
    pub const fn has_child_pricing(&self) -> bool {
        self.child_price > 0
    }
}

/// The full park ticket catalog.
const OFFERINGS: [TicketOffering; 3] = [
    TicketOffering {
        id: "Basic",
        name: "Basic Park Ticket",
        adult_price: 2000,
        child_price: 0,
        description: "Entry access to City Park and playground.",
    },
    TicketOffering {
        id: "Classic",
        name: "Classic Park Ticket",
        adult_price: 3500,
        child_price: 1500,
        description: "Includes guided park tour and free drink.",
    },
    TicketOffering {
        id: "Mangrove",
        name: "Mangrove Park Experience",
        adult_price: 5000,
        child_price: 2000,
        description: "Full park experience with access to games and private picnic area.",
    },
];

/// Read-only view over the static ticket catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Returns all offerings in catalog order.
    #[must_use]
    pub fn offerings(&self) -> &'static [TicketOffering] {
        &OFFERINGS
    }

    /// Looks up an offering by its catalog identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownTicketType`] if no offering with the
    /// given id exists.
    pub fn offering(&self, ticket_type_id: &str) -> Result<&'static TicketOffering, GatewayError> {
        OFFERINGS
            .iter()
            .find(|o| o.id == ticket_type_id)
            .ok_or_else(|| GatewayError::UnknownTicketType(ticket_type_id.to_string()))
    }

    /// Computes the total price for a ticket selection in minor units.
    ///
    /// The result is `adult_price * adults + child_price * children`;
    /// offerings without child pricing contribute nothing for children.
    /// Deterministic and side-effect free.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownTicketType`] for an id absent from
    /// the catalog, or [`GatewayError::InvalidQuantity`] if the total
    /// overflows.
    pub fn price(
        &self,
        ticket_type_id: &str,
        adult_count: u32,
        child_count: u32,
    ) -> Result<u64, GatewayError> {
        let offering = self.offering(ticket_type_id)?;

        let adult_total = u64::from(offering.adult_price) * u64::from(adult_count);
        let child_total = if offering.has_child_pricing() {
            u64::from(offering.child_price) * u64::from(child_count)
        } else {
            0
        };

        adult_total.checked_add(child_total).ok_or_else(|| {
            GatewayError::InvalidQuantity(format!(
                "ticket total overflows for {adult_count} adults, {child_count} children"
            ))
        })
    }
}
