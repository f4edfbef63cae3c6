//! Booking service: orchestrates pricing, storage, check-in, and events.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::domain::reports::{self, DailyOccupancy, GuestTotals};
use crate::domain::{
    BookingRecord, BookingRef, BookingRequest, Catalog, CheckInOutcome, EventBus, GateEvent,
    PaymentCharge, PaymentConfirmation,
};
use crate::error::GatewayError;
use crate::store::{BookingStore, CheckInLedger};

/// A priced booking ready for payment handoff.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct BookingQuote {
    /// Total in minor currency units; always equals the catalog price for
    /// the selection.
    pub total: u64,
    /// Outbound payload for the payment-provider widget.
    pub charge: PaymentCharge,
}

/// One visit date in the admin daily report.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DailyReport {
    /// The visit date.
    pub visit_date: NaiveDate,
    /// Booked versus remaining tickets for the date.
    pub occupancy: DailyOccupancy,
    /// Revenue for the date in minor currency units.
    pub revenue: u64,
    /// Booking records for the date.
    pub bookings: Vec<BookingRecord>,
}

/// Aggregated check-in figures for the sales dashboard.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CheckInSummary {
    /// Check-in, adult, and child counters.
    pub totals: GuestTotals,
    /// Checked-in bookings per ticket type.
    pub by_ticket_type: HashMap<String, u64>,
}

/// Orchestration layer for all booking and check-in operations.
///
/// Stateless coordinator: owns the catalog, a [`BookingStore`] and
/// [`CheckInLedger`] over the shared medium, and an [`EventBus`] for
/// event emission. Every mutation method follows the pattern: validate →
/// write through the store/ledger → emit events → return result.
#[derive(Debug, Clone)]
pub struct BookingService {
    catalog: Catalog,
    store: BookingStore,
    ledger: CheckInLedger,
    event_bus: EventBus,
    daily_capacity: u32,
}

impl BookingService {
    /// Creates a new `BookingService`.
    #[must_use]
    pub fn new(
        store: BookingStore,
        ledger: CheckInLedger,
        event_bus: EventBus,
        daily_capacity: u32,
    ) -> Self {
        Self {
            catalog: Catalog,
            store,
            ledger,
            event_bus,
            daily_capacity,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns the ticket catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Prices a prospective booking and builds the payment handoff.
    ///
    /// Side-effect free: a visitor may retry any number of times without
    /// creating state.
    ///
    /// # Errors
    ///
    /// Returns a validation [`GatewayError`] for bad form input, an
    /// unknown ticket type, or an invalid quantity.
    pub fn quote(&self, request: &BookingRequest) -> Result<BookingQuote, GatewayError> {
        request.validate()?;
        let total = self
            .catalog
            .price(&request.ticket_type_id, request.adult_count, request.child_count)?;
        Ok(BookingQuote {
            total,
            charge: PaymentCharge::for_request(request, total),
        })
    }

    /// Records a booking from a payment-provider success callback.
    ///
    /// The total is recomputed from the catalog, never trusted from the
    /// client, so `record.total == price(...)` holds for every stored
    /// record. Exactly one record is created per successful confirmation;
    /// failed or cancelled payments create nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for a non-success status,
    /// validation errors for bad form input, or
    /// [`GatewayError::DuplicateBooking`] when the reference was already
    /// recorded.
    pub async fn confirm_payment(
        &self,
        request: &BookingRequest,
        confirmation: &PaymentConfirmation,
    ) -> Result<BookingRecord, GatewayError> {
        if !confirmation.is_success() {
            return Err(GatewayError::InvalidRequest(format!(
                "payment not successful: {}",
                confirmation.status
            )));
        }
        request.validate()?;

        let total = self
            .catalog
            .price(&request.ticket_type_id, request.adult_count, request.child_count)?;

        let record = BookingRecord {
            reference: BookingRef::from(confirmation.reference.clone()),
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            ticket_type_id: request.ticket_type_id.clone(),
            adult_count: request.adult_count,
            child_count: request.child_count,
            visit_date: request.visit_date,
            total,
            created_at: Utc::now(),
        };

        self.store.put(&record).await?;

        let _ = self.event_bus.publish(GateEvent::BookingRecorded {
            booking_ref: record.reference.clone(),
            ticket_type_id: record.ticket_type_id.clone(),
            visit_date: record.visit_date,
            total: record.total,
            timestamp: record.created_at,
        });

        tracing::info!(reference = %record.reference, total, "booking recorded");
        Ok(record)
    }

    /// Loads a single booking record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BookingNotFound`] if the reference is
    /// unknown.
    pub async fn booking(&self, reference: &BookingRef) -> Result<BookingRecord, GatewayError> {
        self.store.get(reference).await
    }

    /// Loads all booking records.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn list_bookings(&self) -> Result<Vec<BookingRecord>, GatewayError> {
        self.store.list_all().await
    }

    /// Checks a guest in and emits [`GateEvent::GuestCheckedIn`] for
    /// fresh arrivals. Duplicate check-ins are idempotent no-ops that
    /// return the existing ledger entry.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BookingNotFound`] for an unknown
    /// reference, [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn check_in(
        &self,
        reference: &BookingRef,
        operator_id: &str,
    ) -> Result<CheckInOutcome, GatewayError> {
        let outcome = self.ledger.check_in(reference, operator_id).await?;

        if outcome.is_new() {
            let _ = self.event_bus.publish(GateEvent::GuestCheckedIn {
                booking_ref: outcome.entry.booking_ref.clone(),
                operator_id: outcome.entry.operator_id.clone(),
                timestamp: outcome.entry.checked_in_at,
            });
            tracing::info!(%reference, operator_id, "guest checked in");
        } else {
            tracing::warn!(%reference, "duplicate check-in attempt");
        }

        Ok(outcome)
    }

    /// Loads the ledger entry for one booking, if the guest has arrived.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn check_in_entry(
        &self,
        reference: &BookingRef,
    ) -> Result<Option<crate::domain::CheckInEntry>, GatewayError> {
        self.ledger.entry_for(reference).await
    }

    /// Returns the full check-in ledger.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn check_ins(&self) -> Result<Vec<crate::domain::CheckInEntry>, GatewayError> {
        self.ledger.list_all().await
    }

    /// Loads the booking records of all checked-in guests.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn checked_in_records(&self) -> Result<Vec<BookingRecord>, GatewayError> {
        let entries = self.ledger.list_all().await?;
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            records.push(self.store.get(&entry.booking_ref).await?);
        }
        Ok(records)
    }

    /// Builds the admin daily report: bookings grouped by visit date with
    /// occupancy against the configured daily capacity.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn daily_report(&self) -> Result<Vec<DailyReport>, GatewayError> {
        let records = self.store.list_all().await?;
        let grouped = reports::group_by_visit_date(&records);
        Ok(grouped
            .into_iter()
            .map(|(visit_date, bookings)| DailyReport {
                visit_date,
                occupancy: reports::daily_occupancy(&bookings, self.daily_capacity),
                revenue: reports::total_revenue(&bookings),
                bookings,
            })
            .collect())
    }

    /// Builds the sales check-in summary over the ledger snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on medium failure.
    pub async fn check_in_summary(&self) -> Result<CheckInSummary, GatewayError> {
        let checked_in = self.checked_in_records().await?;
        Ok(CheckInSummary {
            totals: reports::guest_totals(&checked_in),
            by_ticket_type: reports::summary_by_ticket_type(&checked_in),
        })
    }
}
