//! Pure aggregation reducers for the sales and admin dashboards.
//!
//! Every function here operates on an immutable snapshot passed in by the
//! caller; there is no hidden state and no storage access.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use super::booking::BookingRecord;

/// Occupancy for a single visit date against the daily capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct DailyOccupancy {
    /// Tickets booked (adults plus children) for the date.
    pub booked: u32,
    /// Tickets still available under the configured daily capacity.
    pub remaining: u32,
}

/// Check-in counters shown on the sales dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct GuestTotals {
    /// Number of checked-in bookings.
    pub check_ins: u64,
    /// Adults across all checked-in bookings.
    pub adults: u64,
    /// Children across all checked-in bookings.
    pub children: u64,
}

/// Groups booking records by visit date.
///
/// Dates are ordered ascending; every input record lands in exactly one
/// group, so the group sizes always sum to the input length.
#[must_use]
pub fn group_by_visit_date(records: &[BookingRecord]) -> BTreeMap<NaiveDate, Vec<BookingRecord>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<BookingRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.visit_date)
            .or_default()
            .push(record.clone());
    }
    grouped
}

/// Counts checked-in bookings per ticket type.
#[must_use]
pub fn summary_by_ticket_type(checked_in: &[BookingRecord]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in checked_in {
        *counts.entry(record.ticket_type_id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Sums the charged totals across the given records, in minor units.
#[must_use]
pub fn total_revenue(records: &[BookingRecord]) -> u64 {
    records.iter().map(|r| r.total).sum()
}

/// Sums tickets (adults plus children) across the given records.
#[must_use]
pub fn tickets_booked(records: &[BookingRecord]) -> u32 {
    records
        .iter()
        .fold(0u32, |sum, r| sum.saturating_add(r.ticket_count()))
}

/// Computes booked versus remaining tickets for one day's records.
#[must_use]
pub fn daily_occupancy(records_for_day: &[BookingRecord], daily_capacity: u32) -> DailyOccupancy {
    let booked = tickets_booked(records_for_day);
    DailyOccupancy {
        booked,
        remaining: daily_capacity.saturating_sub(booked),
    }
}

/// Computes the sales-dashboard counters over checked-in bookings.
#[must_use]
pub fn guest_totals(checked_in: &[BookingRecord]) -> GuestTotals {
    checked_in.iter().fold(GuestTotals::default(), |acc, r| {
        GuestTotals {
            check_ins: acc.check_ins + 1,
            adults: acc.adults + u64::from(r.adult_count),
            children: acc.children + u64::from(r.child_count),
        }
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::BookingRef;
    use chrono::Utc;

    fn record(reference: &str, ticket_type: &str, date: (i32, u32, u32), adults: u32, children: u32, total: u64) -> BookingRecord {
        BookingRecord {
            reference: BookingRef::from(reference),
            full_name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone: "1".to_string(),
            ticket_type_id: ticket_type.to_string(),
            adult_count: adults,
            child_count: children,
            visit_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
            total,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn group_by_visit_date_partitions_records() {
        let records = vec![
            record("T-1", "Classic", (2025, 5, 20), 2, 1, 8500),
            record("T-2", "Basic", (2025, 5, 20), 1, 0, 2000),
            record("T-3", "Mangrove", (2025, 5, 21), 2, 0, 10000),
        ];

        let grouped = group_by_visit_date(&records);
        assert_eq!(grouped.len(), 2);

        let may_20 = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap_or_default();
        let may_21 = NaiveDate::from_ymd_opt(2025, 5, 21).unwrap_or_default();
        assert_eq!(grouped.get(&may_20).map(Vec::len), Some(2));
        assert_eq!(grouped.get(&may_21).map(Vec::len), Some(1));

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn summary_counts_per_ticket_type() {
        let checked_in = vec![
            record("T-1", "Classic", (2025, 5, 20), 1, 0, 3500),
            record("T-2", "Classic", (2025, 5, 20), 2, 1, 8500),
            record("T-3", "Mangrove", (2025, 5, 20), 1, 1, 7000),
        ];

        let summary = summary_by_ticket_type(&checked_in);
        assert_eq!(summary.get("Classic"), Some(&2));
        assert_eq!(summary.get("Mangrove"), Some(&1));
        assert_eq!(summary.get("Basic"), None);
    }

    #[test]
    fn revenue_and_ticket_sums() {
        let records = vec![
            record("T-1", "Classic", (2025, 5, 20), 2, 1, 8500),
            record("T-2", "Basic", (2025, 5, 20), 1, 2, 2000),
        ];
        assert_eq!(total_revenue(&records), 10500);
        assert_eq!(tickets_booked(&records), 6);
    }

    #[test]
    fn occupancy_tracks_capacity() {
        let records = vec![
            record("T-1", "Classic", (2025, 5, 20), 2, 1, 8500),
            record("T-2", "Basic", (2025, 5, 20), 3, 0, 6000),
        ];
        let occupancy = daily_occupancy(&records, 100);
        assert_eq!(occupancy.booked, 6);
        assert_eq!(occupancy.remaining, 94);
    }

    #[test]
    fn occupancy_never_goes_negative() {
        let records = vec![record("T-1", "Basic", (2025, 5, 20), 30, 0, 60000)];
        let occupancy = daily_occupancy(&records, 10);
        assert_eq!(occupancy.remaining, 0);
    }

    #[test]
    fn guest_totals_sum_party_sizes() {
        let checked_in = vec![
            record("T-1", "Classic", (2025, 5, 19), 2, 1, 8500),
            record("T-2", "Basic", (2025, 5, 19), 1, 0, 2000),
            record("T-3", "Mangrove", (2025, 5, 19), 2, 2, 14000),
        ];
        let totals = guest_totals(&checked_in);
        assert_eq!(totals.check_ins, 3);
        assert_eq!(totals.adults, 5);
        assert_eq!(totals.children, 3);
    }

    #[test]
    fn empty_snapshot_yields_empty_aggregates() {
        assert!(group_by_visit_date(&[]).is_empty());
        assert!(summary_by_ticket_type(&[]).is_empty());
        assert_eq!(total_revenue(&[]), 0);
        assert_eq!(guest_totals(&[]), GuestTotals::default());
    }
}
