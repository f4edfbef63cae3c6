//! Per-connection subscription manager.
//!
//! Tracks which booking references a WebSocket client is subscribed to
//! and provides server-side event filtering. Dashboards subscribe with
//! the `"*"` wildcard; a confirmation page subscribes to its own
//! reference only.

use std::collections::HashSet;

use crate::domain::BookingRef;

/// Manages the booking subscriptions for a single WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Subscribed references. If `subscribe_all` is true, this set is ignored.
    references: HashSet<BookingRef>,
    /// Whether the client subscribes to all bookings (wildcard `"*"`).
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds references to the subscription set. `"*"` enables the wildcard.
    pub fn subscribe(&mut self, references: &[BookingRef], wildcard: bool) {
        if wildcard {
            self.subscribe_all = true;
        }
        for reference in references {
            self.references.insert(reference.clone());
        }
    }

    /// Removes references from the subscription set.
    pub fn unsubscribe(&mut self, references: &[BookingRef]) {
        for reference in references {
            self.references.remove(reference);
        }
    }

    /// Returns `true` if the given reference matches the subscription filter.
    #[must_use]
    pub fn matches(&self, reference: &BookingRef) -> bool {
        self.subscribe_all || self.references.contains(reference)
    }

    /// Returns the number of explicitly subscribed references.
    #[must_use]
    pub fn count(&self) -> usize {
        self.references.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_matches_nothing() {
        let mgr = SubscriptionManager::new();
        assert!(!mgr.matches(&BookingRef::from("T-1")));
    }

    #[test]
    fn subscribe_specific_reference() {
        let mut mgr = SubscriptionManager::new();
        let reference = BookingRef::from("T-1");
        mgr.subscribe(std::slice::from_ref(&reference), false);
        assert!(mgr.matches(&reference));
        assert!(!mgr.matches(&BookingRef::from("T-2")));
    }

    #[test]
    fn wildcard_matches_everything() {
        let mut mgr = SubscriptionManager::new();
        mgr.subscribe(&[], true);
        assert!(mgr.matches(&BookingRef::from("T-1")));
        assert!(mgr.matches(&BookingRef::from("T-2")));
    }

    #[test]
    fn unsubscribe_removes_reference() {
        let mut mgr = SubscriptionManager::new();
        let reference = BookingRef::from("T-1");
        mgr.subscribe(std::slice::from_ref(&reference), false);
        assert!(mgr.matches(&reference));
        mgr.unsubscribe(std::slice::from_ref(&reference));
        assert!(!mgr.matches(&reference));
    }

    #[test]
    fn count_tracks_explicit() {
        let mut mgr = SubscriptionManager::new();
        assert_eq!(mgr.count(), 0);
        mgr.subscribe(&[BookingRef::from("T-1"), BookingRef::from("T-2")], false);
        assert_eq!(mgr.count(), 2);
    }
}
