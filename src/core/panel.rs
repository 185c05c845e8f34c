use tokio::sync::watch;

use crate::core::filters::{apply_update, FilterUpdate};
use crate::models::FilterOptions;

/// Notification sent to subscribers on every panel mutation
///
/// A change carries the full snapshot; reset is its own event so the
/// consumer can clear results instead of re-fetching.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Changed(FilterOptions),
    Reset,
}

/// Holds the user's current filter selections and notifies subscribers
/// on every change
pub struct FilterPanel {
    filters: FilterOptions,
    tx: watch::Sender<FilterEvent>,
}

impl FilterPanel {
    /// Create a panel with all-empty defaults and the initial subscription
    pub fn new() -> (Self, watch::Receiver<FilterEvent>) {
        let filters = FilterOptions::default();
        let (tx, rx) = watch::channel(FilterEvent::Changed(filters.clone()));
        (Self { filters, tx }, rx)
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Apply one update and broadcast the updated snapshot
    pub fn update(&mut self, update: FilterUpdate) {
        apply_update(&mut self.filters, update);
        self.tx.send_replace(FilterEvent::Changed(self.filters.clone()));
    }

    /// Restore the all-empty defaults and broadcast the reset
    pub fn reset(&mut self) {
        self.filters = FilterOptions::default();
        self.tx.send_replace(FilterEvent::Reset);
    }

    /// Subscribe to change and reset notifications
    pub fn subscribe(&self) -> watch::Receiver<FilterEvent> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::TagList;

    #[test]
    fn test_update_broadcasts_full_snapshot() {
        let (mut panel, rx) = FilterPanel::new();

        panel.update(FilterUpdate::Toggle {
            list: TagList::ServiceTypes,
            value: "Behavioral Health".to_string(),
            checked: true,
        });
        panel.update(FilterUpdate::ZipCode("10001".to_string()));

        match &*rx.borrow() {
            FilterEvent::Changed(snapshot) => {
                assert_eq!(snapshot.service_types, vec!["Behavioral Health"]);
                assert_eq!(snapshot.location.zip_code, "10001");
            }
            other => panic!("expected Changed, got {:?}", other),
        }
    }

    #[test]
    fn test_reset_is_a_distinct_event() {
        let (mut panel, rx) = FilterPanel::new();

        panel.update(FilterUpdate::Radius(10));
        panel.reset();

        assert_eq!(*rx.borrow(), FilterEvent::Reset);
        assert_eq!(panel.filters(), &FilterOptions::default());
    }

    #[test]
    fn test_late_subscriber_sees_latest_snapshot() {
        let (mut panel, _rx) = FilterPanel::new();
        panel.update(FilterUpdate::Radius(7));

        let late = panel.subscribe();
        match &*late.borrow() {
            FilterEvent::Changed(snapshot) => assert_eq!(snapshot.radius, Some(7)),
            other => panic!("expected Changed, got {:?}", other),
        }
    }
}
