use std::sync::Arc;

use crate::core::panel::FilterEvent;
use crate::models::{FilterOptions, ServiceRecord};
use crate::services::{ServiceStore, StoreError};

/// Ticket identifying one in-flight fetch
///
/// Tickets are monotonic; a completion only lands if no later ticket has
/// already been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// View-side state for the results page
///
/// Holds the current filters and the latest result list, and drives the
/// fetch cycle against an injected [`ServiceStore`]. Fetches are
/// sequence-numbered so a stale response can never overwrite a newer one,
/// regardless of arrival order.
pub struct SearchSession {
    store: Arc<dyn ServiceStore>,
    filters: FilterOptions,
    results: Vec<ServiceRecord>,
    issued: u64,
    applied: u64,
}

impl SearchSession {
    pub fn new(store: Arc<dyn ServiceStore>) -> Self {
        Self {
            store,
            filters: FilterOptions::default(),
            results: Vec::new(),
            issued: 0,
            applied: 0,
        }
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn results(&self) -> &[ServiceRecord] {
        &self.results
    }

    /// Stamp a new fetch; later tickets always win over earlier ones
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Apply a completed fetch unless a newer one already landed
    ///
    /// Returns whether the rows were applied.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, rows: Vec<ServiceRecord>) -> bool {
        if ticket.0 <= self.applied {
            tracing::debug!("Discarding stale fetch result (ticket {})", ticket.0);
            return false;
        }

        self.applied = ticket.0;
        self.results = rows;
        true
    }

    /// Fetch results for the current filters and apply them in order
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        let ticket = self.begin_fetch();
        let rows = self.store.search(&self.filters).await?;
        self.complete_fetch(ticket, rows);
        Ok(())
    }

    /// React to one panel notification
    ///
    /// A change persists the snapshot and refreshes the results; a reset
    /// clears filters and results and invalidates any in-flight fetch.
    pub async fn handle_event(&mut self, event: FilterEvent) -> Result<(), StoreError> {
        match event {
            FilterEvent::Changed(snapshot) => {
                self.filters = snapshot;
                self.refresh().await
            }
            FilterEvent::Reset => {
                self.filters = FilterOptions::default();
                self.results.clear();
                self.issued += 1;
                self.applied = self.issued;
                Ok(())
            }
        }
    }
}
