// Core filter-state and search exports
pub mod filters;
pub mod panel;
pub mod query;
pub mod session;

pub use filters::{apply_update, FilterUpdate, TagList, RADIUS_MAX, RADIUS_MIN};
pub use panel::{FilterEvent, FilterPanel};
pub use query::{build_search_query, SEARCH_BASE_SQL};
pub use session::{FetchTicket, SearchSession};
