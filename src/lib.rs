//! Beacon Search - search backend for the Beacon services directory
//!
//! This library powers the directory of health and social services behind
//! the Beacon app: a typed filter-state component with an explicit change
//! notification contract, a parameter-bound search query builder, the HTTP
//! endpoints serving it, and the client used by the results view.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    apply_update, build_search_query, FilterEvent, FilterPanel, FilterUpdate, SearchSession,
    TagList,
};
pub use crate::models::{ChatRequest, ErrorResponse, FilterOptions, ServiceRecord};
