// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AdditionalServiceFilters, FilterOptions, LocationFilter, MedicationFilters, ServiceRecord,
};
pub use requests::ChatRequest;
pub use responses::{ErrorResponse, HealthResponse};
