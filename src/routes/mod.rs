// Route exports
pub mod chat;
pub mod search;

use actix_web::web;
use std::sync::Arc;

use crate::services::{CompletionBackend, ServiceStore};

/// Application state shared across all handlers
///
/// Collaborators are trait objects so tests can substitute mocks for the
/// database and the completion service.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ServiceStore>,
    pub completion: Arc<dyn CompletionBackend>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(search::health_check))
        .service(
            web::scope("/api")
                .configure(search::configure)
                .configure(chat::configure),
        );
}
