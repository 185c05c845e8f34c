use actix_web::{web, HttpResponse, Responder};

use crate::models::{ErrorResponse, FilterOptions, HealthResponse};
use crate::routes::AppState;

/// Configure the directory search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/data")
            .route(web::post().to(search_services))
            .route(web::route().to(method_not_allowed)),
    );
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Directory search endpoint
///
/// POST /api/data
///
/// Request body: a FilterOptions-shaped JSON object. Returns the matched
/// service rows as a JSON array.
async fn search_services(
    state: web::Data<AppState>,
    filters: web::Json<FilterOptions>,
) -> impl Responder {
    match state.store.search(&filters).await {
        Ok(rows) => {
            tracing::info!("Directory search returned {} services", rows.len());
            HttpResponse::Ok().json(rows)
        }
        Err(e) => {
            // Log the driver error; the caller only sees a generic message.
            tracing::error!("Error fetching data: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal Server Error".to_string(),
                message: "Failed to fetch services".to_string(),
                status_code: 500,
            })
        }
    }
}

/// Any method other than POST is rejected before any work begins
async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(ErrorResponse {
        error: "Method not allowed".to_string(),
        message: "This endpoint only accepts POST".to_string(),
        status_code: 405,
    })
}
