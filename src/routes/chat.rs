use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ChatRequest, ErrorResponse, ServiceRecord};
use crate::routes::AppState;

/// Configure the chat route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}

/// Chat endpoint
///
/// POST /api/chat
///
/// Request body:
/// ```json
/// {
///   "query": "string",
///   "filters": { ... }
/// }
/// ```
///
/// Fetches the services matching the filters, splices them into the prompt
/// together with the user's query, and relays the completion service's
/// byte stream back unmodified as an event stream.
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let rows = match state.store.search(&req.filters).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Error fetching data for chat: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal Server Error".to_string(),
                message: "Failed to fetch services".to_string(),
                status_code: 500,
            });
        }
    };

    let prompt = match build_prompt(&rows, &req.query) {
        Ok(prompt) => prompt,
        Err(e) => {
            tracing::error!("Failed to serialize services into prompt: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal Server Error".to_string(),
                message: "Failed to build prompt".to_string(),
                status_code: 500,
            });
        }
    };

    match state.completion.stream_completion(&prompt).await {
        Ok(stream) => HttpResponse::Ok()
            .content_type("text/event-stream")
            .streaming(stream),
        Err(e) => {
            tracing::error!("Completion service unavailable: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Upstream unavailable".to_string(),
                message: "The completion service could not be reached".to_string(),
                status_code: 502,
            })
        }
    }
}

/// Splice the matched rows and the user's query into the prompt template
fn build_prompt(rows: &[ServiceRecord], query: &str) -> Result<String, serde_json::Error> {
    let rows_json = serde_json::to_string(rows)?;

    Ok(format!(
        "Based on the following database results, answer the user's query:\n{}\nQuery: {}",
        rows_json, query
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str) -> ServiceRecord {
        ServiceRecord {
            id: uuid::Uuid::new_v4(),
            name: name.to_string(),
            service_type: "Behavioral Health".to_string(),
            methadone_type: None,
            zip_code: "10001".to_string(),
            radius: 5,
            address: None,
            phone: None,
        }
    }

    #[test]
    fn test_prompt_contains_rows_and_query() {
        let rows = vec![service("Harbor House")];

        let prompt = build_prompt(&rows, "where can I find shelter?").unwrap();

        assert!(prompt.contains("Harbor House"));
        assert!(prompt.ends_with("Query: where can I find shelter?"));
    }

    #[test]
    fn test_prompt_with_no_rows() {
        let prompt = build_prompt(&[], "anything nearby?").unwrap();

        assert!(prompt.contains("[]"));
        assert!(prompt.contains("Query: anything nearby?"));
    }
}
