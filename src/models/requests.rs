use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::FilterOptions;

/// Request to the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub query: String,
    #[serde(default)]
    pub filters: FilterOptions,
}
