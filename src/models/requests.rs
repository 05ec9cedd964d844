use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the natural-language query endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QueryRequest {
    #[validate(length(min = 1))]
    pub query: String,
}
