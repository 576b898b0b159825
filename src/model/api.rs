use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single error message returned for server-side failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Every validation failure found in a request body, in the order they were checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorsDto {
    pub errors: Vec<String>,
}

/// Plain informational message, also used for path parameter rejections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
