use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DogDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub breed: String,
    pub age: i32,
}

/// Request body for `POST /dogs`.
///
/// Documents the accepted shape only; bodies are validated field by field so that
/// every violation can be reported at once.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDogDto {
    pub name: String,
    pub description: String,
    pub breed: String,
    pub age: i32,
}

/// Request body for `PATCH /dogs/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDogDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}
