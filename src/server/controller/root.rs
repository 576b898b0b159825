use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = MessageDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Hello World!".to_string(),
        }),
    )
}
