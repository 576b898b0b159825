//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorsDto, MessageDto},
    server::error::config::ConfigError,
};

/// Message returned when a path id fails validation.
pub const INVALID_ID_MESSAGE: &str = "id should be a number";

/// Top-level application error type.
///
/// Client input errors (`InvalidId`, `Validation`) map to 400 Bad Request and are
/// never logged as server failures. Every other variant results in a 500 Internal
/// Server Error with the details logged server-side and a generic message returned
/// to the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Path id is missing, not an integer, or zero.
    ///
    /// Results in 400 Bad Request with `{ "message": "id should be a number" }`.
    #[error("{}", INVALID_ID_MESSAGE)]
    InvalidId,

    /// Request body failed validation.
    ///
    /// Results in 400 Bad Request with `{ "errors": [...] }` listing every violation
    /// in the order it was found.
    ///
    /// # Fields
    /// - Messages describing each violation
    #[error("Invalid request body: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidId` and `Validation`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidId => (
                StatusCode::BAD_REQUEST,
                Json(MessageDto {
                    message: INVALID_ID_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsDto { errors })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
