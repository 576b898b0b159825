//! Catch-all response for handlers that panic.
//!
//! Installed through `tower_http::catch_panic::CatchPanicLayer::custom`, so a bug in one
//! handler turns into a logged 500 for that request instead of a dropped connection.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body sent to the client when a handler panics.
pub const PANIC_RESPONSE_BODY: &str = "Something broke!";

/// Logs the panic payload and answers with a plain-text 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Request handler panicked: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, PANIC_RESPONSE_BODY).into_response()
}
