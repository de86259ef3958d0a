//! Catches panics raised while rendering a page and shows a fallback page
//! instead of dropping the connection.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::internal_server_error::InternalServerError;

/// The function that turns a panic payload into the fallback page.
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// A layer that wraps every route in the error boundary.
///
/// The failed request is not retried. The server keeps serving other requests.
pub fn error_boundary_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(render_fallback as PanicHandler)
}

fn render_fallback(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    tracing::error!("A page failed to render: {message}");

    InternalServerError {
        description: "Something went wrong",
        fix: "This page could not be displayed. Try again later or check the server logs.",
    }
    .into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
