//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::{internal_server_error::InternalServerError, not_found::get_404_not_found_response};

/// The errors that may occur in the application.
///
/// The transaction selectors never fail. These errors come from loading
/// snapshots and from the shared state around the selectors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The snapshot file could not be read.
    ///
    /// Callers should pass in the file path and the original error as a string.
    #[error("could not read the budget snapshot: {0}")]
    SnapshotRead(String),

    /// The snapshot file is not valid snapshot JSON.
    #[error("could not parse the budget snapshot: {0}")]
    SnapshotParse(String),

    /// The lock around the shared budget state was poisoned.
    #[error("could not acquire the budget state lock")]
    StateLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Logged where the lock was acquired.
            Error::StateLockError => InternalServerError::default().into_response(),
            Error::SnapshotRead(_) | Error::SnapshotParse(_) => {
                tracing::error!("Could not load the budget snapshot: {self}");
                InternalServerError {
                    description: "Could Not Load Budget",
                    fix: "The budget snapshot could not be loaded. Check the snapshot file and the server logs.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
