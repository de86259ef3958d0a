//! The endpoint for swapping in a fresh budget snapshot.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error};

/// Re-read the snapshot file so that the pages show its latest contents.
///
/// Responds with 204 No Content on success. If the file cannot be loaded the
/// current snapshot is kept and the error page is returned.
pub async fn reload_snapshot_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    state.reload()?;

    tracing::info!("Budget snapshot reloaded");

    Ok(StatusCode::NO_CONTENT.into_response())
}
