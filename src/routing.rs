//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::get_budget_page,
    endpoints,
    error_boundary::error_boundary_layer,
    internal_server_error::get_internal_server_error_page,
    reload::reload_snapshot_endpoint,
    reports::get_reports_page,
    transaction_page::get_transaction_page,
};

/// Return a router with all the app's routes.
///
/// Static files are served from `static_dir`. Any path that does not match a
/// route is redirected to the budget page, and a page that panics while
/// rendering is replaced with the internal server error page.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    finish_router(page_routes(), state, static_dir)
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BUDGET_VIEW, get(get_budget_page))
        .route(endpoints::REPORTS_VIEW, get(get_reports_page))
        .route(endpoints::TRANSACTION_VIEW, get(get_transaction_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::RELOAD_SNAPSHOT_API,
            post(reload_snapshot_endpoint),
        )
}

fn finish_router(
    routes: Router<AppState>,
    state: AppState,
    static_dir: impl AsRef<Path>,
) -> Router {
    routes
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir.as_ref()))
        .fallback(redirect_to_budget)
        .with_state(state)
        .layer(error_boundary_layer())
}

/// The root path '/' redirects to the budget page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BUDGET_VIEW)
}

/// Unknown paths land on the budget page instead of an error page.
async fn redirect_to_budget() -> Redirect {
    tracing::debug!("No route matched, redirecting to {}", endpoints::BUDGET_VIEW);
    Redirect::to(endpoints::BUDGET_VIEW)
}
