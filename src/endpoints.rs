//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g. '/transactions/{transaction_id}', use [format_endpoint].

use std::fmt::Display;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// The root route which redirects to the budget page.
pub const ROOT: &str = "/";
/// The landing page with balances and every transaction.
pub const BUDGET_VIEW: &str = "/budget";
/// The page with inflow and outflow broken down by category.
pub const REPORTS_VIEW: &str = "/reports";
/// The page for displaying a single transaction.
pub const TRANSACTION_VIEW: &str = "/transactions/{transaction_id}";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for re-reading the budget snapshot from disk.
pub const RELOAD_SNAPSHOT_API: &str = "/api/snapshot";

/// The characters escaped when an ID is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Replace the parameter in `endpoint_path` with `id`.
///
/// `id` is percent-encoded as a path segment, so an ID such as "rent/2024"
/// stays within the parameter's segment.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        utf8_percent_encode(&id.to_string(), PATH_SEGMENT),
        &endpoint_path[param_end..]
    )
}
