pub mod health;
pub mod payroll;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /payroll/...        teacher payroll (see routes::payroll)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/payroll", payroll::router())
}
