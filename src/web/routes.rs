//! Calculator page route configuration.

use crate::state::AppState;
use crate::web::handlers::{calculate_handler, calculator_page, method_not_allowed};
use axum::{Router, routing::get};

/// Calculator page routes.
///
/// # Endpoints
///
/// - `GET /` - Empty form
/// - `POST /` - Submit incomes and render the estimate
///
/// Any other method on `/`, including `HEAD`, is answered with
/// `405 Method Not Allowed`.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(calculator_page)
            .post(calculate_handler)
            .head(method_not_allowed),
    )
}
