//! API endpoints
//!
//! Every route lives under the `/api` prefix. Unknown routes fall through
//! to [`route_not_found`].

pub mod admin;
pub mod bookings;
pub mod gallery;
pub mod reports;
pub mod statistics;
pub mod vehicles;

use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::state::AppState;

/// Router principal de la API.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route(
            "/kendaraan",
            post(vehicles::create_vehicle).get(vehicles::list_vehicles),
        )
        .route(
            "/kendaraan/:id",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        .route(
            "/booking",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route(
            "/gallery",
            post(gallery::create_gallery_item).get(gallery::list_gallery),
        )
        .route("/laporan-keuangan", get(reports::financial_report))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))
        .route("/statistics", get(statistics::get_statistics))
}

/// GET /api/ returns the fixed greeting used as the health check.
async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Rino Rental Sorong API" }))
}

/// Fallback for any unmatched route, mirroring the contract's
/// `Route <path> not found` body.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path();
    let route = path.strip_prefix("/api").unwrap_or(path);
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Route {route} not found") })),
    )
        .into_response()
}
