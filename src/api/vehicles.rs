//! Kendaraan handlers
//!
//! CRUD operations for the rentable car records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::models::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<CreateVehicleRequest>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    payload.validate()?;
    let vehicle = payload.into_vehicle()?;
    let vehicle = state.store.insert_vehicle(vehicle).await;
    tracing::info!("🚗 Kendaraan created: '{}' ({})", vehicle.nama, vehicle.id);
    Ok((StatusCode::CREATED, Json(vehicle)))
}

pub async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    Ok(Json(state.store.list_vehicles().await))
}

pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vehicle>> {
    state
        .store
        .get_vehicle(&id)
        .await
        .map(Json)
        .ok_or_else(|| not_found_error("Kendaraan tidak ditemukan"))
}

pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateVehicleRequest>,
) -> AppResult<Json<Vehicle>> {
    payload.validate()?;
    state
        .store
        .update_vehicle(&id, payload)
        .await
        .map(Json)
        .ok_or_else(|| not_found_error("Kendaraan tidak ditemukan"))
}

pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    if state.store.delete_vehicle(&id).await {
        Ok(Json(json!({ "message": "Kendaraan berhasil dihapus" })))
    } else {
        Err(not_found_error("Kendaraan tidak ditemukan"))
    }
}
