//! Booking handlers
//!
//! A booking references an existing, available vehicle. With
//! `confirm_booking` the vehicle is marked rented in the same request.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::models::{Booking, CreateBookingRequest, VehicleStatus};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    payload.validate()?;
    let confirm = payload.confirm_booking;
    let booking = payload.into_booking()?;

    let vehicle = state
        .store
        .get_vehicle(&booking.kendaraan_id)
        .await
        .ok_or_else(|| not_found_error("Kendaraan tidak ditemukan"))?;
    if vehicle.status != VehicleStatus::Tersedia {
        return Err(bad_request_error("Kendaraan tidak tersedia"));
    }

    let booking = state.store.insert_booking(booking).await;
    if confirm {
        state
            .store
            .set_vehicle_status(&booking.kendaraan_id, VehicleStatus::Disewa)
            .await;
        tracing::info!(
            "📒 Booking {} confirmed, kendaraan {} marked Disewa",
            booking.id,
            booking.kendaraan_id
        );
    }

    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    Ok(Json(state.store.list_bookings().await))
}
