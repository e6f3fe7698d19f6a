//! Statistics handler

use axum::{extract::State, Json};

use crate::models::Statistics;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<Statistics>> {
    Ok(Json(state.store.statistics().await))
}
