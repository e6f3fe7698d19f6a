//! Gallery handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::models::{CreateGalleryRequest, GalleryItem};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub async fn create_gallery_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateGalleryRequest>,
) -> AppResult<(StatusCode, Json<GalleryItem>)> {
    let item = payload.into_item()?;
    let item = state.store.insert_gallery_item(item).await;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn list_gallery(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryItem>>> {
    Ok(Json(state.store.list_gallery().await))
}
