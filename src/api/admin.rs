//! Admin auth handlers
//!
//! Credentials come from configuration; sessions are plain store records.

use axum::{extract::State, Json};
use serde_json::json;

use crate::models::{AdminSession, LoginRequest, LogoutRequest};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AdminSession>> {
    let username_ok = payload.username.as_deref() == Some(state.config.admin_username.as_str());
    let password_ok = payload.password.as_deref() == Some(state.config.admin_password.as_str());
    if !(username_ok && password_ok) {
        tracing::warn!("🔐 Rejected admin login attempt");
        return Err(AppError::Unauthorized(
            "Username atau password salah".to_string(),
        ));
    }

    let session = AdminSession::new(state.config.admin_username.clone());
    let session = state.store.insert_session(session).await;
    Ok(Json(session))
}

pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(session_id) = payload.session_id.as_deref() {
        state.store.remove_session(session_id).await;
    }
    Ok(Json(json!({ "message": "Logout berhasil" })))
}
