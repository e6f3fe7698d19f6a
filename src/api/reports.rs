//! Laporan keuangan handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::{FinancialReport, ReportPeriod};
use crate::state::AppState;
use crate::utils::errors::AppResult;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub periode: Option<String>,
}

pub async fn financial_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<FinancialReport>> {
    let period = ReportPeriod::parse(query.periode.as_deref());
    Ok(Json(state.store.financial_report(period).await))
}
