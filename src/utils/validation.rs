//! Request validation helpers
//!
//! Required-field detection mirrors the wire contract: a field is missing
//! when it is absent, an empty string, or a zero amount, and every missing
//! field is reported together in one `Field wajib tidak diisi` message.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::utils::errors::{AppError, AppResult};

/// Implemented by create-request DTOs that participate in the shared
/// missing-field check.
pub trait RequiredFields {
    /// Names of required wire fields that are missing, in wire order.
    fn missing_fields(&self) -> Vec<&'static str>;
}

/// A string field counts as missing when absent or blank.
pub fn absent_str(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// An amount counts as missing when absent or zero.
pub fn absent_int(value: &Option<i64>) -> bool {
    value.map_or(true, |v| v == 0)
}

/// Reject the request with the contract's 400 message when any required
/// field is missing.
pub fn ensure_required<T: RequiredFields>(request: &T) -> AppResult<()> {
    let missing = request.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Field wajib tidak diisi: {}",
            missing.join(", ")
        )))
    }
}

/// Parse the rental date. Accepts RFC 3339, a naive ISO-8601 datetime
/// (assumed UTC, which is what browser clients send), or a bare date.
pub fn parse_datetime(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(AppError::BadRequest(format!(
        "Format tanggal tidak valid: {raw}"
    )))
}
