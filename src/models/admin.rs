//! Admin session model
//!
//! Ephemeral authenticated context from login to logout. Sessions live in
//! the store and expire 24 hours after login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SESSION_LIFETIME_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize)]
pub struct AdminSession {
    pub id: String,
    pub username: String,
    pub login_time: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(username: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            login_time: now,
            expires_at: now + Duration::hours(SESSION_LIFETIME_HOURS),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Logout is best-effort: a missing or unknown session id still succeeds.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_valid_for_a_day() {
        let session = AdminSession::new("admin".to_string());
        assert!(!session.is_expired());
        assert_eq!(
            (session.expires_at - session.login_time).num_hours(),
            SESSION_LIFETIME_HOURS
        );
    }
}
