use chrono::{DateTime, Duration, Utc};
use deskplan_core::constants::NOTIFICATION_TTL_MS;

/// A short confirmation shown after a user-visible action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            created_at,
        }
    }

    /// Whether the notification is still showing at `now`.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at < Duration::milliseconds(NOTIFICATION_TTL_MS)
    }
}
