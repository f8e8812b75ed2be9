//! Transient notification list and its reducer.
//!
//! Notifications are append-only toast entries; insertion order is the only
//! ordering guarantee. State transitions go through [`NotificationState::apply`],
//! a pure fold over [`NotificationAction`] values.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

/// A single toast-style notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique per insertion. Generated by [`NotificationAction::add`].
    pub id: String,
    /// Severity, controls the toast styling.
    pub kind: NotificationKind,
    /// Human-readable message. Not deduplicated: identical messages may
    /// coexist under distinct ids.
    pub message: String,
    /// Milliseconds since the Unix epoch, captured at creation time.
    pub timestamp: i64,
}

/// Actions accepted by [`NotificationState::apply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum NotificationAction {
    /// Append a fully-formed notification. Build via [`NotificationAction::add`].
    AddNotification(Notification),
    /// Remove the notification with the given id, if present.
    RemoveNotification(String),
    /// Drop every notification.
    ClearNotifications,
}

impl NotificationAction {
    /// Build an `AddNotification` action carrying a fresh unique id and the
    /// current wall-clock timestamp.
    ///
    /// Identity is a v4 UUID, not the timestamp, so two actions built in
    /// immediate succession never share an id even within the same
    /// millisecond. Generation happens here, at action construction time,
    /// keeping the reducer itself pure.
    pub fn add(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self::AddNotification(Notification {
            id: Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        })
    }
}

/// The notification list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationState {
    /// Notifications in insertion order.
    pub notifications: Vec<Notification>,
}

impl NotificationState {
    /// Pure reducer: fold one action into the next state.
    ///
    /// `RemoveNotification` with an unknown id returns the state unchanged.
    #[must_use]
    pub fn apply(mut self, action: &NotificationAction) -> Self {
        match action {
            NotificationAction::AddNotification(n) => self.notifications.push(n.clone()),
            NotificationAction::RemoveNotification(id) => {
                self.notifications.retain(|n| &n.id != id);
            }
            NotificationAction::ClearNotifications => self.notifications.clear(),
        }
        self
    }
}
