//! Shared view-state container composing the UI and notification reducers.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::notification::{Notification, NotificationAction, NotificationKind, NotificationState};
use crate::ui::{UiAction, UiState};

/// Combined reducer states held by a [`ViewStore`].
#[derive(Debug, Default)]
struct ViewState {
    ui: UiState,
    notifications: NotificationState,
}

/// Shared container for ephemeral view state.
///
/// `Clone` is cheap -- all internal state is `Arc`-wrapped, so controllers
/// and the host UI can each hold a handle. Mutations only ever go through
/// the two pure reducers ([`UiState::apply`], [`NotificationState::apply`]).
/// The interior mutex guards the read-modify-write against concurrent
/// snapshot reads; dispatch ordering is the hosting event loop's concern.
#[derive(Debug, Clone, Default)]
pub struct ViewStore {
    inner: Arc<Mutex<ViewState>>,
}

impl ViewStore {
    /// Create a store with the default initial state
    /// (sidebar closed, light theme, not loading, no notifications).
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a UI action through the reducer.
    pub fn dispatch_ui(&self, action: UiAction) {
        let mut state = self.inner.lock().unwrap();
        state.ui = state.ui.apply(&action);
    }

    /// Run a notification action through the reducer.
    pub fn dispatch_notification(&self, action: NotificationAction) {
        let mut state = self.inner.lock().unwrap();
        state.notifications = std::mem::take(&mut state.notifications).apply(&action);
    }

    /// Append a notification with a fresh id and timestamp.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.dispatch_notification(NotificationAction::add(kind, message));
    }

    /// Set the global loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.dispatch_ui(UiAction::SetLoading(loading));
    }

    /// Apply a JSON-encoded action to whichever reducer recognises it.
    ///
    /// Returns `false` -- leaving the state untouched -- when the value
    /// decodes as neither action type. Unknown actions are identity
    /// transitions, the same forward-compatibility stance an event fold
    /// takes toward unknown event variants.
    pub fn dispatch_json(&self, value: &Value) -> bool {
        if let Ok(action) = serde_json::from_value::<UiAction>(value.clone()) {
            self.dispatch_ui(action);
            return true;
        }
        if let Ok(action) = serde_json::from_value::<NotificationAction>(value.clone()) {
            self.dispatch_notification(action);
            return true;
        }
        false
    }

    /// Snapshot of the current UI state.
    pub fn ui(&self) -> UiState {
        self.inner.lock().unwrap().ui
    }

    /// Snapshot of the current notification list, in insertion order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().notifications.notifications.clone()
    }
}
