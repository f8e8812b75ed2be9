//! Ephemeral UI state (sidebar, theme, loading flag) and its reducer.

use serde::{Deserialize, Serialize};

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The UI state triple. Each field is independently mutable; any single
/// update preserves the unrelated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Whether the navigation sidebar is open.
    pub sidebar_open: bool,
    /// Current color theme.
    pub theme: Theme,
    /// Global loading flag, driven by in-flight list fetches.
    pub loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: false,
            theme: Theme::Light,
            loading: false,
        }
    }
}

/// Actions accepted by [`UiState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum UiAction {
    /// Flip `sidebar_open`.
    ToggleSidebar,
    /// Replace `theme` with the given value.
    SetTheme(Theme),
    /// Replace `loading` with the given value.
    SetLoading(bool),
}

impl UiState {
    /// Pure reducer: fold one action into the next state.
    #[must_use]
    pub fn apply(mut self, action: &UiAction) -> Self {
        match action {
            UiAction::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            UiAction::SetTheme(theme) => self.theme = *theme,
            UiAction::SetLoading(loading) => self.loading = *loading,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_closed_light_idle() {
        let state = UiState::default();
        assert!(!state.sidebar_open);
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.loading);
    }

    #[test]
    fn toggle_sidebar_is_an_involution() {
        let state = UiState::default();
        let once = state.apply(&UiAction::ToggleSidebar);
        assert!(once.sidebar_open);
        let twice = once.apply(&UiAction::ToggleSidebar);
        assert_eq!(twice, state);
    }

    #[test]
    fn set_theme_leaves_other_fields_alone() {
        let state = UiState::default()
            .apply(&UiAction::ToggleSidebar)
            .apply(&UiAction::SetTheme(Theme::Dark));
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.sidebar_open);
        assert!(!state.loading);
    }

    #[test]
    fn set_loading_replaces_only_the_flag() {
        let state = UiState::default().apply(&UiAction::SetLoading(true));
        assert!(state.loading);
        assert!(!state.sidebar_open);
        assert_eq!(state.theme, Theme::Light);

        let state = state.apply(&UiAction::SetLoading(false));
        assert!(!state.loading);
    }

    #[test]
    fn actions_use_tagged_camel_case_encoding() {
        let value = serde_json::to_value(UiAction::SetTheme(Theme::Dark)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "type": "setTheme", "payload": "dark" })
        );
        let value = serde_json::to_value(UiAction::ToggleSidebar).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "toggleSidebar" }));
    }
}
