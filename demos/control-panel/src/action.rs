//! Actions: what can happen in the control panel
//!
//! Each action is a plain value tagged by a type constant. On the wire
//! (action scripts) an action is a JSON object `{ "type": ..., "value": ... }`.

use flux_dispatch::ActionSummary;
use serde::{Deserialize, Serialize};

#[derive(flux_dispatch::Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlPanelAction {
    /// The user name input was edited; carries the full new value
    UpdateUsername { value: String },

    /// A font size option was picked
    UpdateFontSizePreference { value: String },

    /// Move keyboard focus to the next form field (view only)
    FocusNext,

    /// Exit the application (view only)
    Quit,

    /// Any action type this application does not know about
    #[serde(other)]
    Unrecognized,
}

impl ControlPanelAction {
    /// Build an `UPDATE_USERNAME` action
    pub fn user_name_update(name: impl Into<String>) -> Self {
        Self::UpdateUsername { value: name.into() }
    }

    /// Build an `UPDATE_FONT_SIZE_PREFERENCE` action
    pub fn font_size_preference_update(size: impl Into<String>) -> Self {
        Self::UpdateFontSizePreference { value: size.into() }
    }
}

impl ActionSummary for ControlPanelAction {}
