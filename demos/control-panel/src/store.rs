//! The user preferences store

use std::cell::Ref;

use flux_dispatch::{DispatchToken, Dispatcher, ListenerId, LoggingMiddleware, Store, StoreHandle};

use crate::action::ControlPanelAction;
use crate::state::UserPreferences;

/// Reducer for [`UserPreferences`]
///
/// Each field moves on its own action type; every other action is ignored.
/// A matched action always counts as a change, even when the new value
/// equals the old one, so listeners run once per edit.
pub fn user_prefs_reducer(state: &mut UserPreferences, action: &ControlPanelAction) -> bool {
    match action {
        ControlPanelAction::UpdateUsername { value } => {
            state.user_name.clone_from(value);
            true
        }
        ControlPanelAction::UpdateFontSizePreference { value } => {
            state.font_size.clone_from(value);
            true
        }
        ControlPanelAction::FocusNext
        | ControlPanelAction::Quit
        | ControlPanelAction::Unrecognized => false,
    }
}

/// Store holding the user's preferences, attached to the app dispatcher
#[derive(Clone)]
pub struct UserPrefsStore {
    handle: StoreHandle<UserPreferences, ControlPanelAction, LoggingMiddleware>,
}

impl UserPrefsStore {
    /// Create the store with the initial preferences and register it
    pub fn new(dispatcher: &Dispatcher<ControlPanelAction>) -> Self {
        let store = Store::with_middleware(
            UserPreferences::default(),
            user_prefs_reducer,
            LoggingMiddleware::verbose("user_prefs"),
        );
        Self {
            handle: store.attach(dispatcher),
        }
    }

    /// Current preferences (a copy)
    pub fn user_preferences(&self) -> UserPreferences {
        self.handle.snapshot()
    }

    /// Borrow the current preferences
    pub fn state(&self) -> Ref<'_, UserPreferences> {
        self.handle.state()
    }

    /// Call `listener` with the new preferences after every change
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: FnMut(&UserPreferences) + 'static,
    {
        self.handle.add_listener(listener)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.handle.remove_listener(id)
    }

    pub fn dispatch_token(&self) -> DispatchToken {
        self.handle.dispatch_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_username() {
        let mut state = UserPreferences::default();
        assert!(user_prefs_reducer(
            &mut state,
            &ControlPanelAction::user_name_update("Alice")
        ));
        assert_eq!(state.user_name, "Alice");
        assert_eq!(state.font_size, "small");
    }

    #[test]
    fn test_update_font_size() {
        let mut state = UserPreferences::default();
        assert!(user_prefs_reducer(
            &mut state,
            &ControlPanelAction::font_size_preference_update("large")
        ));
        assert_eq!(state.font_size, "large");
        assert_eq!(state.user_name, "Jim");
    }

    #[test]
    fn test_same_value_still_counts_as_change() {
        let mut state = UserPreferences::default();
        assert!(user_prefs_reducer(
            &mut state,
            &ControlPanelAction::user_name_update("Jim")
        ));
    }

    #[test]
    fn test_view_actions_ignored() {
        let mut state = UserPreferences::default();
        for action in [
            ControlPanelAction::FocusNext,
            ControlPanelAction::Quit,
            ControlPanelAction::Unrecognized,
        ] {
            assert!(!user_prefs_reducer(&mut state, &action));
        }
        assert_eq!(state, UserPreferences::default());
    }

    #[test]
    fn test_store_registers_with_dispatcher() {
        let dispatcher = Dispatcher::new();
        let store = UserPrefsStore::new(&dispatcher);
        assert_eq!(dispatcher.handler_count(), 1);

        dispatcher
            .dispatch(&ControlPanelAction::user_name_update("Alice"))
            .unwrap();
        assert_eq!(store.user_preferences().user_name, "Alice");
        assert_eq!(store.state().font_size, "small");
    }
}
