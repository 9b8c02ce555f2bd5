//! Tests for #[derive(Action)] macro

use flux_dispatch::{Action, Dispatcher, Store};

#[derive(Action, Clone, Debug, PartialEq)]
enum PrefsAction {
    UpdateUsername { value: String },
    UpdateFontSizePreference { value: String },
    #[action(rename = "app/quit")]
    Quit,
    Resize(u16, u16),
}

#[test]
fn test_names_are_variant_names() {
    assert_eq!(
        PrefsAction::UpdateUsername {
            value: "Alice".into()
        }
        .name(),
        "UpdateUsername"
    );
    assert_eq!(PrefsAction::Quit.name(), "Quit");
    assert_eq!(PrefsAction::Resize(1, 2).name(), "Resize");
}

#[test]
fn test_type_constants() {
    assert_eq!(
        PrefsAction::UpdateUsername {
            value: String::new()
        }
        .action_type(),
        "UPDATE_USERNAME"
    );
    assert_eq!(
        PrefsAction::UpdateFontSizePreference {
            value: String::new()
        }
        .action_type(),
        "UPDATE_FONT_SIZE_PREFERENCE"
    );
    assert_eq!(PrefsAction::Resize(80, 24).action_type(), "RESIZE");
}

#[test]
fn test_rename_overrides_type_constant() {
    assert_eq!(PrefsAction::Quit.action_type(), "app/quit");
    assert_eq!(PrefsAction::Quit.name(), "Quit");
}

#[derive(Action, Clone, Debug)]
enum Generic<T: Clone + std::fmt::Debug + Send + 'static> {
    Wrap(T),
}

#[test]
fn test_generic_enum() {
    assert_eq!(Generic::Wrap(3u8).action_type(), "WRAP");
}

#[derive(Clone, Debug, Default)]
struct Prefs {
    user_name: String,
}

fn reducer(state: &mut Prefs, action: &PrefsAction) -> bool {
    match action {
        PrefsAction::UpdateUsername { value } => {
            state.user_name = value.clone();
            true
        }
        _ => false,
    }
}

#[test]
fn test_derived_action_through_dispatcher() {
    let dispatcher = Dispatcher::new();
    let store = Store::new(Prefs::default(), reducer).attach(&dispatcher);

    dispatcher
        .dispatch(&PrefsAction::UpdateUsername {
            value: "Alice".into(),
        })
        .unwrap();
    let report = dispatcher.dispatch(&PrefsAction::Quit).unwrap();

    assert_eq!(store.state().user_name, "Alice");
    assert!(!report.any_changed());
}
