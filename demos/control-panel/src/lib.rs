//! Control panel: a user preferences form built on flux-dispatch
//!
//! Editing the name or picking a font size dispatches an action; the
//! preferences store reduces it and notifies its listener, which maps the
//! new preferences to a [`view::ViewModel`] and schedules a repaint.

pub mod action;
pub mod app;
pub mod components;
pub mod logging;
pub mod script;
pub mod state;
pub mod store;
pub mod view;

pub use action::ControlPanelAction;
pub use app::App;
pub use state::UserPreferences;
pub use store::{user_prefs_reducer, UserPrefsStore};
pub use view::{render, ViewModel};
