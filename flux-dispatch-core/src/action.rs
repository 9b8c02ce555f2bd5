//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Trait for actions that can be dispatched through a [`Dispatcher`](crate::Dispatcher)
///
/// An action is a plain data value describing an intended state change,
/// tagged by a type constant. Actions should be:
/// - Clone: Actions may be logged, replayed, or inspected by several stores
/// - Debug: For debugging and logging
/// - Send + 'static: So they can travel over channels from input tasks
///
/// Use `#[derive(Action)]` from `flux-dispatch-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name (the Rust variant name) for logging and filtering
    fn name(&self) -> &'static str;

    /// Get the action's type constant, e.g. `"UPDATE_USERNAME"`
    ///
    /// Stores match on the type constant, not on the payload.
    fn action_type(&self) -> &'static str;
}

/// One-line summary of an action for log output
///
/// The default falls back to `Debug`. Override it for actions carrying
/// large payloads.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
