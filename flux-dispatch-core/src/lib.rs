//! Core traits and types for flux-dispatch
//!
//! This crate provides the building blocks of a Flux-style, unidirectional
//! data flow for terminal applications.
//!
//! # Core Concepts
//!
//! - **Action**: A plain value describing an intended state change, tagged by a type constant
//! - **Dispatcher**: The fan-out point that forwards every action to all registered stores
//! - **Store**: Owner of a slice of state; the only writer of that state
//! - **Listener**: A callback invoked after a store changed, used to drive re-rendering
//! - **Component**: A view element that renders from props and turns input into actions
//!
//! # Basic Example
//!
//! ```ignore
//! use flux_dispatch_core::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum PrefsAction {
//!     UpdateUsername { value: String },
//! }
//!
//! #[derive(Clone, Default)]
//! struct Prefs {
//!     user_name: String,
//! }
//!
//! fn reducer(state: &mut Prefs, action: &PrefsAction) -> bool {
//!     match action {
//!         PrefsAction::UpdateUsername { value } => {
//!             state.user_name = value.clone();
//!             true
//!         }
//!     }
//! }
//!
//! let dispatcher = Dispatcher::new();
//! let store = Store::new(Prefs::default(), reducer).attach(&dispatcher);
//! store.add_listener(|prefs| render(prefs));
//! dispatcher.dispatch(&PrefsAction::UpdateUsername { value: "Alice".into() })?;
//! ```
//!
//! Control flow is always: input event -> action -> `Dispatcher::dispatch` ->
//! store reducer -> listeners -> render. Nothing else writes store state.

pub mod action;
pub mod component;
pub mod dispatcher;
pub mod error;
pub mod input;
pub mod keys;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionSummary};
pub use component::Component;

// Dispatch exports
pub use dispatcher::{DispatchReport, DispatchToken, Dispatcher};
pub use error::DispatchError;

// Store exports
pub use store::{
    ComposedMiddleware, ListenerId, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreHandle,
};

// Input exports
pub use input::{process_raw_event, spawn_input_poller, EventKind, RawEvent};
pub use keys::{format_key_for_display, parse_key_string};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_rect_to_string_plain, buffer_to_string_plain, char_key, ctrl_key, key, keys,
    type_text, RenderHarness, StoreHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionSummary};
    pub use crate::component::Component;
    pub use crate::dispatcher::{DispatchReport, DispatchToken, Dispatcher};
    pub use crate::error::DispatchError;
    pub use crate::input::{process_raw_event, spawn_input_poller, EventKind, RawEvent};
    pub use crate::keys::{format_key_for_display, parse_key_string};
    pub use crate::store::{
        ComposedMiddleware, ListenerId, LoggingMiddleware, Middleware, NoopMiddleware, Reducer,
        Store, StoreHandle,
    };

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
