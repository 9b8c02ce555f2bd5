//! flux-dispatch: Flux-style unidirectional data flow for Rust TUI apps
//!
//! Input events become actions, a single dispatcher hands every action to
//! the registered stores, stores update their own state and notify
//! listeners, and listeners re-render. Views never write state directly.
//!
//! # Example
//! ```ignore
//! use flux_dispatch::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum PrefsAction {
//!     UpdateUsername { value: String },
//!     UpdateFontSizePreference { value: String },
//! }
//!
//! assert_eq!(
//!     PrefsAction::UpdateUsername { value: "Alice".into() }.action_type(),
//!     "UPDATE_USERNAME"
//! );
//! ```

// Re-export everything from core
pub use flux_dispatch_core::*;

// Re-export derive macros
pub use flux_dispatch_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use flux_dispatch_core::{Action, ActionSummary, Component};

    // Dispatch and stores
    pub use flux_dispatch_core::{
        ComposedMiddleware, DispatchError, DispatchReport, DispatchToken, Dispatcher, ListenerId,
        LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store, StoreHandle,
    };

    // Input
    pub use flux_dispatch_core::{
        format_key_for_display, parse_key_string, process_raw_event, spawn_input_poller,
        EventKind, RawEvent,
    };

    // Derive macros
    pub use flux_dispatch_macros::Action;

    // Ratatui re-exports
    pub use flux_dispatch_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
