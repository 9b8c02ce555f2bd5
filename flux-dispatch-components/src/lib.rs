//! Pre-built input components for flux-dispatch
//!
//! Components implement the `Component<A>` trait. They hold no application
//! state: the current value comes in through props, and every change goes
//! out as an action built by the `on_change` callback.
//!
//! # Components
//!
//! - [`TextInput`] - Single-line text input with cursor
//! - [`RadioGroup`] - Row of mutually exclusive options
//!
//! # Example
//!
//! ```ignore
//! use flux_dispatch_components::{TextInput, TextInputProps};
//!
//! let mut input = TextInput::default();
//! let actions = input.handle_event(&event, TextInputProps {
//!     value: &prefs.user_name,
//!     placeholder: "Your name",
//!     title: "Name",
//!     is_focused: true,
//!     on_change: |value| Action::UpdateUsername { value },
//! });
//! ```

mod radio_group;
mod text_input;

pub use radio_group::{RadioGroup, RadioGroupProps};
pub use text_input::{TextInput, TextInputProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{RadioGroup, RadioGroupProps, TextInput, TextInputProps};
}
