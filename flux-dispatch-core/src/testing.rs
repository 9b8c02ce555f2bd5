//! Test utilities for flux-dispatch applications
//!
//! - [`key`], [`char_key`], [`ctrl_key`], [`keys`], [`type_text`]: build input events
//! - [`StoreHarness`]: a dispatcher plus one attached store that records every
//!   listener notification
//! - [`RenderHarness`]: render into a ratatui `TestBackend` and read the result back
//!   as text
//! - Assertion macros for verifying actions returned by components
//!
//! # Example
//!
//! ```ignore
//! use flux_dispatch::testing::StoreHarness;
//!
//! let mut harness = StoreHarness::new(Prefs::default(), reducer);
//! harness.dispatch(PrefsAction::UpdateUsername { value: "Alice".into() });
//! assert_eq!(harness.state().user_name, "Alice");
//! assert_eq!(harness.notification_count(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

use crate::dispatcher::{DispatchReport, Dispatcher};
use crate::input::EventKind;
use crate::keys::parse_key_string;
use crate::store::{Reducer, Store, StoreHandle};
use crate::Action;

/// Create a `KeyEvent` from a key string.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
///
/// # Examples
///
/// ```
/// use flux_dispatch_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("ctrl+u");
/// assert_eq!(k.code, KeyCode::Char('u'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create key events from whitespace-separated key strings, e.g. `"tab right space"`.
pub fn keys(s: &str) -> Vec<EventKind> {
    s.split_whitespace().map(|k| EventKind::Key(key(k))).collect()
}

/// Create one key event per character of `text`, as if typed.
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

/// A dispatcher with one attached store, recording listener notifications.
///
/// Every notification stores a clone of the state the listener received,
/// so tests can check both how often listeners ran and what they saw.
pub struct StoreHarness<S: Clone + 'static, A: Action> {
    dispatcher: Dispatcher<A>,
    store: StoreHandle<S, A>,
    notifications: Rc<RefCell<Vec<S>>>,
}

impl<S: Clone + 'static, A: Action> StoreHarness<S, A> {
    /// Create a harness around a fresh store
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        let dispatcher = Dispatcher::new();
        let store = Store::new(state, reducer).attach(&dispatcher);
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        store.add_listener(move |state: &S| sink.borrow_mut().push(state.clone()));
        Self {
            dispatcher,
            store,
            notifications,
        }
    }

    /// Dispatch an action through the dispatcher.
    ///
    /// # Panics
    ///
    /// Panics if the dispatch is rejected.
    pub fn dispatch(&mut self, action: A) -> DispatchReport {
        self.dispatcher
            .dispatch(&action)
            .unwrap_or_else(|e| panic!("dispatch of {:?} failed: {}", action, e))
    }

    /// Dispatch several actions in order
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = A>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Borrow the current state
    pub fn state(&self) -> Ref<'_, S> {
        self.store.state()
    }

    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    pub fn store(&self) -> &StoreHandle<S, A> {
        &self.store
    }

    /// Number of listener notifications so far
    pub fn notification_count(&self) -> usize {
        self.notifications.borrow().len()
    }

    /// Drain the recorded notifications
    pub fn take_notifications(&mut self) -> Vec<S> {
        std::mem::take(&mut *self.notifications.borrow_mut())
    }
}

/// Render harness backed by ratatui's `TestBackend`.
///
/// # Example
///
/// ```ignore
/// let mut render = RenderHarness::new(40, 10);
/// let output = render.render_to_string_plain(|frame| {
///     component.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("Hello"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {}", e));
        Self { terminal }
    }

    /// Render a frame and return a copy of the resulting buffer
    pub fn render<F>(&mut self, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        let completed = self
            .terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("failed to draw test frame: {}", e));
        completed.buffer.clone()
    }

    /// Render a frame and return its text, one line per row, styles dropped
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(draw);
        buffer_to_string_plain(&buffer)
    }
}

/// Convert a buffer to plain text, one line per row, trailing spaces trimmed
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Convert part of a buffer to plain text
pub fn buffer_rect_to_string_plain(buffer: &Buffer, area: Rect) -> String {
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Assert that an action matching a pattern was emitted.
///
/// # Example
///
/// ```ignore
/// let actions: Vec<_> = input.handle_event(&event, props).into_iter().collect();
/// assert_emitted!(actions, Action::UpdateUsername { .. });
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
