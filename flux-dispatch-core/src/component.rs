//! Component trait for view elements

use ratatui::{layout::Rect, Frame};

use crate::input::EventKind;

/// A view element that renders from props and turns input into actions
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data needed for rendering
/// 2. `handle_event` returns actions, never mutates application state
/// 3. `render` is a function of props (plus internal UI state like a cursor)
///
/// Internal UI state (cursor position, highlighted option) can live in
/// `&mut self`, but anything a store owns changes only through actions
/// handed to the dispatcher.
///
/// # Example
///
/// ```ignore
/// use flux_dispatch::{Component, EventKind, Frame, Rect};
///
/// struct Greeting;
///
/// struct GreetingProps<'a> {
///     user_name: &'a str,
/// }
///
/// impl Component<PrefsAction> for Greeting {
///     type Props<'a> = GreetingProps<'a>;
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("Hello, {}", props.user_name);
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `[a, b]` or `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
