//! Horizontal radio button group

use crossterm::event::KeyCode;
use flux_dispatch_core::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Props for RadioGroup component
pub struct RadioGroupProps<'a, A> {
    /// Option values, shown in order
    pub options: &'a [String],
    /// Currently selected value (owned by a store; may be absent from `options`)
    pub selected: &'a str,
    /// Border title
    pub title: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Builds the action emitted when the selection changes
    pub on_change: fn(String) -> A,
}

/// A row of mutually exclusive options
///
/// Left/Right (or h/l) step through the options, Space advances like Right,
/// digits jump to an option.
/// An action is emitted only when the selected value actually changes.
#[derive(Debug, Default)]
pub struct RadioGroup;

impl RadioGroup {
    pub fn new() -> Self {
        Self
    }

    fn target(code: KeyCode, current: Option<usize>, count: usize) -> Option<usize> {
        match code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') if count > 0 => {
                Some(current.map_or(0, |i| (i + 1) % count))
            }
            KeyCode::Left | KeyCode::Char('h') if count > 0 => {
                Some(current.map_or(count - 1, |i| (i + count - 1) % count))
            }
            KeyCode::Char(c) => {
                let n = c.to_digit(10)? as usize;
                (1..=count).contains(&n).then(|| n - 1)
            }
            _ => None,
        }
    }
}

impl<A> Component<A> for RadioGroup {
    type Props<'a> = RadioGroupProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        let Some(key) = event.as_key() else {
            return None;
        };
        if !key.modifiers.is_empty() {
            return None;
        }

        let current = props.options.iter().position(|o| o == props.selected);
        let Some(target) = Self::target(key.code, current, props.options.len()) else {
            return None;
        };
        if Some(target) == current {
            return None;
        }
        Some((props.on_change)(props.options[target].clone()))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::with_capacity(props.options.len() * 2);
        for option in props.options {
            let checked = option == props.selected;
            let marker = if checked { "(•) " } else { "( ) " };
            let style = if checked {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("{}{}", marker, option), style));
            spans.push(Span::raw("  "));
        }

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", props.title));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
