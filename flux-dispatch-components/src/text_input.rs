//! Single-line text input component

use crossterm::event::{KeyCode, KeyModifiers};
use flux_dispatch_core::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Props for TextInput component
pub struct TextInputProps<'a, A> {
    /// Current input value (owned by a store)
    pub value: &'a str,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// Border title
    pub title: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Builds the action emitted with the full new value after each edit
    pub on_change: fn(String) -> A,
}

/// A single-line text input with cursor
///
/// The value itself lives in application state; the input only keeps the
/// cursor. Every edit emits `on_change` with the whole new value, cursor
/// movement emits nothing.
#[derive(Debug, Default)]
pub struct TextInput {
    /// Cursor position in characters
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor after the last character of `value`
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    fn byte_offset(value: &str, char_idx: usize) -> usize {
        value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(value.len())
    }

    /// Display columns taken by the text before the cursor
    fn cursor_column(value: &str, cursor: usize) -> u16 {
        let at = Self::byte_offset(value, cursor);
        u16::try_from(Span::raw(&value[..at]).width()).unwrap_or(u16::MAX)
    }

    fn insert(&mut self, value: &str, c: char) -> String {
        let at = Self::byte_offset(value, self.cursor);
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..at]);
        new_value.push(c);
        new_value.push_str(&value[at..]);
        self.cursor += 1;
        new_value
    }

    fn remove_at(value: &str, char_idx: usize) -> String {
        value
            .chars()
            .enumerate()
            .filter_map(|(i, c)| (i != char_idx).then_some(c))
            .collect()
    }

    fn edit(&mut self, code: KeyCode, modifiers: KeyModifiers, value: &str) -> Option<String> {
        let len = value.chars().count();

        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('a') => self.cursor = 0,
                KeyCode::Char('e') => self.cursor = len,
                KeyCode::Char('u') if !value.is_empty() => {
                    self.cursor = 0;
                    return Some(String::new());
                }
                _ => {}
            }
            return None;
        }

        match code {
            KeyCode::Char(c) => Some(self.insert(value, c)),
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                Some(Self::remove_at(value, self.cursor))
            }
            KeyCode::Delete if self.cursor < len => Some(Self::remove_at(value, self.cursor)),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = len;
                None
            }
            _ => None,
        }
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

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

        // The value may have changed underneath us (another view, a script)
        self.cursor = self.cursor.min(props.value.chars().count());

        self.edit(key.code, key.modifiers, props.value)
            .map(props.on_change)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.cursor = self.cursor.min(props.value.chars().count());

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", props.title));

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.is_focused && area.height >= 3 {
            let cursor_x = area
                .x
                .saturating_add(1)
                .saturating_add(Self::cursor_column(props.value, self.cursor));
            if cursor_x < area.right().saturating_sub(1) {
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flux_dispatch_core::testing::{key, type_text, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
    }

    fn props(value: &str, is_focused: bool) -> TextInputProps<'_, TestAction> {
        TextInputProps {
            value,
            placeholder: "Your name",
            title: "Name",
            is_focused,
            on_change: TestAction::Change,
        }
    }

    fn send(input: &mut TextInput, value: &str, k: &str) -> Vec<TestAction> {
        input
            .handle_event(&EventKind::Key(key(k)), props(value, true))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_typing_emits_whole_value() {
        let mut input = TextInput::new();
        let mut value = String::new();
        for event in type_text("Ann") {
            let actions: Vec<_> = input
                .handle_event(&event, props(&value, true))
                .into_iter()
                .collect();
            let [TestAction::Change(next)] = actions.as_slice() else {
                panic!("expected one change, got {:?}", actions);
            };
            value = next.clone();
        }
        assert_eq!(value, "Ann");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new();
        input.cursor = 1;
        assert_eq!(
            send(&mut input, "Jm", "i"),
            vec![TestAction::Change("Jim".into())]
        );
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.move_to_end("Zoë");
        assert_eq!(
            send(&mut input, "Zoë", "backspace"),
            vec![TestAction::Change("Zo".into())]
        );
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        assert_eq!(TextInput::cursor_column("Jim", 2), 2);
        assert_eq!(TextInput::cursor_column("Zoë", 3), 3);
        assert_eq!(TextInput::cursor_column("山田太郎", 1), 2);
        assert_eq!(TextInput::cursor_column("山田太郎", 4), 8);
        assert_eq!(TextInput::cursor_column("", 0), 0);
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut input = TextInput::new();
        assert!(send(&mut input, "Jim", "backspace").is_empty());
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new();
        assert_eq!(
            send(&mut input, "Jim", "delete"),
            vec![TestAction::Change("im".into())]
        );
    }

    #[test]
    fn test_cursor_moves_are_silent() {
        let mut input = TextInput::new();
        input.move_to_end("Jim");
        assert!(send(&mut input, "Jim", "left").is_empty());
        assert_eq!(input.cursor(), 2);
        assert!(send(&mut input, "Jim", "home").is_empty());
        assert_eq!(input.cursor(), 0);
        assert!(send(&mut input, "Jim", "ctrl+e").is_empty());
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::new();
        input.move_to_end("Jim");
        assert_eq!(
            send(&mut input, "Jim", "ctrl+u"),
            vec![TestAction::Change(String::new())]
        );
        assert!(send(&mut input, "", "ctrl+u").is_empty());
    }

    #[test]
    fn test_cursor_clamped_when_value_shrinks() {
        let mut input = TextInput::new();
        input.move_to_end("Jimmy");
        assert_eq!(
            send(&mut input, "Jo", "!"),
            vec![TestAction::Change("Jo!".into())]
        );
    }

    #[test]
    fn test_unfocused_ignores() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), props("", false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_value_and_placeholder() {
        let mut render = RenderHarness::new(30, 3);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("Jim", true));
        });
        assert!(output.contains("Jim"));
        assert!(output.contains(" Name "));

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("", false));
        });
        assert!(output.contains("Your name"));
    }
}
