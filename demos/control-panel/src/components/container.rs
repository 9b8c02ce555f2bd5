use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::ControlPanelAction;
use crate::view::{ViewModel, SMALL_FONT_PX};

/// Emulate a larger font in a terminal by spacing the letters out
pub fn scale_text(text: &str, font_px: u16) -> String {
    if font_px <= SMALL_FONT_PX {
        return text.to_string();
    }
    let mut scaled = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            scaled.push(' ');
        }
        scaled.push(ch);
    }
    scaled
}

/// The styled area whose font follows the font size preference
#[derive(Default)]
pub struct Container;

pub struct ContainerProps<'a> {
    pub view: &'a ViewModel,
}

impl Component<ControlPanelAction> for Container {
    type Props<'a> = ContainerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let px = props.view.container_font_px;
        let mut greeting_style = Style::default().fg(Color::White);
        if px > SMALL_FONT_PX {
            greeting_style = greeting_style.add_modifier(Modifier::BOLD);
        }

        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled(scale_text("Hello, ", px), greeting_style),
                Span::styled(
                    scale_text(&props.view.user_name_text, px),
                    greeting_style.fg(Color::Cyan),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                format!("font-size: {}px", px),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Container ");

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .block(block),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_text() {
        assert_eq!(scale_text("Jim", 16), "Jim");
        assert_eq!(scale_text("Jim", 24), "J i m");
        assert_eq!(scale_text("", 24), "");
    }
}
