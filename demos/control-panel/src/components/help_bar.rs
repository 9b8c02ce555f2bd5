use flux_dispatch::format_key_for_display;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::ControlPanelAction;

const BINDINGS: &[(&[&str], &str)] = &[
    (&["tab"], "next field"),
    (&["left", "right", "space"], "font size"),
    (&["ctrl+u"], "clear name"),
    (&["esc"], "quit"),
];

#[derive(Default)]
pub struct HelpBar;

pub struct HelpBarProps;

impl Component<ControlPanelAction> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let mut spans = Vec::with_capacity(BINDINGS.len() * 2);
        for (keys, label) in BINDINGS {
            let keys: Vec<String> = keys.iter().map(|k| format_key_for_display(k)).collect();
            spans.push(Span::styled(
                format!(" {}", keys.join("/")),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
