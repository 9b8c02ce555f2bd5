use crossterm::event::{KeyCode, KeyModifiers};
use flux_dispatch::EventKind;
use flux_dispatch_components::{RadioGroup, RadioGroupProps, TextInput, TextInputProps};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use super::{Component, Container, ContainerProps, HelpBar, HelpBarProps};
use crate::action::ControlPanelAction;
use crate::view::ViewModel;

/// Which form field receives key input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    UserName,
    FontSize,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::UserName => Focus::FontSize,
            Focus::FontSize => Focus::UserName,
        }
    }
}

/// The whole screen: name input, font size form, container and help line
#[derive(Default)]
pub struct ControlPanel {
    user_name_input: TextInput,
    font_size_form: RadioGroup,
    container: Container,
    help: HelpBar,
}

pub struct ControlPanelProps<'a> {
    pub view: &'a ViewModel,
    pub font_sizes: &'a [String],
    pub focus: Focus,
}

impl ControlPanel {
    /// Create the panel with the name cursor after the initial name
    pub fn new(initial: &ViewModel) -> Self {
        let mut panel = Self::default();
        panel.cursor_to_end(initial);
        panel
    }

    /// Move the name cursor after the last character of the current name
    pub fn cursor_to_end(&mut self, view: &ViewModel) {
        self.user_name_input.move_to_end(&view.user_name_text);
    }

    fn input_props<'a>(view: &'a ViewModel, focus: Focus) -> TextInputProps<'a, ControlPanelAction> {
        TextInputProps {
            value: &view.user_name_text,
            placeholder: "Your name",
            title: "User name",
            is_focused: focus == Focus::UserName,
            on_change: |value| ControlPanelAction::UpdateUsername { value },
        }
    }

    fn form_props<'a>(
        view: &'a ViewModel,
        font_sizes: &'a [String],
        focus: Focus,
    ) -> RadioGroupProps<'a, ControlPanelAction> {
        RadioGroupProps {
            options: font_sizes,
            selected: &view.selected_font_size,
            title: "Font size",
            is_focused: focus == Focus::FontSize,
            on_change: |value| ControlPanelAction::UpdateFontSizePreference { value },
        }
    }
}

impl Component<ControlPanelAction> for ControlPanel {
    type Props<'a> = ControlPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = ControlPanelAction> {
        if let Some(key) = event.as_key() {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => return vec![ControlPanelAction::Quit],
                KeyCode::Char('c') if ctrl => return vec![ControlPanelAction::Quit],
                KeyCode::Tab | KeyCode::BackTab => return vec![ControlPanelAction::FocusNext],
                _ => {}
            }
        }

        match props.focus {
            Focus::UserName => self
                .user_name_input
                .handle_event(event, Self::input_props(props.view, props.focus))
                .into_iter()
                .collect::<Vec<_>>(),
            Focus::FontSize => self
                .font_size_form
                .handle_event(
                    event,
                    Self::form_props(props.view, props.font_sizes, props.focus),
                )
                .into_iter()
                .collect::<Vec<_>>(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [input_area, form_area, container_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        self.user_name_input.render(
            frame,
            input_area,
            Self::input_props(props.view, props.focus),
        );
        self.font_size_form.render(
            frame,
            form_area,
            Self::form_props(props.view, props.font_sizes, props.focus),
        );
        self.container
            .render(frame, container_area, ContainerProps { view: props.view });
        self.help.render(frame, help_area, HelpBarProps);
    }
}
