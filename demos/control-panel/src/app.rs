//! Wiring: one dispatcher, one preferences store, one view
//!
//! The only path from input to screen is
//! event -> action -> dispatcher -> store -> listener -> `render` -> repaint.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use flux_dispatch::{
    ActionSummary, Component, DispatchError, DispatchReport, Dispatcher, EventKind,
};
use ratatui::Frame;
use tracing::{debug, info};

use crate::action::ControlPanelAction;
use crate::components::{ControlPanel, ControlPanelProps, Focus};
use crate::state::{UserPreferences, DEFAULT_FONT_SIZES};
use crate::store::UserPrefsStore;
use crate::view::{render, ViewModel};

pub struct App {
    dispatcher: Dispatcher<ControlPanelAction>,
    prefs: UserPrefsStore,
    view: Rc<RefCell<ViewModel>>,
    needs_repaint: Rc<Cell<bool>>,
    renders: Rc<Cell<usize>>,
    panel: ControlPanel,
    focus: Focus,
    font_sizes: Vec<String>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZES.iter().map(|s| s.to_string()).collect())
    }
}

impl App {
    /// Build the app with the given font size options
    pub fn new(font_sizes: Vec<String>) -> Self {
        let dispatcher = Dispatcher::new();
        let prefs = UserPrefsStore::new(&dispatcher);

        // The screen starts from the store's initial state, like static markup
        let initial = render(&prefs.user_preferences());
        let panel = ControlPanel::new(&initial);
        let view = Rc::new(RefCell::new(initial));
        let needs_repaint = Rc::new(Cell::new(true));
        let renders = Rc::new(Cell::new(0));

        {
            let view = Rc::clone(&view);
            let needs_repaint = Rc::clone(&needs_repaint);
            let renders = Rc::clone(&renders);
            prefs.add_listener(move |state: &UserPreferences| {
                info!(?state, "Going to update the view");
                *view.borrow_mut() = render(state);
                renders.set(renders.get() + 1);
                needs_repaint.set(true);
            });
        }

        Self {
            dispatcher,
            prefs,
            view,
            needs_repaint,
            renders,
            panel,
            focus: Focus::default(),
            font_sizes,
            should_quit: false,
        }
    }

    /// Hand an action to the dispatcher, then apply its view-only effects
    pub fn dispatch(
        &mut self,
        action: ControlPanelAction,
    ) -> Result<DispatchReport, DispatchError> {
        debug!(action = %action.summary(), "Dispatching");
        let report = self.dispatcher.dispatch(&action)?;

        match action {
            ControlPanelAction::FocusNext => {
                self.focus = self.focus.next();
                self.needs_repaint.set(true);
            }
            ControlPanelAction::Quit => self.should_quit = true,
            _ => {}
        }
        Ok(report)
    }

    /// Dispatch scripted actions in order, stopping after a `Quit`
    ///
    /// Returns how many actions were dispatched.
    pub fn replay(
        &mut self,
        actions: impl IntoIterator<Item = ControlPanelAction>,
    ) -> Result<usize, DispatchError> {
        let mut count = 0;
        for action in actions {
            self.dispatch(action)?;
            count += 1;
            if self.should_quit {
                break;
            }
        }
        let view = self.view.borrow();
        self.panel.cursor_to_end(&view);
        Ok(count)
    }

    /// Turn an input event into the actions it stands for
    ///
    /// Resizes only repaint what is already on screen.
    pub fn handle_event(&mut self, event: &EventKind) -> Vec<ControlPanelAction> {
        if let EventKind::Resize(..) = event {
            self.needs_repaint.set(true);
            return Vec::new();
        }

        let view = self.view.borrow();
        let props = ControlPanelProps {
            view: &view,
            font_sizes: &self.font_sizes,
            focus: self.focus,
        };
        let actions: Vec<_> = self.panel.handle_event(event, props).into_iter().collect();
        actions
    }

    /// Paint the current view
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.view.borrow();
        let props = ControlPanelProps {
            view: &view,
            font_sizes: &self.font_sizes,
            focus: self.focus,
        };
        self.panel.render(frame, area, props);
    }

    /// Returns true once if something changed since the last call
    pub fn take_needs_repaint(&self) -> bool {
        self.needs_repaint.replace(false)
    }

    /// Current preferences held by the store
    pub fn preferences(&self) -> UserPreferences {
        self.prefs.user_preferences()
    }

    /// The view last produced by the store listener
    pub fn view(&self) -> Ref<'_, ViewModel> {
        self.view.borrow()
    }

    /// How many times the listener re-rendered the view
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dispatcher(&self) -> &Dispatcher<ControlPanelAction> {
        &self.dispatcher
    }
}
