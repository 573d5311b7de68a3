//! Application state definitions

use super::forms::{FieldId, ProjectType};
use super::reveal::RevealState;
use super::session::{FormSession, SessionOptions, STEPS, TOTAL_STEPS};
use std::time::Instant;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Loading screen
    Splash,
    #[default]
    Form,
    /// Shown once submission completes
    Success,
}

/// Focusable controls of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    TypeOption(usize),
    Field(FieldId),
    DropZone,
    StagedFile(usize),
    Terms,
    Back,
    Next,
    Submit,
}

impl Focus {
    pub fn field(self) -> Option<FieldId> {
        match self {
            Focus::Field(id) => Some(id),
            _ => None,
        }
    }
}

/// Focus order for a step, top to bottom
pub fn focus_order(step: usize, staged_files: usize) -> Vec<Focus> {
    let mut order = Vec::new();
    if step == 1 {
        order.extend((0..ProjectType::ALL.len()).map(Focus::TypeOption));
    }
    if let Some(def) = STEPS.get(step.wrapping_sub(1)) {
        order.extend(def.fields.iter().copied().map(Focus::Field));
    }
    if step == TOTAL_STEPS {
        order.push(Focus::DropZone);
        order.extend((0..staged_files).map(Focus::StagedFile));
        order.push(Focus::Terms);
    }
    if step > 1 {
        order.push(Focus::Back);
    }
    order.push(if step == TOTAL_STEPS {
        Focus::Submit
    } else {
        Focus::Next
    });
    order
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub session: FormSession,
    pub focus: Focus,
    /// Tab pressed since the last mouse press: draw focus outlines
    pub keyboard_navigation: bool,
    /// Path being typed into the browse prompt, when it is open
    pub browse_prompt: Option<String>,
    /// Rows the form body is scrolled by
    pub scroll_offset: u16,
    pub reveal: RevealState,
    /// Terminal size (width, height)
    pub terminal_size: Option<(u16, u16)>,
}

impl AppState {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            current_view: View::Form,
            session: FormSession::new(options),
            focus: Focus::TypeOption(0),
            keyboard_navigation: false,
            browse_prompt: None,
            scroll_offset: 0,
            reveal: RevealState::default(),
            terminal_size: None,
        }
    }

    pub fn focus_order(&self) -> Vec<Focus> {
        focus_order(self.session.current_step(), self.session.stager.len())
    }

    /// Move focus, running the blur check on the field being left
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        if let Some(id) = self.focus.field() {
            self.session.blur_field(id);
        }
        self.focus = focus;
    }

    /// Move to the next focusable control (wraps around)
    pub fn next_focus(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus);
        let next = match current {
            Some(i) => order[(i + 1) % order.len()],
            None => order[0],
        };
        self.set_focus(next);
    }

    /// Move to the previous focusable control (wraps around)
    pub fn prev_focus(&mut self) {
        let order = self.focus_order();
        let prev = match order.iter().position(|f| *f == self.focus) {
            Some(0) | None => order[order.len() - 1],
            Some(i) => order[i - 1],
        };
        self.set_focus(prev);
    }

    /// Apply a pending step change: scroll to the top, focus the first
    /// control of the new step and start its entrance animation.
    pub fn sync_step(&mut self, now: Instant) {
        if self.session.take_scroll_request() {
            self.scroll_offset = 0;
            let first = self.focus_order()[0];
            // the step already changed, so blurring the old field would
            // annotate a field that is no longer visible
            self.focus = first;
            self.reveal.mark_shown(self.session.current_step(), now);
        }
        // a removed staged file can leave focus dangling
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::DropZone;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}
