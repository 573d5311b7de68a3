//! Application state and core logic

use crate::config::IntakeConfig;
use crate::events::FormEvent;
use crate::state::forms::ProjectType;
use crate::state::{
    AppState, Focus, PulseHandle, SplashState, View, PULSE_DIM, PULSE_PERIOD, TOTAL_STEPS,
};
use crate::ui::layout::{self, REMOVE_WIDTH};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Frame interval while something is animating (~60fps)
const FAST_POLL: Duration = Duration::from_millis(16);
/// Frame interval while only the title pulse is running
const PULSE_POLL: Duration = Duration::from_millis(40);
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: IntakeConfig,
    /// Loading screen animation state
    pub splash_state: Option<SplashState>,
    pub pulse: PulseHandle,
    /// Instant of the latest event or tick; animations are drawn against it
    pub now: Instant,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: IntakeConfig, now: Instant) -> Self {
        let mut state = AppState::new(config.session_options());
        let splash_state = if config.show_splash() {
            state.current_view = View::Splash;
            Some(SplashState::new(config.logo_style(), now))
        } else {
            state.reveal.mark_shown(1, now);
            None
        };

        Self {
            state,
            config,
            splash_state,
            pulse: PulseHandle::disabled(),
            now,
            quit: false,
        }
    }

    /// Start the title pulse if enabled. Needs a tokio runtime.
    pub fn start_pulse(&mut self) {
        if self.config.pulse_enabled() && !self.pulse.is_running() {
            self.pulse = PulseHandle::spawn(PULSE_PERIOD, PULSE_DIM);
        }
    }

    /// Stop background work before the terminal is restored
    pub fn shutdown(&mut self) {
        self.pulse.stop();
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn is_animating(&self) -> bool {
        let state = &self.state;
        self.in_splash()
            || !state.session.notifications.is_empty()
            || state.session.phase().is_submitting()
            || !state.reveal.is_settled(state.session.current_step(), self.now)
    }

    /// How long to wait for input before the next frame
    pub fn poll_interval(&self) -> Duration {
        if self.is_animating() {
            FAST_POLL
        } else if self.pulse.is_running() {
            PULSE_POLL
        } else {
            IDLE_POLL
        }
    }

    /// Advance every timer to `now`
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        if let Some(ref mut splash) = self.splash_state {
            let height = self.state.terminal_size.map(|(_, h)| h).unwrap_or(24);
            splash.update(now, height);
            if splash.is_complete() {
                self.finish_splash(now);
            }
        }

        if self.state.session.tick(now) {
            self.state.current_view = View::Success;
            self.state.browse_prompt = None;
        }

        if self.state.current_view == View::Form {
            self.state.sync_step(now);
        }
    }

    fn finish_splash(&mut self, now: Instant) {
        self.splash_state = None;
        self.state.current_view = View::Form;
        self.state.reveal.mark_shown(self.state.session.current_step(), now);
    }

    /// Dispatch one input event
    pub fn handle_event(&mut self, event: FormEvent, now: Instant) {
        self.now = now;
        match event {
            FormEvent::Key(key) => self.handle_key(key, now),
            FormEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
            FormEvent::Paste(text) => self.handle_paste(&text, now),
            FormEvent::Resize(width, height) => {
                self.state.terminal_size = Some((width, height));
            }
            FormEvent::Tick => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match self.state.current_view {
            View::Splash => {
                if let Some(ref mut splash) = self.splash_state {
                    splash.skip();
                }
                self.finish_splash(now);
                return;
            }
            View::Success => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                    self.quit = true;
                }
                return;
            }
            View::Form => {}
        }

        if self.state.browse_prompt.is_some() {
            self.handle_browse_key(key, now);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => self.go_next(now),
                KeyCode::Char('p') => self.go_back(),
                KeyCode::Char('s') => self.submit(now),
                _ => {}
            }
        } else {
            self.handle_form_key(key, now);
        }

        self.state.sync_step(now);
        self.scroll_to_focus();
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let text_field = self.focused_text_field();

        match key.code {
            KeyCode::Tab => {
                self.state.keyboard_navigation = true;
                self.state.next_focus();
            }
            KeyCode::BackTab => {
                self.state.keyboard_navigation = true;
                self.state.prev_focus();
            }
            KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            KeyCode::F(n) if (1..=TOTAL_STEPS as u8).contains(&n) => {
                self.state.session.click_indicator(n as usize);
            }
            KeyCode::Left | KeyCode::Right => self.handle_horizontal(key.code == KeyCode::Right),
            KeyCode::Enter => match text_field {
                Some(id) if self.state.session.form.field(id).is_multiline => {
                    self.state.session.form.field_mut(id).push_char('\n');
                }
                Some(_) => self.state.next_focus(),
                None => self.activate(now),
            },
            KeyCode::Backspace | KeyCode::Delete => match (text_field, self.state.focus) {
                (Some(id), _) => self.state.session.form.field_mut(id).pop_char(),
                (None, Focus::StagedFile(i)) => self.remove_staged(i),
                _ => {}
            },
            KeyCode::Char(c) => match text_field {
                Some(id) => self.state.session.form.field_mut(id).push_char(c),
                None if c == ' ' => self.activate(now),
                None if c == 'x' => {
                    if let Focus::StagedFile(i) = self.state.focus {
                        self.remove_staged(i);
                    }
                }
                None => {}
            },
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(prompt) = self.state.browse_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => prompt.push(c),
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Enter => {
                let input = std::mem::take(prompt);
                self.state.browse_prompt = None;
                self.stage(&input, now);
            }
            KeyCode::Esc => self.state.browse_prompt = None,
            _ => {}
        }
    }

    /// Left/right: cycle a choice field or move across the type cards
    fn handle_horizontal(&mut self, forward: bool) {
        match self.state.focus {
            Focus::Field(id) if self.state.session.form.field(id).is_choice() => {
                let field = self.state.session.form.field_mut(id);
                if forward {
                    field.select_next();
                } else {
                    field.select_prev();
                }
            }
            Focus::TypeOption(_) | Focus::Back | Focus::Next | Focus::Submit => {
                if forward {
                    self.state.next_focus();
                } else {
                    self.state.prev_focus();
                }
            }
            _ => {}
        }
    }

    /// Enter/Space on the focused control
    fn activate(&mut self, now: Instant) {
        match self.state.focus {
            Focus::TypeOption(i) => {
                if let Some(project_type) = ProjectType::ALL.get(i) {
                    self.state.session.select_project_type(*project_type);
                }
            }
            Focus::Field(id) => self.state.session.form.field_mut(id).select_next(),
            Focus::DropZone => self.state.browse_prompt = Some(String::new()),
            Focus::StagedFile(i) => self.remove_staged(i),
            Focus::Terms => self.state.session.form.toggle_terms(),
            Focus::Back => self.go_back(),
            Focus::Next => self.go_next(now),
            Focus::Submit => self.submit(now),
        }
    }

    fn focused_text_field(&self) -> Option<crate::state::forms::FieldId> {
        self.state
            .focus
            .field()
            .filter(|id| !self.state.session.form.field(*id).is_choice())
    }

    fn go_next(&mut self, now: Instant) {
        let step = self.state.session.current_step();
        if step < TOTAL_STEPS {
            // the field being edited gets its blur check before the step check
            if let Some(id) = self.state.focus.field() {
                self.state.session.blur_field(id);
            }
            self.state.session.next_step(step + 1, now);
        }
    }

    fn go_back(&mut self) {
        let step = self.state.session.current_step();
        if step > 1 {
            self.state.session.prev_step(step - 1);
        }
    }

    fn submit(&mut self, now: Instant) {
        if let Err(err) = self.state.session.submit(now) {
            tracing::debug!(error = %err, "Submission rejected");
        }
    }

    fn stage(&mut self, input: &str, now: Instant) {
        let staged = self.state.session.stage_input(input, now);
        tracing::debug!(staged, "Staged from input");
        if staged > 0 {
            let noun = if staged == 1 { "file" } else { "files" };
            self.state
                .session
                .notifications
                .push_info(format!("Added {staged} {noun}"), now);
        }
    }

    fn remove_staged(&mut self, index: usize) {
        let id = self.state.session.stager.files().get(index).map(|f| f.id);
        if let Some(id) = id {
            self.state.session.remove_file(id);
        }
    }

    fn screen(&self) -> Option<layout::ScreenLayout> {
        self.state
            .terminal_size
            .map(|(width, height)| layout::screen_layout(Rect::new(0, 0, width, height)))
    }

    /// Keep the focused control inside the visible part of the body
    fn scroll_to_focus(&mut self) {
        let Some(screen) = self.screen() else {
            return;
        };
        let inner = screen.body_inner;
        let slots = layout::form_slots(
            self.state.session.current_step(),
            self.state.session.stager.len(),
            inner.width,
        );
        self.state.scroll_offset =
            layout::scroll_to_show(&slots, self.state.focus, self.state.scroll_offset, inner.height);
    }

    fn max_scroll(&self, inner: Rect) -> u16 {
        let slots = layout::form_slots(
            self.state.session.current_step(),
            self.state.session.stager.len(),
            inner.width,
        );
        layout::content_height(&slots).saturating_sub(inner.height)
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if let MouseEventKind::Down(_) = mouse.kind {
            self.state.keyboard_navigation = false;
        }

        match self.state.current_view {
            View::Splash => {
                if let MouseEventKind::Down(_) = mouse.kind {
                    self.finish_splash(now);
                }
                return;
            }
            View::Success => return,
            View::Form => {}
        }

        let Some(screen) = self.screen() else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.state.browse_prompt = None;
                self.handle_click(&screen, mouse.column, mouse.row, now);
                self.state.sync_step(now);
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let over_drop_zone = layout::visible_controls(self, screen.body_inner)
                    .iter()
                    .any(|(focus, rect)| {
                        *focus == Focus::DropZone && layout::contains(*rect, mouse.column, mouse.row)
                    });
                self.state.session.stager.highlighted = over_drop_zone;
            }
            MouseEventKind::ScrollUp => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
            }
            MouseEventKind::ScrollDown => {
                let max = self.max_scroll(screen.body_inner);
                self.state.scroll_offset = (self.state.scroll_offset + 1).min(max);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, screen: &layout::ScreenLayout, column: u16, row: u16, now: Instant) {
        if let Some(i) = screen
            .indicators
            .iter()
            .position(|rect| layout::contains(*rect, column, row))
        {
            self.state.session.click_indicator(i + 1);
            return;
        }

        let hit = layout::visible_controls(self, screen.body_inner)
            .into_iter()
            .find(|(_, rect)| layout::contains(*rect, column, row));
        let Some((focus, rect)) = hit else {
            return;
        };

        self.state.set_focus(focus);
        match focus {
            // clicking a text field only focuses it
            Focus::Field(id) if !self.state.session.form.field(id).is_choice() => {}
            Focus::StagedFile(i) => {
                if column >= rect.x + rect.width.saturating_sub(REMOVE_WIDTH) {
                    self.remove_staged(i);
                }
            }
            _ => self.activate(now),
        }
    }

    /// Bracketed paste: file drops on the drop zone, text everywhere else
    pub fn handle_paste(&mut self, text: &str, now: Instant) {
        if let Some(prompt) = self.state.browse_prompt.as_mut() {
            prompt.push_str(text.trim_end_matches(['\n', '\r']));
            return;
        }
        if self.state.current_view != View::Form {
            return;
        }

        let on_drop_zone =
            self.state.focus == Focus::DropZone || self.state.session.stager.highlighted;
        if on_drop_zone {
            self.stage(text, now);
        } else if let Some(id) = self.focused_text_field() {
            self.state.session.form.field_mut(id).push_str(text);
        }
        self.state.sync_step(now);
    }
}
