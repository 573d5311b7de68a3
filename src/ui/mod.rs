//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;
mod splash;
mod success;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.state.current_view == View::Splash {
        if let Some(ref splash_state) = app.splash_state {
            splash::draw(frame, area, splash_state);
        }
        return;
    }

    let screen = layout::screen_layout(area);
    layout::draw_header(frame, &screen, app);

    match app.state.current_view {
        View::Success => success::draw(frame, screen.body),
        _ => forms::draw(frame, &screen, app),
    }

    layout::draw_status_bar(frame, screen.status, app);

    if let Some(ref input) = app.state.browse_prompt {
        components::render_browse_dialog(frame, input);
    }

    let notifications = &app.state.session.notifications;
    components::render_notifications(
        frame,
        screen.body,
        notifications.iter(),
        app.now,
        notifications.ttl(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntakeConfig;
    use crate::events::FormEvent;
    use crate::state::forms::{FieldId, ProjectType};
    use crate::state::Focus;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn settled_app(width: u16, height: u16) -> App {
        let start = Instant::now();
        let config = IntakeConfig {
            show_splash: Some(false),
            pulse_enabled: Some(false),
            ..Default::default()
        };
        let mut app = App::new(config, start);
        app.handle_event(FormEvent::Resize(width, height), start);
        app.tick(start + Duration::from_secs(1));
        app
    }

    #[test]
    fn test_first_step_lists_project_types() {
        let app = settled_app(100, 30);
        let text = render(&app, 100, 30);
        assert!(text.contains("Step 1 of 3: Project Type"));
        for project_type in ProjectType::ALL {
            assert!(text.contains(project_type.label()), "{}", project_type.label());
        }
        assert!(text.contains("Next →"));
    }

    #[test]
    fn test_field_error_is_drawn() {
        let mut app = settled_app(100, 40);
        app.state.session.go_to_step(2);
        let now = app.now + Duration::from_secs(1);
        app.tick(now);
        app.tick(now + Duration::from_secs(1));
        app.state.set_focus(Focus::Field(FieldId::ClientName));

        let text = render(&app, 100, 40);
        assert!(text.contains("This field is required"));
    }

    #[test]
    fn test_notification_is_drawn() {
        let mut app = settled_app(100, 30);
        let now = app.now;
        app.state.session.next_step(2, now);
        app.tick(now + Duration::from_millis(400));
        let text = render(&app, 100, 30);
        assert!(text.contains("Please select a project type"));
    }

    #[test]
    fn test_browse_prompt_is_drawn() {
        let mut app = settled_app(100, 30);
        app.state.browse_prompt = Some("/tmp/brief.pdf".into());
        let text = render(&app, 100, 30);
        assert!(text.contains("Add Files"));
        assert!(text.contains("/tmp/brief.pdf"));
    }

    #[test]
    fn test_footer_shows_year() {
        let app = settled_app(100, 30);
        let text = render(&app, 100, 30);
        assert!(text.contains('©'));
    }

    #[test]
    fn test_narrow_terminal_renders() {
        let app = settled_app(50, 30);
        let text = render(&app, 50, 30);
        assert!(text.contains("Website"));
    }

    #[test]
    fn test_splash_shows_skip_hint() {
        let app = App::new(IntakeConfig::default(), Instant::now());
        let text = render(&app, 80, 24);
        assert!(text.contains("Press any key to skip"));
    }
}
