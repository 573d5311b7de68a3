//! Form rendering module
//!
//! - `field_renderer`: text and choice fields with inline errors
//! - `project_type`: selectable cards for the first step
//! - `attachments`: drop zone and staged file list

mod attachments;
mod field_renderer;
mod project_type;

pub use field_renderer::{control_block, draw_field};

use super::components::render_button;
use super::layout::{self, ScreenLayout};
use crate::app::App;
use crate::state::forms::ProjectType;
use crate::state::{Focus, TOTAL_STEPS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the current step inside the form body
pub fn draw(frame: &mut Frame, screen: &ScreenLayout, app: &App) {
    let session = &app.state.session;
    let step = session.step();
    let submitting = session.phase().is_submitting();
    let outline = app.state.keyboard_navigation;

    let block = Block::default()
        .title(format!(
            " Step {} of {}: {} ",
            step.number, TOTAL_STEPS, step.title
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, screen.body);

    for (focus, area) in layout::visible_controls(app, screen.body_inner) {
        let active = focus == app.state.focus;
        match focus {
            Focus::TypeOption(i) => {
                if let Some(project_type) = ProjectType::ALL.get(i).copied() {
                    let selected = session.form.project_type == Some(project_type);
                    project_type::draw_card(frame, area, project_type, selected, active, outline);
                }
            }
            Focus::Field(id) => draw_field(frame, area, session.form.field(id), active, outline),
            Focus::DropZone => {
                attachments::draw_drop_zone(frame, area, session.stager.highlighted, active, outline)
            }
            Focus::StagedFile(i) => {
                if let Some(file) = session.stager.files().get(i) {
                    attachments::draw_staged_file(frame, area, file, active, outline);
                }
            }
            Focus::Terms => draw_terms(frame, area, session.form.agree_terms, active, outline),
            Focus::Back => render_button(frame, area, "← Back", active, !submitting, outline),
            Focus::Next => render_button(frame, area, "Next →", active, true, outline),
            Focus::Submit => render_button(
                frame,
                area,
                session.phase().submit_label(),
                active,
                !submitting,
                outline,
            ),
        }
    }

    draw_scroll_marker(frame, screen, app);
}

fn draw_terms(frame: &mut Frame, area: Rect, checked: bool, is_active: bool, outline: bool) {
    let mut style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    if is_active && outline {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    let mark = if checked { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{mark} "), style),
            Span::styled("I agree to the terms and conditions *", style),
        ])),
        area,
    );
}

/// "more" markers on the body border when content is cut off
fn draw_scroll_marker(frame: &mut Frame, screen: &ScreenLayout, app: &App) {
    let session = &app.state.session;
    let inner = screen.body_inner;
    let slots = layout::form_slots(session.current_step(), session.stager.len(), inner.width);
    let content = layout::content_height(&slots);
    let scroll = app.state.scroll_offset;
    let style = Style::default().fg(Color::DarkGray);
    let marker_area = |y: u16| Rect {
        x: screen.body.x + screen.body.width.saturating_sub(10),
        y,
        width: 8.min(screen.body.width),
        height: 1,
    };

    if scroll > 0 && screen.body.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(" ↑ more ", style)),
            marker_area(screen.body.y),
        );
    }
    if content > scroll + inner.height && screen.body.height > 1 {
        frame.render_widget(
            Paragraph::new(Span::styled(" ↓ more ", style)),
            marker_area(screen.body.y + screen.body.height - 1),
        );
    }
}
