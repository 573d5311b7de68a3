//! Field rendering utilities for forms

use crate::state::forms::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Border style for a control: red when invalid, cyan when focused.
/// Keyboard navigation draws the focused control with a thick outline.
pub fn control_block(is_active: bool, has_error: bool, outline: bool) -> Block<'static> {
    let color = if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if is_active && outline {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    } else {
        block
    }
}

/// Draw a form field. The last row of `area` holds the error message.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, outline: bool) {
    let box_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let error_area = Rect {
        y: area.y + box_area.height,
        height: 1,
        ..area
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if field.is_choice() && field.is_blank() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let display_value = field.display_value();
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        // keep the cursor line visible once the text outgrows the box
        let visible = box_area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible);
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            cursor_span,
        ]))
    };

    let block = control_block(is_active, field.has_error(), outline)
        .title(format!(" {} ", field.label));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);

    if let Some(error) = field.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            )),
            error_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldId;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(field: &FormField, is_active: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, Rect::new(0, 0, 40, 4), field, is_active, false))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_label_and_value() {
        let mut field = FormField::text(FieldId::ProjectName, true, false);
        field.set_text("Relaunch");
        let text = render(&field, false);
        assert!(text.contains("Project Name *"));
        assert!(text.contains("Relaunch"));
        assert!(!text.contains('▌'));
    }

    #[test]
    fn test_active_field_shows_cursor() {
        let field = FormField::text(FieldId::ClientName, true, false);
        assert!(render(&field, true).contains('▌'));
    }

    #[test]
    fn test_error_line_rendered() {
        let mut field = FormField::text(FieldId::ClientEmail, true, false);
        field.set_error("Please enter a valid email address");
        assert!(render(&field, false).contains("Please enter a valid email"));
    }

    #[test]
    fn test_empty_choice_prompts() {
        let field = FormField::choice(FieldId::Budget, &["Small", "Large"]);
        assert!(render(&field, false).contains("Select an option"));
    }
}
