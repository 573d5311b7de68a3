//! File path prompt opened from the drop zone

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the browse prompt with the path typed so far
pub fn render_browse_dialog(frame: &mut Frame, input: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" to stage, "),
        Span::styled("Esc", key_style),
        Span::raw(" to cancel"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Add Files",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: "Type or paste one or more file paths. Quote paths that contain spaces.",
            input: Some(input),
            hint: Some(hint),
            max_width: 70,
        },
    );
}
