//! Project type cards shown on the first step

use super::control_block;
use crate::state::forms::ProjectType;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn icon(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Website => "🌐",
        ProjectType::MobileApp => "📱",
        ProjectType::Ecommerce => "🛒",
        ProjectType::Branding => "🎨",
        ProjectType::Marketing => "📣",
        ProjectType::Other => "✦",
    }
}

/// Draw one selectable card
pub fn draw_card(
    frame: &mut Frame,
    area: Rect,
    project_type: ProjectType,
    is_selected: bool,
    is_active: bool,
    outline: bool,
) {
    let (marker, style) = if is_selected {
        (
            "◉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("○", Style::default())
    };

    let mut block = control_block(is_active, false, outline);
    if is_selected && !is_active {
        block = block.border_style(Style::default().fg(Color::Green));
    }

    let line = Line::from(vec![
        Span::styled(format!("{marker} "), style),
        Span::raw(format!("{} ", icon(project_type))),
        Span::styled(project_type.label(), style),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
