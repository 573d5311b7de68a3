//! Drop zone and staged file list

use super::control_block;
use crate::state::StagedFile;
use crate::ui::layout::REMOVE_WIDTH;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BorderType, Paragraph},
    Frame,
};

pub fn draw_drop_zone(
    frame: &mut Frame,
    area: Rect,
    is_highlighted: bool,
    is_active: bool,
    outline: bool,
) {
    let mut block = control_block(is_active, false, outline).title(" Attachments ");
    if !(is_active && outline) {
        block = block.border_type(BorderType::Rounded);
    }
    if is_highlighted {
        block = block.border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    }

    let lead = if is_highlighted {
        "Release to add files"
    } else {
        "⇣ Drop files here, or press Enter to browse"
    };
    let lines = vec![
        Line::from(Span::styled(
            lead,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Images, video, PDF or ZIP up to 50MB",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// One row per file; narrow layouts put the size on a second row
pub fn draw_staged_file(
    frame: &mut Frame,
    area: Rect,
    file: &StagedFile,
    is_active: bool,
    outline: bool,
) {
    let name_style = if is_active {
        let style = Style::default().fg(Color::Cyan);
        if outline {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    } else {
        Style::default()
    };
    let size_style = Style::default().fg(Color::DarkGray);
    let remove = Span::styled(" ✕ ", Style::default().fg(Color::Red));

    let first_row = Rect { height: 1, ..area };
    let name_width = area.width.saturating_sub(REMOVE_WIDTH);
    let name = Span::styled(format!("{} {}", file.icon().glyph(), file.name), name_style);

    if area.height >= 2 {
        frame.render_widget(
            Paragraph::new(Line::from(name)),
            Rect {
                width: name_width,
                ..first_row
            },
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("   {}", file.display_size()),
                size_style,
            ))),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    } else {
        let size = Span::styled(format!(" {}", file.display_size()), size_style);
        let size_width = size.width() as u16;
        frame.render_widget(
            Paragraph::new(Line::from(name)),
            Rect {
                width: name_width.saturating_sub(size_width),
                ..first_row
            },
        );
        let size_width = size_width.min(name_width);
        frame.render_widget(
            Paragraph::new(Line::from(size)),
            Rect {
                x: area.x + name_width - size_width,
                width: size_width,
                ..first_row
            },
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(remove)),
        Rect {
            x: area.x + name_width,
            width: REMOVE_WIDTH.min(area.width),
            ..first_row
        },
    );
}
