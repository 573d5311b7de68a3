//! Loading screen rendering with block letter logo

use crate::state::{LogoStyle, SplashPhase, SplashState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BLOCK_LOGO: [&str; 5] = [
    "███ █   █ █████  ███  █   █ █████",
    " █  ██  █   █   █   █ █  █  █    ",
    " █  █ █ █   █   █████ ███   ████ ",
    " █  █  ██   █   █   █ █  █  █    ",
    "███ █   █   █   █   █ █   █ █████",
];
const PLAIN_LOGO: &str = "P R O J E C T   I N T A K E";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn build_logo(style: LogoStyle, width: u16) -> Vec<Line<'static>> {
    let logo_style = Style::default().fg(Color::Cyan);
    let block_width = BLOCK_LOGO[0].chars().count() as u16;
    match style {
        LogoStyle::Block if width >= block_width => BLOCK_LOGO
            .iter()
            .map(|row| Line::from(Span::styled(*row, logo_style)))
            .collect(),
        _ => vec![Line::from(Span::styled(
            PLAIN_LOGO,
            logo_style.add_modifier(Modifier::BOLD),
        ))],
    }
}

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let mut lines = build_logo(splash_state.logo_style, area.width);
    lines.push(Line::from(""));
    if splash_state.phase == SplashPhase::Display {
        let frame_glyph = SPINNER[splash_state.spinner_frame % SPINNER.len()];
        lines.push(Line::from(vec![
            Span::styled(frame_glyph, Style::default().fg(Color::Cyan)),
            Span::styled(" Loading", Style::default().fg(Color::DarkGray)),
        ]));
    }

    let logo_height = lines.len() as u16;
    let logo_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;

    // Center, then slide up by the scroll offset (may leave the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint at the bottom until the logo starts moving
    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_logo_rows_are_even() {
        let width = BLOCK_LOGO[0].chars().count();
        assert!(BLOCK_LOGO.iter().all(|row| row.chars().count() == width));
    }

    #[test]
    fn test_block_logo_falls_back_when_narrow() {
        assert_eq!(build_logo(LogoStyle::Block, 120).len(), 5);
        assert_eq!(build_logo(LogoStyle::Block, 20).len(), 1);
        assert_eq!(build_logo(LogoStyle::Plain, 120).len(), 1);
    }
}
