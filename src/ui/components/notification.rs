//! Transient notification toasts, stacked in the top-right corner

use crate::state::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Where a toast sits. `visibility` slides it in from the right edge.
pub fn toast_area(area: Rect, index: usize, visibility: f32) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let y = area.y + 1 + index as u16 * TOAST_HEIGHT;
    if width == 0 || y + TOAST_HEIGHT > area.y + area.height {
        return None;
    }
    let hidden = ((1.0 - visibility.clamp(0.0, 1.0)) * (width + 1) as f32).round() as u16;
    let resting_x = area.x + area.width - width - 1;
    let x = resting_x + hidden;
    let visible_width = (area.x + area.width).saturating_sub(x).min(width);
    if visible_width < 3 {
        return None;
    }
    Some(Rect {
        x,
        y,
        width: visible_width,
        height: TOAST_HEIGHT,
    })
}

/// Render every live notification, newest at the bottom
pub fn render_notifications<'a>(
    frame: &mut Frame,
    area: Rect,
    notifications: impl Iterator<Item = &'a Notification>,
    now: Instant,
    ttl: Duration,
) {
    for (index, notification) in notifications.enumerate() {
        let Some(toast) = toast_area(area, index, notification.visibility(now, ttl)) else {
            continue;
        };
        let color = match notification.kind {
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::Cyan,
        };
        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(Color::Black)),
                ),
            toast,
        );
    }
}
