//! Layout components (header, form body, status bar)
//!
//! The geometry here is shared by the renderer and by mouse hit testing,
//! so a click always lands on the control that was drawn under it.
//!
//! ```text
//! Row 0:     Title
//! Row 1..:   Step indicators (one row, or three stacked when narrow)
//!            Bottom border of the header
//! Middle:    Form body (bordered, scrollable)
//! Bottom:    Status bar (1 row)
//! ```

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::state::{focus_order, Focus, IndicatorState, View, TOTAL_STEPS};
use crate::state::forms::{FieldId, ProjectType};
use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Below this width indicators and staged files stack vertically
pub const NARROW_WIDTH: u16 = 80;
pub const STATUS_BAR_HEIGHT: u16 = 1;

const CARD_HEIGHT: u16 = 3;
const CARD_COLUMNS: u16 = 3;
const COLUMN_GAP: u16 = 2;
const TEXT_HEIGHT: u16 = 3;
const MULTILINE_HEIGHT: u16 = 6;
/// Row under every field reserved for its error message
const ERROR_ROW: u16 = 1;
const DROP_ZONE_HEIGHT: u16 = 5;
const BACK_WIDTH: u16 = 12;
const PRIMARY_WIDTH: u16 = 22;
/// Width of the remove button at the end of a staged file row
pub const REMOVE_WIDTH: u16 = 3;

pub fn is_narrow(area: Rect) -> bool {
    area.width < NARROW_WIDTH
}

/// Top-level screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub indicators: [Rect; TOTAL_STEPS],
    pub body: Rect,
    /// Body minus its border; form controls are placed in here
    pub body_inner: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let narrow = is_narrow(area);
    let indicator_rows = if narrow { TOTAL_STEPS as u16 } else { 1 };
    // title + indicators + bottom border
    let header_height = 1 + indicator_rows + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    let header = chunks[0];

    let indicator_area = Rect {
        x: header.x,
        y: header.y + 1,
        width: header.width,
        height: indicator_rows.min(header.height.saturating_sub(1)),
    };
    let direction = if narrow {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let parts = Layout::default()
        .direction(direction)
        .constraints([Constraint::Ratio(1, TOTAL_STEPS as u32); TOTAL_STEPS])
        .split(indicator_area);

    let body = chunks[1];
    let body_inner = Block::default().borders(Borders::ALL).inner(body);

    ScreenLayout {
        header,
        indicators: [parts[0], parts[1], parts[2]],
        body,
        body_inner,
        status: chunks[2],
    }
}

/// Position of a control in the unscrolled form content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub focus: Focus,
    /// Row offset from the top of the content
    pub top: u16,
    pub height: u16,
    /// Column offset from the left of the content
    pub left: u16,
    pub width: u16,
}

fn field_height(id: FieldId) -> u16 {
    match id {
        FieldId::ProjectDescription | FieldId::AdditionalInfo => MULTILINE_HEIGHT + ERROR_ROW,
        _ => TEXT_HEIGHT + ERROR_ROW,
    }
}

/// Lay out every control of a step in focus order
pub fn form_slots(step: usize, staged_files: usize, width: u16) -> Vec<Slot> {
    let narrow = width < NARROW_WIDTH;
    let mut slots = Vec::new();
    let mut top = 0u16;
    let half = width.saturating_sub(COLUMN_GAP) / 2;

    for focus in focus_order(step, staged_files) {
        let full = |top, height| Slot {
            focus,
            top,
            height,
            left: 0,
            width,
        };
        match focus {
            Focus::TypeOption(i) => {
                let i = i as u16;
                if narrow {
                    slots.push(full(top, CARD_HEIGHT));
                    top += CARD_HEIGHT;
                } else {
                    let card_width =
                        width.saturating_sub(COLUMN_GAP * (CARD_COLUMNS - 1)) / CARD_COLUMNS;
                    let (row, col) = (i / CARD_COLUMNS, i % CARD_COLUMNS);
                    slots.push(Slot {
                        focus,
                        top: top + row * CARD_HEIGHT,
                        height: CARD_HEIGHT,
                        left: col * (card_width + COLUMN_GAP),
                        width: card_width,
                    });
                    let count = ProjectType::ALL.len() as u16;
                    if i + 1 == count {
                        top += count.div_ceil(CARD_COLUMNS) * CARD_HEIGHT;
                    }
                }
            }
            // timeline and budget share a row when there is room
            Focus::Field(FieldId::Timeline) if !narrow => {
                slots.push(Slot {
                    width: half,
                    ..full(top, field_height(FieldId::Timeline))
                });
            }
            Focus::Field(FieldId::Budget) if !narrow => {
                let height = field_height(FieldId::Budget);
                slots.push(Slot {
                    focus,
                    top,
                    height,
                    left: half + COLUMN_GAP,
                    width: width.saturating_sub(half + COLUMN_GAP),
                });
                top += height;
            }
            Focus::Field(id) => {
                let height = field_height(id);
                slots.push(full(top, height));
                top += height;
            }
            Focus::DropZone => {
                slots.push(full(top, DROP_ZONE_HEIGHT));
                top += DROP_ZONE_HEIGHT + 1;
            }
            Focus::StagedFile(_) => {
                let height = if narrow { 2 } else { 1 };
                slots.push(full(top, height));
                top += height;
            }
            Focus::Terms => {
                top += 1;
                slots.push(full(top, 1));
                top += 2;
            }
            Focus::Back => {
                slots.push(Slot {
                    width: BACK_WIDTH.min(width),
                    ..full(top + 1, BUTTON_HEIGHT)
                });
            }
            Focus::Next | Focus::Submit => {
                let w = PRIMARY_WIDTH.min(width);
                top += 1;
                slots.push(Slot {
                    focus,
                    top,
                    height: BUTTON_HEIGHT,
                    left: width - w,
                    width: w,
                });
                top += BUTTON_HEIGHT;
            }
        }
    }
    slots
}

/// Total rows the step's content needs
pub fn content_height(slots: &[Slot]) -> u16 {
    slots.iter().map(|s| s.top + s.height).max().unwrap_or(0)
}

/// Project a slot onto the screen, clipped to the visible rows.
/// Slots entirely outside the body are skipped.
pub fn place(slot: &Slot, inner: Rect, scroll: u16, reveal_rows: u16) -> Option<Rect> {
    let top = slot.top + reveal_rows;
    let first = top.max(scroll);
    let last = (top + slot.height).min(scroll + inner.height);
    if first >= last || slot.left >= inner.width {
        return None;
    }
    Some(Rect {
        x: inner.x + slot.left,
        y: inner.y + first - scroll,
        width: slot.width.min(inner.width - slot.left),
        height: last - first,
    })
}

/// Placed controls of the current form, as drawn
pub fn visible_controls(app: &App, inner: Rect) -> Vec<(Focus, Rect)> {
    let session = &app.state.session;
    let step = session.current_step();
    let reveal = app.state.reveal.offset_rows(step, app.now);
    form_slots(step, session.stager.len(), inner.width)
        .iter()
        .filter_map(|slot| {
            place(slot, inner, app.state.scroll_offset, reveal).map(|r| (slot.focus, r))
        })
        .collect()
}

/// Smallest scroll offset change that brings `focus` fully into view
pub fn scroll_to_show(slots: &[Slot], focus: Focus, scroll: u16, visible_rows: u16) -> u16 {
    let Some(slot) = slots.iter().find(|s| s.focus == focus) else {
        return scroll;
    };
    if slot.top < scroll {
        slot.top
    } else if slot.top + slot.height > scroll + visible_rows {
        (slot.top + slot.height).saturating_sub(visible_rows)
    } else {
        scroll
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Draw the header: pulsing title and step indicators
pub fn draw_header(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let title_style = if app.pulse.is_dimmed() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    let title = Paragraph::new(Line::from(Span::styled(" Start Your Project", title_style)));
    frame.render_widget(
        title,
        Rect {
            height: 1,
            ..layout.header
        },
    );

    for (def, state) in app.state.session.indicators() {
        let (marker, style) = match state {
            IndicatorState::Completed => ("✓", Style::default().fg(Color::Green)),
            IndicatorState::Active => (
                "●",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            IndicatorState::Upcoming => ("○", Style::default().fg(Color::DarkGray)),
        };
        let line = Line::from(vec![
            Span::styled(format!(" {marker} {} ", def.number), style),
            Span::styled(def.title, style),
        ]);
        frame.render_widget(Paragraph::new(line), layout.indicators[def.number - 1]);
    }

    let border = Rect {
        y: layout.header.y + layout.header.height.saturating_sub(1),
        height: 1,
        ..layout.header
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
        border,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_view_hints(app);
    let footer = format!("© {} ", chrono::Local::now().year());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(footer.chars().count() as u16),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {hints}"),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(footer, Style::default().fg(Color::DarkGray))),
        chunks[1],
    );
}

/// Get key hints for the current view
fn get_view_hints(app: &App) -> &'static str {
    if app.state.browse_prompt.is_some() {
        return "Enter: stage files | Esc: cancel";
    }
    match app.state.current_view {
        View::Splash => "Press any key to skip",
        View::Success => "Enter/q: quit",
        View::Form => match app.state.focus {
            Focus::TypeOption(_) => "Tab: next | Space: select | Ctrl+N: next step | Ctrl+C: quit",
            Focus::Field(id) if app.state.session.form.field(id).is_choice() => {
                "←/→: change | Tab: next | Ctrl+N/P: next/prev step | Ctrl+C: quit"
            }
            Focus::Field(_) => "Type to edit | Tab: next | Ctrl+N/P: next/prev step | Ctrl+C: quit",
            Focus::DropZone => "Drop or paste files | Enter: browse | Tab: next",
            Focus::StagedFile(_) => "Del: remove file | Tab: next",
            Focus::Terms => "Space: toggle | Ctrl+S: submit | Tab: next",
            Focus::Back | Focus::Next | Focus::Submit => "Enter: activate | Tab: next | Ctrl+C: quit",
        },
    }
}
