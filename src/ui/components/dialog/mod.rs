//! Dialog components for TUI

mod base;
mod browse_dialog;

pub use browse_dialog::render_browse_dialog;
