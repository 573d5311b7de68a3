//! Reusable UI components

mod button;
mod dialog;
mod notification;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_browse_dialog;
pub use notification::render_notifications;
