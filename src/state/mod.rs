//! Application state module

mod app_state;
pub mod forms;
mod notification;
mod pulse;
mod reveal;
mod session;
mod splash_state;
mod staging;
mod submission;

pub use app_state::*;
pub use notification::*;
pub use pulse::*;
pub use reveal::*;
pub use session::*;
pub use splash_state::*;
pub use staging::*;
pub use submission::*;
