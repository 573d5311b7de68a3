//! Input events and the sources that produce them

mod source;
mod traits;

pub use source::CrosstermEventSource;
pub use traits::{EventSource, FormEvent};

#[cfg(test)]
pub use traits::MockEventSource;
