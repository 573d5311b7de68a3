//! Trait abstraction for the input event source to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use std::time::Duration;

/// Input the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Key(KeyEvent),
    /// Click, press, release, movement and scroll
    Mouse(MouseEvent),
    /// Bracketed paste. Terminals deliver dragged files this way.
    Paste(String),
    Resize(u16, u16),
    /// Nothing arrived before the timeout
    Tick,
}

/// Source of input events, enabling scripted input in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send {
    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` means the source is exhausted and the app should stop.
    async fn next_event(&mut self, timeout: Duration) -> Result<Option<FormEvent>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_mock_source_passes_timeout_through() {
        let mut source = MockEventSource::new();
        source
            .expect_next_event()
            .with(eq(Duration::from_millis(16)))
            .times(1)
            .returning(|_| Ok(Some(FormEvent::Tick)));

        let event = tokio_test::block_on(source.next_event(Duration::from_millis(16))).unwrap();
        assert_eq!(event, Some(FormEvent::Tick));
    }

    #[test]
    fn test_mock_source_can_report_exhaustion() {
        let mut source = MockEventSource::new();
        source.expect_next_event().returning(|_| Ok(None));

        let event = tokio_test::block_on(source.next_event(Duration::ZERO)).unwrap();
        assert!(event.is_none());
    }
}
