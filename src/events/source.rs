//! Terminal event source backed by crossterm

use super::traits::{EventSource, FormEvent};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

/// Reads events from the terminal. Never exhausted.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

/// Map a raw terminal event. Key releases and focus changes are dropped.
fn map_event(event: Event) -> Option<FormEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(FormEvent::Key(key)),
        Event::Mouse(mouse) => Some(FormEvent::Mouse(mouse)),
        Event::Paste(text) => Some(FormEvent::Paste(text)),
        Event::Resize(width, height) => Some(FormEvent::Resize(width, height)),
        _ => None,
    }
}

#[async_trait]
impl EventSource for CrosstermEventSource {
    async fn next_event(&mut self, timeout: Duration) -> Result<Option<FormEvent>> {
        if event::poll(timeout)? {
            Ok(Some(map_event(event::read()?).unwrap_or(FormEvent::Tick)))
        } else {
            Ok(Some(FormEvent::Tick))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_maps_paste() {
        assert_eq!(
            map_event(Event::Paste("/tmp/a.png".into())),
            Some(FormEvent::Paste("/tmp/a.png".into()))
        );
    }

    #[test]
    fn test_maps_resize() {
        assert_eq!(
            map_event(Event::Resize(100, 40)),
            Some(FormEvent::Resize(100, 40))
        );
    }

    #[test]
    fn test_drops_key_release() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(key)), None);
    }

    #[test]
    fn test_drops_focus_events() {
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
