//! Transient, auto-dismissing notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notification stays fully visible
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);
/// Slide in / slide out animation length
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    /// Horizontal slide progress in `0.0..=1.0`, where 1.0 is fully on
    /// screen. Eases in after creation and back out once the lifetime ends.
    pub fn visibility(&self, now: Instant, ttl: Duration) -> f32 {
        let age = now.saturating_duration_since(self.created_at);
        let slide = SLIDE_DURATION.as_secs_f32();

        if age < SLIDE_DURATION {
            simple_easing::cubic_out(age.as_secs_f32() / slide)
        } else if age < ttl {
            1.0
        } else {
            let out = (age - ttl).as_secs_f32() / slide;
            1.0 - simple_easing::cubic_in(out.min(1.0))
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl + SLIDE_DURATION
    }
}

/// Queue of live notifications, oldest first.
///
/// Dismissal is fire-and-forget: entries are dropped by [`prune`] once they
/// have outlived their lifetime plus the slide-out.
///
/// [`prune`]: NotificationQueue::prune
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 0,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        let message = message.into();
        tracing::debug!(%message, ?kind, "Notification");
        self.items.push_back(Notification {
            id: self.next_id,
            message,
            kind,
            created_at: now,
        });
        self.next_id += 1;
    }

    pub fn push_error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, NotificationKind::Error, now);
    }

    pub fn push_info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, NotificationKind::Info, now);
    }

    /// Drop every expired notification
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired(now, ttl));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent message, if any
    pub fn latest(&self) -> Option<&str> {
        self.items.back().map(|n| n.message.as_str())
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
