//! Entrance animation for form groups
//!
//! The first time a step is shown its groups start slightly lower and
//! dimmed, then ease into place.

use std::collections::HashMap;
use std::time::{Duration, Instant};

const REVEAL_DURATION: Duration = Duration::from_millis(500);
/// Rows a group starts below its resting position
const REVEAL_ROWS: f32 = 2.0;

#[derive(Debug, Default)]
pub struct RevealState {
    shown_at: HashMap<usize, Instant>,
}

impl RevealState {
    /// Record the first time `step` is displayed; later calls are ignored
    pub fn mark_shown(&mut self, step: usize, now: Instant) {
        self.shown_at.entry(step).or_insert(now);
    }

    /// Eased progress in `0.0..=1.0`. Steps never shown count as done.
    pub fn progress(&self, step: usize, now: Instant) -> f32 {
        match self.shown_at.get(&step) {
            Some(start) => {
                let t = now.saturating_duration_since(*start).as_secs_f32()
                    / REVEAL_DURATION.as_secs_f32();
                simple_easing::cubic_out(t.min(1.0))
            }
            None => 1.0,
        }
    }

    /// Remaining downward offset in rows
    pub fn offset_rows(&self, step: usize, now: Instant) -> u16 {
        ((1.0 - self.progress(step, now)) * REVEAL_ROWS).round() as u16
    }

    pub fn is_settled(&self, step: usize, now: Instant) -> bool {
        self.progress(step, now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_offset_and_settles() {
        let start = Instant::now();
        let mut reveal = RevealState::default();
        reveal.mark_shown(1, start);

        assert_eq!(reveal.offset_rows(1, start), 2);
        assert!(!reveal.is_settled(1, start));
        assert_eq!(reveal.offset_rows(1, start + REVEAL_DURATION), 0);
        assert!(reveal.is_settled(1, start + REVEAL_DURATION));
    }

    #[test]
    fn test_only_first_showing_animates() {
        let start = Instant::now();
        let mut reveal = RevealState::default();
        reveal.mark_shown(2, start);
        let later = start + Duration::from_secs(3);
        reveal.mark_shown(2, later);
        assert!(reveal.is_settled(2, later));
    }

    #[test]
    fn test_unknown_step_is_settled() {
        let reveal = RevealState::default();
        assert_eq!(reveal.offset_rows(3, Instant::now()), 0);
    }
}
