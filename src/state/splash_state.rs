//! Loading screen animation state

use serde::Deserialize;
use std::time::{Duration, Instant};

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo and spinner shown
    Display,
    /// Logo sliding off the top
    ScrollUp,
    /// Animation finished, the form takes over
    Complete,
}

/// Logo style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    /// Large block letters
    #[default]
    Block,
    /// Single line wordmark for small terminals
    Plain,
}

/// Loading screen animation state
#[derive(Debug)]
pub struct SplashState {
    pub start_time: Instant,
    pub logo_style: LogoStyle,
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
    /// Spinner frame index
    pub spinner_frame: usize,
}

impl SplashState {
    /// How long the loading screen stays up
    const DISPLAY_DURATION: Duration = Duration::from_millis(1500);
    /// Length of the hide animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(500);
    const SPINNER_FRAME: Duration = Duration::from_millis(80);

    pub fn new(logo_style: LogoStyle, now: Instant) -> Self {
        Self {
            start_time: now,
            logo_style,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
            spinner_frame: 0,
        }
    }

    /// Update animation state for the given instant
    pub fn update(&mut self, now: Instant, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        self.spinner_frame = (elapsed.as_millis() / Self::SPINNER_FRAME.as_millis()) as usize;

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress =
                animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}
