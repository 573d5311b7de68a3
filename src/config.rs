//! Configuration handling for the intake form

use crate::state::{LogoStyle, SessionOptions};
use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration. Every key is optional; missing keys use defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct IntakeConfig {
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long notifications stay up, in milliseconds
    pub notification_ttl_ms: Option<u64>,
    /// Show the loading screen on startup
    pub show_splash: Option<bool>,
    /// Pulse the title in the header
    pub pulse_enabled: Option<bool>,
    pub logo_style: Option<LogoStyle>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "agency", "project-intake")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: IntakeConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn session_options(&self) -> SessionOptions {
        let defaults = SessionOptions::default();
        SessionOptions {
            submit_delay: self
                .submit_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
            notification_ttl: self
                .notification_ttl_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.notification_ttl),
        }
    }

    pub fn show_splash(&self) -> bool {
        self.show_splash.unwrap_or(true)
    }

    pub fn pulse_enabled(&self) -> bool {
        self.pulse_enabled.unwrap_or(true)
    }

    pub fn logo_style(&self) -> LogoStyle {
        self.logo_style.unwrap_or_default()
    }
}
