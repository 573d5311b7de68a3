//! Decorative title pulse driven by a background task

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Interval between pulses
pub const PULSE_PERIOD: Duration = Duration::from_millis(85);
/// How long the title stays dimmed within each pulse
pub const PULSE_DIM: Duration = Duration::from_millis(80);

/// Handle to the pulse task. Dropping it (or calling [`PulseHandle::stop`])
/// aborts the task, so the timer never outlives the app.
#[derive(Debug, Default)]
pub struct PulseHandle {
    dimmed: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl PulseHandle {
    /// A handle with no task; the title is always drawn bright
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Spawn the pulse on the current tokio runtime
    pub fn spawn(period: Duration, dim_for: Duration) -> Self {
        let dimmed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dimmed);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                flag.store(true, Ordering::Relaxed);
                tokio::time::sleep(dim_for).await;
                flag.store(false, Ordering::Relaxed);
            }
        });
        tracing::debug!(?period, "Title pulse started");

        Self {
            dimmed,
            task: Some(task),
        }
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the task and reset the title to bright
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Title pulse stopped");
        }
        self.dimmed.store(false, Ordering::Relaxed);
    }
}

impl Drop for PulseHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_never_dimmed() {
        let pulse = PulseHandle::disabled();
        assert!(!pulse.is_running());
        assert!(!pulse.is_dimmed());
    }

    #[tokio::test]
    async fn test_spawned_pulse_runs_until_stopped() {
        let mut pulse = PulseHandle::spawn(Duration::from_millis(5), Duration::from_millis(2));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(pulse.is_running());

        pulse.stop();
        assert!(!pulse.is_running());
        assert!(!pulse.is_dimmed());
    }

    #[tokio::test]
    async fn test_drop_aborts_task() {
        let pulse = PulseHandle::spawn(PULSE_PERIOD, PULSE_DIM);
        let flag = Arc::clone(&pulse.dimmed);
        drop(pulse);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!flag.load(Ordering::Relaxed));
    }
}
