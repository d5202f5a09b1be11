//! Splash-to-main transition
//!
//! The app starts in [`LaunchPhase::Splash`] and moves to
//! [`LaunchPhase::Main`] once, after a fixed delay. There is no retry and no
//! way back.

use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Default splash duration
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LaunchPhase {
    #[default]
    Splash,
    Main,
}

/// One-shot deferred transition out of the splash
#[derive(Debug, Clone, Copy)]
pub struct Launcher {
    delay: Duration,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_SPLASH_DELAY)
    }
}

impl Launcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the splash, then report the phase to switch to
    pub async fn run(self) -> LaunchPhase {
        tokio::time::sleep(self.delay).await;
        info!(delay_ms = self.delay.as_millis() as u64, "Splash finished");
        LaunchPhase::Main
    }
}
