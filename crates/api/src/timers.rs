//! Fixed-delay screen transitions
//!
//! The profile-analysis and thank-you screens advance automatically after a
//! fixed delay. A timer is tied to a cancellation token owned by the screen;
//! when the screen is torn down the token is cancelled and a timer firing
//! afterwards is a no-op.

use std::time::Duration;

use instaloan_domain::constants::{PROFILE_ANALYSIS_DELAY_SECS, THANK_YOU_DELAY_SECS};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Delay before the profile-analysis screen advances.
pub fn profile_analysis_delay() -> Duration {
    Duration::from_secs(PROFILE_ANALYSIS_DELAY_SECS)
}

/// Delay before the thank-you screen advances.
pub fn thank_you_delay() -> Duration {
    Duration::from_secs(THANK_YOU_DELAY_SECS)
}

/// One-shot transition timer bound to a screen's lifetime.
pub struct TransitionTimer {
    token: CancellationToken,
}

impl TransitionTimer {
    pub fn new() -> Self {
        Self { token: CancellationToken::new() }
    }

    /// Run `on_fire` after `delay` unless the screen is torn down first.
    pub fn schedule<F>(&self, delay: Duration, on_fire: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => on_fire(),
            }
        })
    }

    /// Cancel any pending transition. Called on screen teardown.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Default for TransitionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TransitionTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
