use std::time::Duration;

/// Countdown driving the post-reveal auto-advance. Advanced by the ticks
/// the presentation layer feeds into the session, so tests can control
/// time exactly. Cancellation is synchronous and final: a cancelled timer
/// never reports as elapsed, even if ticks keep arriving.
#[derive(Debug)]
pub struct AdvanceTimer {
    time_elapsed: Duration,
    time_to_wait: Duration,
    cancelled: bool,
}

impl AdvanceTimer {
    pub fn new(duration: Duration) -> Self {
        AdvanceTimer {
            time_elapsed: Duration::default(),
            time_to_wait: duration,
            cancelled: false,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if !self.cancelled {
            self.time_elapsed += dt;
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_over(&self) -> bool {
        !self.cancelled && self.time_elapsed >= self.time_to_wait
    }
}
