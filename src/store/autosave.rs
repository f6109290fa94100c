//! Debounced autosave. Every edit pushes the pending fire time out by the
//! full delay; the save fires once per quiesced burst of edits. Time is
//! injected so tests advance a simulated clock instead of sleeping.

use std::time::{Duration, Instant};

use crate::config::AutosaveConfig;

#[derive(Debug)]
pub struct AutosaveTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AutosaveTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Timer with the configured delay (2 s by default).
    pub fn from_config(config: &AutosaveConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms))
    }

    /// Record an edit: the pending fire time resets to `now + delay`,
    /// cancelling any earlier deadline.
    pub fn note_edit(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True while a save is scheduled and has not fired.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Check whether the save should fire. Returns true at most once per
    /// burst; the deadline clears on fire and stays clear until the next
    /// edit.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn fires_after_quiet_period() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.note_edit(t0);
        assert!(!timer.poll(t0 + Duration::from_millis(1999)));
        assert!(timer.poll(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn each_edit_resets_the_deadline() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.note_edit(t0);
        timer.note_edit(t0 + Duration::from_millis(1500));
        // The original deadline has passed but the burst is still going.
        assert!(!timer.poll(t0 + Duration::from_millis(2000)));
        assert!(timer.poll(t0 + Duration::from_millis(3500)));
    }

    #[test]
    fn fires_once_per_burst() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.note_edit(t0);
        assert!(timer.poll(t0 + DELAY));
        assert!(!timer.poll(t0 + DELAY + Duration::from_secs(10)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn configured_delay_reaches_the_timer() {
        let config = AutosaveConfig { delay_ms: 500 };
        let mut timer = AutosaveTimer::from_config(&config);
        let t0 = Instant::now();

        timer.note_edit(t0);
        assert!(!timer.poll(t0 + Duration::from_millis(499)));
        assert!(timer.poll(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn cancel_drops_the_pending_save() {
        let mut timer = AutosaveTimer::new(DELAY);
        let t0 = Instant::now();

        timer.note_edit(t0);
        timer.cancel();
        assert!(!timer.poll(t0 + DELAY));
    }
}
