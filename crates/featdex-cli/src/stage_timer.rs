//! # Stage Timer Utils.

use std::time::Instant;

/// Wall-clock timer for one named stage of a run.
///
/// Logs the elapsed time when dropped, so wrapping a block in a timer
/// covers every exit path from it.
pub struct StageTimer {
    label: &'static str,
    start: Instant,
}

impl StageTimer {
    /// Start timing a stage.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Elapsed seconds since the timer started.
    pub fn secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        log::debug!("elapsed {}: {:.3} s", self.label, self.secs());
    }
}
