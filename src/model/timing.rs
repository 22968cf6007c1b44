//! Rolling average of update cycle durations

use std::time::Duration;

use crate::io::configuration::TIMING_SAMPLES;

/// Averages the most recent [`TIMING_SAMPLES`] update durations
///
/// Slots that have not been filled yet count as zero, so the average
/// ramps up over the first few cycles.
#[derive(Debug, Clone)]
pub struct UpdateTimer {
    samples: [Duration; TIMING_SAMPLES],
    index: usize,
    sum: Duration,
}

impl Default for UpdateTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateTimer {
    /// Create a timer with every sample at zero
    pub const fn new() -> Self {
        Self {
            samples: [Duration::ZERO; TIMING_SAMPLES],
            index: 0,
            sum: Duration::ZERO,
        }
    }

    /// Record one cycle and return the new rolling average
    pub fn record(&mut self, elapsed: Duration) -> Duration {
        if let Some(slot) = self.samples.get_mut(self.index) {
            self.sum = self.sum.saturating_sub(*slot).saturating_add(elapsed);
            *slot = elapsed;
        }
        self.index = (self.index + 1) % TIMING_SAMPLES;
        self.average()
    }

    /// Current rolling average
    pub fn average(&self) -> Duration {
        self.sum / TIMING_SAMPLES as u32
    }
}
