//! Periodic bursts of sine cycles.
//!
//! Every `period_ms` a burst of `num_cycles` full sine cycles starts; the rest
//! of each period is silent. Useful for latency and polarity measurements.

use wavgen_spec::BurstParams;

use super::sine::sine_value;
use super::{SamplePosition, SignalGenerator};

/// Burst generator.
#[derive(Debug, Clone)]
pub struct BurstGenerator {
    cycle: u32,
    burst_len: u64,
    period_len: u64,
    counter: u64,
    frame_value: i32,
}

impl BurstGenerator {
    /// Creates a burst generator.
    pub fn new(sample_rate: u32, cycle: u32, params: BurstParams) -> Self {
        let period_len = (sample_rate as u64 * params.period_ms as u64 / 1000).max(1);
        Self {
            cycle,
            burst_len: cycle as u64 * params.num_cycles.max(1) as u64,
            period_len,
            counter: 0,
            frame_value: 0,
        }
    }

    /// Samples between the starts of consecutive bursts.
    pub fn period_len(&self) -> u64 {
        self.period_len
    }
}

impl SignalGenerator for BurstGenerator {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        if position.is_frame_leader() {
            if position.index % self.period_len == 0 {
                self.counter = 0;
            }
            self.frame_value = if self.counter < self.burst_len {
                let value = sine_value(self.counter, self.cycle);
                self.counter += 1;
                value
            } else {
                0
            };
        }
        self.frame_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::render;

    fn params(period_ms: u32, num_cycles: u32) -> BurstParams {
        BurstParams {
            period_ms,
            num_cycles,
        }
    }

    #[test]
    fn test_burst_then_silence() {
        // 1kHz at 48kHz: 48-sample cycle, 10ms period = 480 samples.
        let mut generator = BurstGenerator::new(48_000, 48, params(10, 2));
        let samples = render(&mut generator, 960, 1);

        for (i, &value) in samples[..96].iter().enumerate() {
            assert_eq!(value, sine_value(i as u64, 48));
        }
        assert!(samples[96..480].iter().all(|&v| v == 0));
        assert_eq!(samples[..480], samples[480..]);
    }

    #[test]
    fn test_multichannel_bursts_align() {
        let mut generator = BurstGenerator::new(48_000, 48, params(5, 1));
        let samples = render(&mut generator, 480, 4);
        for frame in samples.chunks(4) {
            assert!(frame.iter().all(|&v| v == frame[0]));
        }
        let left: Vec<i32> = samples.iter().step_by(4).copied().collect();
        assert_eq!(left[12], sine_value(12, 48));
        assert_eq!(left[240 + 12], sine_value(12, 48));
    }

    #[test]
    fn test_burst_longer_than_period_restarts() {
        let mut generator = BurstGenerator::new(1000, 100, params(50, 4));
        let samples = render(&mut generator, 100, 1);
        assert_eq!(samples[..50], samples[50..]);
    }

    #[test]
    fn test_period_never_zero() {
        let generator = BurstGenerator::new(100, 10, params(1, 1));
        assert_eq!(generator.period_len(), 1);
    }
}
