//! Symmetric saw-tooth.
//!
//! The ramp rises by a constant step from `-peak` to `+peak` and then wraps
//! straight back to `-peak`, so the waveform has no DC content. Step and peak
//! are derived from the cycle length so that one cycle is exactly `cycle`
//! samples long.

use crate::sample::MAX_LEVEL;

use super::{SamplePosition, SignalGenerator};

/// Saw-tooth generator.
#[derive(Debug, Clone)]
pub struct SawGenerator {
    step: i64,
    peak: i64,
    current: i64,
}

impl SawGenerator {
    /// Creates a saw-tooth with a cycle of `cycle` samples (at least 2).
    pub fn new(cycle: u32) -> Self {
        let intervals = cycle.max(2) as i64 - 1;
        let step = 2 * (MAX_LEVEL as i64 / intervals);
        Self {
            step,
            peak: step * intervals / 2,
            current: 0,
        }
    }

    /// Increment between consecutive samples.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Largest value produced; the smallest is its negation.
    pub fn peak(&self) -> i64 {
        self.peak
    }
}

impl SignalGenerator for SawGenerator {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        let value = self.current as i32;
        if position.is_frame_last() {
            let next = self.current + self.step;
            self.current = if next > self.peak { -self.peak } else { next };
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::render;

    #[test]
    fn test_cycle_length_matches() {
        let mut generator = SawGenerator::new(48);
        let samples = render(&mut generator, 48 * 4, 1);
        // After the first wrap the sequence repeats every 48 samples.
        let first_wrap = samples
            .windows(2)
            .position(|w| w[1] < w[0])
            .map(|p| p + 1)
            .unwrap();
        let tail = &samples[first_wrap..];
        assert_eq!(tail[..48], tail[48..96]);
    }

    #[test]
    fn test_wraps_to_negative_peak() {
        let generator = SawGenerator::new(5);
        let peak = generator.peak() as i32;
        let mut generator = generator;
        let samples = render(&mut generator, 8, 1);
        let step = (2 * (MAX_LEVEL / 4)) as i64;
        assert_eq!(
            samples,
            vec![
                0,
                step as i32,
                peak,
                -peak,
                (-peak as i64 + step) as i32,
                0,
                step as i32,
                peak
            ]
        );
    }

    #[test]
    fn test_nyquist_full_scale() {
        let mut generator = SawGenerator::new(2);
        let samples = render(&mut generator, 5, 1);
        assert_eq!(samples, vec![0, -MAX_LEVEL, MAX_LEVEL, -MAX_LEVEL, MAX_LEVEL]);
    }

    #[test]
    fn test_frames_share_value() {
        let mut generator = SawGenerator::new(10);
        let samples = render(&mut generator, 20, 2);
        for frame in samples.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn test_peak_never_exceeds_full_scale() {
        for cycle in 2..500 {
            let generator = SawGenerator::new(cycle);
            assert!(generator.peak() <= MAX_LEVEL as i64, "cycle {}", cycle);
        }
    }
}
