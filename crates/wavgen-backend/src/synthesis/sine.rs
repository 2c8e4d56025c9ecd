//! Full-scale sine wave.

use std::f64::consts::PI;

use crate::sample::MAX_LEVEL;

use super::{SamplePosition, SignalGenerator};

/// Value of a full-scale sine at `offset` samples into a cycle of `cycle` samples.
///
/// Rounded to the nearest integer and clamped to [`MAX_LEVEL`].
pub fn sine_value(offset: u64, cycle: u32) -> i32 {
    if cycle == 0 {
        return 0;
    }
    let phase = 2.0 * PI * offset as f64 / cycle as f64;
    let value = (MAX_LEVEL as f64 * phase.sin()).round();
    value.clamp(-(MAX_LEVEL as f64), MAX_LEVEL as f64) as i32
}

/// Sine generator. Stateless apart from its quantised cycle length.
#[derive(Debug, Clone)]
pub struct SineGenerator {
    cycle: u32,
}

impl SineGenerator {
    /// Creates a sine generator with a cycle of `cycle` samples.
    pub fn new(cycle: u32) -> Self {
        Self { cycle }
    }
}

impl SignalGenerator for SineGenerator {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        sine_value(position.index % self.cycle.max(1) as u64, self.cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::render;

    #[test]
    fn test_quarter_points() {
        assert_eq!(sine_value(0, 48), 0);
        assert_eq!(sine_value(12, 48), MAX_LEVEL);
        assert_eq!(sine_value(36, 48), -MAX_LEVEL);
        assert!(sine_value(24, 48).abs() < 4);
    }

    #[test]
    fn test_periodic_in_cycle() {
        let mut generator = SineGenerator::new(48);
        let samples = render(&mut generator, 96, 1);
        assert_eq!(samples[..48], samples[48..]);
    }

    #[test]
    fn test_nyquist_cycle_is_not_empty() {
        let mut generator = SineGenerator::new(2);
        let samples = render(&mut generator, 4, 1);
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|v| v.abs() < 4));
    }

    #[test]
    fn test_zero_cycle_is_silent() {
        assert_eq!(sine_value(5, 0), 0);
    }
}
