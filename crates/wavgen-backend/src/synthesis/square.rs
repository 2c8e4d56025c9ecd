//! Full-scale square wave.

use crate::sample::MAX_LEVEL;

use super::{SamplePosition, SignalGenerator};

/// Square generator.
///
/// Starts at `+MAX_LEVEL` and flips polarity every half cycle. The frame
/// leader decides the value for the whole frame.
#[derive(Debug, Clone)]
pub struct SquareGenerator {
    half_cycle: u64,
    positive: bool,
    frame_value: i32,
}

impl SquareGenerator {
    /// Creates a square generator with a cycle of `cycle` samples.
    pub fn new(cycle: u32) -> Self {
        Self {
            half_cycle: (cycle / 2) as u64,
            positive: true,
            frame_value: MAX_LEVEL,
        }
    }
}

impl SignalGenerator for SquareGenerator {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        if position.is_frame_leader() {
            self.frame_value = if self.positive { MAX_LEVEL } else { -MAX_LEVEL };
            if self.half_cycle > 0 && position.index % self.half_cycle == self.half_cycle - 1 {
                self.positive = !self.positive;
            }
        }
        self.frame_value
    }
}
