//! Five-level staircase: `0, s, 2s, 3s, 4s` with `s = MAX_LEVEL / 4`.

use crate::sample::MAX_LEVEL;

use super::{SamplePosition, SignalGenerator};

/// Number of distinct levels.
pub const NUM_LEVELS: u8 = 5;

/// Height of one step.
pub const STEP_SIZE: i32 = MAX_LEVEL / 4;

/// Steps generator. Holds each level for one frame.
#[derive(Debug, Clone, Default)]
pub struct StepsGenerator {
    level: u8,
}

impl StepsGenerator {
    /// Creates a staircase starting at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignalGenerator for StepsGenerator {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        let value = STEP_SIZE * self.level as i32;
        if position.is_frame_last() {
            self.level = (self.level + 1) % NUM_LEVELS;
        }
        value
    }
}
