//! Digital silence.

use super::{SamplePosition, SignalGenerator};

/// Always produces zero. With markers enabled, only the marker bytes are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilenceGenerator;

impl SignalGenerator for SilenceGenerator {
    fn generate(&mut self, _position: &SamplePosition) -> i32 {
        0
    }
}
