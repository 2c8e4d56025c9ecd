//! Frame counter.
//!
//! Counts one quantisation step of the output word per frame so that values are
//! easy to recognise in a hex dump. Every channel of a frame carries the same
//! count. When markers occupy the low byte, the count is moved up by 8 bits to
//! make room for them.

use wavgen_spec::{MarkerConfig, SampleFormat};

use super::{SamplePosition, SignalGenerator};

/// Counter generator.
#[derive(Debug, Clone)]
pub struct CounterGenerator {
    shift: u32,
}

impl CounterGenerator {
    /// Creates a counter for the given output format and marker settings.
    pub fn new(format: SampleFormat, markers: MarkerConfig) -> Self {
        let format_shift = if format.is_float() {
            0
        } else {
            32 - format.bits_per_sample() as u32
        };
        let marker_shift = if markers.in_lsb() { 8 } else { 0 };
        Self {
            shift: format_shift + marker_shift,
        }
    }
}

impl SignalGenerator for CounterGenerator {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        // Widths with no room for the count (8-bit plus low-byte markers) stay at 0.
        (position.index as u32).checked_shl(self.shift).unwrap_or(0) as i32
    }
}
