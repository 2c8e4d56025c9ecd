//! White and pink noise.
//!
//! Both colours draw from the Park-Miller generator seeded with a fixed
//! constant. Unless uncorrelated noise is requested, one value is drawn per
//! frame and repeated on every channel.

use crate::rng::{create_rng, Lehmer31, MODULUS};

use super::{SamplePosition, SignalGenerator};

/// Centre of the generator's output range.
const WHITE_OFFSET: i64 = (MODULUS / 2) as i64;

/// White noise generator.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    rng: Lehmer31,
    uncorrelated: bool,
    frame_value: i32,
}

impl WhiteNoise {
    /// Creates a white noise generator.
    pub fn new(uncorrelated: bool) -> Self {
        Self {
            rng: create_rng(),
            uncorrelated,
            frame_value: 0,
        }
    }

    fn draw(&mut self) -> i32 {
        ((self.rng.next_raw() as i64 - WHITE_OFFSET) * 2) as i32
    }
}

impl SignalGenerator for WhiteNoise {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        if self.uncorrelated || position.is_frame_leader() {
            self.frame_value = self.draw();
        }
        self.frame_value
    }
}

/// Paul Kellet's refined pink noise filter (accuracy within +/-0.05dB above 9.2Hz).
#[derive(Debug, Clone, Default)]
pub struct PinkFilter {
    b: [f64; 7],
}

impl PinkFilter {
    /// Clears the filter taps.
    pub fn reset(&mut self) {
        self.b = [0.0; 7];
    }

    /// Filters one white sample.
    pub fn process(&mut self, white: f64) -> f64 {
        let b = &mut self.b;
        b[0] = 0.99886 * b[0] + white * 0.0555179;
        b[1] = 0.99332 * b[1] + white * 0.0750759;
        b[2] = 0.96900 * b[2] + white * 0.1538520;
        b[3] = 0.86650 * b[3] + white * 0.3104856;
        b[4] = 0.55000 * b[4] + white * 0.5329522;
        b[5] = -0.7616 * b[5] - white * 0.0168980;
        let pink = b.iter().sum::<f64>() + white * 0.5362;
        b[6] = white * 0.115926;
        pink
    }
}

/// Pink noise generator.
#[derive(Debug, Clone)]
pub struct PinkNoise {
    rng: Lehmer31,
    filter: PinkFilter,
    uncorrelated: bool,
    frame_value: i32,
}

impl PinkNoise {
    /// Gain compensation applied to the filter output.
    pub const OUTPUT_DIVISOR: f64 = 5.0;

    /// Creates a pink noise generator.
    pub fn new(uncorrelated: bool) -> Self {
        Self {
            rng: create_rng(),
            filter: PinkFilter::default(),
            uncorrelated,
            frame_value: 0,
        }
    }

    fn draw(&mut self) -> i32 {
        let white = self.rng.next_raw() as f64 - MODULUS as f64 / 2.0;
        (self.filter.process(white) / Self::OUTPUT_DIVISOR) as i32
    }
}

impl SignalGenerator for PinkNoise {
    fn generate(&mut self, position: &SamplePosition) -> i32 {
        if position.index == 0 && position.channel == 0 {
            self.filter.reset();
        }
        if self.uncorrelated || position.is_frame_leader() {
            self.frame_value = self.draw();
        }
        self.frame_value
    }
}
