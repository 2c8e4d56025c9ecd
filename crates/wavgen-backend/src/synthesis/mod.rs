//! Signal generators, one per waveform type.
//!
//! Each generator owns its state and is created fresh for every run:
//! - `sine` - Full-scale sine wave
//! - `square` - Full-scale square wave
//! - `saw` - Symmetric saw-tooth
//! - `burst` - Periodic bursts of sine cycles
//! - `counter` - Frame counter in the output word's lowest bits
//! - `steps` - Five-level staircase
//! - `silence` - Digital silence
//! - `noise` - White and pink noise
//!
//! Generators that hold per-frame state only advance it on the frame leader
//! (channel 0), so every channel of a frame carries the same value.

pub mod burst;
pub mod counter;
pub mod noise;
pub mod saw;
pub mod silence;
pub mod sine;
pub mod square;
pub mod steps;

use wavgen_spec::{WaveformConfig, WaveformType};

pub use burst::BurstGenerator;
pub use counter::CounterGenerator;
pub use noise::{PinkNoise, WhiteNoise};
pub use saw::SawGenerator;
pub use silence::SilenceGenerator;
pub use sine::{sine_value, SineGenerator};
pub use square::SquareGenerator;
pub use steps::StepsGenerator;

/// Where a sample sits in the interleaved stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePosition {
    /// Frame (per-channel sample) index.
    pub index: u64,
    /// Channel within the frame.
    pub channel: u16,
    /// Total channels per frame.
    pub channels: u16,
}

impl SamplePosition {
    /// Creates a position.
    pub fn new(index: u64, channel: u16, channels: u16) -> Self {
        Self {
            index,
            channel,
            channels,
        }
    }

    /// Channel 0 owns the frame's state transitions.
    pub fn is_frame_leader(&self) -> bool {
        self.channel == 0
    }

    /// Last channel of the frame.
    pub fn is_frame_last(&self) -> bool {
        self.channel + 1 >= self.channels
    }
}

/// Common trait for all signal generators.
pub trait SignalGenerator {
    /// Produces the raw 32-bit sample for a position.
    ///
    /// Positions must be supplied in stream order: frames ascending and,
    /// within a frame, channels ascending.
    fn generate(&mut self, position: &SamplePosition) -> i32;
}

/// Creates the generator for a configuration.
pub fn create_generator(config: &WaveformConfig) -> Box<dyn SignalGenerator> {
    let cycle = config.cycle_length();
    match config.waveform {
        WaveformType::Sine => Box::new(SineGenerator::new(cycle)),
        WaveformType::Square => Box::new(SquareGenerator::new(cycle)),
        WaveformType::Saw => Box::new(SawGenerator::new(cycle)),
        WaveformType::Burst => Box::new(BurstGenerator::new(
            config.sample_rate,
            cycle,
            config.burst,
        )),
        WaveformType::Counter => Box::new(CounterGenerator::new(config.format, config.markers)),
        WaveformType::Steps => Box::new(StepsGenerator::new()),
        WaveformType::Silence => Box::new(SilenceGenerator),
        WaveformType::White => Box::new(WhiteNoise::new(config.uncorrelated)),
        WaveformType::Pink => Box::new(PinkNoise::new(config.uncorrelated)),
    }
}

/// Runs a generator over `frames` frames, returning interleaved raw samples.
pub fn render(generator: &mut dyn SignalGenerator, frames: u64, channels: u16) -> Vec<i32> {
    let mut out = Vec::with_capacity((frames * channels as u64) as usize);
    for index in 0..frames {
        for channel in 0..channels {
            out.push(generator.generate(&SamplePosition::new(index, channel, channels)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_flags() {
        let first = SamplePosition::new(3, 0, 2);
        assert!(first.is_frame_leader());
        assert!(!first.is_frame_last());

        let last = SamplePosition::new(3, 1, 2);
        assert!(!last.is_frame_leader());
        assert!(last.is_frame_last());

        let mono = SamplePosition::new(0, 0, 1);
        assert!(mono.is_frame_leader() && mono.is_frame_last());
    }

    #[test]
    fn test_every_type_has_a_generator() {
        for waveform in WaveformType::ALL {
            let config = WaveformConfig::builder(waveform).frequency(1000).build();
            let mut generator = create_generator(&config);
            let samples = render(generator.as_mut(), 8, 2);
            assert_eq!(samples.len(), 16, "{}", waveform);
        }
    }

    #[test]
    fn test_correlated_frames_share_values() {
        for waveform in WaveformType::ALL {
            let config = WaveformConfig::builder(waveform).frequency(1000).build();
            let mut generator = create_generator(&config);
            let samples = render(generator.as_mut(), 200, 3);
            for frame in samples.chunks(3) {
                assert!(
                    frame.iter().all(|&v| v == frame[0]),
                    "{} frame {:?}",
                    waveform,
                    frame
                );
            }
        }
    }
}
