//! Sample finalization: level, format conversion, markers, narrowing.
//!
//! The stages always run in this order. Level scaling only applies to the
//! audio waveforms; markers only apply to the diagnostic and noise waveforms
//! on integer output.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use wavgen_spec::{MarkerConfig, SampleFormat, WaveformConfig, WaveformType};

use crate::error::{GenerateError, GenerateResult};
use crate::markers::inject_marker;
use crate::sample::{int_to_float, Sample};

/// Gains this close to unity are not applied.
pub const UNITY_GAIN_TOLERANCE: f64 = 0.0001;

/// Mutable per-run state threaded through the generation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationState {
    /// Current frame index.
    pub index: u64,
    /// Current channel.
    pub channel: u16,
    /// Most recent finalized sample.
    pub sample: Sample,
    /// Linear gain for this run.
    pub gain: f64,
}

impl GenerationState {
    /// Creates the state for a run with the given gain.
    pub fn new(gain: f64) -> Self {
        Self {
            index: 0,
            channel: 0,
            sample: Sample::default(),
            gain,
        }
    }
}

/// Applies the finalization stages for one configuration.
#[derive(Debug, Clone)]
pub struct Finalizer {
    waveform: WaveformType,
    format: SampleFormat,
    markers: MarkerConfig,
    gain: f64,
}

impl Finalizer {
    /// Creates a finalizer for a configuration.
    pub fn new(config: &WaveformConfig) -> Self {
        Self {
            waveform: config.waveform,
            format: config.format,
            markers: config.markers,
            gain: config.gain,
        }
    }

    /// Whether level scaling changes samples at all.
    pub fn applies_gain(&self) -> bool {
        self.waveform.permits_level() && (self.gain - 1.0).abs() > UNITY_GAIN_TOLERANCE
    }

    /// Stage 1: level scaling.
    pub fn level(&self, raw: i32) -> i32 {
        if !self.applies_gain() {
            return raw;
        }
        (raw as f64 * self.gain).round() as i32
    }

    /// Stage 2: conversion to the float domain for float output.
    pub fn convert(&self, value: i32) -> Sample {
        if self.format.is_float() {
            Sample::Float(int_to_float(value))
        } else {
            Sample::Int(value)
        }
    }

    /// Stage 3: channel marker injection.
    pub fn mark(&self, sample: Sample, channel: u16) -> Sample {
        match sample {
            Sample::Int(value) if self.markers.enabled && self.waveform.permits_markers() => {
                Sample::Int(inject_marker(value, channel, self.markers.position, self.format))
            }
            other => other,
        }
    }

    /// Stage 4: narrowing and little-endian serialization. Returns bytes written.
    pub fn write<W: Write>(&self, sample: Sample, writer: &mut W) -> GenerateResult<usize> {
        match self.format {
            SampleFormat::Float32 => writer.write_f32::<LittleEndian>(sample.as_f32())?,
            SampleFormat::Int32 => writer.write_i32::<LittleEndian>(sample.as_i32())?,
            SampleFormat::Int24 => writer.write_i24::<LittleEndian>(sample.as_i32() >> 8)?,
            SampleFormat::Int16 => writer.write_i16::<LittleEndian>((sample.as_i32() >> 16) as i16)?,
            SampleFormat::Int8 => {
                return Err(GenerateError::UnsupportedNarrowing {
                    bits: self.format.bits_per_sample(),
                })
            }
        }
        Ok(self.format.bytes_per_sample() as usize)
    }

    /// Runs all stages on a raw generator sample and writes it.
    pub fn finalize<W: Write>(
        &self,
        state: &mut GenerationState,
        raw: i32,
        writer: &mut W,
    ) -> GenerateResult<usize> {
        let leveled = self.level(raw);
        let converted = self.convert(leveled);
        state.sample = self.mark(converted, state.channel);
        self.write(state.sample, writer)
    }
}
