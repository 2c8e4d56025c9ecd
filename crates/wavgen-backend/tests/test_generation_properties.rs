//! Property tests over generated streams.

use proptest::prelude::*;
use wavgen_backend::synthesis::saw::SawGenerator;
use wavgen_backend::synthesis::{SamplePosition, SignalGenerator};
use wavgen_backend::{extract_payload, generate_to_vec, MAX_LEVEL};
use wavgen_spec::{
    cycle_length, gain_from_levels, MarkerConfig, SampleFormat, WaveformConfig, WaveformType,
};

fn supported_format() -> impl Strategy<Value = SampleFormat> {
    prop_oneof![
        Just(SampleFormat::Int16),
        Just(SampleFormat::Int24),
        Just(SampleFormat::Int32),
        Just(SampleFormat::Float32),
    ]
}

fn waveform() -> impl Strategy<Value = WaveformType> {
    proptest::sample::select(WaveformType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn payload_size_is_exact(
        waveform in waveform(),
        format in supported_format(),
        channels in 1u16..=8,
        samples in 1u64..400,
    ) {
        let config = WaveformConfig::builder(waveform)
            .format(format)
            .channels(channels)
            .samples(samples)
            .frequency(1000)
            .build();
        let (wav, report) = generate_to_vec(&config).unwrap();
        let expected = samples * channels as u64 * format.bytes_per_sample() as u64;
        prop_assert_eq!(report.payload_bytes, expected);
        prop_assert_eq!(extract_payload(&wav).map(|p| p.len() as u64), Some(expected));
    }

    #[test]
    fn identical_configs_hash_identically(
        waveform in waveform(),
        channels in 1u16..=4,
        uncorrelated in any::<bool>(),
    ) {
        let config = WaveformConfig::builder(waveform)
            .channels(channels)
            .samples(256)
            .uncorrelated(uncorrelated)
            .build();
        let (a, report_a) = generate_to_vec(&config).unwrap();
        let (b, report_b) = generate_to_vec(&config).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(report_a.pcm_hash, report_b.pcm_hash);
    }

    #[test]
    fn nyquist_cycle_is_never_zero(rate in 2u32..=192_000) {
        let frequency = rate / 2;
        prop_assert!(cycle_length(rate, frequency) >= 2);
    }

    #[test]
    fn saw_steps_then_wraps_to_negative_peak(cycle in 2u32..2000) {
        let generator = SawGenerator::new(cycle);
        let step = generator.step();
        let peak = generator.peak();
        let mut generator = generator;

        let mut previous = generator.generate(&SamplePosition::new(0, 0, 1)) as i64;
        for index in 1..(3 * cycle as u64) {
            let value = generator.generate(&SamplePosition::new(index, 0, 1)) as i64;
            if previous + step > peak {
                prop_assert_eq!(value, -peak);
            } else {
                prop_assert_eq!(value, previous + step);
            }
            prop_assert!(value.abs() <= MAX_LEVEL as i64);
            previous = value;
        }
    }

    #[test]
    fn gain_never_amplifies(
        align in -120.0f64..10.0,
        peak in -60.0f64..40.0,
        power in 0u32..64,
    ) {
        let gain = gain_from_levels(align, peak, power);
        prop_assert!(gain <= 1.0);
        prop_assert!(gain > 0.0);
    }

    #[test]
    fn markers_tag_every_sample(
        waveform in proptest::sample::select(vec![
            WaveformType::Counter,
            WaveformType::Silence,
            WaveformType::Steps,
        ]),
        channels in 1u16..=8,
        msb in any::<bool>(),
    ) {
        let markers = if msb { MarkerConfig::msb() } else { MarkerConfig::lsb() };
        let config = WaveformConfig::builder(waveform)
            .channels(channels)
            .samples(20)
            .markers(markers)
            .build();
        let (wav, _) = generate_to_vec(&config).unwrap();
        let payload = extract_payload(&wav).unwrap();
        let byte = if msb { 3 } else { 0 };
        for (i, sample) in payload.chunks(4).enumerate() {
            let channel = (i % channels as usize) as u8;
            prop_assert_eq!(sample[byte], 0xC1 + channel);
        }
    }
}
