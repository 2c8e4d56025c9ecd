//! End-to-end byte-level scenarios for diagnostic waveforms.

use pretty_assertions::assert_eq;
use wavgen_backend::{extract_payload, generate_to_vec, MAX_LEVEL};
use wavgen_spec::{MarkerConfig, SampleFormat, WaveformConfig, WaveformType};

fn payload_words(config: &WaveformConfig) -> Vec<u32> {
    let (wav, _) = generate_to_vec(config).unwrap();
    extract_payload(&wav)
        .unwrap()
        .chunks(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

#[test]
fn test_counter_with_msb_markers() {
    let config = WaveformConfig::builder(WaveformType::Counter)
        .sample_rate(48_000)
        .channels(2)
        .format(SampleFormat::Int32)
        .markers(MarkerConfig::msb())
        .samples(4)
        .build();

    let words = payload_words(&config);
    assert_eq!(
        words[..4],
        [0xC100_0000, 0xC200_0000, 0xC100_0001, 0xC200_0001]
    );
    assert_eq!(words.len(), 8);
    assert_eq!(words[6], 0xC100_0003);
}

#[test]
fn test_silence_with_lsb_markers() {
    let config = WaveformConfig::builder(WaveformType::Silence)
        .markers(MarkerConfig::lsb())
        .samples(3)
        .build();

    assert_eq!(payload_words(&config), vec![0xC1, 0xC1, 0xC1]);
}

#[test]
fn test_counter_lsb_markers_in_byte_zero() {
    let config = WaveformConfig::builder(WaveformType::Counter)
        .channels(2)
        .markers(MarkerConfig::lsb())
        .samples(300)
        .build();

    let (wav, _) = generate_to_vec(&config).unwrap();
    let payload = extract_payload(&wav).unwrap();
    for (i, sample) in payload.chunks(4).enumerate() {
        let channel = (i % 2) as u8;
        let frame = (i / 2) as u32;
        assert_eq!(sample[0], 0xC0 + channel + 1);
        let count = u32::from_le_bytes([sample[0], sample[1], sample[2], sample[3]]) >> 8;
        assert_eq!(count, frame);
    }
}

#[test]
fn test_msb_markers_leave_lower_bytes() {
    let plain = WaveformConfig::builder(WaveformType::Steps)
        .channels(2)
        .samples(10)
        .build();
    let marked = WaveformConfig {
        markers: MarkerConfig::msb(),
        ..plain.clone()
    };

    let plain_words = payload_words(&plain);
    let marked_words = payload_words(&marked);
    for (i, (p, m)) in plain_words.iter().zip(&marked_words).enumerate() {
        assert_eq!(p & 0x00FF_FFFF, m & 0x00FF_FFFF);
        assert_eq!(m >> 24, 0xC1 + (i % 2) as u32);
    }
}

#[test]
fn test_counter_channels_identical_without_markers() {
    let config = WaveformConfig::builder(WaveformType::Counter)
        .channels(2)
        .samples(50)
        .build();
    let words = payload_words(&config);
    for frame in words.chunks(2) {
        assert_eq!(frame[0], frame[1]);
    }
}

#[test]
fn test_steps_five_levels() {
    let config = WaveformConfig::builder(WaveformType::Steps)
        .channels(2)
        .samples(11)
        .build();
    let words = payload_words(&config);
    let s = (MAX_LEVEL / 4) as u32;
    let left: Vec<u32> = words.iter().step_by(2).copied().collect();
    assert_eq!(left, vec![0, s, 2 * s, 3 * s, 4 * s, 0, s, 2 * s, 3 * s, 4 * s, 0]);
    for frame in words.chunks(2) {
        assert_eq!(frame[0], frame[1]);
    }
}

#[test]
fn test_16_bit_counter_counts_lsbs() {
    let config = WaveformConfig::builder(WaveformType::Counter)
        .format(SampleFormat::Int16)
        .samples(5)
        .build();
    let (wav, _) = generate_to_vec(&config).unwrap();
    let values: Vec<i16> = extract_payload(&wav)
        .unwrap()
        .chunks(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_24_bit_silence_with_lsb_markers() {
    let config = WaveformConfig::builder(WaveformType::Silence)
        .format(SampleFormat::Int24)
        .channels(2)
        .markers(MarkerConfig::lsb())
        .samples(2)
        .build();
    let (wav, _) = generate_to_vec(&config).unwrap();
    assert_eq!(
        extract_payload(&wav).unwrap(),
        &[0xC1, 0, 0, 0xC2, 0, 0, 0xC1, 0, 0, 0xC2, 0, 0][..]
    );
}

#[test]
fn test_gain_scales_sine_peak() {
    let config = WaveformConfig::builder(WaveformType::Sine)
        .frequency(1000)
        .samples(48)
        .gain(0.5)
        .build();
    let words = payload_words(&config);
    let peak = words.iter().map(|&w| (w as i32).unsigned_abs()).max().unwrap();
    assert_eq!(peak, ((MAX_LEVEL as f64) * 0.5).round() as u32);
}
