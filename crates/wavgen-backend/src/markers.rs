//! Channel marker injection.
//!
//! A marker is the byte `0xC0 + channel + 1` written into a fixed byte of every
//! sample, so that swapped or dropped channels are obvious in a hex dump.

use wavgen_spec::{MarkerPosition, SampleFormat};

/// Marker byte for a channel: `0xC1` for channel 0, `0xC2` for channel 1, ...
pub fn marker_byte(channel: u16) -> u8 {
    0xC0u8.wrapping_add(channel as u8).wrapping_add(1)
}

/// Bit offset of the output word's lowest byte inside the 32-bit sample.
fn low_byte_shift(format: SampleFormat) -> u32 {
    if format.is_float() {
        0
    } else {
        32 - format.bits_per_sample() as u32
    }
}

/// Writes the channel marker into a 32-bit sample.
///
/// `Msb` replaces bits 24..32. `Lsb` replaces the least-significant byte of
/// the word that will actually be written (bits 16..24 for 16-bit output,
/// 8..16 for 24-bit, 0..8 for 32-bit).
pub fn inject_marker(value: i32, channel: u16, position: MarkerPosition, format: SampleFormat) -> i32 {
    let marker = marker_byte(channel) as u32;
    let shift = match position {
        MarkerPosition::Msb => 24,
        MarkerPosition::Lsb => low_byte_shift(format),
    };
    let mask = 0xFFu32 << shift;
    ((value as u32 & !mask) | (marker << shift)) as i32
}
