//! Container header serialization.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use super::format::{WavHeader, FACT_CHUNK_SIZE, FMT_CHUNK_SIZE};

/// Writes the RIFF header, `fmt ` chunk, optional `fact` chunk and the `data`
/// chunk header. The payload follows directly.
///
/// # Returns
/// Number of bytes written, or an I/O error. Sizes that do not fit the
/// 32-bit size fields are reported as `InvalidInput` before anything is written.
pub fn write_header<W: Write>(writer: &mut W, header: &WavHeader) -> io::Result<usize> {
    let riff_size = size_field(header.riff_size())?;
    let data_size = size_field(header.payload_bytes())?;
    let format = &header.format;

    writer.write_all(b"RIFF")?;
    writer.write_u32::<LittleEndian>(riff_size)?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_u32::<LittleEndian>(FMT_CHUNK_SIZE)?;
    writer.write_u16::<LittleEndian>(format.format_tag())?;
    writer.write_u16::<LittleEndian>(format.channels)?;
    writer.write_u32::<LittleEndian>(format.sample_rate)?;
    writer.write_u32::<LittleEndian>(format.byte_rate())?;
    writer.write_u16::<LittleEndian>(format.block_align())?;
    writer.write_u16::<LittleEndian>(format.bits_per_sample())?;

    if format.has_fact_chunk() {
        writer.write_all(b"fact")?;
        writer.write_u32::<LittleEndian>(FACT_CHUNK_SIZE)?;
        writer.write_u32::<LittleEndian>(size_field(header.samples_per_channel)?)?;
    }

    writer.write_all(b"data")?;
    writer.write_u32::<LittleEndian>(data_size)?;

    Ok(header.header_len())
}

/// Serializes a header into a fresh buffer.
pub fn header_to_vec(header: &WavHeader) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(header.header_len());
    write_header(&mut buffer, header)?;
    Ok(buffer)
}

fn size_field(value: u64) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not fit a 32-bit RIFF size field", value),
        )
    })
}
