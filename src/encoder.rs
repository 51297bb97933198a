use log::debug;

use crate::{
    chunks::{
        idat::IDATChunk,
        iend::IENDChunk,
        ihdr::{ColorType, IHDRChunk},
        WritableChunk, FRAMING_LEN, SIGNATURE,
    },
    error::{BufferMismatch, EncodeError},
    image_data::compress_data,
    scanlines::build_scanlines,
    Pixel,
};

/// Encodes a row-major pixel buffer as a PNG byte stream.
///
/// The output is always signature, `IHDR`, a single `IDAT` holding the zlib
/// compressed unfiltered scanlines, and `IEND`. Input is checked in full
/// before anything is produced.
pub fn encode<R: AsRef<[Pixel]>>(
    width: u32,
    height: u32,
    color_type: ColorType,
    rows: &[R],
) -> Result<Vec<u8>, EncodeError> {
    validate(width, height, color_type, rows)?;
    Ok(write_png(width, height, color_type, rows))
}

/// Writes the stream for rows that already passed [`validate`].
pub(crate) fn write_png<R: AsRef<[Pixel]>>(
    width: u32,
    height: u32,
    color_type: ColorType,
    rows: &[R],
) -> Vec<u8> {
    let header = IHDRChunk::new(width, height, color_type);
    let raw = build_scanlines(rows, color_type);
    let idat = IDATChunk {
        data: compress_data(&raw),
    };
    debug!(
        "{width}x{height} {color_type:?}: {} scanline bytes deflated to {}",
        raw.len(),
        idat.data.len()
    );

    let mut out = Vec::with_capacity(SIGNATURE.len() + 13 + idat.data.len() + 3 * FRAMING_LEN);
    out.extend(SIGNATURE);
    header.write_to(&mut out);
    idat.write_to(&mut out);
    IENDChunk.write_to(&mut out);
    out
}

pub(crate) fn validate<R: AsRef<[Pixel]>>(
    width: u32,
    height: u32,
    color_type: ColorType,
    rows: &[R],
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    if rows.len() != height as usize {
        return Err(EncodeError::MalformedBuffer(BufferMismatch::RowCount {
            expected: height as usize,
            found: rows.len(),
        }));
    }
    let expected = color_type.channel_count();
    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width as usize {
            return Err(EncodeError::MalformedBuffer(BufferMismatch::RowLength {
                row: y,
                expected: width as usize,
                found: row.len(),
            }));
        }
        if let Some((x, pixel)) = row
            .iter()
            .enumerate()
            .find(|(_, pixel)| pixel.channel_count() != expected)
        {
            return Err(EncodeError::InvalidChannelCount {
                x,
                y,
                expected,
                found: pixel.channel_count(),
            });
        }
    }
    Ok(())
}
