use anyhow::{bail, Context};

use crate::{chunks::ihdr::ColorType, filters::Filter, Pixel};

pub(crate) const fn scanline_width(width: u32, color_type: ColorType) -> usize {
    width as usize * color_type.channel_count() as usize + 1
}

/// Filtered byte count of a whole image, `None` when it overflows `usize`.
pub(crate) fn image_data_len(width: u32, height: u32, color_type: ColorType) -> Option<usize> {
    (width as usize)
        .checked_mul(color_type.channel_count() as usize)?
        .checked_add(1)?
        .checked_mul(height as usize)
}

/// Serialises already validated rows: one filter byte, then channel bytes.
pub(crate) fn build_scanlines<R: AsRef<[Pixel]>>(rows: &[R], color_type: ColorType) -> Vec<u8> {
    let width = rows.first().map_or(0, |row| row.as_ref().len());
    let mut raw = Vec::with_capacity(rows.len() * scanline_width(width as u32, color_type));
    for row in rows {
        raw.push(Filter::None as u8);
        for pixel in row.as_ref() {
            raw.extend_from_slice(pixel.channels());
        }
    }
    raw
}

/// Inverse of [`build_scanlines`] for an image of the given header values.
pub(crate) fn split_scanlines(
    raw: &[u8],
    width: u32,
    height: u32,
    color_type: ColorType,
) -> anyhow::Result<Vec<Vec<Pixel>>> {
    let expected = image_data_len(width, height, color_type)
        .with_context(|| format!("{width}x{height} image is too large"))?;
    if raw.len() != expected {
        bail!(
            "image data holds {} bytes, {}x{} needs {expected}",
            raw.len(),
            width,
            height
        );
    }
    raw.chunks_exact(scanline_width(width, color_type))
        .enumerate()
        .map(|(y, line)| -> anyhow::Result<Vec<Pixel>> {
            Filter::try_from(line[0]).with_context(|| format!("scanline {y}"))?;
            line[1..]
                .chunks_exact(color_type.channel_count() as usize)
                .map(|channels| {
                    Pixel::from_channels(channels)
                        .with_context(|| format!("scanline {y} has a partial pixel"))
                })
                .collect()
        })
        .collect()
}
