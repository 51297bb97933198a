use anyhow::{anyhow, bail, Context};
use log::debug;

use crate::{
    chunks::{
        ihdr::{ColorType, IHDRChunk},
        iter_chunks, parse_signature, Chunk, ChunkIter, RawChunk,
    },
    image_data::decompress_data,
    scanlines::{image_data_len, split_scanlines},
    Image,
};

/// Reads back the streams this crate writes: 8-bit RGB or RGBA, no filtering,
/// no interlacing. Anything else is an error rather than a best effort.
pub struct PNGDecoder<'a, State>(ChunkIter<'a>, State);

pub struct Start;
pub struct Header {
    header: IHDRChunk,
    color_type: ColorType,
}

impl<'a> PNGDecoder<'a, Start> {
    pub fn new(data: &'a [u8]) -> anyhow::Result<Self> {
        let (rest, _) = parse_signature(data)
            .map_err(|_| anyhow!("input doesn't start with expected signature"))?;
        Ok(Self(iter_chunks(rest), Start))
    }

    pub fn parse_ihdr(mut self) -> anyhow::Result<PNGDecoder<'a, Header>> {
        let chunk = next_verified(&mut self.0)?.context("stream has no chunks")?;
        let Chunk::IHDR(header) = chunk.parse()? else {
            bail!("first chunk is {}, expected IHDR", chunk.type_name());
        };
        let color_type = header.color_type()?;
        debug!("header: {header:?}");
        Ok(PNGDecoder(self.0, Header { header, color_type }))
    }
}

impl<'a> PNGDecoder<'a, Header> {
    pub fn header(&self) -> &IHDRChunk {
        &self.1.header
    }

    /// Concatenates every `IDAT` up to `IEND` and unpacks the scanlines.
    pub fn read_image(mut self) -> anyhow::Result<Image> {
        let mut compressed = vec![];
        let mut idat_count = 0;
        loop {
            let chunk = next_verified(&mut self.0)?.context("stream ended without IEND")?;
            match chunk.parse()? {
                Chunk::IDAT(idat) => {
                    idat_count += 1;
                    compressed.extend_from_slice(idat.data);
                }
                Chunk::IEND => break,
                Chunk::IHDR(_) => bail!("duplicate IHDR chunk"),
                Chunk::Unknown(raw) => debug!("skipping {} chunk", raw.type_name()),
            }
        }
        if idat_count == 0 {
            bail!("stream has no IDAT chunk");
        }

        let Header { header, color_type } = self.1;
        let expected = image_data_len(header.width, header.height, color_type)
            .with_context(|| format!("{}x{} image is too large", header.width, header.height))?;
        let raw = decompress_data(&compressed, expected)?;
        debug!(
            "{idat_count} IDAT chunk(s), {} bytes inflated to {}",
            compressed.len(),
            raw.len()
        );
        let pixels = split_scanlines(&raw, header.width, header.height, color_type)?;
        Ok(Image::new(header.width, header.height, color_type, pixels)?)
    }
}

fn next_verified<'a>(chunks: &mut ChunkIter<'a>) -> anyhow::Result<Option<RawChunk<'a>>> {
    let Some(chunk) = chunks.next().transpose()? else {
        return Ok(None);
    };
    if !chunk.crc_matches() {
        bail!("CRC mismatch in {} chunk", chunk.type_name());
    }
    Ok(Some(chunk))
}

/// Decodes a complete PNG produced by [`crate::encode`].
pub fn decode(bytes: &[u8]) -> anyhow::Result<Image> {
    PNGDecoder::new(bytes)?.parse_ihdr()?.read_image()
}
