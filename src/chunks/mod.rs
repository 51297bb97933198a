//! Chunk framing: writing `length | type | payload | crc` records and reading
//! them back with CRC verification.

use std::borrow::Cow;

use anyhow::anyhow;
use nom::{
    bytes::complete::{tag, take},
    combinator::map,
    number::complete::be_u32,
    sequence::tuple,
    IResult,
};

use crate::crc::chunk_crc;

pub mod idat;
pub mod iend;
pub mod ihdr;

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

/// Length, type tag and CRC around every payload.
pub(crate) const FRAMING_LEN: usize = 12;

pub fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&SIGNATURE[..])(input)
}

pub(crate) trait WritableChunk {
    const HEADER: &'static [u8; 4];

    fn payload(&self) -> Cow<'_, [u8]>;

    fn write_to(&self, out: &mut Vec<u8>) {
        write_chunk(out, Self::HEADER, &self.payload());
    }
}

pub(crate) fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], payload: &[u8]) {
    out.reserve(payload.len() + FRAMING_LEN);
    out.extend((payload.len() as u32).to_be_bytes());
    out.extend(chunk_type);
    out.extend(payload);
    out.extend(chunk_crc(chunk_type, payload).to_be_bytes());
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub enum Chunk<'a> {
    IHDR(ihdr::IHDRChunk),
    IDAT(idat::IDATChunk<&'a [u8]>),
    IEND,
    Unknown(RawChunk<'a>),
}

/// A framed chunk as it sits in the stream, CRC not yet checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    pub chunk_type: [u8; 4],
    pub data: &'a [u8],
    pub crc: u32,
}

impl<'a> RawChunk<'a> {
    pub fn type_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.chunk_type)
    }

    pub fn crc_matches(&self) -> bool {
        chunk_crc(&self.chunk_type, self.data) == self.crc
    }

    /// Interprets the payload of the chunk types this crate writes. Anything
    /// else comes back as [`Chunk::Unknown`].
    pub fn parse(self) -> anyhow::Result<Chunk<'a>> {
        let chunk = match &self.chunk_type {
            ihdr::HEADER => {
                let (_, header) = ihdr::parse_data(self.data).map_err(|_| {
                    anyhow!("IHDR payload is {} bytes, expected 13", self.data.len())
                })?;
                Chunk::IHDR(header)
            }
            idat::HEADER => Chunk::IDAT(idat::parse_data(self.data)),
            iend::HEADER => Chunk::IEND,
            _ => Chunk::Unknown(self),
        };
        Ok(chunk)
    }
}

fn raw_chunk(input: &[u8]) -> IResult<&[u8], RawChunk<'_>> {
    let (input, length) = be_u32(input)?;
    let (input, (chunk_type, data, crc)) = tuple((
        map(take(4usize), |t: &[u8]| [t[0], t[1], t[2], t[3]]),
        take(length),
        be_u32,
    ))(input)?;
    Ok((
        input,
        RawChunk {
            chunk_type,
            data,
            crc,
        },
    ))
}

/// Iterates the chunks following the signature. Stops after `IEND` or after
/// the first framing error.
pub fn iter_chunks(source: &[u8]) -> ChunkIter<'_> {
    ChunkIter {
        source,
        offset: SIGNATURE.len(),
        finished: false,
    }
}

pub struct ChunkIter<'a> {
    source: &'a [u8],
    offset: usize,
    finished: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = anyhow::Result<RawChunk<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.source.is_empty() {
            self.finished = true;
            return Some(Err(anyhow!("stream ended at byte {} without IEND", self.offset)));
        }
        match raw_chunk(self.source) {
            Ok((rest, chunk)) => {
                self.offset += self.source.len() - rest.len();
                self.source = rest;
                if &chunk.chunk_type == iend::HEADER {
                    self.finished = true;
                }
                Some(Ok(chunk))
            }
            Err(_) => {
                self.finished = true;
                Some(Err(anyhow!("truncated chunk at byte {}", self.offset)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = vec![];
        write_chunk(&mut out, chunk_type, payload);
        out
    }

    #[test]
    fn framing_layout() {
        let bytes = framed(b"tEXt", b"abc");
        assert_eq!(&bytes[0..4], &[0, 0, 0, 3]);
        assert_eq!(&bytes[4..8], b"tEXt");
        assert_eq!(&bytes[8..11], b"abc");
        assert_eq!(
            &bytes[11..],
            &chunk_crc(b"tEXt", b"abc").to_be_bytes()
        );
    }

    #[test]
    fn reads_back_written_chunks() {
        let mut bytes = SIGNATURE.to_vec();
        write_chunk(&mut bytes, b"abCD", &[1, 2, 3, 4]);
        iend::IENDChunk.write_to(&mut bytes);
        let (rest, _) = parse_signature(&bytes).unwrap();
        let chunks: Vec<_> = iter_chunks(rest).collect::<anyhow::Result<_>>().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].type_name(), "abCD");
        assert_eq!(chunks[0].data, &[1, 2, 3, 4]);
        assert!(chunks.iter().all(RawChunk::crc_matches));
        assert!(matches!(chunks[1].parse().unwrap(), Chunk::IEND));
    }

    #[test]
    fn corrupted_payload_fails_crc() {
        let mut bytes = framed(b"IDAT", &[10, 20, 30]);
        bytes[9] ^= 0x01;
        let (_, chunk) = raw_chunk(&bytes).unwrap();
        assert!(!chunk.crc_matches());
    }

    #[test]
    fn truncation_is_reported() {
        let bytes = framed(b"IDAT", &[10, 20, 30]);
        let mut chunks = iter_chunks(&bytes[..bytes.len() - 2]);
        let err = chunks.next().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "truncated chunk at byte 8");
        assert!(chunks.next().is_none());
    }

    #[test]
    fn missing_iend_is_reported() {
        let bytes = framed(b"IDAT", &[]);
        let mut chunks = iter_chunks(&bytes);
        assert!(chunks.next().unwrap().is_ok());
        assert!(chunks.next().unwrap().is_err());
        assert!(chunks.next().is_none());
    }
}
