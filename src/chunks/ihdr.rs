use std::borrow::Cow;

use anyhow::{anyhow, bail};
use nom::{bytes::complete::take, number::complete::be_u32, sequence::tuple, IResult};

use super::WritableChunk;

pub const HEADER: &[u8; 4] = b"IHDR";

/// Image header exactly as it sits on the wire. [`IHDRChunk::color_type`]
/// checks the fields against the subset this crate writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IHDRChunk {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

impl IHDRChunk {
    pub const BIT_DEPTH: u8 = 8;

    pub fn new(width: u32, height: u32, color_type: ColorType) -> Self {
        Self {
            width,
            height,
            bit_depth: Self::BIT_DEPTH,
            color_type: color_type as u8,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        }
    }

    pub fn color_type(&self) -> anyhow::Result<ColorType> {
        if self.width == 0 || self.height == 0 {
            bail!("header declares {}x{} pixels", self.width, self.height);
        }
        if self.bit_depth != Self::BIT_DEPTH {
            bail!("bit depth {} is not supported", self.bit_depth);
        }
        if self.compression_method != 0 || self.filter_method != 0 {
            bail!(
                "compression method {} / filter method {} is not supported",
                self.compression_method,
                self.filter_method
            );
        }
        if self.interlace_method != 0 {
            bail!("interlaced images are not supported");
        }
        ColorType::try_from(self.color_type)
    }
}

impl WritableChunk for IHDRChunk {
    const HEADER: &'static [u8; 4] = HEADER;

    fn payload(&self) -> Cow<'_, [u8]> {
        let mut bytes = Vec::with_capacity(13);
        bytes.extend(self.width.to_be_bytes());
        bytes.extend(self.height.to_be_bytes());
        bytes.extend([
            self.bit_depth,
            self.color_type,
            self.compression_method,
            self.filter_method,
            self.interlace_method,
        ]);
        Cow::Owned(bytes)
    }
}

pub(crate) fn parse_data(chunk_data: &[u8]) -> IResult<&[u8], IHDRChunk> {
    let (rest, (width, height, other_bytes)) = tuple((be_u32, be_u32, take(5usize)))(chunk_data)?;
    Ok((
        rest,
        IHDRChunk {
            width,
            height,
            bit_depth: other_bytes[0],
            color_type: other_bytes[1],
            compression_method: other_bytes[2],
            filter_method: other_bytes[3],
            interlace_method: other_bytes[4],
        },
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorType {
    Rgb = 2,
    Rgba = 6,
}

impl ColorType {
    pub const fn channel_count(&self) -> u8 {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Fill for sheet cells that hold no frame.
    pub const fn padding(&self) -> crate::Pixel {
        match self {
            Self::Rgb => crate::Pixel::BLACK,
            Self::Rgba => crate::Pixel::TRANSPARENT,
        }
    }
}

impl TryFrom<u8> for ColorType {
    type Error = anyhow::Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Rgb),
            6 => Ok(Self::Rgba),
            i => Err(anyhow!("color type {i} is not supported")),
        }
    }
}
