//! Placeholder sprite sheets written straight into PNG containers.
//!
//! [`encode`] turns a row-major pixel buffer into a PNG byte stream without
//! any imaging library: signature, `IHDR`, one zlib-compressed `IDAT` of
//! unfiltered scanlines, and `IEND`. [`sprites`] builds the sheets that feed
//! it and [`generator`] writes them to disk.

pub mod chunks;
pub mod config;
mod crc;
pub mod decoder;
mod encoder;
pub mod error;
mod filters;
pub mod generator;
mod image;
mod image_data;
mod pixel;
mod scanlines;
pub mod sprites;

pub use chunks::{ihdr::ColorType, SIGNATURE};
pub use decoder::decode;
pub use encoder::encode;
pub use error::{BufferMismatch, EncodeError, SpriteError};
pub use self::image::{Image, PixelBuffer};
pub use pixel::Pixel;
