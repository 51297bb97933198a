use crate::{chunks::ihdr::ColorType, encoder, error::EncodeError, Pixel};

/// Rows of pixels, top to bottom.
pub type PixelBuffer = Vec<Vec<Pixel>>;

/// A validated image: the buffer always matches the declared size and color
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    color_type: ColorType,
    pixels: PixelBuffer,
}

impl Image {
    pub fn new(
        width: u32,
        height: u32,
        color_type: ColorType,
        pixels: PixelBuffer,
    ) -> Result<Self, EncodeError> {
        encoder::validate(width, height, color_type, &pixels)?;
        Ok(Self {
            width,
            height,
            color_type,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        self.pixels.get(y as usize)?.get(x as usize).copied()
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    pub fn encode(&self) -> Vec<u8> {
        encoder::write_png(self.width, self.height, self.color_type, &self.pixels)
    }
}
