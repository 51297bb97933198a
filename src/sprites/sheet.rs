use log::debug;

use crate::{chunks::ihdr::ColorType, error::SpriteError, Image};

use super::Frame;

/// Grid geometry of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SheetLayout {
    pub const fn new(frame_width: u32, frame_height: u32, columns: u32, rows: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            columns,
            rows,
        }
    }

    pub const fn width(&self) -> u32 {
        self.frame_width * self.columns
    }

    pub const fn height(&self) -> u32 {
        self.frame_height * self.rows
    }

    pub const fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Places `frames` row-major, left to right then top to bottom. Cells
    /// without a frame are left as `color_type.padding()`.
    pub fn compose(&self, frames: &[Frame], color_type: ColorType) -> Result<Image, SpriteError> {
        if frames.len() > self.capacity() {
            return Err(SpriteError::TooManyFrames {
                count: frames.len(),
                capacity: self.capacity(),
            });
        }
        let expected = (self.frame_width, self.frame_height);
        if let Some((index, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, frame)| frame.size() != expected)
        {
            return Err(SpriteError::FrameSize {
                index,
                expected,
                found: frame.size(),
            });
        }

        let mut pixels =
            vec![vec![color_type.padding(); self.width() as usize]; self.height() as usize];
        for (index, frame) in frames.iter().enumerate() {
            let left = (index % self.columns as usize) * self.frame_width as usize;
            let top = (index / self.columns as usize) * self.frame_height as usize;
            for (y, row) in frame.rows().iter().enumerate() {
                let target = &mut pixels[top + y][left..left + row.len()];
                for (dst, src) in target.iter_mut().zip(row) {
                    *dst = src.to_color_type(color_type);
                }
            }
        }
        if frames.len() < self.capacity() {
            debug!(
                "{} of {} cells padded",
                self.capacity() - frames.len(),
                self.capacity()
            );
        }
        Ok(Image::new(self.width(), self.height(), color_type, pixels)?)
    }
}
