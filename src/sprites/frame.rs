use crate::{error::SpriteError, image::PixelBuffer, Pixel};

use super::Palette;

/// One fixed-size cell of a sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: PixelBuffer,
}

impl Frame {
    pub fn solid(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![vec![pixel; width as usize]; height as usize],
        }
    }

    /// Splits the frame into `cell_width`x`cell_height` blocks and paints
    /// block `i` (row-major) with `colors[i]`. Blocks past the end of
    /// `colors` get `fill`; partial blocks at the right and bottom edges
    /// count as blocks too.
    pub fn grid(
        width: u32,
        height: u32,
        cell_width: u32,
        cell_height: u32,
        colors: &[Pixel],
        fill: Pixel,
    ) -> Result<Self, SpriteError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(SpriteError::InvalidCell {
                cell_width,
                cell_height,
            });
        }
        let columns = width.div_ceil(cell_width) as usize;
        let pixels = (0..height)
            .map(|y| {
                let cell_row = (y / cell_height) as usize;
                (0..width)
                    .map(|x| {
                        let index = cell_row * columns + (x / cell_width) as usize;
                        colors.get(index).copied().unwrap_or(fill)
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a frame from ASCII rows, one symbol per pixel.
    pub fn pattern<S: AsRef<str>>(rows: &[S], palette: &Palette<'_>) -> Result<Self, SpriteError> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut pixels = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(SpriteError::RaggedPattern {
                    row: y,
                    expected: width,
                    found,
                });
            }
            let line = row
                .chars()
                .enumerate()
                .map(|(x, symbol)| {
                    palette.get(symbol).ok_or(SpriteError::UnknownSymbol {
                        symbol,
                        row: y,
                        column: x,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            pixels.push(line);
        }
        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.pixels
    }
}
