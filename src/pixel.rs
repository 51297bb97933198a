use crate::chunks::ihdr::ColorType;

/// One pixel of either arity. The variant decides how many channel bytes land
/// in a scanline, so it has to agree with the image's [`ColorType`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Pixel {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const TRANSPARENT: Pixel = Pixel::rgba(0, 0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Rgb([red, green, blue])
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::Rgba([red, green, blue, alpha])
    }

    pub fn channels(&self) -> &[u8] {
        match self {
            Self::Rgb(c) => c,
            Self::Rgba(c) => c,
        }
    }

    pub const fn channel_count(&self) -> u8 {
        match self {
            Self::Rgb(_) => 3,
            Self::Rgba(_) => 4,
        }
    }

    /// Opaque RGBA version of this pixel. RGBA pixels are returned untouched.
    pub const fn with_alpha(self) -> Self {
        match self {
            Self::Rgb([r, g, b]) => Self::Rgba([r, g, b, u8::MAX]),
            rgba => rgba,
        }
    }

    /// Converts to the arity of `color_type`. Dropping alpha is not lossless,
    /// so an RGBA pixel is left as it is and the encoder will reject it.
    pub const fn to_color_type(self, color_type: ColorType) -> Self {
        match color_type {
            ColorType::Rgba => self.with_alpha(),
            ColorType::Rgb => self,
        }
    }

    pub(crate) fn from_channels(channels: &[u8]) -> Option<Self> {
        match *channels {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::rgba(r, g, b, a)),
            _ => None,
        }
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Pixel {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity() {
        assert_eq!(Pixel::rgb(1, 2, 3).channels(), &[1, 2, 3]);
        assert_eq!(Pixel::rgba(1, 2, 3, 4).channel_count(), 4);
        assert_eq!(Pixel::from((9, 8, 7)), Pixel::rgb(9, 8, 7));
    }

    #[test]
    fn alpha_conversion() {
        assert_eq!(
            Pixel::rgb(10, 20, 30).to_color_type(ColorType::Rgba),
            Pixel::rgba(10, 20, 30, 255)
        );
        assert_eq!(
            Pixel::TRANSPARENT.to_color_type(ColorType::Rgb),
            Pixel::TRANSPARENT
        );
    }

    #[test]
    fn from_channels_rejects_other_widths() {
        assert_eq!(Pixel::from_channels(&[1, 2]), None);
        assert_eq!(
            Pixel::from_channels(&[1, 2, 3, 4]),
            Some(Pixel::rgba(1, 2, 3, 4))
        );
    }
}
