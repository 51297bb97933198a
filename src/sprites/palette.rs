use crate::Pixel;

/// Symbol to color table for ASCII patterns. Entries are searched in order,
/// so tables stay small and can live in `const`s.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    entries: &'a [(char, Pixel)],
}

impl<'a> Palette<'a> {
    pub const fn new(entries: &'a [(char, Pixel)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, symbol: char) -> Option<Pixel> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, pixel)| pixel)
    }
}
