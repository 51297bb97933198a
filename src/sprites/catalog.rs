//! Every sheet the generator writes, in output order.

use crate::{chunks::ihdr::ColorType, error::SpriteError, Image, Pixel};

use super::{Frame, Palette, SheetLayout};

/// Where the frames of a sheet come from.
#[derive(Debug, Clone, Copy)]
pub enum FrameSource {
    /// One flat color per frame.
    Solid(&'static [Pixel]),
    /// One ASCII pattern per frame, all read through the same palette.
    Patterns {
        palette: Palette<'static>,
        frames: &'static [&'static [&'static str]],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SpriteDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub layout: SheetLayout,
    pub color_type: ColorType,
    pub source: FrameSource,
}

impl SpriteDefinition {
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }

    pub fn frames(&self) -> Result<Vec<Frame>, SpriteError> {
        let SheetLayout {
            frame_width,
            frame_height,
            ..
        } = self.layout;
        match self.source {
            FrameSource::Solid(colors) => Ok(colors
                .iter()
                .map(|&color| Frame::solid(frame_width, frame_height, color))
                .collect()),
            FrameSource::Patterns { palette, frames } => frames
                .iter()
                .map(|&rows| Frame::pattern(rows, &palette))
                .collect(),
        }
    }

    pub fn render(&self) -> Result<Image, SpriteError> {
        self.layout.compose(&self.frames()?, self.color_type)
    }
}

const fn rgb(red: u8, green: u8, blue: u8) -> Pixel {
    Pixel::rgb(red, green, blue)
}

const NONE: Pixel = Pixel::BLACK;

const RUMINANT_LAYOUT: SheetLayout = SheetLayout::new(64, 64, 6, 2);

// Row 0 is the idle cycle (four frames), row 1 the walk cycle (six frames).
const COW: &[Pixel] = &[
    rgb(139, 90, 43),
    rgb(160, 110, 63),
    rgb(139, 90, 43),
    rgb(120, 80, 40),
    NONE,
    NONE,
    rgb(139, 90, 43),
    rgb(160, 110, 63),
    rgb(139, 90, 43),
    rgb(120, 80, 40),
    rgb(160, 110, 63),
    rgb(139, 90, 43),
];

const SHEEP: &[Pixel] = &[
    rgb(240, 240, 240),
    rgb(220, 220, 220),
    rgb(240, 240, 240),
    rgb(200, 200, 200),
    NONE,
    NONE,
    rgb(240, 240, 240),
    rgb(220, 220, 220),
    rgb(240, 240, 240),
    rgb(200, 200, 200),
    rgb(220, 220, 220),
    rgb(240, 240, 240),
];

const GOAT: &[Pixel] = &[
    rgb(210, 180, 140),
    rgb(190, 160, 120),
    rgb(210, 180, 140),
    rgb(180, 150, 110),
    NONE,
    NONE,
    rgb(210, 180, 140),
    rgb(190, 160, 120),
    rgb(210, 180, 140),
    rgb(180, 150, 110),
    rgb(190, 160, 120),
    rgb(210, 180, 140),
];

const ALPACA: &[Pixel] = &[
    rgb(245, 222, 179),
    rgb(238, 203, 173),
    rgb(245, 222, 179),
    rgb(222, 184, 135),
    NONE,
    NONE,
    rgb(245, 222, 179),
    rgb(238, 203, 173),
    rgb(245, 222, 179),
    rgb(222, 184, 135),
    rgb(238, 203, 173),
    rgb(245, 222, 179),
];

// Idle row, then thrust row.
const PLAYER: &[Pixel] = &[
    rgb(0, 255, 255),
    rgb(0, 200, 255),
    NONE,
    NONE,
    NONE,
    NONE,
    rgb(0, 255, 255),
    rgb(255, 165, 0),
    rgb(255, 140, 0),
    NONE,
    NONE,
    NONE,
];

// Player bullet row, then enemy bullet row.
const PROJECTILES: &[Pixel] = &[
    rgb(255, 255, 0),
    rgb(255, 255, 255),
    rgb(255, 0, 0),
    rgb(255, 100, 0),
];

const SHIP_COLORS: &[(char, Pixel)] = &[
    ('.', Pixel::TRANSPARENT),
    ('#', Pixel::rgba(0, 255, 255, 255)),
    ('+', Pixel::rgba(0, 120, 200, 255)),
    ('o', Pixel::rgba(255, 255, 255, 255)),
    ('*', Pixel::rgba(255, 140, 0, 255)),
];

const SHIP_IDLE: &[&str] = &[
    "................",
    ".......##.......",
    "......#oo#......",
    "......#oo#......",
    ".....##oo##.....",
    ".....#++++#.....",
    "....##++++##....",
    "...###++++###...",
    "..####++++####..",
    ".#####++++#####.",
    "##+###++++###+##",
    "##+##########+##",
    "#..###....###..#",
    "....##....##....",
    "................",
    "................",
];

const SHIP_THRUST: &[&str] = &[
    "................",
    ".......##.......",
    "......#oo#......",
    "......#oo#......",
    ".....##oo##.....",
    ".....#++++#.....",
    "....##++++##....",
    "...###++++###...",
    "..####++++####..",
    ".#####++++#####.",
    "##+###++++###+##",
    "##+##########+##",
    "#..###....###..#",
    "....##*..*##....",
    ".....*.**.*.....",
    "......*..*......",
];

pub const CATALOG: &[SpriteDefinition] = &[
    SpriteDefinition {
        name: "cow",
        description: "cow animations",
        layout: RUMINANT_LAYOUT,
        color_type: ColorType::Rgb,
        source: FrameSource::Solid(COW),
    },
    SpriteDefinition {
        name: "sheep",
        description: "sheep animations",
        layout: RUMINANT_LAYOUT,
        color_type: ColorType::Rgb,
        source: FrameSource::Solid(SHEEP),
    },
    SpriteDefinition {
        name: "goat",
        description: "goat animations",
        layout: RUMINANT_LAYOUT,
        color_type: ColorType::Rgb,
        source: FrameSource::Solid(GOAT),
    },
    SpriteDefinition {
        name: "alpaca",
        description: "alpaca animations",
        layout: RUMINANT_LAYOUT,
        color_type: ColorType::Rgb,
        source: FrameSource::Solid(ALPACA),
    },
    SpriteDefinition {
        name: "player",
        description: "player ship animations",
        layout: SheetLayout::new(48, 48, 6, 2),
        color_type: ColorType::Rgb,
        source: FrameSource::Solid(PLAYER),
    },
    SpriteDefinition {
        name: "projectiles",
        description: "bullet animations",
        layout: SheetLayout::new(16, 16, 2, 2),
        color_type: ColorType::Rgb,
        source: FrameSource::Solid(PROJECTILES),
    },
    SpriteDefinition {
        name: "ship_outline",
        description: "player ship outline with alpha",
        layout: SheetLayout::new(16, 16, 2, 1),
        color_type: ColorType::Rgba,
        source: FrameSource::Patterns {
            palette: Palette::new(SHIP_COLORS),
            frames: &[SHIP_IDLE, SHIP_THRUST],
        },
    },
];

pub fn find(name: &str) -> Option<&'static SpriteDefinition> {
    CATALOG.iter().find(|sprite| sprite.name == name)
}
