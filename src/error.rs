use std::fmt;

use thiserror::Error;

/// Precondition violations on encoder input. Always raised before any output
/// byte is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("malformed pixel buffer: {0}")]
    MalformedBuffer(BufferMismatch),
    #[error(
        "pixel at ({x}, {y}) has {found} channels but the color type needs {expected}"
    )]
    InvalidChannelCount {
        x: usize,
        y: usize,
        expected: u8,
        found: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferMismatch {
    RowCount { expected: usize, found: usize },
    RowLength { row: usize, expected: usize, found: usize },
}

impl fmt::Display for BufferMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { expected, found } => {
                write!(f, "expected {expected} rows, found {found}")
            }
            Self::RowLength {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} pixels, expected {expected}"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpriteError {
    #[error("symbol {symbol:?} at row {row}, column {column} is not in the palette")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
    #[error("pattern row {row} is {found} symbols wide, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid cell size {cell_width}x{cell_height} is not usable")]
    InvalidCell { cell_width: u32, cell_height: u32 },
    #[error("frame {index} is {found:?}, the layout expects {expected:?}")]
    FrameSize {
        index: usize,
        expected: (u32, u32),
        found: (u32, u32),
    },
    #[error("{count} frames do not fit in a sheet of {capacity} cells")]
    TooManyFrames { count: usize, capacity: usize },
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
