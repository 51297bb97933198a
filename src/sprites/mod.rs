//! Frame sources and sprite-sheet layout on top of the pixel buffer types.

pub mod catalog;
mod frame;
mod palette;
mod sheet;

pub use catalog::{FrameSource, SpriteDefinition, CATALOG};
pub use frame::Frame;
pub use palette::Palette;
pub use sheet::SheetLayout;
