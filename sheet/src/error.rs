use crate::{FrameRect, SpriteId};

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Frame {rect} is outside of the {sheet_width}x{sheet_height} sheet")]
    OutOfBounds {
        rect: FrameRect,
        sheet_width: u32,
        sheet_height: u32,
    },
    #[error("Sprite {id} has {available} frame(s), cannot get frame {index}")]
    FrameIndex {
        id: SpriteId,
        index: usize,
        available: usize,
    },
    #[error("Error decoding sheet: {source}")]
    Image {
        #[from]
        source: image::ImageError,
    },
    #[error("Error opening sheet: {source}")]
    IOError {
        #[source]
        source: std::io::Error,
    },
}
