use std::{ffi::OsStr, path::Path};

use image::{imageops, RgbaImage};
use log::warn;

use crate::{
    error::SheetError, FrameRect, FrameSize, GridShape, SheetOffset, Sprite, SpriteId, SpriteSet,
};

pub fn open_sheet_from_bytes(i: &[u8]) -> Result<RgbaImage, SheetError> {
    let img = image::load_from_memory(i)?;

    Ok(img.into_rgba8())
}

pub fn open_sheet_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<RgbaImage, SheetError> {
    let file = std::fs::read(path).map_err(|op| SheetError::IOError { source: op })?;

    open_sheet_from_bytes(&file)
}

/// Where frame `frame` of sprite `id` sits on the sheet.
///
/// Frames of one sprite are laid out horizontally, so sprite columns are
/// `frames_per_sprite` frames apart.
pub fn frame_rect(
    shape: GridShape,
    frame_size: FrameSize,
    offset: SheetOffset,
    id: SpriteId,
    frame: u32,
) -> FrameRect {
    let width = frame_size.width() as i64;
    let height = frame_size.height() as i64;

    let frame_column = id.column as i64 * shape.frames_per_sprite as i64 + frame as i64;

    FrameRect {
        x: offset.x as i64 + frame_column * width,
        y: offset.y as i64 + id.row as i64 * height,
        width: frame_size.width(),
        height: frame_size.height(),
    }
}

/// Copies `rect` out of `sheet`. The whole rectangle must be inside.
pub fn extract_frame(sheet: &RgbaImage, rect: FrameRect) -> Result<RgbaImage, SheetError> {
    let (sheet_width, sheet_height) = sheet.dimensions();

    let fits = rect.x >= 0
        && rect.y >= 0
        && rect.x + rect.width as i64 <= sheet_width as i64
        && rect.y + rect.height as i64 <= sheet_height as i64;

    if !fits {
        return Err(SheetError::OutOfBounds {
            rect,
            sheet_width,
            sheet_height,
        });
    }

    let view = imageops::crop_imm(sheet, rect.x as u32, rect.y as u32, rect.width, rect.height);

    Ok(view.to_image())
}

/// Slices the whole grid. Frames that fall outside of the sheet are logged
/// and left out, so a sprite can end up with fewer frames than the shape says.
pub fn extract(
    sheet: &RgbaImage,
    frame_size: FrameSize,
    offset: SheetOffset,
    shape: GridShape,
) -> SpriteSet {
    let mut skipped_frames = 0;

    let sprites = shape
        .sprite_ids()
        .map(|id| {
            let frames = (0..shape.frames_per_sprite)
                .filter_map(|frame| {
                    let rect = frame_rect(shape, frame_size, offset, id, frame);

                    match extract_frame(sheet, rect) {
                        Ok(img) => Some(img),
                        Err(err) => {
                            warn!(
                                "Error extracting sprite at row {}, column {}, frame {}: {}",
                                id.row, id.column, frame, err
                            );
                            skipped_frames += 1;
                            None
                        }
                    }
                })
                .collect::<Vec<RgbaImage>>();

            Sprite { id, frames }
        })
        .collect::<Vec<Sprite>>();

    SpriteSet {
        sprites,
        skipped_frames,
    }
}
