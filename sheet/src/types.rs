use std::fmt;

use image::RgbaImage;

use crate::error::SheetError;

/// Size of one animation frame in pixels. Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn grow_width(&mut self) {
        self.width = self.width.saturating_add(1);
    }

    pub fn shrink_width(&mut self) {
        self.width = self.width.saturating_sub(1).max(1);
    }

    pub fn grow_height(&mut self) {
        self.height = self.height.saturating_add(1);
    }

    pub fn shrink_height(&mut self) {
        self.height = self.height.saturating_sub(1).max(1);
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Displacement of the grid origin. Negative values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetOffset {
    pub x: i32,
    pub y: i32,
}

impl SheetOffset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for SheetOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How the sheet is laid out: `rows` rows of `sprites_per_row` sprites,
/// each sprite being `frames_per_sprite` frames placed side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: u32,
    pub sprites_per_row: u32,
    pub frames_per_sprite: u32,
}

impl GridShape {
    pub fn sprite_count(&self) -> usize {
        self.rows as usize * self.sprites_per_row as usize
    }

    /// Row-major iteration over every grid cell.
    pub fn sprite_ids(&self) -> impl Iterator<Item = SpriteId> {
        let sprites_per_row = self.sprites_per_row;

        (0..self.rows)
            .flat_map(move |row| (0..sprites_per_row).map(move |column| SpriteId { row, column }))
    }

    pub fn index_of(&self, id: SpriteId) -> usize {
        id.row as usize * self.sprites_per_row as usize + id.column as usize
    }

    pub fn id_of(&self, index: usize) -> SpriteId {
        let sprites_per_row = self.sprites_per_row.max(1) as usize;

        SpriteId {
            row: (index / sprites_per_row) as u32,
            column: (index % sprites_per_row) as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId {
    pub row: u32,
    pub column: u32,
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[row {}, column {}]", self.row, self.column)
    }
}

/// Source rectangle of one frame. Coordinates are signed because the offset
/// can push the grid past the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for FrameRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[derive(Debug, Clone)]
pub struct Sprite {
    pub id: SpriteId,
    /// Can be shorter than `frames_per_sprite` when some frames fell outside of the sheet.
    pub frames: Vec<RgbaImage>,
}

impl Sprite {
    pub fn frame(&self, index: usize) -> Result<&RgbaImage, SheetError> {
        self.frames.get(index).ok_or(SheetError::FrameIndex {
            id: self.id,
            index,
            available: self.frames.len(),
        })
    }
}

/// Result of one extraction pass, in row-major order.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    pub(crate) sprites: Vec<Sprite>,
    pub(crate) skipped_frames: usize,
}

impl SpriteSet {
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Number of frames dropped because their rectangle was out of bounds.
    pub fn skipped_frames(&self) -> usize {
        self.skipped_frames
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frame_size_never_below_one() {
        let mut size = FrameSize::new(2, 1);

        size.shrink_width();
        size.shrink_width();
        size.shrink_width();
        size.shrink_height();

        assert_eq!(size, FrameSize::new(1, 1));
        assert_eq!(FrameSize::new(0, 0), FrameSize::new(1, 1));
    }

    #[test]
    fn grow_then_shrink_is_inverse() {
        let mut size = FrameSize::new(48, 48);

        (0..5).for_each(|_| size.grow_width());
        (0..5).for_each(|_| size.shrink_width());
        (0..3).for_each(|_| size.grow_height());
        (0..3).for_each(|_| size.shrink_height());

        assert_eq!(size, FrameSize::new(48, 48));
    }

    #[test]
    fn sprite_ids_are_row_major() {
        let shape = GridShape {
            rows: 2,
            sprites_per_row: 3,
            frames_per_sprite: 1,
        };
        let ids = shape.sprite_ids().collect::<Vec<SpriteId>>();

        assert_eq!(ids.len(), shape.sprite_count());
        assert_eq!(ids[4], SpriteId { row: 1, column: 1 });
        assert!(ids
            .iter()
            .enumerate()
            .all(|(index, id)| shape.index_of(*id) == index && shape.id_of(index) == *id));
    }
}
