use std::time::{Duration, Instant};

use image::RgbaImage;
use log::info;
use rand::Rng;

use sheet::{
    apply_tint, error::SheetError, extract, FrameSize, GridShape, SheetOffset, SpriteSet,
    TintAssignment,
};

use super::{clock::AnimationClock, input::Command};

pub struct InspectorOptions {
    pub frame_size: FrameSize,
    pub offset: SheetOffset,
    pub shape: GridShape,
    pub frame_duration: Duration,
}

/// All mutable state of one inspection session.
///
/// Tints are keyed by grid cell, and the grid shape never changes, so slicing
/// again keeps every tint on the cell it was drawn for.
pub struct Inspector {
    sheet: RgbaImage,
    frame_size: FrameSize,
    offset: SheetOffset,
    shape: GridShape,
    sprites: SpriteSet,
    tints: TintAssignment,
    clock: AnimationClock,
    // bumped whenever what gets drawn for a (sprite, frame) pair changes
    generation: u64,
}

impl Inspector {
    pub fn new(sheet: RgbaImage, options: InspectorOptions, now: Instant) -> Self {
        let InspectorOptions {
            frame_size,
            offset,
            shape,
            frame_duration,
        } = options;

        let sprites = extract(&sheet, frame_size, offset, shape);

        Self {
            sheet,
            frame_size,
            offset,
            shape,
            sprites,
            tints: TintAssignment::default(),
            clock: AnimationClock::new(shape.frames_per_sprite as usize, frame_duration, now),
            generation: 0,
        }
    }

    pub fn handle<R: Rng + ?Sized>(&mut self, command: Command, rng: &mut R) {
        match command {
            Command::GrowHeight => self.frame_size.grow_height(),
            Command::ShrinkHeight => self.frame_size.shrink_height(),
            Command::GrowWidth => self.frame_size.grow_width(),
            Command::ShrinkWidth => self.frame_size.shrink_width(),
            Command::OffsetUp => self.offset.y -= 1,
            Command::OffsetDown => self.offset.y += 1,
            Command::OffsetLeft => self.offset.x -= 1,
            Command::OffsetRight => self.offset.x += 1,
            Command::RefreshTints => {
                self.refresh_tints(rng);
                return;
            }
        }

        info!(
            "{:?}: frame size {}, offset {}",
            command, self.frame_size, self.offset
        );

        self.slice();
    }

    /// Slices the sheet again with the current frame size and offset.
    pub fn slice(&mut self) {
        self.sprites = extract(&self.sheet, self.frame_size, self.offset, self.shape);
        self.generation += 1;

        if self.sprites.skipped_frames() > 0 {
            info!(
                "{} frame(s) fell outside of the sheet",
                self.sprites.skipped_frames()
            );
        }
    }

    pub fn refresh_tints<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tints = TintAssignment::refresh(self.shape.sprite_ids(), rng);
        self.generation += 1;

        info!("Refreshed {} tint(s)", self.tints.len());
    }

    /// Returns true if the animation moved to another frame.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.clock.tick(now)
    }

    /// The image to draw for `sprite_index` at animation frame `frame_index`,
    /// tinted if the sprite has a tint.
    pub fn compose_frame(
        &self,
        sprite_index: usize,
        frame_index: usize,
    ) -> Result<RgbaImage, SheetError> {
        let Some(sprite) = self.sprites.get(sprite_index) else {
            return Err(SheetError::FrameIndex {
                id: self.shape.id_of(sprite_index),
                index: frame_index,
                available: 0,
            });
        };

        let frame = sprite.frame(frame_index)?;

        let res = match self.tints.get(sprite.id) {
            Some(tint) => apply_tint(frame, *tint),
            None => frame.clone(),
        };

        Ok(res)
    }

    pub fn current_frame(&self) -> usize {
        self.clock.current_frame()
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    #[cfg(test)]
    pub fn tints(&self) -> &TintAssignment {
        &self.tints
    }

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    pub fn offset(&self) -> SheetOffset {
        self.offset
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod test {
    use image::Rgba;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn options(frame_size: FrameSize) -> InspectorOptions {
        InspectorOptions {
            frame_size,
            offset: SheetOffset::default(),
            shape: GridShape {
                rows: 2,
                sprites_per_row: 2,
                frames_per_sprite: 3,
            },
            frame_duration: Duration::from_millis(150),
        }
    }

    // exactly enough room for 2 rows of 2 sprites with 3 frames of 8x8
    fn inspector() -> Inspector {
        let sheet = RgbaImage::from_fn(48, 16, |x, y| Rgba([x as u8, y as u8, 128, 255]));

        Inspector::new(sheet, options(FrameSize::new(8, 8)), Instant::now())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn starts_untinted_and_complete() {
        let inspector = inspector();

        assert_eq!(inspector.sprites().len(), 4);
        assert_eq!(inspector.sprites().skipped_frames(), 0);
        assert!(inspector.tints().is_empty());
        assert_eq!(inspector.current_frame(), 0);
    }

    #[test]
    fn size_commands() {
        let mut inspector = inspector();
        let mut rng = rng();

        inspector.handle(Command::GrowWidth, &mut rng);
        inspector.handle(Command::GrowHeight, &mut rng);
        assert_eq!(inspector.frame_size(), FrameSize::new(9, 9));

        inspector.handle(Command::ShrinkWidth, &mut rng);
        inspector.handle(Command::ShrinkHeight, &mut rng);
        assert_eq!(inspector.frame_size(), FrameSize::new(8, 8));

        (0..20).for_each(|_| inspector.handle(Command::ShrinkWidth, &mut rng));
        assert_eq!(inspector.frame_size().width(), 1);
    }

    #[test]
    fn offset_commands() {
        let mut inspector = inspector();
        let mut rng = rng();

        inspector.handle(Command::OffsetUp, &mut rng);
        inspector.handle(Command::OffsetLeft, &mut rng);
        inspector.handle(Command::OffsetLeft, &mut rng);
        assert_eq!(inspector.offset(), SheetOffset::new(-2, -1));

        inspector.handle(Command::OffsetDown, &mut rng);
        inspector.handle(Command::OffsetRight, &mut rng);
        assert_eq!(inspector.offset(), SheetOffset::new(-1, 0));
    }

    #[test]
    fn slicing_follows_parameters() {
        let mut inspector = inspector();
        let mut rng = rng();

        inspector.handle(Command::OffsetRight, &mut rng);

        let frame = inspector.compose_frame(0, 0).unwrap();
        assert_eq!(frame.get_pixel(0, 0), &Rgba([1, 0, 128, 255]));

        // last frame of every row now hangs off the right edge
        assert_eq!(inspector.sprites().skipped_frames(), 2);
    }

    #[test]
    fn refresh_tints_is_pure() {
        let mut inspector = inspector();
        let mut rng = rng();
        let generation = inspector.generation();

        inspector.handle(Command::RefreshTints, &mut rng);

        assert_eq!(inspector.tints().len(), 4);
        assert_eq!(inspector.offset(), SheetOffset::default());
        assert_eq!(inspector.frame_size(), FrameSize::new(8, 8));
        assert!(inspector.generation() > generation);
    }

    #[test]
    fn tints_survive_slicing() {
        let mut inspector = inspector();
        let mut rng = rng();

        inspector.handle(Command::RefreshTints, &mut rng);
        let tints = inspector.tints().clone();

        inspector.handle(Command::GrowWidth, &mut rng);
        assert_eq!(inspector.tints(), &tints);
    }

    #[test]
    fn compose_applies_tint() {
        let mut inspector = inspector();
        let mut rng = rng();

        let plain = inspector.compose_frame(3, 1).unwrap();
        inspector.handle(Command::RefreshTints, &mut rng);
        let tinted = inspector.compose_frame(3, 1).unwrap();

        let id = inspector.sprites().get(3).unwrap().id;
        let tint = *inspector.tints().get(id).unwrap();
        assert_eq!(tinted, apply_tint(&plain, tint));
    }

    #[test]
    fn short_sprite_fails_only_missing_frame() {
        let mut inspector = inspector();
        let mut rng = rng();

        // shift right so the third frame of each row is gone
        inspector.handle(Command::OffsetRight, &mut rng);

        // sprite 1 is the last one of row 0
        assert!(inspector.compose_frame(1, 0).is_ok());
        assert!(inspector.compose_frame(1, 1).is_ok());
        assert!(matches!(
            inspector.compose_frame(1, 2),
            Err(SheetError::FrameIndex { available: 2, .. })
        ));

        // other sprites are fine at the same frame
        assert!(inspector.compose_frame(0, 2).is_ok());
    }

    #[test]
    fn animation_runs_on_its_own() {
        let start = Instant::now();
        let sheet = RgbaImage::new(48, 16);
        let mut inspector = Inspector::new(sheet, options(FrameSize::new(8, 8)), start);

        assert!(!inspector.tick(start + Duration::from_millis(100)));
        assert!(inspector.tick(start + Duration::from_millis(150)));
        assert_eq!(inspector.current_frame(), 1);
    }
}
