use std::collections::HashMap;

use image::{Rgb, RgbaImage};
use rand::Rng;

use crate::SpriteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub color: Rgb<u8>,
    /// 0 leaves the frame untouched, 255 is the fully multiplied color.
    pub intensity: u8,
}

impl Tint {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            color: Rgb([rng.gen(), rng.gen(), rng.gen()]),
            intensity: rng.gen(),
        }
    }
}

/// Tint per grid cell. Empty until the first refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TintAssignment {
    tints: HashMap<SpriteId, Tint>,
}

impl TintAssignment {
    /// Draws a brand new tint for every id. Nothing from a previous assignment survives.
    pub fn refresh<R: Rng + ?Sized>(ids: impl IntoIterator<Item = SpriteId>, rng: &mut R) -> Self {
        let tints = ids
            .into_iter()
            .map(|id| (id, Tint::random(&mut *rng)))
            .collect::<HashMap<SpriteId, Tint>>();

        Self { tints }
    }

    pub fn get(&self, id: SpriteId) -> Option<&Tint> {
        self.tints.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tints.is_empty()
    }
}

// (a * b) / 255 rounded
fn mul_255(a: u32, b: u32) -> u32 {
    (a * b + 127) / 255
}

/// Multiplies the frame with `tint.color`, then lays that over the original
/// frame with `tint.intensity` as opacity. Alpha is kept as is.
pub fn apply_tint(frame: &RgbaImage, tint: Tint) -> RgbaImage {
    let alpha = tint.intensity as u32;
    let mut res = frame.clone();

    res.pixels_mut().for_each(|pixel| {
        for channel in 0..3 {
            let source = pixel[channel] as u32;
            let multiplied = mul_255(source, tint.color[channel] as u32);

            pixel[channel] = mul_255(source, 255 - alpha)
                .saturating_add(mul_255(multiplied, alpha))
                .min(255) as u8;
        }
    });

    res
}
