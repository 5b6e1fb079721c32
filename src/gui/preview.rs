use std::collections::HashMap;

use eframe::egui::{self, pos2, vec2, Color32, Rect};
use log::{info, warn};

use sheet::error::SheetError;

use crate::modules::{inspector::Inspector, layout::GridLayout};

use super::{constants::SPRITE_TEXTURE_OPTIONS, utils::rgba_to_color_image};

/// One sprite to draw this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawItem {
    pub sprite_index: usize,
    pub frame_index: usize,
    /// Relative to the top left corner of the window
    pub position: (i64, i64),
}

#[derive(Debug, Default)]
pub struct DrawPlan {
    pub items: Vec<DrawItem>,
    /// Sprites that do not have the current frame, skipped for this tick only
    pub failed: Vec<(usize, SheetError)>,
}

impl DrawPlan {
    pub fn is_err(&self) -> bool {
        !self.failed.is_empty()
    }

    fn failed_indices(&self) -> Vec<usize> {
        self.failed.iter().map(|(index, _)| *index).collect()
    }
}

/// Decides what goes where for the current frame. A sprite missing the
/// current frame only drops itself.
pub fn plan_draw(inspector: &Inspector, layout: &GridLayout) -> DrawPlan {
    let frame_index = inspector.current_frame();
    let mut plan = DrawPlan::default();

    for (sprite_index, sprite) in inspector.sprites().sprites().iter().enumerate() {
        let Some(position) = layout.cell_position(sprite_index) else {
            break;
        };

        match sprite.frame(frame_index) {
            Ok(_) => plan.items.push(DrawItem {
                sprite_index,
                frame_index,
                position,
            }),
            Err(err) => plan.failed.push((sprite_index, err)),
        }
    }

    plan
}

/// Uploaded (sprite, frame) images, valid for one inspector generation.
#[derive(Default)]
struct TextureCache {
    generation: u64,
    textures: HashMap<(usize, usize), egui::TextureHandle>,
}

impl TextureCache {
    fn texture_id(
        &mut self,
        ctx: &egui::Context,
        inspector: &Inspector,
        sprite_index: usize,
        frame_index: usize,
    ) -> Result<egui::TextureId, SheetError> {
        if self.generation != inspector.generation() {
            // dropping the handles frees the textures
            self.textures.clear();
            self.generation = inspector.generation();
        }

        let key = (sprite_index, frame_index);

        if let Some(handle) = self.textures.get(&key) {
            return Ok(handle.id());
        }

        let img = inspector.compose_frame(sprite_index, frame_index)?;
        let handle = ctx.load_texture(
            format!("sprite {} frame {}", sprite_index, frame_index),
            rgba_to_color_image(&img),
            SPRITE_TEXTURE_OPTIONS,
        );
        let id = handle.id();

        self.textures.insert(key, handle);

        Ok(id)
    }
}

pub struct Preview {
    display_rows: usize,
    spacing: u32,
    textures: TextureCache,
    // what failed last tick, to not log the same thing every repaint
    last_failed: Vec<usize>,
}

impl Preview {
    pub fn new(display_rows: usize, spacing: u32) -> Self {
        Self {
            display_rows,
            spacing,
            textures: TextureCache::default(),
            last_failed: vec![],
        }
    }

    /// Draws the current frame of every visible sprite into `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui, inspector: &Inspector) -> DrawPlan {
        let area = ui.max_rect();
        let frame_size = inspector.frame_size();

        let layout = GridLayout::new(
            inspector.sprites().len(),
            self.display_rows,
            frame_size,
            self.spacing,
            (area.width() as u32, area.height() as u32),
        );

        let mut plan = plan_draw(inspector, &layout);
        let painter = ui.painter();
        let uv = Rect::from_min_max(pos2(0., 0.), pos2(1., 1.));

        for item in plan.items.iter() {
            let texture_id =
                self.textures
                    .texture_id(ui.ctx(), inspector, item.sprite_index, item.frame_index);

            let texture_id = match texture_id {
                Ok(id) => id,
                Err(err) => {
                    plan.failed.push((item.sprite_index, err));
                    continue;
                }
            };

            let min = area.min + vec2(item.position.0 as f32, item.position.1 as f32);
            let rect = Rect::from_min_size(
                min,
                vec2(frame_size.width() as f32, frame_size.height() as f32),
            );

            painter.image(texture_id, rect, uv, Color32::WHITE);
        }

        self.report(&plan);

        plan
    }

    /// Logs the sprites that could not be drawn, only when they differ from
    /// last tick. Returns true if anything was logged.
    fn report(&mut self, plan: &DrawPlan) -> bool {
        let failed = plan.failed_indices();

        if failed == self.last_failed {
            return false;
        }

        for (index, err) in plan.failed.iter() {
            warn!("Error drawing sprite at index {}: {}", index, err);
        }

        if !plan.is_err() {
            info!("Every visible sprite is drawn again");
        }

        self.last_failed = failed;

        true
    }
}
