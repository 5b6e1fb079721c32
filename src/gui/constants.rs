use eframe::egui::TextureOptions;

pub const PROGRAM_NAME: &str = "slicer";

// pixel art stays crisp
pub const SPRITE_TEXTURE_OPTIONS: TextureOptions = TextureOptions::NEAREST;
