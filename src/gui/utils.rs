use eframe::egui::{self, Color32};
use image::RgbaImage;

use crate::modules::inspector::Inspector;

pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let (width, height) = img.dimensions();

    egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], img.as_raw())
}

pub fn rgb_to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Current slicing parameters, so they can be read off the title bar.
/// `skipped` is how many visible sprites could not be drawn this tick.
pub fn window_title(base: &str, inspector: &Inspector, skipped: usize) -> String {
    let frame_size = inspector.frame_size();
    let offset = inspector.offset();

    let mut title = format!("{} - frame {} offset {}", base, frame_size, offset);

    if skipped > 0 {
        title.push_str(&format!(" - {} sprite(s) skipped", skipped));
    }

    title
}
