use std::time::{Duration, Instant};

use eframe::egui::{self, Color32};
use eyre::eyre;
use image::RgbaImage;
use rand::rngs::ThreadRng;
use sheet::{FrameSize, GridShape, SheetOffset};

use crate::{
    config::Config,
    modules::{
        input::commands,
        inspector::{Inspector, InspectorOptions},
    },
};

use self::{
    constants::PROGRAM_NAME,
    preview::Preview,
    utils::{rgb_to_color32, window_title},
};

mod constants;
mod preview;
mod utils;

pub fn gui(config: Config, sheet: RgbaImage) -> eyre::Result<()> {
    let app = SlicerApp::new(&config, sheet);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_resizable(false)
            .with_maximize_button(false)
            .with_title(app.shown_title.clone()),
        ..Default::default()
    };

    let gui_res = eframe::run_native(PROGRAM_NAME, options, Box::new(|_cc| Ok(Box::new(app))));

    match gui_res {
        Ok(_) => Ok(()),
        Err(err) => Err(eyre!("Error with running {} GUI: {}", PROGRAM_NAME, err)),
    }
}

pub struct SlicerApp {
    inspector: Inspector,
    preview: Preview,
    rng: ThreadRng,
    title: String,
    // last title sent to the window
    shown_title: String,
    background: Color32,
    repaint_after: Duration,
}

impl SlicerApp {
    pub fn new(config: &Config, sheet: RgbaImage) -> Self {
        let options = InspectorOptions {
            frame_size: FrameSize::new(config.frame_width, config.frame_height),
            offset: SheetOffset::new(config.offset_x, config.offset_y),
            shape: GridShape {
                rows: config.rows,
                sprites_per_row: config.sprites_per_row,
                frames_per_sprite: config.frames_per_sprite,
            },
            frame_duration: Duration::from_millis(config.frame_time_ms),
        };

        let inspector = Inspector::new(sheet, options, Instant::now());
        let shown_title = window_title(&config.title, &inspector, 0);

        Self {
            inspector,
            preview: Preview::new(config.display_rows as usize, config.spacing),
            rng: rand::thread_rng(),
            title: config.title.clone(),
            shown_title,
            background: rgb_to_color32(config.background),
            repaint_after: Duration::from_secs_f64(1. / config.fps.max(1) as f64),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let commands = ctx.input(|i| commands(&i.events));

        for command in commands {
            self.inspector.handle(command, &mut self.rng);
        }
    }

    fn update_title(&mut self, ctx: &egui::Context, skipped: usize) {
        let title = window_title(&self.title, &self.inspector, skipped);

        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}

impl eframe::App for SlicerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.inspector.tick(Instant::now());

        let plan = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.background))
            .show(ctx, |ui| self.preview.show(ui, &self.inspector))
            .inner;

        self.update_title(ctx, plan.failed.len());

        // keeps the animation going without input
        ctx.request_repaint_after(self.repaint_after);
    }
}
