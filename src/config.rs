//! Parses config file

use std::{
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use std::env;

use eyre::eyre;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Sprite sheet to inspect
    pub sheet: PathBuf,
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub rows: u32,
    pub sprites_per_row: u32,
    pub frames_per_sprite: u32,
    /// Rows of the preview grid, columns follow from the sprite count
    pub display_rows: u32,
    /// Gap between sprites in the preview grid
    pub spacing: u32,
    /// How long one animation frame stays on screen
    pub frame_time_ms: u64,
    /// Repaint rate cap
    pub fps: u32,
    pub background: [u8; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: PathBuf::from("sprites.png"),
            title: String::from("Fish!"),
            window_width: 600,
            window_height: 300,
            frame_width: 48,
            frame_height: 48,
            offset_x: 0,
            offset_y: 0,
            rows: 8,
            sprites_per_row: 4,
            frames_per_sprite: 3,
            display_rows: 4,
            spacing: 10,
            frame_time_ms: 150,
            fps: 600,
            background: [255, 255, 255],
        }
    }
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        let must_be_positive: &[(&str, u64)] = &[
            ("window_width", self.window_width as u64),
            ("window_height", self.window_height as u64),
            ("frame_width", self.frame_width as u64),
            ("frame_height", self.frame_height as u64),
            ("rows", self.rows as u64),
            ("sprites_per_row", self.sprites_per_row as u64),
            ("frames_per_sprite", self.frames_per_sprite as u64),
            ("display_rows", self.display_rows as u64),
            ("frame_time_ms", self.frame_time_ms),
            ("fps", self.fps as u64),
        ];

        if let Some((name, _)) = must_be_positive.iter().find(|(_, value)| *value == 0) {
            return Err(eyre!("`{}` must be at least 1", name));
        }

        Ok(())
    }
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

/// Parse `config.toml` in the same folder as the binary.
///
/// No file there means the built-in defaults.
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    if !path.exists() {
        log::debug!("No {} at {}, using defaults", CONFIG_FILE_NAME, path.display());
        return Ok(Config::default());
    }

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let mut config = parse_config_from_str(&buffer)?;

    // relative sheet path is relative to the config file
    if config.sheet.is_relative() {
        if let Some(root) = path.parent() {
            config.sheet = root.join(&config.sheet);
        }
    }

    log::info!("Loaded config from {}", path.display());

    Ok(config)
}

pub fn parse_config_from_str(s: &str) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    config.validate()?;

    Ok(config)
}
