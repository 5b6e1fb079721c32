use std::path::PathBuf;

use clap::Parser;

use crate::config::{parse_config, parse_config_from_file, Config};

#[derive(Debug, Parser)]
#[command(version, about = "Find the frame size and offset of a sprite sheet", long_about = None)]
pub struct SlicerCli {
    /// Sprite sheet to inspect, overrides `sheet` from the config
    pub sheet: Option<PathBuf>,
    /// Config file to use instead of `config.toml` next to the binary
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SlicerCli {
    pub fn into_config(self) -> eyre::Result<Config> {
        let mut config = match &self.config {
            Some(path) => parse_config_from_file(path)?,
            None => parse_config()?,
        };

        if let Some(sheet) = self.sheet {
            config.sheet = sheet;
        }

        Ok(config)
    }
}

pub fn cli() -> SlicerCli {
    SlicerCli::parse()
}
