mod cli;
mod config;
mod gui;
mod modules;

use std::process::ExitCode;

use eyre::WrapErr;
use log::{error, info};

fn run() -> eyre::Result<()> {
    let config = cli::cli().into_config()?;

    let sheet = sheet::open_sheet_from_file(&config.sheet)
        .wrap_err_with(|| format!("Cannot load sprite sheet {}", config.sheet.display()))?;

    info!(
        "Loaded {} ({}x{})",
        config.sheet.display(),
        sheet.width(),
        sheet.height()
    );

    gui::gui(config, sheet)
}

fn main() -> ExitCode {
    // Log to stderr, `RUST_LOG=debug` for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let err_exit = ExitCode::from(1);
    let ok_exit = ExitCode::from(0);

    match run() {
        Ok(_) => ok_exit,
        Err(err) => {
            error!("{:#}", err);
            err_exit
        }
    }
}
