mod api;
mod app;
mod config;
mod router;
mod upload;
mod utils;

use app::LatexUploader;
use clap::Parser;
use config::AppConfig;
use std::error::Error;
use utils::task::TaskRunner;

/// Desktop client for the image to LaTeX conversion backend
#[derive(Parser, Debug)]
#[command(name = "latex-uploader", version, about)]
struct Cli {
    /// Backend base URL, overrides the configured one for this run
    #[arg(long)]
    base_url: Option<String>,

    /// Page to open on startup
    #[arg(long, default_value = "/")]
    route: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Ok(path) = AppConfig::get_config_path() {
        log::info!("Configuration file: {}", path.display());
    }
    let config = AppConfig::load_or_default().with_base_url(cli.base_url);
    let tasks = TaskRunner::new()?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    let start_route = cli.route;
    eframe::run_native(
        "Image to LaTeX Converter",
        options,
        Box::new(move |cc| Box::new(LatexUploader::new(cc, config, tasks, &start_route))),
    )?;

    Ok(())
}
