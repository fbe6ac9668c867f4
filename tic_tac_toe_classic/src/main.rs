use anyhow::{anyhow, Result};
use eframe::egui;
use tic_tac_toe_classic::{AppConfig, GameApp};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    if let Some(e) = config_error {
        warn!("⚠️ {}. Falling back to default settings.", e);
    }

    info!(
        "Starting {} ({}x{})",
        config.title, config.window_size[0], config.window_size[1]
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(|cc| Ok(Box::new(GameApp::new(cc)))),
    )
    .map_err(|e| anyhow!("Failed to run window: {e}"))
}
