mod config;
mod ui;

use clap::Parser;
use common::config::Validate;
use common::games::snake::{SnakeDriver, SnakeSession, SnakeSessionSettings};
use common::{log, logger};
use eframe::egui;
use std::time::Instant;

use config::{get_config_manager, CONFIG_FILE};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "neon_snake")]
struct Args {
    /// Path to the YAML config; defaults are used when the file does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Writes the effective config back to the config path.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if args.seed.is_some() {
        config.game.seed = args.seed;
    }
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some(config.logging.prefix.clone().unwrap_or_else(|| "Snake".to_string()))
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix, args.verbose || config.logging.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", args.config);
    }

    let settings = SnakeSessionSettings::from(&config.game);
    let board_size = settings.grid_size as f32 * config.window.cell_size;

    let runtime = tokio::runtime::Runtime::new()?;
    let driver = {
        let _guard = runtime.enter();
        SnakeDriver::spawn(SnakeSession::new(settings, Instant::now()))
    };

    let app = SnakeApp::new(driver, config.window.cell_size, config.window.event_log_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size + 280.0, board_size + 80.0])
            .with_title("Neon Snake"),
        ..Default::default()
    };

    eframe::run_native("Neon Snake", options, Box::new(|_cc| Ok(Box::new(app))))?;

    log!("Window closed, shutting down");
    Ok(())
}
