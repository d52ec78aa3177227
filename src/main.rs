//! Casteroids entry point
//!
//! Loads configuration and assets, then hands control to the winit loop.

use std::process::ExitCode;

use winit::event_loop::EventLoop;

use casteroids::app::App;
use casteroids::assets::Assets;
use casteroids::config::{CONFIG_PATH, GameConfig};
use casteroids::error::InitError;

fn run() -> Result<Option<u32>, InitError> {
    let config = GameConfig::load(CONFIG_PATH)?;
    let assets = Assets::load();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, assets);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(app.final_score()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Casteroids starting...");

    match run() {
        Ok(score) => {
            if let Some(score) = score {
                log::info!("Thanks for playing! Score: {}", score);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
