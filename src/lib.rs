// ==================== Imports ====================
use anyhow::Context;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

mod browser;
pub mod command;
pub mod config;
pub mod control;
pub mod engine;
pub mod entity;
pub mod game;
pub mod input;
pub mod render;
pub mod sprite;
pub mod timestep;
pub mod vector;
pub mod weapon;

use config::{html, GameConfig};
use engine::{CanvasSurface, GameLoop};
use game::Game;

// ==================== Main Functions ====================
/// Main entry for Webassembly module
/// - installs panic hook + console logger
/// - loads `game.json` (defaults when missing)
/// - builds the Game over the two canvas layers and starts the loop
#[wasm_bindgen]
pub fn main_js() -> Result<(), JsValue> {
    // setup better panic messages for debugging
    console_error_panic_hook::set_once();
    browser::init_logging(log::LevelFilter::Info);

    browser::spawn_local(async move {
        if let Err(err) = start().await {
            log::error!("Could not start game : {:#}", err);
        }
    });

    Ok(())
}

async fn start() -> anyhow::Result<()> {
    let config = load_config().await;
    if config.debug {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let background = CanvasSurface::from_canvas_id(html::BACKGROUND_ID)
        .context("Failed to set up background layer")?;
    let foreground = CanvasSurface::from_canvas_id(html::FOREGROUND_ID)
        .context("Failed to set up foreground layer")?;
    let key_events = browser::keyboard_events().context("Failed to listen for keys")?;
    let hud = browser::element(html::HUD_ID);

    let game = Game::new(&config, background, foreground);
    GameLoop::start(game, key_events, hud)
}

async fn load_config() -> GameConfig {
    match browser::fetch_json::<GameConfig>(html::CONFIG_PATH).await {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "Using default config, could not load {} : {:#}",
                html::CONFIG_PATH,
                err
            );
            GameConfig::default()
        }
    }
}
