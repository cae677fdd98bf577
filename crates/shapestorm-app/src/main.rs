use std::fs::File;
use std::io::{stdout, BufWriter};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use shapestorm_app::game_loop;
use shapestorm_app::input::InputTranslator;
use shapestorm_app::render::TerminalRenderer;
use shapestorm_app::terminal::{self, TerminalGuard};
use shapestorm_app::viewport::Viewport;
use shapestorm_core::config::GameConfig;
use shapestorm_core::constants::DEFAULT_CONFIG_PATH;
use shapestorm_sim::Game;

const LOG_FILE: &str = "shapestorm.log";

fn main() -> Result<()> {
    // The terminal is taken over by the game, so logs go to a file.
    let log_file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load(&config_path)
        .with_context(|| format!("could not load config from {config_path}"))?;

    let seed: u64 = rand::random();
    let framerate = config.window.framerate;
    let title = config.window.title.clone();
    let bounds = config.window.bounds();
    let mut game = Game::new(config, seed);

    let mut out = BufWriter::new(stdout());
    let guard = TerminalGuard::enter(&mut out, &title).context("failed to set up terminal")?;
    let (cols, rows) = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut viewport = Viewport::new(bounds, cols, rows);
    let mut translator = InputTranslator::new(framerate, guard.reports_key_releases());
    let mut renderer = TerminalRenderer::new(out, viewport);
    let events = terminal::spawn_event_reader().context("failed to start input thread")?;

    let result = game_loop::run(
        &mut game,
        &events,
        &mut translator,
        &mut viewport,
        &mut renderer,
    );
    drop(guard);

    let frames = result?;
    println!(
        "Score: {}  Highscore: {}  ({frames} frames)",
        game.score().score,
        game.score().highscore
    );
    Ok(())
}
