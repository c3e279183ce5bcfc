mod board;
mod config;
mod error;
mod fruit;
mod game;
mod snake;
mod term;

use std::{env, fs::OpenOptions, sync::Mutex};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::GameConfig;
use crate::game::SnakeGame;
use crate::term::{KeyReader, TermManager};

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

/// Path of the log file. Logging is off when unset, stdout belongs to the board.
const LOG_ENV_VAR: &str = "SNAKE_LOG";

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut term = TermManager::new();
    term.setup().context("could not put the terminal in raw mode")?;

    let outcome = SnakeGame::new(GameConfig::default(), KeyReader, &mut term, rand::thread_rng())
        .and_then(|mut game| {
            game.play()?;
            Ok((game.score(), game.state()))
        });

    // Restore before reporting any error so the message lands on a sane terminal
    term.restore().context("could not restore the terminal")?;

    let (score, state) = outcome?;
    info!(score, ?state, "Session ended");
    Ok(())
}

fn init_logging() {
    let Some(log_path) = env::var_os(LOG_ENV_VAR) else {
        return;
    };

    // Runs before raw mode, so plain eprintln! still lands on a normal terminal
    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {}", log_path.to_string_lossy(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging disabled: {}", e);
    }
}
