//! Clock Pong headless runner
//!
//! Plays a clock-mode match against the local time of day without drawing
//! anything, logging every goal. Useful for watching the AI and the drop
//! schedule over long stretches.

use std::path::{Path, PathBuf};

use clap::Parser;
use clock_pong::consts::{SIM_DT, TICKS_PER_SECOND};
use clock_pong::sim::{Clock, GameEvent, GameState, SystemClock, TickInput, tick};
use clock_pong::{Config, ConfigError};
use thiserror::Error;

/// One simulated day, the longest run that makes sense against a clock
const MAX_SECONDS: i64 = 24 * 60 * 60;

#[derive(Parser)]
#[command(name = "clock-pong")]
#[command(about = "Play a headless clock-mode match of Pong", long_about = None)]
struct Cli {
    /// Simulated seconds to play
    #[arg(default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..=MAX_SECONDS))]
    seconds: u32,

    /// RNG seed; random when omitted
    seed: Option<u64>,

    /// JSON file overriding the default tuning
    #[arg(long, env = "CLOCK_PONG_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Config { path: PathBuf, source: ConfigError },
}

fn load_config(path: &Path) -> Result<Config, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Config::from_json(&json).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let config = match cli.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let start = SystemClock.now();
    log::info!(
        "Running {}s of clock mode from {:02}:{:02}:{:02}, seed {}",
        cli.seconds,
        start.hours,
        start.minutes,
        start.seconds,
        seed
    );
    state.start(0, start);

    let frames = cli.seconds.saturating_mul(TICKS_PER_SECOND);
    let mut goals = 0u32;
    for frame in 0..frames {
        let input = TickInput {
            now: start.advanced(frame / TICKS_PER_SECOND),
            ..Default::default()
        };
        match tick(&mut state, &input, SIM_DT) {
            Ok(Some(GameEvent::Goal { scores, .. })) => {
                goals += 1;
                log::info!(
                    "[{:02}:{:02}:{:02}] scoreboard {:02}:{:02}",
                    input.now.hours,
                    input.now.minutes,
                    input.now.seconds,
                    scores[0],
                    scores[1]
                );
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Simulation error: {}", e);
                std::process::exit(1);
            }
        }
    }

    state.stop();
    log::info!("Done: {} goals in {}s", goals, cli.seconds);
}
