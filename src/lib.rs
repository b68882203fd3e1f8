//! Clock Pong - a Pong court that tells the time
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, paddle AI, match state)
//! - `config`: Data-driven court and AI tuning

pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulation ticks per second of wall-clock time
    pub const TICKS_PER_SECOND: u32 = 60;
}
