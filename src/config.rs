//! Match configuration
//!
//! Court, paddle, ball and AI tuning. Speeds are expressed the way the game
//! feels them: seconds for a paddle to cross the court vertically, seconds for
//! the ball (at serve speed) to cross it horizontally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in playable height {playable}")]
    PaddleTooTall { paddle: f32, playable: f32 },

    #[error("ball diameter {diameter} does not fit in playable height {playable}")]
    BallTooLarge { diameter: f32, playable: f32 },

    #[error(
        "paddle height {paddle} leaves no room to miss a ball of radius {radius} in playable height {playable}"
    )]
    NoRoomToMiss {
        paddle: f32,
        radius: f32,
        playable: f32,
    },
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Court ===
    /// Logical court width
    pub width: f32,
    /// Logical court height
    pub height: f32,
    /// Thickness of the top and bottom walls
    pub wall_width: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Seconds for a paddle to cross the court vertically
    pub paddle_speed: f32,

    // === Ball ===
    /// Seconds for the ball to cross the court horizontally at serve speed
    pub ball_speed: f32,
    /// Acceleration along the direction of travel (px/s²)
    pub ball_accel: f32,
    pub ball_radius: f32,
    /// Vertical speed added or removed when a moving paddle returns the ball
    pub ball_spin_adjust: f32,

    // === AI ===
    /// Seconds before the AI re-predicts when the ball hasn't changed direction
    pub ai_reaction: f32,
    /// Maximum prediction error at full court distance (px)
    pub ai_error_level: f32,

    // === Diagnostics ===
    /// Record ball footprints for trail drawing
    pub footprints: bool,
    /// Expose AI predictions for overlay drawing
    pub predictions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            wall_width: 10.0,

            paddle_width: 14.0,
            paddle_height: 90.0,
            paddle_speed: 2.0,

            ball_speed: 3.0,
            ball_accel: 2.0,
            ball_radius: 10.0,
            ball_spin_adjust: 50.0,

            ai_reaction: 0.4,
            ai_error_level: 60.0,

            footprints: true,
            predictions: false,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded config: {}x{} court", config.width, config.height);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Height between the two walls
    pub fn playable_height(&self) -> f32 {
        self.height - 2.0 * self.wall_width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
            ("ball_radius", self.ball_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("wall_width", self.wall_width),
            ("ball_accel", self.ball_accel),
            ("ball_spin_adjust", self.ball_spin_adjust),
            ("ai_reaction", self.ai_reaction),
            ("ai_error_level", self.ai_error_level),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let playable = self.playable_height();
        if self.paddle_height > playable {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                playable,
            });
        }
        if 2.0 * self.ball_radius > playable {
            return Err(ConfigError::BallTooLarge {
                diameter: 2.0 * self.ball_radius,
                playable,
            });
        }
        // A paddle parked at either stop must clear a ball aimed at mid-court
        if 2.0 * (self.paddle_height + self.ball_radius) >= playable {
            return Err(ConfigError::NoRoomToMiss {
                paddle: self.paddle_height,
                radius: self.ball_radius,
                playable,
            });
        }
        Ok(())
    }
}
