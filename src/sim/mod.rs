//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through explicit `dt` arguments
//! - Randomness only through a caller-supplied RNG
//! - Wall-clock time only through `ClockTime` values handed in by the driver
//! - No rendering or platform dependencies

pub mod ball;
pub mod clock;
pub mod collision;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod paddle;
pub mod predictor;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use clock::{Clock, ClockTime, DropRate, FixedClock, SystemClock};
pub use collision::ball_intercept;
pub use error::SimError;
pub use geometry::{Intercept, Rect, Side, intersect};
pub use motion::{Motion, accelerate};
pub use paddle::{AiInput, Control, Paddle, PaddleSide};
pub use predictor::{AiTuning, Prediction, Predictor, unroll_bounces};
pub use state::{GameEvent, GameMode, GamePhase, GameState};
pub use tick::{PaddleCommand, TickInput, tick};
