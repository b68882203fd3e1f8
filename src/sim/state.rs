//! Match state
//!
//! Everything one match needs: the configuration it was built from, both
//! paddles, the ball, the scoreboard and the seeded RNG that drives serves and
//! AI error.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::clock::{ClockTime, DropRate};
use super::paddle::{Paddle, PaddleSide};
use super::predictor::Prediction;
use crate::config::{Config, ConfigError};

/// Whether a match is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No match in progress (paddles still respond to manual input)
    Idle,
    Playing,
}

/// Who is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Both paddles are AI and the scoreboard shows the time of day
    Clock,
    /// Left paddle is human, right is AI
    OnePlayer,
    TwoPlayer,
}

impl GameMode {
    pub fn from_players(players: u8) -> Self {
        match players {
            0 => GameMode::Clock,
            1 => GameMode::OnePlayer,
            _ => GameMode::TwoPlayer,
        }
    }
}

/// Things the driver may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Goal { scorer: PaddleSide, scores: [u32; 2] },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub seed: u64,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub scores: [u32; 2],
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build an idle match. The config is validated first.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            left: Paddle::new(&config, PaddleSide::Left),
            right: Paddle::new(&config, PaddleSide::Right),
            ball: Ball::new(&config),
            config,
            seed,
            phase: GamePhase::Idle,
            mode: GameMode::TwoPlayer,
            scores: [0, 0],
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn paddle(&self, side: PaddleSide) -> &Paddle {
        match side {
            PaddleSide::Left => &self.left,
            PaddleSide::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: PaddleSide) -> &mut Paddle {
        match side {
            PaddleSide::Left => &mut self.left,
            PaddleSide::Right => &mut self.right,
        }
    }

    /// Start a match with 0 (clock mode), 1 or 2 human players.
    /// Ignored while a match is already running.
    pub fn start(&mut self, players: u8, now: ClockTime) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.mode = GameMode::from_players(players);
        match self.mode {
            GameMode::Clock => {
                self.left.set_auto(true);
                self.left.set_drop_rate(DropRate::MINUTES);
                self.right.set_auto(true);
                self.right.set_drop_rate(DropRate::HOURS);
                self.scores = now.as_scores();
            }
            GameMode::OnePlayer => {
                self.right.set_auto(true);
                self.scores = [0, 0];
            }
            GameMode::TwoPlayer => self.scores = [0, 0],
        }

        self.phase = GamePhase::Playing;
        self.ball.reset(PaddleSide::Left, &mut self.rng);
        log::info!("Match started: {:?}, seed {}", self.mode, self.seed);
    }

    /// Abandon the match and hand both paddles back to manual control
    pub fn stop(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Idle;
        self.left.set_auto(false);
        self.right.set_auto(false);
        log::info!("Match stopped at {}-{}", self.scores[0], self.scores[1]);
    }

    /// Score a point for `scorer` and serve again
    pub fn goal(&mut self, scorer: PaddleSide, now: ClockTime) -> GameEvent {
        if self.mode == GameMode::Clock {
            self.scores = now.as_scores();
            self.left.clear_forced_drop();
            self.right.clear_forced_drop();
        } else {
            self.scores[scorer.index()] += 1;
        }
        log::info!(
            "Goal for {:?}: {:02}-{:02}",
            scorer,
            self.scores[0],
            self.scores[1]
        );

        self.ball.reset(scorer, &mut self.rng);
        GameEvent::Goal {
            scorer,
            scores: self.scores,
        }
    }

    pub fn show_footprints(&mut self, on: bool) {
        self.config.footprints = on;
        self.ball.set_footprints(on);
    }

    pub fn show_predictions(&mut self, on: bool) {
        self.config.predictions = on;
    }

    /// AI predictions for the overlay, left then right (empty unless enabled)
    pub fn predictions(&self) -> [Option<&Prediction>; 2] {
        if !self.config.predictions {
            return [None, None];
        }
        [self.left.prediction(), self.right.prediction()]
    }
}
