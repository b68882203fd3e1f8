//! Paddles and how they are driven
//!
//! A paddle only ever moves vertically. Human and AI control both go through
//! the same up/down amounts, so the ball sees an identical paddle whichever is
//! in charge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::clock::{ClockTime, DropRate};
use super::error::{SimError, check_dt};
use super::geometry::Rect;
use super::predictor::{AiTuning, Prediction, Predictor, Reach, Steer};
use crate::config::Config;

/// Which end of the court a paddle defends (also the player index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    pub fn index(self) -> usize {
        match self {
            PaddleSide::Left => 0,
            PaddleSide::Right => 1,
        }
    }
}

/// Who is moving the paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Control {
    Manual,
    Auto(Predictor),
}

/// Per-tick inputs the AI needs from outside the court
pub struct AiInput<'a, R: Rng + ?Sized> {
    /// Current time of day in clock mode, `None` otherwise
    pub now: Option<ClockTime>,
    /// Source of prediction error
    pub rng: &'a mut R,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: PaddleSide,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub min_y: f32,
    pub max_y: f32,
    /// Vertical speed at full input (px/s)
    pub speed: f32,
    up: f32,
    down: f32,
    control: Control,
    tuning: AiTuning,
    drop_rate: DropRate,
}

impl Paddle {
    pub fn new(config: &Config, side: PaddleSide) -> Self {
        let min_y = config.wall_width;
        let max_y = config.height - config.wall_width - config.paddle_height;
        let x = match side {
            PaddleSide::Left => 0.0,
            PaddleSide::Right => config.width - config.paddle_width,
        };
        Self {
            side,
            pos: Vec2::new(x, min_y + (max_y - min_y) / 2.0),
            width: config.paddle_width,
            height: config.paddle_height,
            min_y,
            max_y,
            speed: (max_y - min_y) / config.paddle_speed,
            up: 0.0,
            down: 0.0,
            control: Control::Manual,
            tuning: AiTuning::from_config(config),
            drop_rate: DropRate::default(),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Move to `y`, kept inside the paddle's travel range
    pub fn set_y(&mut self, y: f32) {
        self.pos.y = y.max(self.min_y).min(self.max_y);
    }

    /// Set motion from a signed amount (negative is up)
    pub fn set_dir(&mut self, dy: f32) {
        self.up = if dy < 0.0 { -dy } else { 0.0 };
        self.down = if dy > 0.0 { dy } else { 0.0 };
    }

    pub fn move_up(&mut self) {
        self.up = 1.0;
    }

    pub fn move_down(&mut self) {
        self.down = 1.0;
    }

    pub fn stop_moving_up(&mut self) {
        self.up = 0.0;
    }

    pub fn stop_moving_down(&mut self) {
        self.down = 0.0;
    }

    pub fn is_moving_up(&self) -> bool {
        self.up > 0.0
    }

    pub fn is_moving_down(&self) -> bool {
        self.down > 0.0
    }

    pub fn is_auto(&self) -> bool {
        matches!(self.control, Control::Auto(_))
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Hand the paddle to the AI, or take it back. Taking it back stops it.
    pub fn set_auto(&mut self, on: bool) {
        match (&self.control, on) {
            (Control::Manual, true) => {
                log::debug!("{:?} paddle under AI control", self.side);
                self.control = Control::Auto(Predictor::new(self.tuning, self.drop_rate));
            }
            (Control::Auto(_), false) => {
                log::debug!("{:?} paddle under manual control", self.side);
                self.control = Control::Manual;
                self.set_dir(0.0);
            }
            _ => {}
        }
    }

    pub fn set_drop_rate(&mut self, rate: DropRate) {
        self.drop_rate = rate;
        if let Control::Auto(predictor) = &mut self.control {
            predictor.set_drop_rate(rate);
        }
    }

    /// Cancel any pending forced miss (after a goal)
    pub fn clear_forced_drop(&mut self) {
        if let Control::Auto(predictor) = &mut self.control {
            predictor.clear_forced_drop();
        }
    }

    /// Current AI prediction, for overlay drawing
    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.control {
            Control::Auto(predictor) => predictor.prediction(),
            Control::Manual => None,
        }
    }

    fn reach(&self) -> Reach {
        Reach {
            rect: self.rect(),
            min_y: self.min_y,
            max_y: self.max_y,
        }
    }

    /// Advance one frame: let the AI pick a direction (if auto), then move.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        ball: &Ball,
        input: &mut AiInput<'_, R>,
    ) -> Result<(), SimError> {
        if !check_dt(dt)? {
            return Ok(());
        }

        let reach = self.reach();
        let steer = match &mut self.control {
            Control::Auto(predictor) => Some(predictor.steer(dt, ball, &reach, input)),
            Control::Manual => None,
        };
        match steer {
            Some(Steer::Up) => {
                self.stop_moving_down();
                self.move_up();
            }
            Some(Steer::Down) => {
                self.stop_moving_up();
                self.move_down();
            }
            Some(Steer::Hold) => self.set_dir(0.0),
            None => {}
        }

        let amount = self.down - self.up;
        self.set_y(self.pos.y + amount * dt * self.speed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn idle_ball(config: &Config) -> Ball {
        Ball::new(config)
    }

    #[test]
    fn test_layout() {
        let config = Config::default();
        let left = Paddle::new(&config, PaddleSide::Left);
        let right = Paddle::new(&config, PaddleSide::Right);

        assert_eq!(left.left(), 0.0);
        assert_eq!(right.right(), 640.0);
        assert_eq!(left.min_y, 10.0);
        assert_eq!(left.max_y, 380.0);
        assert_eq!(left.top(), 195.0);
        assert_eq!(left.speed, 185.0);
        assert_eq!(PaddleSide::Right.index(), 1);
    }

    #[test]
    fn test_manual_movement_and_stop() {
        let config = Config::default();
        let ball = idle_ball(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut input = AiInput {
            now: None,
            rng: &mut rng,
        };
        let mut paddle = Paddle::new(&config, PaddleSide::Left);

        paddle.move_down();
        paddle.update(0.1, &ball, &mut input).unwrap();
        assert!((paddle.top() - 213.5).abs() < 1e-3);

        paddle.stop_moving_down();
        paddle.move_up();
        paddle.update(0.2, &ball, &mut input).unwrap();
        assert!((paddle.top() - 176.5).abs() < 1e-3);

        paddle.stop_moving_up();
        paddle.update(0.2, &ball, &mut input).unwrap();
        assert!((paddle.top() - 176.5).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_bad_dt() {
        let config = Config::default();
        let ball = idle_ball(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut input = AiInput {
            now: None,
            rng: &mut rng,
        };
        let mut paddle = Paddle::new(&config, PaddleSide::Left);
        paddle.move_down();
        assert!(paddle.update(-1.0, &ball, &mut input).is_err());
        assert!(paddle.update(f32::NAN, &ball, &mut input).is_err());
        assert_eq!(paddle.top(), 195.0);
    }

    #[test]
    fn test_set_auto_off_stops_paddle() {
        let config = Config::default();
        let mut paddle = Paddle::new(&config, PaddleSide::Right);
        paddle.set_auto(true);
        assert!(paddle.is_auto());
        paddle.move_up();
        paddle.set_auto(false);
        assert!(!paddle.is_auto());
        assert!(!paddle.is_moving_up());
        assert!(paddle.prediction().is_none());
    }

    proptest! {
        #[test]
        fn prop_stays_in_travel_range(
            amount in -50.0f32..50.0,
            steps in prop::collection::vec(0.0f32..2.0, 1..20),
        ) {
            let config = Config::default();
            let ball = idle_ball(&config);
            let mut rng = Pcg32::seed_from_u64(7);
            let mut input = AiInput { now: None, rng: &mut rng };
            let mut paddle = Paddle::new(&config, PaddleSide::Left);
            paddle.set_dir(amount);
            for dt in steps {
                paddle.update(dt, &ball, &mut input).unwrap();
                prop_assert!(paddle.top() >= paddle.min_y);
                prop_assert!(paddle.top() <= paddle.max_y);
            }
        }
    }
}
