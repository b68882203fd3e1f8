//! Computer opponent
//!
//! The AI does not track the ball directly. It casts the ball's current
//! heading out to the paddle's plane, folds the result back into the court to
//! account for wall bounces, and then sits on that guess until the ball changes
//! direction or the guess goes stale. Guesses get sloppier the further away the
//! ball is.
//!
//! In clock mode a paddle is also told to miss on purpose once per minute (or
//! hour) so the scoreboard can tick over.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::clock::{ClockTime, DROP_WINDOW_SECS, DropRate};
use super::collision::ball_intercept;
use super::geometry::Rect;
use super::paddle::AiInput;
use crate::config::Config;

/// How far ahead the ball's velocity is projected when looking for the plane
const LOOKAHEAD: f32 = 10.0;
/// Half-height of the virtual strip standing in for the paddle's plane
const PLANE_HALF_HEIGHT: f32 = 10_000.0;
/// Slack around the paddle centre before the AI bothers moving
const DEAD_ZONE: f32 = 5.0;

/// AI parameters shared by every paddle in a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiTuning {
    /// Seconds a prediction is trusted while the ball keeps its heading
    pub reaction: f32,
    /// Maximum error (px) at a full court width of distance
    pub error_level: f32,
    pub court_width: f32,
}

impl AiTuning {
    pub fn from_config(config: &Config) -> Self {
        Self {
            reaction: config.ai_reaction,
            error_level: config.ai_error_level,
            court_width: config.width,
        }
    }
}

/// Where the AI expects to meet the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Target the paddle steers toward (includes injected error)
    pub point: Vec2,
    /// Error-free target
    pub exact: Vec2,
    /// Ball velocity when the prediction was made
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    /// Seconds since the prediction was made
    pub since: f32,
}

/// The part of a paddle the AI needs to plan with
#[derive(Debug, Clone, Copy)]
pub struct Reach {
    pub rect: Rect,
    pub min_y: f32,
    pub max_y: f32,
}

impl Reach {
    fn height(&self) -> f32 {
        self.rect.bottom - self.rect.top
    }

    /// Band the ball centre can occupy while in front of this paddle
    fn ball_band(&self, radius: f32) -> (f32, f32) {
        (self.min_y + radius, self.max_y + self.height() - radius)
    }
}

/// Movement decision for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Up,
    Down,
    Hold,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predictor {
    tuning: AiTuning,
    drop_rate: DropRate,
    prediction: Option<Prediction>,
    /// Next prediction should miss
    force_drop: bool,
    /// A drop already fired in the current window
    dropped: bool,
}

impl Predictor {
    pub fn new(tuning: AiTuning, drop_rate: DropRate) -> Self {
        Self {
            tuning,
            drop_rate,
            prediction: None,
            force_drop: false,
            dropped: false,
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn set_drop_rate(&mut self, rate: DropRate) {
        self.drop_rate = rate;
    }

    pub fn is_forcing_drop(&self) -> bool {
        self.force_drop
    }

    pub fn clear_forced_drop(&mut self) {
        self.force_drop = false;
    }

    /// Decide which way to move this frame
    pub fn steer<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        ball: &Ball,
        reach: &Reach,
        input: &mut AiInput<'_, R>,
    ) -> Steer {
        let rect = &reach.rect;
        let receding = (ball.pos.x < rect.left && ball.vel.x < 0.0)
            || (ball.pos.x > rect.right && ball.vel.x > 0.0);
        if receding {
            return Steer::Hold;
        }

        self.predict(dt, ball, reach, input);

        let Some(prediction) = &self.prediction else {
            return Steer::Hold;
        };
        let center = rect.top + reach.height() / 2.0;
        if prediction.point.y < center - DEAD_ZONE {
            Steer::Up
        } else if prediction.point.y > center + DEAD_ZONE {
            Steer::Down
        } else {
            Steer::Hold
        }
    }

    /// Arm or release the clock-mode miss for the current time
    fn update_drop_window(&mut self, now: ClockTime) {
        if !self.dropped && self.drop_rate.wants_drop(now) {
            log::info!(
                "Forcing a miss at {:02}:{:02}:{:02}",
                now.hours,
                now.minutes,
                now.seconds
            );
            self.force_drop = true;
            self.dropped = true;
            self.prediction = None;
        }
        if now.seconds > DROP_WINDOW_SECS {
            self.dropped = false;
        }
    }

    /// Refresh the stored prediction if it is stale
    pub fn predict<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        ball: &Ball,
        reach: &Reach,
        input: &mut AiInput<'_, R>,
    ) {
        if let Some(now) = input.now {
            self.update_drop_window(now);
        }

        if let Some(prediction) = &mut self.prediction {
            let same_heading =
                prediction.dx * ball.vel.x > 0.0 && prediction.dy * ball.vel.y > 0.0;
            if same_heading && prediction.since < self.tuning.reaction {
                prediction.since += dt;
                return;
            }
        }

        self.prediction = self.fresh_prediction(ball, reach, input);
        if let Some(p) = &self.prediction {
            log::trace!(
                "Predicted intercept ({:.1}, {:.1}), exact y {:.1}",
                p.point.x,
                p.point.y,
                p.exact.y
            );
        }
    }

    fn fresh_prediction<R: Rng + ?Sized>(
        &self,
        ball: &Ball,
        reach: &Reach,
        input: &mut AiInput<'_, R>,
    ) -> Option<Prediction> {
        let plane = reach.rect.vertical_strip(PLANE_HALF_HEIGHT);
        let hit = ball_intercept(ball.pos, ball.radius, &plane, ball.vel * LOOKAHEAD)?;

        let (top, bottom) = reach.ball_band(ball.radius);
        let mut target = unroll_bounces(hit.point.y, top, bottom)?;
        if self.force_drop {
            // Sit at whichever end of the band is furthest from the real intercept
            target = if target <= (top + bottom) / 2.0 {
                bottom
            } else {
                top
            };
        }

        let exact = Vec2::new(hit.point.x, target);
        let mut point = exact;
        if !self.force_drop {
            let distance = if ball.vel.x < 0.0 {
                ball.pos.x - reach.rect.right
            } else {
                reach.rect.left - ball.pos.x
            };
            let closeness = distance / self.tuning.court_width;
            let error = (self.tuning.error_level * closeness).abs();
            if error > 0.0 {
                point.y += input.rng.random_range(-error..=error);
            }
        }

        Some(Prediction {
            point,
            exact,
            dx: ball.vel.x,
            dy: ball.vel.y,
            radius: ball.radius,
            since: 0.0,
        })
    }
}

/// Fold `y` back into `[top, bottom]` as if it had bounced off both ends.
///
/// Equivalent to mirroring across whichever bound was crossed until the value
/// lands inside, but in constant time. Non-finite input has no answer.
pub fn unroll_bounces(y: f32, top: f32, bottom: f32) -> Option<f32> {
    if !y.is_finite() {
        return None;
    }
    let span = bottom - top;
    if span <= 0.0 {
        return Some(top);
    }
    if (top..=bottom).contains(&y) {
        return Some(y);
    }

    let period = 2.0 * span;
    let phase = (y - top).rem_euclid(period);
    let folded = if phase > span {
        top + period - phase
    } else {
        top + phase
    };
    Some(folded.max(top).min(bottom))
}
