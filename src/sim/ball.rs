//! The ball
//!
//! Each tick the ball is integrated freely, bounced off the top and bottom
//! walls, and then tested against whichever paddle it is heading toward. It is
//! never stopped at the court's left/right edges; going past them is a goal and
//! the match driver handles that.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::ball_intercept;
use super::error::{SimError, check_dt};
use super::motion::accelerate;
use super::paddle::{Paddle, PaddleSide};
use crate::config::Config;

/// Maximum footprints kept for trail drawing
pub const FOOTPRINT_LIMIT: usize = 50;
/// Ticks between footprints while the ball keeps its heading
pub const FOOTPRINT_INTERVAL: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Legal range for the centre
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    /// Serve speed (px/s on each axis)
    pub speed: f32,
    pub accel: f32,
    /// Vertical speed a moving paddle adds on contact
    pub spin: f32,
    dx_changed: bool,
    dy_changed: bool,
    record_footprints: bool,
    footprint_countdown: u32,
    footprints: VecDeque<Vec2>,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        let radius = config.ball_radius;
        let min_x = radius;
        let max_x = config.width - radius;
        Self {
            pos: Vec2::new(config.width / 2.0, config.height / 2.0),
            vel: Vec2::ZERO,
            radius,
            min_x,
            max_x,
            min_y: config.wall_width + radius,
            max_y: config.height - config.wall_width - radius,
            speed: (max_x - min_x) / config.ball_speed,
            accel: config.ball_accel,
            spin: config.ball_spin_adjust,
            dx_changed: false,
            dy_changed: false,
            record_footprints: config.footprints,
            footprint_countdown: 0,
            footprints: VecDeque::with_capacity(FOOTPRINT_LIMIT),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Recent positions, oldest first
    pub fn footprints(&self) -> impl Iterator<Item = &Vec2> {
        self.footprints.iter()
    }

    pub fn set_footprints(&mut self, on: bool) {
        self.record_footprints = on;
        self.footprints.clear();
    }

    /// Serve from `server`'s end of the court toward the other player
    pub fn reset<R: Rng + ?Sized>(&mut self, server: PaddleSide, rng: &mut R) {
        self.footprints.clear();
        self.footprint_countdown = 0;
        let y = if self.min_y < self.max_y {
            rng.random_range(self.min_y..=self.max_y)
        } else {
            self.min_y
        };
        let (x, dx) = match server {
            PaddleSide::Left => (self.min_x, self.speed),
            PaddleSide::Right => (self.max_x, -self.speed),
        };
        self.pos = Vec2::new(x, y);
        self.set_dir(Vec2::new(dx, self.speed));
        log::debug!("Ball served from {:?} at y={:.1}", server, y);
    }

    fn set_dir(&mut self, vel: Vec2) {
        self.dx_changed = (self.vel.x < 0.0) != (vel.x < 0.0);
        self.dy_changed = (self.vel.y < 0.0) != (vel.y < 0.0);
        self.vel = vel;
    }

    fn footprint(&mut self) {
        if !self.record_footprints {
            return;
        }
        if self.footprint_countdown == 0 || self.dx_changed || self.dy_changed {
            self.footprints.push_back(self.pos);
            if self.footprints.len() > FOOTPRINT_LIMIT {
                self.footprints.pop_front();
            }
            self.footprint_countdown = FOOTPRINT_INTERVAL;
        } else {
            self.footprint_countdown -= 1;
        }
    }

    /// Advance one frame against the two paddles
    pub fn update(&mut self, dt: f32, left: &Paddle, right: &Paddle) -> Result<(), SimError> {
        if !check_dt(dt)? {
            return Ok(());
        }

        let mut next = accelerate(self.pos, self.vel, self.accel, dt);

        if next.vel.y > 0.0 && next.pos.y > self.max_y {
            next.pos.y = self.max_y;
            next.vel.y = -next.vel.y;
        } else if next.vel.y < 0.0 && next.pos.y < self.min_y {
            next.pos.y = self.min_y;
            next.vel.y = -next.vel.y;
        }

        let paddle = if next.vel.x < 0.0 { left } else { right };
        if let Some(hit) = ball_intercept(self.pos, self.radius, &paddle.rect(), next.delta) {
            if hit.side.is_vertical_edge() {
                next.pos.x = hit.point.x;
                next.vel.x = -next.vel.x;
            } else {
                next.pos.y = hit.point.y;
                next.vel.y = -next.vel.y;
            }

            if paddle.is_moving_up() {
                next.vel.y -= self.spin;
            } else if paddle.is_moving_down() {
                next.vel.y += self.spin;
            }
            log::trace!("Ball hit {:?} paddle on {:?} edge", paddle.side, hit.side);
        }

        self.pos = Vec2::new(next.pos.x, next.pos.y.max(self.min_y).min(self.max_y));
        self.set_dir(next.vel);
        self.footprint();
        Ok(())
    }
}
