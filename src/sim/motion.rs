//! Constant-acceleration integration
//!
//! The ball speeds up over the course of a rally: acceleration is applied along
//! each axis in whatever direction that axis is already travelling.

use glam::Vec2;

/// Result of advancing a point by one timestep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Integrated position (not clamped to anything)
    pub pos: Vec2,
    /// Integrated velocity
    pub vel: Vec2,
    /// Raw displacement `pos - start`, the ray collision tests cast along
    pub delta: Vec2,
}

/// -1, 0 or +1. Unlike `f32::signum`, zero stays zero.
#[inline]
fn direction(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Advance `pos`/`vel` by `dt` seconds under `accel` px/s².
///
/// A stationary axis stays stationary.
pub fn accelerate(pos: Vec2, vel: Vec2, accel: f32, dt: f32) -> Motion {
    let dir = Vec2::new(direction(vel.x), direction(vel.y));
    let next = pos + vel * dt + dir * (0.5 * accel * dt * dt);
    let vel = vel + dir * (accel * dt);
    Motion {
        pos: next,
        vel,
        delta: next - pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerates_along_travel() {
        let m = accelerate(Vec2::new(100.0, 100.0), Vec2::new(200.0, -100.0), 2.0, 0.5);
        // x: 100 + 100 + 0.25
        assert!((m.pos.x - 200.25).abs() < 1e-4);
        // y: 100 - 50 - 0.25
        assert!((m.pos.y - 49.75).abs() < 1e-4);
        assert!((m.vel.x - 201.0).abs() < 1e-4);
        assert!((m.vel.y - -101.0).abs() < 1e-4);
    }

    #[test]
    fn test_delta_is_displacement() {
        let start = Vec2::new(15.0, 240.0);
        let m = accelerate(start, Vec2::new(200.0, 0.0), 2.0, 0.05);
        assert!((m.delta - (m.pos - start)).length() < 1e-6);
        assert!((m.delta.x - 10.0025).abs() < 1e-4);
    }

    #[test]
    fn test_stationary_axis_stays_put() {
        let m = accelerate(Vec2::new(50.0, 50.0), Vec2::new(100.0, 0.0), 5.0, 1.0);
        assert_eq!(m.pos.y, 50.0);
        assert_eq!(m.vel.y, 0.0);
        assert_eq!(m.delta.y, 0.0);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let pos = Vec2::new(1.0, 2.0);
        let vel = Vec2::new(3.0, -4.0);
        let m = accelerate(pos, vel, 2.0, 0.0);
        assert_eq!(m.pos, pos);
        assert_eq!(m.vel, vel);
        assert_eq!(m.delta, Vec2::ZERO);
    }
}
