//! Line segment geometry for the court
//!
//! Everything that moves in the court is tested against straight edges, so the
//! only primitive needed is segment/segment intersection plus an axis-aligned
//! rectangle to hang those edges off.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which edge of a rectangle was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// True for the two vertical edges (a hit reverses horizontal velocity)
    #[inline]
    pub fn is_vertical_edge(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// A crossing point on a labelled edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intercept {
    pub point: Vec2,
    pub side: Side,
}

/// Axis-aligned rectangle in court coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            right: left + width,
            top,
            bottom: top + height,
        }
    }

    /// Grow the rectangle outward by `amount` on every side
    pub fn expanded(&self, amount: f32) -> Self {
        Self {
            left: self.left - amount,
            right: self.right + amount,
            top: self.top - amount,
            bottom: self.bottom + amount,
        }
    }

    /// An unbounded vertical strip covering the same horizontal span
    pub fn vertical_strip(&self, half_height: f32) -> Self {
        Self {
            left: self.left,
            right: self.right,
            top: -half_height,
            bottom: half_height,
        }
    }
}

/// Intersect segment `a1→a2` with segment `b1→b2`.
///
/// Both parametric coordinates must land in `[0, 1]` (inclusive). Parallel and
/// collinear segments report no intersection.
pub fn intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2, side: Side) -> Option<Intercept> {
    let a = a2 - a1;
    let b = b2 - b1;
    let denom = b.y * a.x - b.x * a.y;
    if denom == 0.0 {
        return None;
    }

    let offset = a1 - b1;
    let ua = (b.x * offset.y - b.y * offset.x) / denom;
    if !(0.0..=1.0).contains(&ua) {
        return None;
    }
    let ub = (a.x * offset.y - a.y * offset.x) / denom;
    if !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(Intercept {
        point: a1 + a * ua,
        side,
    })
}
