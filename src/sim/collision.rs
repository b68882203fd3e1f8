//! Collision detection between the ball and rectangles
//!
//! The ball is a circle and every obstacle is axis-aligned, so growing the
//! rectangle by the ball radius turns the problem into "does the centre's path
//! cross an edge". Only edges the ball is approaching are considered.

use glam::Vec2;

use super::geometry::{Intercept, Rect, Side, intersect};

/// Find the first edge of `rect` crossed by a ball of `radius` travelling from
/// `pos` along `delta`.
///
/// Horizontal motion is checked first (right edge when moving left, left edge
/// when moving right); the vertical edges facing the motion are only tried if
/// that misses. Returns `None` when the path stays clear this tick.
pub fn ball_intercept(pos: Vec2, radius: f32, rect: &Rect, delta: Vec2) -> Option<Intercept> {
    let grown = rect.expanded(radius);
    let end = pos + delta;

    let horizontal = if delta.x < 0.0 {
        intersect(
            pos,
            end,
            Vec2::new(grown.right, grown.top),
            Vec2::new(grown.right, grown.bottom),
            Side::Right,
        )
    } else if delta.x > 0.0 {
        intersect(
            pos,
            end,
            Vec2::new(grown.left, grown.top),
            Vec2::new(grown.left, grown.bottom),
            Side::Left,
        )
    } else {
        None
    };

    horizontal.or_else(|| {
        if delta.y < 0.0 {
            intersect(
                pos,
                end,
                Vec2::new(grown.left, grown.bottom),
                Vec2::new(grown.right, grown.bottom),
                Side::Bottom,
            )
        } else if delta.y > 0.0 {
            intersect(
                pos,
                end,
                Vec2::new(grown.left, grown.top),
                Vec2::new(grown.right, grown.top),
                Side::Top,
            )
        } else {
            None
        }
    })
}
