//! Per-frame update
//!
//! Order matters: both paddles move first, reacting to where the ball was at
//! the end of the previous frame, then the ball moves against the paddles'
//! new positions. Goals are detected once the ball is fully off the court.

use super::clock::ClockTime;
use super::error::{SimError, check_dt};
use super::paddle::{AiInput, PaddleSide};
use super::state::{GameEvent, GameMode, GamePhase, GameState};

/// Manual paddle commands (ignored for AI-controlled paddles)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleCommand {
    MoveUp,
    MoveDown,
    StopMovingUp,
    StopMovingDown,
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Time of day, used for the clock-mode scoreboard and drops
    pub now: ClockTime,
    pub commands: Vec<(PaddleSide, PaddleCommand)>,
}

/// Advance the match by `dt` seconds
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
) -> Result<Option<GameEvent>, SimError> {
    if !check_dt(dt)? {
        return Ok(None);
    }

    for &(side, command) in &input.commands {
        let paddle = state.paddle_mut(side);
        if paddle.is_auto() {
            continue;
        }
        match command {
            PaddleCommand::MoveUp => paddle.move_up(),
            PaddleCommand::MoveDown => paddle.move_down(),
            PaddleCommand::StopMovingUp => paddle.stop_moving_up(),
            PaddleCommand::StopMovingDown => paddle.stop_moving_down(),
        }
    }

    {
        let now = (state.mode == GameMode::Clock).then_some(input.now);
        let mut ai = AiInput {
            now,
            rng: &mut state.rng,
        };
        state.left.update(dt, &state.ball, &mut ai)?;
        state.right.update(dt, &state.ball, &mut ai)?;
    }

    if state.phase != GamePhase::Playing {
        return Ok(None);
    }

    state.ball.update(dt, &state.left, &state.right)?;

    let event = if state.ball.left() > state.config.width {
        Some(state.goal(PaddleSide::Left, input.now))
    } else if state.ball.right() < 0.0 {
        Some(state.goal(PaddleSide::Right, input.now))
    } else {
        None
    };
    Ok(event)
}
