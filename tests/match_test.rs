//! Whole-match behaviour: scenarios, invariants over long runs, determinism.

use clock_pong::Config;
use clock_pong::consts::SIM_DT;
use clock_pong::sim::{
    AiInput, Ball, ClockTime, DropRate, GameEvent, GameState, Paddle, PaddleSide, TickInput,
    tick,
};
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn run_clock_match(
    seed: u64,
    start: ClockTime,
    frames: u32,
) -> (GameState, Vec<(ClockTime, GameEvent)>) {
    let mut state = GameState::new(Config::default(), seed).unwrap();
    state.start(0, start);
    let mut events = Vec::new();
    for frame in 0..frames {
        let input = TickInput {
            now: start.advanced(frame / 60),
            ..Default::default()
        };
        if let Some(event) = tick(&mut state, &input, SIM_DT).unwrap() {
            events.push((input.now, event));
        }
    }
    (state, events)
}

#[test]
fn ball_returns_off_paddle_face() {
    let config = Config::default();
    let left = Paddle::new(&config, PaddleSide::Left);
    let right = Paddle::new(&config, PaddleSide::Right);
    assert_eq!(left.rect().bottom - left.rect().top, 90.0);

    // Ball 15px in front of the left paddle's face, closing at 200px/s
    let mut ball = Ball::new(&config);
    ball.pos = Vec2::new(left.right() + ball.radius + 6.0, 240.0);
    ball.vel = Vec2::new(-200.0, 0.0);

    ball.update(0.05, &left, &right).unwrap();
    assert!(ball.vel.x > 0.0, "dx must reverse");
    assert!((ball.pos.x - (left.right() + ball.radius)).abs() < 1e-3);

    // Same thing mirrored at the right paddle: the face it meets is its left edge
    ball.pos = Vec2::new(right.left() - ball.radius - 6.0, 240.0);
    ball.vel = Vec2::new(200.0, 0.0);
    ball.update(0.05, &left, &right).unwrap();
    assert!(ball.vel.x < 0.0);
    assert!((ball.pos.x - (right.left() - ball.radius)).abs() < 1e-3);
}

#[test]
fn top_wall_flips_vertical_only() {
    let config = Config::default();
    let left = Paddle::new(&config, PaddleSide::Left);
    let right = Paddle::new(&config, PaddleSide::Right);

    for dx in [-150.0, 0.0, 150.0] {
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(320.0, ball.min_y + 1.0);
        ball.vel = Vec2::new(dx, -120.0);
        ball.update(0.05, &left, &right).unwrap();
        assert_eq!(ball.pos.y, ball.min_y);
        assert!(ball.vel.y > 0.0);
        if dx == 0.0 {
            assert_eq!(ball.vel.x, 0.0);
        } else {
            assert_eq!(ball.vel.x.signum(), dx.signum());
        }
    }
}

#[test]
fn auto_paddle_keeps_prediction_until_reaction_time() {
    let config = Config::default();
    let mut paddle = Paddle::new(&config, PaddleSide::Right);
    paddle.set_auto(true);
    let mut ball = Ball::new(&config);
    ball.pos = Vec2::new(200.0, 150.0);
    ball.vel = Vec2::new(180.0, 60.0);

    let mut rng = Pcg32::seed_from_u64(77);
    let mut input = AiInput {
        now: None,
        rng: &mut rng,
    };
    paddle.update(SIM_DT, &ball, &mut input).unwrap();
    let first = *paddle.prediction().expect("ball approaching");

    ball.pos += ball.vel * SIM_DT;
    paddle.update(SIM_DT, &ball, &mut input).unwrap();
    let second = *paddle.prediction().unwrap();

    assert_eq!(first.point, second.point);
    assert_eq!(first.exact, second.exact);
    assert!(second.since > first.since);
}

#[test]
fn auto_paddle_moves_toward_intercept() {
    let config = Config {
        ai_error_level: 0.0,
        ..Default::default()
    };
    let mut paddle = Paddle::new(&config, PaddleSide::Right);
    paddle.set_auto(true);
    let mut ball = Ball::new(&config);
    ball.pos = Vec2::new(320.0, 100.0);
    ball.vel = Vec2::new(200.0, -20.0);

    let mut rng = Pcg32::seed_from_u64(1);
    let mut input = AiInput {
        now: None,
        rng: &mut rng,
    };
    let start = paddle.center_y();
    for _ in 0..30 {
        paddle.update(SIM_DT, &ball, &mut input).unwrap();
    }
    let target = paddle.prediction().unwrap().exact.y;
    assert!(target < start);
    assert!((paddle.center_y() - target).abs() < (start - target).abs());
}

#[test]
fn forced_drop_lets_the_clock_tick_over() {
    // Left paddle drops on minute rollovers: 10:42 must appear on the board
    let start = ClockTime::new(10, 41, 50);
    let (state, events) = run_clock_match(2024, start, 60 * 60);

    assert!(!events.is_empty(), "the forced drop should concede a goal");
    for (now, event) in &events {
        let GameEvent::Goal { scores, .. } = event;
        assert_eq!(*scores, now.as_scores());
    }
    assert_eq!(state.scores, [10, 42]);
}

#[test]
fn invariants_hold_over_long_match() {
    let start = ClockTime::new(8, 0, 0);
    let mut state = GameState::new(Config::default(), 31337).unwrap();
    state.start(0, start);
    for frame in 0..60 * 120 {
        let input = TickInput {
            now: start.advanced(frame / 60),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT).unwrap();

        let ball = &state.ball;
        assert!(ball.pos.y >= ball.min_y && ball.pos.y <= ball.max_y);
        for paddle in [&state.left, &state.right] {
            assert!(paddle.top() >= paddle.min_y && paddle.top() <= paddle.max_y);
        }
    }
}

#[test]
fn same_seed_same_match() {
    let start = ClockTime::new(12, 30, 0);
    let (a, events_a) = run_clock_match(99, start, 60 * 45);
    let (b, events_b) = run_clock_match(99, start, 60 * 45);

    assert_eq!(events_a, events_b);
    assert_eq!(a.ball.pos.x.to_bits(), b.ball.pos.x.to_bits());
    assert_eq!(a.ball.pos.y.to_bits(), b.ball.pos.y.to_bits());
    assert_eq!(a.ball.vel.x.to_bits(), b.ball.vel.x.to_bits());
    assert_eq!(a.ball.vel.y.to_bits(), b.ball.vel.y.to_bits());
    assert_eq!(a.left.pos.y.to_bits(), b.left.pos.y.to_bits());
    assert_eq!(a.right.pos.y.to_bits(), b.right.pos.y.to_bits());
}

#[test]
fn drop_rates_follow_clock_mode() {
    let mut state = GameState::new(Config::default(), 1).unwrap();
    state.start(0, ClockTime::new(6, 0, 0));
    assert!(DropRate::HOURS.wants_drop(ClockTime::new(6, 0, 30)));
    // Right paddle holds the hour rate: it is forced on the first tick
    let input = TickInput {
        now: ClockTime::new(6, 0, 30),
        ..Default::default()
    };
    state.ball.pos = Vec2::new(320.0, 240.0);
    state.ball.vel = Vec2::new(200.0, 30.0);
    tick(&mut state, &input, SIM_DT).unwrap();
    let drop_target = state.right.prediction().unwrap();
    assert_eq!(drop_target.point, drop_target.exact);
}
