#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative match state management for Pong.

mod entities;
#[cfg(any(test, feature = "scenario_scaffolding"))]
pub mod scaffolding;

use pong_core::{ArenaConfig, Command, ConfigError, Controller, Difficulty, Event, Score, Side};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use self::entities::{Ball, Paddle};

/// Vertical spin imparted per pixel of offset between ball and paddle centres.
const SPIN_DIVISOR: i32 = 10;

/// Choices made before a match starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSetup {
    controller: Controller,
    difficulty: Difficulty,
    seed: u64,
}

impl MatchSetup {
    /// Creates a match setup with the provided controller, difficulty and RNG seed.
    #[must_use]
    pub const fn new(controller: Controller, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            controller,
            difficulty,
            seed,
        }
    }

    /// Who steers the right paddle.
    #[must_use]
    pub const fn controller(&self) -> Controller {
        self.controller
    }

    /// Difficulty the computer opponent starts with.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Seed used for every random serve in the match.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Represents the authoritative Pong match state.
#[derive(Debug)]
pub struct World {
    arena: ArenaConfig,
    left: Paddle,
    right: Paddle,
    ball: Ball,
    score: Score,
    controller: Controller,
    difficulty: Difficulty,
    running: bool,
    rng: ChaCha8Rng,
    frame_index: u64,
}

impl World {
    /// Creates a new match with centred paddles and a freshly served ball.
    pub fn new(arena: ArenaConfig, setup: MatchSetup) -> Result<Self, ConfigError> {
        arena.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(setup.seed);
        let ball = Ball::served(&arena, &mut rng);
        Ok(Self {
            left: Paddle::new(Side::Left, &arena),
            right: Paddle::new(Side::Right, &arena),
            ball,
            score: Score::new(),
            controller: setup.controller,
            difficulty: setup.difficulty,
            running: true,
            rng,
            frame_index: 0,
            arena,
        })
    }

    fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn tick(&mut self, out_events: &mut Vec<Event>) {
        self.frame_index = self.frame_index.saturating_add(1);

        self.left.advance(&self.arena);
        self.right.advance(&self.arena);
        if self.ball.advance(&self.arena) {
            out_events.push(Event::BallBouncedOffWall);
        }

        self.resolve_paddle_contact(out_events);
        self.resolve_scoring(out_events);
    }

    fn resolve_paddle_contact(&mut self, out_events: &mut Vec<Event>) {
        // The left paddle is tested first and wins when both overlap.
        let side = if self.ball.rect.intersects(&self.left.rect) {
            Side::Left
        } else if self.ball.rect.intersects(&self.right.rect) {
            Side::Right
        } else {
            return;
        };

        let paddle = self.paddle(side).rect;
        let paddle_center = self.paddle(side).center_y();
        let offset = self.ball.rect.center_y() - paddle_center;

        self.ball.x_velocity = -self.ball.x_velocity;
        self.ball.y_velocity += offset / SPIN_DIVISOR;
        self.ball.rect.x = match side {
            Side::Left => paddle.right(),
            Side::Right => paddle.x - self.ball.rect.width,
        };

        out_events.push(Event::BallHitPaddle { side });
    }

    fn resolve_scoring(&mut self, out_events: &mut Vec<Event>) {
        // The player defending the edge the ball crossed concedes the point.
        if self.ball.rect.x <= 0 {
            self.award_point(Side::Left.opponent(), out_events);
        }
        if self.ball.rect.right() >= self.arena.screen_width() {
            self.award_point(Side::Right.opponent(), out_events);
        }
    }

    fn award_point(&mut self, scorer: Side, out_events: &mut Vec<Event>) {
        self.score.award(scorer);
        log::debug!(
            "{scorer:?} scores, {} - {}",
            self.score.left,
            self.score.right
        );
        out_events.push(Event::PointScored {
            scorer,
            score: self.score,
        });

        self.ball.serve(&self.arena, &mut self.rng);
        out_events.push(Event::BallServed {
            x_velocity: self.ball.x_velocity,
            y_velocity: self.ball.y_velocity,
        });
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SetPaddleVelocity { side, velocity } => {
            world.paddle_mut(side).y_velocity = velocity;
        }
        Command::SetDifficulty { difficulty } => {
            log::info!("Difficulty set to {}", difficulty.label());
            if world.difficulty != difficulty {
                world.difficulty = difficulty;
                out_events.push(Event::DifficultyChanged { difficulty });
            }
        }
        Command::Tick => {
            if world.running {
                world.tick(out_events);
            }
        }
        Command::Quit => {
            if world.running {
                world.running = false;
                out_events.push(Event::MatchEnded);
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use pong_core::{ArenaConfig, BallSnapshot, Controller, Difficulty, PaddleSnapshot, Score, Side};

    /// Dimensions and speeds the match was created with.
    #[must_use]
    pub fn arena(world: &World) -> &ArenaConfig {
        &world.arena
    }

    /// Captures the paddle defending the provided side.
    #[must_use]
    pub fn paddle(world: &World, side: Side) -> PaddleSnapshot {
        world.paddle(side).snapshot()
    }

    /// Captures the ball.
    #[must_use]
    pub fn ball(world: &World) -> BallSnapshot {
        world.ball.snapshot()
    }

    /// Vertical centre the ball is expected to reach at the right edge.
    #[must_use]
    pub fn predicted_intercept(world: &World) -> i32 {
        world.ball.predicted_intercept(&world.arena)
    }

    /// Current scoreboard.
    #[must_use]
    pub fn score(world: &World) -> Score {
        world.score
    }

    /// Active opponent difficulty.
    #[must_use]
    pub fn difficulty(world: &World) -> Difficulty {
        world.difficulty
    }

    /// Who steers the right paddle.
    #[must_use]
    pub fn controller(world: &World) -> Controller {
        world.controller
    }

    /// Reports whether the match still accepts ticks.
    #[must_use]
    pub fn is_running(world: &World) -> bool {
        world.running
    }

    /// Number of ticks simulated since the match started.
    #[must_use]
    pub fn frames_elapsed(world: &World) -> u64 {
        world.frame_index
    }
}
