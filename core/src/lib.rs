#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Pong engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! describing what happened during the frame. Systems read immutable
//! snapshots such as [`PaddleSnapshot`] and [`BallSnapshot`] and respond
//! exclusively with new command batches.

mod arena;

use serde::{Deserialize, Serialize};

pub use arena::{ArenaConfig, ConfigError};

/// Text shown below the playfield describing the live difficulty hotkeys.
pub const DIFFICULTY_HINT: &str = "AI Difficulty: 1-Easy, 2-Medium, 3-Hard";

/// Frames simulated per second of wall-clock time.
///
/// Every velocity in the engine is expressed in pixels per frame at this rate.
pub const FRAMES_PER_SECOND: u32 = 60;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Sets the vertical velocity applied to a paddle on the next tick.
    SetPaddleVelocity {
        /// Paddle receiving the new velocity.
        side: Side,
        /// Signed pixels per frame; positive values move the paddle down.
        velocity: i32,
    },
    /// Switches the computer opponent to a new difficulty tier.
    SetDifficulty {
        /// Tier that becomes active.
        difficulty: Difficulty,
    },
    /// Advances the simulation by a single fixed frame.
    Tick,
    /// Requests that the match stop at the end of the current frame.
    Quit,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Announces that the opponent difficulty changed.
    DifficultyChanged {
        /// Tier that became active.
        difficulty: Difficulty,
    },
    /// Reports that the ball reflected off the top or bottom edge.
    BallBouncedOffWall,
    /// Reports that the ball was returned by a paddle.
    BallHitPaddle {
        /// Paddle that returned the ball.
        side: Side,
    },
    /// Reports that a player won a point.
    PointScored {
        /// Player credited with the point.
        scorer: Side,
        /// Scoreboard after the point was awarded.
        score: Score,
    },
    /// Confirms that the ball was placed at the centre with a fresh velocity.
    BallServed {
        /// Horizontal velocity of the served ball.
        x_velocity: i32,
        /// Vertical velocity of the served ball.
        y_velocity: i32,
    },
    /// Confirms that the match stopped running.
    MatchEnded,
}

/// Identifies one half of the court and the paddle defending it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Paddle on the left edge, always controlled by the first player.
    Left,
    /// Paddle on the right edge, controlled by the second player or the computer.
    Right,
}

impl Side {
    /// Returns the opposite side of the court.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Difficulty tiers available to the computer opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Slow, hesitant tracking that often idles.
    Easy,
    /// Full-speed tracking with a generous dead zone.
    #[default]
    Medium,
    /// Full-speed tracking with a tight dead zone.
    Hard,
}

impl Difficulty {
    /// Human readable label used in log output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }

    /// Maps the `1`, `2` and `3` hotkeys to their difficulty tier.
    #[must_use]
    pub const fn from_hotkey(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Who steers the right-hand paddle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// The computer opponent tracks the ball.
    #[default]
    Computer,
    /// A second player uses the arrow keys.
    Human,
}

/// Vertical steering requested for a human-controlled paddle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Steering {
    /// No movement requested.
    #[default]
    Idle,
    /// Move toward the top of the screen.
    Up,
    /// Move toward the bottom of the screen.
    Down,
}

impl Steering {
    /// Resolves a pair of held keys into steering; `down` wins when both are held.
    #[must_use]
    pub const fn from_keys(up: bool, down: bool) -> Self {
        if down {
            Self::Down
        } else if up {
            Self::Up
        } else {
            Self::Idle
        }
    }

    /// Signed velocity for a paddle moving at `speed` pixels per frame.
    #[must_use]
    pub const fn velocity(self, speed: i32) -> i32 {
        match self {
            Self::Idle => 0,
            Self::Up => -speed,
            Self::Down => speed,
        }
    }
}

/// Points won by each player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Points won by the left player.
    pub left: u32,
    /// Points won by the right player.
    pub right: u32,
}

impl Score {
    /// Creates an empty scoreboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { left: 0, right: 0 }
    }

    /// Awards a single point to the provided side.
    pub fn award(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    /// Points held by the provided side.
    #[must_use]
    pub const fn of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Axis-aligned rectangle measured in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the left edge.
    pub x: i32,
    /// Vertical position of the top edge.
    pub y: i32,
    /// Extent along the horizontal axis.
    pub width: i32,
    /// Extent along the vertical axis.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal position one past the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Vertical position one past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Vertical centre, rounded toward the top edge.
    #[must_use]
    pub const fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Reports whether the rectangle encloses no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Reports whether two rectangles overlap.
    ///
    /// Rectangles that merely share an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    #[must_use]
    pub const fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Read-only view of a paddle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaddleSnapshot {
    /// Side of the court defended by the paddle.
    pub side: Side,
    /// Bounding box of the paddle.
    pub rect: Rect,
    /// Vertical velocity applied on the next tick.
    pub y_velocity: i32,
}

impl PaddleSnapshot {
    /// Vertical centre of the paddle.
    #[must_use]
    pub const fn center_y(&self) -> i32 {
        self.rect.center_y()
    }
}

/// Read-only view of the ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BallSnapshot {
    /// Bounding box of the ball.
    pub rect: Rect,
    /// Horizontal velocity in pixels per frame.
    pub x_velocity: i32,
    /// Vertical velocity in pixels per frame.
    pub y_velocity: i32,
}
