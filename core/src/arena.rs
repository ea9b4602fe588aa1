use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Rect, Side};

const CLASSIC_SCREEN_WIDTH: i32 = 800;
const CLASSIC_SCREEN_HEIGHT: i32 = 600;
const CLASSIC_PADDLE_WIDTH: i32 = 15;
const CLASSIC_PADDLE_HEIGHT: i32 = 90;
const CLASSIC_PADDLE_SPEED: i32 = 5;
const CLASSIC_PADDLE_MARGIN: i32 = 50;
const CLASSIC_BALL_SIZE: i32 = 15;
const CLASSIC_BALL_SPEED: i32 = 5;

/// Immutable dimensions and speeds that define a match.
///
/// All lengths are pixels and all speeds are pixels per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArenaConfig {
    screen_width: i32,
    screen_height: i32,
    paddle_width: i32,
    paddle_height: i32,
    paddle_speed: i32,
    paddle_margin: i32,
    ball_size: i32,
    ball_speed: i32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl ArenaConfig {
    /// The 800×600 arena with 15×90 paddles and a 15 pixel ball.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            screen_width: CLASSIC_SCREEN_WIDTH,
            screen_height: CLASSIC_SCREEN_HEIGHT,
            paddle_width: CLASSIC_PADDLE_WIDTH,
            paddle_height: CLASSIC_PADDLE_HEIGHT,
            paddle_speed: CLASSIC_PADDLE_SPEED,
            paddle_margin: CLASSIC_PADDLE_MARGIN,
            ball_size: CLASSIC_BALL_SIZE,
            ball_speed: CLASSIC_BALL_SPEED,
        }
    }

    /// Overrides the playfield dimensions.
    #[must_use]
    pub const fn with_screen_size(mut self, width: i32, height: i32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Overrides the paddle footprint and speed.
    #[must_use]
    pub const fn with_paddle(mut self, width: i32, height: i32, speed: i32) -> Self {
        self.paddle_width = width;
        self.paddle_height = height;
        self.paddle_speed = speed;
        self
    }

    /// Overrides the gap between each paddle and its side edge.
    #[must_use]
    pub const fn with_paddle_margin(mut self, margin: i32) -> Self {
        self.paddle_margin = margin;
        self
    }

    /// Overrides the ball edge length and per-axis serve speed.
    #[must_use]
    pub const fn with_ball(mut self, size: i32, speed: i32) -> Self {
        self.ball_size = size;
        self.ball_speed = speed;
        self
    }

    /// Width of the playfield.
    #[must_use]
    pub const fn screen_width(&self) -> i32 {
        self.screen_width
    }

    /// Height of the playfield.
    #[must_use]
    pub const fn screen_height(&self) -> i32 {
        self.screen_height
    }

    /// Width of each paddle.
    #[must_use]
    pub const fn paddle_width(&self) -> i32 {
        self.paddle_width
    }

    /// Height of each paddle.
    #[must_use]
    pub const fn paddle_height(&self) -> i32 {
        self.paddle_height
    }

    /// Full paddle speed.
    #[must_use]
    pub const fn paddle_speed(&self) -> i32 {
        self.paddle_speed
    }

    /// Gap between each paddle and its side edge.
    #[must_use]
    pub const fn paddle_margin(&self) -> i32 {
        self.paddle_margin
    }

    /// Edge length of the square ball.
    #[must_use]
    pub const fn ball_size(&self) -> i32 {
        self.ball_size
    }

    /// Magnitude of each velocity component when the ball is served.
    #[must_use]
    pub const fn ball_speed(&self) -> i32 {
        self.ball_speed
    }

    /// Lowest `y` a paddle may occupy before clamping.
    #[must_use]
    pub const fn paddle_travel(&self) -> i32 {
        self.screen_height - self.paddle_height
    }

    /// Starting bounding box for the paddle on the provided side.
    #[must_use]
    pub const fn paddle_start(&self, side: Side) -> Rect {
        let x = match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.screen_width - self.paddle_margin - self.paddle_width,
        };
        let y = self.screen_height / 2 - self.paddle_height / 2;
        Rect::new(x, y, self.paddle_width, self.paddle_height)
    }

    /// Bounding box of a freshly served ball.
    #[must_use]
    pub const fn serve_position(&self) -> Rect {
        Rect::new(
            self.screen_width / 2 - self.ball_size / 2,
            self.screen_height / 2 - self.ball_size / 2,
            self.ball_size,
            self.ball_size,
        )
    }

    /// Checks that the arena can host a match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.paddle_margin < 0 {
            return Err(ConfigError::NegativeMargin {
                margin: self.paddle_margin,
            });
        }

        if self.paddle_height > self.screen_height {
            return Err(ConfigError::PaddleTallerThanScreen {
                paddle_height: self.paddle_height,
                screen_height: self.screen_height,
            });
        }

        if self.ball_size >= self.screen_height || self.ball_size >= self.screen_width {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
            });
        }

        Ok(())
    }
}

/// Reasons an [`ArenaConfig`] cannot host a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A dimension or speed that must be positive was zero or negative.
    #[error("{name} must be positive (received {value})")]
    NonPositive {
        /// Name of the offending setting.
        name: &'static str,
        /// Value that failed validation.
        value: i32,
    },
    /// Paddles cannot sit outside the playfield.
    #[error("paddle margin must not be negative (received {margin})")]
    NegativeMargin {
        /// Margin that failed validation.
        margin: i32,
    },
    /// A paddle taller than the screen has nowhere to move.
    #[error("paddle height {paddle_height} exceeds screen height {screen_height}")]
    PaddleTallerThanScreen {
        /// Configured paddle height.
        paddle_height: i32,
        /// Configured screen height.
        screen_height: i32,
    },
    /// The ball must leave room to travel along both axes.
    #[error("ball size {ball_size} must be smaller than both screen dimensions")]
    BallTooLarge {
        /// Configured ball size.
        ball_size: i32,
    },
}
