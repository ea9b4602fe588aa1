#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Pong adapters.

pub mod fonts;
pub mod pacing;

use anyhow::Result as AnyResult;
use glam::Vec2;
use pong_core::{
    BallSnapshot, Difficulty, PaddleSnapshot, Rect, Score, Side, Steering, DIFFICULTY_HINT,
};
use thiserror::Error;

pub use pacing::{FramePacer, LoopState};

const DASH_WIDTH: f32 = 4.0;
const DASH_HEIGHT: f32 = 10.0;
const DASH_SPACING: f32 = 20.0;
const SCORE_TOP: f32 = 20.0;
const HINT_BOTTOM_OFFSET: f32 = 40.0;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb_u8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb_u8(255, 255, 255);

    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Steering held for the left paddle.
    pub left: Steering,
    /// Steering held for the right paddle.
    pub right: Steering,
    /// Difficulty hotkey pressed on this frame, if any.
    pub difficulty: Option<Difficulty>,
    /// Whether the player asked to leave, by closing the window or pressing Escape.
    pub quit_requested: bool,
}

/// Axis-aligned rectangle expressed in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRect {
    /// Top-left corner.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl SceneRect {
    /// Creates a new rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }
}

impl From<Rect> for SceneRect {
    fn from(rect: Rect) -> Self {
        Self {
            position: Vec2::new(rect.x as f32, rect.y as f32),
            size: Vec2::new(rect.width as f32, rect.height as f32),
        }
    }
}

/// How a text label is positioned relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The anchor is the top-left corner of the text.
    TopLeft,
    /// The anchor is the midpoint of the text's top edge.
    TopCenter,
}

/// Line of text placed in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Characters to draw.
    pub text: String,
    /// Point the label is attached to.
    pub anchor_point: Vec2,
    /// Interpretation of `anchor_point`.
    pub anchor: TextAnchor,
}

impl TextLabel {
    /// Creates a new text label.
    #[must_use]
    pub fn new<T>(text: T, anchor_point: Vec2, anchor: TextAnchor) -> Self
    where
        T: Into<String>,
    {
        Self {
            text: text.into(),
            anchor_point,
            anchor,
        }
    }

    /// Top-left corner of the label once its rendered width is known.
    #[must_use]
    pub fn top_left(&self, text_width: f32) -> Vec2 {
        match self.anchor {
            TextAnchor::TopLeft => self.anchor_point,
            TextAnchor::TopCenter => {
                Vec2::new(self.anchor_point.x - text_width / 2.0, self.anchor_point.y)
            }
        }
    }
}

/// Describes everything drawn in a single frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Width of the playfield in pixels.
    pub width: f32,
    /// Height of the playfield in pixels.
    pub height: f32,
    /// Color shared by the paddles, ball, centre line and text.
    pub foreground: Color,
    /// Left paddle bounds.
    pub left_paddle: SceneRect,
    /// Right paddle bounds.
    pub right_paddle: SceneRect,
    /// Ball bounds.
    pub ball: SceneRect,
    /// Scoreboard shown at the top of the screen.
    pub score: Score,
}

impl Scene {
    /// Creates an empty scene for a playfield of the provided size.
    pub fn new(width: f32, height: f32, foreground: Color) -> Result<Self, RenderingError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RenderingError::InvalidSceneDimensions { width, height });
        }

        let empty = SceneRect::new(Vec2::ZERO, Vec2::ZERO);
        Ok(Self {
            width,
            height,
            foreground,
            left_paddle: empty,
            right_paddle: empty,
            ball: empty,
            score: Score::new(),
        })
    }

    /// Copies the latest world snapshots into the scene.
    pub fn update(
        &mut self,
        left: &PaddleSnapshot,
        right: &PaddleSnapshot,
        ball: &BallSnapshot,
        score: Score,
    ) {
        self.left_paddle = left.rect.into();
        self.right_paddle = right.rect.into();
        self.ball = ball.rect.into();
        self.score = score;
    }

    /// Dashes forming the centre line, from the top of the screen downward.
    #[must_use]
    pub fn center_line_dashes(&self) -> Vec<SceneRect> {
        let x = (self.width / 2.0).floor() - DASH_WIDTH / 2.0;
        let size = Vec2::new(DASH_WIDTH, DASH_HEIGHT);

        (0_u16..)
            .map(|index| f32::from(index) * DASH_SPACING)
            .take_while(|y| *y < self.height)
            .map(|y| SceneRect::new(Vec2::new(x, y), size))
            .collect()
    }

    /// Score labels followed by the difficulty hint.
    #[must_use]
    pub fn labels(&self) -> Vec<TextLabel> {
        vec![
            TextLabel::new(
                self.score.of(Side::Left).to_string(),
                Vec2::new((self.width / 4.0).floor(), SCORE_TOP),
                TextAnchor::TopLeft,
            ),
            TextLabel::new(
                self.score.of(Side::Right).to_string(),
                Vec2::new((self.width * 3.0 / 4.0).floor(), SCORE_TOP),
                TextAnchor::TopLeft,
            ),
            TextLabel::new(
                DIFFICULTY_HINT,
                Vec2::new((self.width / 2.0).floor(), self.height - HINT_BOTTOM_OFFSET),
                TextAnchor::TopCenter,
            ),
        ]
    }
}

/// Presentation parameters handed to a rendering backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title displayed by the window.
    pub window_title: String,
    /// Color used to clear the screen every frame.
    pub clear_color: Color,
    /// Initial scene to draw.
    pub scene: Scene,
}

impl Presentation {
    /// Creates a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Pong scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until the update closure stops the loop.
    ///
    /// The provided `update_scene` closure receives the input captured for the
    /// frame and mutates the scene before it is drawn. Returning
    /// [`LoopState::Stopped`] draws that frame one last time and ends the loop.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) -> LoopState + 'static;
}

/// Errors that can occur when constructing or driving a presentation.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RenderingError {
    /// The playfield must have a positive, finite size.
    #[error("scene dimensions must be positive (received {width}x{height})")]
    InvalidSceneDimensions {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// The backend stopped before reporting whether it started.
    #[error("rendering backend exited before reporting start-up")]
    BackendExitedDuringStartup,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pong_core::ArenaConfig;

    fn classic_scene() -> Scene {
        Scene::new(800.0, 600.0, Color::WHITE).expect("classic dimensions are valid")
    }

    #[test]
    fn scene_rejects_degenerate_dimensions() {
        let error = Scene::new(0.0, 600.0, Color::WHITE).expect_err("zero width must be rejected");

        assert_eq!(
            error,
            RenderingError::InvalidSceneDimensions {
                width: 0.0,
                height: 600.0,
            }
        );
        assert!(Scene::new(800.0, f32::NAN, Color::WHITE).is_err());
    }

    #[test]
    fn center_line_has_thirty_dashes_on_a_classic_screen() {
        let dashes = classic_scene().center_line_dashes();

        assert_eq!(dashes.len(), 30);
        assert_eq!(
            dashes[0],
            SceneRect::new(Vec2::new(398.0, 0.0), Vec2::new(4.0, 10.0))
        );
        assert_eq!(dashes[29].position, Vec2::new(398.0, 580.0));
    }

    #[test]
    fn labels_follow_the_classic_layout() {
        let mut scene = classic_scene();
        scene.score = Score { left: 3, right: 11 };
        let labels = scene.labels();

        assert_eq!(labels[0].text, "3");
        assert_eq!(labels[0].top_left(14.0), Vec2::new(200.0, 20.0));
        assert_eq!(labels[1].text, "11");
        assert_eq!(labels[1].top_left(28.0), Vec2::new(600.0, 20.0));
        assert_eq!(labels[2].text, DIFFICULTY_HINT);
        assert_eq!(labels[2].top_left(300.0), Vec2::new(250.0, 560.0));
    }

    #[test]
    fn update_copies_world_snapshots() {
        let arena = ArenaConfig::classic();
        let mut scene = classic_scene();
        let left = PaddleSnapshot {
            side: Side::Left,
            rect: arena.paddle_start(Side::Left),
            y_velocity: 0,
        };
        let right = PaddleSnapshot {
            side: Side::Right,
            rect: arena.paddle_start(Side::Right),
            y_velocity: 5,
        };
        let ball = BallSnapshot {
            rect: arena.serve_position(),
            x_velocity: 5,
            y_velocity: -5,
        };

        scene.update(&left, &right, &ball, Score { left: 1, right: 0 });

        assert_eq!(
            scene.left_paddle,
            SceneRect::new(Vec2::new(50.0, 255.0), Vec2::new(15.0, 90.0))
        );
        assert_eq!(scene.right_paddle.position, Vec2::new(735.0, 255.0));
        assert_eq!(scene.ball.size, Vec2::splat(15.0));
        assert_eq!(scene.score.left, 1);
    }

    #[test]
    fn byte_colors_normalise_channels() {
        assert_eq!(Color::WHITE, Color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::BLACK.alpha, 1.0);
    }
}
