//! Paddle and ball state owned by the world.

use pong_core::{ArenaConfig, BallSnapshot, PaddleSnapshot, Rect, Side};
use rand::Rng;

/// Vertical paddle steered by a player or the computer.
#[derive(Clone, Debug)]
pub(crate) struct Paddle {
    pub(crate) side: Side,
    pub(crate) rect: Rect,
    pub(crate) y_velocity: i32,
}

impl Paddle {
    pub(crate) fn new(side: Side, arena: &ArenaConfig) -> Self {
        Self {
            side,
            rect: arena.paddle_start(side),
            y_velocity: 0,
        }
    }

    /// Applies the current velocity and clamps the paddle inside the court.
    pub(crate) fn advance(&mut self, arena: &ArenaConfig) {
        self.rect.y = self
            .rect
            .y
            .saturating_add(self.y_velocity)
            .clamp(0, arena.paddle_travel());
    }

    pub(crate) fn center_y(&self) -> i32 {
        self.rect.center_y()
    }

    pub(crate) fn snapshot(&self) -> PaddleSnapshot {
        PaddleSnapshot {
            side: self.side,
            rect: self.rect,
            y_velocity: self.y_velocity,
        }
    }
}

/// Square ball travelling at a constant integer velocity.
#[derive(Clone, Debug)]
pub(crate) struct Ball {
    pub(crate) rect: Rect,
    pub(crate) x_velocity: i32,
    pub(crate) y_velocity: i32,
}

impl Ball {
    /// Creates a ball already served from the centre of the court.
    pub(crate) fn served<R: Rng>(arena: &ArenaConfig, rng: &mut R) -> Self {
        let mut ball = Self {
            rect: arena.serve_position(),
            x_velocity: 0,
            y_velocity: 0,
        };
        ball.serve(arena, rng);
        ball
    }

    /// Recentres the ball and draws an independent random sign for each axis.
    pub(crate) fn serve<R: Rng>(&mut self, arena: &ArenaConfig, rng: &mut R) {
        self.rect = arena.serve_position();
        self.x_velocity = random_sign(rng) * arena.ball_speed();
        self.y_velocity = random_sign(rng) * arena.ball_speed();
    }

    /// Integrates one frame of motion and reflects off the top and bottom edges.
    ///
    /// Returns `true` when the vertical velocity was inverted.
    pub(crate) fn advance(&mut self, arena: &ArenaConfig) -> bool {
        self.rect.x = self.rect.x.saturating_add(self.x_velocity);
        self.rect.y = self.rect.y.saturating_add(self.y_velocity);

        if self.rect.y <= 0 || self.rect.bottom() >= arena.screen_height() {
            self.y_velocity = -self.y_velocity;
            return true;
        }
        false
    }

    /// Estimates the ball's vertical centre once it reaches the right edge.
    ///
    /// The projection is a straight line folded back into the court at the top
    /// and bottom edges. Paddles along the way are ignored, so the estimate is
    /// only as good as the ball's current heading.
    pub(crate) fn predicted_intercept(&self, arena: &ArenaConfig) -> i32 {
        if self.x_velocity == 0 {
            return arena.screen_height() / 2;
        }

        let frames = (arena.screen_width() - self.rect.x) / self.x_velocity.abs();
        let projected = i64::from(self.rect.y) + i64::from(self.y_velocity) * i64::from(frames);
        let lowest = i64::from(arena.screen_height() - self.rect.height);

        fold_into_court(projected, lowest) + self.rect.height / 2
    }

    pub(crate) fn snapshot(&self) -> BallSnapshot {
        BallSnapshot {
            rect: self.rect,
            x_velocity: self.x_velocity,
            y_velocity: self.y_velocity,
        }
    }
}

fn random_sign<R: Rng>(rng: &mut R) -> i32 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

/// Reflects `y` about `0` and `lowest` until it lies within `0..=lowest`.
///
/// Repeated reflection between two mirrors is a triangle wave with period
/// `2 * lowest`, so the fold is computed directly instead of iterating.
fn fold_into_court(y: i64, lowest: i64) -> i32 {
    if lowest <= 0 {
        return 0;
    }

    let period = lowest * 2;
    let phase = y.rem_euclid(period);
    let folded = if phase > lowest { period - phase } else { phase };
    i32::try_from(folded).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ball_at(x: i32, y: i32, x_velocity: i32, y_velocity: i32) -> Ball {
        Ball {
            rect: Rect::new(x, y, 15, 15),
            x_velocity,
            y_velocity,
        }
    }

    /// Reference fold that mirrors the value one reflection at a time.
    fn fold_iteratively(mut y: i64, lowest: i64) -> i64 {
        while y < 0 || y > lowest {
            if y < 0 {
                y = -y;
            }
            if y > lowest {
                y = 2 * lowest - y;
            }
        }
        y
    }

    #[test]
    fn paddle_stays_inside_court_for_any_velocity() {
        let arena = ArenaConfig::classic();
        let mut paddle = Paddle::new(Side::Left, &arena);

        for start in (0..=arena.paddle_travel()).step_by(17) {
            for velocity in (-600..=600).step_by(37) {
                paddle.rect.y = start;
                paddle.y_velocity = velocity;
                paddle.advance(&arena);

                assert!(paddle.rect.y >= 0, "paddle escaped through the top");
                assert!(
                    paddle.rect.y <= arena.paddle_travel(),
                    "paddle escaped through the bottom"
                );
            }
        }
    }

    #[test]
    fn paddle_center_is_half_height_below_top() {
        let arena = ArenaConfig::classic();
        let paddle = Paddle::new(Side::Right, &arena);

        assert_eq!(paddle.center_y(), paddle.rect.y + 45);
    }

    #[test]
    fn ball_reflects_off_top_and_bottom_only() {
        let arena = ArenaConfig::classic();

        let mut rising = ball_at(400, 3, 5, -5);
        assert!(rising.advance(&arena));
        assert_eq!(rising.rect.y, -2);
        assert_eq!(rising.y_velocity, 5);

        let mut falling = ball_at(400, 582, 5, 5);
        assert!(falling.advance(&arena));
        assert_eq!(falling.y_velocity, -5);

        let mut leaving = ball_at(2, 300, -5, 0);
        assert!(!leaving.advance(&arena));
        assert_eq!(leaving.rect.x, -3);
        assert_eq!(leaving.x_velocity, -5);
    }

    #[test]
    fn ball_stays_within_one_step_of_the_court() {
        let arena = ArenaConfig::classic();
        let lowest = arena.screen_height() - arena.ball_size();

        for start in (0..=lowest).step_by(13) {
            for y_velocity in (-15..=15).filter(|velocity| *velocity != 0) {
                let mut ball = ball_at(400, start, 0, y_velocity);
                for _ in 0..500 {
                    let _ = ball.advance(&arena);
                    assert!(
                        ball.rect.y >= -y_velocity.abs() && ball.rect.y <= arena.screen_height(),
                        "ball left the court at y={} (start {start}, velocity {y_velocity})",
                        ball.rect.y
                    );
                }
            }
        }
    }

    #[test]
    fn serve_recentres_with_full_speed_on_both_axes() {
        let arena = ArenaConfig::classic();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ball = ball_at(-40, 12, -9, 3);

        ball.serve(&arena, &mut rng);

        assert_eq!(ball.rect, arena.serve_position());
        assert_eq!(ball.x_velocity.abs(), arena.ball_speed());
        assert_eq!(ball.y_velocity.abs(), arena.ball_speed());
    }

    #[test]
    fn serve_draws_both_signs_on_each_axis() {
        let arena = ArenaConfig::classic();
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let mut ball = Ball::served(&arena, &mut rng);
        let mut seen = Vec::new();

        for _ in 0..64 {
            ball.serve(&arena, &mut rng);
            seen.push((ball.x_velocity.signum(), ball.y_velocity.signum()));
        }

        for combination in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            assert!(seen.contains(&combination), "never served {combination:?}");
        }
    }

    #[test]
    fn stationary_ball_predicts_screen_middle() {
        let arena = ArenaConfig::classic();
        let ball = ball_at(120, 40, 0, 9);

        assert_eq!(ball.predicted_intercept(&arena), arena.screen_height() / 2);
    }

    #[test]
    fn prediction_extrapolates_in_a_straight_line() {
        let arena = ArenaConfig::classic();
        // 400 pixels to go at 5 per frame: 80 frames, 80 pixels of drop.
        let ball = ball_at(400, 100, 5, 1);

        assert_eq!(ball.predicted_intercept(&arena), 100 + 80 + 7);
    }

    #[test]
    fn prediction_truncates_travel_time() {
        let arena = ArenaConfig::classic();
        // 403 / 5 truncates to 80 frames.
        let ball = ball_at(397, 100, -5, 1);

        assert_eq!(ball.predicted_intercept(&arena), 100 + 80 + 7);
    }

    #[test]
    fn prediction_folds_off_both_walls() {
        let arena = ArenaConfig::classic();
        // 160 frames at -5 reaches -700: folds to 700, then to 470.
        let ball = ball_at(0, 100, 5, -5);

        assert_eq!(ball.predicted_intercept(&arena), 470 + 7);
    }

    #[test]
    fn prediction_always_lands_inside_the_court() {
        let arena = ArenaConfig::classic();
        let half = arena.ball_size() / 2;

        for x in (0..=arena.screen_width()).step_by(23) {
            for y in (0..=arena.screen_height() - arena.ball_size()).step_by(29) {
                for x_velocity in [-7, -5, 5, 7] {
                    for y_velocity in -12..=12 {
                        let intercept =
                            ball_at(x, y, x_velocity, y_velocity).predicted_intercept(&arena);
                        assert!(
                            (half..=arena.screen_height() - half).contains(&intercept),
                            "intercept {intercept} outside the court"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn closed_form_fold_matches_repeated_reflection() {
        for lowest in [1_i64, 7, 585] {
            for y in -5_000_i64..=5_000 {
                assert_eq!(
                    i64::from(fold_into_court(y, lowest)),
                    fold_iteratively(y, lowest),
                    "fold mismatch for y={y} lowest={lowest}"
                );
            }
        }
    }
}
