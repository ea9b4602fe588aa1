#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that steers the computer-controlled paddle toward the ball.
//!
//! The opponent only ever sees the predicted intercept reported by the world
//! and the paddle it controls. Each difficulty tier is a [`TrackingPolicy`]:
//! how often the paddle reacts at all, how fast it moves, and how close to the
//! target it must be before it stops.

use pong_core::{ArenaConfig, Command, Difficulty, PaddleSnapshot};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ENGAGE_ROLL_SIDES: u32 = 10;
const EASY_ENGAGE_ROLLS: u32 = 3;
const HARD_DEAD_ZONE: i32 = 5;

/// Configuration parameters required to construct the opponent system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration seeding the opponent's hesitation rolls.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Tracking behaviour associated with a difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackingPolicy {
    engage_rolls: u32,
    speed: i32,
    dead_zone: i32,
}

impl TrackingPolicy {
    /// Derives the policy for a tier in the provided arena.
    #[must_use]
    pub const fn for_difficulty(difficulty: Difficulty, arena: &ArenaConfig) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                engage_rolls: EASY_ENGAGE_ROLLS,
                speed: arena.paddle_speed() / 2,
                dead_zone: 0,
            },
            Difficulty::Medium => Self {
                engage_rolls: ENGAGE_ROLL_SIDES,
                speed: arena.paddle_speed(),
                dead_zone: arena.paddle_height() / 4,
            },
            Difficulty::Hard => Self {
                engage_rolls: ENGAGE_ROLL_SIDES,
                speed: arena.paddle_speed(),
                dead_zone: HARD_DEAD_ZONE,
            },
        }
    }

    /// Reports whether the paddle reacts on every frame.
    #[must_use]
    pub const fn always_engaged(&self) -> bool {
        self.engage_rolls >= ENGAGE_ROLL_SIDES
    }

    /// Velocity that moves the paddle centre toward `target_y`.
    ///
    /// Distances up to and including the dead zone produce no movement.
    #[must_use]
    pub const fn steer(&self, target_y: i32, paddle_center: i32) -> i32 {
        let distance = target_y - paddle_center;
        if distance.abs() <= self.dead_zone {
            return 0;
        }

        if target_y > paddle_center {
            self.speed
        } else {
            -self.speed
        }
    }
}

/// Computer opponent that emits a velocity for its paddle every frame.
#[derive(Debug)]
pub struct Opponent {
    rng: ChaCha8Rng,
}

impl Opponent {
    /// Creates a new opponent using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Chooses the paddle velocity for this frame and emits it as a command.
    pub fn handle(
        &mut self,
        difficulty: Difficulty,
        arena: &ArenaConfig,
        paddle: &PaddleSnapshot,
        target_y: i32,
        out: &mut Vec<Command>,
    ) {
        let policy = TrackingPolicy::for_difficulty(difficulty, arena);
        let velocity = if self.engages(&policy) {
            policy.steer(target_y, paddle.center_y())
        } else {
            0
        };

        out.push(Command::SetPaddleVelocity {
            side: paddle.side,
            velocity,
        });
    }

    fn engages(&mut self, policy: &TrackingPolicy) -> bool {
        if policy.always_engaged() {
            return true;
        }
        self.rng.gen_range(0..ENGAGE_ROLL_SIDES) < policy.engage_rolls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_tier_moves_only_beyond_five_pixels() {
        let policy = TrackingPolicy::for_difficulty(Difficulty::Hard, &ArenaConfig::classic());

        assert_eq!(policy.steer(306, 300), 5);
        assert_eq!(policy.steer(305, 300), 0);
        assert_eq!(policy.steer(295, 300), 0);
        assert_eq!(policy.steer(294, 300), -5);
    }

    #[test]
    fn medium_tier_dead_zone_is_a_quarter_paddle() {
        let policy = TrackingPolicy::for_difficulty(Difficulty::Medium, &ArenaConfig::classic());

        assert_eq!(policy.dead_zone, 22);
        assert_eq!(policy.steer(322, 300), 0);
        assert_eq!(policy.steer(323, 300), 5);
        assert_eq!(policy.steer(277, 300), -5);
    }

    #[test]
    fn easy_tier_moves_at_half_speed_without_dead_zone() {
        let policy = TrackingPolicy::for_difficulty(Difficulty::Easy, &ArenaConfig::classic());

        assert_eq!(policy.speed, 2);
        assert!(!policy.always_engaged());
        assert_eq!(policy.steer(301, 300), 2);
        assert_eq!(policy.steer(299, 300), -2);
        assert_eq!(policy.steer(300, 300), 0);
    }

    #[test]
    fn full_tiers_never_roll_the_rng() {
        let mut opponent = Opponent::new(Config::new(3));
        let untouched = opponent.rng.clone();
        let policy = TrackingPolicy::for_difficulty(Difficulty::Hard, &ArenaConfig::classic());

        assert!(opponent.engages(&policy));
        assert_eq!(opponent.rng, untouched);
    }
}
