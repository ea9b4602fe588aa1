#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system translating player input into paddle and difficulty commands.

use pong_core::{ArenaConfig, Command, Controller, Difficulty, Side, Steering};

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlsInput {
    /// Steering requested with `W`/`S`.
    pub left: Steering,
    /// Steering requested with the arrow keys.
    pub right: Steering,
    /// Difficulty hotkey pressed on this frame, if any.
    pub difficulty: Option<Difficulty>,
}

impl ControlsInput {
    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(left: Steering, right: Steering, difficulty: Option<Difficulty>) -> Self {
        Self {
            left,
            right,
            difficulty,
        }
    }
}

/// Keyboard controls for the human players.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls;

impl Controls {
    /// Creates a new controls system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Emits the commands implied by this frame's input.
    ///
    /// The left paddle always receives a velocity. The right paddle only does
    /// when a second player holds it, otherwise the opponent system owns it.
    pub fn handle(
        &self,
        input: ControlsInput,
        controller: Controller,
        arena: &ArenaConfig,
        out: &mut Vec<Command>,
    ) {
        let speed = arena.paddle_speed();

        out.push(Command::SetPaddleVelocity {
            side: Side::Left,
            velocity: input.left.velocity(speed),
        });

        if controller == Controller::Human {
            out.push(Command::SetPaddleVelocity {
                side: Side::Right,
                velocity: input.right.velocity(speed),
            });
        }

        if let Some(difficulty) = input.difficulty {
            out.push(Command::SetDifficulty { difficulty });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(input: ControlsInput, controller: Controller) -> Vec<Command> {
        let mut out = Vec::new();
        Controls::new().handle(input, controller, &ArenaConfig::classic(), &mut out);
        out
    }

    #[test]
    fn idle_keys_still_stop_the_left_paddle() {
        assert_eq!(
            commands(ControlsInput::default(), Controller::Computer),
            vec![Command::SetPaddleVelocity {
                side: Side::Left,
                velocity: 0,
            }]
        );
    }

    #[test]
    fn computer_match_ignores_arrow_keys() {
        let input = ControlsInput::new(Steering::Up, Steering::Down, None);

        assert_eq!(
            commands(input, Controller::Computer),
            vec![Command::SetPaddleVelocity {
                side: Side::Left,
                velocity: -5,
            }]
        );
    }

    #[test]
    fn second_player_steers_the_right_paddle() {
        let input = ControlsInput::new(Steering::Idle, Steering::Down, None);

        assert_eq!(
            commands(input, Controller::Human),
            vec![
                Command::SetPaddleVelocity {
                    side: Side::Left,
                    velocity: 0,
                },
                Command::SetPaddleVelocity {
                    side: Side::Right,
                    velocity: 5,
                },
            ]
        );
    }

    #[test]
    fn hotkey_requests_difficulty_after_movement() {
        let input = ControlsInput::new(Steering::Idle, Steering::Idle, Some(Difficulty::Easy));
        let out = commands(input, Controller::Human);

        assert_eq!(
            out.last(),
            Some(&Command::SetDifficulty {
                difficulty: Difficulty::Easy,
            })
        );
        assert_eq!(out.len(), 3);
    }
}
