//! Placement helpers that let tests stage precise match situations.

use pong_core::Side;

use crate::World;

/// Moves the ball to the provided top-left corner and overrides its velocity.
pub fn place_ball(world: &mut World, x: i32, y: i32, x_velocity: i32, y_velocity: i32) {
    world.ball.rect.x = x;
    world.ball.rect.y = y;
    world.ball.x_velocity = x_velocity;
    world.ball.y_velocity = y_velocity;
}

/// Moves the paddle on the provided side to a new top edge without clamping.
pub fn place_paddle(world: &mut World, side: Side, y: i32) {
    world.paddle_mut(side).rect.y = y;
}
