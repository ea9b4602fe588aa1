use pong_core::{ArenaConfig, Command, Controller, Difficulty, Event, Side, Steering};
use pong_system_controls::{Controls, ControlsInput};
use pong_world::{self as world, query, MatchSetup, World};

fn run_frame(world: &mut World, input: ControlsInput) -> Vec<Event> {
    let mut commands = Vec::new();
    Controls::new().handle(
        input,
        query::controller(world),
        query::arena(world),
        &mut commands,
    );
    commands.push(Command::Tick);

    let mut events = Vec::new();
    for command in commands {
        world::apply(world, command, &mut events);
    }
    events
}

#[test]
fn held_keys_move_both_paddles_in_a_two_player_match() {
    let mut world = World::new(
        ArenaConfig::classic(),
        MatchSetup::new(Controller::Human, Difficulty::Medium, 4),
    )
    .expect("classic arena is valid");

    for _ in 0..10 {
        let _ = run_frame(
            &mut world,
            ControlsInput::new(Steering::Up, Steering::Down, None),
        );
    }

    assert_eq!(query::paddle(&world, Side::Left).rect.y, 205);
    assert_eq!(query::paddle(&world, Side::Right).rect.y, 305);
}

#[test]
fn releasing_keys_stops_the_paddle() {
    let mut world = World::new(
        ArenaConfig::classic(),
        MatchSetup::new(Controller::Human, Difficulty::Medium, 4),
    )
    .expect("classic arena is valid");

    let _ = run_frame(
        &mut world,
        ControlsInput::new(Steering::Down, Steering::Idle, None),
    );
    let _ = run_frame(&mut world, ControlsInput::default());
    let _ = run_frame(&mut world, ControlsInput::default());

    assert_eq!(query::paddle(&world, Side::Left).rect.y, 260);
    assert_eq!(query::paddle(&world, Side::Right).rect.y, 255);
}

#[test]
fn hotkey_switches_difficulty_mid_match() {
    let mut world = World::new(
        ArenaConfig::classic(),
        MatchSetup::new(Controller::Computer, Difficulty::Medium, 4),
    )
    .expect("classic arena is valid");

    let events = run_frame(
        &mut world,
        ControlsInput::new(Steering::Idle, Steering::Idle, Some(Difficulty::Hard)),
    );

    assert_eq!(query::difficulty(&world), Difficulty::Hard);
    assert!(events.contains(&Event::DifficultyChanged {
        difficulty: Difficulty::Hard,
    }));
}
