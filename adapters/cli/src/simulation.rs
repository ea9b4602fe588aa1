//! Per-frame orchestration of the world and its systems.

use anyhow::{Context, Result};
use pong_core::{ArenaConfig, Command, Controller, Event, Side};
use pong_rendering::{FrameInput, LoopState, Scene};
use pong_system_controls::{Controls, ControlsInput};
use pong_system_opponent::{Config as OpponentConfig, Opponent};
use pong_world::{self as world, query, MatchSetup, World};

/// Mixed into the session seed so the opponent's rolls are independent of serves.
const OPPONENT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Owns a match and runs the input, update and scene phases of each frame.
#[derive(Debug)]
pub(crate) struct Simulation {
    world: World,
    controls: Controls,
    opponent: Opponent,
    commands: Vec<Command>,
    events: Vec<Event>,
}

impl Simulation {
    /// Starts a match in the provided arena.
    pub(crate) fn new(arena: ArenaConfig, setup: MatchSetup) -> Result<Self> {
        let world = World::new(arena, setup).context("invalid arena configuration")?;
        Ok(Self {
            world,
            controls: Controls::new(),
            opponent: Opponent::new(OpponentConfig::new(setup.seed() ^ OPPONENT_SEED_SALT)),
            commands: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Advances the match by one frame and refreshes the scene.
    ///
    /// A quit request still lets the frame update and render before the loop stops.
    pub(crate) fn frame(&mut self, input: FrameInput, scene: &mut Scene) -> LoopState {
        self.handle_input(input);
        self.update(input.quit_requested);
        self.populate_scene(scene);

        if query::is_running(&self.world) {
            LoopState::Running
        } else {
            LoopState::Stopped
        }
    }

    /// Copies the current world state into the scene.
    pub(crate) fn populate_scene(&self, scene: &mut Scene) {
        scene.update(
            &query::paddle(&self.world, Side::Left),
            &query::paddle(&self.world, Side::Right),
            &query::ball(&self.world),
            query::score(&self.world),
        );
    }

    fn handle_input(&mut self, input: FrameInput) {
        self.controls.handle(
            ControlsInput::new(input.left, input.right, input.difficulty),
            query::controller(&self.world),
            query::arena(&self.world),
            &mut self.commands,
        );
        self.flush_commands();
    }

    fn update(&mut self, quit_requested: bool) {
        if query::controller(&self.world) == Controller::Computer {
            self.opponent.handle(
                query::difficulty(&self.world),
                query::arena(&self.world),
                &query::paddle(&self.world, Side::Right),
                query::predicted_intercept(&self.world),
                &mut self.commands,
            );
        }

        self.commands.push(Command::Tick);
        if quit_requested {
            self.commands.push(Command::Quit);
        }
        self.flush_commands();
    }

    fn flush_commands(&mut self) {
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, &mut self.events);
        }

        for event in self.events.drain(..) {
            if let Event::MatchEnded = event {
                log::info!("Match ended");
            } else {
                log::trace!("{event:?}");
            }
        }
    }
}
