#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots a Pong match in a macroquad window.

mod args;
mod simulation;

use anyhow::{Context, Result};
use clap::Parser;
use pong_core::ArenaConfig;
use pong_rendering::{Color, Presentation, RenderingBackend, Scene};
use pong_rendering_macroquad::MacroquadBackend;
use pong_world::MatchSetup;

use self::{args::Cli, simulation::Simulation};

const WINDOW_TITLE: &str = "Pong";

/// Entry point for the Pong command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli).map_err(|error| {
        log::error!("{error:#}");
        error
    })
}

fn run(cli: &Cli) -> Result<()> {
    let arena = ArenaConfig::classic();
    let setup = MatchSetup::new(cli.controller(), cli.difficulty(), rand::random());
    log::info!(
        "Starting match: right paddle {:?}, difficulty {}",
        setup.controller(),
        setup.difficulty().label()
    );

    let mut simulation = Simulation::new(arena, setup)?;
    let mut scene = Scene::new(
        arena.screen_width() as f32,
        arena.screen_height() as f32,
        Color::WHITE,
    )
    .context("failed to describe the playfield")?;
    simulation.populate_scene(&mut scene);

    let presentation = Presentation::new(WINDOW_TITLE, Color::BLACK, scene);
    MacroquadBackend::new()
        .run(presentation, move |input, scene| simulation.frame(input, scene))
        .context("rendering backend failed")
}
