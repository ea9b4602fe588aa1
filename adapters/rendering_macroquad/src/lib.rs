#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Pong.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.

use anyhow::{anyhow, Context, Result};
use macroquad::{
    input::{is_key_down, is_key_pressed, is_quit_requested, prevent_quit, KeyCode},
    text::{draw_text_ex, load_ttf_font_from_bytes, measure_text, Font, TextParams},
};
use pong_core::{Difficulty, Steering, FRAMES_PER_SECOND};
use pong_rendering::{
    fonts::{self, FONT_SIZE},
    Color, FramePacer, FrameInput, LoopState, Presentation, RenderingBackend, RenderingError,
    Scene, SceneRect, TextLabel,
};
use std::{fs, path::Path, sync::mpsc, time::Instant};

/// Raw keyboard and window state observed at the start of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct KeyboardState {
    w_down: bool,
    s_down: bool,
    up_down: bool,
    down_down: bool,
    difficulty_hotkey: Option<u8>,
    escape_pressed: bool,
    close_requested: bool,
}

impl KeyboardState {
    fn poll() -> Self {
        let difficulty_hotkey = [(KeyCode::Key1, 1), (KeyCode::Key2, 2), (KeyCode::Key3, 3)]
            .into_iter()
            .find(|(key, _)| is_key_pressed(*key))
            .map(|(_, digit)| digit);

        Self {
            w_down: is_key_down(KeyCode::W),
            s_down: is_key_down(KeyCode::S),
            up_down: is_key_down(KeyCode::Up),
            down_down: is_key_down(KeyCode::Down),
            difficulty_hotkey,
            escape_pressed: is_key_pressed(KeyCode::Escape),
            close_requested: is_quit_requested(),
        }
    }

    fn frame_input(self) -> FrameInput {
        FrameInput {
            left: Steering::from_keys(self.w_down, self.s_down),
            right: Steering::from_keys(self.up_down, self.down_down),
            difficulty: self.difficulty_hotkey.and_then(Difficulty::from_hotkey),
            quit_requested: self.escape_pressed || self.close_requested,
        }
    }
}

/// Swap interval that presents immediately instead of waiting for vblank.
const UNSYNCED_SWAP_INTERVAL: i32 = 0;

/// Rendering backend implemented on top of macroquad.
#[derive(Debug)]
pub struct MacroquadBackend {
    pacer: FramePacer,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            pacer: FramePacer::new(FRAMES_PER_SECOND),
        }
    }
}

impl MacroquadBackend {
    /// Returns a backend pacing frames at the engine's fixed rate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Window configuration for a fixed-size scene.
///
/// Vsync is disabled so the frame pacer is the only thing throttling the loop.
fn window_conf(window_title: String, scene: &Scene) -> macroquad::window::Conf {
    let mut config = macroquad::window::Conf {
        window_title,
        window_width: scene.width as i32,
        window_height: scene.height as i32,
        window_resizable: false,
        ..macroquad::window::Conf::default()
    };
    config.platform.swap_interval = Some(UNSYNCED_SWAP_INTERVAL);
    config
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(FrameInput, &mut Scene) -> LoopState + 'static,
    {
        let Self { pacer } = self;

        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let config = window_conf(window_title, &scene);

        let (startup_sender, startup_receiver) = mpsc::channel::<Result<()>>();

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            prevent_quit();

            let font =
                fonts::first_loadable(fonts::FONT_CANDIDATES, load_font).map(|(_, font)| font);
            let _ = startup_sender.send(Ok(()));

            let background = to_macroquad_color(clear_color);

            loop {
                let frame_start = Instant::now();
                let input = KeyboardState::poll().frame_input();

                let state = update_scene(input, &mut scene);

                macroquad::window::clear_background(background);
                draw_scene(&scene, font);

                std::thread::sleep(pacer.remaining(frame_start.elapsed()));
                macroquad::window::next_frame().await;

                if state.is_stopped() {
                    break;
                }
            }
        });

        startup_receiver
            .recv()
            .map_err(|_| RenderingError::BackendExitedDuringStartup)
            .context("macroquad window did not start")??;

        Ok(())
    }
}

fn load_font(path: &Path) -> Result<Font> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    load_ttf_font_from_bytes(&bytes).map_err(|error| anyhow!("{error:?}"))
}

fn draw_scene(scene: &Scene, font: Option<Font>) {
    let foreground = to_macroquad_color(scene.foreground);

    draw_rect(&scene.left_paddle, foreground);
    draw_rect(&scene.right_paddle, foreground);
    draw_rect(&scene.ball, foreground);
    for dash in scene.center_line_dashes() {
        draw_rect(&dash, foreground);
    }

    if let Some(font) = font {
        for label in scene.labels() {
            draw_label(&label, font, foreground);
        }
    }
}

fn draw_rect(rect: &SceneRect, color: macroquad::color::Color) {
    macroquad::shapes::draw_rectangle(
        rect.position.x,
        rect.position.y,
        rect.size.x,
        rect.size.y,
        color,
    );
}

fn draw_label(label: &TextLabel, font: Font, color: macroquad::color::Color) {
    let dimensions = measure_text(&label.text, Some(font), FONT_SIZE, 1.0);
    let top_left = label.top_left(dimensions.width);

    // Text is positioned by its baseline.
    draw_text_ex(
        &label.text,
        top_left.x,
        top_left.y + dimensions.offset_y,
        TextParams {
            font,
            font_size: FONT_SIZE,
            color,
            ..TextParams::default()
        },
    );
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
