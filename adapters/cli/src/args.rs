use clap::{ArgAction, Parser};
use pong_core::{Controller, Difficulty};

const CONTROLS: &str = "\
Controls:
  Left Paddle (Player 1): W/S keys
  Right Paddle: AI (adjust difficulty with 1-3 keys), or Up/Down arrow keys with --2player
  Escape or closing the window quits";

/// Classic two-paddle Pong against the computer or a second player.
#[derive(Debug, Parser)]
#[command(name = "pong", disable_help_flag = true, after_help = CONTROLS)]
pub(crate) struct Cli {
    /// Two-player mode: the right paddle uses the arrow keys
    #[arg(long = "2player", short = '2')]
    two_player: bool,

    /// Set AI difficulty to Easy
    #[arg(long, short = 'e', overrides_with = "hard")]
    easy: bool,

    /// Set AI difficulty to Hard
    #[arg(long, short = 'h', overrides_with = "easy")]
    hard: bool,

    /// Show this help message
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Who steers the right paddle.
    pub(crate) fn controller(&self) -> Controller {
        if self.two_player {
            Controller::Human
        } else {
            Controller::Computer
        }
    }

    /// Difficulty the opponent starts with; the last of `--easy`/`--hard` wins.
    pub(crate) fn difficulty(&self) -> Difficulty {
        if self.hard {
            Difficulty::Hard
        } else if self.easy {
            Difficulty::Easy
        } else {
            Difficulty::Medium
        }
    }
}
