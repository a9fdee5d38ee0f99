pub mod ai;
pub mod board;
pub mod config;
pub mod display;
pub mod game;
pub mod types;

pub use board::Board;
pub use config::{Config, ConfigError, DisplayMode};
pub use game::{Game, Phase, TurnResult, new_game, play_turn, score};
pub use types::{Cell, GameResult, MoveCandidate, Player, Position};
