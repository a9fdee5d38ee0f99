//! Text rendering for the command-line driver.

use std::fmt::Write;

use crate::board::Board;
use crate::config::DisplayMode;
use crate::types::{Cell, GameResult};

const RED: &str = "\x1B[31m";
const BLUE: &str = "\x1B[34m";
const RESET: &str = "\x1B[0m";
pub const CURSOR_HOME: &str = "\x1B[0;0H";
pub const CLEAR_SCREEN: &str = "\x1B[2J";

/// Renders one board frame, or `None` for modes that print no frames.
pub fn render_board(board: &Board, mode: DisplayMode, animate: bool) -> Option<String> {
    let colorize = match mode {
        DisplayMode::Normal => false,
        DisplayMode::Colorized => true,
        DisplayMode::Silent | DisplayMode::Timing => return None,
    };

    let mut out = String::new();
    if animate {
        out.push_str(CURSOR_HOME);
    }
    for row in board.rows() {
        for &cell in row {
            let symbol = cell.symbol();
            match (colorize, cell) {
                (true, Cell::Red) => {
                    let _ = write!(out, "{RED}{symbol} {RESET}");
                }
                (true, Cell::Blue) => {
                    let _ = write!(out, "{BLUE}{symbol} {RESET}");
                }
                _ => {
                    out.push(symbol);
                    out.push(' ');
                }
            }
        }
        out.push('\n');
    }
    out.push_str(&"=".repeat(2 * board.size()));
    out.push('\n');
    Some(out)
}

pub fn render_scores(result: &GameResult) -> String {
    format!("score - red:{} blue:{}", result.red, result.blue)
}

pub fn render_timing(board_size: usize, workers: usize, elapsed_ms: u128, result: &GameResult) -> String {
    format!(
        "board size:{board_size}\t num threads:{workers}\t time(ms):{elapsed_ms}\t red:{}\t blue:{}",
        result.red, result.blue
    )
}
