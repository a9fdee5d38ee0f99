use tracing::{debug, info};

use crate::ai::Searcher;
use crate::board::Board;
use crate::config::{Config, ConfigError};
use crate::types::{GameResult, MoveCandidate, Player};

/// Turn-engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ToMove(Player),
    Finished,
}

/// Outcome of one turn.
///
/// Contract:
/// - `played` is `Some` exactly when a move was applied.
/// - A pass has `played == None` and `flipped == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub player: Player,
    pub played: Option<MoveCandidate>,
    pub flipped: usize,
}

impl TurnResult {
    pub fn applied(&self) -> bool {
        self.played.is_some()
    }
}

/// Creates the opening board for a new game.
pub fn new_game(board_size: usize) -> Result<Board, ConfigError> {
    Board::new(board_size)
}

/// Searches the best move for `player` and applies it, if any.
/// The board is only written after the whole search has completed.
pub fn play_turn(searcher: &Searcher, board: &mut Board, player: Player) -> TurnResult {
    let Some(best) = searcher.best_move(board, player) else {
        return TurnResult {
            player,
            played: None,
            flipped: 0,
        };
    };

    let flipped = board.apply(&best);
    debug_assert!(flipped > 0, "best move must capture");
    TurnResult {
        player,
        played: Some(best),
        flipped,
    }
}

/// Number of discs `player` has on the board.
pub fn score(board: &Board, player: Player) -> usize {
    board.count(player.cell())
}

/// Runs a full greedy game, alternating sides until neither can move.
pub struct Game {
    board: Board,
    searcher: Searcher,
    phase: Phase,
    can_move: [bool; 2],
    moves_applied: usize,
    passes: usize,
}

impl Game {
    pub fn new(board_size: usize, worker_count: usize) -> Result<Self, ConfigError> {
        let board = new_game(board_size)?;
        let searcher = Searcher::new(worker_count)?;
        Ok(Self::from_board(board, searcher, Player::Red))
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.board_size, config.worker_count)
    }

    /// Starts a game from an arbitrary board with `first` to move.
    /// Both sides are assumed able to move until a search proves otherwise.
    pub fn from_board(board: Board, searcher: Searcher, first: Player) -> Self {
        Self {
            board,
            searcher,
            phase: Phase::ToMove(first),
            can_move: [true, true],
            moves_applied: 0,
            passes: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn moves_applied(&self) -> usize {
        self.moves_applied
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn worker_count(&self) -> usize {
        self.searcher.worker_count()
    }

    /// Plays one turn. Returns `None` once the game has finished.
    pub fn step(&mut self) -> Option<TurnResult> {
        let Phase::ToMove(player) = self.phase else {
            return None;
        };

        let turn = play_turn(&self.searcher, &mut self.board, player);
        self.can_move[player.index()] = turn.applied();
        match turn.played {
            Some(mv) => {
                self.moves_applied += 1;
                debug!(
                    %player,
                    row = mv.pos.row,
                    col = mv.pos.col,
                    heuristic = mv.heuristic,
                    flipped = turn.flipped,
                    "move applied"
                );
            }
            None => {
                self.passes += 1;
                debug!(%player, "no legal move");
            }
        }

        self.phase = if self.can_move.iter().any(|&can| can) {
            Phase::ToMove(player.opponent())
        } else {
            self.finish();
            Phase::Finished
        };

        Some(turn)
    }

    /// Plays until neither side can move and returns the final result.
    pub fn run(&mut self) -> GameResult {
        while self.step().is_some() {}
        self.result()
    }

    pub fn result(&self) -> GameResult {
        let (red, blue) = self.board.counts();
        GameResult {
            red,
            blue,
            empty: self.board.empty_count(),
            winner: if red > blue {
                Some(Player::Red)
            } else if blue > red {
                Some(Player::Blue)
            } else {
                None
            },
            moves: self.moves_applied,
        }
    }

    fn finish(&self) {
        let (red, blue) = self.board.counts();
        info!(
            red,
            blue,
            moves = self.moves_applied,
            passes = self.passes,
            "game finished"
        );
    }
}
