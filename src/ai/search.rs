use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::trace;

use crate::ai::evaluate::evaluate;
use crate::board::Board;
use crate::config::ConfigError;
use crate::types::{MoveCandidate, Player, Position};

/// Greedy move search on a dedicated worker pool.
///
/// Each search fans out one evaluation per board cell, then reduces the
/// candidates to the single best one. The pool size only changes how the
/// work is split, never the chosen move.
pub struct Searcher {
    pool: ThreadPool,
}

impl Searcher {
    pub fn new(worker_count: usize) -> Result<Self, ConfigError> {
        if worker_count < 1 {
            return Err(ConfigError::NoWorkers);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|idx| format!("othello-search-{idx}"))
            .build()?;
        Ok(Self { pool })
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Evaluates every cell for `player`, in row-major order.
    pub fn candidates(&self, board: &Board, player: Player) -> Vec<MoveCandidate> {
        self.pool.install(|| search_candidates(board, player))
    }

    /// Returns the highest-capturing legal move, or `None` when `player` must pass.
    pub fn best_move(&self, board: &Board, player: Player) -> Option<MoveCandidate> {
        self.pool.install(|| {
            let candidates = search_candidates(board, player);
            trace!(
                %player,
                cells = candidates.len(),
                legal = candidates.iter().filter(|c| c.is_legal()).count(),
                "search complete"
            );
            reduce_best(&candidates)
        })
    }
}

/// Map phase: one independent evaluation per cell.
/// Runs on the current rayon pool.
pub fn search_candidates(board: &Board, player: Player) -> Vec<MoveCandidate> {
    let size = board.size();
    (0..size * size)
        .into_par_iter()
        .map(|idx| evaluate(board, Position::new(idx / size, idx % size), player))
        .collect()
}

/// Reduce phase: picks the maximum heuristic, ties going to the smallest
/// `(row, col)`. Illegal candidates never win; all-illegal input yields `None`.
pub fn reduce_best(candidates: &[MoveCandidate]) -> Option<MoveCandidate> {
    candidates
        .par_iter()
        .copied()
        .filter(MoveCandidate::is_legal)
        .reduce_with(better_of)
}

/// Associative and commutative: positions are unique within one search,
/// so the combined order is total.
fn better_of(a: MoveCandidate, b: MoveCandidate) -> MoveCandidate {
    if is_better_move(&b, &a) { b } else { a }
}

fn is_better_move(candidate: &MoveCandidate, best: &MoveCandidate) -> bool {
    candidate.heuristic > best.heuristic
        || (candidate.heuristic == best.heuristic && candidate.pos < best.pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, DirectionSet};

    fn candidate(row: usize, col: usize, heuristic: u32) -> MoveCandidate {
        let directions = if heuristic > 0 {
            [Direction::Up].into_iter().collect()
        } else {
            DirectionSet::EMPTY
        };
        MoveCandidate {
            pos: Position::new(row, col),
            player: Player::Red,
            directions,
            heuristic,
        }
    }

    /// Plays `turns` greedy turns with a single worker to reach a mid-game board.
    fn midgame_board(size: usize, turns: usize) -> Board {
        let searcher = Searcher::new(1).unwrap();
        let mut board = Board::new(size).unwrap();
        let mut player = Player::Red;
        for _ in 0..turns {
            if let Some(best) = searcher.best_move(&board, player) {
                board.apply(&best);
            }
            player = player.opponent();
        }
        board
    }

    #[test]
    fn opening_position_has_four_single_capture_moves() {
        let searcher = Searcher::new(2).unwrap();
        let board = Board::new(8).unwrap();

        let legal: Vec<_> = searcher
            .candidates(&board, Player::Red)
            .into_iter()
            .filter(MoveCandidate::is_legal)
            .collect();

        assert_eq!(legal.len(), 4);
        assert!(legal.iter().all(|c| c.heuristic == 1));
        assert_eq!(
            legal.iter().map(|c| c.pos).collect::<Vec<_>>(),
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3),
            ]
        );
    }

    #[test]
    fn candidates_cover_every_cell_in_row_major_order() {
        let board = Board::new(6).unwrap();
        let searcher = Searcher::new(3).unwrap();

        let candidates = searcher.candidates(&board, Player::Blue);

        assert_eq!(candidates.len(), 36);
        for (idx, c) in candidates.iter().enumerate() {
            assert_eq!(c.pos, Position::new(idx / 6, idx % 6));
            assert_eq!(c.player, Player::Blue);
        }
    }

    #[test]
    fn search_tie_breaks_to_smallest_position() {
        let searcher = Searcher::new(4).unwrap();
        let board = Board::new(8).unwrap();

        let best = searcher.best_move(&board, Player::Red).unwrap();

        assert_eq!(best.pos, Position::new(2, 4));
        assert_eq!(best.heuristic, 1);
    }

    #[test]
    fn reduce_prefers_higher_heuristic_then_smaller_position() {
        let candidates = [
            candidate(0, 0, 0),
            candidate(5, 5, 3),
            candidate(1, 7, 2),
            candidate(4, 1, 3),
            candidate(4, 0, 1),
        ];

        assert_eq!(reduce_best(&candidates), Some(candidate(4, 1, 3)));
    }

    #[test]
    fn reduce_is_independent_of_input_order() {
        let mut candidates: Vec<_> = (0..8)
            .flat_map(|row| (0..8).map(move |col| candidate(row, col, ((row * 3 + col) % 4) as u32)))
            .collect();
        let forward = reduce_best(&candidates);
        candidates.reverse();
        let backward = reduce_best(&candidates);

        assert_eq!(forward, backward);
        assert_eq!(forward, Some(candidate(0, 3, 3)));
    }

    #[test]
    fn reduce_of_all_illegal_candidates_is_none() {
        let candidates: Vec<_> = (0..4).map(|col| candidate(0, col, 0)).collect();

        assert_eq!(reduce_best(&candidates), None);
        assert_eq!(reduce_best(&[]), None);
    }

    #[test]
    fn best_move_matches_across_worker_counts() {
        let single = Searcher::new(1).unwrap();
        let many = Searcher::new(8).unwrap();

        for turns in [0, 5, 12, 25, 40] {
            let board = midgame_board(8, turns);
            for player in [Player::Red, Player::Blue] {
                assert_eq!(
                    single.best_move(&board, player),
                    many.best_move(&board, player),
                    "turns={turns} player={player}"
                );
                assert_eq!(single.candidates(&board, player), many.candidates(&board, player));
            }
        }
    }

    #[test]
    fn search_does_not_mutate_board() {
        let searcher = Searcher::new(4).unwrap();
        let board = midgame_board(10, 15);
        let before = board.clone();

        let _ = searcher.best_move(&board, Player::Red);
        let _ = searcher.candidates(&board, Player::Blue);

        assert_eq!(board, before);
    }

    #[test]
    fn player_without_captures_gets_no_move() {
        let searcher = Searcher::new(2).unwrap();
        let board = Board::from_rows(&[
            "RRRR", //
            "RRRR", //
            "RR--", //
            "----",
        ]);

        assert_eq!(searcher.best_move(&board, Player::Blue), None);
        assert_eq!(searcher.best_move(&board, Player::Red), None);
    }

    #[test]
    fn zero_workers_is_a_config_error() {
        assert!(matches!(Searcher::new(0), Err(ConfigError::NoWorkers)));
    }

    #[test]
    fn pool_uses_requested_worker_count() {
        assert_eq!(Searcher::new(3).unwrap().worker_count(), 3);
    }
}
