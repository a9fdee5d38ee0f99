use crate::board::Board;
use crate::types::{Cell, Direction, DirectionSet, MoveCandidate, Player, Position};

/// Scores placing `player` at `pos`.
///
/// The heuristic is the total number of opponent discs captured across all
/// directions. Occupied targets and non-capturing placements yield a
/// candidate with heuristic 0.
pub fn evaluate(board: &Board, pos: Position, player: Player) -> MoveCandidate {
    if board.get(pos) != Cell::Empty {
        return MoveCandidate::illegal(pos, player);
    }

    let mut directions = DirectionSet::EMPTY;
    let mut heuristic = 0;
    for dir in Direction::ALL {
        let run = capture_run(board, pos, dir, player);
        if run > 0 {
            directions.insert(dir);
            heuristic += run;
        }
    }

    MoveCandidate {
        pos,
        player,
        directions,
        heuristic,
    }
}

/// Length of the opponent run starting next to `pos` in `dir`, provided the
/// run is closed by one of `player`'s discs. Returns 0 otherwise.
fn capture_run(board: &Board, pos: Position, dir: Direction, player: Player) -> u32 {
    let opp = player.opponent().cell();
    let size = board.size();

    let mut run = 0;
    let mut cursor = pos.step(dir, size);
    while let Some(next) = cursor {
        let cell = board.get(next);
        if cell == opp {
            run += 1;
            cursor = next.step(dir, size);
        } else if cell == player.cell() {
            return run;
        } else {
            return 0;
        }
    }

    // Walked off the board inside the run.
    0
}
