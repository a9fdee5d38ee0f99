use std::fmt;

use serde::Serialize;

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Red = 1,
    Blue = 2,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '-',
            Self::Red => 'R',
            Self::Blue => 'B',
        }
    }
}

/// One of the two sides. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// The cell value this player's discs occupy.
    pub fn cell(self) -> Cell {
        match self {
            Self::Red => Cell::Red,
            Self::Blue => Cell::Blue,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Blue => f.write_str("blue"),
        }
    }
}

/// A board coordinate. Ordering is lexicographic on `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps one unit in `dir`, or `None` when the step leaves a `size`x`size` board.
    pub fn step(self, dir: Direction, size: usize) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight compass directions a capture can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Left,
        Self::Right,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];

    /// Unit step as `(row, col)` deltas.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::DownLeft => (1, -1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bitmask over [`Direction`], one bit per compass direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = Self(0);

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&dir| self.contains(dir))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

/// Result of evaluating one placement.
///
/// Contract:
/// - `heuristic > 0` exactly when `directions` is non-empty.
/// - `heuristic == 0` marks an illegal placement; it must never be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveCandidate {
    pub pos: Position,
    pub player: Player,
    pub directions: DirectionSet,
    pub heuristic: u32,
}

impl MoveCandidate {
    pub fn illegal(pos: Position, player: Player) -> Self {
        Self {
            pos,
            player,
            directions: DirectionSet::EMPTY,
            heuristic: 0,
        }
    }

    pub fn is_legal(&self) -> bool {
        self.heuristic > 0
    }
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub red: usize,
    pub blue: usize,
    pub empty: usize,
    /// `None` on a draw.
    pub winner: Option<Player>,
    pub moves: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_board_edges() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.step(Direction::Up, 4), None);
        assert_eq!(corner.step(Direction::Left, 4), None);
        assert_eq!(corner.step(Direction::DownRight, 4), Some(Position::new(1, 1)));
        assert_eq!(Position::new(3, 2).step(Direction::Down, 4), None);
        assert_eq!(Position::new(3, 2).step(Direction::UpRight, 4), Some(Position::new(2, 3)));
    }

    #[test]
    fn direction_set_tracks_inserted_directions() {
        let set: DirectionSet = [Direction::Up, Direction::DownLeft].into_iter().collect();

        assert!(set.contains(Direction::Up));
        assert!(set.contains(Direction::DownLeft));
        assert!(!set.contains(Direction::Down));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Up, Direction::DownLeft]);
        assert!(DirectionSet::EMPTY.is_empty());
    }

    #[test]
    fn positions_order_row_major() {
        assert!(Position::new(0, 7) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }

    #[test]
    fn opponent_flips_sides() {
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent(), Player::Red);
        assert_eq!(Player::Blue.cell(), Cell::Blue);
    }
}
