use crate::config::{ConfigError, validate_board_size};
use crate::types::{Cell, MoveCandidate, Position};

/// Square board of `size` x `size` cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the opening board:
    /// red on the two top-left/bottom-right center cells,
    /// blue on the other diagonal.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        validate_board_size(size)?;

        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
        };
        let lo = size / 2 - 1;
        let hi = size / 2;
        board.set(Position::new(lo, lo), Cell::Red);
        board.set(Position::new(hi, lo), Cell::Blue);
        board.set(Position::new(lo, hi), Cell::Blue);
        board.set(Position::new(hi, hi), Cell::Red);
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounds-checked read. Panics on coordinates outside the board.
    pub fn get(&self, pos: Position) -> Cell {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position {pos} outside {0}x{0} board",
            self.size
        );
        self.cells[self.index(pos)]
    }

    /// Places the candidate's disc and flips every flagged direction.
    /// Returns the number of flipped discs. Returns 0 and leaves the board
    /// unchanged when the candidate captures nothing or the target is occupied.
    pub fn apply(&mut self, candidate: &MoveCandidate) -> usize {
        if !candidate.is_legal() || self.get(candidate.pos) != Cell::Empty {
            return 0;
        }

        let color = candidate.player.cell();
        self.set(candidate.pos, color);

        let mut flipped = 0;
        for dir in candidate.directions.iter() {
            let mut cursor = candidate.pos.step(dir, self.size);
            while let Some(pos) = cursor {
                if self.get(pos) == color {
                    break;
                }
                self.set(pos, color);
                flipped += 1;
                cursor = pos.step(dir, self.size);
            }
        }

        debug_assert_eq!(flipped, candidate.heuristic as usize);
        flipped
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Returns `(red_count, blue_count)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.count(Cell::Red), self.count(Cell::Blue))
    }

    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size * size).map(move |idx| Position::new(idx / size, idx % size))
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Builds a board from rows of `R`, `B` and `-`.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let cells = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), size, "board rows must be square");
                row.chars().map(|ch| match ch {
                    'R' => Cell::Red,
                    'B' => Cell::Blue,
                    '-' => Cell::Empty,
                    other => panic!("unexpected cell {other:?}"),
                })
            })
            .collect();
        Self { size, cells }
    }
}
