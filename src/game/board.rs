use super::disc::DiscColor;
use crate::error::BoardShapeError;

/// Standard board size.
pub const BOARD_SIZE: usize = 8;
/// Smallest size the engine accepts. Sizes must also be even so the four
/// starting discs sit in the exact center.
pub const MIN_BOARD_SIZE: usize = 4;

/// A 0-indexed (row, col) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Rotation angles of a disc, in degrees about the X and Y axes.
///
/// Only the flip choreographer reads or writes these; the rules engine is
/// oblivious to them. Angles accumulate in ±180° increments without modulo
/// reduction so a CSS-transform style consumer animates through the shortest
/// arc in the intended direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub x_deg: i32,
    pub y_deg: i32,
}

impl Rotation {
    /// Resting angles for a disc of the given color. An empty cell holds a
    /// disc on edge (90°), black face-up (0°), white face-down (180°).
    pub fn for_disc(color: DiscColor) -> Self {
        match color {
            DiscColor::Black => Rotation { x_deg: 0, y_deg: 0 },
            DiscColor::White => Rotation { x_deg: 180, y_deg: 0 },
            DiscColor::None => Rotation { x_deg: 90, y_deg: 0 },
        }
    }
}

/// State of one board cell: disc color plus the animation-facing rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub disc: DiscColor,
    pub rotation: Rotation,
}

impl Cell {
    fn empty() -> Self {
        Cell {
            disc: DiscColor::None,
            rotation: Rotation::for_disc(DiscColor::None),
        }
    }

    fn with_disc(color: DiscColor) -> Self {
        Cell {
            disc: color,
            rotation: Rotation::for_disc(color),
        }
    }
}

/// Disc counts per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// Square grid of cells. All mutation goes through [`set_disc`]/[`set_cell`];
/// game-level code treats boards as values and clones before changing them.
///
/// [`set_disc`]: Board::set_disc
/// [`set_cell`]: Board::set_cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of the given size with the canonical four-disc start:
    /// white on the main diagonal of the center block, black on the other.
    pub fn new(size: usize) -> Result<Self, BoardShapeError> {
        if size < MIN_BOARD_SIZE || size % 2 != 0 {
            return Err(BoardShapeError::InvalidSize(size));
        }

        let mut board = Board {
            size,
            cells: vec![Cell::empty(); size * size],
        };

        let mid = size / 2 - 1;
        board.set_disc(Position::new(mid, mid), DiscColor::White);
        board.set_disc(Position::new(mid, mid + 1), DiscColor::Black);
        board.set_disc(Position::new(mid + 1, mid), DiscColor::Black);
        board.set_disc(Position::new(mid + 1, mid + 1), DiscColor::White);

        Ok(board)
    }

    /// Build a board directly from rows of disc colors. Intended for test
    /// fixtures and position setup; validates squareness and size.
    pub fn from_rows(rows: &[Vec<DiscColor>]) -> Result<Self, BoardShapeError> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE || size % 2 != 0 {
            return Err(BoardShapeError::InvalidSize(size));
        }
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != size {
                return Err(BoardShapeError::NotSquare {
                    expected: size,
                    row,
                    found: cols.len(),
                });
            }
        }

        let cells = rows
            .iter()
            .flatten()
            .map(|&color| Cell::with_disc(color))
            .collect();
        Ok(Board { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a position
    pub fn get(&self, position: Position) -> Cell {
        self.cells[self.index(position)]
    }

    /// Get just the disc color at a position
    pub fn disc_at(&self, position: Position) -> DiscColor {
        self.get(position).disc
    }

    /// Replace the full cell state at a position.
    pub fn set_cell(&mut self, position: Position, cell: Cell) {
        let index = self.index(position);
        self.cells[index] = cell;
    }

    /// Set the disc at a position, resetting its rotation to the resting
    /// angles for that color.
    pub fn set_disc(&mut self, position: Position, color: DiscColor) {
        self.set_cell(position, Cell::with_disc(color));
    }

    /// Check signed coordinates against the board bounds.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size
    }

    /// Count discs of both colors.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in &self.cells {
            match cell.disc {
                DiscColor::Black => score.black += 1,
                DiscColor::White => score.white += 1,
                DiscColor::None => {}
            }
        }
        score
    }

    /// Fraction of cells holding a disc, in `0.0..=1.0`.
    pub fn occupancy(&self) -> f64 {
        let score = self.score();
        (score.black + score.white) as f64 / (self.size * self.size) as f64
    }

    /// Check if every cell holds a disc
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.disc.is_disc())
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.size + position.col
    }
}

impl Default for Board {
    fn default() -> Self {
        // BOARD_SIZE satisfies the size invariant.
        match Board::new(BOARD_SIZE) {
            Ok(board) => board,
            Err(_) => unreachable!("standard board size is valid"),
        }
    }
}
