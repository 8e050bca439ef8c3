use crate::types::{Coord, Move, Side};
use std::fmt;
use thiserror::Error;

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Taken(Side),
}

/// Errors produced when parsing a board from its text form.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[error("board text is empty")]
    Empty,
    #[error("row {0} has {1} cells, expected {2}")]
    RaggedRow(usize, usize, usize),
    #[error("unrecognized cell character `{0}`")]
    BadCell(char),
}

/// A Konane board: a dense row-major grid of cells.
///
/// The board behaves as an immutable value from the search's point of
/// view: `apply_move` returns a new board and never mutates in place.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board in the starting position: every square filled,
    /// stones alternating with side X on (0,0).
    pub fn new(rows: u8, cols: u8) -> Self {
        let mut board = Self::empty(rows, cols);
        for coord in board.coords().collect::<Vec<_>>() {
            let side = if (coord.row + coord.col) % 2 == 0 {
                Side::X
            } else {
                Side::O
            };
            board.set(coord, Cell::Taken(side));
        }
        board
    }

    /// Creates the standard 8x8 starting position.
    pub fn standard() -> Self {
        Self::new(8, 8)
    }

    /// Creates a board with every square empty, for building test positions.
    pub fn empty(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; usize::from(rows) * usize::from(cols)],
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Returns true if the coordinate lies on the board.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Returns the cell at a coordinate. Out-of-bounds reads are Empty,
    /// which keeps jump scanning free of bounds branching.
    pub fn cell(&self, coord: Coord) -> Cell {
        if self.in_bounds(coord) {
            self.cells[self.index(coord)]
        } else {
            Cell::Empty
        }
    }

    /// Returns the side occupying a square, if any.
    pub fn piece_at(&self, coord: Coord) -> Option<Side> {
        match self.cell(coord) {
            Cell::Taken(side) => Some(side),
            Cell::Empty => None,
        }
    }

    /// Writes a cell. Panics on out-of-bounds coordinates; callers build
    /// positions only from coordinates they know to be on the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(self.in_bounds(coord), "set out of bounds: {coord}");
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Number of empty squares; drives the opening-move protocol.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Iterates over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Applies a move, producing a new board.
    ///
    /// A removal clears its square. A jump walks from origin to
    /// destination two squares per hop, clearing each jumped stone.
    /// The move is assumed legal; legality lives in move generation.
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        if mv.is_removal() {
            next.set(mv.from, Cell::Empty);
            return next;
        }

        let mover = next.cell(mv.from);
        next.set(mv.from, Cell::Empty);

        let dr = (i16::from(mv.to.row) - i16::from(mv.from.row)).signum() as i8;
        let dc = (i16::from(mv.to.col) - i16::from(mv.from.col)).signum() as i8;

        let mut at = mv.from;
        while at != mv.to {
            // Clear the jumped stone, then advance one full hop.
            if let Some(over) = at.offset(dr, dc) {
                next.set(over, Cell::Empty);
            }
            match at.offset(dr * 2, dc * 2) {
                Some(landed) => at = landed,
                None => break,
            }
        }

        next.set(mv.to, mover);
        next
    }

    /// Parses a board from its text form: rows of `x`/`o`/`.` separated
    /// by `/`, e.g. `x.x/oxo`.
    pub fn from_text(text: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<&str> = text
            .trim()
            .split('/')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let cols = rows[0].chars().count();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row_cells: Vec<Cell> = row
                .chars()
                .map(|c| match c {
                    '.' => Ok(Cell::Empty),
                    _ => Side::from_char(c)
                        .map(Cell::Taken)
                        .ok_or(ParseBoardError::BadCell(c)),
                })
                .collect::<Result<_, _>>()?;
            if row_cells.len() != cols {
                return Err(ParseBoardError::RaggedRow(i, row_cells.len(), cols));
            }
            cells.extend(row_cells);
        }

        Ok(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        })
    }

    /// Serializes the board to the text form accepted by `from_text`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            if row > 0 {
                out.push('/');
            }
            for col in 0..self.cols {
                out.push(match self.cell(Coord::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Taken(side) => side.to_char(),
                });
            }
        }
        out
    }

    fn index(&self, coord: Coord) -> usize {
        usize::from(coord.row) * usize::from(self.cols) + usize::from(coord.col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;
        for row in 0..self.rows {
            write!(f, "{row:>2} ")?;
            for col in 0..self.cols {
                match self.cell(Coord::new(row, col)) {
                    Cell::Empty => write!(f, ". ")?,
                    Cell::Taken(side) => write!(f, "{side} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_fill_alternates() {
        let board = Board::new(4, 4);
        assert_eq!(board.piece_at(Coord::new(0, 0)), Some(Side::X));
        assert_eq!(board.piece_at(Coord::new(0, 1)), Some(Side::O));
        assert_eq!(board.piece_at(Coord::new(1, 0)), Some(Side::O));
        assert_eq!(board.piece_at(Coord::new(3, 3)), Some(Side::X));
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_apply_removal() {
        let board = Board::new(4, 4);
        let next = board.apply_move(Move::removal(Coord::new(0, 0)));

        assert_eq!(next.piece_at(Coord::new(0, 0)), None);
        assert_eq!(next.empty_count(), 1);
        // The original board is untouched.
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_apply_single_jump() {
        let board = Board::from_text("xo.").unwrap();
        let next = board.apply_move(Move::new(Coord::new(0, 0), Coord::new(0, 2)));

        assert_eq!(next.piece_at(Coord::new(0, 0)), None);
        assert_eq!(next.piece_at(Coord::new(0, 1)), None);
        assert_eq!(next.piece_at(Coord::new(0, 2)), Some(Side::X));
    }

    #[test]
    fn test_apply_double_jump_clears_both_stones() {
        let board = Board::from_text("xo.o.").unwrap();
        let next = board.apply_move(Move::new(Coord::new(0, 0), Coord::new(0, 4)));

        assert_eq!(next.to_text(), "....x");
    }

    #[test]
    fn test_apply_vertical_jump() {
        let board = Board::from_text("o/x/.").unwrap();
        let next = board.apply_move(Move::new(Coord::new(0, 0), Coord::new(2, 0)));

        assert_eq!(next.piece_at(Coord::new(2, 0)), Some(Side::O));
        assert_eq!(next.piece_at(Coord::new(1, 0)), None);
        assert_eq!(next.piece_at(Coord::new(0, 0)), None);
    }

    #[test]
    fn test_text_round_trip() {
        let text = "x.o/oxo/..x";
        let board = Board::from_text(text).unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.to_text(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Board::from_text("  "), Err(ParseBoardError::Empty));
        assert_eq!(
            Board::from_text("xo/x"),
            Err(ParseBoardError::RaggedRow(1, 1, 2))
        );
        assert_eq!(Board::from_text("xq"), Err(ParseBoardError::BadCell('q')));
    }
}
