use std::fmt;

/// Represents one of the two players in Konane.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Returns the opposite side.
    pub const fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Returns the character used for this side in board text.
    pub const fn to_char(self) -> char {
        match self {
            Side::X => 'x',
            Side::O => 'o',
        }
    }

    /// Parses a side from a character, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(Side::X),
            'o' => Some(Side::O),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A board coordinate as (row, column), zero-indexed from the top-left.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offsets the coordinate by a signed (row, col) delta.
    /// Returns None if the result would leave the non-negative range.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(dr);
        let col = i16::from(self.col) + i16::from(dc);
        if row < 0 || col < 0 {
            None
        } else {
            Some(Self::new(row as u8, col as u8))
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move from an origin square to a destination square.
///
/// The game's opening removals are represented as moves with
/// `from == to`; every other move is a straight-line jump covering
/// two squares per captured stone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// A removal of the stone at `at`, used only for the opening.
    pub const fn removal(at: Coord) -> Self {
        Self { from: at, to: at }
    }

    /// Returns true if this move removes a stone rather than jumping.
    pub fn is_removal(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if this is a single jump (grid distance exactly 2).
    pub fn is_jump(&self) -> bool {
        let dr = i16::from(self.from.row) - i16::from(self.to.row);
        let dc = i16::from(self.from.col) - i16::from(self.to.col);
        dr.abs() + dc.abs() == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_removal() {
            write!(f, "remove {}", self.from)
        } else {
            write!(f, "{}->{}", self.from, self.to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::O.opponent(), Side::X);
    }

    #[test]
    fn test_side_from_char_case_insensitive() {
        assert_eq!(Side::from_char('X'), Some(Side::X));
        assert_eq!(Side::from_char('o'), Some(Side::O));
        assert_eq!(Side::from_char('q'), None);
    }

    #[test]
    fn test_removal_move() {
        let mv = Move::removal(Coord::new(0, 0));
        assert!(mv.is_removal());
        assert!(!mv.is_jump());
        assert_eq!(mv.to_string(), "remove (0,0)");
    }

    #[test]
    fn test_jump_move() {
        let mv = Move::new(Coord::new(0, 0), Coord::new(0, 2));
        assert!(!mv.is_removal());
        assert!(mv.is_jump());
        assert_eq!(mv.to_string(), "(0,0)->(0,2)");
    }

    #[test]
    fn test_offset_out_of_range() {
        assert_eq!(Coord::new(0, 1).offset(-1, 0), None);
        assert_eq!(Coord::new(2, 0).offset(0, -1), None);
        assert_eq!(Coord::new(1, 1).offset(1, 1), Some(Coord::new(2, 2)));
    }
}
