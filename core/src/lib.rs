pub mod board;
pub mod move_gen;
pub mod types;

pub use board::{Board, Cell, ParseBoardError};
pub use move_gen::{first_moves_o, first_moves_x, is_initial_move, legal_moves};
pub use types::{Coord, Move, Side};
