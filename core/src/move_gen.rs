use crate::board::{Board, Cell};
use crate::types::{Coord, Move, Side};

/// Jump directions in their fixed scan order: up, down, left, right.
///
/// Enumeration order is part of the engine contract: agents break ties
/// by taking the first move listed, so both the direction order and the
/// row-major origin scan below are binding.
const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Enumerates every legal move for `side`, in contract order: origins
/// row-major, directions per `DIRECTIONS`, and within one direction the
/// single jump before each longer multi-jump.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for origin in board.coords() {
        if board.piece_at(origin) != Some(side) {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            push_jumps(board, side, origin, dr, dc, &mut moves);
        }
    }
    moves
}

/// Extends `moves` with every jump from `origin` along one direction.
/// Each hop needs an adjacent enemy stone and an empty landing square;
/// a multi-jump keeps hopping in the same direction.
fn push_jumps(board: &Board, side: Side, origin: Coord, dr: i8, dc: i8, moves: &mut Vec<Move>) {
    let mut at = origin;
    loop {
        let over = match at.offset(dr, dc) {
            Some(c) => c,
            None => return,
        };
        let land = match at.offset(dr * 2, dc * 2) {
            Some(c) => c,
            None => return,
        };
        if !board.in_bounds(land)
            || board.piece_at(over) != Some(side.opponent())
            || board.cell(land) != Cell::Empty
        {
            return;
        }
        moves.push(Move::new(origin, land));
        at = land;
    }
}

/// Returns true while the game is still in its opening phase: the two
/// opening turns remove a stone each, so fewer than two empty squares
/// means the next move is a removal.
pub fn is_initial_move(board: &Board) -> bool {
    board.empty_count() < 2
}

/// The removals side X may open with: the top-left corner stone and the
/// center stone, when those squares hold X.
pub fn first_moves_x(board: &Board) -> Vec<Move> {
    let center = Coord::new(board.rows() / 2, board.cols() / 2);
    let mut moves = Vec::new();
    for coord in [Coord::new(0, 0), center] {
        if board.piece_at(coord) == Some(Side::X) && !moves.contains(&Move::removal(coord)) {
            moves.push(Move::removal(coord));
        }
    }
    moves
}

/// The removals side O may answer with: its stones orthogonally adjacent
/// to the square X just emptied, in direction order.
pub fn first_moves_o(board: &Board) -> Vec<Move> {
    let emptied = match board.coords().find(|&c| board.cell(c) == Cell::Empty) {
        Some(c) => c,
        None => return Vec::new(),
    };

    let mut moves = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        if let Some(adjacent) = emptied.offset(dr, dc) {
            if board.piece_at(adjacent) == Some(Side::O) {
                moves.push(Move::removal(adjacent));
            }
        }
    }
    moves
}
