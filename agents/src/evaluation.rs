use konane_core::{legal_moves, Board, Side};

/// Scores a position for `player` without searching: the negated number
/// of legal moves its opponent has. Starving the opponent of mobility is
/// winning in Konane, so higher is better for `player`.
///
/// `player` is always the side of the agent that started the search,
/// never the side to move at the node being scored; both searches pass
/// the invoker's side down unchanged.
pub fn evaluate(board: &Board, player: Side) -> i32 {
    -(legal_moves(board, player.opponent()).len() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::empty(4, 4);
        assert_eq!(evaluate(&board, Side::X), 0);
        assert_eq!(evaluate(&board, Side::O), 0);
    }

    #[test]
    fn test_counts_opponent_mobility() {
        use konane_core::{Coord, Move};

        // O has two jumps onto (0,1); X has one jump onto (0,0).
        let board = Board::standard()
            .apply_move(Move::removal(Coord::new(0, 0)))
            .apply_move(Move::removal(Coord::new(0, 1)));

        assert_eq!(evaluate(&board, Side::X), -2);
        assert_eq!(evaluate(&board, Side::O), -1);
    }

    #[test]
    fn test_deterministic() {
        let board = Board::from_text("xo./ox./...").unwrap();
        assert_eq!(evaluate(&board, Side::X), evaluate(&board, Side::X));
    }
}
