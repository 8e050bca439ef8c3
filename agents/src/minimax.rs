use crate::evaluation::evaluate;
use crate::{SearchResult, INFINITY};
use konane_core::{legal_moves, Board, Move, Side};

/// Exhaustive depth-limited minimax from `player`'s point of view.
///
/// Scores propagate from the invoker's perspective throughout: plies
/// where `player` is to move maximize, the opponent's plies minimize.
pub fn minimax(board: &Board, player: Side, depth: u8) -> SearchResult {
    let mut nodes = 0;
    let (best_move, score) = minimax_inner(board, player, player, depth, &mut nodes);
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

fn minimax_inner(
    board: &Board,
    to_move: Side,
    player: Side,
    depth: u8,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;

    let moves = legal_moves(board, to_move);
    if depth == 0 || moves.is_empty() {
        return (None, evaluate(board, player));
    }

    let maximizing = to_move == player;
    let mut best_move = None;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let next = board.apply_move(mv);
        let (_, score) = minimax_inner(&next, to_move.opponent(), player, depth - 1, nodes);

        // Strict comparison keeps the first move among tied optima.
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_move, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use konane_core::Coord;

    #[test]
    fn test_depth_zero_is_a_leaf() {
        let board = Board::from_text("xo.").unwrap();
        let result = minimax(&board, Side::X, 0);

        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, Side::X));
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_no_moves_is_a_leaf_at_any_depth() {
        // X cannot move; O has one jump, so the leaf scores -1 for X.
        let board = Board::from_text("ox.").unwrap();
        for depth in [0, 1, 5] {
            let result = minimax(&board, Side::X, depth);
            assert_eq!(result.best_move, None);
            assert_eq!(result.score, -1);
        }
    }

    #[test]
    fn test_forced_move() {
        // X's only legal move is the jump onto (0,2).
        let board = Board::from_text("xo.").unwrap();
        let result = minimax(&board, Side::X, 1);

        assert_eq!(
            result.best_move,
            Some(Move::new(Coord::new(0, 0), Coord::new(0, 2)))
        );
    }

    // Two X options: the single jump onto (0,2) leaves O two replies,
    // while the double jump onto (0,4) wipes O out.
    const TWO_OPTION_BOARD: &str = "xo.o./...x./.....";

    #[test]
    fn test_maximizing_prefers_the_better_move() {
        let board = Board::from_text(TWO_OPTION_BOARD).unwrap();
        let result = minimax(&board, Side::X, 1);

        // The double jump is second in enumeration order but scores 0
        // against -2, so it must win.
        assert_eq!(
            result.best_move,
            Some(Move::new(Coord::new(0, 0), Coord::new(0, 4)))
        );
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_tie_break_keeps_first_enumerated_move() {
        // One ply deeper both options score 0: whatever O answers to the
        // single jump, it ends up with no further moves. The search must
        // then keep the first move it saw.
        let board = Board::from_text(TWO_OPTION_BOARD).unwrap();
        let result = minimax(&board, Side::X, 2);

        assert_eq!(
            result.best_move,
            Some(Move::new(Coord::new(0, 0), Coord::new(0, 2)))
        );
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let board = Board::from_text(TWO_OPTION_BOARD).unwrap();
        let a = minimax(&board, Side::X, 3);
        let b = minimax(&board, Side::X, 3);

        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert_eq!(a.nodes, b.nodes);
    }
}
