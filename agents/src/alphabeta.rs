use crate::evaluation::evaluate;
use crate::{SearchResult, INFINITY};
use konane_core::{legal_moves, Board, Move, Side};

/// Alpha-beta pruned search from `player`'s point of view.
///
/// Produces the same score as `minimax` for any board and depth; the
/// chosen move may differ only when several moves tie at the optimum,
/// since pruning can stop before every tied line has been seen.
pub fn alpha_beta(board: &Board, player: Side, depth: u8) -> SearchResult {
    let mut nodes = 0;
    let (best_move, score) = ab_max(board, player, player, -INFINITY, INFINITY, depth, &mut nodes);
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Maximizing ply: `player`'s own search turns. Raises `alpha` as better
/// lines appear and stops the node once `alpha >= beta`, because the
/// minimizer above already has a line at least as good as `beta`.
#[allow(clippy::too_many_arguments)]
fn ab_max(
    board: &Board,
    to_move: Side,
    player: Side,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;

    let moves = legal_moves(board, to_move);
    if depth == 0 || moves.is_empty() {
        return (None, evaluate(board, player));
    }

    let mut best_move = None;
    let mut opt = -INFINITY;

    for mv in moves {
        let next = board.apply_move(mv);
        let (_, score) = ab_min(
            &next,
            to_move.opponent(),
            player,
            alpha,
            beta,
            depth - 1,
            nodes,
        );

        if score > opt {
            opt = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(opt);
        if alpha >= beta {
            break;
        }
    }

    (best_move, opt)
}

/// Minimizing ply: the mirror of `ab_max`, lowering `beta` and cutting
/// off once `beta <= alpha`.
#[allow(clippy::too_many_arguments)]
fn ab_min(
    board: &Board,
    to_move: Side,
    player: Side,
    alpha: i32,
    mut beta: i32,
    depth: u8,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;

    let moves = legal_moves(board, to_move);
    if depth == 0 || moves.is_empty() {
        return (None, evaluate(board, player));
    }

    let mut best_move = None;
    let mut opt = INFINITY;

    for mv in moves {
        let next = board.apply_move(mv);
        let (_, score) = ab_max(
            &next,
            to_move.opponent(),
            player,
            alpha,
            beta,
            depth - 1,
            nodes,
        );

        if score < opt {
            opt = score;
            best_move = Some(mv);
        }
        beta = beta.min(opt);
        if beta <= alpha {
            break;
        }
    }

    (best_move, opt)
}
