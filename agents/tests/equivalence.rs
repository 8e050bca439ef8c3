use konane_agents::{alpha_beta, evaluate, minimax};
use konane_core::{Board, Cell, Coord, Side};
use proptest::prelude::*;

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::X), Just(Side::O)]
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        2 => Just(Cell::Empty),
        1 => Just(Cell::Taken(Side::X)),
        1 => Just(Cell::Taken(Side::O)),
    ]
}

/// Arbitrary small boards, legal-looking or not: both searches and the
/// evaluator are total over any grid of cells.
fn arb_board() -> impl Strategy<Value = Board> {
    (2u8..=5, 2u8..=5).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(arb_cell(), usize::from(rows) * usize::from(cols)).prop_map(
            move |cells| {
                let mut board = Board::empty(rows, cols);
                let coords: Vec<Coord> = board.coords().collect();
                for (coord, cell) in coords.into_iter().zip(cells) {
                    board.set(coord, cell);
                }
                board
            },
        )
    })
}

proptest! {
    #[test]
    fn alpha_beta_value_matches_minimax(
        board in arb_board(),
        side in arb_side(),
        depth in 0u8..=3,
    ) {
        let mm = minimax(&board, side, depth);
        let ab = alpha_beta(&board, side, depth);

        prop_assert_eq!(mm.score, ab.score);
        // Pruning only ever skips work.
        prop_assert!(ab.nodes <= mm.nodes);
    }

    #[test]
    fn depth_zero_returns_the_bare_heuristic(board in arb_board(), side in arb_side()) {
        for result in [minimax(&board, side, 0), alpha_beta(&board, side, 0)] {
            prop_assert_eq!(result.best_move, None);
            prop_assert_eq!(result.score, evaluate(&board, side));
        }
    }
}
