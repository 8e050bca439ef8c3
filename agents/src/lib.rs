pub mod alphabeta;
pub mod evaluation;
pub mod minimax;
pub mod player;

use konane_core::Move;

/// Score bound the searches treat as unreachable by any real position.
pub const INFINITY: i32 = 1_000_000;

/// Outcome of a search from one agent's point of view.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// The move chosen at the root; None when the root has no legal move
    /// or the search was invoked at depth zero.
    pub best_move: Option<Move>,
    /// The propagated score, always from the invoking agent's perspective.
    pub score: i32,
    /// Search nodes visited, leaves included.
    pub nodes: u64,
}

pub use alphabeta::alpha_beta;
pub use evaluation::evaluate;
pub use minimax::minimax;
pub use player::{choose_move, Player, PlayerError};
