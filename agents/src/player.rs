use crate::alphabeta::alpha_beta;
use crate::minimax::minimax;
use konane_core::{
    first_moves_o, first_moves_x, is_initial_move, legal_moves, Board, Coord, Move, Side,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum PlayerError {
    /// A Human player's turns are collected by the front end; asking this
    /// crate for them is a caller bug.
    #[error("human player moves are handled externally")]
    Unsupported,
    #[error("unrecognized player type `{0}`")]
    UnrecognizedType(String),
}

/// A decision maker for one side of the board.
///
/// Constructed once before a game and queried once per turn. Every
/// operation answers `Ok(None)` when no move is available; the driving
/// loop treats that as the game ending, never as an error.
#[derive(Debug, Clone)]
pub enum Player {
    Human { side: Side },
    Random { side: Side },
    Deterministic { side: Side },
    Minimax { side: Side, depth: u8 },
    AlphaBeta { side: Side, depth: u8 },
}

impl Player {
    pub const DEFAULT_DEPTH: u8 = 1;

    /// Builds a player from a one-character, case-insensitive type code:
    /// `h`uman, `r`andom, `m`inimax, `a`lpha-beta, or `d`eterministic.
    /// Longer strings are recognized by their first character, so full
    /// words work too. The search depth defaults to one ply.
    pub fn from_code(code: &str, side: Side, depth: Option<u8>) -> Result<Self, PlayerError> {
        let depth = depth.unwrap_or(Self::DEFAULT_DEPTH);
        match code.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('h') => Ok(Player::Human { side }),
            Some('r') => Ok(Player::Random { side }),
            Some('m') => Ok(Player::Minimax { side, depth }),
            Some('a') => Ok(Player::AlphaBeta { side, depth }),
            Some('d') => Ok(Player::Deterministic { side }),
            _ => Err(PlayerError::UnrecognizedType(code.to_string())),
        }
    }

    /// The side this player controls.
    pub fn side(&self) -> Side {
        match *self {
            Player::Human { side }
            | Player::Random { side }
            | Player::Deterministic { side }
            | Player::Minimax { side, .. }
            | Player::AlphaBeta { side, .. } => side,
        }
    }

    /// X's opening removal. Search and deterministic players always take
    /// the corner stone; the random player picks among the legal openings.
    pub fn select_initial_x(&self, board: &Board) -> Result<Option<Move>, PlayerError> {
        match self {
            Player::Human { .. } => Err(PlayerError::Unsupported),
            Player::Random { .. } => {
                Ok(first_moves_x(board).choose(&mut thread_rng()).copied())
            }
            Player::Deterministic { .. } => Ok(first_moves_x(board).first().copied()),
            Player::Minimax { .. } | Player::AlphaBeta { .. } => {
                Ok(Some(Move::removal(Coord::new(0, 0))))
            }
        }
    }

    /// O's answering removal, chosen from the rules engine's enumeration.
    pub fn select_initial_o(&self, board: &Board) -> Result<Option<Move>, PlayerError> {
        match self {
            Player::Human { .. } => Err(PlayerError::Unsupported),
            Player::Random { .. } => {
                Ok(first_moves_o(board).choose(&mut thread_rng()).copied())
            }
            Player::Deterministic { .. }
            | Player::Minimax { .. }
            | Player::AlphaBeta { .. } => Ok(first_moves_o(board).first().copied()),
        }
    }

    /// A regular move for this player's side.
    pub fn get_move(&self, board: &Board) -> Result<Option<Move>, PlayerError> {
        match *self {
            Player::Human { .. } => Err(PlayerError::Unsupported),
            Player::Random { side } => {
                Ok(legal_moves(board, side).choose(&mut thread_rng()).copied())
            }
            Player::Deterministic { side } => Ok(legal_moves(board, side).first().copied()),
            Player::Minimax { side, depth } => Ok(minimax(board, side, depth).best_move),
            Player::AlphaBeta { side, depth } => Ok(alpha_beta(board, side, depth).best_move),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Player::Human { .. } => write!(f, "Human"),
            Player::Random { .. } => write!(f, "Random"),
            Player::Deterministic { .. } => write!(f, "Deterministic"),
            Player::Minimax { depth, .. } => write!(f, "Minimax(depth={depth})"),
            Player::AlphaBeta { depth, .. } => write!(f, "AlphaBeta(depth={depth})"),
        }
    }
}

/// Routes one turn to the right player entry point: opening boards go to
/// the initial-move selectors by the player's side, everything else to
/// `get_move`.
pub fn choose_move(player: &Player, board: &Board) -> Result<Option<Move>, PlayerError> {
    if is_initial_move(board) {
        match player.side() {
            Side::X => player.select_initial_x(board),
            Side::O => player.select_initial_o(board),
        }
    } else {
        player.get_move(board)
    }
}
