//! Status line derived from the rules engine.

use std::fmt;

use crate::domain::{PieceColor, RulesEngine};

/// What the status line reports about the current position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    ToMove(PieceColor),
    InCheck(PieceColor),
    Checkmate { winner: PieceColor },
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// Draw for any other reason (fifty-move rule)
    Draw,
}

impl GameStatus {
    /// Derive the status of the engine's current position.
    ///
    /// When several draw conditions hold at once the most specific one
    /// wins: stalemate, then repetition, then insufficient material.
    pub fn of<E: RulesEngine>(engine: &E) -> Self {
        let side = engine.side_to_move();
        if engine.is_game_over() {
            if engine.is_checkmate() {
                GameStatus::Checkmate {
                    winner: side.opposite(),
                }
            } else if engine.is_stalemate() {
                GameStatus::Stalemate
            } else if engine.is_threefold_repetition() {
                GameStatus::ThreefoldRepetition
            } else if engine.is_insufficient_material() {
                GameStatus::InsufficientMaterial
            } else {
                GameStatus::Draw
            }
        } else if engine.is_check() {
            GameStatus::InCheck(side)
        } else {
            GameStatus::ToMove(side)
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::ToMove(_) | GameStatus::InCheck(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::ToMove(side) => write!(f, "{} to move.", side.name()),
            GameStatus::InCheck(side) => write!(f, "{} is in check.", side.name()),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate! {} wins.", winner.name()),
            GameStatus::Stalemate => f.write_str("Game ended in stalemate."),
            GameStatus::ThreefoldRepetition => {
                f.write_str("Game ended in draw by threefold repetition.")
            }
            GameStatus::InsufficientMaterial => {
                f.write_str("Game ended in draw due to insufficient material.")
            }
            GameStatus::Draw => f.write_str("Game ended in draw."),
        }
    }
}
