//! The rules-engine capability consumed by the interaction layer.
//!
//! Everything about chess legality lives behind [`RulesEngine`]. The
//! interaction state machine only asks questions and submits moves.

use std::collections::BTreeSet;
use std::fmt;

use shakmaty::Square;
use thiserror::Error;

use crate::domain::chess::{Piece, PieceColor, PromotionPiece};

/// Errors raised by a rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The submitted move matches no legal move in the current position
    #[error("Illegal move: {0}")]
    IllegalMove(MoveSpec),

    /// Promotion choice outside queen, rook, knight, bishop
    #[error("Invalid promotion piece: {0:?}")]
    InvalidPromotion(char),

    #[error("No promotion piece given")]
    MissingPromotion,

    /// Start position could not be parsed or is not a legal position
    #[error("Invalid position {fen:?}: {message}")]
    InvalidFen { fen: String, message: String },
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;

/// A move as the player expresses it: origin, destination, and the
/// promotion piece when a pawn reaches its last rank.
///
/// Castling is expressed as the king's two-square step (e1 to g1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveSpec {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionPiece>,
}

impl MoveSpec {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: PromotionPiece) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

/// A move the engine accepted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// The move as submitted (promotion filled in only when it applied)
    pub spec: MoveSpec,
    /// Standard algebraic notation of the move, e.g. `Nf3`, `exd8=Q#`
    pub san: String,
    /// Position string after the move
    pub fen: String,
}

/// Read and write access to a game of chess.
///
/// Implementations own the game state exclusively. `apply_move` either
/// applies the move completely or fails without any change.
pub trait RulesEngine {
    /// A fresh game at the standard starting position
    fn new_game() -> Self
    where
        Self: Sized;

    /// Current position as a FEN string
    fn fen(&self) -> String;

    fn occupant(&self, square: Square) -> Option<Piece>;

    fn side_to_move(&self) -> PieceColor;

    /// Destination squares of every legal move starting on `square`
    fn legal_destinations(&self, square: Square) -> BTreeSet<Square>;

    fn apply_move(&mut self, spec: MoveSpec) -> RulesResult<AppliedMove>;

    /// Revert exactly one applied move; no-op when none was applied
    fn undo_last(&mut self);

    fn is_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_threefold_repetition(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    /// Any draw: stalemate, repetition, insufficient material or the
    /// fifty-move rule
    fn is_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// Occupants indexed `[row][col]`, row 0 = rank 8, col 0 = file a
    fn board_grid(&self) -> [[Option<Piece>; 8]; 8];
}
