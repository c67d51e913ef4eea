//! View models for rendering the board and the move list.
//!
//! These types are DTOs (Data Transfer Objects) that prepare game state
//! for display in the UI. They live in the UI layer, not the domain layer.

use shakmaty::Square;

use crate::domain::Piece;
use crate::ui::theme::SquareTint;

/// Everything needed to draw one board square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub piece: Option<Piece>,
    pub tint: SquareTint,
    /// Rank number, shown on the a-file
    pub rank_label: Option<char>,
    /// File letter, shown on the first rank
    pub file_label: Option<char>,
}

/// One numbered line of the move list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRowDisplay {
    pub move_num: usize,
    pub white: String,
    pub black: Option<String>,
}
