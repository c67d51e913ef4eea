//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;
use std::str::FromStr;

use shakmaty::{Color as SColor, File, Rank, Role, Square};

use crate::domain::rules::RulesError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Capitalized name used in status messages
    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }

    /// The rank a pawn of this color promotes on
    pub fn last_rank(self) -> Rank {
        match self {
            PieceColor::White => Rank::Eighth,
            PieceColor::Black => Rank::First,
        }
    }
}

impl From<SColor> for PieceColor {
    fn from(color: SColor) -> Self {
        match color {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Unicode glyph for this piece
    pub fn glyph(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => "♙",
            (PieceKind::Pawn, PieceColor::Black) => "♟",
            (PieceKind::Rook, PieceColor::White) => "♖",
            (PieceKind::Rook, PieceColor::Black) => "♜",
            (PieceKind::Knight, PieceColor::White) => "♘",
            (PieceKind::Knight, PieceColor::Black) => "♞",
            (PieceKind::Bishop, PieceColor::White) => "♗",
            (PieceKind::Bishop, PieceColor::Black) => "♝",
            (PieceKind::Queen, PieceColor::White) => "♕",
            (PieceKind::Queen, PieceColor::Black) => "♛",
            (PieceKind::King, PieceColor::White) => "♔",
            (PieceKind::King, PieceColor::Black) => "♚",
        }
    }

    /// Whether moving this piece to `to` is a promotion
    pub fn promotes_on(&self, to: Square) -> bool {
        self.kind == PieceKind::Pawn && to.rank() == self.color.last_rank()
    }
}

/// The pieces a pawn may be promoted to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Knight,
    Bishop,
}

impl PromotionPiece {
    /// Options in the order the picker shows them
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
    ];

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
        }
    }

    pub fn role(self) -> Role {
        match self {
            PromotionPiece::Queen => Role::Queen,
            PromotionPiece::Rook => Role::Rook,
            PromotionPiece::Knight => Role::Knight,
            PromotionPiece::Bishop => Role::Bishop,
        }
    }

    /// Parse the lowercase letter used in move notation (`q`, `r`, `n`, `b`)
    pub fn from_char(c: char) -> Result<Self, RulesError> {
        match c.to_ascii_lowercase() {
            'q' => Ok(PromotionPiece::Queen),
            'r' => Ok(PromotionPiece::Rook),
            'n' => Ok(PromotionPiece::Knight),
            'b' => Ok(PromotionPiece::Bishop),
            _ => Err(RulesError::InvalidPromotion(c)),
        }
    }

    pub fn to_char(self) -> char {
        self.role().char()
    }
}

impl FromStr for PromotionPiece {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            (Some(c), Some(_)) => Err(RulesError::InvalidPromotion(c)),
            (None, _) => Err(RulesError::MissingPromotion),
        }
    }
}

impl fmt::Display for PromotionPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Convert row/col (0-indexed, row 0 = rank 8) to shakmaty Square
pub fn to_square(row: usize, col: usize) -> Square {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8, row 7 = rank 1
    Square::from_coords(file, rank)
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece {
        kind,
        color: piece.color.into(),
    }
}
