//! [`RulesEngine`] backed by `shakmaty`.
//!
//! `shakmaty` positions are immutable snapshots without history, so the
//! engine keeps the starting position plus a stack of `(move, position)`
//! pairs. The top of the stack is the current position; undo pops it and
//! repetition counting walks it.

use std::collections::BTreeSet;

use shakmaty::fen::{Epd, Fen};
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Position, Square};

use crate::domain::chess::{Piece, PieceColor, shakmaty_to_piece, to_square};
use crate::domain::rules::{AppliedMove, MoveSpec, RulesEngine, RulesError, RulesResult};

/// Half-moves without capture or pawn move after which the game is drawn
const FIFTY_MOVE_HALFMOVES: u32 = 100;

#[derive(Clone, Debug)]
pub struct ShakmatyEngine {
    initial: Chess,
    stack: Vec<(Move, Chess)>,
}

impl ShakmatyEngine {
    /// Start from an arbitrary position given as FEN
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let invalid = |message: String| RulesError::InvalidFen {
            fen: fen.to_string(),
            message,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let position = parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self {
            initial: position,
            stack: Vec::new(),
        })
    }

    /// The current position
    pub fn position(&self) -> &Chess {
        self.stack.last().map_or(&self.initial, |(_, p)| p)
    }

    /// Number of moves applied since the start position
    #[allow(dead_code)]
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    /// Find the legal move the player means by `spec`
    fn find_move(&self, spec: MoveSpec) -> Option<Move> {
        self.position().legal_moves().into_iter().find(|m| {
            user_squares(m) == Some((spec.from, spec.to))
                && match m.promotion() {
                    Some(role) => spec.promotion.map(|p| p.role()) == Some(role),
                    None => true,
                }
        })
    }

    /// How often the current position has occurred, counting from the start
    fn repetitions(&self) -> usize {
        let key = |pos: &Chess| Epd::from_position(pos, EnPassantMode::Legal).to_string();
        let current = key(self.position());
        std::iter::once(&self.initial)
            .chain(self.stack.iter().map(|(_, p)| p))
            .filter(|p| key(p) == current)
            .count()
    }
}

impl Default for ShakmatyEngine {
    fn default() -> Self {
        Self::new_game()
    }
}

/// The (from, to) squares a player clicks to make `m`.
///
/// For castling the player moves the king to its destination (g1/g8 or
/// c1/c8) rather than onto the rook.
fn user_squares(m: &Move) -> Option<(Square, Square)> {
    match *m {
        Move::Normal { from, to, .. } => Some((from, to)),
        Move::EnPassant { from, to } => Some((from, to)),
        Move::Castle { king, rook } => {
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            Some((king, king_dest))
        }
        Move::Put { .. } => None,
    }
}

fn fen_of(position: &Chess) -> String {
    Fen::from_position(position, EnPassantMode::Legal).to_string()
}

impl RulesEngine for ShakmatyEngine {
    fn new_game() -> Self {
        Self {
            initial: Chess::default(),
            stack: Vec::new(),
        }
    }

    fn fen(&self) -> String {
        fen_of(self.position())
    }

    fn occupant(&self, square: Square) -> Option<Piece> {
        self.position()
            .board()
            .piece_at(square)
            .map(shakmaty_to_piece)
    }

    fn side_to_move(&self) -> PieceColor {
        self.position().turn().into()
    }

    fn legal_destinations(&self, square: Square) -> BTreeSet<Square> {
        self.position()
            .legal_moves()
            .iter()
            .filter_map(user_squares)
            .filter(|(from, _)| *from == square)
            .map(|(_, to)| to)
            .collect()
    }

    fn apply_move(&mut self, spec: MoveSpec) -> RulesResult<AppliedMove> {
        let m = self.find_move(spec).ok_or(RulesError::IllegalMove(spec))?;
        let position = self.position().clone();

        let mut san = San::from_move(&position, m).to_string();
        let next = position
            .play(m)
            .map_err(|_| RulesError::IllegalMove(spec))?;
        if next.is_checkmate() {
            san.push('#');
        } else if next.is_check() {
            san.push('+');
        }

        let applied = AppliedMove {
            spec: MoveSpec {
                promotion: spec.promotion.filter(|_| m.promotion().is_some()),
                ..spec
            },
            san,
            fen: fen_of(&next),
        };
        self.stack.push((m, next));
        Ok(applied)
    }

    fn undo_last(&mut self) {
        self.stack.pop();
    }

    fn is_check(&self) -> bool {
        self.position().is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position().is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position().is_stalemate()
    }

    fn is_threefold_repetition(&self) -> bool {
        self.repetitions() >= 3
    }

    fn is_insufficient_material(&self) -> bool {
        self.position().is_insufficient_material()
    }

    fn is_draw(&self) -> bool {
        self.position().halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    fn board_grid(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.occupant(to_square(row, col));
            }
        }
        grid
    }
}
