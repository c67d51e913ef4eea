pub mod chess;
pub mod history;
pub mod rules;
pub mod shakmaty_engine;

pub use chess::{Piece, PieceColor, PieceKind, PromotionPiece, to_square};
pub use history::MoveHistory;
pub use rules::{AppliedMove, MoveSpec, RulesEngine, RulesError, RulesResult};
pub use shakmaty_engine::ShakmatyEngine;
