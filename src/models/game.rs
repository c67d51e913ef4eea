//! Game state model - the interaction layer between board clicks and the
//! rules engine.
//!
//! The model owns the engine instance, the click selection, the cached
//! legal targets, a pending promotion and the move history. It never
//! touches board cells itself: every change to the position goes through
//! [`GameModel::attempt_move`].

use std::collections::BTreeSet;

use shakmaty::Square;
use tracing::{debug, info, warn};

use crate::domain::{
    AppliedMove, MoveHistory, MoveSpec, Piece, PieceColor, PromotionPiece, RulesEngine,
    RulesError, RulesResult, ShakmatyEngine,
};
use crate::models::GameStatus;

/// Where the player is in the select / move / promote cycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    PieceSelected {
        from: Square,
        targets: BTreeSet<Square>,
    },
    /// A pawn move to the last rank is legal but the piece is not chosen yet
    AwaitingPromotion {
        from: Square,
        to: Square,
        targets: BTreeSet<Square>,
    },
}

/// A promotion waiting for the player's piece choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    /// Color of the promoting pawn, for drawing the choices
    pub color: PieceColor,
}

/// What a single event did to the model
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed
    Ignored,
    Selected(Square),
    Deselected,
    PromotionPending { from: Square, to: Square },
    PromotionCancelled,
    Moved(AppliedMove),
    /// The engine refused the move; selection is kept
    Rejected(RulesError),
}

/// The main game model containing all chess game state
pub struct GameModel<E: RulesEngine = ShakmatyEngine> {
    engine: E,
    interaction: Interaction,
    history: MoveHistory,
    /// Message for the last rejected move, cleared by the next accepted event
    last_error: Option<String>,
}

impl<E: RulesEngine> GameModel<E> {
    pub fn new() -> Self {
        Self::with_engine(E::new_game())
    }

    /// Start from an existing engine, e.g. one set up from a FEN
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            interaction: Interaction::Idle,
            history: MoveHistory::new(),
            last_error: None,
        }
    }

    #[allow(dead_code)]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[allow(dead_code)]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Undo is only offered when there is something to undo
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selection(&self) -> Option<Square> {
        match &self.interaction {
            Interaction::Idle => None,
            Interaction::PieceSelected { from, .. } | Interaction::AwaitingPromotion { from, .. } => {
                Some(*from)
            }
        }
    }

    /// Destinations of the selected piece; empty without a selection
    pub fn legal_targets(&self) -> &BTreeSet<Square> {
        static EMPTY: BTreeSet<Square> = BTreeSet::new();
        match &self.interaction {
            Interaction::Idle => &EMPTY,
            Interaction::PieceSelected { targets, .. }
            | Interaction::AwaitingPromotion { targets, .. } => targets,
        }
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        match self.interaction {
            Interaction::AwaitingPromotion { from, to, .. } => Some(PendingPromotion {
                from,
                to,
                color: self.engine.side_to_move(),
            }),
            _ => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.engine)
    }

    #[allow(dead_code)]
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    #[allow(dead_code)]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Current position as FEN
    #[allow(dead_code)]
    pub fn fen(&self) -> String {
        self.engine.fen()
    }

    pub fn board_grid(&self) -> [[Option<Piece>; 8]; 8] {
        self.engine.board_grid()
    }

    /// Handle a click on a board square
    pub fn click(&mut self, square: Square) -> EventOutcome {
        if self.engine.is_game_over() {
            debug!(%square, "click ignored, game is over");
            return EventOutcome::Ignored;
        }

        let (from, targets) = match &self.interaction {
            Interaction::AwaitingPromotion { .. } => {
                debug!(%square, "click ignored while a promotion is pending");
                return EventOutcome::Ignored;
            }
            Interaction::PieceSelected { from, targets } if targets.contains(&square) => {
                (*from, targets.clone())
            }
            _ => return self.select(square),
        };

        let promotes = self
            .engine
            .occupant(from)
            .is_some_and(|p| p.promotes_on(square));
        if promotes {
            debug!(%from, to = %square, "awaiting promotion choice");
            self.interaction = Interaction::AwaitingPromotion {
                from,
                to: square,
                targets,
            };
            EventOutcome::PromotionPending { from, to: square }
        } else {
            self.attempt_move(MoveSpec::new(from, square))
        }
    }

    /// Select `square` if it holds a piece of the side to move, otherwise
    /// drop any selection
    fn select(&mut self, square: Square) -> EventOutcome {
        let side = self.engine.side_to_move();
        match self.engine.occupant(square) {
            Some(piece) if piece.color == side => {
                let targets = self.engine.legal_destinations(square);
                debug!(%square, targets = targets.len(), "selected");
                self.interaction = Interaction::PieceSelected {
                    from: square,
                    targets,
                };
                self.last_error = None;
                EventOutcome::Selected(square)
            }
            _ => {
                let had_selection = self.selection().is_some();
                self.interaction = Interaction::Idle;
                if had_selection {
                    self.last_error = None;
                    EventOutcome::Deselected
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    /// Complete a pending promotion with the chosen piece
    pub fn choose_promotion(&mut self, piece: PromotionPiece) -> EventOutcome {
        match self.interaction {
            Interaction::AwaitingPromotion { from, to, .. } => {
                self.attempt_move(MoveSpec::with_promotion(from, to, piece))
            }
            _ => {
                debug!(%piece, "promotion choice without a pending promotion");
                EventOutcome::Ignored
            }
        }
    }

    /// Complete a pending promotion from its notation letter (`q`, `r`,
    /// `n`, `b`). Any other letter fails before the model is touched.
    #[allow(dead_code)]
    pub fn choose_promotion_char(&mut self, c: char) -> RulesResult<EventOutcome> {
        let piece = PromotionPiece::from_char(c)?;
        Ok(self.choose_promotion(piece))
    }

    /// Back out of the promotion picker. The pawn is deselected and the
    /// interaction starts over from idle.
    pub fn cancel_promotion(&mut self) -> EventOutcome {
        match self.interaction {
            Interaction::AwaitingPromotion { from, to, .. } => {
                debug!(%from, %to, "promotion cancelled");
                self.interaction = Interaction::Idle;
                EventOutcome::PromotionCancelled
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Submit a move to the engine.
    ///
    /// On success the move is recorded and the interaction returns to idle.
    /// On failure nothing changes except the rejection message.
    pub fn attempt_move(&mut self, spec: MoveSpec) -> EventOutcome {
        match self.engine.apply_move(spec) {
            Ok(applied) => {
                info!(mv = %applied.spec, san = %applied.san, fen = %applied.fen, "move played");
                self.history.push(applied.clone());
                self.interaction = Interaction::Idle;
                self.last_error = None;
                EventOutcome::Moved(applied)
            }
            Err(err) => {
                warn!(%err, "move rejected");
                self.last_error = Some(err.to_string());
                EventOutcome::Rejected(err)
            }
        }
    }

    /// Take back the last move. Returns whether a move was undone.
    pub fn undo(&mut self) -> bool {
        let undone = match self.history.pop() {
            Some(entry) => {
                self.engine.undo_last();
                info!(san = %entry.san(), "move undone");
                true
            }
            None => false,
        };
        self.interaction = Interaction::Idle;
        self.last_error = None;
        undone
    }

    /// Throw the game away and start over from the standard position
    pub fn reset(&mut self) {
        self.engine = E::new_game();
        self.interaction = Interaction::Idle;
        self.history = MoveHistory::new();
        self.last_error = None;
        info!("new game");
    }
}

impl<E: RulesEngine> Default for GameModel<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PieceKind;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn from_fen(fen: &str) -> GameModel {
        GameModel::with_engine(ShakmatyEngine::from_fen(fen).unwrap())
    }

    fn click_move(game: &mut GameModel, from: Square, to: Square) -> EventOutcome {
        assert_eq!(game.click(from), EventOutcome::Selected(from));
        game.click(to)
    }

    /// Delegates to the real engine but refuses every move
    struct RefusingEngine(ShakmatyEngine);

    impl RulesEngine for RefusingEngine {
        fn new_game() -> Self {
            Self(ShakmatyEngine::new_game())
        }
        fn fen(&self) -> String {
            self.0.fen()
        }
        fn occupant(&self, square: Square) -> Option<Piece> {
            self.0.occupant(square)
        }
        fn side_to_move(&self) -> PieceColor {
            self.0.side_to_move()
        }
        fn legal_destinations(&self, square: Square) -> BTreeSet<Square> {
            self.0.legal_destinations(square)
        }
        fn apply_move(&mut self, spec: MoveSpec) -> RulesResult<AppliedMove> {
            Err(RulesError::IllegalMove(spec))
        }
        fn undo_last(&mut self) {
            self.0.undo_last()
        }
        fn is_check(&self) -> bool {
            self.0.is_check()
        }
        fn is_checkmate(&self) -> bool {
            self.0.is_checkmate()
        }
        fn is_stalemate(&self) -> bool {
            self.0.is_stalemate()
        }
        fn is_threefold_repetition(&self) -> bool {
            self.0.is_threefold_repetition()
        }
        fn is_insufficient_material(&self) -> bool {
            self.0.is_insufficient_material()
        }
        fn is_draw(&self) -> bool {
            self.0.is_draw()
        }
        fn board_grid(&self) -> [[Option<Piece>; 8]; 8] {
            self.0.board_grid()
        }
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = GameModel::<ShakmatyEngine>::new();
        assert_eq!(game.interaction(), &Interaction::Idle);
        assert_eq!(game.fen(), START_FEN);
        assert_eq!(game.status_text(), "White to move.");
        assert!(!game.can_undo());
        assert!(game.legal_targets().is_empty());
    }

    #[test]
    fn test_opponent_piece_never_selected() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        for square in [Square::E7, Square::G8, Square::D8] {
            assert_eq!(game.click(square), EventOutcome::Ignored);
            assert_eq!(game.selection(), None);
        }

        click_move(&mut game, Square::E2, Square::E4);
        assert_eq!(game.click(Square::E4), EventOutcome::Ignored);
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn test_empty_square_click_is_ignored() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        assert_eq!(game.click(Square::E4), EventOutcome::Ignored);
        assert_eq!(game.interaction(), &Interaction::Idle);
    }

    #[test]
    fn test_selection_computes_targets() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        game.click(Square::G1);
        assert_eq!(game.selection(), Some(Square::G1));
        assert_eq!(
            game.legal_targets(),
            &[Square::F3, Square::H3].into_iter().collect()
        );
    }

    #[test]
    fn test_reselect_replaces_targets() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        game.click(Square::G1);
        assert_eq!(game.click(Square::E2), EventOutcome::Selected(Square::E2));
        assert_eq!(game.selection(), Some(Square::E2));
        assert_eq!(
            game.legal_targets(),
            &game.engine().legal_destinations(Square::E2)
        );
        assert!(!game.legal_targets().contains(&Square::F3));
    }

    #[test]
    fn test_click_off_target_deselects() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        game.click(Square::E2);
        assert_eq!(game.click(Square::E5), EventOutcome::Deselected);
        assert_eq!(game.interaction(), &Interaction::Idle);
        assert!(game.legal_targets().is_empty());

        // enemy piece is not a target either
        game.click(Square::E2);
        assert_eq!(game.click(Square::E7), EventOutcome::Deselected);
    }

    #[test]
    fn test_opening_moves_scenario() {
        let mut game = GameModel::<ShakmatyEngine>::new();

        let outcome = click_move(&mut game, Square::E2, Square::E4);
        assert!(matches!(outcome, EventOutcome::Moved(ref m) if m.san == "e4"));
        assert_eq!(game.status_text(), "Black to move.");
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.selection(), None);

        click_move(&mut game, Square::E7, Square::E5);
        assert_eq!(game.status_text(), "White to move.");
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history().last().map(|e| e.fen().to_string()), Some(game.fen()));
    }

    #[test]
    fn test_undo_restores_previous_position() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        click_move(&mut game, Square::E2, Square::E4);
        let after_first = game.fen();
        click_move(&mut game, Square::E7, Square::E5);

        game.click(Square::G1);
        assert!(game.undo());
        assert_eq!(game.fen(), after_first);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.interaction(), &Interaction::Idle);

        assert!(game.undo());
        assert_eq!(game.fen(), START_FEN);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        game.click(Square::E2);
        assert!(!game.undo());
        assert_eq!(game.fen(), START_FEN);
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn test_reset_from_any_depth() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        click_move(&mut game, Square::E2, Square::E4);
        click_move(&mut game, Square::E7, Square::E5);
        click_move(&mut game, Square::G1, Square::F3);
        game.click(Square::B8);

        game.reset();
        assert_eq!(game.fen(), START_FEN);
        assert!(game.history().is_empty());
        assert_eq!(game.interaction(), &Interaction::Idle);
        assert_eq!(game.status_text(), "White to move.");
    }

    #[test]
    fn test_reset_replaces_custom_start() {
        let mut game = from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1");
        game.reset();
        assert_eq!(game.fen(), START_FEN);
    }

    #[test]
    fn test_pawn_to_last_rank_awaits_promotion() {
        let mut game = from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1");
        let outcome = click_move(&mut game, Square::A7, Square::A8);
        assert_eq!(
            outcome,
            EventOutcome::PromotionPending {
                from: Square::A7,
                to: Square::A8
            }
        );
        assert_eq!(
            game.pending_promotion(),
            Some(PendingPromotion {
                from: Square::A7,
                to: Square::A8,
                color: PieceColor::White
            })
        );
        assert!(game.history().is_empty());

        // board clicks wait for the choice
        assert_eq!(game.click(Square::H1), EventOutcome::Ignored);

        let outcome = game.choose_promotion(PromotionPiece::Rook);
        assert!(matches!(outcome, EventOutcome::Moved(ref m) if m.san == "a8=R+"));
        assert_eq!(
            game.engine().occupant(Square::A8),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.interaction(), &Interaction::Idle);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_black_promotion_and_capture_promotion() {
        let mut game = from_fen("7k/8/8/8/8/8/1p6/R6K b - - 0 1");
        assert!(matches!(
            click_move(&mut game, Square::B2, Square::A1),
            EventOutcome::PromotionPending { .. }
        ));
        assert_eq!(
            game.pending_promotion().map(|p| p.color),
            Some(PieceColor::Black)
        );
        game.cancel_promotion();

        assert!(matches!(
            click_move(&mut game, Square::B2, Square::B1),
            EventOutcome::PromotionPending { .. }
        ));
        assert!(matches!(
            game.choose_promotion(PromotionPiece::Queen),
            EventOutcome::Moved(_)
        ));
    }

    #[test]
    fn test_non_promotion_moves_never_await_choice() {
        // a pawn reaching the sixth rank and a rook reaching the eighth
        let mut game = from_fen("k7/8/8/2P5/8/8/8/1R5K w - - 0 1");
        assert!(matches!(
            click_move(&mut game, Square::C5, Square::C6),
            EventOutcome::Moved(_)
        ));
        assert!(matches!(
            click_move(&mut game, Square::A8, Square::A7),
            EventOutcome::Moved(_)
        ));
        assert!(matches!(
            click_move(&mut game, Square::B1, Square::B8),
            EventOutcome::Moved(_)
        ));
        assert_eq!(game.pending_promotion(), None);
    }

    #[test]
    fn test_cancel_promotion_returns_to_idle() {
        let mut game = from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1");
        let fen = game.fen();
        click_move(&mut game, Square::A7, Square::A8);

        assert_eq!(game.cancel_promotion(), EventOutcome::PromotionCancelled);
        assert_eq!(game.interaction(), &Interaction::Idle);
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.selection(), None);
        assert!(game.legal_targets().is_empty());
        assert!(game.history().is_empty());
        assert_eq!(game.fen(), fen);
        assert_eq!(game.cancel_promotion(), EventOutcome::Ignored);

        // the pawn can be picked up again afterwards
        assert!(matches!(
            click_move(&mut game, Square::A7, Square::A8),
            EventOutcome::PromotionPending { .. }
        ));
    }

    #[test]
    fn test_invalid_promotion_char_leaves_state() {
        let mut game = from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1");
        click_move(&mut game, Square::A7, Square::A8);

        assert_eq!(
            game.choose_promotion_char('k'),
            Err(RulesError::InvalidPromotion('k'))
        );
        assert!(game.pending_promotion().is_some());
        assert!(game.history().is_empty());

        assert!(matches!(
            game.choose_promotion_char('n'),
            Ok(EventOutcome::Moved(_))
        ));
    }

    #[test]
    fn test_promotion_choice_without_pending_is_ignored() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        assert_eq!(
            game.choose_promotion(PromotionPiece::Queen),
            EventOutcome::Ignored
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_rejected_move_keeps_selection() {
        let mut game = GameModel::<RefusingEngine>::new();
        game.click(Square::E2);
        let outcome = game.click(Square::E4);

        assert!(matches!(outcome, EventOutcome::Rejected(RulesError::IllegalMove(_))));
        assert_eq!(game.selection(), Some(Square::E2));
        assert!(game.legal_targets().contains(&Square::E4));
        assert!(game.history().is_empty());
        assert_eq!(game.last_error(), Some("Illegal move: e2e4"));

        game.undo();
        assert_eq!(game.last_error(), None);
    }

    #[test]
    fn test_rejection_message_cleared_by_new_selection() {
        let mut game = GameModel::<RefusingEngine>::new();
        game.click(Square::E2);
        game.click(Square::E4);
        assert!(game.last_error().is_some());

        assert_eq!(game.click(Square::G1), EventOutcome::Selected(Square::G1));
        assert_eq!(game.last_error(), None);

        game.click(Square::G1);
        game.click(Square::F3);
        assert!(game.last_error().is_some());
        assert_eq!(game.click(Square::E5), EventOutcome::Deselected);
        assert_eq!(game.last_error(), None);
    }

    #[test]
    fn test_checkmate_blocks_further_clicks() {
        // white queen and king against a cornered black king
        let mut game = from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1");
        let outcome = click_move(&mut game, Square::F1, Square::F8);
        assert!(matches!(outcome, EventOutcome::Moved(ref m) if m.san == "Qf8#"));
        assert_eq!(game.status_text(), "Checkmate! White wins.");
        assert!(game.is_game_over());

        let fen = game.fen();
        for square in [Square::H8, Square::F8, Square::G6, Square::A1] {
            assert_eq!(game.click(square), EventOutcome::Ignored);
        }
        assert_eq!(game.selection(), None);
        assert_eq!(game.fen(), fen);
        assert_eq!(game.history().len(), 1);

        // undo is still available after the game ends
        assert!(game.undo());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_stalemate_blocks_further_clicks() {
        let mut game = from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1");
        click_move(&mut game, Square::F1, Square::F7);
        assert_eq!(game.status_text(), "Game ended in stalemate.");
        assert!(game.is_game_over());

        let fen = game.fen();
        for square in [Square::H8, Square::F7, Square::G6] {
            assert_eq!(game.click(square), EventOutcome::Ignored);
        }
        assert_eq!(game.selection(), None);
        assert_eq!(game.fen(), fen);

        assert!(game.undo());
        assert!(!game.is_game_over());
        assert_eq!(game.status_text(), "White to move.");
        assert_eq!(game.click(Square::F1), EventOutcome::Selected(Square::F1));
    }

    #[test]
    fn test_threefold_repetition_blocks_further_clicks() {
        let mut game = GameModel::<ShakmatyEngine>::new();
        for _ in 0..2 {
            for (from, to) in [
                (Square::G1, Square::F3),
                (Square::G8, Square::F6),
                (Square::F3, Square::G1),
                (Square::F6, Square::G8),
            ] {
                assert!(matches!(click_move(&mut game, from, to), EventOutcome::Moved(_)));
            }
        }
        assert_eq!(
            game.status_text(),
            "Game ended in draw by threefold repetition."
        );

        let fen = game.fen();
        assert_eq!(game.click(Square::E2), EventOutcome::Ignored);
        assert_eq!(game.click(Square::G1), EventOutcome::Ignored);
        assert_eq!(game.selection(), None);
        assert_eq!(game.fen(), fen);
        assert_eq!(game.history().len(), 8);

        assert!(game.undo());
        assert!(!game.is_game_over());
        assert_eq!(game.status_text(), "Black to move.");
        assert_eq!(game.click(Square::F6), EventOutcome::Selected(Square::F6));
    }

    #[test]
    fn test_castling_by_king_step() {
        let mut game = from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(matches!(
            click_move(&mut game, Square::E1, Square::C1),
            EventOutcome::Moved(ref m) if m.san == "O-O-O"
        ));
        assert_eq!(
            game.engine().occupant(Square::D1),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
    }
}
