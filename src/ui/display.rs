//! Display generation for the board and the move list.
//!
//! This module transforms game state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{RulesEngine, to_square};
use crate::models::GameModel;
use crate::ui::theme::SquareTint;
use crate::ui::view_models::{MoveRowDisplay, SquareView};

/// The 64 squares in drawing order: rank 8 to rank 1, file a to file h
pub fn board_squares<E: RulesEngine>(
    game: &GameModel<E>,
    show_coordinates: bool,
) -> Vec<SquareView> {
    let grid = game.board_grid();
    let selection = game.selection();
    let targets = game.legal_targets();

    let mut squares = Vec::with_capacity(64);
    for (row, cells) in grid.iter().enumerate() {
        for (col, piece) in cells.iter().enumerate() {
            let square = to_square(row, col);
            let tint = SquareTint::for_square(
                row,
                col,
                selection == Some(square),
                targets.contains(&square),
            );
            squares.push(SquareView {
                square,
                piece: *piece,
                tint,
                rank_label: (show_coordinates && col == 0).then(|| char::from(b'8' - row as u8)),
                file_label: (show_coordinates && row == 7).then(|| char::from(b'a' + col as u8)),
            });
        }
    }
    squares
}

/// Move history as numbered white/black pairs
pub fn move_rows<E: RulesEngine>(game: &GameModel<E>) -> Vec<MoveRowDisplay> {
    game.history()
        .move_pairs()
        .into_iter()
        .map(|(move_num, white, black)| MoveRowDisplay {
            move_num,
            white,
            black,
        })
        .collect()
}
