//! Promotion picker shown over the board while a pawn waits for its piece.

use gpui::{Entity, SharedString, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::{Piece, PromotionPiece};
use crate::models::{GameModel, PendingPromotion};
use crate::ui::components::render_piece;
use crate::ui::theme::{BORDER_COLOR, MOVE_LIST_BG, TEXT_PRIMARY};

const CHOICE_HOVER_BG: u32 = 0x3a3a3a;

/// Render the four promotion choices plus a cancel button
pub fn render_promotion_picker(
    pending: PendingPromotion,
    piece_size: f32,
    model: Entity<GameModel>,
) -> impl IntoElement {
    let model_cancel = model.clone();

    let choices = PromotionPiece::ALL.into_iter().map(move |choice| {
        let model = model.clone();
        div()
            .id(SharedString::from(format!("promote-{}", choice)))
            .size(px(piece_size * 1.25))
            .rounded(px(4.0))
            .cursor_pointer()
            .hover(|s| s.bg(rgb(CHOICE_HOVER_BG)))
            .on_click(move |_ev, _window, cx| {
                model.update(cx, |game, cx| {
                    game.choose_promotion(choice);
                    cx.notify();
                });
            })
            .child(render_piece(
                Piece::new(choice.kind(), pending.color),
                piece_size,
            ))
    });

    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_2()
                .p_3()
                .bg(rgb(MOVE_LIST_BG))
                .border_1()
                .border_color(rgb(BORDER_COLOR))
                .rounded_md()
                .child(
                    div()
                        .text_color(rgb(TEXT_PRIMARY))
                        .child("Choose promotion piece:"),
                )
                .child(div().flex().gap_1().children(choices))
                .child(
                    Button::new("cancel-promotion")
                        .label("Cancel")
                        .danger()
                        .compact()
                        .on_click(move |_, _, cx| {
                            model_cancel.update(cx, |game, cx| {
                                game.cancel_promotion();
                                cx.notify();
                            });
                        }),
                ),
        )
}
