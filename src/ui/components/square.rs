//! Square rendering component.

use gpui::{Entity, SharedString, div, prelude::*, px};

use crate::models::GameModel;
use crate::ui::BoardLayout;
use crate::ui::components::render_piece;
use crate::ui::theme::BoardTheme;
use crate::ui::view_models::SquareView;

const LABEL_OPACITY: f32 = 0.7;

/// Render a single board square; clicking it forwards to the game model
pub fn render_square(
    view: SquareView,
    theme: &BoardTheme,
    layout: &BoardLayout,
    model: Entity<GameModel>,
) -> impl IntoElement {
    let square = view.square;
    let label_size = layout.label_size();
    let label = |text: char| {
        div()
            .absolute()
            .text_size(px(label_size))
            .font_weight(gpui::FontWeight::BOLD)
            .opacity(LABEL_OPACITY)
            .child(text.to_string())
    };

    div()
        .id(SharedString::from(format!("square-{}", square)))
        .relative()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(layout.square_size()))
        .bg(view.tint.color(theme))
        .flex()
        .items_center()
        .justify_center()
        .cursor_pointer()
        .when_some(view.piece, |el, p| {
            el.child(render_piece(p, layout.piece_size()))
        })
        .when_some(view.rank_label, |el, rank| {
            el.child(label(rank).top_0().left(px(2.0)))
        })
        .when_some(view.file_label, |el, file| {
            el.child(label(file).bottom_0().right(px(2.0)))
        })
        .on_click(move |_ev, _window, cx| {
            model.update(cx, |game, cx| {
                game.click(square);
                cx.notify();
            });
        })
}
