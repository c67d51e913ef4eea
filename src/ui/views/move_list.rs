//! Move list panel - displays the game's move history with undo and
//! new-game controls.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::models::GameModel;
use crate::ui::display::move_rows;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, MOVE_LIST_BG, PANEL_BG, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::view_models::MoveRowDisplay;

const NAV_BUTTON_BG: u32 = 0x3a3a3a;
const NAV_BUTTON_HOVER_BG: u32 = 0x4a4a4a;
const NAV_BUTTON_DISABLED: u32 = 0x555555;

/// Render the move list panel for a given game model.
/// Returns a Div element that can be used as a child.
pub fn render_move_list_panel(model: &Entity<GameModel>, cx: &App) -> Div {
    let game = model.read(cx);
    let rows = move_rows(game);
    let can_undo = game.can_undo();

    let model_undo = model.clone();
    let model_reset = model.clone();

    let moves_content = if rows.is_empty() {
        div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet")
    } else {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(rows.into_iter().map(render_move_row))
    };

    let move_list = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Move History"),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        )
        // Game controls at bottom
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .gap_2()
                .p_3()
                .border_t_1()
                .border_color(rgb(BORDER_COLOR))
                .child(render_nav_button("Undo Move", can_undo, move |cx| {
                    model_undo.update(cx, |game, cx| {
                        game.undo();
                        cx.notify();
                    });
                }))
                .child(
                    Button::new("new-game")
                        .label("New Game")
                        .danger()
                        .compact()
                        .on_click(move |_, _, cx| {
                            model_reset.update(cx, |game, cx| {
                                game.reset();
                                cx.notify();
                            });
                        }),
                ),
        );

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(move_list)
}

/// Render one numbered line: `12.  Nf3  Nc6`
fn render_move_row(row: MoveRowDisplay) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_2()
        .py_1()
        .child(
            div()
                .text_color(rgb(TEXT_SECONDARY))
                .text_sm()
                .w(px(40.0))
                .child(format!("{}.", row.move_num)),
        )
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .text_sm()
                .flex_1()
                .child(row.white),
        )
        .when_some(row.black, |el, bm| {
            el.child(
                div()
                    .text_color(rgb(TEXT_PRIMARY))
                    .text_sm()
                    .flex_1()
                    .child(bm),
            )
        })
}

/// Render a control button that greys out when disabled
fn render_nav_button(
    label: &'static str,
    enabled: bool,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(SharedString::from(format!("nav-{}", label)))
        .px_4()
        .py_2()
        .rounded(px(4.0))
        .text_color(if enabled {
            rgb(TEXT_PRIMARY)
        } else {
            rgb(NAV_BUTTON_DISABLED)
        })
        .font_weight(gpui::FontWeight::BOLD)
        .when(enabled, |el| {
            el.bg(rgb(NAV_BUTTON_BG))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(NAV_BUTTON_HOVER_BG)))
                .on_click(move |_ev, _window, cx| {
                    on_click(cx);
                })
        })
        .when(!enabled, |el| el.bg(rgb(PANEL_BG)))
        .child(label)
}
