//! Chess board view - the board with click-to-move, status line and
//! promotion picker.

use gpui::{
    Context, Entity, Pixels, SharedString, Subscription, Window, canvas, div, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::config::Settings;
use crate::models::GameModel;
use crate::ui::BoardLayout;
use crate::ui::components::{render_promotion_picker, render_square};
use crate::ui::display::board_squares;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG, TEXT_ERROR,
    TEXT_GAME_OVER, TEXT_PRIMARY, TEXT_SECONDARY, THEMES, ThemeId,
};
use crate::ui::views::render_move_list_panel;

const SWATCH_SIZE: f32 = 18.0;

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    layout: BoardLayout,
    theme: ThemeId,
    show_coordinates: bool,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, settings: &Settings, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            layout: BoardLayout::default(),
            theme: settings.theme,
            show_coordinates: settings.show_coordinates,
            _subscription,
        }
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity();
        let view_measure = view.clone();
        let model = self.model.clone();

        let layout = self.layout;
        let theme = self.theme.theme();

        let game = self.model.read(cx);
        let squares = board_squares(game, self.show_coordinates);
        let status = game.status();
        let game_over = status.is_over();
        let last_error = game.last_error().map(str::to_string);
        let pending = game.pending_promotion();

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board_total_size = layout.board_total_size();
        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children(squares.chunks(8).map(|rank| {
                div().flex().flex_shrink_0().children(
                    rank.iter()
                        .map(|sq| render_square(*sq, theme, &layout, model.clone())),
                )
            }));

        let board_with_overlay = div()
            .relative()
            .flex_shrink_0()
            .child(board)
            .when_some(pending, |el, p| {
                el.child(render_promotion_picker(p, layout.piece_size(), model.clone()))
            });

        // Theme picker: one swatch per theme, current one outlined
        let current_theme = self.theme;
        let theme_picker = div().flex().items_center().gap_2().children(THEMES.iter().map(|t| {
            let view = view.clone();
            let id = t.id;
            div()
                .id(SharedString::from(format!("theme-{:?}", id)))
                .flex()
                .size(px(SWATCH_SIZE))
                .rounded(px(3.0))
                .overflow_hidden()
                .cursor_pointer()
                .border_2()
                .border_color(if id == current_theme {
                    rgb(TEXT_PRIMARY)
                } else {
                    rgb(BORDER_COLOR)
                })
                .child(div().flex_1().bg(rgb(t.light)))
                .child(div().flex_1().bg(rgb(t.dark)))
                .on_click(move |_ev, _window, cx| {
                    view.update(cx, |view, cx| {
                        view.theme = id;
                        cx.notify();
                    });
                })
        }));

        let board_panel_content = div()
            .id("board-panel")
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_lg()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(if game_over {
                        rgb(TEXT_GAME_OVER)
                    } else {
                        rgb(TEXT_PRIMARY)
                    })
                    .child(status.to_string()),
            )
            .child(board_with_overlay)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_sm()
                    .text_color(rgb(TEXT_SECONDARY))
                    .child(theme.name)
                    .child(theme_picker),
            )
            .when_some(last_error, |el, msg| {
                el.child(div().text_sm().text_color(rgb(TEXT_ERROR)).child(msg))
            });

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                view_measure.update(cx, |view, cx| {
                    if view.layout.panel_size != bounds.size {
                        view.layout.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        // Move list panel
        let move_list_panel_content = render_move_list_panel(&self.model, cx);

        // Main resizable layout
        div().size_full().child(
            h_resizable("chess-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_LEFT_PANEL))
                        .size_range(px(320.)..px(1200.))
                        .child(board_panel_with_measure),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_RIGHT_PANEL))
                        .size_range(px(150.)..Pixels::MAX)
                        .child(move_list_panel_content),
                ),
        )
    }
}
