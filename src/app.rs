//! Application setup and window creation.

use anyhow::{Context as _, Result};
use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::warn;

use crate::config::Settings;
use crate::models::GameModel;
use crate::ui::views::ChessBoardView;

/// Initialize and run the chess application
pub fn run(cx: &mut App, settings: Settings) -> Result<()> {
    gpui_component::init(cx);

    // A bad start position is not worth refusing to start over
    let engine = settings.initial_engine().unwrap_or_else(|err| {
        warn!("{err:#}; starting from the standard position");
        Default::default()
    });
    let model = cx.new(|_| GameModel::with_engine(engine));

    let bounds = Bounds::centered(None, size(px(900.0), px(680.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, &settings, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .context("failed to open the board window")?;
    Ok(())
}
