mod app;
mod config;
mod domain;
mod models;
mod ui;

use gpui::{App, Application};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load_or_default();

    Application::new().run(move |cx: &mut App| {
        if let Err(err) = app::run(cx, settings) {
            error!("{err:#}");
            cx.quit();
        }
    });
}
