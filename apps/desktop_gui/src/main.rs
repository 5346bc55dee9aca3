mod controller;
mod ui;

use std::time::Duration;

use catalog_core::{BundledCatalog, FeedConfig, MovieFeed};
use eframe::egui;

use crate::ui::app::DesktopApp;
use crate::ui::theme;

/// Keeps the loading footer and poster placeholders observable while paging
/// through the bundled fixture.
const BUNDLED_PAGE_LATENCY: Duration = Duration::from_millis(650);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let catalog = BundledCatalog::load()?.with_latency(BUNDLED_PAGE_LATENCY);
    tracing::info!(titles = catalog.len(), "bundled catalog ready");
    let feed = MovieFeed::launch(Box::new(catalog), FeedConfig::default());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Movies")
            .with_inner_size([820.0, 960.0])
            .with_min_inner_size([520.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Movies",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(DesktopApp::new(feed)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;
    Ok(())
}
