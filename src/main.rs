mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::UseCaseContainer;
use domain::repositories::Navigator;
use infrastructure::{ConfigRepository, PageLocation};
use presentation::services::log_capture::init_log_capture;
use presentation::ui::RecipePageApp;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let log_rx = init_log_capture();

    let config = ConfigRepository::new().load_or_default();
    let initial_query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.initial_query.clone());

    let location = Arc::new(PageLocation::new(&initial_query));
    let navigator: Arc<dyn Navigator> = location.clone();
    let use_cases = Arc::new(UseCaseContainer::new(navigator, &config));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Recipes",
        options,
        Box::new(move |cc| {
            presentation::style::configure_style(&cc.egui_ctx, config.theme);
            Ok(Box::new(RecipePageApp::new(use_cases, location, config, log_rx)))
        }),
    )
}
