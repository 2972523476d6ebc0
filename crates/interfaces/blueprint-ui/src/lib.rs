mod app;
mod components;
mod picker;
mod screens;
mod theme;
mod utils;

use blueprint_app_core::BlueprintApplication;
use blueprint_config as config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE)
            .with_title(config::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "Blueprint3D",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            tracing::info!("starting Blueprint3D");
            Ok(Box::new(app::BlueprintUiApp::new(BlueprintApplication::new())))
        }),
    )
}
