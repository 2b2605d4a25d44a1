// main.rs - Game of Life desktop client

use std::sync::Arc;

use eframe::egui;
use life_client::{ClientConfig, LifeApp, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ClientConfig::from_env()?;
    info!(
        step_url = %config.step_url,
        grid_size = config.grid_size,
        step_interval_ms = config.step_interval.as_millis(),
        "life-client starting"
    );

    // Step requests run here; the UI thread only exchanges messages with it
    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_size, config.window_size + 40.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc: &eframe::CreationContext<'_>| {
            let ctx = cc.egui_ctx.clone();
            let session = Session::new(
                &config,
                runtime.handle().clone(),
                Arc::new(move || ctx.request_repaint()),
            );
            Box::new(LifeApp::new(session, runtime)) as Box<dyn eframe::App>
        }),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
