mod state;
mod data;
mod processing;
mod ui;
mod render;
mod app;

use app::StatScopeApp;
use eframe::egui;
use eframe::egui_wgpu;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("StatScope")
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([640.0, 420.0]),
        wgpu_options: egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            ..Default::default()
        },
        ..Default::default()
    };

    tracing::info!("Starting StatScope v{}", state::app_state::VERSION);

    eframe::run_native(
        "StatScope",
        options,
        Box::new(|cc| Ok(Box::new(StatScopeApp::new(cc)))),
    )
}
