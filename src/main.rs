use replay_viewer::gui::ReplayViewerApp;
use replay_viewer::logging;
use replay_viewer::players::PlayerCache;
use replay_viewer::settings::Settings;

use eframe::egui;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "settings.json".to_string());
    let settings = Settings::load(&settings_path)?;
    logging::init(settings.debug_logging, settings.log_file.as_ref().map(PathBuf::from));
    tracing::info!(path = %settings_path, "settings loaded");

    let players = settings.players_file.as_deref().and_then(|path| {
        match PlayerCache::load_json(Path::new(path)) {
            Ok(cache) => Some(cache),
            Err(err) => {
                tracing::error!("failed to load player snapshots: {err:#}");
                None
            }
        }
    });

    let (width, height) = settings.window_size.unwrap_or((1280.0, 720.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Replay Viewer",
        native_options,
        Box::new(move |_cc| Box::new(ReplayViewerApp::new(settings, settings_path, players))),
    )
    .map_err(|err| anyhow::anyhow!("viewer exited with error: {err}"))
}
