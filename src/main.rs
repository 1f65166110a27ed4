use away_prompt::config::{self, Config};
use away_prompt::editor::EditorApp;
use away_prompt::presenter::PresenterApp;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    away_prompt::logging::init();

    let fullscreen = std::env::args().skip(1).any(|arg| arg == "--fullscreen");
    let config_dir = config::config_dir();
    let config_path = config::config_path();
    let config = Config::load(&config_path);

    if fullscreen {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_fullscreen(true)
                .with_decorations(false)
                .with_always_on_top(),
            ..Default::default()
        };
        eframe::run_native(
            "Away Prompt",
            native_options,
            Box::new(move |_cc| Box::new(PresenterApp::new(config, config_dir))),
        )
        .map_err(|e| anyhow::anyhow!("fullscreen window failed: {e}"))?;
    } else {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([540.0, 580.0])
                .with_min_inner_size([480.0, 520.0]),
            ..Default::default()
        };
        eframe::run_native(
            "Away Prompt Settings",
            native_options,
            Box::new(move |_cc| Box::new(EditorApp::new(&config, config_path))),
        )
        .map_err(|e| anyhow::anyhow!("settings window failed: {e}"))?;
    }

    Ok(())
}
