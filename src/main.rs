use stream_studio::gui::StudioApp;
use stream_studio::logging;
use stream_studio::settings::Settings;

use eframe::egui;

const SETTINGS_FILE: &str = "settings.json";

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    let (width, height) = settings.window_size.unwrap_or((1100, 700));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RTSP Livestream Studio",
        native_options,
        Box::new(move |_cc| Box::new(StudioApp::new(settings, SETTINGS_FILE.into()))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the studio window: {e}"))?;
    Ok(())
}
