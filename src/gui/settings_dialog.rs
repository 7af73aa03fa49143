use super::StudioApp;
use eframe::egui;

#[derive(Default)]
pub struct SettingsDialog {
    pub open: bool,
}

impl SettingsDialog {
    pub fn ui(&mut self, ctx: &egui::Context, app: &mut StudioApp) {
        if !self.open {
            return;
        }
        let mut open = self.open;
        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.checkbox(&mut app.settings.autoplay, "Start playback on launch");
                ui.checkbox(&mut app.settings.overlay_enabled, "Show overlays on the video");
                ui.checkbox(
                    &mut app.settings.debug_logging,
                    "Debug logging (applies on restart)",
                );
                ui.add_space(8.0);
                if ui.button("Save").clicked() {
                    app.save_settings();
                }
            });
        self.open = open;
    }
}
