mod compositor;
mod overlay_form_dialog;
mod overlay_panel;
mod settings_dialog;

pub use overlay_form_dialog::OverlayFormDialog;
pub use settings_dialog::SettingsDialog;

use crate::overlay::{Color, DragController, OverlayForm, OverlayStore};
use crate::player::{SimulatedPlayer, VideoSurface};
use crate::settings::Settings;
use crate::stream::DEMO_STREAMS;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

const TOAST_DURATION_SECS: f64 = 2.5;

pub(crate) fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub(crate) fn from_color32(color: egui::Color32) -> Color {
    Color::rgba(color.r(), color.g(), color.b(), color.a())
}

/// A user intent raised while the widgets are drawn. The presentational
/// layer never mutates the store directly; it collects intents and the app
/// applies them once the frame's borrows are released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayIntent {
    Select(u64),
    Edit(u64),
    Delete(u64),
    BeginDrag {
        id: u64,
        pointer: (f32, f32),
        origin: (f32, f32),
    },
}

pub struct StudioApp {
    pub settings: Settings,
    pub settings_path: String,
    pub store: OverlayStore,
    /// Transient selection, zero or one overlay id. Owned here, not by the
    /// store.
    pub selected: Option<u64>,
    pub form: OverlayForm,
    pub drag: DragController,
    pub player: SimulatedPlayer,
    pub stream_url: String,
    /// Volume in percent as shown on the slider. The player holds the
    /// fraction.
    pub volume: u8,
    pub error: Option<String>,
    form_dialog: OverlayFormDialog,
    settings_dialog: SettingsDialog,
    toasts: Toasts,
}

impl StudioApp {
    pub fn new(settings: Settings, settings_path: String) -> Self {
        let mut player = SimulatedPlayer::default();
        player.set_volume(settings.volume_fraction());
        player.set_muted(settings.muted);
        if settings.autoplay {
            player.play();
        }
        Self {
            stream_url: settings.stream_url.clone(),
            volume: settings.volume.min(100),
            settings,
            settings_path,
            store: OverlayStore::default(),
            selected: None,
            form: OverlayForm::default(),
            drag: DragController::default(),
            player,
            error: None,
            form_dialog: OverlayFormDialog::default(),
            settings_dialog: SettingsDialog::default(),
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
        }
    }

    fn push_toast(&mut self, kind: ToastKind, text: &str) {
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(TOAST_DURATION_SECS),
        });
    }

    pub fn apply_intent(&mut self, intent: OverlayIntent) {
        match intent {
            OverlayIntent::Select(id) => self.selected = Some(id),
            OverlayIntent::Edit(id) => self.open_edit_form(id),
            OverlayIntent::Delete(id) => self.delete_overlay(id),
            OverlayIntent::BeginDrag {
                id,
                pointer,
                origin,
            } => {
                self.selected = Some(id);
                self.drag.press(&self.store, id, pointer, origin);
            }
        }
    }

    pub fn open_create_form(&mut self) {
        self.form.open_for_create();
        self.form_dialog.sync_buffers(self.form.draft());
    }

    /// Load an existing overlay into the edit form. Unknown ids are ignored.
    pub fn open_edit_form(&mut self, id: u64) {
        if let Some(overlay) = self.store.get(id) {
            self.form.open_for_edit(overlay);
            self.form_dialog.sync_buffers(self.form.draft());
        }
    }

    pub fn submit_form(&mut self) {
        let editing = self.form.is_edit();
        if self
            .form
            .submit(&mut self.store, &mut rand::thread_rng())
            .is_some()
        {
            let text = if editing {
                "Overlay updated"
            } else {
                "Overlay added"
            };
            self.push_toast(ToastKind::Success, text);
        }
    }

    /// Remove an overlay, clearing the selection and cancelling any drag
    /// session that targeted it. Unknown ids are ignored.
    pub fn delete_overlay(&mut self, id: u64) {
        if self.store.get(id).is_none() {
            return;
        }
        if self.drag.active_overlay() == Some(id) {
            self.drag.cancel();
        }
        self.store.remove(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.push_toast(ToastKind::Info, "Overlay deleted");
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.player.set_volume(f32::from(self.volume) / 100.0);
    }

    fn sync_settings(&mut self) {
        self.settings.stream_url = self.stream_url.clone();
        self.settings.volume = self.volume;
        self.settings.muted = self.player.is_muted();
    }

    pub fn save_settings(&mut self) {
        self.sync_settings();
        match self.settings.save(&self.settings_path) {
            Ok(()) => {
                self.error = None;
                self.push_toast(ToastKind::Success, "Settings saved");
            }
            Err(e) => {
                self.error = Some(format!("Failed to save settings: {e}"));
            }
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("RTSP Livestream Studio");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙").on_hover_text("Settings").clicked() {
                    self.settings_dialog.open = !self.settings_dialog.open;
                }
            });
        });
    }

    fn url_row(&mut self, ui: &mut egui::Ui) {
        ui.label("RTSP Stream URL");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.stream_url)
                    .hint_text("rtsp://your-stream-url")
                    .desired_width(ui.available_width() - 140.0),
            );
            egui::ComboBox::from_id_source("demo_urls")
                .selected_text("Quick Select")
                .show_ui(ui, |ui| {
                    for (index, url) in DEMO_STREAMS.iter().enumerate() {
                        let label = format!("Demo Stream {}", index + 1);
                        if ui.selectable_label(self.stream_url == *url, label).clicked() {
                            self.stream_url = (*url).to_string();
                        }
                    }
                });
        });
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        self.player.tick(dt);
        if self.player.is_playing() {
            // keep the playback clock moving
            ctx.request_repaint();
        }
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_size = Some((rect.width() as i32, rect.height() as i32));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| self.header(ui));

        egui::SidePanel::right("overlay_panel")
            .default_width(280.0)
            .show(ctx, |ui| overlay_panel::show(self, ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err.as_str());
            }
            self.url_row(ui);
            ui.add_space(8.0);
            compositor::show(self, ui);
        });

        let mut form_dialog = std::mem::take(&mut self.form_dialog);
        form_dialog.ui(ctx, self);
        self.form_dialog = form_dialog;

        let mut settings_dialog = std::mem::take(&mut self.settings_dialog);
        settings_dialog.ui(ctx, self);
        self.settings_dialog = settings_dialog;

        self.toasts.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.sync_settings();
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::warn!("failed to save settings on exit: {e}");
        }
    }
}
