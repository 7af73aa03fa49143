use super::{OverlayIntent, StudioApp};
use crate::overlay::OverlayKind;
use crate::stream::{StreamStatus, STREAM_BITRATE, STREAM_RESOLUTION};
use eframe::egui::{self, Color32};

const LIST_MAX_HEIGHT: f32 = 384.0;
const STATUS_CONNECTED: Color32 = Color32::from_rgb(74, 222, 128);
const STATUS_OFFLINE: Color32 = Color32::from_rgb(248, 113, 113);

/// Side panel: the overlay list in insertion order plus the stream-info box.
pub(super) fn show(app: &mut StudioApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading("Overlays");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕").on_hover_text("Add overlay").clicked() {
                app.open_create_form();
            }
        });
    });
    ui.separator();

    let mut intents: Vec<OverlayIntent> = Vec::new();
    egui::ScrollArea::vertical()
        .max_height(LIST_MAX_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if app.store.is_empty() {
                ui.weak("No overlays yet");
            }
            for overlay in app.store.iter() {
                let icon = match overlay.kind {
                    OverlayKind::Text => "📝",
                    OverlayKind::Logo => "🖼",
                };
                let title = if overlay.content.is_empty() {
                    "Logo"
                } else {
                    overlay.content.as_str()
                };
                let meta = format!(
                    "{:.0}, {:.0} • {:.0}x{:.0}",
                    overlay.x, overlay.y, overlay.width, overlay.height
                );
                let mut row_intent = None;
                ui.horizontal(|ui| {
                    let selected = app.selected == Some(overlay.id);
                    let label = format!("{icon} {title}\n{meta}");
                    if ui.selectable_label(selected, label).clicked() {
                        row_intent = Some(OverlayIntent::Select(overlay.id));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").clicked() {
                            row_intent = Some(OverlayIntent::Delete(overlay.id));
                        }
                        if ui.small_button("✏").clicked() {
                            row_intent = Some(OverlayIntent::Edit(overlay.id));
                        }
                    });
                });
                if let Some(intent) = row_intent {
                    intents.push(intent);
                }
            }
        });
    for intent in intents {
        app.apply_intent(intent);
    }

    ui.add_space(12.0);
    ui.heading("Stream Info");
    ui.separator();
    let status = StreamStatus::from_url(&app.stream_url);
    egui::Grid::new("stream_info").num_columns(2).show(ui, |ui| {
        ui.label("Status:");
        let color = if status.is_connected() {
            STATUS_CONNECTED
        } else {
            STATUS_OFFLINE
        };
        ui.colored_label(color, status.label());
        ui.end_row();

        ui.label("Overlays:");
        ui.label(app.store.len().to_string());
        ui.end_row();

        ui.label("Resolution:");
        ui.label(STREAM_RESOLUTION);
        ui.end_row();

        ui.label("Bitrate:");
        ui.label(STREAM_BITRATE);
        ui.end_row();
    });
}
