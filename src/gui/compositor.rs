use super::{to_color32, OverlayIntent, StudioApp};
use crate::overlay::OverlayKind;
use crate::player::VideoSurface;
use crate::stream::StreamStatus;
use eframe::egui::{
    self, pos2, vec2, Align2, Color32, FontId, Rect, Rounding, Sense, Stroke,
};

const SELECTION_STROKE: Color32 = Color32::from_rgb(96, 165, 250);
const STATUS_CONNECTED: Color32 = Color32::from_rgb(74, 222, 128);
const STATUS_OFFLINE: Color32 = Color32::from_rgb(248, 113, 113);
const CONTROLS_HEIGHT: f32 = 36.0;

/// Paint the video pane with its overlays and transport controls.
///
/// Overlays are drawn at their stored container-relative position; presses
/// and moves are translated into controller calls, with the container origin
/// re-read every frame so the math stays correct when the pane moves.
pub(super) fn show(app: &mut StudioApp, ui: &mut egui::Ui) {
    let width = ui.available_width();
    let height = (width * 9.0 / 16.0).min(ui.available_height());
    let (pane, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

    let painter = ui.painter().with_clip_rect(pane);
    painter.rect_filled(pane, Rounding::same(8.0), Color32::BLACK);
    painter.text(
        pane.center(),
        Align2::CENTER_CENTER,
        "RTSP Stream Placeholder",
        FontId::proportional(24.0),
        Color32::from_gray(102),
    );

    let origin = (pane.min.x, pane.min.y);
    let mut intents: Vec<OverlayIntent> = Vec::new();
    let mut selected_rect: Option<Rect> = None;

    if app.settings.overlay_enabled {
        for overlay in app.store.iter() {
            let rect = Rect::from_min_size(
                pos2(pane.min.x + overlay.x, pane.min.y + overlay.y),
                vec2(overlay.width, overlay.height),
            );
            painter.rect_filled(
                rect,
                Rounding::same(overlay.corner_radius),
                to_color32(overlay.background),
            );
            let label = match overlay.kind {
                OverlayKind::Text => overlay.content.as_str(),
                OverlayKind::Logo => "🖼 Logo",
            };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(overlay.font_size),
                to_color32(overlay.color),
            );
            if app.selected == Some(overlay.id) {
                painter.rect_stroke(
                    rect,
                    Rounding::same(overlay.corner_radius),
                    Stroke::new(2.0, SELECTION_STROKE),
                );
                selected_rect = Some(rect);
            }

            let response = ui.interact(rect, ui.id().with(overlay.id), Sense::click_and_drag());
            if response.drag_started() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    intents.push(OverlayIntent::BeginDrag {
                        id: overlay.id,
                        pointer: (pointer.x, pointer.y),
                        origin,
                    });
                }
            } else if response.clicked() {
                intents.push(OverlayIntent::Select(overlay.id));
            }
        }
    }

    // Edit/delete affordances for the selected overlay. Registered after the
    // overlay interactions so their clicks never fall through to selection
    // or drag.
    if let (Some(id), Some(rect)) = (app.selected, selected_rect) {
        let bar_y = (rect.min.y - 26.0).max(pane.min.y + 2.0);
        let edit_rect = Rect::from_min_size(pos2(rect.min.x, bar_y), vec2(26.0, 22.0));
        let delete_rect = Rect::from_min_size(pos2(rect.min.x + 30.0, bar_y), vec2(26.0, 22.0));
        if ui.put(edit_rect, egui::Button::new("✏").small()).clicked() {
            intents.push(OverlayIntent::Edit(id));
        }
        if ui.put(delete_rect, egui::Button::new("🗑").small()).clicked() {
            intents.push(OverlayIntent::Delete(id));
        }
    }

    for intent in intents {
        app.apply_intent(intent);
    }

    // Move/release handling for the active drag session; a no-op while Idle.
    // Pointer state is read globally so the drag survives the pointer
    // leaving the overlay bounds.
    if app.drag.is_dragging() {
        let (pointer, primary_down, released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
            )
        });
        let target_gone = app
            .drag
            .active_overlay()
            .map_or(true, |id| app.store.get(id).is_none());
        if target_gone {
            app.drag.cancel();
        } else if released {
            if let Some(pos) = pointer {
                app.drag.drag_to(&mut app.store, (pos.x, pos.y), origin);
            }
            app.drag.release();
        } else if !primary_down {
            // the release event was lost (focus change, capture loss)
            app.drag.cancel();
        } else if let Some(pos) = pointer {
            app.drag.drag_to(&mut app.store, (pos.x, pos.y), origin);
        }
    }

    controls(app, ui, pane);
}

fn controls(app: &mut StudioApp, ui: &mut egui::Ui, pane: Rect) {
    let bar = Rect::from_min_max(
        pos2(pane.min.x + 8.0, pane.max.y - CONTROLS_HEIGHT),
        pos2(pane.max.x - 8.0, pane.max.y - 4.0),
    );
    ui.allocate_ui_at_rect(bar, |ui| {
        ui.horizontal_centered(|ui| {
            let play_label = if app.player.is_playing() { "⏸" } else { "▶" };
            if ui.button(play_label).clicked() {
                if app.player.is_playing() {
                    app.player.pause();
                } else {
                    app.player.play();
                }
            }

            let mute_label = if app.player.is_muted() { "🔇" } else { "🔊" };
            if ui.button(mute_label).clicked() {
                let muted = app.player.is_muted();
                app.player.set_muted(!muted);
            }

            let mut volume = app.volume;
            if ui
                .add(egui::Slider::new(&mut volume, 0..=100).show_value(false))
                .changed()
            {
                app.set_volume(volume);
            }
            ui.label(format!("{volume}"));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status = StreamStatus::from_url(&app.stream_url);
                if status.is_connected() {
                    ui.colored_label(STATUS_CONNECTED, "● Connected");
                } else {
                    ui.colored_label(STATUS_OFFLINE, "● No Stream");
                }
                ui.label(app.player.timecode());
            });
        });
    });
}
