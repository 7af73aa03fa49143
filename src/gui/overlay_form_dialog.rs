use super::{from_color32, to_color32, StudioApp};
use crate::overlay::{NumericField, OverlayDraft, OverlayKind};
use eframe::egui::{self, Align2};

/// Add/edit window for a single overlay draft.
///
/// The draft only ever holds validated values; the raw text of the numeric
/// inputs lives here so rejected input stays visible in the field without
/// reaching the draft.
#[derive(Default)]
pub struct OverlayFormDialog {
    width: String,
    height: String,
    font_size: String,
}

impl OverlayFormDialog {
    pub fn sync_buffers(&mut self, draft: &OverlayDraft) {
        self.width = format!("{}", draft.width);
        self.height = format!("{}", draft.height);
        self.font_size = format!("{}", draft.font_size);
    }

    pub fn ui(&mut self, ctx: &egui::Context, app: &mut StudioApp) {
        if !app.form.open {
            return;
        }
        let editing = app.form.is_edit();
        let title = if editing { "Edit Overlay" } else { "Add New Overlay" };
        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let mut kind = app.form.draft().kind;
                egui::ComboBox::from_label("Type")
                    .selected_text(kind.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut kind, OverlayKind::Text, "Text");
                        ui.selectable_value(&mut kind, OverlayKind::Logo, "Logo");
                    });
                if kind != app.form.draft().kind {
                    app.form.set_kind(kind);
                }

                let hint = match kind {
                    OverlayKind::Text => "Enter text...",
                    OverlayKind::Logo => "Logo URL...",
                };
                let mut content = app.form.draft().content.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut content).hint_text(hint))
                    .changed()
                {
                    app.form.set_content(&content);
                }

                ui.horizontal(|ui| {
                    ui.label("Width");
                    if ui
                        .add(egui::TextEdit::singleline(&mut self.width).desired_width(60.0))
                        .changed()
                    {
                        app.form.set_numeric(NumericField::Width, &self.width);
                    }
                    ui.label("Height");
                    if ui
                        .add(egui::TextEdit::singleline(&mut self.height).desired_width(60.0))
                        .changed()
                    {
                        app.form.set_numeric(NumericField::Height, &self.height);
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("Font size");
                    if ui
                        .add(egui::TextEdit::singleline(&mut self.font_size).desired_width(60.0))
                        .changed()
                    {
                        app.form.set_numeric(NumericField::FontSize, &self.font_size);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Text color");
                    let mut color = to_color32(app.form.draft().color);
                    if ui.color_edit_button_srgba(&mut color).changed() {
                        app.form.set_color(from_color32(color));
                    }
                    ui.label("Background");
                    let mut background = to_color32(app.form.draft().background);
                    if ui.color_edit_button_srgba(&mut background).changed() {
                        app.form.set_background(from_color32(background));
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                    let commit = if editing { "Update Overlay" } else { "Add Overlay" };
                    if ui.button(commit).clicked() {
                        submitted = true;
                    }
                });
            });

        if submitted {
            app.submit_form();
        } else if cancelled || !open {
            app.form.cancel();
        }
    }
}
