//! Read-only JSON view of the current card with clipboard copy

use eframe::egui;
use tracing::info;

use crate::gui::constants::*;

pub struct JsonPreview {
    title: String,
    json: String,
    open: bool,
}

impl JsonPreview {
    pub fn new(card_name: &str, json: String) -> Self {
        Self {
            title: format!("{card_name} - JSON Export"),
            json,
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the window; returns true when the JSON was copied
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut copied = false;
        let json = &self.json;

        egui::Window::new(self.title.as_str())
            .open(&mut self.open)
            .default_size([JSON_WINDOW_WIDTH, JSON_WINDOW_HEIGHT])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(JSON_WINDOW_HEIGHT - 60.0)
                    .show(ui, |ui| {
                        let mut text = json.as_str();
                        ui.add(
                            egui::TextEdit::multiline(&mut text)
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                    });

                ui.add_space(ITEM_SPACING);

                if ui.button("Copy to Clipboard").clicked() {
                    ctx.copy_text(json.clone());
                    info!(bytes = json.len(), "Copied card JSON to clipboard");
                    copied = true;
                }
            });

        copied
    }
}
