//! Creature information panel

use eframe::egui;

use crate::constants::card::{CLASS_SUGGESTIONS, TYPE_SUGGESTIONS};
use crate::form::CardForm;
use crate::gui::constants::*;

/// Renders the creature fields and returns true if any changed
pub fn ui(ui: &mut egui::Ui, form: &mut CardForm) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Creature Information").strong());
        ui.add_space(ITEM_SPACING);

        egui::Grid::new("creature_info_grid")
            .num_columns(2)
            .spacing([ITEM_SPACING * 2.0, ITEM_SPACING])
            .show(ui, |ui| {
                ui.label("Name:");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut form.name).desired_width(FIELD_WIDTH))
                    .changed();
                ui.end_row();

                ui.label("Description:");
                changed |= ui
                    .add(
                        egui::TextEdit::multiline(&mut form.description)
                            .desired_rows(4)
                            .desired_width(FIELD_WIDTH),
                    )
                    .changed();
                ui.end_row();

                ui.label("Health:");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut form.health).desired_width(NUMBER_FIELD_WIDTH))
                    .changed();
                ui.end_row();

                ui.label("Type:");
                changed |= suggestion_field(ui, "type_suggestions", &mut form.creature_type, &TYPE_SUGGESTIONS);
                ui.end_row();

                ui.label("Class:");
                changed |= suggestion_field(ui, "class_suggestions", &mut form.creature_class, &CLASS_SUGGESTIONS);
                ui.end_row();

                ui.label("Titan:");
                changed |= ui.checkbox(&mut form.is_titan, "").changed();
                ui.end_row();

                ui.label("Art:");
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut form.image_path)
                            .desired_width(FIELD_WIDTH)
                            .hint_text("path to image file"),
                    )
                    .changed();
                ui.end_row();
            });
    });

    changed
}

/// Free-text field with a dropdown of suggested values
fn suggestion_field(ui: &mut egui::Ui, id: &str, value: &mut String, suggestions: &[&str]) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        changed |= ui
            .add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH - 40.0))
            .changed();

        egui::ComboBox::from_id_salt(id)
            .selected_text("")
            .width(24.0)
            .show_ui(ui, |ui| {
                for suggestion in suggestions {
                    if ui
                        .selectable_value(value, (*suggestion).to_string(), *suggestion)
                        .clicked()
                    {
                        changed = true;
                    }
                }
            });
    });

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame_reports_no_change() {
        let ctx = egui::Context::default();
        let mut form = CardForm::new();
        form.name = "Drakon".to_string();
        let before = form.clone();

        let mut changed = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = super::ui(ui, &mut form);
            });
        });

        assert!(!changed);
        assert_eq!(form, before);
    }
}
