//! Attack list with per-attack energy costs

use eframe::egui;

use crate::card::EnergyType;
use crate::form::{AttackForm, CardForm};
use crate::gui::constants::*;

/// Renders the attack list; add/remove are applied to `form` directly
pub fn ui(ui: &mut egui::Ui, form: &mut CardForm) -> bool {
    let mut changed = false;
    let mut remove = None;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Attacks").strong());
        ui.add_space(ITEM_SPACING);

        if ui
            .add_sized([ui.available_width(), 24.0], egui::Button::new("+ Add New Attack"))
            .clicked()
        {
            form.add_attack();
            changed = true;
        }

        ui.add_space(ITEM_SPACING);

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (idx, attack) in form.attacks.iter_mut().enumerate() {
                    ui.push_id(idx, |ui| {
                        let (row_changed, remove_clicked) = attack_row(ui, attack);
                        changed |= row_changed;
                        if remove_clicked {
                            remove = Some(idx);
                        }
                    });
                    ui.add_space(ITEM_SPACING);
                }

                if form.attacks.is_empty() {
                    ui.label(egui::RichText::new("(No attacks)").italics().weak());
                }
            });
    });

    if let Some(idx) = remove {
        form.remove_attack(idx);
        changed = true;
    }

    changed
}

/// Returns (changed, remove clicked)
fn attack_row(ui: &mut egui::Ui, attack: &mut AttackForm) -> (bool, bool) {
    let mut changed = false;
    let mut remove = false;

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label("Name:");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut attack.name).desired_width(FIELD_WIDTH / 2.0))
                .changed();

            ui.label("Damage:");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut attack.damage).desired_width(NUMBER_FIELD_WIDTH))
                .changed();

            if ui.button("Remove").clicked() {
                remove = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label("Description:");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut attack.description).desired_width(ui.available_width()))
                .changed();
        });

        ui.label(egui::RichText::new("Energy Costs").small());
        ui.horizontal(|ui| {
            for energy in EnergyType::ALL {
                ui.label(format!("{energy}:"));
                changed |= ui
                    .add(egui::TextEdit::singleline(attack.energy_mut(energy)).desired_width(ENERGY_FIELD_WIDTH))
                    .changed();
            }
        });
    });

    (changed, remove)
}
