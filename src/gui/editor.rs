//! Editor window: form panels, action bar and dialogs

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info, warn};

use super::components::{attack_list, creature_info, json_preview::JsonPreview};
use super::constants::*;
use crate::card::CreatureCard;
use crate::config::EditorSettings;
use crate::form::CardForm;
use crate::storage::{self, ExportOutcome, OnExisting};

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

/// Export waiting on the overwrite confirmation, pinned to the folder the
/// prompt names
struct PendingExport {
    card: CreatureCard,
    root: PathBuf,
    folder: PathBuf,
}

impl PendingExport {
    fn confirm(&self) -> Result<ExportOutcome> {
        storage::export_to_folder(&self.card, &self.root, OnExisting::Overwrite)
    }
}

/// Where Save writes to
///
/// While the path bar is empty or still holds the last generated default,
/// the default follows the current card name. A path the user typed or
/// loaded from is kept.
fn resolve_save_path(current: &str, last_default: Option<&Path>, default: PathBuf) -> PathBuf {
    let current = current.trim();
    let follows_default =
        current.is_empty() || last_default.is_some_and(|last| Path::new(current) == last);

    if follows_default {
        default
    } else {
        PathBuf::from(current)
    }
}

struct EditorApp {
    form: CardForm,
    settings: EditorSettings,
    /// Path bar used by Save and Load
    card_path: String,
    /// Name-derived path last put in the path bar
    default_card_path: Option<PathBuf>,
    /// Directory export folders are created in
    export_root: String,
    status_message: Option<StatusMessage>,
    json_preview: Option<JsonPreview>,
    pending_overwrite: Option<PendingExport>,
    /// Form edited since the last save, load or reset
    unsaved: bool,
    window_size: egui::Vec2,
}

impl EditorApp {
    fn new(_cc: &CreationContext<'_>, settings: EditorSettings) -> Self {
        info!("Initializing card editor");

        Self {
            form: CardForm::new(),
            card_path: String::new(),
            default_card_path: None,
            export_root: settings.export_root.display().to_string(),
            window_size: egui::vec2(settings.window_width, settings.window_height),
            settings,
            status_message: None,
            json_preview: None,
            pending_overwrite: None,
            unsaved: false,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, color: egui::Color32) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            color,
        });
    }

    /// Build a card from the form, reporting validation failures
    fn read_form(&mut self) -> Option<CreatureCard> {
        match self.form.to_card() {
            Ok(card) => Some(card),
            Err(err) => {
                warn!(error = %err, "Form validation failed");
                self.set_status(format!("Validation Error: {err}"), STATUS_ERROR);
                None
            }
        }
    }

    fn save_to_file(&mut self) {
        let Some(card) = self.read_form() else {
            return;
        };

        let default = self.settings.card_dir.join(storage::default_file_name(&card));
        let path = resolve_save_path(&self.card_path, self.default_card_path.as_deref(), default.clone());
        if path == default {
            self.default_card_path = Some(default);
        }
        self.card_path = path.display().to_string();

        match storage::save_card(&path, &card) {
            Ok(()) => {
                self.unsaved = false;
                self.set_status(format!("Card saved to {}", path.display()), STATUS_SUCCESS);
                self.settings.remember_card_path(&path);
                self.persist_settings();
            }
            Err(err) => {
                error!(error = ?err, "Failed to save card");
                self.set_status(format!("Failed to save: {err:#}"), STATUS_ERROR);
            }
        }
    }

    fn load_from_file(&mut self) {
        let path = PathBuf::from(self.card_path.trim());
        if path.as_os_str().is_empty() {
            self.set_status("Enter the path of a card file to load", STATUS_INFO);
            return;
        }

        match storage::load_card(&path) {
            Ok(card) => {
                self.form = CardForm::from_card(&card);
                self.unsaved = false;
                let default = self.settings.card_dir.join(storage::default_file_name(&card));
                self.default_card_path = (path == default).then_some(default);
                self.set_status(format!("Card loaded from {}", path.display()), STATUS_SUCCESS);
                self.settings.remember_card_path(&path);
                self.persist_settings();
            }
            Err(err) => {
                error!(error = ?err, "Failed to load card");
                self.set_status(format!("Failed to load: {err:#}"), STATUS_ERROR);
            }
        }
    }

    fn export_json(&mut self) {
        let Some(card) = self.read_form() else {
            return;
        };

        match card.to_json() {
            Ok(json) => self.json_preview = Some(JsonPreview::new(&card.name, json)),
            Err(err) => {
                error!(error = ?err, "Failed to render card JSON");
                self.set_status(format!("Failed to render JSON: {err}"), STATUS_ERROR);
            }
        }
    }

    fn export_to_folder(&mut self) {
        if let Some(card) = self.read_form() {
            let root = PathBuf::from(self.export_root.trim());
            match storage::export_to_folder(&card, &root, OnExisting::Abort) {
                Ok(ExportOutcome::FolderExists(folder)) => {
                    self.pending_overwrite = Some(PendingExport { card, root, folder });
                }
                result => self.report_export(result, root),
            }
        }
    }

    fn report_export(&mut self, result: Result<ExportOutcome>, root: PathBuf) {
        match result {
            Ok(ExportOutcome::Exported { folder, image }) => {
                let included = match image {
                    Some(image) => format!("Included: creature.json and {image}"),
                    None => "Included: creature.json (no image file found)".to_string(),
                };
                self.set_status(
                    format!("Creature exported to '{}'. {included}", folder.display()),
                    STATUS_SUCCESS,
                );
                self.settings.export_root = root;
                self.persist_settings();
            }
            Ok(ExportOutcome::FolderExists(folder)) => {
                self.set_status(format!("Folder '{}' already exists", folder.display()), STATUS_ERROR);
            }
            Err(err) => {
                error!(error = ?err, "Failed to export card");
                self.set_status(format!("Failed to export: {err:#}"), STATUS_ERROR);
            }
        }
    }

    fn new_card(&mut self) {
        info!("Clearing form for a new card");
        self.form.reset();
        self.card_path.clear();
        self.default_card_path = None;
        self.unsaved = false;
        self.status_message = None;
    }

    fn persist_settings(&mut self) {
        if let Err(err) = self.settings.save() {
            warn!(error = ?err, "Failed to save editor settings");
        }
    }

    fn overwrite_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending_overwrite else {
            return;
        };
        let folder = pending.folder.display().to_string();

        let mut overwrite = false;
        let mut cancel = false;

        egui::Window::new("Folder Exists")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Folder '{folder}' already exists. Overwrite?"));
                ui.colored_label(STATUS_ERROR, "The existing folder will be deleted!");

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    overwrite = ui.button("Overwrite").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });

        if overwrite {
            if let Some(pending) = self.pending_overwrite.take() {
                let result = pending.confirm();
                self.report_export(result, pending.root);
            }
        } else if cancel {
            info!(folder = %folder, "Export cancelled");
            self.pending_overwrite = None;
            self.set_status("Export cancelled", STATUS_INFO);
        }
    }

    fn action_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("File:");
            ui.add(
                egui::TextEdit::singleline(&mut self.card_path)
                    .desired_width(FIELD_WIDTH)
                    .hint_text("path to card .json"),
            );
            ui.label("Export to:");
            ui.add(egui::TextEdit::singleline(&mut self.export_root).desired_width(FIELD_WIDTH / 2.0));
        });

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            if ui.button("Save to File").clicked() {
                self.save_to_file();
            }
            if ui.button("Load from File").clicked() {
                self.load_from_file();
            }
            if ui.button("Export JSON").clicked() {
                self.export_json();
            }
            if ui.button("Export to Folder").clicked() {
                self.export_to_folder();
            }
            if ui.button("New Card").clicked() {
                self.new_card();
            }
            if self.unsaved {
                ui.weak("Unsaved changes");
            }
        });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.window_size = rect.size();
        }

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            self.action_bar(ui);
            if let Some(message) = &self.status_message {
                ui.add_space(ITEM_SPACING);
                ui.colored_label(message.color, &message.text);
            }
            ui.add_space(ITEM_SPACING);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.unsaved |= creature_info::ui(ui, &mut self.form);
            ui.add_space(SECTION_SPACING);
            self.unsaved |= attack_list::ui(ui, &mut self.form);
        });

        if let Some(preview) = self.json_preview.as_mut() {
            if preview.show(ctx) {
                self.set_status("JSON copied to clipboard", STATUS_SUCCESS);
            }
        }
        if self.json_preview.as_ref().is_some_and(|p| !p.is_open()) {
            self.json_preview = None;
        }

        self.overwrite_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.window_width = self.window_size.x;
        self.settings.window_height = self.window_size.y;
        self.persist_settings();
        info!("Editor exiting");
    }
}

pub fn run_gui(settings: EditorSettings) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow!("Failed to launch card editor: {err}"))
}
