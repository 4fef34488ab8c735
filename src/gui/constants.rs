//! GUI-specific constants for layout and status colors

pub const APP_TITLE: &str = "Creature Card Creator";

/// Editor window minimums
pub const WINDOW_MIN_WIDTH: f32 = 600.0;
pub const WINDOW_MIN_HEIGHT: f32 = 500.0;

/// JSON preview window
pub const JSON_WINDOW_WIDTH: f32 = 600.0;
pub const JSON_WINDOW_HEIGHT: f32 = 500.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 10.0;
pub const ITEM_SPACING: f32 = 6.0;
pub const FIELD_WIDTH: f32 = 320.0;
pub const NUMBER_FIELD_WIDTH: f32 = 60.0;
pub const ENERGY_FIELD_WIDTH: f32 = 40.0;

/// Status colors
pub const STATUS_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 160, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const STATUS_INFO: egui::Color32 = egui::Color32::from_rgb(200, 200, 0);
