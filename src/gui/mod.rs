//! Card editor window implemented with egui/eframe

mod components;
mod constants;
mod editor;

pub use editor::run_gui;
