//! Creature card editor
//!
//! Data model, form validation and file handling for creature cards, plus
//! the egui editor window that drives them.

#![forbid(unsafe_code)]

pub mod card;
pub mod config;
pub mod constants;
pub mod form;
pub mod gui;
pub mod storage;
