//! Editor panels, one module per form section

pub mod attack_list;
pub mod creature_info;
pub mod json_preview;
