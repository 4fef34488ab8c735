//! Application-wide constants
//!
//! This module contains the fixed vocabularies and file-name conventions
//! shared by the data model, the form and the storage layer.

/// Card vocabulary
pub mod card {
    /// Creature type suggestions offered by the type combo box
    pub const TYPE_SUGGESTIONS: [&str; 5] = ["Power", "Fire", "Toxic", "Shadow", "Water"];

    /// Creature class suggestions offered by the class combo box
    pub const CLASS_SUGGESTIONS: [&str; 4] = ["Land Beast", "Sea Monster", "Air Creature", "Fairy"];

    /// Health buffer value for a fresh form
    pub const DEFAULT_HEALTH: &str = "100";
}

/// Export and save naming
pub mod export {
    /// Prefix of export folder names (followed by the card name)
    pub const FOLDER_PREFIX: &str = "Creature_";

    /// File name of the card JSON inside an export folder
    pub const CARD_FILE_NAME: &str = "creature.json";

    /// Prefix given to a bundled image whose name clashes with `CARD_FILE_NAME`
    pub const IMAGE_CLASH_PREFIX: &str = "image_";

    /// Extension used for saved card files
    pub const JSON_EXTENSION: &str = "json";
}

/// Settings file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "creature-card-editor";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";
}
