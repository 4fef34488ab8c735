//! Card files on disk: save, load and export folders

use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

use crate::card::CreatureCard;
use crate::constants::export::{CARD_FILE_NAME, FOLDER_PREFIX, IMAGE_CLASH_PREFIX, JSON_EXTENSION};

/// What to do when the export folder already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnExisting {
    /// Leave the existing folder alone and report it
    Abort,
    /// Recursively delete the existing folder first
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported {
        folder: PathBuf,
        /// File name of the copied image, if one was bundled
        image: Option<String>,
    },
    /// Folder already present and `OnExisting::Abort` was requested
    FolderExists(PathBuf),
}

/// `<name_with_underscores>.json`
pub fn default_file_name(card: &CreatureCard) -> String {
    format!("{}.{}", card.file_stem(), JSON_EXTENSION)
}

/// `Creature_<name_with_underscores>`
pub fn export_folder_name(card: &CreatureCard) -> String {
    format!("{}{}", FOLDER_PREFIX, card.file_stem())
}

pub fn save_card(path: &Path, card: &CreatureCard) -> Result<()> {
    let json = card.to_json().context("Failed to serialize card to JSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write card to {:?}", path))?;
    info!(path = %path.display(), card = %card.name, "Saved card");
    Ok(())
}

pub fn load_card(path: &Path) -> Result<CreatureCard> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read card from {:?}", path))?;
    let card = CreatureCard::from_json(&contents)
        .with_context(|| format!("Failed to parse card from {:?}", path))?;
    info!(path = %path.display(), card = %card.name, attacks = card.attacks.len(), "Loaded card");
    Ok(card)
}

/// Write `creature.json` and a copy of the card image into a fresh folder
/// under `root`
pub fn export_to_folder(
    card: &CreatureCard,
    root: &Path,
    on_existing: OnExisting,
) -> Result<ExportOutcome> {
    let folder = export_folder(card, root)?;

    if folder.exists() {
        match on_existing {
            OnExisting::Abort => {
                info!(folder = %folder.display(), "Export folder exists, not overwriting");
                return Ok(ExportOutcome::FolderExists(folder));
            }
            OnExisting::Overwrite => {
                warn!(folder = %folder.display(), "Removing existing export folder");
                fs::remove_dir_all(&folder)
                    .with_context(|| format!("Failed to remove existing folder {:?}", folder))?;
            }
        }
    }

    fs::create_dir_all(&folder)
        .with_context(|| format!("Failed to create export folder {:?}", folder))?;

    save_card(&folder.join(CARD_FILE_NAME), card)?;

    let image = copy_image(card, &folder)?;

    info!(folder = %folder.display(), image = ?image, "Exported card");
    Ok(ExportOutcome::Exported { folder, image })
}

/// Export folder path, refusing anything that is not a direct child of `root`
fn export_folder(card: &CreatureCard, root: &Path) -> Result<PathBuf> {
    let name = export_folder_name(card);
    let folder = root.join(&name);

    let single_component = matches!(
        Path::new(&name).components().collect::<Vec<_>>().as_slice(),
        [Component::Normal(_)]
    );
    if !single_component || folder.parent() != Some(root) {
        bail!(
            "Card name {:?} does not give an export folder inside {:?}",
            card.name,
            root
        );
    }

    Ok(folder)
}

fn copy_image(card: &CreatureCard, folder: &Path) -> Result<Option<String>> {
    if card.image_path.is_empty() {
        return Ok(None);
    }

    let source = Path::new(&card.image_path);
    if !source.is_file() {
        warn!(image = %source.display(), "Card image not found, exporting without it");
        return Ok(None);
    }

    let Some(file_name) = source.file_name() else {
        return Ok(None);
    };

    // Never let the image replace the card file written next to it
    let target = if file_name.to_string_lossy().eq_ignore_ascii_case(CARD_FILE_NAME) {
        let mut renamed = OsString::from(IMAGE_CLASH_PREFIX);
        renamed.push(file_name);
        warn!(image = %source.display(), renamed = ?renamed, "Image name clashes with card file");
        renamed
    } else {
        file_name.to_os_string()
    };

    fs::copy(source, folder.join(&target))
        .with_context(|| format!("Failed to copy image {:?} into {:?}", source, folder))?;

    Ok(Some(target.to_string_lossy().into_owned()))
}
