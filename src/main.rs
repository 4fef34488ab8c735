#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use creature_card_editor::config::EditorSettings;
use creature_card_editor::constants::export::CARD_FILE_NAME;
use creature_card_editor::gui;
use creature_card_editor::storage::{self, ExportOutcome, OnExisting};

#[derive(Parser)]
#[command(name = "creature-card-editor", version, about = "Create and export creature cards")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a card file as normalized JSON
    Show {
        file: PathBuf,
    },
    /// Check that a card file loads, printing a summary
    Check {
        file: PathBuf,
    },
    /// Export a card file to a `Creature_<name>` folder with its image
    Export {
        file: PathBuf,
        /// Directory the export folder is created in
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Replace an existing export folder
        #[arg(long)]
        force: bool,
    },
}

fn init_logging() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        None => {
            let settings = EditorSettings::load();
            info!(settings = ?settings, "Starting card editor");
            gui::run_gui(settings)
        }
        Some(Command::Show { file }) => {
            let card = storage::load_card(&file)?;
            println!("{}", card.to_json()?);
            Ok(())
        }
        Some(Command::Check { file }) => {
            let card = storage::load_card(&file)?;
            println!(
                "{}: {} ({} / {}), health {}, {} attack(s){}",
                file.display(),
                card.name,
                card.creature_type,
                card.creature_class,
                card.health,
                card.attacks.len(),
                if card.is_titan { ", titan" } else { "" },
            );
            Ok(())
        }
        Some(Command::Export { file, out, force }) => {
            let card = storage::load_card(&file)?;
            let on_existing = if force { OnExisting::Overwrite } else { OnExisting::Abort };

            match storage::export_to_folder(&card, &out, on_existing)? {
                ExportOutcome::Exported { folder, image } => {
                    println!("Exported to {}", folder.display());
                    match image {
                        Some(image) => println!("Included: {} and {image}", CARD_FILE_NAME),
                        None => println!("Included: {} (no image file found)", CARD_FILE_NAME),
                    }
                    Ok(())
                }
                ExportOutcome::FolderExists(folder) => {
                    bail!("{} already exists (use --force to overwrite)", folder.display())
                }
            }
        }
    }
}
