/// CLI argument parsing and headless command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::types::PALETTE_SIZE;
use crate::{color, export, store};

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal-based color palette studio"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a fresh random palette to stdout.
    Generate,
    /// Print the readable foreground color for a hex value.
    Contrast { hex: String },
    /// Inspect or wipe the saved-palette history.
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
    /// Export the most recently saved palette (or a fresh random one).
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    List,
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    Json {
        #[arg(short = 'o', long = "out", default_value = ".")]
        out: PathBuf,
    },
    Png {
        #[arg(short = 'o', long = "out", default_value = ".")]
        out: PathBuf,
    },
}

/// Execute a headless CLI command against the same store the TUI uses.
pub fn run(command: Command, conn: &Connection) -> Result<()> {
    match command {
        Command::Generate => handle_generate(),
        Command::Contrast { hex } => handle_contrast(&hex),
        Command::Saved {
            command: SavedCommand::List,
        } => handle_saved_list(conn),
        Command::Saved {
            command: SavedCommand::Clear,
        } => handle_saved_clear(conn)?,
        Command::Export {
            command: ExportCommand::Json { out },
        } => {
            let path = export::write_json(&export_colors(conn), &out)?;
            println!("Wrote {}", path.display());
        }
        Command::Export {
            command: ExportCommand::Png { out },
        } => {
            let path = export::write_png(&export_colors(conn), &out)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn handle_generate() {
    for _ in 0..PALETTE_SIZE {
        println!("{}", color::random_color());
    }
}

fn handle_contrast(hex: &str) {
    if !color::is_valid_hex(hex) {
        println!("Invalid color format. Please provide a hex code like #rrggbb.");
        return;
    }
    println!("{}", color::contrast_color(hex));
}

fn handle_saved_list(conn: &Connection) {
    let history = store::load_history(conn);
    if history.is_empty() {
        println!("No saved palettes.");
        return;
    }
    for (index, palette) in history.iter().enumerate() {
        println!("{:02}. {}", index + 1, palette.colors.join(" "));
    }
}

fn handle_saved_clear(conn: &Connection) -> Result<()> {
    store::clear_history(conn)?;
    println!("Saved palettes cleared.");
    Ok(())
}

/// The most recently saved palette, or a fresh random one when history is
/// empty.
fn export_colors(conn: &Connection) -> Vec<String> {
    store::load_history(conn)
        .pop()
        .map(|palette| palette.colors)
        .unwrap_or_else(|| (0..PALETTE_SIZE).map(|_| color::random_color()).collect())
}
