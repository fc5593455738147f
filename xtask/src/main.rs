// Tooling binary: unwrap/expect/panic acceptable here.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod dump;
mod list;
mod render;
mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gallery::prelude::Theme;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Widget catalogue development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds regions.
#[derive(Args, Clone)]
pub struct Layout {
    /// Theme overrides as a JSON file
    #[arg(long)]
    theme: Option<PathBuf>,
    /// Region width in pixels
    #[arg(long, default_value_t = 350)]
    width: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every catalogue category in display order
    List,
    /// Print the finalized layout of one category as JSON
    Dump {
        /// Category key, e.g. `text-field`
        key: String,
        /// Wrap the region in its scrolling detail page
        #[arg(long)]
        page: bool,
        #[command(flatten)]
        layout: Layout,
    },
    /// Render one category to a PNG
    Render {
        /// Category key, e.g. `slider`
        key: String,
        /// Output file
        #[arg(long, default_value = "region.png")]
        out: PathBuf,
        #[command(flatten)]
        layout: Layout,
    },
    /// Finalize every category and report failures
    Verify {
        #[command(flatten)]
        layout: Layout,
    },
}

impl Layout {
    fn load_theme(&self) -> Result<Theme> {
        match &self.theme {
            Some(path) => read_theme(path),
            None => Ok(Theme::default()),
        }
    }
}

fn read_theme(path: &Path) -> Result<Theme> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme {}", path.display()))?;
    Theme::from_json(&json).with_context(|| format!("Invalid theme {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => list::run(),
        Commands::Dump { key, page, layout } => dump::run(&key, page, &layout),
        Commands::Render { key, out, layout } => render::run(&key, &out, &layout),
        Commands::Verify { layout } => verify::run(&layout),
    }
}
