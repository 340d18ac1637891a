/* src/cli/core/src/main.rs */

mod check;
mod config;
mod digest;
mod render;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{FolioConfig, find_folio_config, load_folio_config};

#[derive(Parser)]
#[command(name = "folio", about = "Bilingual portfolio renderer")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Render the site template for each locale
  Render {
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Render only this locale and remember it as the chosen language
    #[arg(short, long)]
    lang: Option<String>,
    /// Output directory (overrides site.out_dir)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Fetch every content document for both locales and report status
  Check {
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the content digest of a JSON file
  Digest {
    /// JSON file to hash
    file: PathBuf,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, FolioConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_folio_config(&cwd)?
    }
  };
  let config = load_folio_config(&path)?;
  Ok((path, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let cli = Cli::parse();

  match cli.command {
    Command::Render { config, lang, out } => {
      let (path, config) = resolve_config(config)?;
      render::run(&path, &config, lang.as_deref(), out).await?;
    }
    Command::Check { config } => {
      let (path, config) = resolve_config(config)?;
      check::run(&path, &config).await?;
    }
    Command::Digest { file } => {
      digest::run(&file)?;
    }
  }

  Ok(())
}
