//! Shade CLI
//!
//! Inspect semantic theme tokens and switch the persisted theme and
//! preferred appearance.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shade_theme::{FileStore, ThemeConfig, ThemeProvider, ThemeRegistry, CONFIG_FILE};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Lookup, TokenKindArg};

#[derive(Parser)]
#[command(name = "shade")]
#[command(about = "Resolve semantic theme tokens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Override the storage directory from the config file
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current theme, preferred appearance and system style
    Status,

    /// List registered themes
    Themes,

    /// List token keys
    Tokens {
        /// Only list tokens of this kind
        #[arg(short, long, value_enum)]
        kind: Option<TokenKindArg>,
    },

    /// Resolve a color token
    Color(Lookup),

    /// Resolve a font token
    Font(Lookup),

    /// Resolve an image token
    Image(Lookup),

    /// Resolve a gradient token
    Gradient(Lookup),

    /// Switch the current theme
    SetTheme {
        /// Theme id, e.g. `mainTheme`
        theme: String,
    },

    /// Change the preferred appearance
    SetAppearance {
        /// `system`, `light` or `dark`
        appearance: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ThemeConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(dir) = cli.storage {
        config.storage_dir = dir;
    }
    tracing::debug!("using storage at {}", config.storage_dir.display());

    let mut provider = ThemeProvider::new(
        ThemeRegistry::builtin(),
        FileStore::new(&config.storage_dir),
        config.style_source(),
        config.defaults(),
    )
    .with_context(|| format!("Invalid default theme in {}", cli.config.display()))?;

    let output = match cli.command {
        Commands::Status => commands::status(&provider),
        Commands::Themes => commands::themes(&provider),
        Commands::Tokens { kind } => commands::tokens(kind),
        Commands::Color(lookup) => commands::color(&provider, &lookup)?,
        Commands::Font(lookup) => commands::font(&provider, &lookup)?,
        Commands::Image(lookup) => commands::image(&provider, &lookup)?,
        Commands::Gradient(lookup) => commands::gradient(&provider, &lookup)?,
        Commands::SetTheme { theme } => commands::set_theme(&mut provider, &theme)?,
        Commands::SetAppearance { appearance } => {
            commands::set_appearance(&mut provider, &appearance)?
        }
    };

    println!("{output}");
    Ok(())
}
