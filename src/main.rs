//! gita - read the Bhagavad Gita from the terminal

use anyhow::{bail, Context, Result};
use app_ui::navigation::Route;
use app_ui::{DocumentRoot, SystemAppearance, ThemeStore};
use clap::{Parser, Subcommand};
use gita_client::ApiClient;
use gita_reader::credentials::{KeyringKeySource, KeySource};
use gita_reader::{resolve_api_key, App, Config, LoggingConfig, OutputFormat};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use storage::{DeviceStore, MemoryPreferences, PreferenceStore};

#[derive(Parser)]
#[command(name = "gita")]
#[command(about = "Bhagavad Gita chapter and verse reader", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config_dir>/gita-reader/config.toml)
    #[arg(long, global = true, env = "GITA_CONFIG")]
    config: Option<PathBuf>,

    /// Write pages as a standalone HTML document
    #[arg(long, global = true)]
    html: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate to a path and print the page (e.g. /, /chapters, /verse/2/47)
    Show {
        /// Application path
        #[arg(default_value = "/")]
        path: String,
    },

    /// Show or toggle the color theme
    Theme {
        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,
    },

    /// List the paths the reader understands
    Routes,

    /// Manage the API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Read the key from stdin and store it in the OS keyring
    Set,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    LoggingConfig::resolve(&config.logging, cli.verbose).init();

    let format = if cli.html { OutputFormat::Html } else { OutputFormat::Text };

    match cli.command {
        Commands::Show { path } => show(&config, &path, format).await,
        Commands::Theme { toggle } => theme(&config, toggle),
        Commands::Routes => {
            for pattern in Route::patterns() {
                println!("{}", pattern);
            }
            Ok(())
        }
        Commands::Key { action: KeyAction::Set } => set_key(),
    }
}

/// Theme store over the device preferences; an unusable store degrades to
/// an in-memory one so the page still renders
fn open_theme(config: &Config) -> Result<Arc<ThemeStore>> {
    let path = config.storage_path()?;

    let preferences: Arc<dyn PreferenceStore> = match DeviceStore::open(&path) {
        Ok(store) => Arc::new(store),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "could not open preferences, theme will not persist");
            Arc::new(MemoryPreferences::new())
        }
    };

    Ok(Arc::new(ThemeStore::initialize(preferences, &SystemAppearance, DocumentRoot::new())))
}

async fn show(config: &Config, path: &str, format: OutputFormat) -> Result<()> {
    let theme = open_theme(config)?;

    let key = resolve_api_key()?;
    let client = ApiClient::new(config.api_config(key)).context("Failed to build API client")?;

    let app = App::new(Arc::new(client), theme).with_language(config.display.language.as_str());
    let page = app.show(path).await;

    println!("{}", app.render(&page, format));
    Ok(())
}

fn theme(config: &Config, toggle: bool) -> Result<()> {
    let store = open_theme(config)?;

    if toggle {
        let next = store.toggle();
        println!("Theme: {}", next);
    } else {
        println!("Theme: {}", store.current());
    }
    Ok(())
}

fn set_key() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read API key from stdin")?;

    let key = input.trim();
    if key.is_empty() {
        bail!("No API key given on stdin");
    }

    let source = KeyringKeySource::default();
    source.store(key)?;
    println!("Stored API key in {}", source.name());
    Ok(())
}
