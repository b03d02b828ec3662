// devtools-cli - headless command menu and content search

mod config;
mod host;
mod manifest;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use devtools_command_menu::{
    CommandMenu, CommandMenuDelegate, ListDelegate, filter_items, select_best,
};
use devtools_content_provider::{ContentProvider, bytes_as_data_url, content_as_data_url};

use crate::config::Config;
use crate::host::{ConsoleHost, FileContentProvider};
use crate::manifest::Manifest;

#[derive(Parser)]
#[command(name = "devtools-cli")]
#[command(about = "Developer tools command menu and content search, without the UI")]
#[command(version)]
struct Cli {
    /// Extension manifest (overrides the configured one)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available commands, ranked against an optional query
    Commands {
        /// Fuzzy query
        query: Option<String>,
    },

    /// Execute the best matching command
    Run {
        /// Fuzzy query
        query: String,
    },

    /// Search a file line by line
    Search {
        file: PathBuf,
        query: String,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Treat the query as a regular expression
        #[arg(long)]
        regex: bool,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a file as a data: URL
    DataUrl {
        file: PathBuf,

        /// MIME type of the content (guessed from the file extension if omitted)
        #[arg(long)]
        mime: Option<String>,

        /// Charset parameter for text content
        #[arg(long)]
        charset: Option<String>,

        /// Base64 encode the raw file bytes
        #[arg(long)]
        base64: bool,
    },
}

fn init_logger() {
    // Warnings only unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Commands { query } => {
            let (_host, delegate) = open_menu(&config, cli.manifest.as_deref())?;
            list_commands(&delegate, query.as_deref().unwrap_or(""), config.max_results);
        }
        Commands::Run { query } => {
            let (host, delegate) = open_menu(&config, cli.manifest.as_deref())?;
            let Some(index) = select_best(&delegate, &query) else {
                bail!("No command matches '{}'", query);
            };
            if let Some(command) = delegate.command_at(index) {
                println!("[{}] {}", command.category(), command.title());
            }
            for event in host.events() {
                println!("  {}", event);
            }
        }
        Commands::Search {
            file,
            query,
            case_sensitive,
            regex,
            json,
        } => {
            let provider = FileContentProvider::new(file);
            provider.ensure_searchable()?;
            let matches = provider
                .search_in_content(&query, case_sensitive || config.case_sensitive, regex)
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for m in &matches {
                    println!("{}:{}: {}", provider.path().display(), m.line_number + 1, m.line_content);
                }
            }
        }
        Commands::DataUrl {
            file,
            mime,
            charset,
            base64,
        } => {
            let mime = mime
                .unwrap_or_else(|| FileContentProvider::new(&file).default_mime_type().to_string());

            let url = if base64 {
                let bytes = tokio::fs::read(&file)
                    .await
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                bytes_as_data_url(&bytes, &mime, charset.as_deref())
            } else {
                let content = tokio::fs::read_to_string(&file)
                    .await
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                content_as_data_url(Some(&content), &mime, false, charset.as_deref())
            };

            match url {
                Some(url) => println!("{}", url),
                None => bail!("{} is too large for a data URL", file.display()),
            }
        }
    }

    Ok(())
}

fn manifest_path(config: &Config, override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.manifest))
}

/// Build the registry and snapshot it the way opening the menu does
fn open_menu(
    config: &Config,
    manifest_override: Option<&Path>,
) -> Result<(Arc<ConsoleHost>, CommandMenuDelegate)> {
    let path = manifest_path(config, manifest_override);
    let manifest = Manifest::load(&path)
        .with_context(|| format!("Failed to build command menu from {}", path.display()))?;

    let host = Arc::new(ConsoleHost::new(
        manifest.actions,
        manifest.shortcuts,
        config.settings.clone(),
    ));

    let menu = CommandMenu::from_extensions(&manifest.extensions, host.clone(), host.clone());
    let delegate = CommandMenuDelegate::new(&menu, host.clone());
    Ok((host, delegate))
}

fn list_commands(delegate: &CommandMenuDelegate, query: &str, max_results: usize) {
    let results = filter_items(delegate, query);
    if results.is_empty() {
        println!("No commands match '{}'", query);
        return;
    }

    for (index, score) in results.into_iter().take(max_results) {
        let Some(item) = delegate.render_item(index, query) else {
            continue;
        };
        println!(
            "{:>4}  {} [{}] {}  {}",
            score, item.tag_color, item.tag, item.title, item.subtitle
        );
    }

    log::debug!("{} commands in menu", delegate.item_count());
}
