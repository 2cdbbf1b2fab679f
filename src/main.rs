use anyhow::{Context, Result};
use apidoc_nav::{Config, DocIndex, KeyEvent, SearchController, patch_page};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{self, EnvFilter};

/// Search/filter tool for the navigation of a generated API
/// documentation page.
#[derive(Parser)]
#[command(name = "apidoc-nav", version)]
struct Cli {
    /// JSON configuration file; flags override its fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON search index emitted by the documentation generator
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    /// Id of the navigation container element in the host page
    #[arg(long, global = true)]
    container_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter the index and print the rendered navigation fragment
    Search {
        /// Query, matched case-insensitively against group and method
        /// descriptions
        query: String,

        /// Print the filtered groups as JSON instead of markup
        #[arg(long)]
        json: bool,
    },
    /// Print the full collapsed navigation (empty-query view)
    Render,
    /// Render and splice the navigation into the host page's container
    Patch {
        /// Generated HTML page to patch; defaults to page_path from
        /// the configuration file
        #[arg(long)]
        page: Option<PathBuf>,

        /// Optional query; without it the full collapsed view is used
        #[arg(long)]
        query: Option<String>,

        /// Write here instead of patching the page in place
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Load the index and report invariant violations
    Validate,
    /// Read queries line by line from stdin; each line is an Enter
    /// press and prints the rendered fragment
    Interactive,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(index) = cli.index {
        config.index_path = index;
    }
    if let Some(id) = cli.container_id {
        config.container_id = id;
    }

    match cli.command {
        Command::Search { query, json } => {
            let controller = load_controller(&config)?;
            let view = controller.on_enter(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&view.groups)?);
            } else {
                println!("{}", view.html);
            }
        }
        Command::Render => {
            let controller = load_controller(&config)?;
            println!("{}", controller.on_enter("").html);
        }
        Command::Patch {
            page,
            query,
            output,
        } => {
            let page = page
                .or_else(|| config.page_path.clone())
                .context("No page to patch: pass --page or set page_path in the config file")?;
            let controller = load_controller(&config)?;
            let view = controller.on_enter(query.as_deref().unwrap_or(""));
            let html = fs::read_to_string(&page)
                .with_context(|| format!("Failed to read page {}", page.display()))?;
            let patched = patch_page(&html, &config.container_id, &view.html)
                .with_context(|| format!("Failed to patch page {}", page.display()))?;
            let target = output.unwrap_or(page);
            fs::write(&target, patched)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            tracing::info!(
                "Patched #{} of {} ({} groups)",
                config.container_id,
                target.display(),
                view.groups.len()
            );
        }
        Command::Validate => {
            let index = DocIndex::load(&config.index_path).with_context(|| {
                format!("Index {} failed validation", config.index_path.display())
            })?;
            println!(
                "{}: {} groups, {} methods, all invariants hold",
                config.index_path.display(),
                index.groups().len(),
                index.method_count()
            );
        }
        Command::Interactive => {
            let controller = load_controller(&config)?;
            run_interactive(&controller)?;
        }
    }

    Ok(())
}

fn load_controller(config: &Config) -> Result<SearchController> {
    let index = DocIndex::load(&config.index_path)
        .with_context(|| format!("Failed to load index {}", config.index_path.display()))?;
    Ok(SearchController::new(index))
}

/// Line-oriented stand-in for the page's search box: every line read is
/// the Enter press for that query. EOF drops the session and detaches.
fn run_interactive(controller: &SearchController) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = controller.attach(stdout.lock());

    for line in stdin.lock().lines() {
        let query = line.context("Failed to read query from stdin")?;
        session.key(KeyEvent::Enter, &query)?;
    }
    session.into_sink().flush()?;
    Ok(())
}
