//! Potluck CLI - Command-line interface for the shared sign-up sheet

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use potluck::config::{self, PotluckConfig};
use potluck::menu::Menu;
use potluck::server::routes::contributor_name;
use potluck::ui;
use potluck::{Entry, Registry, SqliteStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "potluck")]
#[command(version = "0.1.0")]
#[command(about = "Shared sign-up sheet with duplicate-checked dish entries")]
#[command(long_about = r#"
Potluck keeps a shared dish list in a single table, rejecting duplicate
dish names no matter how they're capitalized or padded.

Example usage:
  potluck serve --port 8000
  potluck add --name Alex --category mains --dish "Grandma's Lasagna"
  potluck list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sign-up sheet HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Path to the database file
        #[arg(short, long, default_value = "potluck.db")]
        database: PathBuf,

        /// Read freshness window in seconds
        #[arg(long, default_value = "5")]
        ttl: u64,

        /// Event title shown by the menu endpoint
        #[arg(long, default_value = "Potluck Party")]
        title: String,
    },

    /// Print the menu board
    List {
        /// Path to the database file
        #[arg(short, long, default_value = "potluck.db")]
        database: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Add a dish to the sheet
    Add {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Partner's name (optional)
        #[arg(long)]
        partner: Option<String>,

        /// Category (mains, sides & apps, dessert, drinks, appetizers)
        #[arg(short, long)]
        category: String,

        /// Dish name
        #[arg(long)]
        dish: String,

        /// Dietary note (optional)
        #[arg(long, default_value = "")]
        note: String,

        /// Path to the database file
        #[arg(short, long, default_value = "potluck.db")]
        database: PathBuf,
    },

    /// Show entry counts per category
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "potluck.db")]
        database: PathBuf,
    },

    /// Write a starter config file
    Init {
        /// Where to write the config
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, database, ttl, title } => {
            config::ensure_db_dir(&database)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(potluck::server::start_server(
                port,
                &database,
                Duration::from_secs(ttl),
                title,
            ))?;
        }

        Commands::List { database, format } => {
            let store = SqliteStore::open(&database)?;
            let mut registry = Registry::new(store);
            let snapshot = registry.fetch_snapshot();

            if format == "json" {
                let menu = Menu::from_snapshot(&snapshot);
                println!("{}", serde_json::to_string_pretty(&menu)?);
                return Ok(());
            }

            if let Some(reason) = snapshot.degraded_reason() {
                ui::warn(&format!("Could not load the sheet: {}", reason));
            }

            ui::header("The MENU (so far...)");
            if snapshot.is_empty() {
                println!("{}", ui::muted("The list is empty! Be the first to add a dish."));
            } else {
                let menu = Menu::from_snapshot(&snapshot);
                println!("{}", ui::menu_table(&menu));
            }
        }

        Commands::Add { name, partner, category, dish, note, database } => {
            let store = SqliteStore::open(&database)?;
            let mut registry = Registry::new(store);

            let entry = Entry {
                name: contributor_name(&name, partner.as_deref().unwrap_or("")),
                category,
                dish,
                note,
            };

            match registry.submit(entry) {
                Ok(()) => ui::success("Dish added successfully!"),
                Err(e) if e.is_user_error() => {
                    ui::error(&e.to_string());
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Stats { database } => {
            let store = SqliteStore::open(&database)?;
            let mut registry = Registry::new(store);
            let snapshot = registry.fetch_snapshot();

            ui::section("Sign-up sheet");
            for (category, count) in snapshot.category_counts() {
                ui::info(category.as_str(), &count.to_string());
            }
            ui::info("Total", &snapshot.len().to_string());
        }

        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            let starter = PotluckConfig {
                database: Some("potluck.db".to_string()),
                port: Some(8000),
                ttl_seconds: Some(5),
                event_title: Some("Potluck Party".to_string()),
            };
            config::write_config(&path, &starter, force)?;
            ui::success(&format!("Wrote config to {}", path.display()));
        }
    }

    Ok(())
}
