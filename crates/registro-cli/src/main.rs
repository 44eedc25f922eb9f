//! Registro CLI
//!
//! Command-line interface for Registro - a registry of classified documents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use registro_core::{Category, CategoryHierarchy, Config, DocumentStore};

mod commands;
mod editor;
mod logging;
mod output;

use commands::document::{DocumentFields, ListOptions};
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "registro")]
#[command(about = "Registro - register and classify documents")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage documents
    #[command(alias = "document")]
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
    /// List categories and their subcategories
    Categories {
        /// Only show the subcategories of this category
        category: Option<Category>,
    },
    /// Show storage location and document counts
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum DocCommands {
    /// Register a new document
    #[command(alias = "add")]
    Create {
        #[command(flatten)]
        fields: DocumentFields,
    },
    /// List documents, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        options: ListOptions,
    },
    /// Show document details
    Show {
        /// Document ID (full UUID or prefix)
        id: String,
    },
    /// Edit a document
    Edit {
        /// Document ID (full UUID or prefix)
        id: String,
        #[command(flatten)]
        fields: DocumentFields,
        /// Edit the description in $EDITOR
        #[arg(long)]
        editor: bool,
    },
    /// Delete a document
    #[command(alias = "rm")]
    Delete {
        /// Document ID (full UUID or prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Print all documents as JSON
    Export,
    /// Register every document in a JSON file
    Import {
        /// File holding a JSON array of documents
        path: PathBuf,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, storage, page_size, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    match cli.command {
        Commands::Config { command } => handle_config_command(command, config_path, &output),
        Commands::Categories { category } => {
            commands::category::list(&CategoryHierarchy::standard(), category, &output)
        }
        Commands::Doc { command } => {
            let (config, mut store) = open_store(config_path)?;
            handle_doc_command(command, &mut store, &config, &output)
        }
        Commands::Status => {
            let (config, store) = open_store(config_path)?;
            commands::status::show(&store, &config, &output)
        }
    }
}

/// Load configuration, start logging and open the document store
fn open_store(config_path: Option<&PathBuf>) -> Result<(Config, DocumentStore)> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;
    logging::init(&config);

    let store = DocumentStore::open_with_config(&config)?;
    debug!(backend = %store.backend(), documents = store.len(), "Store opened");

    Ok((config, store))
}

fn handle_doc_command(
    command: DocCommands,
    store: &mut DocumentStore,
    config: &Config,
    output: &Output,
) -> Result<()> {
    match command {
        DocCommands::Create { fields } => commands::document::create(store, fields, output),
        DocCommands::List { options } => {
            commands::document::list(store, options, config.page_size, output)
        }
        DocCommands::Show { id } => commands::document::show(store, id, output),
        DocCommands::Edit { id, fields, editor } => {
            commands::document::edit(store, id, fields, editor, output)
        }
        DocCommands::Delete { id, yes } => commands::document::delete(store, id, yes, output),
        DocCommands::Export => commands::document::export(store),
        DocCommands::Import { path } => commands::document::import(store, &path, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
