// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simcha - event-services catalog tools.
//!
//! This is the binary entry point for the `simcha` command.

mod check;
mod dataset;
mod search;
mod stats;

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use simcha_catalog::{CatalogStore, DemoCatalog, SearchFilters};
use simcha_config::SimchaConfig;
use simcha_core::SimchaError;

/// Simcha - event-services catalog tools.
#[derive(Parser, Debug)]
#[command(name = "simcha", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the standard lookup.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the integrity checker and print the report.
    Check {
        /// JSON dataset to load instead of demo data.
        #[arg(long)]
        data: Option<PathBuf>,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Search services by text, category, concept tags and availability.
    Search {
        /// Free-text query matched against names, descriptions and tags.
        query: Option<String>,
        /// Primary category id.
        #[arg(long)]
        category: Option<String>,
        /// Concept tag; repeat to match any of several.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Event date (YYYY-MM-DD). Requires --time.
        #[arg(long, value_parser = search::parse_date, requires = "time")]
        date: Option<NaiveDate>,
        /// Event time (HH:MM). Requires --date.
        #[arg(long, value_parser = search::parse_time, requires = "date")]
        time: Option<NaiveTime>,
        /// JSON dataset to load instead of demo data.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print one provider and its services as JSON.
    Show {
        /// Provider id.
        id: String,
        /// JSON dataset to load instead of demo data.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the catalog in the legacy JSON format.
    Export {
        /// JSON dataset to load instead of demo data.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print a generated demo dataset as JSON.
    Demo,
    /// Print catalog counts.
    Stats {
        /// JSON dataset to load instead of demo data.
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let Some(command) = cli.command else {
        println!("simcha: use --help for available commands");
        return;
    };

    match run(command, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Load the explicit config file, or the standard lookup when `path` is
/// `None`. Diagnostics are rendered to stderr before the error is returned.
fn load_config(path: Option<&Path>) -> Result<SimchaConfig, SimchaError> {
    let loaded = match path {
        Some(path) => simcha_config::load_and_validate_path(path),
        None => simcha_config::load_and_validate(),
    };
    loaded.map_err(|errors| {
        simcha_config::render_errors(&errors);
        SimchaError::Config(format!("{} problem(s) in configuration", errors.len()))
    })
}

/// Execute `command`. `Ok(false)` means the command ran but found problems.
fn run(command: Commands, config: &SimchaConfig) -> Result<bool, SimchaError> {
    match command {
        Commands::Check { data, plain } => {
            let mut store = open(config, data.as_deref())?;
            Ok(!check::run_check(&mut store, plain))
        }
        Commands::Search {
            query,
            category,
            tags,
            date,
            time,
            data,
        } => {
            let mut store = open(config, data.as_deref())?;
            let filters = SearchFilters {
                concept_tags: tags,
                category_id: category,
                date,
                time,
            };
            search::run_search(&mut store, query.as_deref().unwrap_or_default(), &filters);
            Ok(true)
        }
        Commands::Show { id, data } => {
            let mut store = open(config, data.as_deref())?;
            let provider = store
                .provider(&id)
                .cloned()
                .ok_or_else(|| SimchaError::NotFound {
                    kind: "provider".to_string(),
                    id: id.clone(),
                })?;
            let services = store.provider_services(&id);
            print_json(&serde_json::json!({
                "provider": provider,
                "services": services,
            }))?;
            Ok(true)
        }
        Commands::Export { data } => {
            let mut store = open(config, data.as_deref())?;
            print_json(&store.export_legacy())?;
            Ok(true)
        }
        Commands::Demo => {
            print_json(&DemoCatalog::from_config(&config.demo, chrono::Utc::now()))?;
            Ok(true)
        }
        Commands::Stats { data } => {
            let mut store = open(config, data.as_deref())?;
            for line in stats::render_stats(&store.stats()) {
                println!("{line}");
            }
            Ok(true)
        }
    }
}

fn open(config: &SimchaConfig, data: Option<&Path>) -> Result<CatalogStore, SimchaError> {
    dataset::open_store(config, data)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), SimchaError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize the tracing subscriber on stderr so stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("simcha={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
