// SPDX-License-Identifier: PMPL-1.0-or-later

//! photo-index: regenerate the JSON indexes for facebase and item images
//!
//! Run from the project root with no arguments to rebuild
//! `photos/facebases/{facebases,categories}.json` and `photos/items/items.json`.
//! Problems are printed as warnings; the exit status is always 0.

use anyhow::Result;
use clap::{Parser, Subcommand};
use photo_index::classify::classify;
use photo_index::config::{self, ConfigFile, IndexConfig};
use photo_index::generate::{generate_facebases, generate_items};
use photo_index::report::{self, ConsoleReporter, RunSummary, StepSummary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-index")]
#[command(version)]
#[command(about = "Build JSON indexes for facebase and item images")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root containing the photos/ directory
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Config file (json/yaml); defaults to photo-index.{yaml,yml,json} under the root
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Image file extension
    #[arg(long, global = true)]
    extension: Option<String>,

    /// Character separating a facebase category from the rest of its name
    #[arg(long, global = true)]
    separator: Option<String>,

    /// Base path for the icons of non-country categories
    #[arg(long, global = true)]
    flag_base: Option<String>,

    /// Extension of the icons for non-country categories
    #[arg(long, global = true)]
    flag_extension: Option<String>,

    /// Compute the indexes without writing any file
    #[arg(long, global = true)]
    dry_run: bool,

    /// Write a JSON run summary to this file
    #[arg(long, global = true)]
    summary: Option<PathBuf>,

    /// Only print warnings
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Commands {
    /// Index facebases and items (default)
    All,

    /// Index facebases and their categories only
    Facebases,

    /// Index items only
    Items,

    /// Classify category names against the country table
    Classify {
        /// Category names, e.g. France robot
        #[arg(value_name = "CATEGORY", required = true)]
        categories: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let reporter = ConsoleReporter::new(cli.quiet, cli.dry_run);
    let config = build_config(&cli, &reporter);
    let command = cli.command.clone().unwrap_or(Commands::All);

    if let Commands::Classify { categories } = &command {
        let flags = config.flags();
        for category in categories {
            reporter.classification(&classify(category, &flags));
        }
        return Ok(());
    }

    reporter.header("Generating JSON index files");

    let facebases = if matches!(command, Commands::All | Commands::Facebases) {
        run_facebases(&config, &reporter)
    } else {
        StepSummary::not_run(config.facebases_path())
    };

    if command == Commands::All {
        reporter.divider();
    }

    let items = if matches!(command, Commands::All | Commands::Items) {
        run_items(&config, &reporter)
    } else {
        StepSummary::not_run(config.items_path())
    };

    if let Some(path) = &cli.summary {
        let summary = RunSummary::new(&config, facebases, items);
        match report::write_summary(&summary, path) {
            Ok(()) => reporter.info(&format!("summary saved to: {}", path.display())),
            Err(err) => reporter.warn(&format!(
                "could not write summary {}: {:#}",
                path.display(),
                err
            )),
        }
    }

    Ok(())
}

fn run_facebases(config: &IndexConfig, reporter: &ConsoleReporter) -> StepSummary {
    match generate_facebases(config) {
        Ok(outcome) => {
            reporter.facebases(&outcome);
            StepSummary::from_facebases(&outcome)
        }
        Err(err) => {
            reporter.warn(&format!("facebase generation failed: {:#}", err));
            StepSummary::failed(config.facebases_path(), &err)
        }
    }
}

fn run_items(config: &IndexConfig, reporter: &ConsoleReporter) -> StepSummary {
    match generate_items(config) {
        Ok(outcome) => {
            reporter.items(&outcome);
            StepSummary::from_items(&outcome)
        }
        Err(err) => {
            reporter.warn(&format!("item generation failed: {:#}", err));
            StepSummary::failed(config.items_path(), &err)
        }
    }
}

/// Defaults, then the config file, then flags. Bad values are warned about
/// and the previous layer's value is kept.
fn build_config(cli: &Cli, reporter: &ConsoleReporter) -> IndexConfig {
    let mut config = IndexConfig::new(cli.root.clone());
    config.dry_run = cli.dry_run;

    let config_path = cli
        .config
        .clone()
        .or_else(|| config.discover_config_file());
    if let Some(path) = config_path {
        let loaded = ConfigFile::load(&path).and_then(|file| config.apply_file(file));
        if let Err(err) = loaded {
            reporter.warn(&format!("ignoring config {}: {:#}", path.display(), err));
        }
    }

    if let Some(extension) = &cli.extension {
        match config::normalize_extension(extension) {
            Ok(ext) => config.extension = ext,
            Err(err) => reporter.warn(&format!("{:#}", err)),
        }
    }
    if let Some(separator) = &cli.separator {
        match config::parse_separator(separator) {
            Ok(sep) => config.separator = sep,
            Err(err) => reporter.warn(&format!("{:#}", err)),
        }
    }
    if let Some(flag_base) = &cli.flag_base {
        config.flag_base = flag_base.clone();
    }
    if let Some(flag_extension) = &cli.flag_extension {
        match config::normalize_extension(flag_extension) {
            Ok(ext) => config.flag_extension = ext,
            Err(err) => reporter.warn(&format!("{:#}", err)),
        }
    }

    config
}
