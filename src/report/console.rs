// SPDX-License-Identifier: PMPL-1.0-or-later

//! Colored status lines for a run

use crate::types::{Classification, FacebaseIndex, ItemIndex, StepOutcome};
use colored::*;
use std::path::Path;

pub struct ConsoleReporter {
    quiet: bool,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool, dry_run: bool) -> Self {
        Self { quiet, dry_run }
    }

    pub fn header(&self, title: &str) {
        if self.quiet {
            return;
        }
        println!("{}", format!("--- {} ---", title).bold().cyan());
    }

    pub fn divider(&self) {
        if !self.quiet {
            println!("{}", "-".repeat(20));
        }
    }

    /// Warnings go to stderr and are never silenced.
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "info:".blue().bold(), message);
        }
    }

    pub fn written(&self, path: &Path) {
        if self.quiet {
            return;
        }
        if self.dry_run {
            println!("{} would write '{}'", "dry-run:".magenta().bold(), path.display());
        } else {
            println!("{} wrote '{}'", "ok:".green().bold(), path.display());
        }
    }

    pub fn skipped(&self, directory: &Path, step: &str) {
        self.warn(&format!(
            "directory '{}' not found, skipping {}",
            directory.display(),
            step
        ));
    }

    pub fn facebases(&self, outcome: &StepOutcome<FacebaseIndex>) {
        match outcome {
            StepOutcome::Skipped { directory } => self.skipped(directory, "facebases"),
            StepOutcome::Indexed(index) => {
                for other in &index.categories.others {
                    self.info(&format!(
                        "'{}' is not a recognised country, treating it as an 'other' category",
                        other.name
                    ));
                }
                for file in &index.files {
                    self.written(file);
                }
                self.info(&format!(
                    "{} facebases, {} countries, {} other categories",
                    index.names.len(),
                    index.categories.countries.len(),
                    index.categories.others.len()
                ));
            }
        }
    }

    pub fn items(&self, outcome: &StepOutcome<ItemIndex>) {
        match outcome {
            StepOutcome::Skipped { directory } => self.skipped(directory, "items"),
            StepOutcome::Indexed(index) => {
                for file in &index.files {
                    self.written(file);
                }
                self.info(&format!("{} items", index.names.len()));
            }
        }
    }

    pub fn classification(&self, classification: &Classification) {
        let (kind, detail) = match classification {
            Classification::Country(entry) => ("country".green(), entry.iso.bold()),
            Classification::Other(entry) => ("other".yellow(), entry.flag.normal()),
        };
        println!("  {:<32} {} {}", classification.name(), kind, detail);
    }
}
