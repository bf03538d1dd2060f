// SPDX-License-Identifier: PMPL-1.0-or-later

//! Machine-readable run summary (`--summary`)

use crate::config::IndexConfig;
use crate::types::{FacebaseIndex, ItemIndex, StepOutcome};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Indexed,
    Skipped,
    Failed,
    /// The step was not requested by the chosen command
    NotRun,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSummary {
    pub status: StepStatus,
    pub directory: PathBuf,
    pub names: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others: Option<usize>,
    pub files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepSummary {
    fn empty(status: StepStatus, directory: PathBuf) -> Self {
        Self {
            status,
            directory,
            names: 0,
            countries: None,
            others: None,
            files: Vec::new(),
            error: None,
        }
    }

    pub fn not_run(directory: PathBuf) -> Self {
        Self::empty(StepStatus::NotRun, directory)
    }

    pub fn failed(directory: PathBuf, error: &anyhow::Error) -> Self {
        Self {
            error: Some(format!("{:#}", error)),
            ..Self::empty(StepStatus::Failed, directory)
        }
    }

    pub fn from_facebases(outcome: &StepOutcome<FacebaseIndex>) -> Self {
        match outcome {
            StepOutcome::Skipped { directory } => {
                Self::empty(StepStatus::Skipped, directory.clone())
            }
            StepOutcome::Indexed(index) => Self {
                status: StepStatus::Indexed,
                directory: index.directory.clone(),
                names: index.names.len(),
                countries: Some(index.categories.countries.len()),
                others: Some(index.categories.others.len()),
                files: index.files.clone(),
                error: None,
            },
        }
    }

    pub fn from_items(outcome: &StepOutcome<ItemIndex>) -> Self {
        match outcome {
            StepOutcome::Skipped { directory } => {
                Self::empty(StepStatus::Skipped, directory.clone())
            }
            StepOutcome::Indexed(index) => Self {
                status: StepStatus::Indexed,
                directory: index.directory.clone(),
                names: index.names.len(),
                countries: None,
                others: None,
                files: index.files.clone(),
                error: None,
            },
        }
    }
}

/// Complete summary of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub created_at: String,
    pub root: PathBuf,
    pub dry_run: bool,
    pub facebases: StepSummary,
    pub items: StepSummary,
}

impl RunSummary {
    pub fn new(config: &IndexConfig, facebases: StepSummary, items: StepSummary) -> Self {
        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            root: config.root.clone(),
            dry_run: config.dry_run,
            facebases,
            items,
        }
    }
}

/// Write the summary as JSON, creating parent directories as needed
pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(summary)
        .with_context(|| format!("serializing summary {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("writing summary {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn summary(root: &Path) -> RunSummary {
        let config = IndexConfig::new(root);
        RunSummary::new(
            &config,
            StepSummary::not_run(config.facebases_path()),
            StepSummary::not_run(config.items_path()),
        )
    }

    #[test]
    fn summary_written_under_new_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/run.json");
        write_summary(&summary(dir.path()), &path).unwrap();

        let written: RunSummary =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.facebases.status, StepStatus::NotRun);
        assert_eq!(written.root.as_path(), dir.path());
    }

    #[test]
    fn write_failure_names_the_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let path = blocker.join("run.json");

        let err = write_summary(&summary(dir.path()), &path).unwrap_err();
        assert!(
            format!("{:#}", err).contains(&blocker.display().to_string()),
            "error should name the path: {:#}",
            err
        );
    }
}
