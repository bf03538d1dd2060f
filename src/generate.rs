// SPDX-License-Identifier: PMPL-1.0-or-later

//! Index generators for the facebase and item directories.
//!
//! Each generator is a single pass: check the directory, list its images,
//! write the JSON files. A missing directory is not an error; the step is
//! reported as skipped and nothing on disk changes.

use crate::classify::build_category_index;
use crate::config::IndexConfig;
use crate::scan::list_assets;
use crate::types::{FacebaseIndex, ItemIndex, StepOutcome};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const FACEBASES_FILE: &str = "facebases.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const ITEMS_FILE: &str = "items.json";

/// Build `facebases.json` and `categories.json`.
pub fn generate_facebases(config: &IndexConfig) -> Result<StepOutcome<FacebaseIndex>> {
    let directory = config.facebases_path();
    if !directory.is_dir() {
        return Ok(StepOutcome::Skipped { directory });
    }

    let names = list_assets(&directory, &config.extension)?;
    let categories = build_category_index(&names, config.separator, &config.flags());

    let facebases_path = directory.join(FACEBASES_FILE);
    let categories_path = directory.join(CATEGORIES_FILE);
    if !config.dry_run {
        write_json_file(&facebases_path, &names)?;
        write_json_file(&categories_path, &categories)?;
    }

    Ok(StepOutcome::Indexed(FacebaseIndex {
        directory,
        names,
        categories,
        files: vec![facebases_path, categories_path],
    }))
}

/// Build `items.json`.
pub fn generate_items(config: &IndexConfig) -> Result<StepOutcome<ItemIndex>> {
    let directory = config.items_path();
    if !directory.is_dir() {
        return Ok(StepOutcome::Skipped { directory });
    }

    let names = list_assets(&directory, &config.extension)?;

    let items_path = directory.join(ITEMS_FILE);
    if !config.dry_run {
        write_json_file(&items_path, &names)?;
    }

    Ok(StepOutcome::Indexed(ItemIndex {
        directory,
        names,
        files: vec![items_path],
    }))
}

/// Pretty JSON with two-space indent and no trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize `value` and write it to `path`, replacing any existing file.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = to_json(value).with_context(|| format!("serializing {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
