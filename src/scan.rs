// SPDX-License-Identifier: PMPL-1.0-or-later

//! Directory scanning: list image files by extension.

use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Stems of the regular files directly inside `dir` whose extension is
/// exactly `extension` (case-sensitive, without the dot), sorted.
///
/// Subdirectories are not descended into. Symlinks are followed so a linked
/// image is listed like any other. Files with no stem (`.png`) and names that
/// are not valid UTF-8 are skipped, as are entries that cannot be read.
pub fn list_assets(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        // Broken links below the root are skipped; a root failure is not.
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => continue,
            Err(err) => return Err(err).with_context(|| format!("listing {}", dir.display())),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = asset_name(entry.path(), extension) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

fn asset_name<'a>(path: &'a Path, extension: &str) -> Option<&'a str> {
    let ext = path.extension().and_then(|ext| ext.to_str())?;
    if ext != extension {
        return None;
    }
    path.file_stem().and_then(|stem| stem.to_str())
}
