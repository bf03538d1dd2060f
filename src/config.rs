// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration.
//!
//! Values are layered: built-in defaults, then an optional config file
//! (JSON or YAML, picked by extension), then command-line overrides.

use crate::classify::FlagLocation;
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "png";
pub const DEFAULT_SEPARATOR: char = '-';
pub const DEFAULT_FLAG_BASE: &str = "photos/app";
pub const DEFAULT_FLAG_EXTENSION: &str = "png";
pub const DEFAULT_FACEBASES_DIR: &str = "photos/facebases";
pub const DEFAULT_ITEMS_DIR: &str = "photos/items";

/// Config file names probed under the root when `--config` is not given
pub const CONFIG_FILE_NAMES: &[&str] = &["photo-index.yaml", "photo-index.yml", "photo-index.json"];

/// Settings for one indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Project root; the asset directories are resolved against it
    pub root: PathBuf,
    /// Image extension without the dot
    pub extension: String,
    pub separator: char,
    /// Base path written into `flag` for non-country categories
    pub flag_base: String,
    /// Extension of the category icons; independent of `extension`
    pub flag_extension: String,
    /// Facebase directory, relative to `root` unless absolute
    pub facebases_dir: PathBuf,
    /// Item directory, relative to `root` unless absolute
    pub items_dir: PathBuf,
    /// Compute indexes without writing anything
    pub dry_run: bool,
}

impl IndexConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            separator: DEFAULT_SEPARATOR,
            flag_base: DEFAULT_FLAG_BASE.to_string(),
            flag_extension: DEFAULT_FLAG_EXTENSION.to_string(),
            facebases_dir: PathBuf::from(DEFAULT_FACEBASES_DIR),
            items_dir: PathBuf::from(DEFAULT_ITEMS_DIR),
            dry_run: false,
        }
    }

    pub fn facebases_path(&self) -> PathBuf {
        self.root.join(&self.facebases_dir)
    }

    pub fn items_path(&self) -> PathBuf {
        self.root.join(&self.items_dir)
    }

    pub fn flags(&self) -> FlagLocation {
        FlagLocation::new(self.flag_base.clone(), self.flag_extension.clone())
    }

    /// Overlay the values present in a config file. Nothing is applied if
    /// any value is invalid.
    pub fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        let extension = file.extension.as_deref().map(normalize_extension).transpose()?;
        let separator = file.separator.as_deref().map(parse_separator).transpose()?;
        let flag_extension = file
            .flag_extension
            .as_deref()
            .map(normalize_extension)
            .transpose()?;

        if let Some(extension) = extension {
            self.extension = extension;
        }
        if let Some(separator) = separator {
            self.separator = separator;
        }
        if let Some(flag_base) = file.flag_base {
            self.flag_base = flag_base;
        }
        if let Some(flag_extension) = flag_extension {
            self.flag_extension = flag_extension;
        }
        if let Some(dir) = file.facebases_dir {
            self.facebases_dir = dir;
        }
        if let Some(dir) = file.items_dir {
            self.items_dir = dir;
        }
        Ok(())
    }

    /// First of [`CONFIG_FILE_NAMES`] that exists under the root.
    pub fn discover_config_file(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }
}

/// On-disk config file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub extension: Option<String>,
    pub separator: Option<String>,
    pub flag_base: Option<String>,
    pub flag_extension: Option<String>,
    pub facebases_dir: Option<PathBuf>,
    pub items_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "config {} must be json/yaml/yml",
                    path.to_string_lossy()
                ));
            }
        };
        Ok(config)
    }
}

/// Accepts `png` or `.png`; rejects empty and dotted compound extensions.
pub fn normalize_extension(value: &str) -> Result<String> {
    let ext = value.trim().trim_start_matches('.');
    if ext.is_empty() {
        bail!("image extension must not be empty");
    }
    if ext.contains('.') || ext.contains('/') {
        bail!("invalid image extension '{}'", value);
    }
    Ok(ext.to_string())
}

/// Separators are a single character.
pub fn parse_separator(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("separator must be exactly one character, got '{}'", value),
    }
}
