// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for photo-index

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A facebase category that matched the country table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    pub iso: String,
}

/// A facebase category with no country match; `flag` points at its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherEntry {
    pub name: String,
    pub flag: String,
}

/// Result of classifying a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Classification {
    Country(CountryEntry),
    Other(OtherEntry),
}

impl Classification {
    pub fn name(&self) -> &str {
        match self {
            Classification::Country(entry) => &entry.name,
            Classification::Other(entry) => &entry.name,
        }
    }

    pub fn is_country(&self) -> bool {
        matches!(self, Classification::Country(_))
    }
}

/// Contents of `categories.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryIndex {
    pub countries: Vec<CountryEntry>,
    pub others: Vec<OtherEntry>,
}

impl CategoryIndex {
    pub fn push(&mut self, classification: Classification) {
        match classification {
            Classification::Country(entry) => self.countries.push(entry),
            Classification::Other(entry) => self.others.push(entry),
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.others.is_empty()
    }
}

/// Facebase step result: names, their categories, and the files produced
#[derive(Debug, Clone)]
pub struct FacebaseIndex {
    pub directory: PathBuf,
    pub names: Vec<String>,
    pub categories: CategoryIndex,
    /// Files written, or that would have been written on a dry run
    pub files: Vec<PathBuf>,
}

/// Item step result
#[derive(Debug, Clone)]
pub struct ItemIndex {
    pub directory: PathBuf,
    pub names: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// Outcome of a single generator step
#[derive(Debug, Clone)]
pub enum StepOutcome<T> {
    /// The input directory was missing; nothing was written
    Skipped { directory: PathBuf },
    Indexed(T),
}

impl<T> StepOutcome<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, StepOutcome::Skipped { .. })
    }

    pub fn indexed(&self) -> Option<&T> {
        match self {
            StepOutcome::Indexed(value) => Some(value),
            StepOutcome::Skipped { .. } => None,
        }
    }
}
