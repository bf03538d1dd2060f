// SPDX-License-Identifier: PMPL-1.0-or-later

//! Category classification for facebase names.
//!
//! A facebase named `France-3` belongs to category `France`: everything
//! before the first separator. Categories found in the country table carry
//! their ISO code; anything else is an "other" category whose icon lives
//! under the configured flag base.

use crate::countries;
use crate::types::{CategoryIndex, Classification, CountryEntry, OtherEntry};
use std::collections::BTreeSet;

/// Where non-country category icons are looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagLocation {
    pub base: String,
    pub extension: String,
}

impl FlagLocation {
    pub fn new(base: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }

    pub fn path_for(&self, category: &str) -> String {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            // "/" stays rooted; only an empty base means no directory.
            let root = if self.base.is_empty() { "" } else { "/" };
            format!("{}{}.{}", root, category, self.extension)
        } else {
            format!("{}/{}.{}", base, category, self.extension)
        }
    }
}

impl Default for FlagLocation {
    fn default() -> Self {
        Self::new("photos/app", "png")
    }
}

/// Category prefix of a facebase name, if it has one.
///
/// Only the first separator counts, and an empty prefix is kept as-is:
/// `"-x"` yields `Some("")`, `"a-b-c"` yields `Some("a")`.
pub fn category_of(name: &str, separator: char) -> Option<&str> {
    name.split_once(separator).map(|(prefix, _)| prefix)
}

/// Classify one category against the country table.
pub fn classify(category: &str, flags: &FlagLocation) -> Classification {
    match countries::iso_code(category) {
        Some(iso) => Classification::Country(CountryEntry {
            name: category.to_string(),
            iso: iso.to_string(),
        }),
        None => Classification::Other(OtherEntry {
            name: category.to_string(),
            flag: flags.path_for(category),
        }),
    }
}

/// Distinct categories across `names`, in lexicographic order
pub fn distinct_categories<'a, I>(names: I, separator: char) -> BTreeSet<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .filter_map(|name| category_of(name, separator))
        .collect()
}

/// Build the `categories.json` structure for a set of facebase names.
pub fn build_category_index(
    names: &[String],
    separator: char,
    flags: &FlagLocation,
) -> CategoryIndex {
    let mut index = CategoryIndex::default();
    for category in distinct_categories(names, separator) {
        index.push(classify(category, flags));
    }
    index
}
