// SPDX-License-Identifier: PMPL-1.0-or-later

//! photo-index — JSON indexes for facebase and item images.
//!
//! Scans `<root>/photos/facebases` and `<root>/photos/items`, lists the
//! image files in each, and writes the small JSON files the web front end
//! loads at startup.
//!
//! PIPELINE:
//! 1. **Scan**: list image files in a directory, strip extensions, sort.
//! 2. **Classify**: derive a category from each facebase name prefix and
//!    look it up in the embedded country table.
//! 3. **Generate**: write `facebases.json`, `categories.json` and
//!    `items.json`.

pub mod classify;
pub mod config;
pub mod countries;
pub mod generate;
pub mod report;
pub mod scan;
pub mod types;
