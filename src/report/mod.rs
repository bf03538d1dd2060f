// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console output and run summaries

pub mod console;
pub mod summary;

pub use console::ConsoleReporter;
pub use summary::{write_summary, RunSummary, StepStatus, StepSummary};
