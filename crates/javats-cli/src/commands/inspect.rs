//! Inspect command implementation.

use anyhow::{Context, Result};
use javats_core::StructureReport;
use std::path::Path;

/// Prints the structure report of one file as JSON.
pub fn run(file: &Path) -> Result<()> {
    let unit = javats_syntax::load_unit(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let report = StructureReport::from_unit(&unit);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
