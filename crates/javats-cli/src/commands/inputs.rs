//! Input discovery and unit loading.
//!
//! Arguments may be files, directories (walked recursively, honoring
//! `.gitignore`) or glob patterns. Only `.javats` files are kept.

use anyhow::{Context, Result};
use javats_core::{SourceUnit, SOURCE_EXTENSION};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A file that could not be loaded.
#[derive(Debug, Clone, Serialize)]
pub struct LoadFault {
    /// Offending file.
    pub path: PathBuf,
    /// Error message.
    pub message: String,
}

fn is_source(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expands arguments into `.javats` files, in argument order.
///
/// Files found by directory walks and globs are sorted per argument;
/// duplicates keep their first position.
pub fn discover(patterns: &[String], exclude: &[String]) -> Result<Vec<PathBuf>> {
    let excluded: Vec<glob::Pattern> = exclude
        .iter()
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect::<Result<_>>()?;

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let mut found = if is_glob(pattern) {
            glob_files(pattern)?
        } else {
            let path = Path::new(pattern);
            if path.is_dir() {
                walk_dir(path)?
            } else if is_source(path) {
                vec![path.to_path_buf()]
            } else {
                tracing::warn!("Skipping {pattern}: not a .{SOURCE_EXTENSION} file or directory");
                Vec::new()
            }
        };
        found.sort();

        for file in found {
            if excluded.iter().any(|p| p.matches_path(&file)) {
                tracing::debug!("Excluded: {}", file.display());
                continue;
            }
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    Ok(files)
}

fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))? {
        let path = entry?;
        if is_source(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn walk_dir(root: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if is_source(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// Loads every file, collecting the ones that fail instead of stopping.
pub fn load_units(files: &[PathBuf]) -> (Vec<SourceUnit>, Vec<LoadFault>) {
    let mut units = Vec::new();
    let mut faults = Vec::new();

    for file in files {
        match javats_syntax::load_unit(file) {
            Ok(unit) => units.push(unit),
            Err(e) => {
                tracing::warn!("Error parsing {}: {e}", file.display());
                faults.push(LoadFault {
                    path: file.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    (units, faults)
}
