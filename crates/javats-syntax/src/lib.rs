//! # javats-syntax
//!
//! Tree-sitter front end for JavaTS.
//!
//! JavaTS source is TypeScript, so both directions go through the stock
//! TypeScript grammar:
//!
//! - [`UnitExtractor`] trait for pluggable front ends
//! - [`TypeScriptExtractor`] folding the syntax tree into [`SourceUnit`]
//! - [`JsEmitter`] erasing types and lowering module syntax to CommonJS
//! - [`parse_unit`] and [`load_unit`] convenience entry points

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod emit;
pub mod extractor;
pub mod typescript;

pub use emit::{EmitError, JsEmitter};
pub use extractor::{ParseError, UnitExtractor};
pub use typescript::TypeScriptExtractor;

use javats_core::{SourceUnit, SOURCE_EXTENSION};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parses source text into a unit with the TypeScript extractor.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the text does not parse.
pub fn parse_unit(path: impl Into<PathBuf>, source: &str) -> Result<SourceUnit, ParseError> {
    let path = path.into();
    TypeScriptExtractor::new().parse(&path, source)
}

/// Reads and parses a `.javats` file.
///
/// # Errors
///
/// Returns an error if the path lacks the `.javats` extension, cannot be
/// read, or does not parse.
pub fn load_unit(path: &Path) -> Result<SourceUnit, ParseError> {
    if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(ParseError::Extension {
            path: path.to_path_buf(),
            expected: SOURCE_EXTENSION,
        });
    }

    let source = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "Loaded unit");

    parse_unit(path, &source)
}
