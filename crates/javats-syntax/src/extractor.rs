//! Front-end extension point and parse errors.
//!
//! `UnitExtractor` turns raw source text into the [`SourceUnit`] model the
//! rules observe. Implement it to plug in another parser.

use javats_core::SourceUnit;
use std::path::{Path, PathBuf};

/// Errors raised while loading or parsing a unit.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file does not carry the JavaTS extension.
    #[error("Invalid file extension for {path}: expected .{expected}")]
    Extension {
        /// Offending path.
        path: PathBuf,
        /// Expected extension, without the dot.
        expected: &'static str,
    },

    /// The grammar could not be loaded.
    #[error("Failed to load grammar: {message}")]
    Language {
        /// Loader error message.
        message: String,
    },

    /// The source does not parse.
    #[error("Syntax error in {path} at {line}:{column}")]
    Syntax {
        /// Path of the unit.
        path: PathBuf,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },
}

/// Trait for parsing source text into the syntax model.
pub trait UnitExtractor: Send + Sync {
    /// Language identifier (e.g., `"typescript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".javats"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses a unit.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] on the first syntax error.
    fn parse(&self, path: &Path, source: &str) -> Result<SourceUnit, ParseError>;

    /// True if this extractor handles the path's extension.
    fn handles(&self, path: &Path) -> bool {
        let name = path.to_string_lossy();
        self.extensions().iter().any(|ext| name.ends_with(ext))
    }
}
