//! Core types for diagnostics and validation results.

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::model::{Position, SourceUnit};

/// Source code location of a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Identifier (path) of the source unit.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }

    /// Creates a location from a model position.
    #[must_use]
    pub fn at(file: &Path, position: Position) -> Self {
        Self::new(file.to_path_buf(), position.line, position.column)
    }

    /// The first character of a unit.
    #[must_use]
    pub fn unit_start(file: &Path) -> Self {
        Self::at(file, Position::START)
    }

    /// Model position of this location.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// A suggested fix for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A rule violation found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g., "JT001").
    pub code: String,
    /// Rule name (e.g., "no-procedural-code").
    pub rule: String,
    /// Location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this diagnostic.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Identifier of the unit this diagnostic belongs to.
    #[must_use]
    pub fn unit(&self) -> &Path {
        &self.location.file
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  error: {}", self.message);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}:{}:{} - {}",
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.message
        )
    }
}

/// A diagnostic paired with its unit source, for rich `miette` display.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[help]
    help: Option<String>,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl DiagnosticReport {
    /// Builds a report pointing into the unit's source text.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, unit: &SourceUnit) -> Self {
        let offset = unit.offset_for(diagnostic.location.position());
        let length = usize::from(offset < unit.text.len());
        Self {
            message: format!("[{}] {}", diagnostic.code, diagnostic.message),
            help: diagnostic.suggestion.as_ref().map(|s| s.message.clone()),
            source_code: NamedSource::new(unit.path.display().to_string(), unit.text.clone()),
            span: SourceSpan::from((offset, length)),
            label_message: diagnostic.rule.clone(),
        }
    }
}

/// Result of validating a collection of units.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All diagnostics, per-unit ones first, then project-level ones.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of units checked.
    pub units_checked: usize,
    /// Units that produced no per-unit diagnostics.
    pub accepted: Vec<PathBuf>,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any diagnostic was produced.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Counts diagnostics per rule name.
    #[must_use]
    pub fn count_by_rule(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            *counts.entry(diagnostic.rule.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Groups diagnostics by unit.
    ///
    /// Units appear in the order their first diagnostic was reported, and
    /// diagnostics keep their order within each unit.
    #[must_use]
    pub fn by_unit(&self) -> Vec<(&Path, Vec<&Diagnostic>)> {
        let mut grouped: Vec<(&Path, Vec<&Diagnostic>)> = Vec::new();
        for diagnostic in &self.diagnostics {
            let unit = diagnostic.unit();
            match grouped.iter_mut().find(|(path, _)| *path == unit) {
                Some((_, diagnostics)) => diagnostics.push(diagnostic),
                None => grouped.push((unit, vec![diagnostic])),
            }
        }
        grouped
    }

    /// Prints a summary report to stdout.
    pub fn print_report(&self) {
        for diagnostic in &self.diagnostics {
            println!("{}", diagnostic.format());
        }

        println!(
            "\nFound {} error(s) in {} of {} unit(s)",
            self.diagnostics.len(),
            self.by_unit().len(),
            self.units_checked
        );
    }

    /// Adds diagnostics and accepted units from another report.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.accepted.extend(other.accepted);
        self.units_checked += other.units_checked;
    }
}
