//! Batch validate-then-emit pipeline.
//!
//! Unit rules run per unit in input order; units without diagnostics are
//! accepted; project rules run once over the accepted units. Emission only
//! starts when project validation passes, and then runs for accepted units
//! only. A fault in one unit is recorded and the batch continues.

use crate::compile::{CompileError, Transpiler};
use crate::output::derive_output_path;
use javats_core::{BuildConfig, SourceUnit, ValidationReport, Validator};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A fault that aborted the build of one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFault {
    /// Path of the unit.
    pub unit: PathBuf,
    /// Fault message.
    pub message: String,
}

/// Which artifacts to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTargets {
    /// Emit the TypeScript rewrite.
    pub emit_ts: bool,
    /// Emit compiled JavaScript.
    pub emit_js: bool,
}

impl Default for BuildTargets {
    fn default() -> Self {
        Self {
            emit_ts: true,
            emit_js: false,
        }
    }
}

impl From<&BuildConfig> for BuildTargets {
    fn from(config: &BuildConfig) -> Self {
        Self {
            emit_ts: config.emit_ts,
            emit_js: config.emit_js,
        }
    }
}

/// Outcome of a batch build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Unit and project diagnostics.
    pub validation: ValidationReport,
    /// Files written, in emission order.
    pub written: Vec<PathBuf>,
    /// Per-unit faults.
    pub faults: Vec<UnitFault>,
    /// True when project diagnostics prevented emission.
    pub project_aborted: bool,
}

impl BuildReport {
    /// True if no diagnostic and no fault occurred.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.validation.has_diagnostics() && self.faults.is_empty()
    }
}

/// Validates units and emits the accepted ones.
#[derive(Debug)]
pub struct Pipeline {
    validator: Validator,
    transpiler: Transpiler,
}

impl Pipeline {
    /// Creates a pipeline.
    #[must_use]
    pub fn new(validator: Validator, transpiler: Transpiler) -> Self {
        Self {
            validator,
            transpiler,
        }
    }

    /// The validator.
    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// The transpiler.
    #[must_use]
    pub fn transpiler(&self) -> &Transpiler {
        &self.transpiler
    }

    /// Runs the full build over `units`, writing into `out_dir`.
    pub async fn build(&self, units: &[SourceUnit], out_dir: &Path, targets: BuildTargets) -> BuildReport {
        info!("Building {} unit(s)", units.len());

        let mut report = BuildReport::default();
        let mut accepted = Vec::new();

        for unit in units {
            let diagnostics = self.validator.validate_unit_in(unit, units);
            report.validation.units_checked += 1;
            if diagnostics.is_empty() {
                report.validation.accepted.push(unit.path.clone());
                accepted.push(unit.clone());
            } else {
                info!(
                    "Validation failed for {}, skipping",
                    unit.path().display()
                );
                report.validation.diagnostics.extend(diagnostics);
            }
        }

        let project = self.validator.validate_project(&accepted);
        if !project.is_empty() {
            warn!(
                "Project validation failed with {} diagnostic(s), nothing emitted",
                project.len()
            );
            report.validation.diagnostics.extend(project);
            report.project_aborted = true;
            return report;
        }

        warn_on_collisions(&accepted, out_dir, targets);

        for unit in &accepted {
            if let Err(e) = self.emit_unit(unit, out_dir, targets, &mut report.written).await {
                warn!("Failed to build {}: {e}", unit.path().display());
                report.faults.push(UnitFault {
                    unit: unit.path.clone(),
                    message: e.to_string(),
                });
            }
        }

        info!(
            "Build complete: {} file(s) written, {} fault(s)",
            report.written.len(),
            report.faults.len()
        );
        report
    }

    async fn emit_unit(
        &self,
        unit: &SourceUnit,
        out_dir: &Path,
        targets: BuildTargets,
        written: &mut Vec<PathBuf>,
    ) -> Result<(), CompileError> {
        if targets.emit_ts {
            written.push(self.transpiler.transform_file(unit, out_dir)?);
        }
        if targets.emit_js {
            written.push(self.transpiler.compile_file(unit, out_dir).await?);
        }
        Ok(())
    }
}

/// Units sharing a base name overwrite each other; the last one wins.
fn warn_on_collisions(units: &[SourceUnit], out_dir: &Path, targets: BuildTargets) {
    let extension = if targets.emit_js { "js" } else { "ts" };
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    for unit in units {
        let output = derive_output_path(unit.path(), out_dir, extension);
        if let Some(previous) = seen.insert(output.clone(), unit.path()) {
            warn!(
                "{} and {} both write {}; the later one wins",
                previous.display(),
                unit.path().display(),
                output.display()
            );
        }
    }
}
