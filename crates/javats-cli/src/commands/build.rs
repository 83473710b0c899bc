//! Build command implementation.

use anyhow::Result;
use javats_transpiler::BuildTargets;
use std::path::PathBuf;

use super::{exclude_patterns, inputs, output, preset_for};
use crate::project::Project;

/// Command-line overrides for a build.
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Output directory, overriding `build.out_dir`.
    pub out_dir: Option<PathBuf>,
    /// Force JavaScript emission.
    pub emit_js: bool,
    /// Suppress the TypeScript rewrite.
    pub no_emit_ts: bool,
    /// Preset name, overriding the config.
    pub preset: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
}

/// Resolves emission targets from the config and flags.
fn targets(config: &javats_core::BuildConfig, options: &BuildOptions) -> BuildTargets {
    let base = BuildTargets::from(config);
    BuildTargets {
        emit_ts: base.emit_ts && !options.no_emit_ts,
        emit_js: base.emit_js || options.emit_js,
    }
}

/// Runs the build command.
pub async fn run(paths: &[String], options: BuildOptions, project: &Project) -> Result<()> {
    let config = project.config.clone();
    let preset = preset_for(options.preset.as_deref(), &config)?;
    let out_dir = project.out_dir(options.out_dir.as_deref());
    let targets = targets(&config.build, &options);

    let files = inputs::discover(paths, &exclude_patterns(&config, options.exclude))?;
    if files.is_empty() {
        println!("No .javats files found");
        return Ok(());
    }

    println!("\x1b[1;34m\nBuilding {} .javats file(s)\x1b[0m", files.len());

    let (units, load_faults) = inputs::load_units(&files);
    let pipeline = javats::pipeline(preset, config);
    let mut report = pipeline.build(&units, &out_dir, targets).await;
    report.validation.units_checked += load_faults.len();

    output::print_text(&report.validation, &load_faults);

    if report.project_aborted {
        eprintln!("\x1b[31m✗ Project validation failed, nothing was built\x1b[0m");
    }
    for fault in &report.faults {
        eprintln!(
            "\x1b[31m✗ Error transforming {}: {}\x1b[0m",
            fault.unit.display(),
            fault.message
        );
    }

    if !report.written.is_empty() {
        println!(
            "\x1b[32m\n✓ Successfully built {} file(s):\x1b[0m",
            report.written.len()
        );
        for file in &report.written {
            println!("  \x1b[90m•\x1b[0m {}", file.display());
        }
    }

    if !report.is_success() || !load_faults.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
