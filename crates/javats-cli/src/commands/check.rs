//! Check command implementation.

use anyhow::Result;
use javats_core::{RuleSet, Validator};
use javats_rules::all_rules;

use super::{exclude_patterns, inputs, preset_for};
use crate::project::Project;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    paths: &[String],
    format: OutputFormat,
    rules_filter: Option<String>,
    preset: Option<&str>,
    exclude: Vec<String>,
    project: &Project,
) -> Result<()> {
    let config = project.config.clone();
    let preset = preset_for(preset, &config)?;

    let files = inputs::discover(paths, &exclude_patterns(&config, exclude))?;
    if files.is_empty() {
        println!("No .javats files found");
        return Ok(());
    }

    let rules = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names)
        }
        None => preset.rules(),
    };

    let validator = Validator::builder().rule_set(rules).config(config).build();

    tracing::info!(
        "Checking {} file(s) with {} rule(s), preset {preset}",
        files.len(),
        validator.rule_count()
    );

    let (units, faults) = inputs::load_units(&files);
    let mut report = validator.validate_all(&units);
    report.units_checked += faults.len();

    super::output::print(&report, &units, &faults, format)?;

    if report.has_diagnostics() || !faults.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Selects rules by name or code, in catalogue order.
fn filter_rules(names: &[&str]) -> RuleSet {
    for name in names {
        let known = all_rules()
            .iter()
            .any(|r| r.name() == *name || r.code().eq_ignore_ascii_case(name));
        if !known {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    all_rules().retain(|r| {
        names
            .iter()
            .any(|n| r.name() == *n || r.code().eq_ignore_ascii_case(n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use javats_core::RuleKind;

    #[test]
    fn filter_by_name_and_code() {
        let rules = filter_rules(&["naming-convention", "jt001", "nope"]);
        let names: Vec<_> = rules.iter().map(RuleKind::name).collect();
        assert_eq!(names, vec!["no-procedural-code", "naming-convention"]);
    }
}
