//! Subcommand implementations.

pub mod build;
pub mod check;
pub mod init;
pub mod inputs;
pub mod inspect;
pub mod list_rules;
pub mod output;

use anyhow::{anyhow, Result};
use javats_core::Config;
use javats_rules::Preset;

/// Resolves the preset from the `--preset` flag, then the config.
fn preset_for(explicit: Option<&str>, config: &Config) -> Result<Preset> {
    javats::resolve_preset(explicit, config).map_err(|e| anyhow!(e))
}

/// Exclude patterns from the config followed by those from the command line.
fn exclude_patterns(config: &Config, extra: Vec<String>) -> Vec<String> {
    let mut patterns = config.build.exclude.clone();
    patterns.extend(extra);
    patterns
}
