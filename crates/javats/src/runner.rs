//! Preset and configuration wiring.

use javats_core::{Config, Validator};
use javats_rules::{MainMethod, NoProceduralCode, Preset, RequireModifiers, UnitRule};
use javats_transpiler::{Pipeline, TransformOptions, Transpiler};
use tracing::debug;

/// Resolves the effective preset: explicit argument, then config, then `mature`.
///
/// # Errors
///
/// Returns a message naming the valid presets if the name is unknown.
pub fn resolve_preset(explicit: Option<&str>, config: &Config) -> Result<Preset, String> {
    match explicit.or(config.preset.as_deref()) {
        Some(name) => name.parse(),
        None => Ok(Preset::default()),
    }
}

/// Rewrite re-checks matching the rules a preset and config actually run.
///
/// The entry point is re-checked per unit only when the preset checks it per
/// unit; the mature preset checks it once per project.
#[must_use]
pub fn transform_options(preset: Preset, config: &Config) -> TransformOptions {
    TransformOptions {
        enforce_main: preset.checks_main_per_unit()
            && config.is_rule_enabled(MainMethod::new().name()),
        require_modifiers: config.is_rule_enabled(RequireModifiers::new().name()),
        no_procedural_code: config.is_rule_enabled(NoProceduralCode::new().name()),
    }
}

/// Validator running the preset's rules under `config`.
#[must_use]
pub fn validator(preset: Preset, config: Config) -> Validator {
    Validator::builder()
        .rule_set(preset.rules())
        .config(config)
        .build()
}

/// Build pipeline for a preset and config.
#[must_use]
pub fn pipeline(preset: Preset, config: Config) -> Pipeline {
    let options = transform_options(preset, &config);
    debug!(preset = %preset, ?options, "Creating pipeline");
    Pipeline::new(
        validator(preset, config),
        Transpiler::new().with_options(options),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_preset_defaults_to_mature() {
        assert_eq!(resolve_preset(None, &Config::default()), Ok(Preset::Mature));
    }

    #[test]
    fn resolve_preset_explicit_takes_precedence() {
        let mut config = Config::default();
        config.preset = Some("mature".to_string());
        assert_eq!(resolve_preset(Some("legacy"), &config), Ok(Preset::Legacy));
    }

    #[test]
    fn resolve_preset_from_config() {
        let mut config = Config::default();
        config.preset = Some("legacy".to_string());
        assert_eq!(resolve_preset(None, &config), Ok(Preset::Legacy));
    }

    #[test]
    fn resolve_preset_rejects_unknown() {
        let err = resolve_preset(Some("strict"), &Config::default()).unwrap_err();
        assert!(err.contains("Unknown preset"));
    }

    #[test]
    fn mature_relaxes_per_unit_main() {
        let options = transform_options(Preset::Mature, &Config::default());
        assert!(!options.enforce_main);
        assert!(options.require_modifiers);
        assert!(options.no_procedural_code);

        assert!(transform_options(Preset::Legacy, &Config::default()).enforce_main);
    }

    #[test]
    fn disabled_rules_relax_rechecks() {
        let config = Config::parse(
            r"
[rules.require-modifiers]
enabled = false

[rules.main-method]
enabled = false
",
        )
        .expect("Failed to parse config");

        let options = transform_options(Preset::Legacy, &config);
        assert!(!options.enforce_main);
        assert!(!options.require_modifiers);
        assert!(options.no_procedural_code);
    }
}
