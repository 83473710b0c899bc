//! Configuration types for javats.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level configuration, read from `javats.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use ("mature" or "legacy").
    #[serde(default)]
    pub preset: Option<String>,

    /// Build configuration.
    #[serde(default)]
    pub build: BuildConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. Rules are enabled unless configured otherwise.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Build-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for emitted files.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Emit the TypeScript rewrite (`.ts`).
    #[serde(default = "default_true")]
    pub emit_ts: bool,

    /// Emit compiled JavaScript (`.js`) with the entry runner.
    #[serde(default)]
    pub emit_js: bool,

    /// Glob patterns excluded from input discovery.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            emit_ts: true,
            emit_js: false,
            exclude: default_exclude(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert!(config.build.emit_ts);
        assert!(!config.build.emit_js);
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("anything"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "legacy"

[build]
out_dir = "out"
emit_js = true
exclude = ["**/generated/**"]

[rules.naming-convention]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("legacy"));
        assert_eq!(config.build.out_dir, PathBuf::from("out"));
        assert!(config.build.emit_ts);
        assert!(config.build.emit_js);
        assert!(!config.is_rule_enabled("naming-convention"));
        assert!(config.is_rule_enabled("require-type"));
    }

    #[test]
    fn test_build_table_keeps_default_exclude() {
        let config = Config::parse("[build]\nemit_js = true\n").expect("Failed to parse");
        assert_eq!(config.build.exclude, vec!["**/node_modules/**".to_string()]);
        assert_eq!(config.build.exclude, BuildConfig::default().exclude);

        let empty = Config::parse("[build]\nexclude = []\n").expect("Failed to parse");
        assert!(empty.build.exclude.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("preset = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("javats.toml");
        std::fs::write(&path, "[build]\nout_dir = \"build\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.build.out_dir, PathBuf::from("build"));

        let missing = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
