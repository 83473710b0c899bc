//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# javats configuration

# Rule preset: "mature" (default) or "legacy"
preset = "mature"

[build]
out_dir = "dist"
emit_ts = true
emit_js = true

# Glob patterns to exclude from input discovery
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Rule configurations
# Each rule can be disabled by name

# [rules.naming-convention]
# enabled = false
"#;

const MAIN_SOURCE: &str = r#"export class Main {
    private static readonly GREETING: string = "Hello from JavaTS";

    public static main(args: string[]): void {
        console.log(Main.GREETING, args.join(" "));
    }
}
"#;

const GITIGNORE: &str = "node_modules\ndist\n.DS_Store\n";

/// Runs the init command.
pub fn run(name: &str, force: bool) -> Result<()> {
    let project_dir = std::env::current_dir()
        .context("Failed to read current directory")?
        .join(name);

    println!("\x1b[1;34m\nInitializing new JavaTS project: {name}\x1b[0m");

    let created = scaffold(&project_dir, force)?;
    for path in &created {
        println!("  Created {}", path.display());
    }

    println!("\x1b[32m\n✓ Successfully initialized project: {name}\x1b[0m");
    println!("\nNext steps:");
    println!("  1. cd {name}");
    println!("  2. javats check src");
    println!("  3. javats build src");
    println!("  4. node dist/Main.js");

    Ok(())
}

/// Writes the project skeleton into `dir`, returning the created files.
fn scaffold(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let config_path = dir.join("javats.toml");
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let src_dir = dir.join("src");
    std::fs::create_dir_all(&src_dir)
        .with_context(|| format!("Failed to create {}", src_dir.display()))?;

    let files = [
        (config_path, DEFAULT_CONFIG),
        (src_dir.join("Main.javats"), MAIN_SOURCE),
        (dir.join(".gitignore"), GITIGNORE),
    ];

    let mut created = Vec::new();
    for (path, content) in files {
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        created.push(path);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use javats_core::Config;
    use javats_rules::Preset;
    use tempfile::TempDir;

    #[test]
    fn scaffolds_project_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("demo");

        let created = scaffold(&dir, false).unwrap();
        assert_eq!(created.len(), 3);
        assert!(dir.join("src/Main.javats").is_file());
        assert!(dir.join(".gitignore").is_file());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        scaffold(tmp.path(), false).unwrap();

        assert!(scaffold(tmp.path(), false).is_err());
        assert!(scaffold(tmp.path(), true).is_ok());
    }

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("mature"));
        assert!(config.build.emit_js);
        assert!(config.is_rule_enabled("naming-convention"));
    }

    #[test]
    fn sample_source_passes_mature_rules() {
        let unit = javats_syntax::parse_unit("src/Main.javats", MAIN_SOURCE).unwrap();
        let validator = javats::validator(Preset::Mature, Config::default());

        let report = validator.validate_all(std::slice::from_ref(&unit));
        assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
    }
}
