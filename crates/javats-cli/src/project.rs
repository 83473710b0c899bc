//! Project discovery.
//!
//! A project is rooted at the nearest directory, from the working directory
//! upwards, holding `javats.toml` (or `.javats.toml`). Its `[build]` section
//! is read relative to that root, so `javats build` run from `src/` still
//! writes to `<root>/dist`. `--config` names the file directly. Without a
//! project file, `$JAVATS_CONFIG_DIR/config.toml` or `~/.javats/config.toml`
//! supplies the rule settings and paths stay relative to the working
//! directory.

use anyhow::{Context, Result};
use javats_core::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PROJECT_FILES: &[&str] = &["javats.toml", ".javats.toml"];

const USER_FILE: &str = "config.toml";

/// A loaded configuration and the directory its paths are relative to.
#[derive(Debug)]
pub struct Project {
    /// Effective configuration.
    pub config: Config,
    /// Base for `build.out_dir`; empty when it is the working directory.
    pub root: PathBuf,
    /// File the configuration came from.
    pub config_file: Option<PathBuf>,
}

impl Project {
    /// Locates and loads the project for `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read or parsed.
    pub fn locate(start: &Path, explicit: Option<&Path>) -> Result<Self> {
        Self::locate_with(start, explicit, user_config_dir())
    }

    fn locate_with(start: &Path, explicit: Option<&Path>, user_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(file) = explicit {
            let root = file.parent().map(Path::to_path_buf).unwrap_or_default();
            return Self::load(file, root);
        }

        for (depth, dir) in start.ancestors().enumerate() {
            let Some(file) = PROJECT_FILES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
            else {
                continue;
            };
            debug!("Project root: {}", dir.display());
            let root = if depth == 0 {
                PathBuf::new()
            } else {
                dir.to_path_buf()
            };
            return Self::load(&file, root);
        }

        if let Some(file) = user_dir.map(|dir| dir.join(USER_FILE)).filter(|f| f.is_file()) {
            info!("Using user config: {}", file.display());
            return Self::load(&file, PathBuf::new());
        }

        Ok(Self {
            config: Config::default(),
            root: PathBuf::new(),
            config_file: None,
        })
    }

    fn load(file: &Path, root: PathBuf) -> Result<Self> {
        let config = Config::from_file(file)
            .with_context(|| format!("Failed to load config: {}", file.display()))?;
        Ok(Self {
            config,
            root,
            config_file: Some(file.to_path_buf()),
        })
    }

    /// Output directory: the `-o` flag as given, else `build.out_dir` under the root.
    #[must_use]
    pub fn out_dir(&self, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(dir) => dir.to_path_buf(),
            None => self.root.join(&self.config.build.out_dir),
        }
    }
}

/// `$JAVATS_CONFIG_DIR`, else `~/.javats`.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("JAVATS_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".javats")))
}
