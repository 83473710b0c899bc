//! Output writer and output path derivation.

use javats_core::SOURCE_EXTENSION;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes generated files, creating parent directories as needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputWriter;

impl OutputWriter {
    /// Creates a new writer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Writes `content` to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the file cannot
    /// be written.
    pub fn write_file(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Output path for a source unit: `<out_dir>/<base name without .javats>.<extension>`.
///
/// Units sharing a base name map to the same path.
#[must_use]
pub fn derive_output_path(source: &Path, out_dir: &Path, extension: &str) -> PathBuf {
    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let suffix = format!(".{SOURCE_EXTENSION}");
    let stem = file_name.strip_suffix(&suffix).unwrap_or(file_name);
    out_dir.join(format!("{stem}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn derives_path_from_base_name() {
        let path = derive_output_path(Path::new("src/app/App.javats"), Path::new("dist"), "js");
        assert_eq!(path, PathBuf::from("dist/App.js"));
    }

    #[test]
    fn same_base_name_collides() {
        let a = derive_output_path(Path::new("a/Util.javats"), Path::new("out"), "ts");
        let b = derive_output_path(Path::new("b/Util.javats"), Path::new("out"), "ts");
        assert_eq!(a, b);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested/deeper/App.js");

        OutputWriter::new()
            .write_file(&path, "content")
            .expect("Failed to write");
        assert_eq!(std::fs::read_to_string(&path).expect("Failed to read"), "content");
    }
}
