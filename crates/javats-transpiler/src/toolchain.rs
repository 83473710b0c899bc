//! Host-language toolchain boundary.
//!
//! The compile stage hands TypeScript text to a [`Toolchain`] and awaits the
//! emitted files. The default toolchain runs [`JsEmitter`] on the blocking
//! pool.

use async_trait::async_trait;
use javats_syntax::{EmitError, JsEmitter};
use std::path::{Path, PathBuf};

/// A file produced by a toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    /// Path of the artifact, relative to the emission root.
    pub path: PathBuf,
    /// Artifact content.
    pub text: String,
}

impl EmittedFile {
    /// True if the artifact carries the given extension (without the dot).
    #[must_use]
    pub fn has_extension(&self, extension: &str) -> bool {
        self.path.extension().and_then(|e| e.to_str()) == Some(extension)
    }
}

/// Toolchain failures.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// The emitter rejected the source.
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// The emission task did not complete.
    #[error("Emission task failed: {message}")]
    Task {
        /// Task failure message.
        message: String,
    },
}

/// Trait for compiling host-language source into artifacts.
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Toolchain identifier used in logs.
    fn name(&self) -> &'static str;

    /// Emits the artifacts for one source file.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be emitted.
    async fn emit(&self, file_name: &str, source: &str) -> Result<Vec<EmittedFile>, ToolchainError>;
}

/// Default toolchain backed by the Tree-sitter JavaScript emitter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterToolchain;

impl TreeSitterToolchain {
    /// Creates a new toolchain.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Toolchain for TreeSitterToolchain {
    fn name(&self) -> &'static str {
        "tree-sitter"
    }

    async fn emit(&self, file_name: &str, source: &str) -> Result<Vec<EmittedFile>, ToolchainError> {
        let path = Path::new(file_name).with_extension("js");
        let source = source.to_owned();

        let text = tokio::task::spawn_blocking(move || JsEmitter::new().emit(&source))
            .await
            .map_err(|e| ToolchainError::Task {
                message: e.to_string(),
            })??;

        Ok(vec![EmittedFile { path, text }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emits_one_js_file() {
        let files = TreeSitterToolchain::new()
            .emit("App.ts", "class App {\n    public run(): void {}\n}\n")
            .await
            .expect("Failed to emit");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, PathBuf::from("App.js"));
        assert!(files[0].has_extension("js"));
        assert!(files[0].text.contains("    run() {}"));
    }

    #[tokio::test]
    async fn surfaces_emit_errors() {
        let err = TreeSitterToolchain::new()
            .emit("Util.ts", "namespace Util {}\n")
            .await
            .unwrap_err();
        assert!(matches!(err, ToolchainError::Emit(EmitError::Unsupported { .. })));
    }
}
