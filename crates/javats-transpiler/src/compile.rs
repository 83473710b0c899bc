//! Per-unit rewrite and compile stages.

use crate::main_runner::append_main_runner;
use crate::output::{derive_output_path, OutputWriter};
use crate::rewrite::{transform_to_host_source, TransformError, TransformOptions};
use crate::toolchain::{Toolchain, ToolchainError, TreeSitterToolchain};
use javats_core::utils::find_entry_class;
use javats_core::{SourceUnit, SOURCE_EXTENSION};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Faults raised while building one unit.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The rewrite re-check failed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The toolchain rejected the source.
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    /// The toolchain produced no JavaScript artifact.
    #[error("Failed to emit JavaScript for {path}")]
    MissingArtifact {
        /// Path of the unit.
        path: PathBuf,
    },

    /// An output file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Rewrites and compiles validated units.
pub struct Transpiler {
    toolchain: Box<dyn Toolchain>,
    options: TransformOptions,
    writer: OutputWriter,
}

impl Transpiler {
    /// Creates a transpiler with the default toolchain and options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            toolchain: Box::new(TreeSitterToolchain::new()),
            options: TransformOptions::default(),
            writer: OutputWriter::new(),
        }
    }

    /// Replaces the toolchain.
    #[must_use]
    pub fn with_toolchain<T: Toolchain + 'static>(mut self, toolchain: T) -> Self {
        self.toolchain = Box::new(toolchain);
        self
    }

    /// Replaces the rewrite options.
    #[must_use]
    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Current rewrite options.
    #[must_use]
    pub fn options(&self) -> TransformOptions {
        self.options
    }

    /// Rewrites a unit to TypeScript.
    ///
    /// # Errors
    ///
    /// Returns the first re-check failure.
    pub fn transform(&self, unit: &SourceUnit) -> Result<String, TransformError> {
        transform_to_host_source(unit, self.options)
    }

    /// Rewrites a unit and writes `<out_dir>/<name>.ts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-check fails or the file cannot be written.
    pub fn transform_file(&self, unit: &SourceUnit, out_dir: &Path) -> Result<PathBuf, CompileError> {
        let text = self.transform(unit)?;
        let path = derive_output_path(unit.path(), out_dir, "ts");
        self.write(&path, &text)?;
        Ok(path)
    }

    /// Compiles a unit to JavaScript.
    ///
    /// When the unit declares an entry class, the first one in declaration
    /// order gets a runner appended that calls its `main` with the process
    /// arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the re-check fails, the toolchain fails, or no
    /// `.js` artifact is emitted.
    pub async fn compile_unit(&self, unit: &SourceUnit) -> Result<String, CompileError> {
        let source = self.transform(unit)?;
        let file_name = host_file_name(unit);

        debug!(
            "Compiling {} with {}",
            unit.path().display(),
            self.toolchain.name()
        );
        let emitted = self.toolchain.emit(&file_name, &source).await?;

        let js = emitted
            .into_iter()
            .find(|f| f.has_extension("js"))
            .ok_or_else(|| CompileError::MissingArtifact {
                path: unit.path().to_path_buf(),
            })?
            .text;

        match find_entry_class(unit) {
            Some(class) => {
                debug!("Entry class: {}", class.display_name());
                Ok(append_main_runner(&js, class.display_name()))
            }
            None => Ok(js),
        }
    }

    /// Compiles a unit and writes `<out_dir>/<name>.js`.
    ///
    /// # Errors
    ///
    /// Returns an error if compilation fails or the file cannot be written.
    pub async fn compile_file(&self, unit: &SourceUnit, out_dir: &Path) -> Result<PathBuf, CompileError> {
        let js = self.compile_unit(unit).await?;
        let path = derive_output_path(unit.path(), out_dir, "js");
        self.write(&path, &js)?;
        Ok(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), CompileError> {
        self.writer
            .write_file(path, content)
            .map_err(|e| CompileError::Write {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

impl Default for Transpiler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Transpiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transpiler")
            .field("toolchain", &self.toolchain.name())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// `App.javats` becomes `App.ts`.
fn host_file_name(unit: &SourceUnit) -> String {
    let base = unit.base_name();
    let suffix = format!(".{SOURCE_EXTENSION}");
    format!("{}.ts", base.strip_suffix(&suffix).unwrap_or(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::EmittedFile;
    use async_trait::async_trait;
    use tempfile::TempDir;

    fn unit(path: &str, src: &str) -> SourceUnit {
        javats_syntax::parse_unit(path, src).expect("Failed to parse")
    }

    struct DeclarationsOnly;

    #[async_trait]
    impl Toolchain for DeclarationsOnly {
        fn name(&self) -> &'static str {
            "declarations-only"
        }

        async fn emit(&self, file_name: &str, _source: &str) -> Result<Vec<EmittedFile>, ToolchainError> {
            Ok(vec![EmittedFile {
                path: Path::new(file_name).with_extension("d.ts"),
                text: String::new(),
            }])
        }
    }

    #[tokio::test]
    async fn appends_runner_for_entry_class() {
        let app = unit(
            "App.javats",
            "export class App {\n    public static main(args: string[]): void {\n        console.log(args);\n    }\n}\n",
        );
        let js = Transpiler::new().compile_unit(&app).await.expect("Failed to compile");

        assert!(js.starts_with("\"use strict\";"));
        assert!(js.contains("static main(args) {"));
        assert!(js.trim_end().ends_with(
            "if (typeof require !== 'undefined' && require.main === module) {\n    App.main(process.argv.slice(2));\n}"
        ));
    }

    #[tokio::test]
    async fn first_entry_class_wins() {
        let src = "class First {\n    public static main(): void {}\n}\nclass Second {\n    public static main(): void {}\n}\n";
        let js = Transpiler::new()
            .compile_unit(&unit("First.javats", src))
            .await
            .expect("Failed to compile");

        assert!(js.contains("First.main(process.argv.slice(2));"));
        assert!(!js.contains("Second.main(process.argv"));
    }

    #[tokio::test]
    async fn interface_only_unit_gets_no_runner() {
        let speaker = unit("Speaker.javats", "export interface Speaker {\n    speak(): void;\n}\n");
        let transpiler =
            Transpiler::new().with_options(TransformOptions::default().enforce_main(false));
        let js = transpiler.compile_unit(&speaker).await.expect("Failed to compile");

        assert!(!js.contains("require.main"));
        assert!(!js.contains("interface"));
    }

    #[tokio::test]
    async fn missing_js_artifact_is_a_fault() {
        let app = unit("App.javats", "class App {\n    public static main(): void {}\n}\n");
        let err = Transpiler::new()
            .with_toolchain(DeclarationsOnly)
            .compile_unit(&app)
            .await
            .unwrap_err();

        assert!(matches!(err, CompileError::MissingArtifact { .. }));
        assert_eq!(err.to_string(), "Failed to emit JavaScript for App.javats");
    }

    #[tokio::test]
    async fn rewrite_fault_stops_compile() {
        let app = unit("App.javats", "class App {\n    run(): void {}\n}\n");
        let err = Transpiler::new().compile_unit(&app).await.unwrap_err();
        assert!(matches!(
            err,
            CompileError::Transform(TransformError::MissingModifier { .. })
        ));
    }

    #[tokio::test]
    async fn writes_both_targets() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let app = unit(
            "src/App.javats",
            "export class App {\n    public static main(): void {}\n}\n",
        );
        let transpiler = Transpiler::new();

        let ts = transpiler.transform_file(&app, dir.path()).expect("Failed to write ts");
        let js = transpiler
            .compile_file(&app, dir.path())
            .await
            .expect("Failed to write js");

        assert_eq!(ts, dir.path().join("App.ts"));
        assert_eq!(js, dir.path().join("App.js"));
        assert_eq!(std::fs::read_to_string(&ts).expect("Failed to read"), app.text);
        assert!(std::fs::read_to_string(&js)
            .expect("Failed to read")
            .contains("App.main(process.argv.slice(2));"));
    }
}
