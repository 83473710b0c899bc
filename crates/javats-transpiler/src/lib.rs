//! # javats-transpiler
//!
//! Validate-then-emit pipeline for JavaTS.
//!
//! - [`transform_to_host_source`] re-checks a validated unit and returns its
//!   TypeScript text
//! - [`Transpiler`] writes `.ts` rewrites and compiles `.js` through a
//!   [`Toolchain`], appending an entry runner for the first entry class
//! - [`Pipeline`] runs unit rules, project rules and emission over a batch
//!
//! ## Example
//!
//! ```ignore
//! use javats_transpiler::{BuildTargets, Pipeline, Transpiler};
//!
//! let pipeline = Pipeline::new(validator, Transpiler::new());
//! let report = pipeline.build(&units, Path::new("dist"), BuildTargets::default()).await;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compile;
mod main_runner;
mod output;
mod pipeline;
mod rewrite;
mod toolchain;

pub use compile::{CompileError, Transpiler};
pub use main_runner::{append_main_runner, main_runner};
pub use output::{derive_output_path, OutputWriter};
pub use pipeline::{BuildReport, BuildTargets, Pipeline, UnitFault};
pub use rewrite::{transform_to_host_source, TransformError, TransformOptions};
pub use toolchain::{EmittedFile, Toolchain, ToolchainError, TreeSitterToolchain};
