//! # javats
//!
//! Validator and build pipeline for JavaTS, a Java-flavored subset of
//! TypeScript.
//!
//! This is the facade crate that re-exports the core, the rule catalogue, the
//! syntax front end and the transpiler, and wires presets and configuration
//! into a ready [`Pipeline`](transpiler::Pipeline).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use javats::{rules::Preset, Config};
//!
//! let units = vec![javats::syntax::load_unit(Path::new("src/App.javats"))?];
//! let pipeline = javats::pipeline(Preset::Mature, Config::default());
//! let report = pipeline.build(&units, Path::new("dist"), Default::default()).await;
//! assert!(report.is_success());
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use javats_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use javats_rules::*;
}

/// Tree-sitter front end and JavaScript emitter.
pub mod syntax {
    pub use javats_syntax::*;
}

/// Rewrite, compile and batch build stages.
pub mod transpiler {
    pub use javats_transpiler::*;
}

mod runner;

pub use runner::{pipeline, resolve_preset, transform_options, validator};
