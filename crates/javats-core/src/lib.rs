//! # javats-core
//!
//! Core framework for validating JavaTS, a Java-flavored subset of
//! TypeScript stored in `.javats` files.
//!
//! This crate provides the foundational types shared by the rule catalogue,
//! the syntax front end and the transpiler:
//!
//! - the syntax model ([`SourceUnit`], [`ClassDecl`], ...) that rules observe
//! - [`UnitRule`] and [`ProjectRule`] traits, tagged by [`RuleKind`]
//! - [`Validator`] for running an ordered [`RuleSet`]
//! - [`Diagnostic`] for representing rule violations
//!
//! ## Example
//!
//! ```ignore
//! use javats_core::{RuleKind, RuleSet, Validator};
//!
//! let validator = Validator::builder()
//!     .rule(RuleKind::unit(MyRule::new()))
//!     .build();
//!
//! let diagnostics = validator.validate_unit(&unit);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod model;
mod report;
mod rule;
mod types;
mod validator;

/// Helpers shared by rules and the transpiler.
pub mod utils;

pub use config::{BuildConfig, Config, ConfigError, RuleConfig};
pub use context::{ProjectContext, UnitContext};
pub use model::{
    AccessorDecl, AccessorKind, ClassDecl, ClassMember, ConstructorDecl, EnumDecl, FunctionDecl,
    InterfaceDecl, InterfaceMember, InterfaceMemberKind, Item, MethodDecl, Modifiers, Parameter,
    Position, PropertyDecl, SourceUnit, TypeAliasDecl, TypeRef, VariableDecl, VariableStatement,
    Visibility,
};
pub use report::{ClassInfo, InterfaceInfo, MemberVisibility, MethodInfo, PropertyInfo, StructureReport};
pub use rule::{ProjectRule, ProjectRuleBox, RuleKind, RuleScope, RuleSet, UnitRule, UnitRuleBox};
pub use types::{Diagnostic, DiagnosticReport, Location, Suggestion, ValidationReport};
pub use validator::{Validator, ValidatorBuilder};

/// File extension of JavaTS source units, without the leading dot.
pub const SOURCE_EXTENSION: &str = "javats";
