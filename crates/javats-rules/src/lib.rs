//! # javats-rules
//!
//! Built-in dialect rules for JavaTS.
//!
//! ## Available Rules
//!
//! | Code | Name | Scope | Description |
//! |------|------|-------|-------------|
//! | JT001 | `no-procedural-code` | unit | Forbids top-level functions and variables |
//! | JT002 | `require-type` | unit | Requires at least one class, interface, enum or type alias |
//! | JT003 | `require-class` | unit | Requires at least one class (legacy) |
//! | JT004 | `single-public-class` | unit | One exported class per file, named after the file |
//! | JT005 | `naming-convention` | unit | PascalCase types, camelCase members, UPPER_SNAKE_CASE constants |
//! | JT006 | `require-modifiers` | unit | Explicit visibility on methods and properties |
//! | JT007 | `explicit-typing` | unit | Explicit return, parameter and property types |
//! | JT008 | `main-modifier` | unit | `main()` must be public and static |
//! | JT009 | `main-method` | unit | Each file declares `public static main()` (legacy) |
//! | JT010 | `project-main-method` | project | Some file declares `public static main()` |
//! | JT011 | `interface-implementation` | unit | Classes declare every member of their interfaces |
//!
//! ## Usage
//!
//! ```ignore
//! use javats_core::Validator;
//! use javats_rules::Preset;
//!
//! let validator = Validator::new(Preset::Mature.rules());
//! let report = validator.validate_all(&units);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod explicit_typing;
mod interface_implementation;
mod main_method;
mod naming_convention;
mod no_procedural_code;
mod presets;
mod require_modifiers;
mod require_type;
mod single_public_class;

pub use explicit_typing::ExplicitTyping;
pub use interface_implementation::InterfaceImplementation;
pub use main_method::{MainMethod, MainModifier, ProjectMainMethod};
pub use naming_convention::NamingConvention;
pub use no_procedural_code::NoProceduralCode;
pub use presets::{all_rules, legacy_rules, mature_rules, Preset};
pub use require_modifiers::RequireModifiers;
pub use require_type::{RequireClass, RequireType};
pub use single_public_class::SinglePublicClass;

/// Re-export core types for convenience.
pub use javats_core::{Diagnostic, ProjectRule, RuleKind, RuleSet, UnitRule};
