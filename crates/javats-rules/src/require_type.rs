//! Rules requiring a unit to declare at least one type.
//!
//! [`RequireType`] accepts any class, interface, enum or type alias and is
//! part of the mature catalogue. [`RequireClass`] only accepts classes and
//! belongs to the legacy catalogue. The two are never registered together.

use javats_core::{Diagnostic, Location, SourceUnit, UnitContext, UnitRule};

/// Rule code for require-type.
pub const CODE: &str = "JT002";

/// Rule name for require-type.
pub const NAME: &str = "require-type";

/// Rule code for require-class.
pub const CLASS_CODE: &str = "JT003";

/// Rule name for require-class.
pub const CLASS_NAME: &str = "require-class";

/// Requires at least one class, interface, enum or type alias.
#[derive(Debug, Clone, Default)]
pub struct RequireType;

impl RequireType {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for RequireType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires each file to declare at least one type"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        if unit.declares_type() {
            return Vec::new();
        }
        vec![Diagnostic::new(
            CODE,
            NAME,
            Location::unit_start(unit.path()),
            "File must declare at least one type (class, interface, enum or type alias).",
        )]
    }
}

/// Requires at least one class.
#[derive(Debug, Clone, Default)]
pub struct RequireClass;

impl RequireClass {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for RequireClass {
    fn name(&self) -> &'static str {
        CLASS_NAME
    }

    fn code(&self) -> &'static str {
        CLASS_CODE
    }

    fn description(&self) -> &'static str {
        "Requires each file to declare at least one class"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        if unit.classes().next().is_some() {
            return Vec::new();
        }
        vec![Diagnostic::new(
            CLASS_CODE,
            CLASS_NAME,
            Location::unit_start(unit.path()),
            "File must contain at least one class",
        )]
    }
}
