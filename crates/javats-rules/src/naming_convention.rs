//! Rule enforcing Java-style identifier casing.
//!
//! | Declaration | Expected case |
//! |-------------|---------------|
//! | class, interface, enum | `PascalCase` |
//! | method | `camelCase` |
//! | `static readonly` property | `UPPER_SNAKE_CASE` |
//! | any other property | `camelCase` |
//!
//! A property that is only `static` or only `readonly` is not a constant.

use javats_core::utils::naming::{
    is_camel_case, is_pascal_case, is_upper_snake_case, to_camel_case, to_pascal_case,
    to_upper_snake_case,
};
use javats_core::{Diagnostic, Location, Position, SourceUnit, Suggestion, UnitContext, UnitRule};

/// Rule code for naming-convention.
pub const CODE: &str = "JT005";

/// Rule name for naming-convention.
pub const NAME: &str = "naming-convention";

/// Checks type, method and property name casing.
#[derive(Debug, Clone, Default)]
pub struct NamingConvention;

impl NamingConvention {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn report(unit: &SourceUnit, position: Position, message: String, fixed: String) -> Diagnostic {
    Diagnostic::new(CODE, NAME, Location::at(unit.path(), position), message)
        .with_suggestion(Suggestion::new(format!("Rename to '{fixed}'")))
}

impl UnitRule for NamingConvention {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces PascalCase types, camelCase members and UPPER_SNAKE_CASE constants"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut check_type = |name: &str, position: Position| {
            if !is_pascal_case(name) {
                diagnostics.push(report(
                    unit,
                    position,
                    format!("Type name '{name}' must be in PascalCase."),
                    to_pascal_case(name),
                ));
            }
        };

        for class in unit.classes() {
            if let Some(name) = &class.name {
                check_type(name, class.name_position);
            }
        }
        for interface in unit.interfaces() {
            check_type(&interface.name, interface.position);
        }
        for enumeration in unit.enums() {
            check_type(&enumeration.name, enumeration.position);
        }

        for class in unit.classes() {
            for method in class.methods() {
                let name = method.name.trim_start_matches('#');
                if !is_camel_case(name) {
                    diagnostics.push(report(
                        unit,
                        method.name_position,
                        format!("Method name '{name}' must be in camelCase."),
                        to_camel_case(name),
                    ));
                }
            }

            for property in class.properties() {
                let name = property.name.trim_start_matches('#');
                if property.is_constant() {
                    if !is_upper_snake_case(name) {
                        diagnostics.push(report(
                            unit,
                            property.name_position,
                            format!("Constant '{name}' must be in UPPER_SNAKE_CASE."),
                            to_upper_snake_case(name),
                        ));
                    }
                } else if !is_camel_case(name) {
                    diagnostics.push(report(
                        unit,
                        property.name_position,
                        format!("Property name '{name}' must be in camelCase."),
                        to_camel_case(name),
                    ));
                }
            }
        }

        diagnostics
    }
}
