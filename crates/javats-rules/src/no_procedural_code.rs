//! Rule forbidding top-level functions and variables.
//!
//! Every piece of behavior and state in a JavaTS unit lives inside a class.
//!
//! # Detected Patterns
//!
//! ```ignore
//! function helper(): void {}
//! const limit = 10;
//! ```
//!
//! # Good Patterns
//!
//! ```ignore
//! class Helper {
//!     public static readonly LIMIT: number = 10;
//!     public static help(): void {}
//! }
//! ```

use javats_core::{Diagnostic, Location, SourceUnit, UnitContext, UnitRule};

/// Rule code for no-procedural-code.
pub const CODE: &str = "JT001";

/// Rule name for no-procedural-code.
pub const NAME: &str = "no-procedural-code";

/// Flags every top-level function and variable declaration.
#[derive(Debug, Clone, Default)]
pub struct NoProceduralCode;

impl NoProceduralCode {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for NoProceduralCode {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids top-level functions and variables"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for function in unit.functions() {
            diagnostics.push(Diagnostic::new(
                CODE,
                NAME,
                Location::at(unit.path(), function.position),
                format!(
                    "Function '{}' must be declared inside a class",
                    function.name.as_deref().unwrap_or("anonymous")
                ),
            ));
        }

        for statement in unit.variable_statements() {
            for declaration in &statement.declarations {
                diagnostics.push(Diagnostic::new(
                    CODE,
                    NAME,
                    Location::at(unit.path(), declaration.position),
                    format!(
                        "Variable '{}' must be declared inside a class",
                        declaration.name
                    ),
                ));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_code(code: &str) -> Vec<Diagnostic> {
        let unit = javats_syntax::parse_unit("Test.javats", code).expect("Failed to parse");
        NoProceduralCode::new().check(&UnitContext::new(std::slice::from_ref(&unit)), &unit)
    }

    #[test]
    fn test_detects_function() {
        let diagnostics = check_code("function helper(): void {}\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert!(diagnostics[0]
            .message
            .contains("must be declared inside a class"));
        assert!(diagnostics[0].message.contains("'helper'"));
    }

    #[test]
    fn test_detects_each_variable() {
        let diagnostics = check_code("let a = 1, b = 2;\nexport const c = 3;\n");
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics[2].location.line, 2);
        assert!(diagnostics[2].message.starts_with("Variable 'c'"));
    }

    #[test]
    fn test_allows_types_only() {
        let diagnostics = check_code(
            r"
interface Speaker { speak(): void; }
enum Color { Red }
class Dog implements Speaker {
    public speak(): void {}
}
",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_anonymous_default_function() {
        let diagnostics = check_code("export default function () {}\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'anonymous'"));
    }
}
