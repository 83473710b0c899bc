//! Rule requiring syntactic type annotations.
//!
//! No inference is attempted: an absent annotation is always reported, even
//! when the type is obvious from an initializer.

use javats_core::{ClassMember, Diagnostic, Location, SourceUnit, UnitContext, UnitRule};

/// Rule code for explicit-typing.
pub const CODE: &str = "JT007";

/// Rule name for explicit-typing.
pub const NAME: &str = "explicit-typing";

/// Requires return types, parameter types and property types.
#[derive(Debug, Clone, Default)]
pub struct ExplicitTyping;

impl ExplicitTyping {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for ExplicitTyping {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires explicit return, parameter and property types"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let at = |position| Location::at(unit.path(), position);

        for class in unit.classes() {
            for member in &class.members {
                match member {
                    ClassMember::Method(method) => {
                        if method.return_type.is_none() {
                            diagnostics.push(Diagnostic::new(
                                CODE,
                                NAME,
                                at(method.position),
                                format!(
                                    "Method '{}' must have an explicit return type",
                                    method.name
                                ),
                            ));
                        }
                        for parameter in &method.parameters {
                            if parameter.type_annotation.is_none() {
                                diagnostics.push(Diagnostic::new(
                                    CODE,
                                    NAME,
                                    at(parameter.position),
                                    format!(
                                        "Parameter '{}' in method '{}' must have an explicit type",
                                        parameter.name, method.name
                                    ),
                                ));
                            }
                        }
                    }
                    ClassMember::Property(property) if property.type_annotation.is_none() => {
                        diagnostics.push(Diagnostic::new(
                            CODE,
                            NAME,
                            at(property.position),
                            format!("Property '{}' must have an explicit type", property.name),
                        ));
                    }
                    _ => {}
                }
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
        ExplicitTyping::new().check(&UnitContext::new(std::slice::from_ref(&unit)), &unit)
    }

    #[test]
    fn test_detects_missing_annotations() {
        let diagnostics = check_code(
            r"
class Calc {
    private total = 0;
    public add(x, y: number) { return x + y; }
}
",
        );
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Property 'total' must have an explicit type",
                "Method 'add' must have an explicit return type",
                "Parameter 'x' in method 'add' must have an explicit type",
            ]
        );
    }

    #[test]
    fn test_accepts_fully_typed_class() {
        let diagnostics = check_code(
            r"
class Calc {
    private total: number = 0;
    public add(x: number, ...rest: number[]): number { return x; }
    public static main(args: string[]): void {}
}
",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_abstract_signature_checked() {
        let diagnostics = check_code("abstract class Shape {\n    public abstract area();\n}\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'area'"));
    }

    #[test]
    fn test_overload_signatures_checked() {
        let diagnostics = check_code(
            r"
class Parser {
    public parse(text): number;
    public parse(text: string, radix: number);
    public parse(text: string, radix?: number): number { return 0; }
}
",
        );
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Parameter 'text' in method 'parse' must have an explicit type",
                "Method 'parse' must have an explicit return type",
            ]
        );
    }
}
