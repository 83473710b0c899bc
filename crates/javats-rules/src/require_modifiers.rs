//! Rule requiring an explicit access modifier on every method and property.
//!
//! Constructors and accessors are not checked.

use javats_core::{
    ClassMember, Diagnostic, Location, Modifiers, Position, SourceUnit, Suggestion, UnitContext, UnitRule,
};

/// Rule code for require-modifiers.
pub const CODE: &str = "JT006";

/// Rule name for require-modifiers.
pub const NAME: &str = "require-modifiers";

/// Requires `public`, `private` or `protected` on methods and properties.
#[derive(Debug, Clone, Default)]
pub struct RequireModifiers;

impl RequireModifiers {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn missing(
    unit: &SourceUnit,
    kind: &str,
    name: &str,
    modifiers: &Modifiers,
    position: Position,
) -> Option<Diagnostic> {
    if modifiers.visibility.is_some() {
        return None;
    }
    Some(
        Diagnostic::new(
            CODE,
            NAME,
            Location::at(unit.path(), position),
            format!(
                "{kind} '{name}' must have a visibility modifier (public, private, or protected)"
            ),
        )
        .with_suggestion(Suggestion::new(format!("Add 'public' or 'private' to '{name}'"))),
    )
}

impl UnitRule for RequireModifiers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires explicit visibility on methods and properties"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for class in unit.classes() {
            diagnostics.extend(class.members.iter().filter_map(|member| match member {
                ClassMember::Method(m) => {
                    missing(unit, "Method", &m.name, &m.modifiers, m.position)
                }
                ClassMember::Property(p) => {
                    missing(unit, "Property", &p.name, &p.modifiers, p.position)
                }
                ClassMember::Constructor(_) | ClassMember::Accessor(_) => None,
            }));
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_code(code: &str) -> Vec<Diagnostic> {
        let unit = javats_syntax::parse_unit("Test.javats", code).expect("Failed to parse");
        RequireModifiers::new().check(&UnitContext::new(std::slice::from_ref(&unit)), &unit)
    }

    #[test]
    fn test_detects_missing_modifiers() {
        let diagnostics = check_code(
            r"
class Account {
    balance: number = 0;
    deposit(amount: number): void {}
}
",
        );
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.starts_with("Property 'balance'"));
        assert!(diagnostics[1].message.starts_with("Method 'deposit'"));
        assert_eq!(diagnostics[1].location.line, 4);
    }

    #[test]
    fn test_accepts_all_visibilities() {
        let diagnostics = check_code(
            r"
class Account {
    private balance: number = 0;
    protected owner: string = '';
    public static create(): Account { return new Account(); }
}
",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_constructor_and_accessors() {
        let diagnostics = check_code(
            r"
class Box {
    private inner: number = 0;
    constructor() {}
    get value(): number { return this.inner; }
}
",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_checks_overload_signatures() {
        let diagnostics = check_code(
            r"
class Parser {
    parse(text: string): number;
    public parse(text: string, radix: number): number;
    public parse(text: string, radix?: number): number { return 0; }
}
",
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("Method 'parse'"));
        assert_eq!(diagnostics[0].location.line, 3);
    }
}
