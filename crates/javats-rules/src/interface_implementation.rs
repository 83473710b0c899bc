//! Rule checking that classes provide every member of their interfaces.
//!
//! Interfaces are resolved by name across all loaded units. Members are
//! matched by name only. An interface that cannot be resolved is treated as
//! an external type and skipped.

use javats_core::{Diagnostic, Location, SourceUnit, Suggestion, UnitContext, UnitRule};
use tracing::debug;

/// Rule code for interface-implementation.
pub const CODE: &str = "JT011";

/// Rule name for interface-implementation.
pub const NAME: &str = "interface-implementation";

/// Requires implemented interface members to be present on the class.
#[derive(Debug, Clone, Default)]
pub struct InterfaceImplementation;

impl InterfaceImplementation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for InterfaceImplementation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires classes to declare every member of implemented interfaces"
    }

    fn check(&self, ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for class in unit.classes() {
            for reference in &class.implements {
                let Some(interface) = ctx.find_interface(&reference.name) else {
                    debug!("Skipping unresolved interface: {}", reference.name);
                    continue;
                };

                for member in interface.member_names() {
                    if class.has_member(member) {
                        continue;
                    }
                    diagnostics.push(
                        Diagnostic::new(
                            CODE,
                            NAME,
                            Location::at(unit.path(), class.position),
                            format!(
                                "Class '{}' is missing '{member}' required by interface '{}'.",
                                class.display_name(),
                                interface.name
                            ),
                        )
                        .with_suggestion(Suggestion::new(format!(
                            "Declare '{member}' in '{}'",
                            class.display_name()
                        ))),
                    );
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(file: &str, code: &str) -> SourceUnit {
        javats_syntax::parse_unit(file, code).expect("Failed to parse")
    }

    fn check_in(units: &[SourceUnit], index: usize) -> Vec<Diagnostic> {
        InterfaceImplementation::new().check(&UnitContext::new(units), &units[index])
    }

    #[test]
    fn test_missing_member_names_class_and_member() {
        let units = vec![parse(
            "Impl.javats",
            r"
interface Speaker { speak(): void; }
class Impl implements Speaker {}
",
        )];
        let diagnostics = check_in(&units, 0);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'Impl'"));
        assert!(diagnostics[0].message.contains("'speak'"));
        assert_eq!(diagnostics[0].location.line, 3);
    }

    #[test]
    fn test_any_visibility_satisfies() {
        let units = vec![parse(
            "Impl.javats",
            r"
interface Speaker { speak(): void; volume: number; }
class Impl implements Speaker {
    private speak(): void {}
    protected volume: number = 1;
}
",
        )];
        assert!(check_in(&units, 0).is_empty());
    }

    #[test]
    fn test_resolves_across_units() {
        let units = vec![
            parse("Speaker.javats", "export interface Speaker { speak(): void; }\n"),
            parse(
                "Dog.javats",
                "import { Speaker } from './Speaker.javats';\nexport class Dog implements Speaker {}\n",
            ),
        ];
        let diagnostics = check_in(&units, 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.line, 2);
    }

    #[test]
    fn test_unresolved_interface_skipped() {
        let units = vec![parse("Dog.javats", "class Dog implements Walker {}\n")];
        assert!(check_in(&units, 0).is_empty());
    }

    #[test]
    fn test_generic_interface_resolved_by_name() {
        let units = vec![parse(
            "Box.javats",
            r"
interface Container<T> { get(): T; }
class Box implements Container<number> {
    public get(): number { return 1; }
}
",
        )];
        assert!(check_in(&units, 0).is_empty());
    }
}
