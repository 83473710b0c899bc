//! Rule limiting a unit to one exported class whose name matches the file.
//!
//! # Detected Patterns
//!
//! ```ignore
//! // Shapes.javats
//! export class Circle {}
//! export class Square {}   // second exported class
//! ```
//!
//! A single exported class `Circle` must live in `Circle.javats`.

use javats_core::{
    Diagnostic, Location, SourceUnit, Suggestion, UnitContext, UnitRule, SOURCE_EXTENSION,
};

/// Rule code for single-public-class.
pub const CODE: &str = "JT004";

/// Rule name for single-public-class.
pub const NAME: &str = "single-public-class";

/// Allows at most one exported class per unit, named after the file.
#[derive(Debug, Clone, Default)]
pub struct SinglePublicClass;

impl SinglePublicClass {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for SinglePublicClass {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows one exported class per file, named after the file"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        let exported: Vec<_> = unit.classes().filter(|c| c.exported).collect();

        if exported.len() > 1 {
            return exported[1..]
                .iter()
                .map(|class| {
                    Diagnostic::new(
                        CODE,
                        NAME,
                        Location::at(unit.path(), class.position),
                        format!(
                            "Class '{}' is exported, but a file may declare only one exported class.",
                            class.display_name()
                        ),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Move '{}' into its own file",
                        class.display_name()
                    )))
                })
                .collect();
        }

        let Some(name) = exported.first().and_then(|c| c.name.as_deref()) else {
            return Vec::new();
        };

        let expected = format!("{name}.{SOURCE_EXTENSION}");
        if unit.base_name() == expected {
            return Vec::new();
        }

        vec![Diagnostic::new(
            CODE,
            NAME,
            Location::at(unit.path(), exported[0].position),
            format!("File name must match the exported class: expected '{expected}'."),
        )
        .with_suggestion(Suggestion::new(format!("Rename the file to '{expected}'")))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_code(file: &str, code: &str) -> Vec<Diagnostic> {
        let unit = javats_syntax::parse_unit(file, code).expect("Failed to parse");
        SinglePublicClass::new().check(&UnitContext::new(std::slice::from_ref(&unit)), &unit)
    }

    #[test]
    fn test_second_export_flagged_regardless_of_file_name() {
        for file in ["A.javats", "Other.javats"] {
            let diagnostics = check_code(file, "export class A {}\nexport class B {}\n");
            assert_eq!(diagnostics.len(), 1);
            assert!(diagnostics[0].message.contains("'B'"));
            assert_eq!(diagnostics[0].location.line, 2);
        }
    }

    #[test]
    fn test_each_extra_export_flagged() {
        let diagnostics = check_code(
            "A.javats",
            "export class A {}\nexport class B {}\nexport class C {}\n",
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_file_name_mismatch() {
        let diagnostics = check_code("src/Foo.javats", "export class Bar {}\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'Bar.javats'"));
    }

    #[test]
    fn test_file_name_match() {
        assert!(check_code("src/Bar.javats", "export class Bar {}\n").is_empty());
    }

    #[test]
    fn test_unexported_classes_ignored() {
        assert!(check_code("Main.javats", "class A {}\nclass B {}\n").is_empty());
    }

    #[test]
    fn test_anonymous_default_export_skips_name_check() {
        assert!(check_code("Main.javats", "export default class {}\n").is_empty());
    }
}
