//! Rules around the `main` entry point.
//!
//! - [`MainModifier`] checks the modifiers of a declared `main`.
//! - [`MainMethod`] requires an entry class in each unit (legacy catalogue).
//! - [`ProjectMainMethod`] requires an entry class somewhere in the accepted
//!   units (mature catalogue).
//!
//! The two presence rules use the same entry predicate as the compile stage:
//! a method named `main` that is both `public` and `static`.

use javats_core::utils::entry::{declares_entry_point, main_method};
use javats_core::{
    Diagnostic, Location, ProjectContext, ProjectRule, SourceUnit, UnitContext, UnitRule,
};
use std::path::PathBuf;

/// Rule code for main-modifier.
pub const MODIFIER_CODE: &str = "JT008";

/// Rule name for main-modifier.
pub const MODIFIER_NAME: &str = "main-modifier";

/// Rule code for the per-unit main-method rule.
pub const CODE: &str = "JT009";

/// Rule name for the per-unit main-method rule.
pub const NAME: &str = "main-method";

/// Rule code for the project main-method rule.
pub const PROJECT_CODE: &str = "JT010";

/// Rule name for the project main-method rule.
pub const PROJECT_NAME: &str = "project-main-method";

/// Requires a declared `main` to be both `public` and `static`.
#[derive(Debug, Clone, Default)]
pub struct MainModifier;

impl MainModifier {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for MainModifier {
    fn name(&self) -> &'static str {
        MODIFIER_NAME
    }

    fn code(&self) -> &'static str {
        MODIFIER_CODE
    }

    fn description(&self) -> &'static str {
        "Requires main() to be public and static"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for main in unit.classes().filter_map(main_method) {
            let location = Location::at(unit.path(), main.position);
            if !main.modifiers.is_public() {
                diagnostics.push(Diagnostic::new(
                    MODIFIER_CODE,
                    MODIFIER_NAME,
                    location.clone(),
                    "main() method must be declared as public",
                ));
            }
            if !main.modifiers.is_static {
                diagnostics.push(Diagnostic::new(
                    MODIFIER_CODE,
                    MODIFIER_NAME,
                    location,
                    "main() method must be declared as static",
                ));
            }
        }

        diagnostics
    }
}

/// Requires every unit to declare an entry class.
#[derive(Debug, Clone, Default)]
pub struct MainMethod;

impl MainMethod {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRule for MainMethod {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires each file to declare a public static main()"
    }

    fn check(&self, _ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic> {
        if declares_entry_point(unit) {
            return Vec::new();
        }
        vec![Diagnostic::new(
            CODE,
            NAME,
            Location::unit_start(unit.path()),
            "At least one class must define a main() method",
        )]
    }
}

/// Requires some accepted unit to declare an entry class.
#[derive(Debug, Clone, Default)]
pub struct ProjectMainMethod;

impl ProjectMainMethod {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProjectRule for ProjectMainMethod {
    fn name(&self) -> &'static str {
        PROJECT_NAME
    }

    fn code(&self) -> &'static str {
        PROJECT_CODE
    }

    fn description(&self) -> &'static str {
        "Requires the project to declare a public static main()"
    }

    fn check_project(&self, ctx: &ProjectContext<'_>) -> Vec<Diagnostic> {
        if ctx.units.iter().any(declares_entry_point) {
            return Vec::new();
        }

        let file = ctx
            .first_unit()
            .map_or_else(PathBuf::new, |u| u.path.clone());
        vec![Diagnostic::new(
            PROJECT_CODE,
            PROJECT_NAME,
            Location::unit_start(&file),
            "The project must declare at least one main() method.",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(file: &str, code: &str) -> SourceUnit {
        javats_syntax::parse_unit(file, code).expect("Failed to parse")
    }

    fn check_with(rule: &dyn UnitRule, code: &str) -> Vec<Diagnostic> {
        let unit = parse("App.javats", code);
        rule.check(&UnitContext::new(std::slice::from_ref(&unit)), &unit)
    }

    #[test]
    fn test_modifier_reports_both_independently() {
        let diagnostics = check_with(&MainModifier, "class App {\n    main(): void {}\n}\n");
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("public"));
        assert!(diagnostics[1].message.contains("static"));
        assert_eq!(diagnostics[0].location.line, 2);
    }

    #[test]
    fn test_modifier_ignores_classes_without_main() {
        assert!(check_with(&MainModifier, "class App {\n    public run(): void {}\n}\n").is_empty());
    }

    #[test]
    fn test_modifier_accepts_entry_point() {
        let code = "class App {\n    public static main(args: string[]): void {}\n}\n";
        assert!(check_with(&MainModifier, code).is_empty());
    }

    #[test]
    fn test_unit_main_requires_public_static() {
        let missing = check_with(&MainMethod, "class App {\n    public main(): void {}\n}\n");
        assert_eq!(missing.len(), 1);
        assert_eq!((missing[0].location.line, missing[0].location.column), (1, 1));

        let code = "class App {\n    public static main(args: string[]): void {}\n}\n";
        assert!(check_with(&MainMethod, code).is_empty());
    }

    #[test]
    fn test_project_main_found_in_any_unit() {
        let units = vec![
            parse("Util.javats", "class Util {}\n"),
            parse(
                "App.javats",
                "class App {\n    public static main(args: string[]): void {}\n}\n",
            ),
        ];
        assert!(ProjectMainMethod
            .check_project(&ProjectContext::new(&units))
            .is_empty());
    }

    #[test]
    fn test_project_main_missing_attributed_to_first_unit() {
        let units = vec![parse("Util.javats", "class Util {}\n"), parse("B.javats", "class B {}\n")];
        let diagnostics = ProjectMainMethod.check_project(&ProjectContext::new(&units));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.file, PathBuf::from("Util.javats"));
    }

    #[test]
    fn test_project_main_with_no_units() {
        let diagnostics = ProjectMainMethod.check_project(&ProjectContext::new(&[]));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.file, PathBuf::new());
        assert_eq!(diagnostics[0].location.line, 1);
    }
}
