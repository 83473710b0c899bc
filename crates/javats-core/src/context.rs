//! Context types for rule execution.

use crate::model::{InterfaceDecl, SourceUnit};

/// Context provided to per-unit rules.
///
/// Holds the full set of loaded units so that rules such as
/// interface-implementation can resolve names across files. The set is
/// shared read-only and never mutated by rules.
#[derive(Debug, Clone, Copy)]
pub struct UnitContext<'a> {
    /// Every unit loaded for this run, including the one being checked.
    pub loaded: &'a [SourceUnit],
}

impl<'a> UnitContext<'a> {
    /// Creates a new unit context.
    #[must_use]
    pub fn new(loaded: &'a [SourceUnit]) -> Self {
        Self { loaded }
    }

    /// Looks up an interface by name across all loaded units.
    ///
    /// When several units declare the same name, the last one loaded wins.
    #[must_use]
    pub fn find_interface(&self, name: &str) -> Option<&'a InterfaceDecl> {
        self.loaded
            .iter()
            .flat_map(SourceUnit::interfaces)
            .filter(|i| i.name == name)
            .last()
    }
}

/// Context provided to project-wide rules.
#[derive(Debug, Clone, Copy)]
pub struct ProjectContext<'a> {
    /// Accepted units, in input order.
    pub units: &'a [SourceUnit],
}

impl<'a> ProjectContext<'a> {
    /// Creates a new project context.
    #[must_use]
    pub fn new(units: &'a [SourceUnit]) -> Self {
        Self { units }
    }

    /// The first unit, used to attribute diagnostics with no specific location.
    #[must_use]
    pub fn first_unit(&self) -> Option<&'a SourceUnit> {
        self.units.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InterfaceMember, InterfaceMemberKind, Item, Position};

    fn unit_with_interface(path: &str, name: &str, member: &str) -> SourceUnit {
        SourceUnit::new(path, "").with_items(vec![Item::Interface(InterfaceDecl {
            name: name.into(),
            members: vec![InterfaceMember {
                name: member.into(),
                kind: InterfaceMemberKind::Method,
                position: Position::START,
            }],
            ..InterfaceDecl::default()
        })])
    }

    #[test]
    fn test_find_interface_across_units() {
        let units = vec![
            unit_with_interface("Speaker.javats", "Speaker", "speak"),
            SourceUnit::new("Dog.javats", ""),
        ];
        let ctx = UnitContext::new(&units);
        assert!(ctx.find_interface("Speaker").is_some());
        assert!(ctx.find_interface("Walker").is_none());
    }

    #[test]
    fn test_find_interface_last_wins() {
        let units = vec![
            unit_with_interface("a/Speaker.javats", "Speaker", "speak"),
            unit_with_interface("b/Speaker.javats", "Speaker", "talk"),
        ];
        let ctx = UnitContext::new(&units);
        let found = ctx.find_interface("Speaker").map(InterfaceDecl::member_names);
        assert_eq!(found, Some(vec!["talk"]));
    }

    #[test]
    fn test_first_unit() {
        let empty: Vec<SourceUnit> = Vec::new();
        assert!(ProjectContext::new(&empty).first_unit().is_none());
    }
}
