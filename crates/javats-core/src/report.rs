//! Structural summary of a unit, used by `javats inspect`.

use serde::Serialize;

use crate::model::{ClassDecl, InterfaceDecl, InterfaceMemberKind, Modifiers, SourceUnit, Visibility};
use crate::utils::entry::main_method;

/// Accessibility as shown in a structure report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberVisibility {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// No modifier.
    None,
}

impl From<&Modifiers> for MemberVisibility {
    fn from(modifiers: &Modifiers) -> Self {
        match modifiers.visibility {
            Some(Visibility::Public) => Self::Public,
            Some(Visibility::Private) => Self::Private,
            Some(Visibility::Protected) => Self::Protected,
            None => Self::None,
        }
    }
}

/// A method in a structure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    /// Method name.
    pub name: String,
    /// Declared `static`.
    pub is_static: bool,
    /// Declared accessibility.
    pub visibility: MemberVisibility,
    /// Return type annotation, if present.
    pub return_type: Option<String>,
}

/// A property in a structure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    /// Property name.
    pub name: String,
    /// Declared `static`.
    pub is_static: bool,
    /// Declared accessibility.
    pub visibility: MemberVisibility,
    /// Type annotation, if present.
    #[serde(rename = "type")]
    pub type_annotation: Option<String>,
}

/// A class in a structure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    /// Class name (`anonymous` for unnamed default exports).
    pub name: String,
    /// Declared `abstract`.
    pub is_abstract: bool,
    /// Supertype, if any.
    pub extends: Option<String>,
    /// Implemented interface names.
    pub implements: Vec<String>,
    /// Methods in declaration order.
    pub methods: Vec<MethodInfo>,
    /// Properties in declaration order.
    pub properties: Vec<PropertyInfo>,
    /// Declares a method named `main`.
    pub has_main: bool,
    /// That `main` is `static`.
    pub main_is_static: bool,
    /// That `main` is `public`.
    pub main_is_public: bool,
}

impl From<&ClassDecl> for ClassInfo {
    fn from(class: &ClassDecl) -> Self {
        let main = main_method(class);
        Self {
            name: class.display_name().to_string(),
            is_abstract: class.is_abstract,
            extends: class.extends.clone(),
            implements: class.implements.iter().map(|t| t.name.clone()).collect(),
            methods: class
                .methods()
                .map(|m| MethodInfo {
                    name: m.name.clone(),
                    is_static: m.modifiers.is_static,
                    visibility: MemberVisibility::from(&m.modifiers),
                    return_type: m.return_type.clone(),
                })
                .collect(),
            properties: class
                .properties()
                .map(|p| PropertyInfo {
                    name: p.name.clone(),
                    is_static: p.modifiers.is_static,
                    visibility: MemberVisibility::from(&p.modifiers),
                    type_annotation: p.type_annotation.clone(),
                })
                .collect(),
            has_main: main.is_some(),
            main_is_static: main.is_some_and(|m| m.modifiers.is_static),
            main_is_public: main.is_some_and(|m| m.modifiers.is_public()),
        }
    }
}

/// An interface in a structure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceInfo {
    /// Interface name.
    pub name: String,
    /// Method member names.
    pub methods: Vec<String>,
    /// Property member names.
    pub properties: Vec<String>,
}

impl From<&InterfaceDecl> for InterfaceInfo {
    fn from(interface: &InterfaceDecl) -> Self {
        let names = |kind| {
            interface
                .members
                .iter()
                .filter(|m| m.kind == kind)
                .map(|m| m.name.clone())
                .collect()
        };
        Self {
            name: interface.name.clone(),
            methods: names(InterfaceMemberKind::Method),
            properties: names(InterfaceMemberKind::Property),
        }
    }
}

/// Serializable summary of a unit's declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    /// Base name of the unit.
    pub file_name: String,
    /// Classes in declaration order.
    pub classes: Vec<ClassInfo>,
    /// Interfaces in declaration order.
    pub interfaces: Vec<InterfaceInfo>,
    /// Names of top-level functions.
    pub top_level_functions: Vec<String>,
    /// Names of top-level variables.
    pub top_level_variables: Vec<String>,
}

impl StructureReport {
    /// Summarizes a unit.
    #[must_use]
    pub fn from_unit(unit: &SourceUnit) -> Self {
        Self {
            file_name: unit.base_name().to_string(),
            classes: unit.classes().map(ClassInfo::from).collect(),
            interfaces: unit.interfaces().map(InterfaceInfo::from).collect(),
            top_level_functions: unit
                .functions()
                .map(|f| f.name.clone().unwrap_or_else(|| "anonymous".to_string()))
                .collect(),
            top_level_variables: unit
                .variable_statements()
                .flat_map(|s| s.declarations.iter().map(|d| d.name.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ClassMember, InterfaceMember, Item, MethodDecl, Position, PropertyDecl, VariableDecl,
        VariableStatement,
    };

    fn sample_unit() -> SourceUnit {
        let main = MethodDecl {
            name: "main".into(),
            modifiers: Modifiers {
                visibility: Some(Visibility::Public),
                is_static: false,
                ..Modifiers::default()
            },
            return_type: Some("void".into()),
            ..MethodDecl::default()
        };
        let count = PropertyDecl {
            name: "count".into(),
            modifiers: Modifiers {
                visibility: Some(Visibility::Private),
                ..Modifiers::default()
            },
            type_annotation: Some("number".into()),
            ..PropertyDecl::default()
        };
        SourceUnit::new("src/App.javats", "").with_items(vec![
            Item::Class(ClassDecl {
                name: Some("App".into()),
                members: vec![ClassMember::Method(main), ClassMember::Property(count)],
                ..ClassDecl::default()
            }),
            Item::Interface(InterfaceDecl {
                name: "Runner".into(),
                members: vec![
                    InterfaceMember {
                        name: "run".into(),
                        kind: InterfaceMemberKind::Method,
                        position: Position::START,
                    },
                    InterfaceMember {
                        name: "id".into(),
                        kind: InterfaceMemberKind::Property,
                        position: Position::START,
                    },
                ],
                ..InterfaceDecl::default()
            }),
            Item::Variable(VariableStatement {
                declarations: vec![VariableDecl {
                    name: "x".into(),
                    position: Position::START,
                }],
                ..VariableStatement::default()
            }),
        ])
    }

    #[test]
    fn report_summarizes_main() {
        let report = StructureReport::from_unit(&sample_unit());
        assert_eq!(report.file_name, "App.javats");
        let app = &report.classes[0];
        assert!(app.has_main);
        assert!(app.main_is_public);
        assert!(!app.main_is_static);
        assert_eq!(app.properties[0].visibility, MemberVisibility::Private);
        assert_eq!(report.interfaces[0].methods, vec!["run"]);
        assert_eq!(report.interfaces[0].properties, vec!["id"]);
        assert_eq!(report.top_level_variables, vec!["x"]);
    }

    #[test]
    fn report_serializes_camel_case() {
        let json = serde_json::to_value(StructureReport::from_unit(&sample_unit())).unwrap();
        assert_eq!(json["fileName"], "App.javats");
        assert_eq!(json["classes"][0]["mainIsPublic"], true);
        assert_eq!(json["classes"][0]["properties"][0]["type"], "number");
        assert_eq!(json["classes"][0]["methods"][0]["visibility"], "public");
    }
}
