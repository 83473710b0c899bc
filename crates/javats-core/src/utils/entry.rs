//! Entry-point detection.
//!
//! A class is an entry class when it declares a method named `main` that is
//! both `public` and `static`. Every consumer (the main-method rules, the
//! rewrite re-check and the compile stage) goes through these helpers so the
//! predicate cannot diverge.

use crate::model::{ClassDecl, MethodDecl, SourceUnit};

/// The first method named `main`, whatever its modifiers.
#[must_use]
pub fn main_method(class: &ClassDecl) -> Option<&MethodDecl> {
    class.methods().find(|m| m.name == "main")
}

/// True if the class declares a `public static main` method.
#[must_use]
pub fn is_entry_class(class: &ClassDecl) -> bool {
    class.static_methods().any(MethodDecl::is_entry_point)
}

/// True if any class of the unit is an entry class.
#[must_use]
pub fn declares_entry_point(unit: &SourceUnit) -> bool {
    unit.classes().any(is_entry_class)
}

/// First named entry class of the unit, in declaration order.
///
/// When several classes qualify the first one declared wins; no ambiguity is
/// reported.
#[must_use]
pub fn find_entry_class(unit: &SourceUnit) -> Option<&ClassDecl> {
    unit.classes()
        .filter(|c| c.name.is_some())
        .find(|c| is_entry_class(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassMember, Item, Modifiers, Visibility};

    fn main_decl(visibility: Option<Visibility>, is_static: bool) -> ClassMember {
        ClassMember::Method(MethodDecl {
            name: "main".into(),
            modifiers: Modifiers {
                visibility,
                is_static,
                ..Modifiers::default()
            },
            ..MethodDecl::default()
        })
    }

    fn class(name: &str, members: Vec<ClassMember>) -> Item {
        Item::Class(ClassDecl {
            name: Some(name.into()),
            members,
            ..ClassDecl::default()
        })
    }

    #[test]
    fn first_entry_class_wins() {
        let unit = SourceUnit::new("App.javats", "").with_items(vec![
            class("Helper", vec![main_decl(Some(Visibility::Private), true)]),
            class("First", vec![main_decl(Some(Visibility::Public), true)]),
            class("Second", vec![main_decl(Some(Visibility::Public), true)]),
        ]);
        let entry = find_entry_class(&unit).and_then(|c| c.name.as_deref());
        assert_eq!(entry, Some("First"));
        assert!(declares_entry_point(&unit));
    }

    #[test]
    fn non_static_main_is_not_entry() {
        let unit = SourceUnit::new("App.javats", "")
            .with_items(vec![class("App", vec![main_decl(Some(Visibility::Public), false)])]);
        assert!(find_entry_class(&unit).is_none());
        assert!(!declares_entry_point(&unit));
    }

    #[test]
    fn main_method_ignores_modifiers() {
        let decl = ClassDecl {
            members: vec![main_decl(None, false)],
            ..ClassDecl::default()
        };
        assert!(main_method(&decl).is_some());
        assert!(!is_entry_class(&decl));
    }
}
