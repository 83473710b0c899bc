//! TypeScript extractor using Tree-sitter.
//!
//! JavaTS is syntactically TypeScript, so the stock TypeScript grammar is
//! used and the tree is folded into the declaration model.

use std::path::Path;
use tree_sitter::{Language, Node, Parser};
use tracing::debug;

use javats_core::{
    AccessorDecl, AccessorKind, ClassDecl, ClassMember, ConstructorDecl, EnumDecl, FunctionDecl,
    InterfaceDecl, InterfaceMember, InterfaceMemberKind, Item, MethodDecl, Modifiers, Parameter,
    Position, PropertyDecl, SourceUnit, TypeAliasDecl, TypeRef, VariableDecl, VariableStatement,
    Visibility,
};

use crate::extractor::{ParseError, UnitExtractor};

/// Extracts classes, interfaces and top-level statements from JavaTS source.
pub struct TypeScriptExtractor {
    language: Language,
}

/// Where a top-level declaration sits: its outer start and export flag.
#[derive(Clone, Copy)]
struct Site {
    position: Position,
    exported: bool,
}

impl TypeScriptExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Returns the TypeScript grammar.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        node.utf8_text(src).unwrap_or("")
    }

    fn position(node: &Node<'_>) -> Position {
        let point = node.start_position();
        Position::new(point.row + 1, point.column + 1)
    }

    /// Text of a `type_annotation`-like node without the leading colon.
    fn annotation(node: Option<Node<'_>>, src: &[u8]) -> Option<String> {
        node.map(|n| {
            let text = Self::text(&n, src);
            text.strip_prefix(':').unwrap_or(text).trim().to_owned()
        })
    }

    fn has_token(node: &Node<'_>, token: &str) -> bool {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .any(|c| !c.is_named() && c.kind() == token);
        found
    }

    fn modifiers(node: &Node<'_>, src: &[u8]) -> Modifiers {
        let mut modifiers = Modifiers::default();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "accessibility_modifier" => {
                    modifiers.visibility = Visibility::from_keyword(Self::text(&child, src));
                }
                "static" if !child.is_named() => modifiers.is_static = true,
                "readonly" if !child.is_named() => modifiers.is_readonly = true,
                "abstract" if !child.is_named() => modifiers.is_abstract = true,
                _ => {}
            }
        }
        modifiers
    }

    /// First `ERROR` or `MISSING` node in document order.
    fn first_error(root: Node<'_>) -> Option<Node<'_>> {
        if !root.has_error() {
            return None;
        }
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if node.is_error() || node.is_missing() {
                return Some(node);
            }
            if node.has_error() && cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return None;
                }
            }
        }
    }

    fn extract_parameters(node: Option<Node<'_>>, src: &[u8]) -> Vec<Parameter> {
        let Some(node) = node else {
            return Vec::new();
        };
        let mut parameters = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if !matches!(child.kind(), "required_parameter" | "optional_parameter") {
                continue;
            }
            let name = child.child_by_field_name("pattern").map_or_else(String::new, |p| {
                let text = Self::text(&p, src);
                text.strip_prefix("...").unwrap_or(text).to_owned()
            });
            parameters.push(Parameter {
                name,
                position: Self::position(&child),
                type_annotation: Self::annotation(child.child_by_field_name("type"), src),
            });
        }
        parameters
    }

    fn accessor_kind(node: &Node<'_>) -> Option<AccessorKind> {
        if Self::has_token(node, "get") {
            Some(AccessorKind::Get)
        } else if Self::has_token(node, "set") {
            Some(AccessorKind::Set)
        } else {
            None
        }
    }

    fn extract_member(node: &Node<'_>, src: &[u8]) -> Option<ClassMember> {
        let name_node = node.child_by_field_name("name");
        let name = name_node.map(|n| Self::text(&n, src).to_owned());
        let name_position = name_node.map_or_else(|| Self::position(node), |n| Self::position(&n));
        let modifiers = Self::modifiers(node, src);
        let position = Self::position(node);

        match node.kind() {
            "method_definition" => {
                let name = name?;
                if let Some(kind) = Self::accessor_kind(node) {
                    return Some(ClassMember::Accessor(AccessorDecl {
                        name,
                        position,
                        kind,
                        modifiers,
                    }));
                }
                if name == "constructor" {
                    return Some(ClassMember::Constructor(ConstructorDecl {
                        position,
                        modifiers,
                        parameters: Self::extract_parameters(
                            node.child_by_field_name("parameters"),
                            src,
                        ),
                    }));
                }
                Some(ClassMember::Method(MethodDecl {
                    name,
                    position,
                    name_position,
                    modifiers,
                    return_type: Self::annotation(node.child_by_field_name("return_type"), src),
                    parameters: Self::extract_parameters(node.child_by_field_name("parameters"), src),
                }))
            }
            // Overload signatures carry their own modifiers and annotations.
            "abstract_method_signature" | "method_signature" => {
                let name = name?;
                if let Some(kind) = Self::accessor_kind(node) {
                    return Some(ClassMember::Accessor(AccessorDecl {
                        name,
                        position,
                        kind,
                        modifiers,
                    }));
                }
                Some(ClassMember::Method(MethodDecl {
                    name,
                    position,
                    name_position,
                    modifiers: Modifiers {
                        is_abstract: modifiers.is_abstract
                            || node.kind() == "abstract_method_signature",
                        ..modifiers
                    },
                    return_type: Self::annotation(node.child_by_field_name("return_type"), src),
                    parameters: Self::extract_parameters(node.child_by_field_name("parameters"), src),
                }))
            }
            "public_field_definition" => Some(ClassMember::Property(PropertyDecl {
                name: name?,
                position,
                name_position,
                modifiers,
                type_annotation: Self::annotation(node.child_by_field_name("type"), src),
            })),
            _ => None,
        }
    }

    fn extract_heritage(node: &Node<'_>, src: &[u8], class: &mut ClassDecl) {
        let mut cursor = node.walk();
        for clause in node.named_children(&mut cursor) {
            match clause.kind() {
                "extends_clause" => {
                    class.extends = clause
                        .child_by_field_name("value")
                        .map(|v| Self::text(&v, src).to_owned());
                }
                "implements_clause" => {
                    let mut inner = clause.walk();
                    for ty in clause.named_children(&mut inner) {
                        let name_node = if ty.kind() == "generic_type" {
                            ty.child_by_field_name("name").unwrap_or(ty)
                        } else {
                            ty
                        };
                        class.implements.push(TypeRef {
                            name: Self::text(&name_node, src).to_owned(),
                            position: Self::position(&ty),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    fn extract_class(node: &Node<'_>, src: &[u8], site: Site) -> ClassDecl {
        let name_node = node.child_by_field_name("name");
        let mut class = ClassDecl {
            name: name_node.map(|n| Self::text(&n, src).to_owned()),
            position: site.position,
            name_position: name_node.map_or(site.position, |n| Self::position(&n)),
            exported: site.exported,
            is_abstract: node.kind() == "abstract_class_declaration",
            ..ClassDecl::default()
        };

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "class_heritage" {
                Self::extract_heritage(&child, src, &mut class);
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            class.members = body
                .named_children(&mut cursor)
                .filter_map(|member| Self::extract_member(&member, src))
                .collect();
        }

        class
    }

    fn extract_interface(node: &Node<'_>, src: &[u8], site: Site) -> InterfaceDecl {
        let mut interface = InterfaceDecl {
            name: node
                .child_by_field_name("name")
                .map(|n| Self::text(&n, src).to_owned())
                .unwrap_or_default(),
            position: site.position,
            exported: site.exported,
            members: Vec::new(),
        };

        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for member in body.named_children(&mut cursor) {
                let kind = match member.kind() {
                    "method_signature" => InterfaceMemberKind::Method,
                    "property_signature" => InterfaceMemberKind::Property,
                    _ => continue,
                };
                if let Some(name) = member.child_by_field_name("name") {
                    interface.members.push(InterfaceMember {
                        name: Self::text(&name, src).to_owned(),
                        kind,
                        position: Self::position(&member),
                    });
                }
            }
        }

        interface
    }

    fn extract_variables(node: &Node<'_>, src: &[u8], site: Site) -> VariableStatement {
        let mut cursor = node.walk();
        let declarations = node
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "variable_declarator")
            .map(|declarator| VariableDecl {
                name: declarator
                    .child_by_field_name("name")
                    .map(|n| Self::text(&n, src).to_owned())
                    .unwrap_or_default(),
                position: Self::position(&declarator),
            })
            .collect();

        VariableStatement {
            position: site.position,
            exported: site.exported,
            declarations,
        }
    }

    fn name_of(node: &Node<'_>, src: &[u8]) -> String {
        node.child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned())
            .unwrap_or_default()
    }

    /// Folds a declaration node into an item; `None` for non-declarations.
    fn extract_declaration(node: &Node<'_>, src: &[u8], site: Site) -> Option<Item> {
        let item = match node.kind() {
            "class_declaration" | "abstract_class_declaration" | "class" => {
                Item::Class(Self::extract_class(node, src, site))
            }
            "interface_declaration" => Item::Interface(Self::extract_interface(node, src, site)),
            "enum_declaration" => Item::Enum(EnumDecl {
                name: Self::name_of(node, src),
                position: site.position,
                exported: site.exported,
            }),
            "type_alias_declaration" => Item::TypeAlias(TypeAliasDecl {
                name: Self::name_of(node, src),
                position: site.position,
                exported: site.exported,
            }),
            "function_declaration"
            | "generator_function_declaration"
            | "function_signature"
            | "function_expression"
            | "function" => Item::Function(FunctionDecl {
                name: node
                    .child_by_field_name("name")
                    .map(|n| Self::text(&n, src).to_owned()),
                position: site.position,
                exported: site.exported,
            }),
            "lexical_declaration" | "variable_declaration" => {
                Item::Variable(Self::extract_variables(node, src, site))
            }
            "ambient_declaration" => {
                let mut cursor = node.walk();
                let inner = node.named_children(&mut cursor).next()?;
                return Self::extract_declaration(&inner, src, site);
            }
            _ => return None,
        };
        Some(item)
    }

    fn extract_export(node: &Node<'_>, src: &[u8]) -> Option<Item> {
        let site = Site {
            position: Self::position(node),
            exported: true,
        };
        let inner = node
            .child_by_field_name("declaration")
            .or_else(|| node.child_by_field_name("value"))?;
        match inner.kind() {
            // `export default <expr>` only declares anonymous classes and functions.
            "class" | "function_expression" | "function" => {
                Self::extract_declaration(&inner, src, site)
            }
            _ if node.child_by_field_name("declaration").is_some() => {
                Self::extract_declaration(&inner, src, site)
            }
            _ => None,
        }
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitExtractor for TypeScriptExtractor {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".javats"]
    }

    fn parse(&self, path: &Path, source: &str) -> Result<SourceUnit, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language {
                message: e.to_string(),
            })?;

        let src = source.as_bytes();
        let syntax_error = |line, column| ParseError::Syntax {
            path: path.to_path_buf(),
            line,
            column,
        };
        let tree = parser.parse(src, None).ok_or_else(|| syntax_error(1, 1))?;
        let root = tree.root_node();

        if let Some(error) = Self::first_error(root) {
            let position = Self::position(&error);
            return Err(syntax_error(position.line, position.column));
        }

        let mut items = Vec::new();
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            let item = if node.kind() == "export_statement" {
                Self::extract_export(&node, src)
            } else {
                let site = Site {
                    position: Self::position(&node),
                    exported: false,
                };
                Self::extract_declaration(&node, src, site)
            };
            items.extend(item);
        }

        debug!("Extracted {} item(s) from {}", items.len(), path.display());
        Ok(SourceUnit::new(path, source).with_items(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SourceUnit {
        TypeScriptExtractor::new()
            .parse(Path::new("App.javats"), src)
            .expect("Failed to parse")
    }

    #[test]
    fn extracts_class_members() {
        let unit = parse(
            r"
export abstract class Shape extends Base implements Drawable, Named<string> {
    private static readonly MAX: number = 1;
    protected name: string;
    constructor(name: string) { super(); this.name = name; }
    public abstract area(): number;
    public get label(): string { return this.name; }
    public static main(args: string[], ...rest: string[]): void {}
}
",
        );
        let class = unit.classes().next().expect("class");
        assert_eq!(class.name.as_deref(), Some("Shape"));
        assert!(class.exported);
        assert!(class.is_abstract);
        assert_eq!(class.position, Position::new(2, 1));
        assert_eq!(class.extends.as_deref(), Some("Base"));
        let implements: Vec<_> = class.implements.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(implements, vec!["Drawable", "Named"]);

        let properties: Vec<_> = class.properties().collect();
        assert_eq!(properties.len(), 2);
        assert!(properties[0].is_constant());
        assert_eq!(properties[0].modifiers.visibility, Some(Visibility::Private));
        assert_eq!(properties[1].type_annotation.as_deref(), Some("string"));

        let methods: Vec<_> = class.methods().collect();
        assert_eq!(methods.len(), 2);
        assert!(methods[0].modifiers.is_abstract);
        assert_eq!(methods[0].return_type.as_deref(), Some("number"));
        assert!(methods[1].is_entry_point());
        assert_eq!(methods[1].parameters[0].name, "args");
        assert_eq!(methods[1].parameters[1].name, "rest");
        assert_eq!(methods[1].parameters[1].type_annotation.as_deref(), Some("string[]"));

        assert!(class
            .members
            .iter()
            .any(|m| matches!(m, ClassMember::Constructor(_))));
        assert!(class
            .members
            .iter()
            .any(|m| matches!(m, ClassMember::Accessor(a) if a.kind == AccessorKind::Get)));
    }

    #[test]
    fn extracts_overload_signatures_as_methods() {
        let unit = parse(
            "class Parser {\n    parse(text: string): number;\n    public parse(text: string, radix?: number): number { return 0; }\n}\n",
        );
        let class = unit.classes().next().expect("class");
        let methods: Vec<_> = class.methods().collect();
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].position.line, 2);
        assert!(methods[0].modifiers.visibility.is_none());
        assert!(!methods[0].modifiers.is_abstract);
        assert_eq!(methods[0].return_type.as_deref(), Some("number"));
        assert_eq!(methods[1].parameters[1].name, "radix");
    }

    #[test]
    fn extracts_missing_annotations_as_none() {
        let unit = parse("class A {\n    x = 1;\n    run(a) {}\n}\n");
        let class = unit.classes().next().expect("class");
        let method = class.methods().next().expect("method");
        assert!(method.return_type.is_none());
        assert!(method.parameters[0].type_annotation.is_none());
        assert!(method.modifiers.visibility.is_none());
        assert!(class.properties().next().expect("property").type_annotation.is_none());
    }

    #[test]
    fn extracts_top_level_items() {
        let unit = parse(
            r"
import { X } from './X.javats';
interface Speaker { speak(): void; volume: number; }
enum Color { Red, Green }
type Id = string;
function helper(): void {}
const a = 1, b = 2;
export let c = 3;
declare class Ambient {}
",
        );
        assert_eq!(unit.interfaces().count(), 1);
        assert_eq!(unit.interfaces().next().map(InterfaceDecl::member_names), Some(vec!["speak", "volume"]));
        assert_eq!(unit.enums().count(), 1);
        assert_eq!(unit.type_aliases().count(), 1);
        assert_eq!(unit.functions().count(), 1);
        let statements: Vec<_> = unit.variable_statements().collect();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].declarations.len(), 2);
        assert!(statements[1].exported);
        assert_eq!(unit.classes().count(), 1);
    }

    #[test]
    fn anonymous_default_exports() {
        let unit = parse("export default class {\n    public run(): void {}\n}\n");
        let class = unit.classes().next().expect("class");
        assert!(class.name.is_none());
        assert!(class.exported);
        assert_eq!(class.display_name(), "anonymous");

        let unit = parse("export default function () {}\n");
        assert_eq!(unit.functions().count(), 1);
        assert!(unit.functions().next().and_then(|f| f.name.clone()).is_none());
    }

    #[test]
    fn exported_declaration_starts_at_export() {
        let unit = parse("\n  export class App {}\n");
        let class = unit.classes().next().expect("class");
        assert_eq!(class.position, Position::new(2, 3));
        assert_eq!(class.name_position, Position::new(2, 16));
    }

    #[test]
    fn reports_syntax_error_position() {
        let err = TypeScriptExtractor::new()
            .parse(Path::new("Bad.javats"), "class A {\n    public run(: void {}\n}\n")
            .unwrap_err();
        match err {
            ParseError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_source() {
        let unit = parse("");
        assert!(unit.items.is_empty());
    }

    #[test]
    fn handles_extension() {
        let extractor = TypeScriptExtractor::new();
        assert!(extractor.handles(Path::new("src/App.javats")));
        assert!(!extractor.handles(Path::new("src/App.ts")));
    }
}
