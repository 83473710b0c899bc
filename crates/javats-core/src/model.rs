//! Syntax model of a parsed JavaTS source unit.
//!
//! The model is produced by a front end (see `javats-syntax`) and observed
//! read-only by rules. It only keeps what the dialect rules and the
//! transpiler need: declarations, modifiers, type annotations and positions.

use std::path::{Path, PathBuf};

/// A 1-based line/column pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Position {
    /// The first character of a unit. Used for diagnostics without an offending node.
    pub const START: Self = Self { line: 1, column: 1 };

    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Explicit accessibility modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
}

impl Visibility {
    /// Parses a modifier keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }

    /// Returns the keyword for this modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier flags carried by class members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Explicit accessibility, if any.
    pub visibility: Option<Visibility>,
    /// `static`
    pub is_static: bool,
    /// `readonly`
    pub is_readonly: bool,
    /// `abstract`
    pub is_abstract: bool,
}

impl Modifiers {
    /// True if the member is explicitly `public`.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Some(Visibility::Public)
    }
}

/// One parsed input file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    /// Path identifying the unit.
    pub path: PathBuf,
    /// Original source text.
    pub text: String,
    /// Top-level declarations in source order.
    pub items: Vec<Item>,
}

impl SourceUnit {
    /// Creates an empty unit for the given path and text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            items: Vec::new(),
        }
    }

    /// Replaces the top-level declarations.
    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Path identifying the unit.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension (e.g. `App.javats`).
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Class(c) => Some(c),
            _ => None,
        })
    }

    /// Interfaces in declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Interface(i) => Some(i),
            _ => None,
        })
    }

    /// Enums in declaration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Enum(e) => Some(e),
            _ => None,
        })
    }

    /// Type aliases in declaration order.
    pub fn type_aliases(&self) -> impl Iterator<Item = &TypeAliasDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::TypeAlias(t) => Some(t),
            _ => None,
        })
    }

    /// Top-level functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(f) => Some(f),
            _ => None,
        })
    }

    /// Top-level variable statements in declaration order.
    pub fn variable_statements(&self) -> impl Iterator<Item = &VariableStatement> {
        self.items.iter().filter_map(|item| match item {
            Item::Variable(v) => Some(v),
            _ => None,
        })
    }

    /// True if the unit declares a class, interface, enum or type alias.
    #[must_use]
    pub fn declares_type(&self) -> bool {
        self.items.iter().any(|item| {
            matches!(
                item,
                Item::Class(_) | Item::Interface(_) | Item::Enum(_) | Item::TypeAlias(_)
            )
        })
    }

    /// Calculates the byte offset of a 1-indexed line and column.
    ///
    /// Returns the end of the text when the position is out of bounds.
    #[must_use]
    pub fn offset_for(&self, position: Position) -> usize {
        if position.line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.text.split('\n').enumerate() {
            if i + 1 == position.line {
                let column = position.column.saturating_sub(1).min(line_content.len());
                return offset + column;
            }
            offset += line_content.len() + 1;
        }

        self.text.len()
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `class Foo { ... }`
    Class(ClassDecl),
    /// `interface Foo { ... }`
    Interface(InterfaceDecl),
    /// `enum Foo { ... }`
    Enum(EnumDecl),
    /// `type Foo = ...`
    TypeAlias(TypeAliasDecl),
    /// `function foo() { ... }`
    Function(FunctionDecl),
    /// `const foo = ...`
    Variable(VariableStatement),
}

/// A reference to a named type, e.g. in an `implements` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Referenced name without type arguments.
    pub name: String,
    /// Position of the reference.
    pub position: Position,
}

/// A class declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDecl {
    /// Class name; `None` for `export default class { ... }`.
    pub name: Option<String>,
    /// Start of the declaration, including `export`.
    pub position: Position,
    /// Position of the name, or of the declaration when anonymous.
    pub name_position: Position,
    /// Declared with `export`.
    pub exported: bool,
    /// Declared `abstract`.
    pub is_abstract: bool,
    /// Supertype expression of the `extends` clause.
    pub extends: Option<String>,
    /// Interfaces named in the `implements` clause.
    pub implements: Vec<TypeRef>,
    /// Members in declaration order.
    pub members: Vec<ClassMember>,
}

impl ClassDecl {
    /// Name used in messages; anonymous classes are reported as `anonymous`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("anonymous")
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            ClassMember::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Static methods in declaration order.
    pub fn static_methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods().filter(|m| m.modifiers.is_static)
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDecl> {
        self.members.iter().filter_map(|m| match m {
            ClassMember::Property(property) => Some(property),
            _ => None,
        })
    }

    /// True if a named member (method, property or accessor) has this name.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name() == Some(name))
    }
}

/// A member of a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// A method, including abstract method signatures.
    Method(MethodDecl),
    /// A field.
    Property(PropertyDecl),
    /// The constructor.
    Constructor(ConstructorDecl),
    /// A `get` or `set` accessor.
    Accessor(AccessorDecl),
}

impl ClassMember {
    /// Member name; constructors have none.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Method(m) => Some(&m.name),
            Self::Property(p) => Some(&p.name),
            Self::Accessor(a) => Some(&a.name),
            Self::Constructor(_) => None,
        }
    }

    /// Start of the member, including modifiers.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Method(m) => m.position,
            Self::Property(p) => p.position,
            Self::Accessor(a) => a.position,
            Self::Constructor(c) => c.position,
        }
    }
}

/// A method declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Start of the method, including modifiers.
    pub position: Position,
    /// Position of the name.
    pub name_position: Position,
    /// Modifier flags.
    pub modifiers: Modifiers,
    /// Return type annotation text, without the colon.
    pub return_type: Option<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl MethodDecl {
    /// True for `public static main`, the program entry point.
    #[must_use]
    pub fn is_entry_point(&self) -> bool {
        self.name == "main" && self.modifiers.is_public() && self.modifiers.is_static
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    /// Parameter name (rest parameters without the `...`).
    pub name: String,
    /// Position of the parameter.
    pub position: Position,
    /// Type annotation text, without the colon.
    pub type_annotation: Option<String>,
}

/// A field declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDecl {
    /// Property name.
    pub name: String,
    /// Start of the property, including modifiers.
    pub position: Position,
    /// Position of the name.
    pub name_position: Position,
    /// Modifier flags.
    pub modifiers: Modifiers,
    /// Type annotation text, without the colon.
    pub type_annotation: Option<String>,
}

impl PropertyDecl {
    /// `static readonly` properties are constants.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.modifiers.is_static && self.modifiers.is_readonly
    }
}

/// A constructor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorDecl {
    /// Start of the constructor, including modifiers.
    pub position: Position,
    /// Modifier flags.
    pub modifiers: Modifiers,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

/// Accessor flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// `get name()`
    Get,
    /// `set name(value)`
    Set,
}

/// A `get`/`set` accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorDecl {
    /// Accessor name.
    pub name: String,
    /// Start of the accessor, including modifiers.
    pub position: Position,
    /// Getter or setter.
    pub kind: AccessorKind,
    /// Modifier flags.
    pub modifiers: Modifiers,
}

/// An interface declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceDecl {
    /// Interface name.
    pub name: String,
    /// Start of the declaration, including `export`.
    pub position: Position,
    /// Declared with `export`.
    pub exported: bool,
    /// Named members in declaration order.
    pub members: Vec<InterfaceMember>,
}

impl InterfaceDecl {
    /// Member names in declaration order, without duplicates.
    #[must_use]
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for member in &self.members {
            if !names.contains(&member.name.as_str()) {
                names.push(&member.name);
            }
        }
        names
    }
}

/// Kind of an interface member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceMemberKind {
    /// `speak(): void;`
    Method,
    /// `name: string;`
    Property,
}

/// A named interface member.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceMember {
    /// Member name.
    pub name: String,
    /// Method or property.
    pub kind: InterfaceMemberKind,
    /// Position of the member.
    pub position: Position,
}

/// An enum declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,
    /// Start of the declaration.
    pub position: Position,
    /// Declared with `export`.
    pub exported: bool,
}

/// A type alias declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeAliasDecl {
    /// Alias name.
    pub name: String,
    /// Start of the declaration.
    pub position: Position,
    /// Declared with `export`.
    pub exported: bool,
}

/// A top-level function declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDecl {
    /// Function name; `None` for `export default function () {}`.
    pub name: Option<String>,
    /// Start of the declaration.
    pub position: Position,
    /// Declared with `export`.
    pub exported: bool,
}

/// A top-level `var`/`let`/`const` statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStatement {
    /// Start of the statement.
    pub position: Position,
    /// Declared with `export`.
    pub exported: bool,
    /// Declarators in source order.
    pub declarations: Vec<VariableDecl>,
}

/// A single variable declarator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableDecl {
    /// Bound name (destructuring patterns keep their source text).
    pub name: String,
    /// Position of the declarator.
    pub position: Position,
}
