//! JavaScript emission by type erasure.
//!
//! The emitter parses TypeScript with Tree-sitter and produces CommonJS
//! JavaScript by editing the original text: type-only syntax is removed,
//! parameter properties and enums are lowered, and ES module syntax is turned
//! into `require`/`exports`. Everything else is copied verbatim, so line
//! structure mostly survives.

use tree_sitter::{Language, Node, Parser};

/// Errors raised while emitting JavaScript.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The grammar could not be loaded.
    #[error("Failed to load grammar: {message}")]
    Language {
        /// Loader error message.
        message: String,
    },

    /// The source does not parse.
    #[error("Syntax error at {line}:{column}")]
    Syntax {
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// The construct has no emission.
    #[error("Unsupported construct '{construct}' at {line}:{column}")]
    Unsupported {
        /// Construct name.
        construct: &'static str,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// An enum member follows a string-valued member without an initializer.
    #[error("Enum member '{member}' at {line}:{column} must have an initializer")]
    EnumInitializer {
        /// Member name.
        member: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },
}

const USE_STRICT: &str = "\"use strict\";\n";
const ES_MODULE_MARKER: &str = "Object.defineProperty(exports, \"__esModule\", { value: true });\n";
const IMPORT_DEFAULT_HELPER: &str = "var __importDefault = (this && this.__importDefault) || function (mod) {\n    return (mod && mod.__esModule) ? mod : { \"default\": mod };\n};\n";

/// Removed wherever they appear.
const TYPE_ONLY_NODES: &[&str] = &[
    "type_annotation",
    "type_parameters",
    "type_arguments",
    "asserts_annotation",
    "type_predicate_annotation",
    "implements_clause",
];

/// Removed together with their line when they stand alone.
const TYPE_ONLY_STATEMENTS: &[&str] = &[
    "interface_declaration",
    "type_alias_declaration",
    "ambient_declaration",
    "function_signature",
];

/// Class members with no runtime counterpart.
const TYPE_ONLY_MEMBERS: &[&str] = &["abstract_method_signature", "index_signature", "method_signature"];

/// Modifier tokens dropped from fields, parameters and declarators.
const ERASED_TOKENS: &[&str] = &["readonly", "?", "!"];

/// A replacement of `start..end` in the source by `text`.
#[derive(Debug)]
struct Edit {
    start: usize,
    end: usize,
    text: String,
}

/// Next auto-increment value of an enum.
enum EnumCursor {
    Number(i64),
    After(String),
    Unknown,
}

/// Emits CommonJS JavaScript from TypeScript source.
pub struct JsEmitter {
    language: Language,
}

impl JsEmitter {
    /// Creates a new emitter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Emits JavaScript for a TypeScript source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not parse, uses namespaces or
    /// decorators, or declares an enum member whose value cannot be computed.
    pub fn emit(&self, source: &str) -> Result<String, EmitError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| EmitError::Language {
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or(EmitError::Syntax { line: 1, column: 1 })?;
        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error(root).map_or((1, 1), |n| position(&n));
            return Err(EmitError::Syntax { line, column });
        }

        let mut emission = Emission::new(source);
        emission.visit_children(root)?;

        let mut output = String::from(USE_STRICT);
        if emission.uses_modules {
            output.push_str(ES_MODULE_MARKER);
        }
        if emission.needs_default_helper {
            output.push_str(IMPORT_DEFAULT_HELPER);
        }
        output.push_str(&emission.apply());
        Ok(output)
    }
}

impl Default for JsEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn position(node: &Node<'_>) -> (usize, usize) {
    let point = node.start_position();
    (point.row + 1, point.column + 1)
}

fn unsupported(node: &Node<'_>, construct: &'static str) -> EmitError {
    let (line, column) = position(node);
    EmitError::Unsupported {
        construct,
        line,
        column,
    }
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
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

fn children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn token<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    children(node)
        .into_iter()
        .find(|c| !c.is_named() && c.kind() == kind)
}

/// Rewrites a `.javats` module specifier to the emitted `.js` file.
fn rewrite_specifier(literal: &str) -> String {
    let quote = literal.chars().next().unwrap_or('"');
    let inner = literal.trim_matches(|c| c == '"' || c == '\'');
    let inner = inner
        .strip_suffix(".javats")
        .map_or_else(|| inner.to_owned(), |stem| format!("{stem}.js"));
    format!("{quote}{inner}{quote}")
}

struct Emission<'s> {
    src: &'s str,
    edits: Vec<Edit>,
    uses_modules: bool,
    needs_default_helper: bool,
}

impl<'s> Emission<'s> {
    fn new(src: &'s str) -> Self {
        Self {
            src,
            edits: Vec::new(),
            uses_modules: false,
            needs_default_helper: false,
        }
    }

    fn text(&self, node: &Node<'_>) -> &'s str {
        self.src.get(node.byte_range()).unwrap_or("")
    }

    fn replace(&mut self, start: usize, end: usize, text: impl Into<String>) {
        self.edits.push(Edit {
            start,
            end,
            text: text.into(),
        });
    }

    fn insert(&mut self, at: usize, text: impl Into<String>) {
        self.replace(at, at, text);
    }

    fn remove(&mut self, node: &Node<'_>) {
        self.replace(node.start_byte(), node.end_byte(), "");
    }

    /// Removes a token and the whitespace up to its next sibling.
    fn remove_token(&mut self, node: &Node<'_>) {
        let end = node
            .next_sibling()
            .map(|next| next.start_byte())
            .filter(|&next| {
                self.src
                    .get(node.end_byte()..next)
                    .is_some_and(|gap| gap.trim().is_empty())
            })
            .unwrap_or_else(|| node.end_byte());
        self.replace(node.start_byte(), end, "");
    }

    /// Removes `start..end`, swallowing the whole line when nothing else is on it.
    fn remove_range_line_aware(&mut self, start: usize, end: usize) {
        let line_start = self.src[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.src[end..]
            .find('\n')
            .map_or(self.src.len(), |i| end + i + 1);
        let before_blank = self.src[line_start..start].trim().is_empty();
        let after_blank = self.src[end..line_end].trim().is_empty();
        if before_blank && after_blank {
            self.replace(line_start, line_end, "");
        } else {
            self.replace(start, end, "");
        }
    }

    fn remove_statement(&mut self, node: &Node<'_>) {
        self.remove_range_line_aware(node.start_byte(), node.end_byte());
    }

    /// Removes a class member together with its `;` or `,` terminator.
    fn remove_member(&mut self, node: &Node<'_>) {
        let end = node
            .next_sibling()
            .filter(|next| !next.is_named() && matches!(next.kind(), ";" | ","))
            .map_or_else(|| node.end_byte(), |next| next.end_byte());
        self.remove_range_line_aware(node.start_byte(), end);
    }

    fn indent_of(&self, node: &Node<'_>) -> &'s str {
        let start = node.start_byte();
        let line_start = self.src[..start].rfind('\n').map_or(0, |i| i + 1);
        let line = &self.src[line_start..start];
        let width = line.len() - line.trim_start().len();
        &line[..width]
    }

    fn apply(mut self) -> String {
        self.edits.sort_by_key(|e| (e.start, e.end));
        let mut output = String::with_capacity(self.src.len());
        let mut cursor = 0;
        for edit in &self.edits {
            if edit.start < cursor {
                continue;
            }
            output.push_str(self.src.get(cursor..edit.start).unwrap_or(""));
            output.push_str(&edit.text);
            cursor = edit.end;
        }
        output.push_str(self.src.get(cursor..).unwrap_or(""));
        output
    }

    fn visit_children(&mut self, node: Node<'_>) -> Result<(), EmitError> {
        for child in children(&node) {
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit(&mut self, node: Node<'_>) -> Result<(), EmitError> {
        let kind = node.kind();

        if TYPE_ONLY_NODES.contains(&kind) {
            self.remove(&node);
            return Ok(());
        }
        if TYPE_ONLY_STATEMENTS.contains(&kind) {
            self.remove_statement(&node);
            return Ok(());
        }
        if TYPE_ONLY_MEMBERS.contains(&kind) {
            self.remove_member(&node);
            return Ok(());
        }

        match kind {
            "decorator" => Err(unsupported(&node, "decorator")),
            "internal_module" | "module" => Err(unsupported(&node, "namespace")),
            "import_alias" => Err(unsupported(&node, "import alias")),
            "accessibility_modifier" | "override_modifier" => {
                self.remove_token(&node);
                Ok(())
            }
            "enum_declaration" => self.lower_enum(&node),
            "import_statement" => {
                self.lower_import(&node);
                Ok(())
            }
            "export_statement" => self.lower_export(&node),
            "as_expression" | "satisfies_expression" => {
                let Some(expression) = named_children(&node).into_iter().next() else {
                    return Ok(());
                };
                self.replace(expression.end_byte(), node.end_byte(), "");
                self.visit(expression)
            }
            "non_null_expression" => {
                if let Some(bang) = token(&node, "!") {
                    self.remove(&bang);
                }
                self.visit_children(node)
            }
            "abstract_class_declaration" => {
                if let Some(keyword) = token(&node, "abstract") {
                    self.remove_token(&keyword);
                }
                self.visit_children(node)
            }
            "public_field_definition" => {
                if token(&node, "declare").is_some() || token(&node, "abstract").is_some() {
                    self.remove_member(&node);
                    return Ok(());
                }
                self.erase_tokens(&node);
                self.visit_children(node)
            }
            "required_parameter" | "optional_parameter" => {
                if node
                    .child_by_field_name("pattern")
                    .is_some_and(|p| p.kind() == "this")
                {
                    self.remove_this_parameter(&node);
                    return Ok(());
                }
                self.erase_tokens(&node);
                self.visit_children(node)
            }
            "variable_declarator" => {
                self.erase_tokens(&node);
                self.visit_children(node)
            }
            "method_definition" => {
                self.erase_tokens(&node);
                let is_constructor = node
                    .child_by_field_name("name")
                    .is_some_and(|n| self.text(&n) == "constructor");
                if is_constructor {
                    self.lower_parameter_properties(&node);
                }
                self.visit_children(node)
            }
            _ => self.visit_children(node),
        }
    }

    fn erase_tokens(&mut self, node: &Node<'_>) {
        for child in children(node) {
            if !child.is_named() && ERASED_TOKENS.contains(&child.kind()) {
                self.remove_token(&child);
            }
        }
    }

    /// Drops a `this: T` parameter and its trailing comma.
    fn remove_this_parameter(&mut self, node: &Node<'_>) {
        let end = node
            .next_sibling()
            .filter(|next| next.kind() == ",")
            .and_then(|comma| comma.next_sibling())
            .map_or_else(|| node.end_byte(), |next| next.start_byte());
        self.replace(node.start_byte(), end, "");
    }

    /// Emits `this.x = x;` for constructor parameters declared with modifiers.
    fn lower_parameter_properties(&mut self, constructor: &Node<'_>) {
        let Some(parameters) = constructor.child_by_field_name("parameters") else {
            return;
        };
        let names: Vec<&str> = named_children(&parameters)
            .iter()
            .filter(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
            .filter(|p| {
                children(p).iter().any(|c| {
                    c.kind() == "accessibility_modifier"
                        || (!c.is_named() && c.kind() == "readonly")
                })
            })
            .filter_map(|p| p.child_by_field_name("pattern"))
            .map(|pattern| self.text(&pattern))
            .collect();
        if names.is_empty() {
            return;
        }

        let Some(body) = constructor.child_by_field_name("body") else {
            return;
        };
        let indent = format!("{}    ", self.indent_of(constructor));
        let assignments: String = names
            .iter()
            .map(|name| format!("\n{indent}this.{name} = {name};"))
            .collect();

        let super_call = named_children(&body).into_iter().next().filter(|statement| {
            statement.kind() == "expression_statement"
                && named_children(statement).first().is_some_and(|call| {
                    call.kind() == "call_expression"
                        && call
                            .child_by_field_name("function")
                            .is_some_and(|f| f.kind() == "super")
                })
        });
        let at = super_call.map_or(body.start_byte() + 1, |s| s.end_byte());
        self.insert(at, assignments);
    }

    /// Lowers an enum to the reverse-mapped IIFE form.
    fn lower_enum(&mut self, node: &Node<'_>) -> Result<(), EmitError> {
        let name = node
            .child_by_field_name("name")
            .map_or("", |n| self.text(&n));
        let indent = self.indent_of(node);
        let mut lines = vec![
            format!("var {name};"),
            format!("{indent}(function ({name}) {{"),
        ];

        let mut next = EnumCursor::Number(0);
        let members = node
            .child_by_field_name("body")
            .map(|body| named_children(&body))
            .unwrap_or_default();
        let member_names: Vec<String> = members
            .iter()
            .filter_map(|member| self.enum_key(member))
            .collect();

        for member in members {
            let value_node = if member.kind() == "enum_assignment" {
                member.child_by_field_name("value")
            } else {
                None
            };
            let Some(key) = self.enum_key(&member) else {
                continue;
            };

            let line = match value_node {
                Some(value) if value.kind() == "string" => {
                    next = EnumCursor::Unknown;
                    format!("{name}[\"{key}\"] = {};", self.text(&value))
                }
                Some(value) if value.kind() == "template_string" => {
                    next = EnumCursor::Unknown;
                    let text = self.enum_initializer(&value, name, &member_names);
                    format!("{name}[\"{key}\"] = {text};")
                }
                Some(value) => {
                    next = parse_number(self.text(&value))
                        .and_then(|n| n.checked_add(1))
                        .map_or_else(|| EnumCursor::After(key.clone()), EnumCursor::Number);
                    let text = self.enum_initializer(&value, name, &member_names);
                    format!("{name}[{name}[\"{key}\"] = {text}] = \"{key}\";")
                }
                None => {
                    let value = match &next {
                        EnumCursor::Number(n) => n.to_string(),
                        EnumCursor::After(previous) => format!("{name}[\"{previous}\"] + 1"),
                        EnumCursor::Unknown => {
                            let (line, column) = position(&member);
                            return Err(EmitError::EnumInitializer {
                                member: key,
                                line,
                                column,
                            });
                        }
                    };
                    next = match next {
                        EnumCursor::Number(n) => n
                            .checked_add(1)
                            .map_or_else(|| EnumCursor::After(key.clone()), EnumCursor::Number),
                        _ => EnumCursor::After(key.clone()),
                    };
                    format!("{name}[{name}[\"{key}\"] = {value}] = \"{key}\";")
                }
            };
            lines.push(format!("{indent}    {line}"));
        }

        lines.push(format!("{indent}}})({name} || ({name} = {{}}));"));
        self.replace(node.start_byte(), node.end_byte(), lines.join("\n"));
        Ok(())
    }

    fn enum_key(&self, member: &Node<'_>) -> Option<String> {
        let key_node = if member.kind() == "enum_assignment" {
            member.child_by_field_name("name")?
        } else {
            *member
        };
        Some(
            self.text(&key_node)
                .trim_matches(|c| c == '"' || c == '\'')
                .to_owned(),
        )
    }

    /// Initializer text with bare member references qualified by the enum.
    fn enum_initializer(&self, value: &Node<'_>, enum_name: &str, members: &[String]) -> String {
        let mut references = Vec::new();
        collect_identifiers(*value, &mut references);

        let mut text = String::new();
        let mut from = value.start_byte();
        for reference in references {
            let ident = self.text(&reference);
            if !members.iter().any(|m| m == ident) {
                continue;
            }
            text.push_str(self.src.get(from..reference.start_byte()).unwrap_or(""));
            text.push_str(enum_name);
            text.push('.');
            text.push_str(ident);
            from = reference.end_byte();
        }
        text.push_str(self.src.get(from..value.end_byte()).unwrap_or(""));
        text
    }

    fn lower_import(&mut self, node: &Node<'_>) {
        self.uses_modules = true;

        if token(node, "type").is_some() || token(node, "typeof").is_some() {
            self.remove_statement(node);
            return;
        }

        let source = node
            .child_by_field_name("source")
            .map(|s| rewrite_specifier(self.text(&s)));
        let named = named_children(node);

        if let Some(clause) = named.iter().find(|c| c.kind() == "import_require_clause") {
            let binding = named_children(clause)
                .into_iter()
                .find(|c| c.kind() == "identifier")
                .map_or("", |n| self.text(&n));
            let source = clause
                .child_by_field_name("source")
                .map_or_else(String::new, |s| rewrite_specifier(self.text(&s)));
            self.replace(
                node.start_byte(),
                node.end_byte(),
                format!("const {binding} = require({source});"),
            );
            return;
        }

        let Some(source) = source else {
            return;
        };
        let require = format!("require({source})");
        let mut lines = Vec::new();

        match named.iter().find(|c| c.kind() == "import_clause") {
            None => lines.push(format!("{require};")),
            Some(clause) => {
                for part in named_children(clause) {
                    match part.kind() {
                        "identifier" => {
                            self.needs_default_helper = true;
                            lines.push(format!(
                                "const {} = __importDefault({require}).default;",
                                self.text(&part)
                            ));
                        }
                        "namespace_import" => {
                            if let Some(binding) = named_children(&part).into_iter().next() {
                                lines.push(format!("const {} = {require};", self.text(&binding)));
                            }
                        }
                        "named_imports" => {
                            let bindings = self.import_bindings(&part);
                            if !bindings.is_empty() {
                                lines.push(format!(
                                    "const {{ {} }} = {require};",
                                    bindings.join(", ")
                                ));
                            }
                        }
                        _ => {}
                    }
                }
                if lines.is_empty() {
                    lines.push(format!("{require};"));
                }
            }
        }

        self.replace(node.start_byte(), node.end_byte(), lines.join("\n"));
    }

    fn import_bindings(&self, named_imports: &Node<'_>) -> Vec<String> {
        named_children(named_imports)
            .iter()
            .filter(|s| s.kind() == "import_specifier")
            .filter(|s| token(s, "type").is_none() && token(s, "typeof").is_none())
            .filter_map(|s| {
                let name = self.text(&s.child_by_field_name("name")?);
                Some(match s.child_by_field_name("alias") {
                    Some(alias) => format!("{name}: {}", self.text(&alias)),
                    None => name.to_owned(),
                })
            })
            .collect()
    }

    fn lower_export(&mut self, node: &Node<'_>) -> Result<(), EmitError> {
        self.uses_modules = true;

        if token(node, "type").is_some() || token(node, "namespace").is_some() {
            self.remove_statement(node);
            return Ok(());
        }
        if let Some(decorator) = named_children(node).iter().find(|c| c.kind() == "decorator") {
            return Err(unsupported(decorator, "decorator"));
        }

        if let Some(declaration) = node.child_by_field_name("declaration") {
            return self.lower_export_declaration(node, declaration);
        }

        if let Some(value) = node.child_by_field_name("value") {
            self.replace(node.start_byte(), value.start_byte(), "exports.default = ");
            if !self.text(node).trim_end().ends_with(';') {
                self.insert(node.end_byte(), ";");
            }
            return self.visit(value);
        }

        let source = node
            .child_by_field_name("source")
            .map(|s| rewrite_specifier(self.text(&s)));

        if token(node, "=").is_some() {
            let Some(expression) = named_children(node).into_iter().next() else {
                return Ok(());
            };
            self.replace(node.start_byte(), expression.start_byte(), "module.exports = ");
            return self.visit(expression);
        }

        let named = named_children(node);
        let mut lines = Vec::new();

        if let Some(clause) = named.iter().find(|c| c.kind() == "export_clause") {
            for specifier in named_children(clause) {
                if specifier.kind() != "export_specifier" || token(&specifier, "type").is_some() {
                    continue;
                }
                let Some(name) = specifier.child_by_field_name("name") else {
                    continue;
                };
                let name = self.text(&name);
                let alias = specifier
                    .child_by_field_name("alias")
                    .map_or(name, |a| self.text(&a));
                let value = match &source {
                    Some(source) => format!("require({source}).{name}"),
                    None => name.to_owned(),
                };
                lines.push(format!("exports.{alias} = {value};"));
            }
        } else if let Some(namespace) = named.iter().find(|c| c.kind() == "namespace_export") {
            let binding = named_children(namespace)
                .into_iter()
                .next()
                .map_or("", |n| self.text(&n));
            if let Some(source) = &source {
                lines.push(format!("exports.{binding} = require({source});"));
            }
        } else if let Some(source) = &source {
            lines.push(format!("Object.assign(exports, require({source}));"));
        }

        if lines.is_empty() {
            self.remove_statement(node);
        } else {
            self.replace(node.start_byte(), node.end_byte(), lines.join("\n"));
        }
        Ok(())
    }

    fn lower_export_declaration(
        &mut self,
        node: &Node<'_>,
        declaration: Node<'_>,
    ) -> Result<(), EmitError> {
        if TYPE_ONLY_STATEMENTS.contains(&declaration.kind()) {
            self.remove_statement(node);
            return Ok(());
        }

        let is_default = token(node, "default").is_some();
        let names = self.declared_names(&declaration);

        self.replace(node.start_byte(), declaration.start_byte(), "");
        self.visit(declaration)?;

        let exports: String = if is_default {
            names
                .first()
                .map(|name| format!("\nexports.default = {name};"))
                .unwrap_or_default()
        } else {
            names
                .iter()
                .map(|name| format!("\nexports.{name} = {name};"))
                .collect()
        };
        if !exports.is_empty() {
            self.insert(node.end_byte(), exports);
        }
        Ok(())
    }

    fn declared_names(&self, declaration: &Node<'_>) -> Vec<String> {
        match declaration.kind() {
            "lexical_declaration" | "variable_declaration" => {
                let mut names = Vec::new();
                for declarator in named_children(declaration) {
                    if let Some(pattern) = declarator.child_by_field_name("name") {
                        self.collect_bindings(&pattern, &mut names);
                    }
                }
                names
            }
            _ => declaration
                .child_by_field_name("name")
                .map(|n| vec![self.text(&n).to_owned()])
                .unwrap_or_default(),
        }
    }

    fn collect_bindings(&self, pattern: &Node<'_>, names: &mut Vec<String>) {
        match pattern.kind() {
            "identifier" | "shorthand_property_identifier_pattern" => {
                names.push(self.text(pattern).to_owned());
            }
            "object_assignment_pattern" | "assignment_pattern" => {
                if let Some(left) = pattern.child_by_field_name("left") {
                    self.collect_bindings(&left, names);
                }
            }
            "pair_pattern" => {
                if let Some(value) = pattern.child_by_field_name("value") {
                    self.collect_bindings(&value, names);
                }
            }
            "object_pattern" | "array_pattern" | "rest_pattern" => {
                for child in named_children(pattern) {
                    self.collect_bindings(&child, names);
                }
            }
            _ => {}
        }
    }
}

/// Value expressions, excluding property names and nested scopes.
fn collect_identifiers<'t>(node: Node<'t>, found: &mut Vec<Node<'t>>) {
    match node.kind() {
        "identifier" => found.push(node),
        "arrow_function" | "function_expression" | "class" => {}
        _ => {
            for child in named_children(&node) {
                collect_identifiers(child, found);
            }
        }
    }
}

fn parse_number(text: &str) -> Option<i64> {
    let text = text.trim().replace('_', "");
    if let Some(magnitude) = text.strip_prefix('-') {
        return parse_number(magnitude)?.checked_neg();
    }
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok();
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(src: &str) -> String {
        JsEmitter::new().emit(src).expect("Failed to emit")
    }

    #[test]
    fn starts_with_use_strict() {
        let js = emit("class A {}\n");
        assert!(js.starts_with("\"use strict\";\n"));
        assert!(!js.contains("__esModule"));
    }

    #[test]
    fn erases_annotations_and_modifiers() {
        let js = emit(
            r"
class Account {
    private static readonly LIMIT: number = 10;
    protected balance?: number;
    public deposit(amount: number): void {
        const next = (this.balance as number) + amount;
        this.balance = next!;
    }
}
",
        );
        assert!(js.contains("    static LIMIT = 10;"));
        assert!(js.contains("    balance;"));
        assert!(js.contains("    deposit(amount) {"));
        assert!(js.contains("const next = (this.balance) + amount;"));
        assert!(js.contains("this.balance = next;"));
        assert!(!js.contains("private"));
        assert!(!js.contains(": number"));
    }

    #[test]
    fn removes_type_only_declarations() {
        let js = emit(
            r"
interface Speaker {
    speak(): void;
}
type Id = string;
declare const VERSION: string;
export interface Walker { walk(): void; }
abstract class Animal implements Speaker {
    public abstract speak(): void;
    public name(): string { return 'animal'; }
}
",
        );
        assert!(!js.contains("interface"));
        assert!(!js.contains("type Id"));
        assert!(!js.contains("declare"));
        assert!(!js.contains("implements"));
        assert!(!js.contains("abstract"));
        assert!(js.contains("class Animal  {"));
        assert!(js.contains("    name() { return 'animal'; }"));
    }

    #[test]
    fn lowers_parameter_properties() {
        let js = emit(
            r"
class Point extends Base {
    public constructor(private x: number, public readonly y: number) {
        super();
    }
}
",
        );
        assert!(js.contains("constructor(x, y) {"));
        assert!(js.contains("super();\n        this.x = x;\n        this.y = y;"));
    }

    #[test]
    fn lowers_enums() {
        let js = emit("enum Color {\n    Red,\n    Green = 5,\n    Blue,\n    Name = \"n\",\n}\n");
        assert!(js.contains("var Color;\n(function (Color) {"));
        assert!(js.contains("    Color[Color[\"Red\"] = 0] = \"Red\";"));
        assert!(js.contains("    Color[Color[\"Green\"] = 5] = \"Green\";"));
        assert!(js.contains("    Color[Color[\"Blue\"] = 6] = \"Blue\";"));
        assert!(js.contains("    Color[\"Name\"] = \"n\";"));
        assert!(js.contains("})(Color || (Color = {}));"));
    }

    #[test]
    fn qualifies_member_references_in_enum_initializers() {
        let js = emit("enum Flags {\n    A = 1,\n    B = A * 2,\n    C = A | B,\n    D,\n}\n");
        assert!(js.contains("    Flags[Flags[\"B\"] = Flags.A * 2] = \"B\";"));
        assert!(js.contains("    Flags[Flags[\"C\"] = Flags.A | Flags.B] = \"C\";"));
        assert!(js.contains("    Flags[Flags[\"D\"] = Flags[\"C\"] + 1] = \"D\";"));
        assert!(!js.contains("= A "));
    }

    #[test]
    fn leaves_outer_names_in_enum_initializers() {
        let js = emit("enum Sizes {\n    Small = Math.max(1, 2),\n    Large = Small * LIMIT,\n}\n");
        assert!(js.contains("Sizes[Sizes[\"Small\"] = Math.max(1, 2)] = \"Small\";"));
        assert!(js.contains("Sizes[Sizes[\"Large\"] = Sizes.Small * LIMIT] = \"Large\";"));
    }

    #[test]
    fn negative_enum_initializers_continue_counting() {
        let js = emit("enum Offset {\n    Before = -1,\n    Here,\n    Hex = -0x10,\n    Next,\n}\n");
        assert!(js.contains("Offset[Offset[\"Before\"] = -1] = \"Before\";"));
        assert!(js.contains("Offset[Offset[\"Here\"] = 0] = \"Here\";"));
        assert!(js.contains("Offset[Offset[\"Next\"] = -15] = \"Next\";"));
    }

    #[test]
    fn enum_values_past_i64_fall_back_to_runtime_increment() {
        let js = emit("enum Big {\n    A = 9223372036854775807,\n    B,\n    C,\n}\n");
        assert!(js.contains("Big[Big[\"A\"] = 9223372036854775807] = \"A\";"));
        assert!(js.contains("Big[Big[\"B\"] = Big[\"A\"] + 1] = \"B\";"));
        assert!(js.contains("Big[Big[\"C\"] = Big[\"B\"] + 1] = \"C\";"));
    }

    #[test]
    fn parse_number_handles_signs_and_bounds() {
        assert_eq!(parse_number("-1"), Some(-1));
        assert_eq!(parse_number("0xff"), Some(255));
        assert_eq!(parse_number("1_000"), Some(1000));
        assert_eq!(parse_number("99999999999999999999"), None);
        assert_eq!(parse_number("A * 2"), None);
    }

    #[test]
    fn enum_member_after_string_needs_initializer() {
        let err = JsEmitter::new()
            .emit("enum E {\n    A = \"a\",\n    B,\n}\n")
            .unwrap_err();
        assert!(matches!(err, EmitError::EnumInitializer { ref member, .. } if member == "B"));
    }

    #[test]
    fn converts_imports_to_require() {
        let js = emit(
            r#"
import { Speaker, type Options, helper as h } from "./Speaker.javats";
import * as fs from 'fs';
import Dog from './Dog.javats';
import type { Only } from './Only.javats';
import './side-effect.js';
"#,
        );
        assert!(js.contains("Object.defineProperty(exports, \"__esModule\", { value: true });"));
        assert!(js.contains("const { Speaker, helper: h } = require(\"./Speaker.js\");"));
        assert!(js.contains("const fs = require('fs');"));
        assert!(js.contains("const Dog = __importDefault(require('./Dog.js')).default;"));
        assert!(js.contains("var __importDefault"));
        assert!(!js.contains("Only"));
        assert!(js.contains("require('./side-effect.js');"));
    }

    #[test]
    fn converts_exports() {
        let js = emit(
            r"
export class Dog {}
export const a = 1, { b, c: d } = obj;
export { Dog as Puppy };
export * from './All.javats';
export default class Cat {}
",
        );
        assert!(js.contains("class Dog {}\nexports.Dog = Dog;"));
        assert!(js.contains("exports.a = a;\nexports.b = b;\nexports.d = d;"));
        assert!(js.contains("exports.Puppy = Dog;"));
        assert!(js.contains("Object.assign(exports, require('./All.js'));"));
        assert!(js.contains("class Cat {}"));
        assert!(js.contains("exports.default = "));
        assert!(!js.contains("export "));
    }

    #[test]
    fn exports_anonymous_default() {
        let js = emit("export default class {\n}\n");
        assert!(js.contains("exports.default = class {\n};"));
    }

    #[test]
    fn exported_enum_is_assigned() {
        let js = emit("export enum Level { Low }\n");
        assert!(js.contains("})(Level || (Level = {}));\nexports.Level = Level;"));
    }

    #[test]
    fn strips_generics() {
        let js = emit("class Box<T> {\n    public map<U>(f: (t: T) => U): Box<U> { return new Box<U>(); }\n}\n");
        assert!(js.contains("class Box {"));
        assert!(js.contains("map(f) { return new Box(); }"));
    }

    #[test]
    fn rejects_namespaces() {
        let err = JsEmitter::new().emit("namespace Util {\n}\n").unwrap_err();
        assert!(matches!(err, EmitError::Unsupported { construct: "namespace", .. }));
    }

    #[test]
    fn rejects_syntax_errors() {
        let err = JsEmitter::new().emit("class {").unwrap_err();
        assert!(matches!(err, EmitError::Syntax { .. }));
    }

    #[test]
    fn rewrites_specifiers() {
        assert_eq!(rewrite_specifier("'./A.javats'"), "'./A.js'");
        assert_eq!(rewrite_specifier("\"lodash\""), "\"lodash\"");
    }
}
