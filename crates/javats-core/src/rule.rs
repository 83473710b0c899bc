//! Rule traits and the ordered rule set.

use crate::context::{ProjectContext, UnitContext};
use crate::model::SourceUnit;
use crate::types::Diagnostic;

/// A rule that validates one source unit in isolation.
///
/// Rules are pure observers: they must not mutate the unit, and running the
/// same rule twice on the same unit yields the same diagnostics.
///
/// # Example
///
/// ```ignore
/// use javats_core::{Diagnostic, Location, SourceUnit, UnitContext, UnitRule};
///
/// pub struct NoEnums;
///
/// impl UnitRule for NoEnums {
///     fn name(&self) -> &'static str { "no-enums" }
///     fn code(&self) -> &'static str { "JT100" }
///
///     fn check(&self, _ctx: &UnitContext, unit: &SourceUnit) -> Vec<Diagnostic> {
///         unit.enums()
///             .map(|e| Diagnostic::new(
///                 self.code(),
///                 self.name(),
///                 Location::at(unit.path(), e.position),
///                 format!("Enum '{}' is not allowed", e.name),
///             ))
///             .collect()
///     }
/// }
/// ```
pub trait UnitRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-procedural-code").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "JT001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single unit and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Read-only access to the other loaded units
    /// * `unit` - The unit being checked
    fn check(&self, ctx: &UnitContext<'_>, unit: &SourceUnit) -> Vec<Diagnostic>;
}

/// Type alias for boxed `UnitRule` trait objects.
pub type UnitRuleBox = Box<dyn UnitRule>;

/// A rule over the whole ordered collection of accepted units.
///
/// Use this for invariants no single unit can verify alone, such as
/// "some class somewhere defines the entry point".
pub trait ProjectRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "JT010").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks the accepted units and returns any diagnostics found.
    fn check_project(&self, ctx: &ProjectContext<'_>) -> Vec<Diagnostic>;
}

/// Type alias for boxed `ProjectRule` trait objects.
pub type ProjectRuleBox = Box<dyn ProjectRule>;

/// Scope a rule runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Runs once per unit.
    Unit,
    /// Runs once over the accepted collection.
    Project,
}

impl std::fmt::Display for RuleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => f.write_str("unit"),
            Self::Project => f.write_str("project"),
        }
    }
}

/// A registered rule, tagged with its scope at registration time.
pub enum RuleKind {
    /// A per-unit rule.
    Unit(UnitRuleBox),
    /// A whole-project rule.
    Project(ProjectRuleBox),
}

impl RuleKind {
    /// Wraps a unit rule.
    #[must_use]
    pub fn unit<R: UnitRule + 'static>(rule: R) -> Self {
        Self::Unit(Box::new(rule))
    }

    /// Wraps a project rule.
    #[must_use]
    pub fn project<R: ProjectRule + 'static>(rule: R) -> Self {
        Self::Project(Box::new(rule))
    }

    /// Kebab-case rule name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unit(r) => r.name(),
            Self::Project(r) => r.name(),
        }
    }

    /// Rule code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unit(r) => r.code(),
            Self::Project(r) => r.code(),
        }
    }

    /// Rule description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Unit(r) => r.description(),
            Self::Project(r) => r.description(),
        }
    }

    /// Scope this rule runs at.
    #[must_use]
    pub fn scope(&self) -> RuleScope {
        match self {
            Self::Unit(_) => RuleScope::Unit,
            Self::Project(_) => RuleScope::Project,
        }
    }
}

impl std::fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleKind")
            .field("name", &self.name())
            .field("scope", &self.scope())
            .finish()
    }
}

/// Ordered rule configuration handed to the validator at construction.
///
/// Registration order is execution order, and diagnostics are reported in
/// that order.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<RuleKind>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use]
    pub fn with(mut self, rule: RuleKind) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a rule in place.
    pub fn push(&mut self, rule: RuleKind) {
        self.rules.push(rule);
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleKind> {
        self.rules.iter()
    }

    /// Keeps only the rules accepted by the predicate.
    #[must_use]
    pub fn retain(mut self, mut keep: impl FnMut(&RuleKind) -> bool) -> Self {
        self.rules.retain(|rule| keep(rule));
        self
    }
}

impl FromIterator<RuleKind> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleKind>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleKind;
    type IntoIter = std::vec::IntoIter<RuleKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
