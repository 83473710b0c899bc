//! Validator orchestrating rule execution over source units.

use crate::config::Config;
use crate::context::{ProjectContext, UnitContext};
use crate::model::SourceUnit;
use crate::rule::{RuleKind, RuleSet};
use crate::types::{Diagnostic, ValidationReport};

use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    rules: RuleSet,
    config: Option<Config>,
}

impl ValidatorBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every rule of an ordered rule set.
    #[must_use]
    pub fn rule_set(mut self, rules: RuleSet) -> Self {
        for rule in rules {
            self.rules.push(rule);
        }
        self
    }

    /// Appends a single tagged rule.
    #[must_use]
    pub fn rule(mut self, rule: RuleKind) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a per-unit rule.
    #[must_use]
    pub fn unit_rule<R: crate::rule::UnitRule + 'static>(self, rule: R) -> Self {
        self.rule(RuleKind::unit(rule))
    }

    /// Appends a project rule.
    #[must_use]
    pub fn project_rule<R: crate::rule::ProjectRule + 'static>(self, rule: R) -> Self {
        self.rule(RuleKind::project(rule))
    }

    /// Sets the configuration used to disable rules.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        Validator {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs an ordered rule set against units and unit collections.
///
/// Diagnostics are appended in rule registration order and never sorted.
/// Rules do not short-circuit each other. A panicking rule is not caught:
/// the panic propagates to the caller and no partial result is returned.
///
/// Use [`Validator::builder()`] to construct an instance.
pub struct Validator {
    rules: RuleSet,
    config: Config,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Creates a validator from an ordered rule set with default configuration.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self::builder().rule_set(rules).build()
    }

    /// Registers one more rule after the existing ones.
    pub fn register(&mut self, rule: RuleKind) {
        self.rules.push(rule);
    }

    /// Registers several rules, preserving their order.
    pub fn register_all(&mut self, rules: impl IntoIterator<Item = RuleKind>) {
        for rule in rules {
            self.rules.push(rule);
        }
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules in execution order.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Runs all unit rules against a single unit.
    ///
    /// Cross-file lookups only see the unit itself.
    #[must_use]
    pub fn validate_unit(&self, unit: &SourceUnit) -> Vec<Diagnostic> {
        self.validate_unit_in(unit, std::slice::from_ref(unit))
    }

    /// Runs all unit rules against a unit, resolving names against `loaded`.
    #[must_use]
    pub fn validate_unit_in(&self, unit: &SourceUnit, loaded: &[SourceUnit]) -> Vec<Diagnostic> {
        debug!("Validating: {}", unit.path().display());

        let ctx = UnitContext::new(loaded);
        let mut diagnostics = Vec::new();

        for rule in self.rules.iter() {
            let RuleKind::Unit(rule) = rule else {
                continue;
            };
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            diagnostics.extend(rule.check(&ctx, unit));
        }

        diagnostics
    }

    /// Runs unit rules over a collection.
    ///
    /// Returns only the units with at least one diagnostic, keyed by path.
    #[must_use]
    pub fn validate_units(&self, units: &[SourceUnit]) -> BTreeMap<PathBuf, Vec<Diagnostic>> {
        let mut results = BTreeMap::new();
        for unit in units {
            let diagnostics = self.validate_unit_in(unit, units);
            if !diagnostics.is_empty() {
                results
                    .entry(unit.path.clone())
                    .or_insert_with(Vec::new)
                    .extend(diagnostics);
            }
        }
        results
    }

    /// Runs all project rules over a collection, returning a flat list.
    #[must_use]
    pub fn validate_project(&self, units: &[SourceUnit]) -> Vec<Diagnostic> {
        let ctx = ProjectContext::new(units);
        let mut diagnostics = Vec::new();

        for rule in self.rules.iter() {
            let RuleKind::Project(rule) = rule else {
                continue;
            };
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            diagnostics.extend(rule.check_project(&ctx));
        }

        diagnostics
    }

    /// Runs the full validation flow over a collection.
    ///
    /// Unit rules run per unit in input order; units without diagnostics are
    /// accepted; project rules then run once over the accepted units.
    #[must_use]
    pub fn validate_all(&self, units: &[SourceUnit]) -> ValidationReport {
        info!("Validating {} unit(s)", units.len());

        let mut report = ValidationReport::new();
        let mut accepted = Vec::new();

        for unit in units {
            let diagnostics = self.validate_unit_in(unit, units);
            report.units_checked += 1;
            if diagnostics.is_empty() {
                accepted.push(unit.clone());
                report.accepted.push(unit.path.clone());
            } else {
                report.diagnostics.extend(diagnostics);
            }
        }

        report.diagnostics.extend(self.validate_project(&accepted));

        info!(
            "Validation complete: {} diagnostic(s), {} of {} unit(s) accepted",
            report.diagnostics.len(),
            report.accepted.len(),
            report.units_checked
        );

        report
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
