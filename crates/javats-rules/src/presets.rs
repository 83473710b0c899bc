//! Rule presets.
//!
//! Two catalogues exist and are never mixed: the mature one checks main
//! presence at project scope and accepts any declared type, the legacy one
//! requires a class and an entry point in every file.

use crate::{
    ExplicitTyping, InterfaceImplementation, MainMethod, MainModifier, NamingConvention,
    NoProceduralCode, ProjectMainMethod, RequireClass, RequireModifiers, RequireType,
    SinglePublicClass,
};
use javats_core::{RuleKind, RuleSet};

/// Preset configurations for javats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Require-type, single public class, naming, interface checks and a
    /// project-wide entry point.
    #[default]
    Mature,
    /// Require-class and a per-file entry point.
    Legacy,
}

impl Preset {
    /// Returns the rules for this preset, in execution order.
    #[must_use]
    pub fn rules(self) -> RuleSet {
        match self {
            Self::Mature => mature_rules(),
            Self::Legacy => legacy_rules(),
        }
    }

    /// True if the entry point is checked per unit rather than per project.
    #[must_use]
    pub fn checks_main_per_unit(self) -> bool {
        matches!(self, Self::Legacy)
    }

    /// Preset name as used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mature => "mature",
            Self::Legacy => "legacy",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mature" => Ok(Self::Mature),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("Unknown preset '{other}' (expected 'mature' or 'legacy')")),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the mature catalogue.
///
/// Includes:
/// - `no-procedural-code` (JT001)
/// - `require-type` (JT002)
/// - `single-public-class` (JT004)
/// - `naming-convention` (JT005)
/// - `require-modifiers` (JT006)
/// - `explicit-typing` (JT007)
/// - `main-modifier` (JT008)
/// - `interface-implementation` (JT011)
/// - `project-main-method` (JT010)
#[must_use]
pub fn mature_rules() -> RuleSet {
    RuleSet::new()
        .with(RuleKind::unit(NoProceduralCode::new()))
        .with(RuleKind::unit(RequireType::new()))
        .with(RuleKind::unit(SinglePublicClass::new()))
        .with(RuleKind::unit(NamingConvention::new()))
        .with(RuleKind::unit(RequireModifiers::new()))
        .with(RuleKind::unit(ExplicitTyping::new()))
        .with(RuleKind::unit(MainModifier::new()))
        .with(RuleKind::unit(InterfaceImplementation::new()))
        .with(RuleKind::project(ProjectMainMethod::new()))
}

/// Returns the legacy catalogue.
///
/// Includes:
/// - `no-procedural-code` (JT001)
/// - `require-class` (JT003)
/// - `main-method` (JT009)
/// - `main-modifier` (JT008)
/// - `require-modifiers` (JT006)
/// - `explicit-typing` (JT007)
#[must_use]
pub fn legacy_rules() -> RuleSet {
    RuleSet::new()
        .with(RuleKind::unit(NoProceduralCode::new()))
        .with(RuleKind::unit(RequireClass::new()))
        .with(RuleKind::unit(MainMethod::new()))
        .with(RuleKind::unit(MainModifier::new()))
        .with(RuleKind::unit(RequireModifiers::new()))
        .with(RuleKind::unit(ExplicitTyping::new()))
}

/// Returns every available rule once, ordered by code. Used for listing.
#[must_use]
pub fn all_rules() -> RuleSet {
    RuleSet::new()
        .with(RuleKind::unit(NoProceduralCode::new()))
        .with(RuleKind::unit(RequireType::new()))
        .with(RuleKind::unit(RequireClass::new()))
        .with(RuleKind::unit(SinglePublicClass::new()))
        .with(RuleKind::unit(NamingConvention::new()))
        .with(RuleKind::unit(RequireModifiers::new()))
        .with(RuleKind::unit(ExplicitTyping::new()))
        .with(RuleKind::unit(MainModifier::new()))
        .with(RuleKind::unit(MainMethod::new()))
        .with(RuleKind::project(ProjectMainMethod::new()))
        .with(RuleKind::unit(InterfaceImplementation::new()))
}
