//! Source rewrite stage: JavaTS to TypeScript.
//!
//! The rewrite re-checks a reduced set of invariants on a unit that already
//! passed validation, then returns its text unchanged. A failed re-check is a
//! fault, not a diagnostic.

use javats_core::utils::declares_entry_point;
use javats_core::{ClassMember, SourceUnit};
use tracing::debug;

/// Invariants re-checked by the rewrite stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Some class must declare `public static main`.
    pub enforce_main: bool,
    /// Methods and properties must carry a visibility modifier.
    pub require_modifiers: bool,
    /// No top-level functions or variables.
    pub no_procedural_code: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            enforce_main: true,
            require_modifiers: true,
            no_procedural_code: true,
        }
    }
}

impl TransformOptions {
    /// Sets whether the entry point is required in every unit.
    #[must_use]
    pub fn enforce_main(mut self, enabled: bool) -> Self {
        self.enforce_main = enabled;
        self
    }

    /// Sets whether visibility modifiers are required.
    #[must_use]
    pub fn require_modifiers(mut self, enabled: bool) -> Self {
        self.require_modifiers = enabled;
        self
    }

    /// Sets whether top-level procedural code is rejected.
    #[must_use]
    pub fn no_procedural_code(mut self, enabled: bool) -> Self {
        self.no_procedural_code = enabled;
        self
    }
}

/// Faults raised by the rewrite re-check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A top-level function or variable exists.
    #[error("Procedural code detected: Functions and variables must be inside classes")]
    ProceduralCode,

    /// A method or property lacks `public`, `private` or `protected`.
    #[error("Member '{member}' of class '{class}' has no visibility modifier")]
    MissingModifier {
        /// Class name.
        class: String,
        /// Member name.
        member: String,
    },

    /// No class declares `public static main`.
    #[error("No public static main method found in any class")]
    MissingEntryPoint,
}

/// Rewrites a validated unit to host-language source.
///
/// Checks run in a fixed order (procedural code, modifiers, entry point) and
/// the first failure is returned.
///
/// # Errors
///
/// Returns the first violated invariant enabled in `options`.
pub fn transform_to_host_source(
    unit: &SourceUnit,
    options: TransformOptions,
) -> Result<String, TransformError> {
    if options.no_procedural_code
        && (unit.functions().next().is_some() || unit.variable_statements().next().is_some())
    {
        return Err(TransformError::ProceduralCode);
    }

    if options.require_modifiers {
        check_modifiers(unit)?;
    }

    if options.enforce_main && !declares_entry_point(unit) {
        return Err(TransformError::MissingEntryPoint);
    }

    debug!("Rewrote {}", unit.path().display());
    Ok(unit.text.clone())
}

fn check_modifiers(unit: &SourceUnit) -> Result<(), TransformError> {
    for class in unit.classes() {
        for member in &class.members {
            let (name, modifiers) = match member {
                ClassMember::Method(m) => (&m.name, &m.modifiers),
                ClassMember::Property(p) => (&p.name, &p.modifiers),
                ClassMember::Constructor(_) | ClassMember::Accessor(_) => continue,
            };
            if modifiers.visibility.is_none() {
                return Err(TransformError::MissingModifier {
                    class: class.display_name().to_owned(),
                    member: name.clone(),
                });
            }
        }
    }
    Ok(())
}
