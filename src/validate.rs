//! Pre-submission field validation.
//!
//! Validation failures are rendered inline per field and never reach the
//! network; callers run a [`Validator`] before handing a payload to the
//! backend. Only the first failing rule per field is kept, matching how
//! forms display one error under each input.

use std::collections::BTreeMap;

/// Field-level validation failures, keyed by field name.
///
/// A `BTreeMap` keeps display (and test) order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(pub BTreeMap<String, String>);

/// Accumulates per-field checks, then yields `Ok(())` or the collected
/// errors.
#[derive(Debug, Default)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless an earlier rule already failed it.
    fn fail(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// The value must be non-blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, message);
        }
        self
    }

    /// The value must be at least `min` characters.
    pub fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) -> &mut Self {
        if value.chars().count() < min {
            self.fail(field, message);
        }
        self
    }

    /// The value must equal `expected` (e.g. password confirmation).
    pub fn equals(&mut self, field: &str, value: &str, expected: &str, message: &str) -> &mut Self {
        if value != expected {
            self.fail(field, message);
        }
        self
    }

    /// The value must look like an email address: a non-empty local part
    /// and a dotted domain. Not RFC-grade, the backend revalidates.
    pub fn email(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        let ok = value.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        });
        if !ok {
            self.fail(field, message);
        }
        self
    }

    /// `Ok(())` when every rule passed, otherwise the collected errors.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}
