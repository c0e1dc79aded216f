//! Validation findings collected across an entire entity.
//!
//! Rules are evaluated eagerly - the report carries every violation, never
//! just the first one.

use serde::Serialize;
use std::fmt;

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All violations found while validating a single submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate an explicit rule list: each entry is (field, message,
    /// passed). Failed entries are recorded in order.
    pub fn evaluate<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str, bool)>,
    {
        let mut report = Self::new();
        for (field, message, passed) in rules {
            if !passed {
                report.push(field, message);
            }
        }
        report
    }

    /// Report with exactly one violation.
    pub fn single(field: &'static str, message: &'static str) -> Self {
        let mut report = Self::new();
        report.push(field, message);
        report
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.violations.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldError] {
        &self.violations
    }

    /// Messages sorted alphabetically, the order the reference reported
    /// them in.
    pub fn sorted_messages(&self) -> Vec<&'static str> {
        let mut messages: Vec<&'static str> =
            self.violations.iter().map(|v| v.message).collect();
        messages.sort_unstable();
        messages
    }

    /// Turn an empty report into `Ok(())` and a non-empty one into
    /// `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sorted_messages().join(", "))
    }
}
