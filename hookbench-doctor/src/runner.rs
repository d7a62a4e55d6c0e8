//! The `DoctorRunner` trait

use crate::table::render_checks_table;
use crate::types::{Check, CheckStatus};

/// Collects checks and summarises them
///
/// Implementors only provide storage; everything else has a default.
pub trait DoctorRunner {
    fn checks(&self) -> &[Check];

    fn checks_mut(&mut self) -> &mut Vec<Check>;

    fn add_check(&mut self, check: Check) {
        self.checks_mut().push(check);
    }

    /// Render all checks as a table
    fn render_table(&self, verbose: bool) -> String {
        render_checks_table(self.checks(), verbose)
    }

    /// One-line count of checks by status, e.g. `9 passed, 2 warnings, 0 errors`
    fn summary(&self) -> String {
        let count = |status: CheckStatus| self.checks().iter().filter(|c| c.status == status).count();
        let warnings = count(CheckStatus::Warning);
        let errors = count(CheckStatus::Error);
        format!(
            "{} passed, {} warning{}, {} error{}",
            count(CheckStatus::Ok),
            warnings,
            if warnings == 1 { "" } else { "s" },
            errors,
            if errors == 1 { "" } else { "s" },
        )
    }
}
