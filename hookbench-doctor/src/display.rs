//! Table rows for check output

use crate::types::{Check, CheckStatus};

/// Placeholder shown in the fix column of passing checks
pub const NO_FIX: &str = "-";

/// One check flattened to display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    pub status: String,
    pub category: String,
    pub name: String,
    pub message: String,
    pub fix: String,
}

impl CheckRow {
    /// Column headers, with the fix column only when `verbose`
    pub fn headers(verbose: bool) -> Vec<&'static str> {
        let mut headers = vec!["Status", "Category", "Check", "Result"];
        if verbose {
            headers.push("Fix");
        }
        headers
    }

    /// Text cells after the status column, matching [`CheckRow::headers`]
    pub fn text_cells(&self, verbose: bool) -> Vec<&str> {
        let mut cells = vec![self.category.as_str(), self.name.as_str(), self.message.as_str()];
        if verbose {
            cells.push(self.fix.as_str());
        }
        cells
    }
}

impl From<&Check> for CheckRow {
    fn from(check: &Check) -> Self {
        Self {
            status: format_check_status(&check.status),
            category: check.category.clone(),
            name: check.name.clone(),
            message: check.message.clone(),
            fix: check.fix.clone().unwrap_or_else(|| NO_FIX.to_string()),
        }
    }
}

/// Status symbol without color
pub fn format_check_status(status: &CheckStatus) -> String {
    match status {
        CheckStatus::Ok => "\u{2713}".to_string(),
        CheckStatus::Warning => "\u{26A0}".to_string(),
        CheckStatus::Error => "\u{2717}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_passing_check() {
        let row = CheckRow::from(&Check::ok("git", "Required", "Found at /usr/bin/git"));
        assert_eq!(row.status, "\u{2713}");
        assert_eq!(row.category, "Required");
        assert_eq!(row.fix, NO_FIX);
    }

    #[test]
    fn test_row_from_warning_keeps_fix() {
        let row = CheckRow::from(&Check::warning(
            "ty",
            "Python",
            "Not found on PATH",
            "Install ty",
        ));
        assert_eq!(row.status, "\u{26A0}");
        assert_eq!(row.fix, "Install ty");
    }

    #[test]
    fn test_cells_match_headers() {
        let row = CheckRow::from(&Check::ok("git", "Required", "Found"));
        for verbose in [false, true] {
            assert_eq!(
                CheckRow::headers(verbose).len(),
                row.text_cells(verbose).len() + 1
            );
        }
        assert_eq!(row.text_cells(false), vec!["Required", "git", "Found"]);
    }

    #[test]
    fn test_format_check_status() {
        assert_eq!(format_check_status(&CheckStatus::Ok), "\u{2713}");
        assert_eq!(format_check_status(&CheckStatus::Warning), "\u{26A0}");
        assert_eq!(format_check_status(&CheckStatus::Error), "\u{2717}");
    }

    #[test]
    fn test_row_from_error_keeps_install_hint() {
        let row = CheckRow::from(&Check::error(
            "lefthook",
            "Required",
            "Not found on PATH",
            "brew install lefthook",
        ));
        assert_eq!(row.status, "\u{2717}");
        assert_eq!(
            row.text_cells(true),
            vec!["Required", "lefthook", "Not found on PATH", "brew install lefthook"]
        );
    }
}
