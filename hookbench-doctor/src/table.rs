//! Check tables.
//!
//! Built with comfy-table and sized to the terminal through crossterm.

use crate::display::CheckRow;
use crate::types::{Check, CheckStatus};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Width used when stdout is not a terminal
const FALLBACK_WIDTH: u16 = 120;

/// Create an empty table that wraps within the terminal width
pub fn new_table() -> Table {
    let width = crossterm::terminal::size()
        .map(|(w, _)| w)
        .unwrap_or(FALLBACK_WIDTH);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
    table
}

/// Render checks as a table, one row per check in insertion order.
///
/// With `verbose` a Fix column is added.
///
/// ```
/// use hookbench_doctor::{render_checks_table, Check};
///
/// let checks = vec![Check::ok("git", "Required", "Found")];
/// let rendered = render_checks_table(&checks, false);
/// assert!(rendered.contains("git"));
/// ```
pub fn render_checks_table(checks: &[Check], verbose: bool) -> String {
    let mut table = new_table();
    table.set_header(CheckRow::headers(verbose));

    for check in checks {
        let row = CheckRow::from(check);
        let mut cells = vec![status_cell(&check.status)];
        cells.extend(row.text_cells(verbose).into_iter().map(Cell::new));
        table.add_row(cells);
    }

    table.to_string()
}

fn status_cell(status: &CheckStatus) -> Cell {
    let color = match status {
        CheckStatus::Ok => Color::Green,
        CheckStatus::Warning => Color::Yellow,
        CheckStatus::Error => Color::Red,
    };
    Cell::new(crate::display::format_check_status(status)).fg(color)
}
