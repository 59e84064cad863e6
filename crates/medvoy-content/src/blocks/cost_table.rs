//! Cost comparison table extraction.
//!
//! A cost table compares at-home and abroad prices per procedure:
//!
//! ```markdown
//! <!-- cost-table -->
//! | Procedure | UK Price | Abroad Price | Savings |
//! |-----------|----------|--------------|---------|
//! | Veneers * | £6,000   | £2,100       | 65%     |
//! | Crowns    | £900     | £250         | 72%     |
//! <!-- /cost-table -->
//! ```
//!
//! Header and separator rows are excluded from the output; a trailing `*`
//! on the procedure cell marks a popular procedure and is stripped.

use serde::Serialize;

use super::split_delimited;

/// One data row of a cost comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostRow {
    /// Procedure name, with the popularity marker stripped.
    pub procedure: String,
    /// Price at home (first price column, verbatim).
    pub price_home: String,
    /// Price abroad (second price column, verbatim).
    pub price_abroad: String,
    /// Savings cell, verbatim (usually a percentage).
    pub savings: String,
    /// Whether the row carried the popularity marker.
    pub popular: bool,
}

/// Extract all `<!-- cost-table -->` blocks.
///
/// Returns the rows in source order and the markdown with the matched
/// blocks removed. Rows with fewer than four cells are skipped, as are
/// header rows and `---` separator rows.
pub fn extract_cost_tables(content: &str) -> (Vec<CostRow>, String) {
    let (interiors, remainder) = split_delimited(content, "cost-table");

    let mut rows = Vec::new();
    for interior in &interiors {
        rows.extend(parse_table(interior));
    }
    (rows, remainder)
}

fn parse_table(interior: &str) -> Vec<CostRow> {
    // Cell rows, keeping line order. The row immediately before a
    // separator row is the header.
    let cell_rows: Vec<Vec<String>> = interior
        .lines()
        .filter_map(split_row)
        .collect();

    let separator_at: Vec<bool> = cell_rows.iter().map(|cells| is_separator(cells)).collect();

    let mut rows = Vec::new();
    for (i, cells) in cell_rows.iter().enumerate() {
        if separator_at[i] {
            continue;
        }
        // Header row: directly followed by the separator.
        if separator_at.get(i + 1).copied().unwrap_or(false) {
            continue;
        }
        if cells.len() < 4 {
            continue;
        }

        let (procedure, popular) = strip_popular_marker(&cells[0]);
        if procedure.is_empty() {
            continue;
        }

        rows.push(CostRow {
            procedure,
            price_home: cells[1].clone(),
            price_abroad: cells[2].clone(),
            savings: cells[3].clone(),
            popular,
        });
    }
    rows
}

/// Split a pipe-delimited line into trimmed cells, or `None` for lines
/// that are not table rows.
fn split_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') {
        return None;
    }
    let cells: Vec<String> = trimmed
        .trim_matches('|')
        .split('|')
        .map(|c| c.trim().to_string())
        .collect();
    if cells.is_empty() { None } else { Some(cells) }
}

fn is_separator(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

fn strip_popular_marker(cell: &str) -> (String, bool) {
    match cell.strip_suffix('*') {
        Some(stripped) => (stripped.trim_end().to_string(), true),
        None => (cell.to_string(), false),
    }
}

// ============================================================================
// Tests
// ============================================================================
