//! Markdown rendering for extracted tables.

use crate::error::Result;
use crate::model::Table;

/// Convert a table to a GitHub-style pipe table.
///
/// Rows shorter than the header line are padded with empty cells.
pub fn to_markdown(table: &Table) -> Result<String> {
    let columns = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.column_count()))
        .max()
        .unwrap_or(0);

    if columns == 0 {
        return Ok(String::new());
    }

    let mut output = String::new();
    push_row(&mut output, &table.headers, columns);
    output.push('|');
    for _ in 0..columns {
        output.push_str(" --- |");
    }
    output.push('\n');
    for row in &table.rows {
        push_row(&mut output, row, columns);
    }

    Ok(output.trim_end().to_string())
}

fn push_row(output: &mut String, cells: &[String], columns: usize) {
    output.push('|');
    for i in 0..columns {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        output.push(' ');
        output.push_str(&escape_cell(cell));
        output.push_str(" |");
    }
    output.push('\n');
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\r', '\n'], " ")
}
