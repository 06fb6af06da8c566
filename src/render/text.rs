//! Plain text rendering for extracted tables.

use crate::error::Result;
use crate::model::Table;

/// Convert a table to tab-separated text, header line first.
pub fn to_text(table: &Table) -> Result<String> {
    let mut lines = Vec::with_capacity(table.row_count() + 1);
    lines.push(join_row(&table.headers));
    lines.extend(table.rows.iter().map(|row| join_row(row)));
    Ok(lines.join("\n"))
}

fn join_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| c.replace(['\t', '\r', '\n'], " "))
        .collect::<Vec<_>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let mut table = Table::with_headers(["French", "English"]);
        table.add_row(vec!["être".into(), "to be".into()]);
        table.add_row(vec!["avoir".into(), "to\thave".into()]);

        let result = to_text(&table).unwrap();
        assert_eq!(result, "French\tEnglish\nêtre\tto be\navoir\tto have");
    }
}
