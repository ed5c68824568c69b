//! Delimited export - comparison data as CSV/TSV text
//!
//! Columns: Brand, every high/medium-importance attribute name, Score.
//! Presentation only; the core exposes importance and scores, this renders
//! them. File writing is the caller's job.

use crate::catalog::NOT_SPECIFIED;
use crate::session::ComparisonSession;

/// Render the session's comparison table as delimited text
pub fn to_delimited(session: &ComparisonSession, sep: char) -> String {
    let mut out = String::new();

    let mut header: Vec<String> = vec!["Brand".to_string()];
    header.extend(
        session
            .catalog
            .display_attributes()
            .map(|a| a.name.clone()),
    );
    header.push("Score".to_string());
    push_row(&mut out, &header, sep);

    for record in &session.records {
        let mut row: Vec<String> = vec![record.brand.clone()];
        for attr in session.catalog.display_attributes() {
            let value = record
                .specifications
                .get(&attr.id)
                .cloned()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string());
            row.push(value);
        }
        row.push(record.score_value().to_string());
        push_row(&mut out, &row, sep);
    }

    out
}

fn push_row(out: &mut String, row: &[String], sep: char) {
    let mut first = true;
    for cell in row {
        if !first {
            out.push(sep);
        }
        first = false;
        if needs_quotes(cell, sep) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

fn needs_quotes(cell: &str, sep: char) -> bool {
    cell.contains(sep) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}
