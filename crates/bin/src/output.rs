//! Output formatting helpers for human-readable and JSON output.

use semisort::Value;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Builds table columns and rows from sorted documents.
///
/// Columns are the top-level fields in order of first appearance, after a
/// leading position column. Missing fields render as empty cells. Records
/// that are not documents are shown in a single `VALUE` column.
pub fn document_table(documents: &[&Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut columns: Vec<String> = Vec::new();
    let mut has_values = false;
    for document in documents {
        match document.as_doc() {
            Some(doc) => {
                for key in doc.keys() {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
            }
            None => has_values = true,
        }
    }
    if has_values {
        columns.push("VALUE".to_string());
    }

    let rows = documents
        .iter()
        .enumerate()
        .map(|(position, document)| {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push((position + 1).to_string());
            for column in &columns {
                let cell = match document.as_doc() {
                    Some(doc) => doc.get(column).map(cell_text),
                    None if has_values && column == "VALUE" => Some(cell_text(document)),
                    None => None,
                };
                row.push(cell.unwrap_or_default());
            }
            row
        })
        .collect();

    let mut headers = Vec::with_capacity(columns.len() + 1);
    headers.push("#".to_string());
    headers.extend(columns);
    (headers, rows)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::List(_) | Value::Doc(_) => value.to_json_string(),
        other => other.to_string(),
    }
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h.as_ref(), width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
