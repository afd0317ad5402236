use super::field::{extract_identifier, interpret_cell, ParseOutcome};
use crate::error::{CoreError, CoreResult};
use crate::tabular::tokenizer::Row;
use std::collections::HashSet;

pub type ReferenceSet = HashSet<String>;

/// Collect the known identifiers from `column_name` across all data rows.
///
/// `rows[0]` is the header. A cell that parses as a JSON document contributes
/// the value under `json_key` or nothing at all; a cell that does not parse
/// contributes its own trimmed text.
pub fn build_reference_set(
    rows: &[Row],
    column_name: &str,
    json_key: &str,
) -> CoreResult<ReferenceSet> {
    let (header, data) = rows.split_first().ok_or(CoreError::EmptyInput)?;
    let headers: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
    let column_index = headers
        .iter()
        .position(|h| h == column_name)
        .ok_or_else(|| CoreError::ColumnNotFound {
            column: column_name.to_string(),
            available: headers.clone(),
        })?;

    let mut users = ReferenceSet::new();
    for row in data {
        let Some(cell) = row.get(column_index) else {
            continue;
        };
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        match interpret_cell(cell) {
            ParseOutcome::Structured(document) => {
                if let Some(identifier) = extract_identifier(&document, json_key) {
                    users.insert(identifier);
                }
            }
            ParseOutcome::Plain(text) => {
                users.insert(text);
            }
        }
    }

    tracing::debug!(
        column = column_name,
        data_rows = data.len(),
        known = users.len(),
        "built reference set"
    );
    Ok(users)
}
