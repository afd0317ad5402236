use crate::error::{CoreError, CoreResult};

pub type Row = Vec<String>;

/// Split RFC 4180 text into rows of fields.
///
/// Quoted fields may contain commas, line breaks and doubled quotes. Lines whose
/// fields are all empty are dropped. Unbalanced quotes never fail: the rest of
/// the input is absorbed into the open field.
pub fn tokenize(text: &str) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut row: Row = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if quoted && chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = !quoted;
                }
            }
            ',' if !quoted => row.push(std::mem::take(&mut field)),
            '\n' | '\r' if !quoted => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                end_row(&mut rows, &mut row, &mut field);
            }
            other => field.push(other),
        }
    }
    end_row(&mut rows, &mut row, &mut field);

    rows
}

/// Tokenize and require at least one row.
pub fn tokenize_non_empty(text: &str) -> CoreResult<Vec<Row>> {
    let rows = tokenize(text);
    if rows.is_empty() {
        return Err(CoreError::EmptyInput);
    }
    Ok(rows)
}

fn end_row(rows: &mut Vec<Row>, row: &mut Row, field: &mut String) {
    if field.is_empty() && row.is_empty() {
        return;
    }
    row.push(std::mem::take(field));
    let finished = std::mem::take(row);
    if finished.iter().any(|f| !f.is_empty()) {
        rows.push(finished);
    }
}
