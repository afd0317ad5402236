use super::assemble::assemble_result;
use super::model::{ComparisonResult, JsonDocument, ReconcileConfig};
use super::reference_set::build_reference_set;
use super::scanner::scan_documents;
use crate::error::{CoreError, CoreResult};
use crate::tabular::tokenizer::tokenize_non_empty;

/// Run one full comparison: CSV text -> reference set, documents -> scan,
/// then assemble the summary.
pub fn run_comparison(
    csv_text: Option<&str>,
    documents: &[JsonDocument],
    config: &ReconcileConfig,
) -> CoreResult<ComparisonResult> {
    let csv_text = match csv_text {
        Some(text) if !documents.is_empty() => text,
        _ => return Err(CoreError::MissingInputs),
    };

    let rows = tokenize_non_empty(csv_text)?;
    let known = build_reference_set(&rows, &config.csv_column, &config.json_key)?;
    let scan = scan_documents(documents, &known, &config.json_key);
    Ok(assemble_result(documents.len(), scan, known.len()))
}
