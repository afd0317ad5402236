use super::field::extract_identifier;
use super::model::{JsonDocument, ScanOutcome};
use super::reference_set::ReferenceSet;
use crate::error::{CoreError, CoreResult};
use serde_json::Value;

/// Classify each document's identifier against the reference set.
///
/// Documents that fail to parse, or carry no identifier, are left out of both
/// the match count and the missing groups. Unparseable documents are reported
/// on the `warn` log channel and never abort the batch.
pub fn scan_documents(
    documents: &[JsonDocument],
    known: &ReferenceSet,
    json_key: &str,
) -> ScanOutcome {
    let outcome = documents
        .iter()
        .fold(ScanOutcome::default(), |acc, document| {
            match document_identifier(document, json_key) {
                Ok(Some(identifier)) => record(acc, identifier, &document.name, known),
                Ok(None) => acc,
                Err(e) => {
                    tracing::warn!(document = %document.name, error = %e, "skipping document");
                    acc
                }
            }
        });

    tracing::debug!(
        documents = documents.len(),
        matching = outcome.match_count,
        missing_groups = outcome.missing.len(),
        "scanned documents"
    );
    outcome
}

fn document_identifier(document: &JsonDocument, json_key: &str) -> CoreResult<Option<String>> {
    let value: Value =
        serde_json::from_str(&document.text).map_err(|source| CoreError::DocumentParse {
            name: document.name.clone(),
            source,
        })?;
    Ok(extract_identifier(&value, json_key))
}

fn record(
    mut acc: ScanOutcome,
    identifier: String,
    name: &str,
    known: &ReferenceSet,
) -> ScanOutcome {
    if known.contains(&identifier) {
        acc.match_count += 1;
    } else {
        acc.missing
            .entry(identifier)
            .or_default()
            .push(name.to_string());
    }
    acc
}
