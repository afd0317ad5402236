use crate::error::{CoreError, CoreResult};
use crate::reconcile::model::JsonDocument;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const UTF8_BOM: char = '\u{feff}';

/// Read the CSV source. Invalid UTF-8 is replaced; a leading BOM is dropped so
/// the first header name still matches.
pub fn read_csv_source(path: impl AsRef<Path>) -> CoreResult<String> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(decode_text(&bytes))
}

/// Expand the given inputs into JSON file paths.
///
/// Files are taken as given. Directories are walked recursively and their
/// `*.json` files (extension compared case-insensitively) are appended in
/// sorted path order.
pub fn collect_json_paths<P: AsRef<Path>>(inputs: &[P]) -> CoreResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if !input.is_dir() {
            paths.push(input.to_path_buf());
            continue;
        }

        let mut found = Vec::new();
        for e in WalkDir::new(input) {
            let e =
                e.map_err(|err| CoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
            if e.file_type().is_file() && has_json_extension(e.path()) {
                found.push(e.into_path());
            }
        }
        found.sort();
        tracing::debug!(dir = %input.display(), files = found.len(), "collected json files");
        paths.extend(found);
    }
    Ok(paths)
}

/// Read every path into a named document. The name is the file name; the text
/// is decoded like the CSV source.
pub fn load_json_documents<P: AsRef<Path>>(paths: &[P]) -> CoreResult<Vec<JsonDocument>> {
    paths
        .iter()
        .map(|p| {
            let p = p.as_ref();
            let bytes = std::fs::read(p)?;
            let name = p
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| p.display().to_string());
            Ok(JsonDocument::new(name, decode_text(&bytes)))
        })
        .collect()
}

fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix(UTF8_BOM).unwrap_or(&*text).to_string()
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
