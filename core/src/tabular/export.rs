use crate::error::CoreResult;
use crate::reconcile::model::MissingUser;
use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = "missing_users_summary.csv";

/// Render the missing-user summary as CSV.
///
/// Every field is quoted and embedded quotes are doubled, so the output reads
/// back through [`crate::tabular::tokenizer::tokenize`] unchanged. Rows are
/// separated by `\n` with no trailing terminator.
pub fn render_missing_users_csv(missing_users: &[MissingUser]) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);
    wtr.write_record(["currentUser", "count", "files"])?;
    for user in missing_users {
        wtr.write_record([
            user.current_user.as_str(),
            user.count.to_string().as_str(),
            user.files.join(";").as_str(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    let mut out = String::from_utf8_lossy(&bytes).into_owned();
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Write the summary to `target`.
///
/// An existing directory, or a path ending in a separator such as `out/`,
/// receives `missing_users_summary.csv`; missing directories are created.
pub fn write_missing_users_csv(
    target: impl AsRef<Path>,
    missing_users: &[MissingUser],
) -> CoreResult<PathBuf> {
    let target = target.as_ref();
    let path = if target.is_dir() || ends_with_separator(target) {
        target.join(EXPORT_FILE_NAME)
    } else {
        target.to_path_buf()
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let csv = render_missing_users_csv(missing_users)?;
    std::fs::write(&path, csv)?;
    tracing::debug!(path = %path.display(), groups = missing_users.len(), "wrote export");
    Ok(path)
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}
