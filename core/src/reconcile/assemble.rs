use super::model::{ComparisonResult, MissingUser, ScanOutcome};

pub fn assemble_result(
    document_count: usize,
    scan: ScanOutcome,
    csv_count: usize,
) -> ComparisonResult {
    let missing_users = scan
        .missing
        .into_iter()
        .map(|(current_user, files)| MissingUser {
            count: files.len(),
            current_user,
            files,
        })
        .collect();

    ComparisonResult {
        total_json_files: document_count,
        matching_users: scan.match_count,
        missing_users,
        csv_count,
    }
}
