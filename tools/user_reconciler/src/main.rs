use anyhow::Context;
use clap::{Parser, ValueEnum};
use reconcile_core::ingest::{collect_json_paths, load_json_documents, read_csv_source};
use reconcile_core::reconcile::model::{
    ComparisonResult, ReconcileConfig, DEFAULT_CSV_COLUMN, DEFAULT_JSON_KEY,
};
use reconcile_core::reconcile::session::ComparisonSession;
use reconcile_core::tabular::export::write_missing_users_csv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Compare the users listed in a CSV export against a batch of JSON files.
#[derive(Debug, Parser)]
#[command(name = "user_reconciler")]
struct Opts {
    /// CSV file holding the known users.
    #[arg(long)]
    csv: PathBuf,

    /// JSON files or directories of JSON files.
    #[arg(long, num_args = 1.., required = true)]
    json: Vec<PathBuf>,

    /// CSV column holding the user (plain value or JSON document).
    #[arg(long, default_value = DEFAULT_CSV_COLUMN)]
    column: String,

    /// JSON key holding the user.
    #[arg(long, default_value = DEFAULT_JSON_KEY)]
    key: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the missing-user summary as CSV to this file or directory.
    #[arg(long)]
    export: Option<PathBuf>,
}

fn run(opts: Opts) -> anyhow::Result<()> {
    let csv_text = read_csv_source(&opts.csv)
        .with_context(|| format!("read {}", opts.csv.display()))?;
    let paths = collect_json_paths(&opts.json).context("collect json files")?;
    let documents = load_json_documents(&paths).context("read json files")?;

    let mut session = ComparisonSession::new(ReconcileConfig {
        csv_column: opts.column,
        json_key: opts.key,
    });
    let result = session.compare(Some(csv_text.as_str()), &documents)?;

    match opts.format {
        OutputFormat::Table => print!("{}", render_table(result)),
        OutputFormat::Json => println!("{}", result.to_json_pretty()?),
    }

    if let Some(target) = &opts.export {
        let path = write_missing_users_csv(target, &result.missing_users)
            .with_context(|| format!("export to {}", target.display()))?;
        eprintln!("exported {}", path.display());
    }
    Ok(())
}

fn render_table(result: &ComparisonResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total JSON Files: {}\n", result.total_json_files));
    out.push_str(&format!("Matching Users:   {}\n", result.matching_users));
    out.push_str(&format!("Missing Users:    {}\n", result.missing_users.len()));
    out.push_str(&format!("CSV Users:        {}\n", result.csv_count));
    if result.missing_users.is_empty() {
        return out;
    }

    let user_width = result
        .missing_users
        .iter()
        .map(|m| m.current_user.chars().count())
        .chain(std::iter::once("User Email".len()))
        .max()
        .unwrap_or(0);
    out.push('\n');
    out.push_str(&format!(
        "{:<user_width$}  {:>10}  {}\n",
        "User Email", "File Count", "Files"
    ));
    for m in &result.missing_users {
        out.push_str(&format!(
            "{:<user_width$}  {:>10}  {}\n",
            m.current_user,
            m.count,
            m.files.join(", ")
        ));
    }
    out
}

fn main() {
    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(opts) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reconcile_core::reconcile::model::MissingUser;

    #[test]
    fn table_lists_missing_users() {
        let result = ComparisonResult {
            total_json_files: 3,
            matching_users: 1,
            missing_users: vec![MissingUser {
                current_user: "carol@x.com".to_string(),
                files: vec!["doc2.json".to_string(), "doc3.json".to_string()],
                count: 2,
            }],
            csv_count: 2,
        };
        let table = render_table(&result);
        assert!(table.contains("Total JSON Files: 3"));
        assert!(table.contains("Missing Users:    1"));
        assert!(table.contains("User Email"));
        assert!(table.contains("carol@x.com           2  doc2.json, doc3.json"));
    }

    #[test]
    fn table_without_missing_users_has_no_header_row() {
        let result = ComparisonResult {
            total_json_files: 1,
            matching_users: 1,
            missing_users: vec![],
            csv_count: 1,
        };
        assert!(!render_table(&result).contains("User Email"));
    }

    #[test]
    fn defaults_match_the_upload_form() {
        let opts = Opts::parse_from(["user_reconciler", "--csv", "u.csv", "--json", "a.json", "b"]);
        assert_eq!(opts.column, "File_Content");
        assert_eq!(opts.key, "currentUser");
        assert_eq!(opts.json.len(), 2);
        assert!(opts.export.is_none());
    }

    #[test]
    fn end_to_end_with_export() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("users.csv");
        std::fs::write(&csv, "File_Content\nalice\n").unwrap();
        let json_dir = dir.path().join("docs");
        std::fs::create_dir_all(&json_dir).unwrap();
        std::fs::write(json_dir.join("1.json"), r#"{"currentUser":"alice"}"#).unwrap();
        std::fs::write(json_dir.join("2.json"), r#"{"currentUser":"bob"}"#).unwrap();
        std::fs::write(json_dir.join("3.json"), "oops").unwrap();

        let opts = Opts::parse_from([
            "user_reconciler".into(),
            "--csv".into(),
            csv.into_os_string(),
            "--json".into(),
            json_dir.into_os_string(),
            "--format".into(),
            "json".into(),
            "--export".into(),
            dir.path().as_os_str().to_owned(),
        ]);
        run(opts).unwrap();

        let exported =
            std::fs::read_to_string(dir.path().join("missing_users_summary.csv")).unwrap();
        assert_eq!(
            exported,
            "\"currentUser\",\"count\",\"files\"\n\"bob\",\"1\",\"2.json\""
        );
    }
}
