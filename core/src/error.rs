use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("CSV file is empty")]
    EmptyInput,

    #[error("Column \"{}\" not found in CSV. Available columns: {}", .column, .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("Please select both CSV file and JSON files")]
    MissingInputs,

    #[error("failed to parse {name}: {source}")]
    DocumentParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
