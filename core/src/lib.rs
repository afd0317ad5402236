pub mod ingest;
pub mod reconcile;
pub mod tabular;

pub mod error;
