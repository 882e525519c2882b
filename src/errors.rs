use std::path::PathBuf;

use thiserror::Error;

use crate::types::ColumnName;

/// Error type for source loading, schema validation, and feed output failures.
///
/// Every variant is fatal to the run: there is no per-record recovery, and a
/// partially written output file must be treated as invalid.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("source file '{}' could not be read: {reason}", path.display())]
    SourceRead { path: PathBuf, reason: String },
    #[error("required column '{column}' is missing from the source header")]
    Schema { column: ColumnName },
    #[error("feed output '{}' could not be written: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}
