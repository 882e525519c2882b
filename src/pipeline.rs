//! End-to-end feed construction.

use std::path::Path;

use tracing::debug;

use crate::envelope::build_documents;
use crate::errors::FeedError;
use crate::normalize::normalize_table;
use crate::source::{DelimitedFileSource, RecordSource};
use crate::writer::write_feed_file;

/// Build the feed for any record source, writing line-delimited JSON to
/// `output`.
///
/// Stages run strictly in sequence, each consuming the whole output of its
/// predecessor: load, normalize, build envelopes, write. Returns the number
/// of documents written. Any failure aborts the whole run; a partially
/// written output file must be treated as invalid.
pub fn build_feed_from_source<S: RecordSource>(
    source: &S,
    output: &Path,
) -> Result<usize, FeedError> {
    let table = source.load()?;
    let records = normalize_table(&table)?;
    let documents = build_documents(records);
    write_feed_file(&documents, output)?;
    debug!(
        "[docfeed:pipeline] '{}' fed {} documents",
        source.id(),
        documents.len()
    );
    Ok(documents.len())
}

/// Build the feed for a comma-delimited `input` file.
pub fn build_feed(input: &Path, output: &Path) -> Result<usize, FeedError> {
    build_feed_from_source(&DelimitedFileSource::from_path(input), output)
}
