//! Line-delimited JSON feed emission.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::constants::writer::PREVIEW_DOCUMENTS;
use crate::data::FeedDocument;
use crate::errors::FeedError;

/// Write documents as line-delimited JSON, one object per line in order.
///
/// Each document is serialized to a complete line (terminating newline
/// included) before any byte reaches the writer, so a record never
/// half-writes.
pub fn write_feed<W: Write>(documents: &[FeedDocument], mut writer: W) -> io::Result<()> {
    for document in documents {
        let mut line = serde_json::to_string(document)?;
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

/// Write the feed to a file at `path`, creating or truncating it.
///
/// Failures map to [`FeedError::Write`] carrying the destination path; a
/// file left behind by a failed run is incomplete and must not be fed.
pub fn write_feed_file(documents: &[FeedDocument], path: &Path) -> Result<(), FeedError> {
    preview(documents);
    let file = File::create(path).map_err(|err| write_error(path, err))?;
    write_feed(documents, BufWriter::new(file)).map_err(|err| write_error(path, err))
}

fn write_error(path: &Path, err: io::Error) -> FeedError {
    FeedError::Write {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn preview(documents: &[FeedDocument]) {
    for document in documents.iter().take(PREVIEW_DOCUMENTS) {
        debug!(
            "[docfeed:writer] {} title='{}'",
            document.put, document.fields.title
        );
    }
}
