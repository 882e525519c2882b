#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Constants used by the identifier scheme, required columns, and writer.
pub mod constants;
/// Record payload and envelope types.
pub mod data;
/// Document envelope construction and put-identifier formatting.
pub mod envelope;
/// Record normalization: projection, fallback, identifier assignment.
pub mod normalize;
/// End-to-end feed construction.
pub mod pipeline;
/// Record source traits and built-in sources.
pub mod source;
/// Shared type aliases.
pub mod types;
/// Line-delimited JSON feed emission.
pub mod writer;

mod errors;

pub use data::{FeedDocument, NormalizedRecord, RawRecord, RawTable};
pub use envelope::{build_documents, put_id};
pub use errors::FeedError;
pub use normalize::{normalize_record, normalize_table, require_columns};
pub use pipeline::{build_feed, build_feed_from_source};
pub use source::{DelimitedFileSource, DelimitedSourceConfig, RecordSource};
pub use types::{ColumnName, DocId, SourceId};
pub use writer::{write_feed, write_feed_file};
