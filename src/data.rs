use serde::{Deserialize, Serialize};

pub use crate::types::{ColumnName, DocId};

/// One source row projected onto the columns of interest.
///
/// `None` means the cell was absent: either the row was shorter than the
/// header or the column does not exist in the file at all. Which of the two
/// happened is resolved by the normalizer, which sees the table header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    /// Raw `position` cell, when present.
    pub position: Option<String>,
    /// Raw `description` cell, when present.
    pub description: Option<String>,
}

/// Ordered table produced by a `RecordSource`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    /// Column names exactly as they appear in the source header.
    pub columns: Vec<ColumnName>,
    /// Rows in source file order.
    pub rows: Vec<RawRecord>,
}

/// Fixed-shape record after projection, fallback, and identifier assignment.
///
/// `title` and `text` are never absent; an absent source cell becomes the
/// empty string. Serialized field order (`doc_id`, `title`, `text`) is part
/// of the feed contract.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Zero-based ordinal of the row in the input sequence.
    pub doc_id: DocId,
    /// Posting title taken from the `position` column.
    pub title: String,
    /// Posting body taken from the `description` column.
    pub text: String,
}

/// Ingestion envelope for one document: index key plus field mapping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedDocument {
    /// Index key, `id:hybrid-search:doc::{doc_id}`.
    pub put: String,
    /// Full normalized field mapping, `doc_id` included.
    pub fields: NormalizedRecord,
}
