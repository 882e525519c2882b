//! Record normalization: projection, fallback, and identifier assignment.

use crate::constants::columns;
use crate::data::{NormalizedRecord, RawRecord, RawTable};
use crate::errors::FeedError;
use crate::types::{ColumnName, DocId};

/// Verify that every required source column exists in the loaded header.
///
/// A cell missing from an individual row is tolerated downstream; a column
/// missing from the header entirely means the file cannot describe the feed
/// and the run is rejected before any output is produced.
pub fn require_columns(header: &[ColumnName]) -> Result<(), FeedError> {
    for required in columns::REQUIRED {
        if !header.iter().any(|column| column == required) {
            return Err(FeedError::Schema {
                column: required.to_string(),
            });
        }
    }
    Ok(())
}

/// Project one raw row onto the fixed record shape.
///
/// Pure per-record transform: `position` becomes `title`, `description`
/// becomes `text`, absent cells become empty strings, and `doc_id` is the
/// caller-supplied ordinal, never a source-provided value.
pub fn normalize_record(doc_id: DocId, raw: &RawRecord) -> NormalizedRecord {
    NormalizedRecord {
        doc_id,
        title: raw.position.clone().unwrap_or_default(),
        text: raw.description.clone().unwrap_or_default(),
    }
}

/// Normalize a full table, assigning zero-based ordinals in row order.
pub fn normalize_table(table: &RawTable) -> Result<Vec<NormalizedRecord>, FeedError> {
    require_columns(&table.columns)?;
    Ok(table
        .rows
        .iter()
        .enumerate()
        .map(|(doc_id, raw)| normalize_record(doc_id, raw))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(position: Option<&str>, description: Option<&str>) -> RawRecord {
        RawRecord {
            position: position.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    fn table_with(rows: Vec<RawRecord>) -> RawTable {
        RawTable {
            columns: vec!["position".to_string(), "description".to_string()],
            rows,
        }
    }

    #[test]
    fn renames_position_and_description() {
        let record = normalize_record(3, &raw(Some("Engineer"), Some("Build systems")));
        assert_eq!(record.doc_id, 3);
        assert_eq!(record.title, "Engineer");
        assert_eq!(record.text, "Build systems");
    }

    #[test]
    fn absent_cells_become_empty_strings() {
        let record = normalize_record(0, &raw(None, None));
        assert_eq!(record.title, "");
        assert_eq!(record.text, "");
    }

    #[test]
    fn ordinals_follow_row_order() {
        let table = table_with(vec![
            raw(Some("First"), Some("a")),
            raw(Some("Second"), Some("b")),
            raw(Some("Third"), Some("c")),
        ]);
        let records = normalize_table(&table).unwrap();
        let ids: Vec<_> = records.iter().map(|record| record.doc_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(records[1].title, "Second");
    }

    #[test]
    fn missing_description_column_is_a_schema_error() {
        let table = RawTable {
            columns: vec!["position".to_string(), "location".to_string()],
            rows: vec![raw(Some("Engineer"), None)],
        };
        let err = normalize_table(&table).unwrap_err();
        match err {
            FeedError::Schema { column } => assert_eq!(column, "description"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn extra_columns_are_ignored() {
        let table = RawTable {
            columns: vec![
                "id".to_string(),
                "position".to_string(),
                "description".to_string(),
                "salary".to_string(),
            ],
            rows: vec![raw(Some("Engineer"), Some("Build systems"))],
        };
        let records = normalize_table(&table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Engineer");
    }
}
