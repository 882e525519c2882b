//! Put-identifier formatting and document envelope construction.

use crate::constants::id_scheme;
use crate::data::{FeedDocument, NormalizedRecord};
use crate::types::DocId;

/// Format the index key for `doc_id`.
///
/// The colon-delimited namespace/doc-type layout is a fixed downstream
/// contract: `id:hybrid-search:doc::{doc_id}`.
pub fn put_id(doc_id: DocId) -> String {
    format!(
        "id:{namespace}:{doc_type}::{doc_id}",
        namespace = id_scheme::NAMESPACE,
        doc_type = id_scheme::DOC_TYPE,
    )
}

impl FeedDocument {
    /// Wrap a normalized record in its ingestion envelope.
    ///
    /// Construction cannot fail; the envelope carries the full field
    /// mapping, `doc_id` included.
    pub fn from_record(fields: NormalizedRecord) -> Self {
        Self {
            put: put_id(fields.doc_id),
            fields,
        }
    }
}

/// Build envelopes for a normalized sequence, preserving order.
pub fn build_documents(records: Vec<NormalizedRecord>) -> Vec<FeedDocument> {
    records.into_iter().map(FeedDocument::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_id_matches_the_fixed_scheme() {
        assert_eq!(put_id(0), "id:hybrid-search:doc::0");
        assert_eq!(put_id(41), "id:hybrid-search:doc::41");
    }

    #[test]
    fn envelope_keeps_the_full_field_mapping() {
        let document = FeedDocument::from_record(NormalizedRecord {
            doc_id: 7,
            title: "Engineer".to_string(),
            text: "Build systems".to_string(),
        });
        assert_eq!(document.put, "id:hybrid-search:doc::7");
        assert_eq!(document.fields.doc_id, 7);
        assert_eq!(document.fields.title, "Engineer");
        assert_eq!(document.fields.text, "Build systems");
    }

    #[test]
    fn one_envelope_per_record_in_order() {
        let records = vec![
            NormalizedRecord {
                doc_id: 0,
                title: String::new(),
                text: String::new(),
            },
            NormalizedRecord {
                doc_id: 1,
                title: "Analyst".to_string(),
                text: "Read reports".to_string(),
            },
        ];
        let documents = build_documents(records);
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].put, "id:hybrid-search:doc::0");
        assert_eq!(documents[1].put, "id:hybrid-search:doc::1");
    }
}
