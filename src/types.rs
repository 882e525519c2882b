/// Zero-based ordinal of a record in the input sequence.
/// The sole identity source for documents; reordering input rows changes ids.
/// Examples: `0`, `41`
pub type DocId = usize;
/// Name of a column in a source table header.
/// Examples: `position`, `description`
pub type ColumnName = String;
/// Identifier for the source that produced a table.
/// Examples: `JD_data.csv`, `postings`
pub type SourceId = String;
