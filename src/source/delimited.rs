use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::constants::columns;
use crate::data::{RawRecord, RawTable};
use crate::errors::FeedError;
use crate::source::RecordSource;
use crate::types::{ColumnName, SourceId};

/// Configuration for a delimited-file record source.
#[derive(Clone, Debug)]
pub struct DelimitedSourceConfig {
    /// Stable source identifier used in logs and error reporting.
    pub source_id: SourceId,
    /// Path to the delimited input file.
    pub path: PathBuf,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl DelimitedSourceConfig {
    /// Create a config for a comma-delimited source with explicit id and path.
    pub fn new(source_id: impl Into<SourceId>, path: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Override the field delimiter (for example `b'\t'` for tab-separated files).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Delimited-file source backed by the `csv` reader.
///
/// Rows shorter than the header are tolerated; the missing trailing cells
/// surface as absent values rather than parse errors.
pub struct DelimitedFileSource {
    config: DelimitedSourceConfig,
}

impl DelimitedFileSource {
    /// Create a source from configuration.
    pub fn new(config: DelimitedSourceConfig) -> Self {
        Self { config }
    }

    /// Create a comma-delimited source for `path` with an id derived from
    /// the file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let source_id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("delimited"));
        Self::new(DelimitedSourceConfig::new(source_id, path))
    }

    fn read_error(&self, reason: impl ToString) -> FeedError {
        FeedError::SourceRead {
            path: self.config.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl RecordSource for DelimitedFileSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn load(&self) -> Result<RawTable, FeedError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .flexible(true)
            .from_path(&self.config.path)
            .map_err(|err| self.read_error(err))?;

        let columns: Vec<ColumnName> = reader
            .headers()
            .map_err(|err| self.read_error(err))?
            .iter()
            .map(str::to_string)
            .collect();
        let position_idx = column_index(&columns, columns::POSITION);
        let description_idx = column_index(&columns, columns::DESCRIPTION);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| self.read_error(err))?;
            rows.push(RawRecord {
                position: cell(&record, position_idx),
                description: cell(&record, description_idx),
            });
        }
        debug!(
            "[docfeed:source] '{}' loaded {} rows across {} columns",
            self.id(),
            rows.len(),
            columns.len()
        );
        Ok(RawTable { columns, rows })
    }
}

fn column_index(columns: &[ColumnName], name: &str) -> Option<usize> {
    columns.iter().position(|column| column == name)
}

fn cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|idx| record.get(idx)).map(str::to_string)
}
