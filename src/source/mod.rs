//! Record source interfaces and built-in sources.
//!
//! Ownership model:
//! - `RecordSource` is the pipeline-facing interface that loads a full
//!   ordered table in one call.
//! - Implementations own parsing and cell projection. Column-presence
//!   validation stays with the normalizer, which inspects the loaded
//!   header, so sources never reject a structurally valid file.

use crate::data::RawTable;
use crate::errors::FeedError;

/// Source implementation modules.
pub mod delimited;

pub use delimited::{DelimitedFileSource, DelimitedSourceConfig};

/// Pipeline-facing record source interface.
///
/// Implementations load eagerly and must preserve source row order; for a
/// fixed file state the loaded table is deterministic.
pub trait RecordSource {
    /// Stable source identifier used in logs and error reporting.
    fn id(&self) -> &str;
    /// Load the full ordered table of raw records.
    fn load(&self) -> Result<RawTable, FeedError>;
}
