/// Constants used by the put-identifier scheme.
pub mod id_scheme {
    /// Namespace segment of generated `put` identifiers.
    pub const NAMESPACE: &str = "hybrid-search";
    /// Document-type segment of generated `put` identifiers.
    pub const DOC_TYPE: &str = "doc";
}

/// Constants naming the source columns the feed is built from.
pub mod columns {
    /// Column holding the posting title.
    pub const POSITION: &str = "position";
    /// Column holding the posting body text.
    pub const DESCRIPTION: &str = "description";
    /// Columns that must exist in the source header, in reporting order.
    pub const REQUIRED: [&str; 2] = [POSITION, DESCRIPTION];
}

/// Constants used by feed writing.
pub mod writer {
    /// Number of leading documents echoed at debug level before a write.
    pub const PREVIEW_DOCUMENTS: usize = 5;
}
