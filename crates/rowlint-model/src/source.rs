use serde::{Deserialize, Serialize};

/// Caller-declared metadata about a CSV source.
///
/// Everything is optional; absent values fall back to CSV/UTF-8 defaults in
/// the report builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMeta {
    /// Declared MIME type, e.g. `text/csv; charset=utf-8`.
    pub content_type: Option<String>,
    /// Declared character encoding.
    pub encoding: Option<String>,
    /// Declared extension/format, e.g. `csv`.
    pub extension: Option<String>,
}

impl SourceMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}
