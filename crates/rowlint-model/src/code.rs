use std::fmt;

use serde::{Deserialize, Serialize};

/// Diagnostic code vocabulary.
///
/// This is the stable external contract: the serialized names must not be
/// renamed and their meanings must not be reassigned. Modeled as a closed
/// enum so exhaustiveness checks catch unhandled codes at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCode {
    /// Declared/sniffed content type is not CSV-compatible.
    WrongContentType,
    /// Source resource could not be retrieved at all.
    NotFound,
    /// Row field count differs from the header row's field count.
    RaggedRows,
    /// Every field in the row is empty.
    BlankRows,
    /// Byte sequence could not be decoded under the assumed encoding.
    InvalidEncoding,
    /// Unescaped quote character outside a properly opened quoted field.
    StrayQuote,
    /// Quoted field not terminated before row or stream end.
    UnclosedQuote,
    /// Quoted field has leading or trailing whitespace outside the quotes.
    Whitespace,
    /// Line-break sequences are inconsistent across the file.
    LineBreaks,
}

impl CheckCode {
    pub const ALL: [CheckCode; 9] = [
        CheckCode::WrongContentType,
        CheckCode::NotFound,
        CheckCode::RaggedRows,
        CheckCode::BlankRows,
        CheckCode::InvalidEncoding,
        CheckCode::StrayQuote,
        CheckCode::UnclosedQuote,
        CheckCode::Whitespace,
        CheckCode::LineBreaks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckCode::WrongContentType => "wrong_content_type",
            CheckCode::NotFound => "not_found",
            CheckCode::RaggedRows => "ragged_rows",
            CheckCode::BlankRows => "blank_rows",
            CheckCode::InvalidEncoding => "invalid_encoding",
            CheckCode::StrayQuote => "stray_quote",
            CheckCode::UnclosedQuote => "unclosed_quote",
            CheckCode::Whitespace => "whitespace",
            CheckCode::LineBreaks => "line_breaks",
        }
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
