use rowlint_model::CheckCode;

/// Human-readable description for each diagnostic code.
///
/// The single constant code-to-text mapping. Presentation layers look
/// messages up here; records themselves never carry this text.
pub fn describe(code: CheckCode) -> &'static str {
    match code {
        CheckCode::WrongContentType => "Content type is not text/csv",
        CheckCode::NotFound => "The source data could not be retrieved",
        CheckCode::RaggedRows => {
            "Row has a different number of columns (than the first row in the file)"
        }
        CheckCode::BlankRows => {
            "Completely empty row, e.g. blank line or a line where all column values are empty"
        }
        CheckCode::InvalidEncoding => {
            "Encoding error when parsing row, e.g. because of invalid characters"
        }
        CheckCode::StrayQuote => "Missing or stray quote",
        CheckCode::UnclosedQuote => "Unclosed quoted field",
        CheckCode::Whitespace => "A quoted column has leading or trailing whitespace",
        CheckCode::LineBreaks => "Line breaks were inconsistent or incorrectly specified",
    }
}
