pub mod code;
pub mod error;
pub mod record;
pub mod report;
pub mod source;

pub use code::CheckCode;
pub use error::{Result, RowlintError};
pub use record::CheckRecord;
pub use report::ValidationReport;
pub use source::SourceMeta;
