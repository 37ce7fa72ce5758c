// Azkar Parser - Core Library
// Converts remembrance JSON groups into one numbered line file

pub mod config;
pub mod converter;
pub mod error;
pub mod logging;
pub mod parser;
pub mod record;

// Re-export commonly used types
pub use config::{ConvertConfig, DEFAULT_INPUTS, DEFAULT_OUTPUT};
pub use converter::{convert, ConversionSummary, Converter, FileSummary};
pub use error::{ConvertError, FailureKind, Result};
pub use parser::{GroupParser, JsonGroupParser};
pub use record::{normalize_text, Entry, OutputRow, RecordGroup, COMMA_GLYPH, DELIMITER};
