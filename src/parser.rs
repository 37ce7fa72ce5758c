// 🏗️ Group Parser - Raw file bytes → RecordGroup

use crate::error::{ConvertError, Result};
use crate::record::RecordGroup;
use std::fs;
use std::path::Path;
use tracing::debug;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// GroupParser - Turns one input file into one RecordGroup
///
/// Reading and decoding are separate steps so a missing file and a
/// malformed one surface as different failures.
pub trait GroupParser {
    /// Decode already-read bytes. `file_path` is only used for error context.
    fn decode(&self, file_path: &Path, bytes: &[u8]) -> Result<RecordGroup>;

    /// Read the whole file, then decode it
    fn parse(&self, file_path: &Path) -> Result<RecordGroup> {
        let bytes = fs::read(file_path).map_err(|source| ConvertError::Read {
            path: file_path.to_path_buf(),
            source,
        })?;
        debug!(file = %file_path.display(), bytes = bytes.len(), "read input file");

        self.decode(file_path, &bytes)
    }
}

// ============================================================================
// JSON PARSER
// ============================================================================

/// JSON documents of the form `{"title": ..., "content": [{"zekr": ...}, ...]}`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonGroupParser;

impl JsonGroupParser {
    pub fn new() -> Self {
        JsonGroupParser
    }
}

impl GroupParser for JsonGroupParser {
    fn decode(&self, file_path: &Path, bytes: &[u8]) -> Result<RecordGroup> {
        serde_json::from_slice(bytes).map_err(|source| ConvertError::Decode {
            path: file_path.to_path_buf(),
            source,
        })
    }
}
