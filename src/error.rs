// ❌ Conversion Errors
// Every variant is fatal: the run stops at the first one

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Coarse failure category, handy for matching without destructuring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Create,
    Read,
    Decode,
    Write,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot create output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read input file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode input file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ConvertError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ConvertError::Create { .. } => FailureKind::Create,
            ConvertError::Read { .. } => FailureKind::Read,
            ConvertError::Decode { .. } => FailureKind::Decode,
            ConvertError::Write { .. } => FailureKind::Write,
        }
    }

    /// The file the failure is about (input for read/decode, output otherwise)
    pub fn path(&self) -> &PathBuf {
        match self {
            ConvertError::Create { path, .. }
            | ConvertError::Read { path, .. }
            | ConvertError::Decode { path, .. }
            | ConvertError::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_names_file() {
        let err = ConvertError::Read {
            path: PathBuf::from("azkar_massa.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(err.kind(), FailureKind::Read);
        assert!(err.to_string().contains("azkar_massa.json"));
        assert_eq!(err.path(), &PathBuf::from("azkar_massa.json"));
    }

    #[test]
    fn test_decode_error_carries_parse_diagnostic() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let diagnostic = source.to_string();
        let err = ConvertError::Decode {
            path: PathBuf::from("broken.json"),
            source,
        };

        assert_eq!(err.kind(), FailureKind::Decode);
        assert!(err.to_string().contains("broken.json"));
        assert!(err.to_string().contains(&diagnostic));
    }
}
