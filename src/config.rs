// ⚙️ Conversion Config - Which sources, in which order, into which file

use std::path::{Path, PathBuf};

/// Input files of the reference deployment, in processing order
pub const DEFAULT_INPUTS: [&str; 3] = [
    "azkar_sabah.json",
    "azkar_massa.json",
    "PostPrayer_azkar.json",
];

/// Output file of the reference deployment
pub const DEFAULT_OUTPUT: &str = "parsed_azkar.csv";

/// ConvertConfig - Ordered input sources plus the single output target
///
/// Order matters: row indices follow input order, then in-file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

impl ConvertConfig {
    /// Empty input list writing to `output`
    pub fn new(output: impl AsRef<Path>) -> Self {
        ConvertConfig {
            inputs: Vec::new(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// Builder pattern: append an input after the existing ones
    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.inputs.push(input.as_ref().to_path_buf());
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        DEFAULT_INPUTS
            .iter()
            .fold(ConvertConfig::new(DEFAULT_OUTPUT), |config, input| {
                config.with_input(input)
            })
    }
}
