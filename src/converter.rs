// 🔁 Converter - Read every group, flatten, write numbered rows
//
// Pipeline:
//   1. Create/truncate the output (before any input is touched)
//   2. For each input in order: read → decode → emit one row per entry
//   3. Flush after each file, so finished files survive a later failure

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::parser::{GroupParser, JsonGroupParser};
use crate::record::OutputRow;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

// ============================================================================
// SUMMARY
// ============================================================================

/// Per-input result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub path: PathBuf,
    pub title: String,
    pub entries: usize,
}

/// What a successful run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub files: Vec<FileSummary>,
    pub total_rows: usize,
}

// ============================================================================
// CONVERTER
// ============================================================================

pub struct Converter<P: GroupParser = JsonGroupParser> {
    config: ConvertConfig,
    parser: P,
}

impl Converter<JsonGroupParser> {
    pub fn new(config: ConvertConfig) -> Self {
        Converter {
            config,
            parser: JsonGroupParser::new(),
        }
    }
}

impl<P: GroupParser> Converter<P> {
    pub fn with_parser(config: ConvertConfig, parser: P) -> Self {
        Converter { config, parser }
    }

    /// Run the whole conversion once. Stops at the first failure.
    pub fn run(&self) -> Result<ConversionSummary> {
        let result = self.convert();
        if let Err(e) = &result {
            error!(file = %e.path().display(), "conversion aborted: {}", e);
        }
        result
    }

    fn convert(&self) -> Result<ConversionSummary> {
        let output = &self.config.output;
        let file = File::create(output).map_err(|source| ConvertError::Create {
            path: output.clone(),
            source,
        })?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        info!(
            output = %output.display(),
            inputs = self.config.inputs.len(),
            "starting conversion"
        );

        let mut next_index = 0usize;
        let mut files = Vec::with_capacity(self.config.inputs.len());

        for input in &self.config.inputs {
            let group = self.parser.parse(input)?;

            for entry in &group.entries {
                let row = OutputRow::from_entry(next_index, entry);
                writer
                    .write_record(row.into_fields())
                    .map_err(|source| write_error(output, source))?;
                next_index += 1;
            }
            writer
                .flush()
                .map_err(|source| write_error(output, source.into()))?;

            debug!(
                file = %input.display(),
                title = %group.title,
                entries = group.entries.len(),
                "converted group"
            );
            files.push(FileSummary {
                path: input.clone(),
                title: group.title,
                entries: group.entries.len(),
            });
        }

        writer
            .into_inner()
            .map_err(|e| write_error(output, e.into_error().into()))?;

        info!(rows = next_index, output = %output.display(), "conversion complete");

        Ok(ConversionSummary {
            output: output.clone(),
            files,
            total_rows: next_index,
        })
    }
}

fn write_error(path: &Path, source: csv::Error) -> ConvertError {
    ConvertError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Convert with the JSON parser
pub fn convert(config: ConvertConfig) -> Result<ConversionSummary> {
    Converter::new(config).run()
}
