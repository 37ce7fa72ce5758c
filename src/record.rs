// 📿 Record Model - Remembrance groups as decoded from disk
// One RecordGroup per input file, one Entry per phrase, one OutputRow per emitted line

use serde::{Deserialize, Deserializer};

/// Field delimiter of the output format
pub const DELIMITER: char = ',';

/// Arabic comma (U+060C), stands in for every literal delimiter inside a text
pub const COMMA_GLYPH: char = '\u{060C}';

// ============================================================================
// DECODED TYPES
// ============================================================================

/// RecordGroup - The content of one input file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordGroup {
    /// Descriptive title, never emitted
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Phrases in file order; missing or null means none
    #[serde(
        default,
        rename = "content",
        alias = "entries",
        deserialize_with = "null_as_default"
    )]
    pub entries: Vec<Entry>,
}

/// Entry - One remembrance phrase
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    /// The phrase itself (may contain commas). Required, but null reads as empty.
    #[serde(rename = "zekr", alias = "text", deserialize_with = "null_as_default")]
    pub text: String,

    /// How many times it should be recited
    #[serde(default, deserialize_with = "null_as_default")]
    pub repeat: i64,

    /// Optional blessing note
    #[serde(default, rename = "bless", alias = "blessing")]
    pub blessing: Option<String>,
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Entry {
            text: text.into(),
            repeat: 0,
            blessing: None,
        }
    }

    /// Builder pattern: set recitation count
    pub fn with_repeat(mut self, repeat: i64) -> Self {
        self.repeat = repeat;
        self
    }

    /// Builder pattern: attach a blessing note
    pub fn with_blessing(mut self, blessing: impl Into<String>) -> Self {
        self.blessing = Some(blessing.into());
        self
    }
}

// ============================================================================
// OUTPUT PROJECTION
// ============================================================================

/// OutputRow - `<index>,<normalized text>` as written to the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub index: usize,
    pub text: String,
}

impl OutputRow {
    /// Project an entry at the given global position
    pub fn from_entry(index: usize, entry: &Entry) -> Self {
        OutputRow {
            index,
            text: normalize_text(&entry.text),
        }
    }

    /// Fields in write order
    pub fn into_fields(self) -> [String; 2] {
        [self.index.to_string(), self.text]
    }
}

/// A present `null` decodes like an absent field; wrong types still fail
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Replace every literal delimiter with the Arabic comma, one for one.
///
/// No escaping: a glyph already present in the input is left as is and
/// cannot be told apart from a replaced one afterwards.
pub fn normalize_text(text: &str) -> String {
    text.replace(DELIMITER, &COMMA_GLYPH.to_string())
}
