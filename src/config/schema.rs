//! Option records shared by every configuration layer

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Formatter options, as found in a project options file or produced by
/// merging layers.
///
/// Every field is optional so a record can describe a partial layer. Keys
/// the resolver does not know about are kept in `extra` and passed through.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_parens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_spacing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_whitespace_sensitivity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_pragma: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx_bracket_same_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx_single_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prose_wrap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_props: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_pragma: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_comma: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vue_indent_script_and_style: Option<bool>,

    /// File being formatted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<PathBuf>,
    /// Parser identifier handed to the formatter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<usize>,

    /// Options with no dedicated field (plugins, overrides, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl FormatOptions {
    /// Layer carrying only the file path and parser of a request.
    pub fn for_file(filepath: &Path, parser: &str) -> Self {
        Self {
            filepath: Some(filepath.to_path_buf()),
            parser: Some(parser.to_string()),
            ..Default::default()
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Formatting settings owned by the editor host.
///
/// These are only consulted when the project has no configuration of its
/// own.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    pub arrow_parens: Option<String>,
    pub bracket_spacing: Option<bool>,
    pub end_of_line: Option<String>,
    pub html_whitespace_sensitivity: Option<String>,
    pub insert_pragma: Option<bool>,
    pub jsx_bracket_same_line: Option<bool>,
    pub jsx_single_quote: Option<bool>,
    pub print_width: Option<usize>,
    pub prose_wrap: Option<String>,
    pub quote_props: Option<String>,
    pub require_pragma: Option<bool>,
    pub semi: Option<bool>,
    pub single_quote: Option<bool>,
    pub tab_width: Option<usize>,
    pub trailing_comma: Option<String>,
    pub use_tabs: Option<bool>,
    pub vue_indent_script_and_style: Option<bool>,
}

/// Byte offsets of the region a range-format request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFormattingOptions {
    pub range_start: usize,
    pub range_end: usize,
}

impl From<RangeFormattingOptions> for FormatOptions {
    fn from(range: RangeFormattingOptions) -> Self {
        Self {
            range_start: Some(range.range_start),
            range_end: Some(range.range_end),
            ..Default::default()
        }
    }
}
