//! Formatter option records and the layers they come from.
//!
//! This module provides:
//! - The `FormatOptions` / `EditorSettings` records
//! - `.prettierrc.toml` discovery (search upward from a file's directory)
//! - `.editorconfig` reading, cascading up to a `root = true` file
//! - Layered merging of partial option records

mod editorconfig;
mod file;
mod merge;
mod schema;

pub use editorconfig::{editorconfig_options, find_editorconfig, resolve_editorconfig};
pub use file::{
    find_file_upward, find_options_file, load_editor_settings, load_options, ConfigError,
    OPTIONS_FILE_NAME,
};
pub use merge::{
    editor_options, merge_editor_settings, merge_layers, overlay, CliEditorOptions,
    LEGACY_ARROW_PARENS, LEGACY_END_OF_LINE, LEGACY_TRAILING_COMMA,
};
pub use schema::{EditorSettings, FormatOptions, RangeFormattingOptions};
