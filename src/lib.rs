//! Resolve the options a code formatter should use for a file.
//!
//! A project's own configuration always wins. Without one, the editor's
//! settings are used, with a few defaults depending on the formatter
//! version. See [`ConfigResolver`].

pub mod config;
pub mod discovery;
pub mod logging;
pub mod resolver;
pub mod version;

pub use config::{
    load_editor_settings, merge_editor_settings, CliEditorOptions, ConfigError, EditorSettings,
    FormatOptions, RangeFormattingOptions,
};
pub use discovery::{BoxError, ConfigDiscovery, DiscoveryError, DiscoveryOptions, FileDiscovery};
pub use logging::{LogSink, TracingSink};
pub use resolver::{ConfigResolver, FormatRequest, Resolution, DISCOVERED_MESSAGE, FALLBACK_MESSAGE};
pub use version::uses_newer_defaults;
