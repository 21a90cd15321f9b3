//! Effective option resolution for a single file.
//!
//! Layers, lowest precedence first:
//! 1. editor settings (only when the project has no configuration)
//! 2. `filepath` and `parser` of the request
//! 3. range offsets of a range-format request
//! 4. the discovered project configuration
//!
//! The discovered layer is applied last, so a project file that sets
//! `filepath`, `parser` or range keys overrides the request values.

use std::path::Path;

use crate::config::{
    editor_options, merge_layers, EditorSettings, FormatOptions, RangeFormattingOptions,
};
use crate::discovery::{ConfigDiscovery, DiscoveryError, DiscoveryOptions};
use crate::logging::LogSink;
use crate::version::uses_newer_defaults;

pub const FALLBACK_MESSAGE: &str =
    "No project configuration (.prettierrc or .editorconfig) found, falling back to editor settings";
pub const DISCOVERED_MESSAGE: &str =
    "Project configuration (.prettierrc or .editorconfig) found, editor settings will not be used";

/// Outcome of [`ConfigResolver::compute_effective_options`].
///
/// Callers must check for `Failed` before formatting; a failure means the
/// project configuration exists but could not be read.
#[derive(Debug)]
#[must_use]
pub enum Resolution {
    Resolved(FormatOptions),
    Failed(DiscoveryError),
}

impl Resolution {
    pub fn options(&self) -> Option<&FormatOptions> {
        match self {
            Resolution::Resolved(options) => Some(options),
            Resolution::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DiscoveryError> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Failed(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<FormatOptions, DiscoveryError> {
        match self {
            Resolution::Resolved(options) => Ok(options),
            Resolution::Failed(e) => Err(e),
        }
    }
}

/// A single formatting request.
#[derive(Debug, Clone, Copy)]
pub struct FormatRequest<'a> {
    pub file_path: &'a Path,
    pub parser: &'a str,
    pub editor: &'a EditorSettings,
    pub formatter_version: &'a str,
    pub discovery: Option<&'a DiscoveryOptions>,
    pub range: Option<RangeFormattingOptions>,
}

/// Resolves the options a formatter should use for a file.
///
/// Holds nothing but the log sink, so one resolver can serve concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct ConfigResolver<L> {
    sink: L,
}

impl<L: LogSink> ConfigResolver<L> {
    pub fn new(sink: L) -> Self {
        Self { sink }
    }

    /// Ask `engine` for the project configuration of `file_path`.
    ///
    /// Engine failures are returned as [`DiscoveryError`], never propagated
    /// any other way.
    pub async fn resolve_discovered_config(
        &self,
        engine: &dyn ConfigDiscovery,
        file_path: &Path,
        options: Option<&DiscoveryOptions>,
    ) -> Result<Option<FormatOptions>, DiscoveryError> {
        let default_options = DiscoveryOptions::default();
        let options = options.unwrap_or(&default_options);

        tracing::debug!(file = %file_path.display(), ?options, "discovering project configuration");
        engine
            .discover(file_path, options)
            .await
            .map_err(|source| DiscoveryError {
                path: file_path.to_path_buf(),
                source,
            })
    }

    /// Returns whether `file_path` has a project configuration.
    ///
    /// There is no sensible answer when discovery itself fails, so the
    /// error is handed back to the caller.
    pub async fn check_has_config(
        &self,
        engine: &dyn ConfigDiscovery,
        file_path: &Path,
    ) -> Result<bool, DiscoveryError> {
        let discovered = self
            .resolve_discovered_config(engine, file_path, None)
            .await?;
        Ok(discovered.is_some())
    }

    /// Compute the options to format `request.file_path` with.
    pub async fn compute_effective_options(
        &self,
        engine: &dyn ConfigDiscovery,
        request: FormatRequest<'_>,
    ) -> Resolution {
        let discovered = match self
            .resolve_discovered_config(engine, request.file_path, request.discovery)
            .await
        {
            Ok(discovered) => discovered,
            Err(e) => return Resolution::Failed(e),
        };

        let fallback_to_editor = discovered.is_none();
        let newer_defaults = uses_newer_defaults(request.formatter_version);

        let editor_layer =
            fallback_to_editor.then(|| editor_options(request.editor, newer_defaults));

        if fallback_to_editor {
            self.sink.log_info(FALLBACK_MESSAGE);
        } else {
            self.sink.log_info(DISCOVERED_MESSAGE);
        }

        let layers = editor_layer
            .into_iter()
            .chain(Some(FormatOptions::for_file(request.file_path, request.parser)))
            .chain(request.range.map(FormatOptions::from))
            .chain(discovered);

        Resolution::Resolved(merge_layers(layers))
    }
}
