//! Project configuration discovery.
//!
//! The resolver talks to a formatter engine through [`ConfigDiscovery`].
//! [`FileDiscovery`] is the engine used by the CLI: it reads
//! `.prettierrc.toml` and, on request, `.editorconfig`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::{find_options_file, load_options, overlay, resolve_editorconfig, FormatOptions};

/// Error type returned by discovery engines.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Knobs forwarded to the discovery engine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Use this options file instead of searching for one
    pub config: Option<PathBuf>,
    /// Also take `.editorconfig` into account
    pub editorconfig: bool,
}

/// A formatter engine's configuration lookup.
#[async_trait]
pub trait ConfigDiscovery: Send + Sync {
    /// Find the project configuration that applies to `file_path`.
    ///
    /// `Ok(None)` means no configuration exists for the file. A file that
    /// exists but sets nothing is `Ok(Some(FormatOptions::default()))`.
    async fn discover(
        &self,
        file_path: &Path,
        options: &DiscoveryOptions,
    ) -> Result<Option<FormatOptions>, BoxError>;
}

/// Discovery failed for a file.
#[derive(Debug, thiserror::Error)]
#[error("could not read project configuration for {}: {source}", .path.display())]
pub struct DiscoveryError {
    pub path: PathBuf,
    #[source]
    pub source: BoxError,
}

/// Discovery backed by `.prettierrc.toml` and `.editorconfig` files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDiscovery;

#[async_trait]
impl ConfigDiscovery for FileDiscovery {
    async fn discover(
        &self,
        file_path: &Path,
        options: &DiscoveryOptions,
    ) -> Result<Option<FormatOptions>, BoxError> {
        let file_path = file_path.to_path_buf();
        let options = options.clone();

        tokio::task::spawn_blocking(move || discover_blocking(&file_path, &options)).await?
    }
}

fn discover_blocking(
    file_path: &Path,
    options: &DiscoveryOptions,
) -> Result<Option<FormatOptions>, BoxError> {
    // Relative paths would stop the upward search at the cwd
    let file_path = std::path::absolute(file_path)?;
    let start_dir = file_path.parent().unwrap_or(file_path.as_path());

    // An .editorconfig that sets nothing for this file is not a configuration
    let editorconfig = if options.editorconfig {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        resolve_editorconfig(start_dir, &file_name)?
    } else {
        None
    };

    let options_path = options
        .config
        .clone()
        .or_else(|| find_options_file(start_dir));
    let project = match options_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading options file");
            Some(load_options(&path)?)
        }
        None => None,
    };

    // The options file wins over .editorconfig
    Ok(match (editorconfig, project) {
        (Some(base), Some(over)) => Some(overlay(base, over)),
        (base, over) => over.or(base),
    })
}
