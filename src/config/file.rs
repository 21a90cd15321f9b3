//! Options file discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::schema::{EditorSettings, FormatOptions};

/// Name of the project options file looked up next to source files.
pub const OPTIONS_FILE_NAME: &str = ".prettierrc.toml";

/// Error type for loading a TOML options or settings file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    /// TOML parsing error
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Search upward from `start_dir` for a file with the given name.
///
/// Returns `None` once the filesystem root has been checked.
pub fn find_file_upward(start_dir: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.is_file() {
            return Some(file_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find the closest `.prettierrc.toml` at or above the given directory.
pub fn find_options_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, OPTIONS_FILE_NAME)
}

fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and parse a project options file.
pub fn load_options(path: &Path) -> Result<FormatOptions, ConfigError> {
    load_toml(path)
}

/// Load editor settings exported by the host as TOML.
pub fn load_editor_settings(path: &Path) -> Result<EditorSettings, ConfigError> {
    load_toml(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_options_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(&config_path, "tabWidth = 2\n").unwrap();

        let found = find_options_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_options_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join(OPTIONS_FILE_NAME);
        fs::write(&config_path, "tabWidth = 2\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();

        let found = find_options_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_options_prefers_closer() {
        let parent = TempDir::new().unwrap();
        fs::write(parent.path().join(OPTIONS_FILE_NAME), "semi = false\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();
        let child_config = child.join(OPTIONS_FILE_NAME);
        fs::write(&child_config, "semi = true\n").unwrap();

        let found = find_options_file(&child);
        assert_eq!(found, Some(child_config));
    }

    #[test]
    fn test_find_ignores_directory_with_same_name() {
        let dir = TempDir::new().unwrap();
        let child = dir.path().join("subdir");
        fs::create_dir_all(child.join(OPTIONS_FILE_NAME)).unwrap();
        let config_path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let found = find_options_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_options_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(
            &config_path,
            r#"
printWidth = 100
tabWidth = 4
useTabs = false
semi = false
singleQuote = true
trailingComma = "es5"
"#,
        )
        .unwrap();

        let options = load_options(&config_path).unwrap();
        assert_eq!(options.print_width, Some(100));
        assert_eq!(options.tab_width, Some(4));
        assert_eq!(options.use_tabs, Some(false));
        assert_eq!(options.semi, Some(false));
        assert_eq!(options.single_quote, Some(true));
        assert_eq!(options.trailing_comma.as_deref(), Some("es5"));
    }

    #[test]
    fn test_load_options_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let options = load_options(&config_path).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_load_options_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_options(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_options_wrong_value_type() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(OPTIONS_FILE_NAME);
        fs::write(&config_path, "tabWidth = \"wide\"\n").unwrap();

        let result = load_options(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_options_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_options(&dir.path().join("nope.toml"));
        match result {
            Err(ConfigError::Io { path, .. }) => assert!(path.ends_with("nope.toml")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_editor_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("editor.toml");
        fs::write(&path, "tabWidth = 2\nsemi = true\narrowParens = \"always\"\n").unwrap();

        let settings = load_editor_settings(&path).unwrap();
        assert_eq!(settings.tab_width, Some(2));
        assert_eq!(settings.semi, Some(true));
        assert_eq!(settings.arrow_parens.as_deref(), Some("always"));
    }
}
