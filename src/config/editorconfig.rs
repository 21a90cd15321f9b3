//! .editorconfig support for discovery
//!
//! Files cascade: every `.editorconfig` from the file's directory upward is
//! read until one declares `root = true`, and nearer files override farther
//! ones. Only the properties with a formatter counterpart are kept. Section
//! patterns are matched against the file name; `*`, `*.ext`, `*.{a,b}` and
//! literal names are understood, anything else is skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::file::{find_file_upward, ConfigError};
use super::schema::FormatOptions;

type Properties = BTreeMap<String, String>;

/// Find .editorconfig by searching upward from the given directory.
pub fn find_editorconfig(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, ".editorconfig")
}

/// Read the cascade of .editorconfig files above `start_dir` and extract
/// the options that apply to `file_name`.
///
/// Returns `None` when no file exists or when the files set nothing the
/// formatter understands for `file_name`.
pub fn resolve_editorconfig(
    start_dir: &Path,
    file_name: &str,
) -> Result<Option<FormatOptions>, ConfigError> {
    let mut cascade = Vec::new();
    let mut current = start_dir.to_path_buf();

    while let Some(path) = find_editorconfig(&current) {
        tracing::debug!(path = %path.display(), "reading .editorconfig");
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let (root, properties) = section_properties(&content, file_name);
        cascade.push(properties);

        if root {
            break;
        }
        current = match path.parent().and_then(Path::parent) {
            Some(parent) => parent.to_path_buf(),
            None => break,
        };
    }

    // Farthest file first so nearer files win
    let properties = cascade
        .into_iter()
        .rev()
        .fold(Properties::new(), |mut acc, layer| {
            acc.extend(layer);
            acc
        });

    let options = to_format_options(&properties);
    Ok((!options.is_empty()).then_some(options))
}

/// Extract formatter options for `file_name` from .editorconfig content.
///
/// Sections are applied in file order, so a later matching section
/// overrides properties set by an earlier one.
pub fn editorconfig_options(content: &str, file_name: &str) -> FormatOptions {
    to_format_options(&section_properties(content, file_name).1)
}

/// Returns whether the preamble declares `root = true`, and the properties
/// of the sections matching `file_name`.
fn section_properties(content: &str, file_name: &str) -> (bool, Properties) {
    let mut properties = Properties::new();
    let mut root = false;
    let mut in_preamble = true;
    let mut in_matching_section = false;

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_preamble = false;
            in_matching_section = section_matches(&line[1..line.len() - 1], file_name);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim().to_lowercase();

        if in_preamble {
            root |= key == "root" && value == "true";
        } else if in_matching_section {
            properties.insert(key, value);
        }
    }

    (root, properties)
}

fn section_matches(pattern: &str, file_name: &str) -> bool {
    let pattern = pattern.trim();
    if pattern == "*" {
        return true;
    }

    if let Some(rest) = pattern.strip_prefix("*.") {
        if let Some(list) = rest.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
            return list
                .split(',')
                .any(|ext| file_name.ends_with(&format!(".{}", ext.trim())));
        }
        return file_name.ends_with(&format!(".{rest}"));
    }

    pattern == file_name
}

fn to_format_options(properties: &Properties) -> FormatOptions {
    let get = |key: &str| properties.get(key).map(String::as_str);
    let number = |key: &str| get(key).and_then(|v| v.parse::<usize>().ok());

    let use_tabs = match get("indent_style") {
        Some("tab") => Some(true),
        Some("space") => Some(false),
        _ => None,
    };

    let tab_width = if use_tabs == Some(true) && number("tab_width").is_some() {
        number("tab_width")
    } else {
        number("indent_size").or_else(|| number("tab_width"))
    };

    let end_of_line = match get("end_of_line") {
        Some(eol @ ("lf" | "crlf" | "cr")) => Some(eol.to_string()),
        _ => None,
    };

    let single_quote = match get("quote_type") {
        Some("single") => Some(true),
        Some("double") => Some(false),
        _ => None,
    };

    FormatOptions {
        use_tabs,
        tab_width,
        print_width: number("max_line_length"),
        end_of_line,
        single_quote,
        ..Default::default()
    }
}
