//! Formatter version handling.
//!
//! Formatters from 2.0 onward changed the defaults of `arrowParens`,
//! `trailingComma` and `endOfLine`. The resolver only needs to know which
//! side of that line the active formatter is on.

use semver::Version;

/// First formatter release using the newer defaults.
pub const NEWER_DEFAULTS_SINCE: Version = Version::new(2, 0, 0);

/// Parse a formatter version string leniently.
///
/// Accepts a leading `v` and missing minor/patch components (`"2"`,
/// `"2.1"`, `"v2.1-beta.1"`). Pre-release and build suffixes are kept.
pub fn parse_formatter_version(version: &str) -> Result<Version, semver::Error> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);

    if let Ok(parsed) = Version::parse(version) {
        return Ok(parsed);
    }

    let suffix_at = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(suffix_at);
    let padded = match core.matches('.').count() {
        0 => format!("{core}.0.0{suffix}"),
        1 => format!("{core}.0{suffix}"),
        _ => version.to_string(),
    };

    Version::parse(&padded)
}

/// Returns true if `version` is 2.0.0 or later.
///
/// Pre-releases of 2.0.0 sort below the release and get the older defaults,
/// as does any version string that cannot be parsed.
pub fn uses_newer_defaults(version: &str) -> bool {
    match parse_formatter_version(version) {
        Ok(parsed) => parsed >= NEWER_DEFAULTS_SINCE,
        Err(e) => {
            tracing::warn!(
                version,
                error = %e,
                "unparseable formatter version, using pre-2.0 defaults"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        assert_eq!(
            parse_formatter_version("2.3.1").unwrap(),
            Version::new(2, 3, 1)
        );
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(parse_formatter_version("3").unwrap(), Version::new(3, 0, 0));
        assert_eq!(
            parse_formatter_version("1.19").unwrap(),
            Version::new(1, 19, 0)
        );
    }

    #[test]
    fn test_parse_strips_v_prefix() {
        assert_eq!(
            parse_formatter_version("v2.0.0").unwrap(),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_parse_keeps_prerelease_when_padding() {
        let parsed = parse_formatter_version("2.0-beta.1").unwrap();
        assert_eq!((parsed.major, parsed.minor, parsed.patch), (2, 0, 0));
        assert_eq!(parsed.pre.as_str(), "beta.1");
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!(parse_formatter_version("latest").is_err());
        assert!(parse_formatter_version("").is_err());
    }

    #[test]
    fn test_newer_defaults_threshold() {
        assert!(uses_newer_defaults("2.0.0"));
        assert!(uses_newer_defaults("2.3.1"));
        assert!(uses_newer_defaults("3.0.0"));
        assert!(uses_newer_defaults("10.0.0"));
        assert!(!uses_newer_defaults("1.19.0"));
        assert!(!uses_newer_defaults("1.99.99"));
        assert!(!uses_newer_defaults("0.0.1"));
    }

    #[test]
    fn test_prerelease_sorts_below_release() {
        assert!(!uses_newer_defaults("2.0.0-alpha.1"));
        assert!(!uses_newer_defaults("2.0.0-rc.3"));
        assert!(uses_newer_defaults("2.0.1-alpha"));
    }

    #[test]
    fn test_build_metadata_ignored_for_threshold() {
        assert!(uses_newer_defaults("2.0.0+build.7"));
    }

    #[test]
    fn test_unparseable_uses_older_defaults() {
        assert!(!uses_newer_defaults("not-a-version"));
    }
}
