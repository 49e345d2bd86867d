// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with "did you mean" suggestions.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a key suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(simcha::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(simcha::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(simcha::config::missing_key),
        help("add `{key} = <value>` to your simcha.toml")
    )]
    MissingKey { key: String },

    /// A value failed post-deserialization validation.
    #[error("validation error: {message}")]
    #[diagnostic(code(simcha::config::validation))]
    Validation { message: String },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(simcha::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` (which may carry several errors) into diagnostics.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let section: Vec<String> = error.path.iter().map(|s| s.to_string()).collect();
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let valid: Vec<&str> = expected.to_vec();
                    let (span, src) = error
                        .metadata
                        .as_ref()
                        .and_then(|m| m.source.as_ref())
                        .and_then(|s| match s {
                            figment::Source::File(path) => Some(path.display().to_string()),
                            _ => None,
                        })
                        .or_else(|| {
                            // Inline strings have no file metadata; fall back to the
                            // single provided source, if any.
                            (toml_sources.len() == 1).then(|| toml_sources[0].0.clone())
                        })
                        .and_then(|path| {
                            toml_sources.iter().find(|(p, _)| *p == path).and_then(
                                |(p, content)| {
                                    locate_key(content, &section, field).map(|offset| {
                                        (
                                            Some(SourceSpan::new(offset.into(), field.len())),
                                            Some(NamedSource::new(p, content.clone())),
                                        )
                                    })
                                },
                            )
                        })
                        .unwrap_or((None, None));

                    ConfigError::UnknownKey {
                        key: field.clone(),
                        suggestion: suggest_key(field, &valid),
                        valid_keys: valid.join(", "),
                        span,
                        src,
                    }
                }
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: field.to_string(),
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key: section.join("."),
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.to_string(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Byte offset of `field` inside the `[section]` table of a TOML document.
///
/// Tracks the current table header line by line so a key with the same name
/// in an earlier table is not matched. Top-level keys (empty `section`) are
/// only matched before the first header.
pub fn locate_key(content: &str, section: &[String], field: &str) -> Option<usize> {
    let wanted = section.first().map(String::as_str);
    let mut current: Option<&str> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(header) = trimmed.strip_prefix('[') {
            current = header
                .split(']')
                .next()
                .map(|h| h.trim_matches(|c| c == '[' || c == ' '));
        } else if current == wanted {
            if let Some(rest) = trimmed.strip_prefix(field) {
                if rest.starts_with([' ', '\t', '=']) {
                    return Some(offset + (line.len() - trimmed.len()));
                }
            }
        }
        offset += line.len();
    }

    None
}

/// Best-matching valid key above the similarity threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (key, strsim::jaro_winkler(unknown, key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key.to_string())
}

/// Render config errors to stderr with miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        match handler.render_report(&mut buf, diagnostic) {
            Ok(()) => eprint!("{buf}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_ttl_secs_for_typo() {
        let valid = &["enabled", "ttl_secs"];
        assert_eq!(suggest_key("ttl_sec", valid), Some("ttl_secs".to_string()));
    }

    #[test]
    fn suggests_stale_after_months() {
        let valid = &["stale_after_months", "warn_below_score"];
        assert_eq!(
            suggest_key("stale_after_month", valid),
            Some("stale_after_months".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_key() {
        let valid = &["enabled", "ttl_secs"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn locate_key_respects_sections() {
        let content = "[demo]\nseed = 1\n\n[cache]\nenabled = true\nseed = 2\n";
        let section = vec!["cache".to_string()];
        let offset = locate_key(content, &section, "seed").expect("key in [cache]");
        assert_eq!(&content[offset..offset + 8], "seed = 2");
    }

    #[test]
    fn locate_key_top_level_stops_at_first_header() {
        let content = "[cache]\nttl_secs = 5\n";
        assert_eq!(locate_key(content, &[], "ttl_secs"), None);
    }

    #[test]
    fn unknown_key_help_mentions_suggestion() {
        let help = unknown_key_help(Some("ttl_secs"), "enabled, ttl_secs");
        assert!(help.contains("did you mean `ttl_secs`"));
        assert!(unknown_key_help(None, "enabled").starts_with("valid keys"));
    }
}
