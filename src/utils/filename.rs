//! Download filename handling
//!
//! Extracts the save name from a `Content-Disposition` header and reduces it to a
//! single safe path component.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Save name used when the response does not carry one
pub const DEFAULT_FILENAME: &str = "download";

/// RFC 5987 extended form: `filename*=charset'lang'value`
static EXTENDED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)filename\*=(?:[a-z0-9_-]+'[a-z0-9_-]*')?['"]?([^"';\n]*)"#)
        .expect("valid regex")
});

/// Plain `filename=` value, optionally quoted
static PLAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)filename=['"]?([^"';\n]*)"#).expect("valid regex"));

/// Filename utilities for downloaded files
pub struct FilenameUtils;

impl FilenameUtils {
    /// Extract the save name from a `Content-Disposition` header value.
    ///
    /// `filename*` takes precedence over `filename`; its value is percent-decoded.
    pub fn from_content_disposition(header: Option<&str>) -> String {
        let Some(header) = header else {
            return DEFAULT_FILENAME.to_string();
        };

        let raw = EXTENDED_RE
            .captures(header)
            .or_else(|| PLAIN_RE.captures(header))
            .and_then(|captures| captures.get(1))
            .map_or("", |m| m.as_str());

        let decoded = urlencoding::decode(raw)
            .map(|cow| cow.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        let cleaned = Self::sanitize(&decoded);

        if cleaned.is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            cleaned
        }
    }

    /// Drop quotes and any directory components
    pub fn sanitize(name: &str) -> String {
        let unquoted: String = name.chars().filter(|c| *c != '"' && *c != '\'').collect();
        let unified = unquoted.replace('\\', "/");
        let last = unified.rsplit('/').next().unwrap_or("");
        let trimmed = last.trim();

        if trimmed == "." || trimmed == ".." {
            return String::new();
        }
        match Path::new(trimmed).file_name() {
            Some(component) => component.to_string_lossy().to_string(),
            None => String::new(),
        }
    }
}
