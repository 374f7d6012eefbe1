//! 6-digit hex color value type.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[0-9a-fA-F]{6}$").expect("valid pattern"));

/// A `#rrggbb` color as carried in header records.
///
/// Parsing normalizes to lowercase. The store layer degrades malformed
/// stored values to a field default instead of erroring (the rendering path
/// has no failure mode); the TOML path rejects them at load time so
/// `validate` can point at the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `#rrggbb` string. Whitespace is trimmed, hex digits lowercased.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        HEX_COLOR
            .is_match(s)
            .then(|| Self(s.to_ascii_lowercase()))
    }

    /// Parse, falling back to `default` for malformed or empty input.
    pub fn parse_or(s: &str, default: Self) -> Self {
        Self::parse(s).unwrap_or(default)
    }

    /// Construct from a known-good literal (used for field defaults).
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(HEX_COLOR.is_match(s), "bad color literal: {s}");
        Self(s.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("`{s}` is not a 6-digit hex color (#rrggbb)"))
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}
