//! Width value types: header max-width and logo width.
//!
//! Both are closed enumerations with a numeric escape value, stored as plain
//! strings in the host's key-value records. Parsing is total; unknown header
//! widths survive as passthrough values emitted verbatim, matching what
//! existing stored data already contains.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// HeaderWidth
// ============================================================================

/// Maximum width of the header inner container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeaderWidth {
    /// No max-width constraint; the header spans the viewport.
    #[default]
    Full,
    /// Pixel constraint, centered with auto margins.
    Px(u32),
    /// Legacy stored value that is neither `full` nor numeric.
    /// Emitted verbatim as the CSS length.
    Passthrough(String),
}

impl HeaderWidth {
    /// Parse a stored width string. Never fails: empty and `full` mean no
    /// constraint, digits mean pixels, anything else is kept verbatim.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == "full" {
            return Self::Full;
        }
        match s.parse::<u32>() {
            Ok(n) => Self::Px(n),
            Err(_) => Self::Passthrough(s.to_string()),
        }
    }

    /// The `max-width` CSS value, or `None` for full width.
    pub fn max_width(&self) -> Option<String> {
        match self {
            Self::Full => None,
            Self::Px(n) => Some(format!("{n}px")),
            Self::Passthrough(s) => Some(s.clone()),
        }
    }

    /// The stored string form (inverse of [`parse`](Self::parse)).
    pub fn as_stored(&self) -> String {
        match self {
            Self::Full => "full".to_string(),
            Self::Px(n) => n.to_string(),
            Self::Passthrough(s) => s.clone(),
        }
    }

    pub const fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough(_))
    }
}

impl fmt::Display for HeaderWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_stored())
    }
}

impl From<String> for HeaderWidth {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<HeaderWidth> for String {
    fn from(w: HeaderWidth) -> Self {
        w.as_stored()
    }
}

// ============================================================================
// LogoWidth
// ============================================================================

/// Display width of the logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogoWidth {
    /// Render at the image's intrinsic size.
    Auto,
    /// Fixed pixel width, height scales to keep aspect ratio.
    Px(u32),
}

impl LogoWidth {
    /// Parse a stored logo width. `auto` is first-class; non-numeric
    /// leftovers degrade to `Auto` rather than a zero-width image.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<u32>() {
            Ok(n) if n > 0 => Self::Px(n),
            _ => Self::Auto,
        }
    }

    /// The CSS `width` value.
    pub fn css_value(self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Px(n) => format!("{n}px"),
        }
    }

    /// The stored string form.
    pub fn as_stored(self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Px(n) => n.to_string(),
        }
    }
}

impl Default for LogoWidth {
    fn default() -> Self {
        Self::Px(200)
    }
}

impl From<String> for LogoWidth {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<LogoWidth> for String {
    fn from(w: LogoWidth) -> Self {
        w.as_stored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_width_parse() {
        assert_eq!(HeaderWidth::parse("full"), HeaderWidth::Full);
        assert_eq!(HeaderWidth::parse(""), HeaderWidth::Full);
        assert_eq!(HeaderWidth::parse("800"), HeaderWidth::Px(800));
        assert_eq!(HeaderWidth::parse(" 1200 "), HeaderWidth::Px(1200));
        assert_eq!(
            HeaderWidth::parse("custom-abc"),
            HeaderWidth::Passthrough("custom-abc".to_string())
        );
    }

    #[test]
    fn test_header_width_css() {
        assert_eq!(HeaderWidth::Full.max_width(), None);
        assert_eq!(HeaderWidth::Px(800).max_width().as_deref(), Some("800px"));
        // Malformed legacy values pass through verbatim, no px suffix.
        assert_eq!(
            HeaderWidth::parse("custom-abc").max_width().as_deref(),
            Some("custom-abc")
        );
    }

    #[test]
    fn test_header_width_stored_round_trip() {
        for raw in ["full", "800", "custom-abc"] {
            assert_eq!(HeaderWidth::parse(raw).as_stored(), raw);
        }
    }

    #[test]
    fn test_logo_width_parse() {
        assert_eq!(LogoWidth::parse("auto"), LogoWidth::Auto);
        assert_eq!(LogoWidth::parse("200"), LogoWidth::Px(200));
        assert_eq!(LogoWidth::parse("0"), LogoWidth::Auto);
        assert_eq!(LogoWidth::parse("banana"), LogoWidth::Auto);
        assert_eq!(LogoWidth::default(), LogoWidth::Px(200));
    }

    #[test]
    fn test_logo_width_css() {
        assert_eq!(LogoWidth::Auto.css_value(), "auto");
        assert_eq!(LogoWidth::Px(120).css_value(), "120px");
    }
}
