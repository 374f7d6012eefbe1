//! Header layout enumeration.

use serde::{Deserialize, Serialize};

/// How the header arranges its pieces.
///
/// `Center` stacks logo/title, subtitle and navigation vertically, centered.
/// `Horizontal` splits them into a left brand container and a right
/// subtitle/navigation container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Center,
    Horizontal,
}

impl Layout {
    /// Parse a stored string; anything unrecognized degrades to `Center`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "horizontal" => Self::Horizontal,
            _ => Self::Center,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Horizontal => "horizontal",
        }
    }

    /// CSS modifier class on the header root element.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Center => "layout-center",
            Self::Horizontal => "layout-horizontal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Layout::parse("horizontal"), Layout::Horizontal);
        assert_eq!(Layout::parse("center"), Layout::Center);
        assert_eq!(Layout::parse(""), Layout::Center);
        assert_eq!(Layout::parse("sideways"), Layout::Center);
    }

    #[test]
    fn test_toml() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            layout: Layout,
        }
        let w: Wrap = toml::from_str("layout = \"horizontal\"").unwrap();
        assert_eq!(w.layout, Layout::Horizontal);
    }
}
