//! Announcement bar configuration.

use serde::{Deserialize, Serialize};

use super::HexColor;

/// The notice/announcement bar rendered after the header inner container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Show the bar at all.
    pub enabled: bool,

    /// Announcement text. An enabled notice with empty text renders nothing.
    pub text: String,

    /// Optional target URL; the text becomes a link when set.
    pub url: Option<String>,

    /// Bar background color.
    pub bg_color: HexColor,

    /// Bar text color.
    pub text_color: HexColor,

    /// Open the link in a new tab (`target="_blank" rel="noopener"`).
    pub new_tab: bool,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            text: String::new(),
            url: None,
            bg_color: HexColor::from_static("#222222"),
            text_color: HexColor::from_static("#ffffff"),
            new_tab: false,
        }
    }
}

impl NoticeConfig {
    /// Whether the bar actually renders: enabled and non-blank text.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.text.trim().is_empty()
    }

    /// The link URL, if one is set and non-blank.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_by_default() {
        assert!(!NoticeConfig::default().is_active());
    }

    #[test]
    fn test_enabled_but_blank_text_is_inactive() {
        let notice = NoticeConfig {
            enabled: true,
            text: "   ".to_string(),
            ..NoticeConfig::default()
        };
        assert!(!notice.is_active());
    }

    #[test]
    fn test_link_filters_blank() {
        let mut notice = NoticeConfig {
            enabled: true,
            text: "Sale ends Friday".to_string(),
            url: Some("".to_string()),
            ..NoticeConfig::default()
        };
        assert!(notice.is_active());
        assert_eq!(notice.link(), None);

        notice.url = Some("https://example.com/sale".to_string());
        assert_eq!(notice.link(), Some("https://example.com/sale"));
    }
}
