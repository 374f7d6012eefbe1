//! Header configuration model.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── color      # HexColor value type
//! ├── layout     # Layout enumeration
//! ├── width      # HeaderWidth / LogoWidth value types
//! ├── notice     # Announcement bar sub-record
//! ├── error      # ConfigError, FieldPath, diagnostics
//! └── mod.rs     # HeaderConfig (this file)
//! ```
//!
//! One `HeaderConfig` describes one header: either a page's own record or
//! the site-wide front-page record. The same struct deserializes from
//! `[front]` and `[pages.*.header]` tables in `masthead.toml` and
//! round-trips through the flat key-value records in [`crate::store`].

mod color;
mod error;
mod layout;
mod notice;
mod width;

pub use color::HexColor;
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use layout::Layout;
pub use notice::NoticeConfig;
pub use width::{HeaderWidth, LogoWidth};

use serde::{Deserialize, Serialize};

/// One header's full configuration.
///
/// Every field has a safe default; a default record with `enabled = true`
/// renders a plain white header carrying the page title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Master switch. Disabled headers render nothing at all.
    pub enabled: bool,

    /// Logo image URL. When set, the title heading is never rendered.
    pub logo_url: Option<String>,

    /// Logo display width on desktop viewports.
    pub logo_width: LogoWidth,

    /// Logo display width below the mobile breakpoint.
    /// Falls back to `logo_width` when unset.
    pub logo_width_mobile: Option<LogoWidth>,

    /// Heading text. Empty falls back to the page title (site name on the
    /// front page) unless a logo is set.
    pub title: Option<String>,

    /// Secondary line: a band above the header in center layout, an inline
    /// badge next to the navigation in horizontal layout.
    pub subtitle: Option<String>,

    pub subtitle_bg_color: HexColor,
    pub subtitle_text_color: HexColor,

    pub bg_color: HexColor,
    pub text_color: HexColor,

    pub layout: Layout,

    /// Max width of the header inner container.
    pub width: HeaderWidth,

    /// Wraps logo/title in an anchor when set.
    pub link_url: Option<String>,

    /// Navigation menu reference, resolved by a [`crate::resolve::MenuProvider`].
    pub menu_id: Option<String>,

    /// Stick to the viewport top on desktop viewports.
    pub sticky: bool,

    /// Stick to the viewport top below the mobile breakpoint.
    pub sticky_mobile: bool,

    /// Drop shadow under the header.
    pub shadow: bool,

    /// Appended verbatim to the generated CSS block.
    pub custom_css: Option<String>,

    /// Injected verbatim into the DOM-ready behavior script.
    pub custom_js: Option<String>,

    /// Embedded verbatim after the navigation element.
    pub custom_html: Option<String>,

    /// Announcement bar.
    pub notice: NoticeConfig,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            logo_url: None,
            logo_width: LogoWidth::default(),
            logo_width_mobile: None,
            title: None,
            subtitle: None,
            subtitle_bg_color: HexColor::from_static("#f5f5f5"),
            subtitle_text_color: HexColor::from_static("#555555"),
            bg_color: HexColor::from_static("#ffffff"),
            text_color: HexColor::from_static("#000000"),
            layout: Layout::default(),
            width: HeaderWidth::default(),
            link_url: None,
            menu_id: None,
            sticky: false,
            sticky_mobile: false,
            shadow: false,
            custom_css: None,
            custom_js: None,
            custom_html: None,
            notice: NoticeConfig::default(),
        }
    }
}

/// Trim an optional string field, treating blank as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl HeaderConfig {
    /// Whether a logo is set (non-blank URL).
    pub fn logo(&self) -> Option<&str> {
        present(&self.logo_url)
    }

    /// The explicit title, if non-blank.
    pub fn title_text(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn subtitle_text(&self) -> Option<&str> {
        present(&self.subtitle)
    }

    pub fn link(&self) -> Option<&str> {
        present(&self.link_url)
    }

    pub fn menu(&self) -> Option<&str> {
        present(&self.menu_id)
    }

    pub fn custom_css_text(&self) -> Option<&str> {
        self.custom_css.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn custom_js_text(&self) -> Option<&str> {
        self.custom_js.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn custom_html_text(&self) -> Option<&str> {
        self.custom_html.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Validate one header scope into `diag`, prefixing field paths with
    /// `scope` (e.g. `front`, `pages.home.header`).
    ///
    /// Validation never blocks rendering; it backs the `validate` command.
    pub fn validate(&self, scope: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(url) = self.logo() {
            check_url(url, scope.join("logo_url"), diag);
        }
        if let Some(url) = self.link() {
            check_url(url, scope.join("link_url"), diag);
        }
        if let Some(url) = self.notice.link() {
            check_url(url, scope.join("notice.url"), diag);
        }

        if self.width.is_passthrough() {
            diag.warn(
                scope.join("width"),
                format!(
                    "`{}` is neither `full` nor a pixel number; emitted verbatim as the CSS length",
                    self.width
                ),
            );
        }

        if self.logo().is_some() && self.title_text().is_some() {
            diag.warn(
                scope.join("title"),
                "ignored because a logo is set; the title heading is never rendered next to a logo",
            );
        }

        if self.notice.enabled && self.notice.text.trim().is_empty() {
            diag.warn(
                scope.join("notice.text"),
                "notice is enabled but has no text; the bar renders nothing",
            );
        }
    }
}

/// URL format check: absolute http(s) or root-relative.
fn check_url(url_str: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    // Root-relative targets ("/about") are fine for same-site links.
    if url_str.starts_with('/') && !url_str.starts_with("//") {
        return;
    }

    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com/logo.png",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use an absolute http(s) URL or a root-relative path like /about",
            );
        }
    }
}
