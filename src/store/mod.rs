//! Key-value header storage.
//!
//! The host CMS keeps header settings as flat string records: one per page
//! (post meta) plus a single site-wide record for the front page (options).
//! [`HeaderRecord`] is that flat record keyed by field stem;
//! [`MemoryStore`] is the in-process stand-in for the host's tables, used by
//! tests and anything embedding the renderer without a CMS behind it.
//!
//! Encoding rules: checkbox booleans become `"1"`/`"0"`, enums their stored
//! string form, absent optionals omit their key. Decoding is total - missing
//! or malformed values degrade to the field default, never to an error.

pub mod form;
pub mod keys;

use std::collections::BTreeMap;

use crate::config::{HeaderConfig, HexColor, HeaderWidth, Layout, LogoWidth, NoticeConfig};
use crate::resolve::{HeaderSource, MenuProvider};

// ============================================================================
// HeaderRecord
// ============================================================================

/// One scope's flat string record, keyed by field stem.
///
/// Prefixing (`_header_*` meta keys vs `header_front_*` option keys) is the
/// host's concern; inside the crate records always speak in stems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    fields: BTreeMap<String, String>,
}

impl HeaderRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stem: &str) -> Option<&str> {
        self.fields.get(stem).map(String::as_str)
    }

    /// Non-blank value for a stem.
    pub fn get_text(&self, stem: &str) -> Option<&str> {
        self.get(stem).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Checkbox flag: set and equal to "1".
    pub fn flag(&self, stem: &str) -> bool {
        self.get(stem) == Some("1")
    }

    pub fn set(&mut self, stem: &str, value: impl Into<String>) {
        self.fields.insert(stem.to_string(), value.into());
    }

    pub fn set_flag(&mut self, stem: &str, value: bool) {
        self.set(stem, if value { "1" } else { "0" });
    }

    pub fn delete(&mut self, stem: &str) {
        self.fields.remove(stem);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // ------------------------------------------------------------------
    // Host key bridge
    // ------------------------------------------------------------------

    /// Flatten to host storage pairs with the given key builder:
    /// [`keys::meta_key`] for per-page meta rows, [`keys::front_key`] for
    /// the site-wide option rows.
    pub fn to_host_pairs(&self, key: impl Fn(&str) -> String) -> Vec<(String, String)> {
        self.iter()
            .map(|(stem, value)| (key(stem), value.to_string()))
            .collect()
    }

    /// Rebuild from host storage pairs, accepting either key prefix.
    /// Keys that belong to other plugins are ignored.
    pub fn from_host_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut rec = Self::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            let stem = key
                .strip_prefix(keys::META_PREFIX)
                .or_else(|| key.strip_prefix(keys::FRONT_PREFIX));
            if let Some(stem) = stem {
                rec.set(stem, value);
            }
        }
        rec
    }

    // ------------------------------------------------------------------
    // Typed encode / decode
    // ------------------------------------------------------------------

    /// Encode a typed config into its flat record form.
    pub fn from_config(config: &HeaderConfig) -> Self {
        let mut rec = Self::new();

        rec.set_flag(keys::ENABLE, config.enabled);
        rec.set_flag(keys::STICKY, config.sticky);
        rec.set_flag(keys::STICKY_MOBILE, config.sticky_mobile);
        rec.set_flag(keys::SHADOW, config.shadow);

        rec.set(keys::LOGO_WIDTH, config.logo_width.as_stored());
        if let Some(w) = config.logo_width_mobile {
            rec.set(keys::LOGO_WIDTH_MOBILE, w.as_stored());
        }

        rec.set(keys::SUBTITLE_BG_COLOR, config.subtitle_bg_color.as_str());
        rec.set(
            keys::SUBTITLE_TEXT_COLOR,
            config.subtitle_text_color.as_str(),
        );
        rec.set(keys::BG_COLOR, config.bg_color.as_str());
        rec.set(keys::TEXT_COLOR, config.text_color.as_str());
        rec.set(keys::LAYOUT, config.layout.as_str());
        rec.set(keys::WIDTH, config.width.as_stored());

        for (stem, value) in [
            (keys::LOGO, config.logo()),
            (keys::TITLE, config.title_text()),
            (keys::SUBTITLE, config.subtitle_text()),
            (keys::LINK_URL, config.link()),
            (keys::MENU_ID, config.menu()),
            (keys::CUSTOM_CSS, config.custom_css_text()),
            (keys::CUSTOM_JS, config.custom_js_text()),
            (keys::CUSTOM_HTML, config.custom_html_text()),
        ] {
            if let Some(v) = value {
                rec.set(stem, v);
            }
        }

        rec.set_flag(keys::NOTICE_ENABLE, config.notice.enabled);
        rec.set_flag(keys::NOTICE_NEW_TAB, config.notice.new_tab);
        if !config.notice.text.is_empty() {
            rec.set(keys::NOTICE_TEXT, config.notice.text.as_str());
        }
        if let Some(url) = config.notice.link() {
            rec.set(keys::NOTICE_URL, url);
        }
        rec.set(keys::NOTICE_BG_COLOR, config.notice.bg_color.as_str());
        rec.set(keys::NOTICE_TEXT_COLOR, config.notice.text_color.as_str());

        rec
    }

    /// Decode the record into a typed config, degrading malformed values to
    /// field defaults.
    pub fn to_config(&self) -> HeaderConfig {
        let defaults = HeaderConfig::default();
        let notice_defaults = NoticeConfig::default();

        let color_or = |stem: &str, default: HexColor| {
            self.get(stem)
                .map(|v| HexColor::parse_or(v, default.clone()))
                .unwrap_or(default)
        };

        HeaderConfig {
            enabled: self.flag(keys::ENABLE),
            logo_url: self.get_text(keys::LOGO).map(str::to_string),
            logo_width: self
                .get_text(keys::LOGO_WIDTH)
                .map(LogoWidth::parse)
                .unwrap_or_default(),
            logo_width_mobile: self.get_text(keys::LOGO_WIDTH_MOBILE).map(LogoWidth::parse),
            title: self.get_text(keys::TITLE).map(str::to_string),
            subtitle: self.get_text(keys::SUBTITLE).map(str::to_string),
            subtitle_bg_color: color_or(keys::SUBTITLE_BG_COLOR, defaults.subtitle_bg_color),
            subtitle_text_color: color_or(keys::SUBTITLE_TEXT_COLOR, defaults.subtitle_text_color),
            bg_color: color_or(keys::BG_COLOR, defaults.bg_color),
            text_color: color_or(keys::TEXT_COLOR, defaults.text_color),
            layout: self.get(keys::LAYOUT).map(Layout::parse).unwrap_or_default(),
            width: self
                .get(keys::WIDTH)
                .map(HeaderWidth::parse)
                .unwrap_or_default(),
            link_url: self.get_text(keys::LINK_URL).map(str::to_string),
            menu_id: self.get_text(keys::MENU_ID).map(str::to_string),
            sticky: self.flag(keys::STICKY),
            sticky_mobile: self.flag(keys::STICKY_MOBILE),
            shadow: self.flag(keys::SHADOW),
            custom_css: self.get(keys::CUSTOM_CSS).map(str::to_string),
            custom_js: self.get(keys::CUSTOM_JS).map(str::to_string),
            custom_html: self.get(keys::CUSTOM_HTML).map(str::to_string),
            notice: NoticeConfig {
                enabled: self.flag(keys::NOTICE_ENABLE),
                text: self.get(keys::NOTICE_TEXT).unwrap_or_default().to_string(),
                url: self.get_text(keys::NOTICE_URL).map(str::to_string),
                bg_color: color_or(keys::NOTICE_BG_COLOR, notice_defaults.bg_color),
                text_color: color_or(keys::NOTICE_TEXT_COLOR, notice_defaults.text_color),
                new_tab: self.flag(keys::NOTICE_NEW_TAB),
            },
        }
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

#[derive(Debug, Clone, Default)]
struct PageEntry {
    title: String,
    header: HeaderRecord,
}

/// In-process header storage with the host's shape: per-page records, one
/// site-wide front record, menus as pre-rendered markup.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    site_name: String,
    front: HeaderRecord,
    front_page: Option<String>,
    pages: BTreeMap<String, PageEntry>,
    menus: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            ..Self::default()
        }
    }

    /// Designate a static page as the site front page.
    pub fn set_front_page(&mut self, id: impl Into<String>) {
        self.front_page = Some(id.into());
    }

    /// Register a page. Its header record starts empty (all defaults).
    pub fn insert_page(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.pages.insert(
            id.into(),
            PageEntry {
                title: title.into(),
                header: HeaderRecord::new(),
            },
        );
    }

    /// Remove a page and its header record (host cascade on page delete).
    pub fn remove_page(&mut self, id: &str) {
        self.pages.remove(id);
    }

    pub fn insert_menu(&mut self, id: impl Into<String>, html: impl Into<String>) {
        self.menus.insert(id.into(), html.into());
    }

    pub fn front_record(&self) -> &HeaderRecord {
        &self.front
    }

    pub fn front_record_mut(&mut self) -> &mut HeaderRecord {
        &mut self.front
    }

    pub fn page_record(&self, id: &str) -> Option<&HeaderRecord> {
        self.pages.get(id).map(|p| &p.header)
    }

    pub fn page_record_mut(&mut self, id: &str) -> Option<&mut HeaderRecord> {
        self.pages.get_mut(id).map(|p| &mut p.header)
    }
}

impl HeaderSource for MemoryStore {
    fn site_name(&self) -> &str {
        &self.site_name
    }

    fn front_header(&self) -> Option<HeaderConfig> {
        (!self.front.is_empty()).then(|| self.front.to_config())
    }

    fn front_page_id(&self) -> Option<&str> {
        self.front_page.as_deref()
    }

    fn page_header(&self, id: &str) -> Option<HeaderConfig> {
        let entry = self.pages.get(id)?;
        (!entry.header.is_empty()).then(|| entry.header.to_config())
    }

    fn page_title(&self, id: &str) -> Option<String> {
        self.pages.get(id).map(|p| p.title.clone())
    }
}

impl MenuProvider for MemoryStore {
    fn menu_html(&self, menu_id: &str) -> Option<String> {
        self.menus.get(menu_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> HeaderConfig {
        HeaderConfig {
            enabled: true,
            logo_url: Some("https://example.com/logo.png".to_string()),
            logo_width: LogoWidth::Px(160),
            logo_width_mobile: Some(LogoWidth::Auto),
            subtitle: Some("Since 1999".to_string()),
            layout: Layout::Horizontal,
            width: HeaderWidth::Px(1200),
            link_url: Some("/".to_string()),
            menu_id: Some("3".to_string()),
            sticky: true,
            shadow: true,
            custom_css: Some(".custom-header { border-bottom: 1px solid #eee; }".to_string()),
            notice: NoticeConfig {
                enabled: true,
                text: "Closed on Sundays".to_string(),
                url: Some("https://example.com/hours".to_string()),
                new_tab: true,
                ..NoticeConfig::default()
            },
            ..HeaderConfig::default()
        }
    }

    #[test]
    fn test_record_round_trip() {
        let config = sample_config();
        let record = HeaderRecord::from_config(&config);
        assert_eq!(record.to_config(), config);
    }

    #[test]
    fn test_checkboxes_normalize_to_zero_one() {
        let record = HeaderRecord::from_config(&sample_config());
        assert_eq!(record.get(keys::ENABLE), Some("1"));
        assert_eq!(record.get(keys::STICKY), Some("1"));
        assert_eq!(record.get(keys::STICKY_MOBILE), Some("0"));
        assert_eq!(record.get(keys::NOTICE_NEW_TAB), Some("1"));
    }

    #[test]
    fn test_decode_empty_record_is_default() {
        assert_eq!(HeaderRecord::new().to_config(), HeaderConfig::default());
    }

    #[test]
    fn test_decode_degrades_malformed_values() {
        let mut record = HeaderRecord::new();
        record.set_flag(keys::ENABLE, true);
        record.set(keys::BG_COLOR, "bright red");
        record.set(keys::LAYOUT, "diagonal");
        record.set(keys::LOGO_WIDTH, "wide");

        let config = record.to_config();
        assert!(config.enabled);
        assert_eq!(config.bg_color.as_str(), "#ffffff");
        assert_eq!(config.layout, Layout::Center);
        assert_eq!(config.logo_width, LogoWidth::Auto);
    }

    #[test]
    fn test_host_pair_bridge() {
        let record = HeaderRecord::from_config(&sample_config());

        let meta = record.to_host_pairs(keys::meta_key);
        assert!(meta.iter().any(|(k, v)| k == "_header_enable" && v == "1"));

        let options = record.to_host_pairs(keys::front_key);
        assert!(options.iter().any(|(k, _)| k == "header_front_layout"));

        // Round trip through either prefix; foreign keys are skipped.
        let mut noisy = meta.clone();
        noisy.push(("_otherplugin_thing".to_string(), "x".to_string()));
        assert_eq!(HeaderRecord::from_host_pairs(noisy), record);
        assert_eq!(HeaderRecord::from_host_pairs(options), record);
    }

    #[test]
    fn test_memory_store_lifecycle() {
        let mut store = MemoryStore::new("Example");
        store.insert_page("about", "About Us");

        // Fresh page: record exists but holds nothing, so no header.
        assert!(store.page_header("about").is_none());

        let record = HeaderRecord::from_config(&sample_config());
        *store.page_record_mut("about").unwrap() = record;
        assert!(store.page_header("about").is_some_and(|c| c.enabled));

        store.remove_page("about");
        assert!(store.page_header("about").is_none());
        assert!(store.page_title("about").is_none());
    }
}
