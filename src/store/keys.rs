//! Storage key and form field names.
//!
//! Field *stems* are shared by three namespaces:
//! - per-page meta keys: stem with a leading underscore prefix (`_header_logo`)
//! - site-wide front-page option keys: `header_front_` prefix (`header_front_logo`)
//! - admin form field names: the bare `header_` prefix (`header_logo`)
//!
//! Existing stored data depends on these names; change nothing here lightly.

/// Per-page meta key prefix (hidden keys, host convention).
pub const META_PREFIX: &str = "_header_";

/// Site-wide front-page option key prefix.
pub const FRONT_PREFIX: &str = "header_front_";

/// Admin form field name prefix.
pub const FORM_PREFIX: &str = "header_";

/// Suffix of the numeric override inputs paired with `custom` enum choices
/// (`header_width` + `header_width_custom`).
pub const CUSTOM_SUFFIX: &str = "_custom";

pub const ENABLE: &str = "enable";
pub const LOGO: &str = "logo";
pub const LOGO_WIDTH: &str = "logo_width";
pub const LOGO_WIDTH_MOBILE: &str = "logo_width_mobile";
pub const TITLE: &str = "title";
pub const SUBTITLE: &str = "subtitle";
pub const SUBTITLE_BG_COLOR: &str = "subtitle_bg_color";
pub const SUBTITLE_TEXT_COLOR: &str = "subtitle_text_color";
pub const BG_COLOR: &str = "bg_color";
pub const TEXT_COLOR: &str = "text_color";
pub const LAYOUT: &str = "layout";
pub const LINK_URL: &str = "link_url";
pub const MENU_ID: &str = "menu_id";
pub const WIDTH: &str = "width";
pub const STICKY: &str = "sticky";
pub const STICKY_MOBILE: &str = "sticky_mobile";
pub const SHADOW: &str = "shadow";
pub const CUSTOM_CSS: &str = "custom_css";
pub const CUSTOM_JS: &str = "custom_js";
pub const CUSTOM_HTML: &str = "custom_html";
pub const NOTICE_ENABLE: &str = "notice_enable";
pub const NOTICE_TEXT: &str = "notice_text";
pub const NOTICE_URL: &str = "notice_url";
pub const NOTICE_BG_COLOR: &str = "notice_bg_color";
pub const NOTICE_TEXT_COLOR: &str = "notice_text_color";
pub const NOTICE_NEW_TAB: &str = "notice_new_tab";

/// Stems that accept a paired `*_custom` numeric override on form submit.
pub const CUSTOM_OVERRIDE_STEMS: &[&str] = &[WIDTH, LOGO_WIDTH, LOGO_WIDTH_MOBILE];

/// Per-page meta key for a stem: `_header_enable`.
pub fn meta_key(stem: &str) -> String {
    format!("{META_PREFIX}{stem}")
}

/// Site-wide front option key for a stem: `header_front_enable`.
pub fn front_key(stem: &str) -> String {
    format!("{FRONT_PREFIX}{stem}")
}

/// Admin form field name for a stem: `header_enable`.
pub fn form_field(stem: &str) -> String {
    format!("{FORM_PREFIX}{stem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(meta_key(ENABLE), "_header_enable");
        assert_eq!(front_key(ENABLE), "header_front_enable");
        assert_eq!(form_field(WIDTH), "header_width");
        assert_eq!(format!("{}{}", form_field(WIDTH), CUSTOM_SUFFIX), "header_width_custom");
    }
}
