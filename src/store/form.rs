//! Admin form-submission ingestion.
//!
//! A submission is the key/value pair set of a settings form POST, already
//! past the host's permission and CSRF gates. Applying it to a record
//! reproduces the host-side save semantics:
//!
//! - checkbox fields are only transmitted when checked; the record gets
//!   "1"/"0" either way
//! - other fields are sanitized and written when present, their key deleted
//!   when absent
//! - `custom` choices in the width selects carry their number in a sibling
//!   `*_custom` field, which overrides the stored value when it is a
//!   positive integer
//!
//! Sanitization never rejects a submission; a value that fails its check is
//! stored empty and the reader falls back to the field default.

use std::collections::BTreeMap;

use super::HeaderRecord;
use super::keys;
use crate::config::HexColor;

/// Sanitizer applied to a form field before it reaches the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    /// Present ⇒ "1", absent ⇒ "0".
    Checkbox,
    /// Single-line text: control characters collapse to spaces, trimmed.
    Text,
    /// Absolute http(s) URL or root-relative path; anything else stores "".
    Url,
    /// 6-digit hex color; anything else stores "".
    Color,
    /// Multi-line snippet (custom CSS/JS/HTML), kept verbatim.
    Raw,
}

/// Every form field with its sanitizer, in record order.
const FIELDS: &[(&str, Kind)] = &[
    (keys::ENABLE, Kind::Checkbox),
    (keys::LOGO, Kind::Url),
    (keys::LOGO_WIDTH, Kind::Text),
    (keys::LOGO_WIDTH_MOBILE, Kind::Text),
    (keys::TITLE, Kind::Text),
    (keys::SUBTITLE, Kind::Text),
    (keys::SUBTITLE_BG_COLOR, Kind::Color),
    (keys::SUBTITLE_TEXT_COLOR, Kind::Color),
    (keys::BG_COLOR, Kind::Color),
    (keys::TEXT_COLOR, Kind::Color),
    (keys::LAYOUT, Kind::Text),
    (keys::LINK_URL, Kind::Url),
    (keys::MENU_ID, Kind::Text),
    (keys::WIDTH, Kind::Text),
    (keys::STICKY, Kind::Checkbox),
    (keys::STICKY_MOBILE, Kind::Checkbox),
    (keys::SHADOW, Kind::Checkbox),
    (keys::CUSTOM_CSS, Kind::Raw),
    (keys::CUSTOM_JS, Kind::Raw),
    (keys::CUSTOM_HTML, Kind::Raw),
    (keys::NOTICE_ENABLE, Kind::Checkbox),
    (keys::NOTICE_TEXT, Kind::Text),
    (keys::NOTICE_URL, Kind::Url),
    (keys::NOTICE_BG_COLOR, Kind::Color),
    (keys::NOTICE_TEXT_COLOR, Kind::Color),
    (keys::NOTICE_NEW_TAB, Kind::Checkbox),
];

// ============================================================================
// FormSubmission
// ============================================================================

/// Key/value pairs of one settings form POST, keyed by field stem.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw pairs. Names may carry the `header_` form prefix or be
    /// bare stems; the prefix is stripped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            form.set(name.as_ref(), value);
        }
        form
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let stem = name.strip_prefix(keys::FORM_PREFIX).unwrap_or(name);
        self.fields.insert(stem.to_string(), value.into());
    }

    fn get(&self, stem: &str) -> Option<&str> {
        self.fields.get(stem).map(String::as_str)
    }

    /// Apply the submission to a record, field by field.
    pub fn apply_to(&self, record: &mut HeaderRecord) {
        for &(stem, kind) in FIELDS {
            match kind {
                Kind::Checkbox => record.set_flag(stem, self.get(stem).is_some()),
                _ => match self.get(stem) {
                    Some(value) => record.set(stem, sanitize(kind, value)),
                    None => record.delete(stem),
                },
            }
        }

        // `custom` choice + numeric sibling field override. An invalid
        // number leaves the literal choice value in the record, where the
        // width parser treats it as a verbatim passthrough.
        for &stem in keys::CUSTOM_OVERRIDE_STEMS {
            if self.get(stem) == Some("custom")
                && let Some(custom) = self.get(&format!("{stem}{}", keys::CUSTOM_SUFFIX))
                && let Ok(n) = custom.trim().parse::<u32>()
                && n > 0
            {
                record.set(stem, n.to_string());
            }
        }
    }
}

// ============================================================================
// Sanitizers
// ============================================================================

fn sanitize(kind: Kind, value: &str) -> String {
    match kind {
        Kind::Checkbox => unreachable!("checkboxes are handled before sanitizing"),
        Kind::Text => sanitize_text(value),
        Kind::Url => sanitize_url(value),
        Kind::Color => sanitize_color(value),
        Kind::Raw => value.to_string(),
    }
}

/// Collapse control characters to spaces and trim.
fn sanitize_text(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    cleaned.trim().to_string()
}

/// Accept absolute http(s) URLs and root-relative paths, reject the rest.
fn sanitize_url(value: &str) -> String {
    let value = value.trim();
    if value.starts_with('/') && !value.starts_with("//") {
        return value.to_string();
    }
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => value.to_string(),
        _ => String::new(),
    }
}

/// Accept `#rrggbb`, reject the rest.
fn sanitize_color(value: &str) -> String {
    HexColor::parse(value)
        .map(|c| c.as_str().to_string())
        .unwrap_or_default()
}
