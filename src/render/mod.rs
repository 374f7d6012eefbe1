//! Header rendering: config + context → CSS, HTML fragment, behavior script.
//!
//! Rendering is pure and infallible. The host decides where the parts land:
//! the CSS block belongs in `<head>`, the fragment at the start of `<body>`,
//! the script near the end of `<body>`. [`RenderedHeader::to_document`]
//! assembles exactly that shape for previews.

mod css;
mod html;
mod script;

pub use css::MOBILE_BREAKPOINT;

use serde::Serialize;

use crate::config::HeaderConfig;
use crate::utils::html::escape;

/// Page context the renderer cannot know on its own: the effective title
/// (already through its fallback chain) and pre-rendered menu markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// Effective title text, used for the heading and as logo alt text.
    pub title: String,
    /// Opaque nested-list markup from the host's menu renderer.
    pub menu_html: Option<String>,
}

/// The three output parts of one rendered header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedHeader {
    pub css: String,
    pub html: String,
    pub script: String,
}

impl RenderedHeader {
    /// True when nothing renders (disabled or absent config).
    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.html.is_empty() && self.script.is_empty()
    }

    /// Assemble a standalone preview document with the parts in their
    /// intended positions and enough filler content to exercise sticky
    /// positioning and the drawer.
    pub fn to_document(&self, page_title: &str) -> String {
        let mut doc = String::with_capacity(self.css.len() + self.html.len() + 1024);

        doc.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        doc.push_str("<meta charset=\"utf-8\" />\n");
        doc.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n",
        );
        doc.push_str(&format!("<title>{}</title>\n", escape(page_title)));
        doc.push_str("<style>\nbody { margin: 0; font-family: sans-serif; }\n</style>\n");
        if !self.css.is_empty() {
            doc.push_str("<style>\n");
            doc.push_str(&self.css);
            doc.push_str("</style>\n");
        }
        doc.push_str("</head>\n<body>\n");
        doc.push_str(&self.html);

        doc.push_str("<main style=\"padding: 40px 30px; max-width: 760px; margin: 0 auto;\">\n");
        for _ in 0..6 {
            doc.push_str(
                "<p>Scroll content. The header above is generated from your \
                 configuration; resize below the mobile breakpoint to try the \
                 drawer menu.</p>\n",
            );
        }
        doc.push_str("</main>\n");

        if !self.script.is_empty() {
            doc.push_str("<script>\n");
            doc.push_str(&self.script);
            doc.push_str("</script>\n");
        }
        doc.push_str("</body>\n</html>\n");
        doc
    }
}

/// Render one header. Disabled configs produce empty parts.
pub fn render(config: &HeaderConfig, ctx: &RenderContext) -> RenderedHeader {
    if !config.enabled {
        return RenderedHeader::default();
    }

    RenderedHeader {
        css: css::css_block(config, ctx),
        html: html::fragment(config, ctx),
        script: script::behavior(config, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HeaderWidth, Layout, LogoWidth, NoticeConfig};

    const MENU: &str = "<ul class=\"header-menu\"><li><a href=\"/\">Home</a></li>\
                        <li><a href=\"/blog\">Blog</a><ul class=\"sub-menu\">\
                        <li><a href=\"/blog/news\">News</a></li></ul></li></ul>";

    fn ctx(title: &str) -> RenderContext {
        RenderContext {
            title: title.to_string(),
            menu_html: None,
        }
    }

    fn ctx_with_menu(title: &str) -> RenderContext {
        RenderContext {
            title: title.to_string(),
            menu_html: Some(MENU.to_string()),
        }
    }

    fn enabled() -> HeaderConfig {
        HeaderConfig {
            enabled: true,
            ..HeaderConfig::default()
        }
    }

    #[test]
    fn test_disabled_renders_nothing() {
        let config = HeaderConfig::default();
        let rendered = render(&config, &ctx_with_menu("Anything"));
        assert!(rendered.is_empty());
        assert_eq!(rendered.css, "");
        assert_eq!(rendered.html, "");
        assert_eq!(rendered.script, "");
    }

    #[test]
    fn test_title_heading_without_logo() {
        let rendered = render(&enabled(), &ctx("About Us"));
        assert!(rendered.html.contains("<h1 class=\"header-title\">About Us</h1>"));
        assert!(!rendered.html.contains("header-logo"));
    }

    #[test]
    fn test_logo_suppresses_title() {
        let config = HeaderConfig {
            logo_url: Some("https://x/logo.png".to_string()),
            title: Some("Never shown".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx("Fallback"));
        assert!(rendered.html.contains("src=\"https://x/logo.png\""));
        assert!(!rendered.html.contains("header-title"));
        assert!(!rendered.html.contains("Never shown"));
    }

    #[test]
    fn test_title_text_is_escaped() {
        let config = HeaderConfig {
            title: Some("Q&A <Session>".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx("Q&A <Session>"));
        assert!(rendered.html.contains("Q&amp;A &lt;Session&gt;"));
        assert!(!rendered.html.contains("<Session>"));
    }

    #[test]
    fn test_link_wraps_brand() {
        let config = HeaderConfig {
            link_url: Some("https://example.com".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx("Home"));
        assert!(
            rendered
                .html
                .contains("<a href=\"https://example.com\">Home</a>")
        );
    }

    #[test]
    fn test_width_full_has_no_max_width() {
        let rendered = render(&enabled(), &ctx("T"));
        assert!(!rendered.css.contains("max-width"));
    }

    #[test]
    fn test_width_px() {
        let config = HeaderConfig {
            width: HeaderWidth::parse("800"),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.contains("max-width: 800px;"));
    }

    #[test]
    fn test_width_passthrough_verbatim() {
        let config = HeaderConfig {
            width: HeaderWidth::parse("custom-abc"),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.contains("max-width: custom-abc;"));
        assert!(!rendered.css.contains("custom-abcpx"));
    }

    #[test]
    fn test_horizontal_layout_scenario() {
        // {enabled, horizontal, logo, menu}: header-left with the logo,
        // header-navigation with hamburger and menu markup, no title.
        let config = HeaderConfig {
            layout: Layout::Horizontal,
            logo_url: Some("https://x/logo.png".to_string()),
            menu_id: Some("3".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx_with_menu("Site"));

        let left_pos = rendered.html.find("header-left").unwrap();
        let logo_pos = rendered.html.find("header-logo").unwrap();
        let nav_pos = rendered.html.find("header-navigation").unwrap();
        assert!(left_pos < logo_pos && logo_pos < nav_pos);
        assert!(rendered.html.contains("menu-toggle"));
        assert!(rendered.html.contains(MENU));
        assert!(!rendered.html.contains("header-title"));
    }

    #[test]
    fn test_center_layout_subtitle_band_before_inner() {
        let config = HeaderConfig {
            subtitle: Some("Tagline".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        let sub_pos = rendered.html.find("header-subtitle").unwrap();
        let inner_pos = rendered.html.find("header-inner").unwrap();
        assert!(sub_pos < inner_pos);
    }

    #[test]
    fn test_horizontal_subtitle_in_right_container() {
        let config = HeaderConfig {
            layout: Layout::Horizontal,
            subtitle: Some("Tagline".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        let right_pos = rendered.html.find("header-right").unwrap();
        let sub_pos = rendered.html.find("header-subtitle").unwrap();
        assert!(right_pos < sub_pos);
    }

    #[test]
    fn test_horizontal_without_right_content_omits_container() {
        let config = HeaderConfig {
            layout: Layout::Horizontal,
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.html.contains("header-left"));
        assert!(!rendered.html.contains("header-right"));
    }

    #[test]
    fn test_colors_parameterize_css() {
        let config: HeaderConfig = toml::from_str(
            "enabled = true\nbg_color = \"#123456\"\ntext_color = \"#fedcba\"",
        )
        .unwrap();
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.contains("background-color: #123456;"));
        assert!(rendered.css.contains("color: #fedcba;"));
    }

    #[test]
    fn test_sticky_and_shadow_flags() {
        let plain = render(&enabled(), &ctx("T"));
        assert!(!plain.css.contains("position: sticky"));
        assert!(!plain.css.contains("box-shadow: 0 2px 8px"));

        let config = HeaderConfig {
            sticky: true,
            shadow: true,
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.contains("@media (min-width: 769px)"));
        assert!(rendered.css.contains("position: sticky"));
        assert!(rendered.css.contains("box-shadow: 0 2px 8px"));
    }

    #[test]
    fn test_sticky_mobile_only_inside_breakpoint() {
        let config = HeaderConfig {
            sticky_mobile: true,
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        let media_pos = rendered.css.find("@media (max-width: 768px)").unwrap();
        let sticky_pos = rendered.css.find("position: sticky").unwrap();
        assert!(sticky_pos > media_pos);
        assert!(!rendered.css.contains("min-width: 769px"));
    }

    #[test]
    fn test_logo_width_values() {
        let config = HeaderConfig {
            logo_url: Some("https://x/l.png".to_string()),
            logo_width: LogoWidth::parse("auto"),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.contains("width: auto;"));

        let config = HeaderConfig {
            logo_width: LogoWidth::Px(320),
            ..config
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.contains("width: 320px;"));
    }

    #[test]
    fn test_mobile_logo_width_emitted_only_when_set() {
        let rendered = render(&enabled(), &ctx("T"));
        let media_pos = rendered.css.find("@media (max-width: 768px)").unwrap();
        assert!(!rendered.css[media_pos..].contains("header-logo"));

        let config = HeaderConfig {
            logo_width_mobile: Some(LogoWidth::Px(120)),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        let media_pos = rendered.css.find("@media (max-width: 768px)").unwrap();
        assert!(rendered.css[media_pos..].contains("width: 120px;"));
    }

    #[test]
    fn test_notice_bar_link_and_span() {
        let mut config = enabled();
        config.notice = NoticeConfig {
            enabled: true,
            text: "Big news & more".to_string(),
            ..NoticeConfig::default()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(
            rendered
                .html
                .contains("<div class=\"header-notice\"><span>Big news &amp; more</span></div>")
        );

        config.notice.url = Some("https://example.com/news".to_string());
        config.notice.new_tab = true;
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.html.contains(
            "<a href=\"https://example.com/news\" target=\"_blank\" rel=\"noopener\">"
        ));
    }

    #[test]
    fn test_notice_colors_in_css_only_when_active() {
        let rendered = render(&enabled(), &ctx("T"));
        assert!(!rendered.css.contains("header-notice"));

        let mut config = enabled();
        config.notice = NoticeConfig {
            enabled: true,
            text: "On".to_string(),
            ..NoticeConfig::default()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.contains(".custom-header .header-notice"));
        assert!(rendered.css.contains("background-color: #222222;"));
    }

    #[test]
    fn test_custom_blocks_verbatim() {
        let config = HeaderConfig {
            custom_css: Some(".custom-header { letter-spacing: 1px; }".to_string()),
            custom_js: Some("console.log(\"hi\");".to_string()),
            custom_html: Some("<span id=\"promo\">20% off</span>".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        assert!(rendered.css.ends_with(".custom-header { letter-spacing: 1px; }\n"));
        assert!(rendered.script.contains("console.log(\"hi\");"));
        assert!(
            rendered
                .html
                .contains("<div class=\"header-custom\"><span id=\"promo\">20% off</span></div>")
        );
    }

    #[test]
    fn test_script_empty_without_menu_or_custom_js() {
        let rendered = render(&enabled(), &ctx("T"));
        assert!(rendered.script.is_empty());
    }

    #[test]
    fn test_script_wires_drawer_when_menu_present() {
        let rendered = render(&enabled(), &ctx_with_menu("T"));
        assert!(rendered.script.starts_with("document.addEventListener(\"DOMContentLoaded\""));
        assert!(rendered.script.contains("classList.toggle(\"active\")"));
        assert!(rendered.script.contains("menu-overlay"));
        // The fragment carries the overlay element the script expects.
        assert!(rendered.html.contains("<div class=\"menu-overlay\"></div>"));
    }

    #[test]
    fn test_custom_js_inside_dom_ready() {
        let config = HeaderConfig {
            custom_js: Some("header.dataset.ready = \"1\";".to_string()),
            ..enabled()
        };
        let rendered = render(&config, &ctx("T"));
        let open = rendered.script.find("DOMContentLoaded").unwrap();
        let snippet = rendered.script.find("header.dataset.ready").unwrap();
        let close = rendered.script.rfind("});").unwrap();
        assert!(open < snippet && snippet < close);
    }

    #[test]
    fn test_drawer_css_only_with_menu() {
        let rendered = render(&enabled(), &ctx("T"));
        assert!(!rendered.css.contains("menu-toggle"));

        let rendered = render(&enabled(), &ctx_with_menu("T"));
        assert!(rendered.css.contains(".custom-header .menu-toggle"));
        assert!(rendered.css.contains("right: -280px;"));
        assert!(rendered.css.contains("ul.active"));
    }

    #[test]
    fn test_document_assembly() {
        let rendered = render(&enabled(), &ctx_with_menu("My Site"));
        let doc = rendered.to_document("My Site");
        assert!(doc.starts_with("<!doctype html>"));
        let style_pos = doc.find("<style>").unwrap();
        let body_pos = doc.find("<body>").unwrap();
        let script_pos = doc.find("<script>").unwrap();
        assert!(style_pos < body_pos && body_pos < script_pos);
        assert!(doc.contains("<title>My Site</title>"));
    }
}
