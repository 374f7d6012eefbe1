//! CSS block generation.
//!
//! One `<style>` payload per header, parameterized by the config. Layout is
//! desktop-first: base rules plus a single max-width 768px block that swaps
//! the navigation list for a slide-in drawer and applies mobile overrides.

use crate::config::{HeaderConfig, Layout};

use super::RenderContext;

/// Viewport width at which the drawer menu takes over.
pub const MOBILE_BREAKPOINT: u32 = 768;

pub(super) fn css_block(config: &HeaderConfig, ctx: &RenderContext) -> String {
    let mut css = String::with_capacity(4096);
    let bg = config.bg_color.as_str();
    let text = config.text_color.as_str();
    let has_menu = ctx.menu_html.is_some();

    // ------------------------------------------------------------------
    // Root and inner container
    // ------------------------------------------------------------------
    css.push_str(&format!(
        "\
.custom-header {{
    background-color: {bg};
    color: {text};
    padding: 26px 30px;
    text-align: {align};
    position: relative;
    z-index: 999;
{shadow}}}
",
        align = match config.layout {
            Layout::Center => "center",
            Layout::Horizontal => "left",
        },
        shadow = if config.shadow {
            "    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);\n"
        } else {
            ""
        },
    ));

    if let Some(max_width) = config.width.max_width() {
        css.push_str(&format!(
            "\
.custom-header .header-inner {{
    max-width: {max_width};
    margin-left: auto;
    margin-right: auto;
}}
",
        ));
    }

    if config.sticky {
        css.push_str(&format!(
            "\
@media (min-width: {}px) {{
    .custom-header {{
        position: sticky;
        top: 0;
    }}
}}
",
            MOBILE_BREAKPOINT + 1
        ));
    }

    // ------------------------------------------------------------------
    // Brand: logo and title
    // ------------------------------------------------------------------
    css.push_str(&format!(
        "\
.custom-header .header-logo {{
    width: {logo_width};
    height: auto;
}}
.custom-header.layout-center .header-logo {{
    margin-bottom: 20px;
}}
.custom-header .header-title {{
    font-size: 2.5em;
    font-weight: bold;
    margin: 0;
}}
.custom-header.layout-center .header-title {{
    margin-bottom: 10px;
}}
.custom-header a {{
    color: inherit;
    text-decoration: none;
}}
.custom-header a:hover {{
    opacity: 0.8;
}}
",
        logo_width = config.logo_width.css_value(),
    ));

    // ------------------------------------------------------------------
    // Subtitle: a band above the inner container in center layout, an
    // inline badge on the right side in horizontal layout
    // ------------------------------------------------------------------
    css.push_str(&format!(
        "\
.custom-header .header-subtitle {{
    background-color: {sub_bg};
    color: {sub_text};
    font-size: 1.1em;
    margin: 0;
}}
.custom-header.layout-center .header-subtitle {{
    margin: -26px -30px 20px;
    padding: 8px 30px;
}}
.custom-header.layout-horizontal .header-subtitle {{
    display: inline-block;
    padding: 4px 12px;
    border-radius: 4px;
    font-size: 14px;
    white-space: nowrap;
}}
",
        sub_bg = config.subtitle_bg_color.as_str(),
        sub_text = config.subtitle_text_color.as_str(),
    ));

    // ------------------------------------------------------------------
    // Horizontal layout containers
    // ------------------------------------------------------------------
    css.push_str(
        "\
.custom-header.layout-horizontal .header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    flex-wrap: wrap;
}
.custom-header.layout-horizontal .header-left {
    flex: 0 0 auto;
    display: flex;
    align-items: center;
    gap: 15px;
}
.custom-header.layout-horizontal .header-right {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: flex-end;
    gap: 16px;
}
",
    );

    // ------------------------------------------------------------------
    // Navigation: flat list with hover dropdowns on desktop
    // ------------------------------------------------------------------
    if has_menu {
        css.push_str(NAVIGATION_CSS);
    }

    // ------------------------------------------------------------------
    // Custom HTML slot and notice bar
    // ------------------------------------------------------------------
    css.push_str(
        "\
.custom-header.layout-center .header-custom {
    margin-top: 15px;
}
",
    );

    if config.notice.is_active() {
        css.push_str(&format!(
            "\
.custom-header .header-notice {{
    background-color: {notice_bg};
    color: {notice_text};
    text-align: center;
    font-size: 14px;
    padding: 8px 16px;
    margin: 26px -30px -26px;
}}
.custom-header .header-notice a {{
    color: inherit;
    text-decoration: underline;
}}
",
            notice_bg = config.notice.bg_color.as_str(),
            notice_text = config.notice.text_color.as_str(),
        ));
    }

    // ------------------------------------------------------------------
    // Mobile: typography, drawer menu, per-viewport overrides
    // ------------------------------------------------------------------
    css.push_str(&mobile_css(config, has_menu, bg));

    if let Some(custom) = config.custom_css_text() {
        css.push_str(custom);
        if !custom.ends_with('\n') {
            css.push('\n');
        }
    }

    css
}

/// Desktop navigation rules: inline list, hover dropdowns, hidden hamburger.
const NAVIGATION_CSS: &str = "\
.custom-header.layout-center .header-navigation {
    margin-top: 20px;
}
.custom-header .header-navigation ul {
    list-style: none;
    padding: 0;
    margin: 0;
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 20px;
}
.custom-header.layout-horizontal .header-navigation ul {
    justify-content: flex-end;
}
.custom-header .header-navigation li {
    margin: 0;
    position: relative;
}
.custom-header .header-navigation a {
    display: block;
    padding: 8px 12px;
    border-radius: 4px;
    transition: background-color 0.3s ease;
}
.custom-header .header-navigation a:hover {
    background-color: rgba(0, 0, 0, 0.08);
}
.custom-header .header-navigation .sub-menu {
    position: absolute;
    top: 100%;
    left: 0;
    min-width: 200px;
    background: rgba(0, 0, 0, 0.9);
    border-radius: 4px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
    padding: 0;
    opacity: 0;
    visibility: hidden;
    transform: translateY(-10px);
    transition: all 0.3s ease;
    z-index: 9999;
}
.custom-header .header-navigation li:hover > .sub-menu {
    opacity: 1;
    visibility: visible;
    transform: translateY(0);
}
.custom-header .header-navigation .sub-menu li {
    width: 100%;
}
.custom-header .header-navigation .sub-menu a {
    padding: 12px 16px;
    border-radius: 0;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    color: #fff;
}
.custom-header .header-navigation .sub-menu li:last-child a {
    border-bottom: none;
}
.custom-header .header-navigation .sub-menu .sub-menu {
    top: 0;
    left: 100%;
}
.custom-header .menu-toggle {
    display: none;
    background: none;
    border: 0;
    cursor: pointer;
    padding: 8px;
}
.custom-header .menu-toggle span {
    display: block;
    width: 22px;
    height: 2px;
    margin: 5px 0;
    background-color: currentcolor;
}
.custom-header .menu-overlay {
    display: none;
}
";

/// The single max-width media query block.
fn mobile_css(config: &HeaderConfig, has_menu: bool, bg: &str) -> String {
    let mut css = format!("@media (max-width: {MOBILE_BREAKPOINT}px) {{\n");

    css.push_str(
        "\
    .custom-header .header-title {
        font-size: 2em;
    }
    .custom-header .header-subtitle {
        font-size: 1em;
        white-space: normal;
    }
",
    );

    if let Some(width) = config.logo_width_mobile {
        css.push_str(&format!(
            "\
    .custom-header .header-logo {{
        width: {};
    }}
",
            width.css_value()
        ));
    }

    if config.sticky_mobile {
        css.push_str(
            "\
    .custom-header {
        position: sticky;
        top: 0;
    }
",
        );
    }

    if has_menu {
        css.push_str(&format!(
            "\
    .custom-header .menu-toggle {{
        display: block;
        margin-left: auto;
    }}
    .custom-header.layout-center .header-navigation {{
        margin-top: 10px;
    }}
    .custom-header .header-navigation ul {{
        position: fixed;
        top: 0;
        right: -280px;
        bottom: 0;
        width: 280px;
        flex-direction: column;
        align-items: flex-start;
        gap: 10px;
        background-color: {bg};
        padding: 60px 24px;
        margin: 0;
        overflow-y: auto;
        box-shadow: -2px 0 8px rgba(0, 0, 0, 0.2);
        transition: right 0.3s ease;
        z-index: 9998;
    }}
    .custom-header .header-navigation ul.active {{
        right: 0;
    }}
    .custom-header .header-navigation ul li {{
        width: 100%;
    }}
    .custom-header .header-navigation .sub-menu {{
        position: static;
        min-width: auto;
        width: 100%;
        background: rgba(0, 0, 0, 0.06);
        box-shadow: none;
        transform: none;
        opacity: 1;
        visibility: visible;
        margin: 6px 0 0 12px;
    }}
    .custom-header .header-navigation .sub-menu a {{
        color: inherit;
        border-bottom: none;
        padding: 8px 16px;
    }}
    .custom-header .menu-overlay {{
        display: block;
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        background: rgba(0, 0, 0, 0.5);
        opacity: 0;
        visibility: hidden;
        transition: opacity 0.3s ease;
        z-index: 9997;
    }}
    .custom-header .menu-overlay.active {{
        opacity: 1;
        visibility: visible;
    }}
",
        ));
    }

    css.push_str("}\n");
    css
}
