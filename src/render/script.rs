//! Behavior script generation.
//!
//! One DOM-ready handler: drawer toggling when a menu is present, then the
//! admin's custom JS verbatim. Headers with neither need no script at all.

use crate::config::HeaderConfig;

use super::RenderContext;

/// Hamburger wiring: toggles `active` on the menu list and overlay, keeps
/// `aria-expanded` in sync, closes on overlay click.
const TOGGLE_JS: &str = "\
    var header = document.querySelector(\".custom-header\");
    if (header) {
        var toggle = header.querySelector(\".menu-toggle\");
        var menu = header.querySelector(\".header-navigation ul\");
        var overlay = header.querySelector(\".menu-overlay\");
        if (toggle && menu) {
            toggle.addEventListener(\"click\", function () {
                var open = menu.classList.toggle(\"active\");
                if (overlay) {
                    overlay.classList.toggle(\"active\", open);
                }
                toggle.setAttribute(\"aria-expanded\", open ? \"true\" : \"false\");
            });
            if (overlay) {
                overlay.addEventListener(\"click\", function () {
                    menu.classList.remove(\"active\");
                    overlay.classList.remove(\"active\");
                    toggle.setAttribute(\"aria-expanded\", \"false\");
                });
            }
        }
    }
";

pub(super) fn behavior(config: &HeaderConfig, ctx: &RenderContext) -> String {
    let custom = config.custom_js_text();
    if ctx.menu_html.is_none() && custom.is_none() {
        return String::new();
    }

    let mut js = String::with_capacity(1024);
    js.push_str("document.addEventListener(\"DOMContentLoaded\", function () {\n");

    if ctx.menu_html.is_some() {
        js.push_str(TOGGLE_JS);
    }

    if let Some(custom) = custom {
        js.push_str(custom);
        if !custom.ends_with('\n') {
            js.push('\n');
        }
    }

    js.push_str("});\n");
    js
}
