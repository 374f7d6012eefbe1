//! HTML fragment generation.
//!
//! Element order inside the root: subtitle band (center layout), the inner
//! container with brand / navigation / custom HTML, then the notice bar and
//! the drawer overlay. Class names are stable: downstream themes and the
//! behavior script select on them.

use crate::config::{HeaderConfig, Layout};
use crate::utils::html::{escape, escape_attr};

use super::RenderContext;

pub(super) fn fragment(config: &HeaderConfig, ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str(&format!(
        "<div class=\"custom-header {}\">\n",
        config.layout.css_class()
    ));

    match config.layout {
        Layout::Center => center_body(config, ctx, &mut out),
        Layout::Horizontal => horizontal_body(config, ctx, &mut out),
    }

    if config.notice.is_active() {
        out.push_str(&notice_bar(config));
    }

    if ctx.menu_html.is_some() {
        out.push_str("<div class=\"menu-overlay\"></div>\n");
    }

    out.push_str("</div>\n");
    out
}

fn center_body(config: &HeaderConfig, ctx: &RenderContext, out: &mut String) {
    if let Some(subtitle) = config.subtitle_text() {
        out.push_str(&format!(
            "<div class=\"header-subtitle\">{}</div>\n",
            escape(subtitle)
        ));
    }

    out.push_str("<div class=\"header-inner\">\n");
    out.push_str(&brand(config, ctx));
    if let Some(menu) = &ctx.menu_html {
        out.push_str(&navigation(menu));
    }
    if let Some(html) = config.custom_html_text() {
        out.push_str(&custom_block(html));
    }
    out.push_str("</div>\n");
}

fn horizontal_body(config: &HeaderConfig, ctx: &RenderContext, out: &mut String) {
    out.push_str("<div class=\"header-inner\">\n");
    out.push_str("<div class=\"header-left\">\n");
    out.push_str(&brand(config, ctx));
    out.push_str("</div>\n");

    // The right container only exists when something goes in it.
    let subtitle = config.subtitle_text();
    let custom = config.custom_html_text();
    if subtitle.is_some() || ctx.menu_html.is_some() || custom.is_some() {
        out.push_str("<div class=\"header-right\">\n");
        if let Some(subtitle) = subtitle {
            out.push_str(&format!(
                "<p class=\"header-subtitle\">{}</p>\n",
                escape(subtitle)
            ));
        }
        if let Some(menu) = &ctx.menu_html {
            out.push_str(&navigation(menu));
        }
        if let Some(html) = custom {
            out.push_str(&custom_block(html));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n");
}

/// Logo when set, title heading otherwise; either wrapped in the link.
fn brand(config: &HeaderConfig, ctx: &RenderContext) -> String {
    let link = config.link();

    if let Some(logo) = config.logo() {
        let img = format!(
            "<img src=\"{}\" alt=\"{}\" class=\"header-logo\" />",
            escape_attr(logo),
            escape_attr(&ctx.title)
        );
        format!("<div class=\"header-brand\">{}</div>\n", linked(link, &img))
    } else {
        format!(
            "<h1 class=\"header-title\">{}</h1>\n",
            linked(link, &escape(&ctx.title))
        )
    }
}

fn linked(link: Option<&str>, inner: &str) -> String {
    match link {
        Some(url) => format!("<a href=\"{}\">{inner}</a>", escape_attr(url)),
        None => inner.to_string(),
    }
}

/// The nav element: hamburger toggle plus the host-rendered menu markup.
fn navigation(menu_html: &str) -> String {
    format!(
        "<nav class=\"header-navigation\">\n\
         <button class=\"menu-toggle\" type=\"button\" aria-label=\"Toggle navigation\" aria-expanded=\"false\">\
         <span></span><span></span><span></span>\
         </button>\n\
         {menu_html}\n\
         </nav>\n"
    )
}

fn custom_block(html: &str) -> String {
    format!("<div class=\"header-custom\">{html}</div>\n")
}

fn notice_bar(config: &HeaderConfig) -> String {
    let notice = &config.notice;
    let text = escape(notice.text.trim());

    let inner = match notice.link() {
        Some(url) => {
            let target = if notice.new_tab {
                " target=\"_blank\" rel=\"noopener\""
            } else {
                ""
            };
            format!("<a href=\"{}\"{target}>{text}</a>", escape_attr(url))
        }
        None => format!("<span>{text}</span>"),
    };

    format!("<div class=\"header-notice\">{inner}</div>\n")
}
