//! Masthead - a configurable page header renderer.
//!
//! One flat [`HeaderConfig`] record describes a site header: logo or title,
//! subtitle, colors, layout, navigation menu, sticky/shadow flags, custom
//! CSS/JS/HTML and an announcement bar. [`render`] maps it deterministically
//! to three output parts - a CSS block for `<head>`, an HTML fragment for
//! the start of `<body>`, a behavior script for the end of `<body>`.
//!
//! Storage, menus and page context stay outside: backends implement
//! [`resolve::HeaderSource`] and [`resolve::MenuProvider`], and
//! [`resolve::resolve`] picks the effective header for a view (per-page
//! record, or the site-wide front-page record which takes precedence on the
//! front page).
//!
//! ```
//! use masthead::resolve::{NoMenus, ViewContext, render_view};
//! use masthead::store::{HeaderRecord, MemoryStore, form::FormSubmission};
//!
//! let mut store = MemoryStore::new("Example Site");
//! store.insert_page("about", "About Us");
//!
//! // A settings form submission turns the header on.
//! let mut form = FormSubmission::new();
//! form.set("header_enable", "1");
//! form.set("header_bg_color", "#336699");
//! form.apply_to(store.page_record_mut("about").unwrap());
//!
//! let rendered = render_view(&store, &NoMenus, &ViewContext::page("about"));
//! assert!(rendered.html.contains("About Us"));
//! assert!(rendered.css.contains("#336699"));
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod render;
pub mod resolve;
pub mod site;
pub mod store;
pub mod utils;

pub use config::{HeaderConfig, HeaderWidth, HexColor, Layout, LogoWidth, NoticeConfig};
pub use render::{RenderContext, RenderedHeader, render};
pub use resolve::{HeaderSource, MenuProvider, ResolvedHeader, ViewContext, resolve};
