//! Effective header resolution.
//!
//! One function answers "which header renders for this view, with what
//! title and menu markup" for every scope, instead of parallel per-field
//! lookups per storage kind. Storage backends plug in through
//! [`HeaderSource`]; navigation markup through [`MenuProvider`].

use crate::config::HeaderConfig;
use crate::render::{RenderContext, RenderedHeader};

/// Which page view is being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContext {
    /// The site front page.
    Front,
    /// A regular post/page view, by page id.
    Page(String),
}

impl ViewContext {
    pub fn page(id: impl Into<String>) -> Self {
        Self::Page(id.into())
    }
}

/// Read access to stored header configuration, implemented by whatever holds
/// the records (key-value store, project file, host CMS adapter).
pub trait HeaderSource {
    /// Site name, the front-page title fallback.
    fn site_name(&self) -> &str;

    /// The site-wide front-page header record, if one was ever saved.
    fn front_header(&self) -> Option<HeaderConfig>;

    /// Id of the static page designated as front page, if any.
    fn front_page_id(&self) -> Option<&str>;

    /// A page's own header record.
    fn page_header(&self, id: &str) -> Option<HeaderConfig>;

    /// A page's title, the per-page title fallback.
    fn page_title(&self, id: &str) -> Option<String>;
}

/// Pre-rendered navigation markup by menu id. The markup is opaque here:
/// nested-list generation belongs to the host's menu renderer.
pub trait MenuProvider {
    fn menu_html(&self, menu_id: &str) -> Option<String>;
}

/// A menu provider with no menus, for callers that render without navigation.
pub struct NoMenus;

impl MenuProvider for NoMenus {
    fn menu_html(&self, _menu_id: &str) -> Option<String> {
        None
    }
}

/// A header ready to render: its config plus the resolved page context.
#[derive(Debug, Clone)]
pub struct ResolvedHeader {
    pub config: HeaderConfig,
    pub context: RenderContext,
}

/// Resolve the effective header for a view.
///
/// Precedence on the front page: the site-wide record wins when enabled;
/// otherwise the designated static front page's own record applies. A view
/// without an enabled record resolves to `None` and renders nothing.
pub fn resolve(
    source: &impl HeaderSource,
    menus: &impl MenuProvider,
    view: &ViewContext,
) -> Option<ResolvedHeader> {
    let config = match view {
        ViewContext::Page(id) => source.page_header(id).filter(|c| c.enabled)?,
        ViewContext::Front => source
            .front_header()
            .filter(|c| c.enabled)
            .or_else(|| {
                source
                    .front_page_id()
                    .and_then(|id| source.page_header(id))
                    .filter(|c| c.enabled)
            })?,
    };

    // Title fallback applies only when the config itself has none; the
    // renderer ignores it entirely when a logo is set.
    let title = match config.title_text() {
        Some(t) => t.to_string(),
        None => match view {
            ViewContext::Front => source.site_name().to_string(),
            ViewContext::Page(id) => source.page_title(id).unwrap_or_default(),
        },
    };

    let menu_html = config.menu().and_then(|id| menus.menu_html(id));

    Some(ResolvedHeader {
        context: RenderContext { title, menu_html },
        config,
    })
}

/// Resolve and render in one step. Views without an enabled header produce
/// empty output parts.
pub fn render_view(
    source: &impl HeaderSource,
    menus: &impl MenuProvider,
    view: &ViewContext,
) -> RenderedHeader {
    match resolve(source, menus, view) {
        Some(resolved) => crate::render::render(&resolved.config, &resolved.context),
        None => RenderedHeader::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HexColor;
    use crate::store::{HeaderRecord, MemoryStore};

    fn enabled_config(bg: &str) -> HeaderConfig {
        HeaderConfig {
            enabled: true,
            bg_color: HexColor::parse(bg).unwrap(),
            ..HeaderConfig::default()
        }
    }

    fn store_with_page(id: &str, title: &str, config: &HeaderConfig) -> MemoryStore {
        let mut store = MemoryStore::new("Example Site");
        store.insert_page(id, title);
        *store.page_record_mut(id).unwrap() = HeaderRecord::from_config(config);
        store
    }

    #[test]
    fn test_disabled_page_resolves_to_none() {
        let mut config = enabled_config("#336699");
        config.enabled = false;
        let store = store_with_page("about", "About", &config);

        assert!(resolve(&store, &NoMenus, &ViewContext::page("about")).is_none());
        assert!(render_view(&store, &NoMenus, &ViewContext::page("about")).is_empty());
    }

    #[test]
    fn test_unknown_page_resolves_to_none() {
        let store = MemoryStore::new("Example Site");
        assert!(resolve(&store, &NoMenus, &ViewContext::page("missing")).is_none());
    }

    #[test]
    fn test_page_title_fallback() {
        let store = store_with_page("about", "About Us", &enabled_config("#336699"));
        let resolved = resolve(&store, &NoMenus, &ViewContext::page("about")).unwrap();
        assert_eq!(resolved.context.title, "About Us");
    }

    #[test]
    fn test_explicit_title_wins_over_fallback() {
        let mut config = enabled_config("#336699");
        config.title = Some("Hand-set".to_string());
        let store = store_with_page("about", "About Us", &config);

        let resolved = resolve(&store, &NoMenus, &ViewContext::page("about")).unwrap();
        assert_eq!(resolved.context.title, "Hand-set");
    }

    #[test]
    fn test_front_falls_back_to_site_name() {
        let mut store = MemoryStore::new("Example Site");
        *store.front_record_mut() = HeaderRecord::from_config(&enabled_config("#112233"));

        let resolved = resolve(&store, &NoMenus, &ViewContext::Front).unwrap();
        assert_eq!(resolved.context.title, "Example Site");
    }

    #[test]
    fn test_front_record_beats_static_front_page() {
        // The static front page has its own enabled record with different
        // colors; the site-wide record must win.
        let mut store = store_with_page("home", "Home", &enabled_config("#aaaaaa"));
        store.set_front_page("home");
        *store.front_record_mut() = HeaderRecord::from_config(&enabled_config("#112233"));

        let resolved = resolve(&store, &NoMenus, &ViewContext::Front).unwrap();
        assert_eq!(resolved.config.bg_color.as_str(), "#112233");
    }

    #[test]
    fn test_disabled_front_record_falls_through_to_static_page() {
        let mut store = store_with_page("home", "Home", &enabled_config("#aaaaaa"));
        store.set_front_page("home");
        let mut disabled = enabled_config("#112233");
        disabled.enabled = false;
        *store.front_record_mut() = HeaderRecord::from_config(&disabled);

        let resolved = resolve(&store, &NoMenus, &ViewContext::Front).unwrap();
        assert_eq!(resolved.config.bg_color.as_str(), "#aaaaaa");
    }

    #[test]
    fn test_menu_markup_resolution() {
        let mut config = enabled_config("#336699");
        config.menu_id = Some("main".to_string());
        let mut store = store_with_page("about", "About", &config);
        store.insert_menu("main", "<ul><li><a href=\"/\">Home</a></li></ul>");

        let resolved = resolve(&store, &store, &ViewContext::page("about")).unwrap();
        assert!(resolved.context.menu_html.is_some());

        // Dangling menu id: header still resolves, just without navigation.
        let resolved = resolve(&store, &NoMenus, &ViewContext::page("about")).unwrap();
        assert!(resolved.context.menu_html.is_none());
    }
}
