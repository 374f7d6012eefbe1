//! `masthead.toml` project file.
//!
//! The CLI's configuration source: site metadata, the site-wide front-page
//! header, per-page headers, and pre-rendered menu markup. A second
//! [`HeaderSource`] implementation next to [`crate::store::MemoryStore`];
//! both feed the same resolution function.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Example"
//! front_page = "home"
//!
//! [menus.main]
//! html = '<ul class="header-menu"><li><a href="/">Home</a></li></ul>'
//!
//! [front]
//! enabled = true
//! layout = "horizontal"
//!
//! [pages.home]
//! title = "Home"
//! [pages.home.header]
//! enabled = true
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, HeaderConfig};
use crate::log;
use crate::resolve::{HeaderSource, MenuProvider};

/// Default project filename.
pub const PROJECT_FILE: &str = "masthead.toml";

// ============================================================================
// Sections
// ============================================================================

/// `[site]` metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site name, the front-page title fallback.
    pub name: String,

    /// Id of the page acting as static front page, if any.
    pub front_page: Option<String>,
}

/// One `[menus.<id>]` entry: pre-rendered nested-list markup, kept opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSection {
    pub html: String,
}

/// One `[pages.<id>]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSection {
    /// Page title, the per-page header title fallback.
    pub title: String,

    /// The page's own header record.
    pub header: HeaderConfig,
}

// ============================================================================
// SiteFile
// ============================================================================

/// Root structure of `masthead.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteFile {
    pub site: SiteSection,
    pub menus: BTreeMap<String, MenuSection>,
    pub front: HeaderConfig,
    pub pages: BTreeMap<String, PageSection>,
}

impl SiteFile {
    /// Parse from a TOML string, collecting unknown keys instead of
    /// silently dropping them.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let site = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((site, ignored))
    }

    /// Load from a file path, warning about unknown keys.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))
            .with_context(|| format!("failed to load project file '{}'", path.display()))?;

        let (site, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            log!("warning"; "unknown keys in '{}':", path.display());
            for key in &ignored {
                eprintln!("- {key}");
            }
        }

        Ok(site)
    }

    /// Validate every scope and cross-references into one diagnostics set.
    pub fn validate(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.front.validate(&FieldPath::new("front"), &mut diag);
        check_menu_ref(&self.front, &FieldPath::new("front"), &self.menus, &mut diag);

        for (id, page) in &self.pages {
            let scope = FieldPath::new(format!("pages.{id}.header"));
            page.header.validate(&scope, &mut diag);
            check_menu_ref(&page.header, &scope, &self.menus, &mut diag);
        }

        if let Some(front_page) = &self.site.front_page
            && !self.pages.contains_key(front_page)
        {
            diag.error_with_hint(
                FieldPath::new("site.front_page"),
                format!("page `{front_page}` is not defined"),
                format!("add a [pages.{front_page}] table or remove the reference"),
            );
        }

        diag
    }

    /// Page ids in file order, for the preview server index.
    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

fn check_menu_ref(
    config: &HeaderConfig,
    scope: &FieldPath,
    menus: &BTreeMap<String, MenuSection>,
    diag: &mut ConfigDiagnostics,
) {
    if let Some(menu_id) = config.menu()
        && !menus.contains_key(menu_id)
    {
        diag.error_with_hint(
            scope.join("menu_id"),
            format!("menu `{menu_id}` is not defined"),
            format!("add a [menus.{menu_id}] table with an `html` value"),
        );
    }
}

impl HeaderSource for SiteFile {
    fn site_name(&self) -> &str {
        &self.site.name
    }

    fn front_header(&self) -> Option<HeaderConfig> {
        Some(self.front.clone())
    }

    fn front_page_id(&self) -> Option<&str> {
        self.site.front_page.as_deref()
    }

    fn page_header(&self, id: &str) -> Option<HeaderConfig> {
        self.pages.get(id).map(|p| p.header.clone())
    }

    fn page_title(&self, id: &str) -> Option<String> {
        self.pages.get(id).map(|p| p.title.clone())
    }
}

impl MenuProvider for SiteFile {
    fn menu_html(&self, menu_id: &str) -> Option<String> {
        self.menus.get(menu_id).map(|m| m.html.clone())
    }
}

// ============================================================================
// Project file discovery
// ============================================================================

/// Find the project file by searching upward from the current directory.
///
/// Absolute paths are checked directly; relative names are tried in cwd and
/// each parent until the filesystem root.
pub fn find_project_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Locate and load the project file for a CLI invocation, with tilde
/// expansion on the configured name.
pub fn load_project(config_arg: &Path) -> Result<(SiteFile, PathBuf)> {
    let expanded = shellexpand::tilde(&config_arg.to_string_lossy()).into_owned();
    let name = PathBuf::from(expanded);

    let Some(path) = find_project_file(&name) else {
        bail!(
            "project file '{}' not found. Run 'masthead init' to create one.",
            name.display()
        );
    };

    let site = SiteFile::load(&path)?;
    Ok((site, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;
    use crate::resolve::{ViewContext, resolve};

    const SAMPLE: &str = r##"
[site]
name = "Example"
front_page = "home"

[menus.main]
html = '<ul class="header-menu"><li><a href="/">Home</a></li></ul>'

[front]
enabled = true
layout = "horizontal"
menu_id = "main"

[pages.home]
title = "Home"
[pages.home.header]
enabled = true
bg_color = "#dddddd"

[pages.about]
title = "About Us"
[pages.about.header]
enabled = true
width = "800"
"##;

    #[test]
    fn test_parse_sample() {
        let (site, ignored) = SiteFile::parse_with_ignored(SAMPLE).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(site.site.name, "Example");
        assert_eq!(site.front.layout, Layout::Horizontal);
        assert_eq!(site.pages.len(), 2);
        assert!(site.menus.contains_key("main"));
    }

    #[test]
    fn test_unknown_keys_collected() {
        let (_, ignored) =
            SiteFile::parse_with_ignored("[site]\nname = \"X\"\ncolour = \"red\"").unwrap();
        assert_eq!(ignored, vec!["site.colour".to_string()]);
    }

    #[test]
    fn test_resolution_through_site_file() {
        let (site, _) = SiteFile::parse_with_ignored(SAMPLE).unwrap();

        // Site-wide front record wins over the static front page's own.
        let front = resolve(&site, &site, &ViewContext::Front).unwrap();
        assert_eq!(front.config.layout, Layout::Horizontal);
        assert_eq!(front.context.title, "Example");
        assert!(front.context.menu_html.is_some());

        let about = resolve(&site, &site, &ViewContext::page("about")).unwrap();
        assert_eq!(about.context.title, "About Us");
    }

    #[test]
    fn test_validate_dangling_references() {
        let (site, _) = SiteFile::parse_with_ignored(
            r#"
[site]
name = "X"
front_page = "missing"

[front]
enabled = true
menu_id = "nope"
"#,
        )
        .unwrap();

        let diag = site.validate();
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        fs::write(&path, SAMPLE).unwrap();

        let site = SiteFile::load(&path).unwrap();
        assert_eq!(site.site.name, "Example");

        assert!(SiteFile::load(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_find_project_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(PROJECT_FILE), SAMPLE).unwrap();

        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();
        let found = find_project_file(Path::new(PROJECT_FILE));
        std::env::set_current_dir(prev).unwrap();

        let found = found.unwrap();
        assert!(found.ends_with(PROJECT_FILE));
    }
}
