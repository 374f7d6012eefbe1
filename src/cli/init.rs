//! Project initialization.
//!
//! Writes a commented `masthead.toml` template. Existing files are never
//! overwritten.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::log;
use crate::site::PROJECT_FILE;

/// Generate the masthead.toml template with comments
pub fn generate_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Masthead project file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/masthead-rs/masthead\n\n");

    out.push_str(
        "\
[site]
# Site name, used as the front-page title fallback.
name = \"My Site\"
# Uncomment to designate a static front page by id. Its own header applies
# on the front page whenever [front] is disabled.
# front_page = \"home\"

# Menus hold pre-rendered nested-list markup. Submenus nest as
# <ul class=\"sub-menu\"> inside their parent <li>.
[menus.main]
html = '''
<ul class=\"header-menu\">
  <li><a href=\"/\">Home</a></li>
  <li><a href=\"/blog\">Blog</a></li>
  <li><a href=\"/about\">About</a></li>
</ul>
'''

# Site-wide front-page header. Takes precedence over the static front
# page's own header when enabled.
[front]
enabled = true
# layout = \"center\"          # center | horizontal
# width = \"full\"             # full | pixel number
# logo_url = \"https://example.com/logo.png\"
# logo_width = \"200\"         # pixel number | auto
# logo_width_mobile = \"140\"
# title = \"\"                 # empty: falls back to the site name
# subtitle = \"\"
# bg_color = \"#ffffff\"
# text_color = \"#000000\"
# link_url = \"/\"
menu_id = \"main\"
# sticky = false
# sticky_mobile = false
# shadow = false
# custom_css = \"\"
# custom_js = \"\"
# custom_html = \"\"

# [front.notice]
# enabled = true
# text = \"Free shipping this week\"
# url = \"https://example.com/shipping\"
# bg_color = \"#222222\"
# text_color = \"#ffffff\"
# new_tab = false

# Per-page headers, one [pages.<id>] table each. Preview them at
# /page/<id> with `masthead serve`.
[pages.home]
title = \"Home\"

[pages.home.header]
enabled = true
layout = \"horizontal\"
menu_id = \"main\"
",
    );

    out
}

/// Create a new project file
///
/// If `dry_run` is true, only prints the template to stdout
pub fn run(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_template());
        return Ok(());
    }

    let dir = name.unwrap_or(Path::new("."));
    let path = dir.join(PROJECT_FILE);

    if path.exists() {
        bail!("'{}' already exists, not overwriting", path.display());
    }

    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory '{}'", dir.display()))?;
    }

    fs::write(&path, generate_template())
        .with_context(|| format!("failed to write '{}'", path.display()))?;

    log!("init"; "created {}", path.display());
    log!("init"; "try: masthead serve");
    Ok(())
}
