//! Validate command: run config diagnostics over every scope.

use anyhow::{Result, bail};
use std::path::Path;

use crate::log;
use crate::site::load_project;

pub fn run(config_arg: &Path) -> Result<()> {
    let (site, path) = load_project(config_arg)?;
    log!("validate"; "checking {}", path.display());

    let diag = site.validate();
    diag.print_warnings();

    if diag.has_errors() {
        bail!("{diag}");
    }

    let scopes = 1 + site.pages.len();
    log!(
        "validate";
        "ok: {scopes} header scope{} checked",
        if scopes == 1 { "" } else { "s" }
    );
    Ok(())
}
