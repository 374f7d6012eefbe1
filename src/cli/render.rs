//! Render command: one header, one output.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::OutputFormat;
use crate::resolve::{HeaderSource, ViewContext, render_view};
use crate::site::{SiteFile, load_project};
use crate::{debug, log};

pub struct RenderArgs<'a> {
    pub page: Option<&'a str>,
    pub fragment: bool,
    pub format: OutputFormat,
    pub output: Option<&'a Path>,
}

pub fn run(config_arg: &Path, args: &RenderArgs<'_>) -> Result<()> {
    let (site, path) = load_project(config_arg)?;
    debug!("render"; "project: {}", path.display());

    let output = render_output(&site, args)?;

    match args.output {
        Some(file) => {
            fs::write(file, &output)
                .with_context(|| format!("failed to write '{}'", file.display()))?;
            log!("render"; "wrote {} ({} bytes)", file.display(), output.len());
        }
        None => print!("{output}"),
    }
    Ok(())
}

/// Produce the requested output string for a loaded project.
fn render_output(site: &SiteFile, args: &RenderArgs<'_>) -> Result<String> {
    let view = match args.page {
        Some(id) => ViewContext::page(id),
        None => ViewContext::Front,
    };

    let rendered = render_view(site, site, &view);
    if rendered.is_empty() {
        log!("render"; "no enabled header for this view, output is empty");
    }

    let output = match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&rendered)?;
            json.push('\n');
            json
        }
        OutputFormat::Html if args.fragment => rendered.html.clone(),
        OutputFormat::Html => {
            let title = match &view {
                ViewContext::Front => site.site_name().to_string(),
                ViewContext::Page(id) => site
                    .page_title(id)
                    .unwrap_or_else(|| site.site_name().to_string()),
            };
            rendered.to_document(&title)
        }
    };
    Ok(output)
}
