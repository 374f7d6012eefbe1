//! Preview server.
//!
//! Serves rendered headers over HTTP: `/` is the front-page view,
//! `/page/<id>` a page view. The project file is re-read on every request -
//! rendering is request-scoped and stateless, so edits show up on refresh
//! without a file watcher.

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use tiny_http::{Header, Request, Response, Server};

use crate::resolve::{HeaderSource, ViewContext, render_view};
use crate::site::SiteFile;
use crate::utils::html::escape;
use crate::{debug, log};

/// Default bind address for the preview server.
pub const DEFAULT_INTERFACE: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_PORT: u16 = 5279;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

pub fn run(config_arg: &Path, interface: Option<IpAddr>, port: Option<u16>) -> Result<()> {
    // Resolve the project file once up front so a missing file fails fast;
    // requests re-read it from this path.
    let (_, project_path) = crate::site::load_project(config_arg)?;

    let interface = interface.unwrap_or(DEFAULT_INTERFACE);
    let port = port.unwrap_or(DEFAULT_PORT);
    let (server, addr) = bind_with_retry(interface, port)?;
    let server = Arc::new(server);

    {
        let server = Arc::clone(&server);
        ctrlc::set_handler(move || server.unblock())
            .context("failed to register Ctrl-C handler")?;
    }

    log!("serve"; "http://{addr}");
    log!("serve"; "project: {} (re-read per request)", project_path.display());

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &project_path) {
            log!("error"; "{e:#}");
        }
    }

    log!("serve"; "shutting down");
    Ok(())
}

/// Bind to the specified interface and port, with automatic port retry.
fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

fn handle_request(request: Request, project_path: &Path) -> Result<()> {
    let url = request.url().to_string();
    debug!("serve"; "{} {}", request.method(), url);

    let site = match SiteFile::load(project_path) {
        Ok(site) => site,
        Err(e) => {
            return respond_html(
                request,
                500,
                &error_page(&format!("{e:#}")),
            );
        }
    };

    let path = url.split('?').next().unwrap_or("/");
    let view = match path {
        "/" => ViewContext::Front,
        p => match p.strip_prefix("/page/") {
            Some(id) if !id.is_empty() => ViewContext::page(id.trim_end_matches('/')),
            _ => {
                return respond_html(request, 404, &error_page("not found"));
            }
        },
    };

    let page_title = match &view {
        ViewContext::Front => site.site_name().to_string(),
        ViewContext::Page(id) => match site.page_title(id) {
            Some(title) => title,
            None => {
                return respond_html(
                    request,
                    404,
                    &error_page(&format!("page `{}` is not defined", escape(id))),
                );
            }
        },
    };

    let rendered = render_view(&site, &site, &view);
    let mut doc = rendered.to_document(&page_title);

    // Append quick navigation between previewable views.
    doc = doc.replace("</main>", &preview_nav(&site, &view));

    respond_html(request, 200, &doc)
}

/// Links to every previewable view, appended to the sample content.
fn preview_nav(site: &SiteFile, current: &ViewContext) -> String {
    let mut nav = String::from("<hr /><p>Preview:</p>\n<ul>\n");
    nav.push_str(&match current {
        ViewContext::Front => "<li>front page (this view)</li>\n".to_string(),
        _ => "<li><a href=\"/\">front page</a></li>\n".to_string(),
    });
    for id in site.page_ids() {
        let here = matches!(current, ViewContext::Page(p) if p == id);
        if here {
            nav.push_str(&format!("<li>{} (this view)</li>\n", escape(id)));
        } else {
            nav.push_str(&format!(
                "<li><a href=\"/page/{id}\">{id}</a></li>\n",
                id = escape(id)
            ));
        }
    }
    nav.push_str("</ul>\n</main>");
    nav
}

fn error_page(message: &str) -> String {
    format!(
        "<!doctype html>\n<html><body><h1>masthead</h1><pre>{}</pre></body></html>\n",
        escape(message)
    )
}

fn respond_html(request: Request, status: u16, body: &str) -> Result<()> {
    let header = Header::from_bytes("Content-Type", "text/html; charset=utf-8")
        .expect("static header is valid");
    let response = Response::from_string(body)
        .with_status_code(status)
        .with_header(header);
    request.respond(response)?;
    Ok(())
}
