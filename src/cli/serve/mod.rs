//! Admin shortcut server.
//!
//! Answers the well-known admin shortcuts under the site's subdirectory
//! with redirects into the admin; every other path is a 404.
//!
//! | Request | Redirect |
//! |---------|----------|
//! | `/admin/`, `/signin/`, `/login/`, `/dashboard/` | 301 to the admin root |
//! | `/signup/`, `/register/` | 301 to `#/signup/` |

mod lifecycle;
mod response;

use crate::{config::SiteConfig, debug, log, url::SiteUrls};
use anyhow::Result;
use std::net::IpAddr;
use tiny_http::Request;

/// Shortcut path segments and the admin path they redirect to.
const SHORTCUTS: &[(&str, &str)] = &[
    ("admin", "/"),
    ("signin", "/"),
    ("login", "/"),
    ("dashboard", "/"),
    ("signup", "#/signup/"),
    ("register", "#/signup/"),
];

/// Start the request loop (blocking).
pub fn serve(config: &SiteConfig, interface: IpAddr, port: u16) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(interface, port)?;
    log!("serve"; "http://{}", addr);

    let urls = SiteUrls::new(config);
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &urls) {
            log!("serve"; "request error: {e}");
        }
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, urls: &SiteUrls) -> Result<()> {
    let Some(admin_path) = shortcut_target(request.url(), urls.subdir()) else {
        debug!("serve"; "404 {}", request.url());
        return response::respond_not_found(request);
    };

    let redirect = urls.redirect_to_admin(crate::redirect::MOVED_PERMANENTLY, admin_path);
    debug!("redirect"; "{} -> {} ({})", request.url(), redirect.location, redirect.status);
    response::respond_redirect(request, redirect)
}

/// Admin path for a shortcut request URL, if it is one.
///
/// The URL must live under `subdir`; query strings are ignored and the
/// trailing slash is optional.
fn shortcut_target(request_url: &str, subdir: &str) -> Option<&'static str> {
    let path = request_url.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_prefix(subdir)?;
    let segment = path.strip_prefix('/')?;
    let segment = segment.strip_suffix('/').unwrap_or(segment);

    SHORTCUTS
        .iter()
        .find(|(name, _)| *name == segment)
        .map(|(_, target)| *target)
}
