//! Redirect commands.
//!
//! A [`RedirectCommand`] describes a redirect without committing to a
//! transport. The serve command turns it into a `tiny_http` response; the
//! `redirect` command prints it as JSON.

use anyhow::{Result, anyhow};
use serde::Serialize;
use tiny_http::{Header, Response, StatusCode};

use crate::address::{Address, UrlOptions};
use crate::url::SiteUrls;

/// Status code for permanent redirects.
pub const MOVED_PERMANENTLY: u16 = 301;

/// Status code for temporary redirects.
pub const FOUND: u16 = 302;

/// A redirect to be sent to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectCommand {
    pub status: u16,
    pub location: String,
    /// `Cache-Control` value, set for permanent redirects only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<String>,
}

impl RedirectCommand {
    /// Temporary redirect with no caching.
    pub fn found(location: impl Into<String>) -> Self {
        Self {
            status: FOUND,
            location: location.into(),
            cache_control: None,
        }
    }

    /// Build an HTTP response carrying `Location` (and `Cache-Control`).
    pub fn into_response(self) -> Result<Response<std::io::Empty>> {
        let mut response = Response::empty(StatusCode(self.status))
            .with_header(header("Location", &self.location)?);

        if let Some(cache_control) = &self.cache_control {
            response = response.with_header(header("Cache-Control", cache_control)?);
        }
        Ok(response)
    }
}

impl SiteUrls<'_> {
    /// Permanent redirect, cacheable for `caching.redirect_max_age` seconds.
    pub fn redirect_301(&self, location: impl Into<String>) -> RedirectCommand {
        RedirectCommand {
            status: MOVED_PERMANENTLY,
            location: location.into(),
            cache_control: Some(format!(
                "public, max-age={}",
                self.config().caching.redirect_max_age
            )),
        }
    }

    /// Redirect to a page inside the admin.
    ///
    /// A 301 is cacheable; any other status becomes a plain 302.
    pub fn redirect_to_admin(&self, status: u16, admin_path: &str) -> RedirectCommand {
        let admin = self.url_for(&Address::Admin, UrlOptions::default());
        let location = self.join(&[admin.as_str(), admin_path, "/"]);

        if status == MOVED_PERMANENTLY {
            self.redirect_301(location)
        } else {
            RedirectCommand::found(location)
        }
    }
}

fn header(field: &str, value: &str) -> Result<Header> {
    if value.chars().any(char::is_control) {
        return Err(anyhow!("control character in `{field}` header value: {value:?}"));
    }
    Header::from_bytes(field.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid `{field}` header value: {value:?}"))
}
