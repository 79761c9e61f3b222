//! Canon - URL resolution and canonicalization for a content site.
//!
//! Everything hangs off [`url::SiteUrls`], built from a loaded
//! [`config::SiteConfig`]:
//!
//! ```ignore
//! let config = SiteConfig::from_path(Path::new("canon.toml"))?;
//! let urls = SiteUrls::new(&config);
//!
//! urls.url_for(&Address::tag("news"), UrlOptions::absolute());
//! urls.make_absolute_urls(html, &home, &post_url);
//! urls.redirect_to_admin(301, "posts");
//! ```

pub mod address;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod redirect;
pub mod transform;
pub mod url;
