//! URL canonicalization core.
//!
//! | Module     | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `subdir`   | Subdirectory derivation, dedup, admin base URL    |
//! | `join`     | Segment joining with slash normalization          |
//! | `finalize` | Base URL and final URL assembly                   |
//!
//! Address dispatch lives in [`crate::address`], built on [`SiteUrls`].

mod finalize;
mod join;
mod subdir;

pub use join::url_join;
pub use subdir::{dedupe_subdir, derive_subdir};

use crate::config::SiteConfig;

/// Versioned API mount point, relative to the site or admin root.
pub const API_PATH: &str = "/ghost/api/v0.1/";

/// Static prefix every uploaded image is served under.
///
/// Images may live anywhere on disk, but they are always requested as
/// `<subdir>/content/images/...`.
pub const STATIC_IMAGE_URL_PREFIX: &str = "content/images";

/// URL builder for one site.
///
/// Borrows the immutable [`SiteConfig`] and caches the derived subdirectory.
/// Cheap to create and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SiteUrls<'a> {
    config: &'a SiteConfig,
    subdir: String,
}

impl<'a> SiteUrls<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            subdir: derive_subdir(config.site.url()),
        }
    }

    #[inline]
    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }
}

/// Check whether a URL uses `https`.
pub fn is_ssl(url: &str) -> bool {
    url::Url::parse(url).is_ok_and(|u| u.scheme() == "https")
}
