//! Subdirectory handling.
//!
//! A site deployed at `https://example.com/blog/` lives under the `/blog`
//! subdirectory. Every relative URL the site emits must carry it exactly once.

use super::SiteUrls;
use crate::config::url_path;

/// Derive the subdirectory from a base URL.
///
/// `https://example.com/blog/` -> `/blog`, `https://example.com/` -> ``.
/// An unparseable URL has no subdirectory.
pub fn derive_subdir(base_url: &str) -> String {
    let Some(path) = url_path(base_url) else {
        return String::new();
    };

    let path = if path == "/" {
        path.as_str()
    } else {
        path.strip_suffix('/').unwrap_or(&path)
    };

    if path == "/" { String::new() } else { path.to_string() }
}

/// Merge the first `sub/sub/` occurrence in `url` into `sub/`.
///
/// Textual, not segment-aware: a slug equal to the subdirectory name directly
/// after the real subdirectory (`/blog/blog/`) is merged as well.
pub fn dedupe_subdir(url: &str, subdir: &str) -> String {
    if subdir.is_empty() {
        return url.to_string();
    }

    let sub = strip_first_slash_run(subdir);
    let doubled = format!("{sub}/{sub}/");
    url.replacen(&doubled, &format!("{sub}/"), 1)
}

/// Strip one leading slash, or else the trailing slashes.
fn strip_first_slash_run(subdir: &str) -> &str {
    match subdir.strip_prefix('/') {
        Some(rest) => rest,
        None => subdir.trim_end_matches('/'),
    }
}

impl SiteUrls<'_> {
    /// The deployment subdirectory, `""` when served from the root.
    #[inline]
    pub fn subdir(&self) -> &str {
        &self.subdir
    }

    /// Run the subdirectory dedup pass over `url`.
    #[inline]
    pub fn dedupe(&self, url: &str) -> String {
        dedupe_subdir(url, &self.subdir)
    }

    /// Admin base URL including the subdirectory, always ending with `/`.
    ///
    /// `None` when no separate admin URL is configured.
    pub fn admin_url(&self) -> Option<String> {
        let admin = self.config.site.admin_url.as_deref().filter(|s| !s.is_empty())?;

        let mut admin = admin.to_string();
        if !admin.ends_with('/') {
            admin.push('/');
        }

        let joined = self.join(&[admin.as_str(), self.subdir.as_str(), "/"]);
        Some(self.dedupe(&joined))
    }

    /// Configured protected slugs plus the subdirectory's last segment.
    pub fn protected_slugs(&self) -> Vec<String> {
        let mut slugs = self.config.slugs.protected.clone();
        if let Some(last) = self.subdir.rsplit('/').next()
            && !self.subdir.is_empty()
        {
            slugs.push(last.to_string());
        }
        slugs
    }
}
