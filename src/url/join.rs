//! Path and URL joining.

use std::sync::LazyLock;

use regex::Regex;

use super::SiteUrls;
use super::subdir::dedupe_subdir;

/// Runs of two or more slashes not preceded by `:` (keeps `scheme://`).
static RE_SLASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|[^:])//+").unwrap());

/// Join URL or path segments into one normalized string.
///
/// - a leading empty segment is dropped
/// - a leading schemeless `//` on the first segment survives
/// - runs of slashes collapse to one, except right after a `:`
/// - a repeated subdirectory is merged (see [`dedupe_subdir`])
///
/// # Examples
/// ```ignore
/// url_join(&["/blog", "/welcome/"], "/blog")         -> "/blog/welcome/"
/// url_join(&["http://example.com/", "/x/"], "")      -> "http://example.com/x/"
/// url_join(&["//cdn.example.com/", "/a.png"], "")    -> "//cdn.example.com/a.png"
/// ```
pub fn url_join<S: AsRef<str>>(parts: &[S], subdir: &str) -> String {
    let mut parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();

    if parts.first().is_some_and(|first| first.is_empty()) {
        parts.remove(0);
    }

    let Some(first) = parts.first() else {
        return String::new();
    };
    let schemeless = first.starts_with("//");

    let joined = parts.join("/");
    let mut url = RE_SLASH_RUN.replace_all(&joined, "$1/").into_owned();

    if schemeless && url.starts_with('/') {
        url.insert(0, '/');
    }

    dedupe_subdir(&url, subdir)
}

impl SiteUrls<'_> {
    /// [`url_join`] with this site's subdirectory.
    #[inline]
    pub fn join<S: AsRef<str>>(&self, parts: &[S]) -> String {
        url_join(parts, &self.subdir)
    }
}
