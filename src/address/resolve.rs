//! Address dispatch.
//!
//! Every address first becomes a path (or, for images, a final URL). A path
//! that is already qualified (scheme, `//`, `#`) is returned as-is; anything
//! else is finalized against the subdirectory or the base URL.

use super::{Address, NavItem, UrlOptions};
use crate::core::LinkKind;
use crate::debug;
use crate::url::{API_PATH, STATIC_IMAGE_URL_PREFIX, SiteUrls, is_ssl};

// ============================================================================
// Resolution types
// ============================================================================

/// Output of address dispatch, before finalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    /// Path still to be joined onto the subdirectory or base URL.
    Path(String),
    /// Final string, returned verbatim.
    Terminal(String),
}

/// Dispatch result with the flags finalization should use.
///
/// Dispatch may override the caller's flags (images drop `absolute`,
/// rewritten nav links force it, entities carry their own `secure`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: ResolvedPath,
    pub absolute: bool,
    pub secure: bool,
}

// ============================================================================
// Dispatch
// ============================================================================

impl SiteUrls<'_> {
    /// Resolve an address into a URL string.
    ///
    /// ```ignore
    /// // site at http://example.com/blog/
    /// urls.url_for(&Address::Relative("/foo/".into()), UrlOptions::default()) -> "/blog/foo/"
    /// urls.url_for(&Address::Home, UrlOptions::absolute())                   -> "http://example.com/blog/"
    /// urls.url_for(&Address::nav("mailto:me@example.com"), UrlOptions::default()) -> "mailto:me@example.com"
    /// ```
    pub fn url_for(&self, address: &Address, options: UrlOptions) -> String {
        let Resolution {
            path,
            absolute,
            secure,
        } = self.resolve(address, options);

        match path {
            ResolvedPath::Terminal(url) => url,
            ResolvedPath::Path(path) => self.create_url(&path, absolute, secure),
        }
    }

    /// Dispatch an address without finalizing it.
    pub fn resolve(&self, address: &Address, options: UrlOptions) -> Resolution {
        let mut absolute = options.absolute;
        let mut secure = options.secure.unwrap_or(false);

        let path = match address {
            Address::Relative(path) => path.clone(),

            Address::Post(Some(post)) => {
                secure = post.secure.unwrap_or(false);
                post.url.clone()
            }
            Address::Tag(Some(tag)) => {
                secure = tag.secure.unwrap_or(false);
                self.join(&["/", self.config().routes.tag.as_str(), tag.slug.as_str(), "/"])
            }
            Address::Author(Some(author)) => {
                secure = author.secure.unwrap_or(false);
                self.join(&["/", self.config().routes.author.as_str(), author.slug.as_str(), "/"])
            }
            Address::Image(Some(image)) => {
                return Resolution {
                    path: ResolvedPath::Terminal(self.image_url(image, absolute, secure)),
                    absolute: false,
                    secure,
                };
            }
            Address::Nav(Some(nav)) => {
                if nav.secure == Some(true) {
                    secure = true;
                }
                let (path, force_absolute) = self.nav_path(nav, secure);
                absolute |= force_absolute;
                path
            }
            Address::Post(None)
            | Address::Tag(None)
            | Address::Author(None)
            | Address::Image(None)
            | Address::Nav(None) => "/".to_string(),

            Address::Named(name) => name.path().to_string(),

            Address::Home if absolute => {
                let mut url = self.blog_url(secure);
                if !options.trailing_slash && url.ends_with('/') {
                    url.pop();
                }
                url
            }
            Address::Home => "/".to_string(),

            Address::Admin => {
                if absolute {
                    let mut base = self.admin_root();
                    base.push_str("ghost/");
                    base
                } else {
                    "/ghost/".to_string()
                }
            }

            Address::Api => {
                let mut base = self.admin_root();
                if options.cors && !is_ssl(&base) {
                    base = protocol_relative(&base);
                }
                if absolute {
                    format!("{}{API_PATH}", base.strip_suffix('/').unwrap_or(&base))
                } else {
                    API_PATH.to_string()
                }
            }

            Address::Unknown(name) => {
                debug!("url"; "unknown address `{}`, using site root", name);
                "/".to_string()
            }
        };

        if !path.is_empty() && LinkKind::parse(&path).is_terminal() {
            debug!("url"; "terminal url: {}", path);
            return Resolution {
                path: ResolvedPath::Terminal(path),
                absolute,
                secure,
            };
        }

        Resolution {
            path: ResolvedPath::Path(path),
            absolute,
            secure,
        }
    }

    /// Admin URL when configured, otherwise the plain base URL.
    fn admin_root(&self) -> String {
        self.admin_url().unwrap_or_else(|| self.blog_url(false))
    }

    /// Image URL. Only images under `<subdir>/content/images` can become
    /// absolute; anything else is returned untouched.
    fn image_url(&self, image: &str, absolute: bool, secure: bool) -> String {
        let local_prefix = format!("{}/{STATIC_IMAGE_URL_PREFIX}", self.subdir());
        if !absolute || !image.starts_with(&local_prefix) {
            return image.to_string();
        }

        let path = image.strip_prefix(self.subdir()).unwrap_or(image);
        let base = self.blog_url(secure);
        format!("{}{path}", base.strip_suffix('/').unwrap_or(&base))
    }

    /// Nav path, with hardcoded links to this site made relative.
    ///
    /// Returns the path and whether it must be finalized as absolute.
    /// Subdomains, `mailto:` links, and links with an explicit port are kept.
    fn nav_path(&self, nav: &NavItem, secure: bool) -> (String, bool) {
        let base = self.blog_url(secure);
        let hostname = base.split("//").nth(1).unwrap_or_default();

        if hostname.is_empty() || !nav.url.contains(hostname) {
            return (nav.url.clone(), false);
        }

        let mut pieces = nav.url.split(hostname);
        let before = pieces.next().unwrap_or_default();
        let after = pieces.next().unwrap_or_default();

        if before.contains('.') || before.contains("mailto:") || after.starts_with(':') {
            return (nav.url.clone(), false);
        }

        debug!("url"; "nav link {} points at this site", nav.url);
        (self.join(&["/", after]), true)
    }
}

/// Replace the scheme of `url` with `//`.
fn protocol_relative(url: &str) -> String {
    match url.split_once("://") {
        Some((_, rest)) => format!("//{rest}"),
        None => url.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{NamedPath, Post, Slugged};
    use crate::config::{SiteConfig, test_parse_config};

    fn config(url: &str) -> SiteConfig {
        test_parse_config(url, "")
    }

    fn with_admin(url: &str, admin: &str) -> SiteConfig {
        test_parse_config(url, &format!("admin_url = \"{admin}\""))
    }

    fn rel() -> UrlOptions {
        UrlOptions::default()
    }

    fn abs() -> UrlOptions {
        UrlOptions::absolute()
    }

    // =========================================================================
    // Relative and named paths
    // =========================================================================

    #[test]
    fn test_relative_url() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let address = Address::Relative("/about/".into());
        assert_eq!(urls.url_for(&address, rel()), "/about/");
        assert_eq!(urls.url_for(&address, abs()), "http://example.com/about/");
        assert_eq!(urls.url_for(&address, abs().secure(true)), "https://example.com/about/");
    }

    #[test]
    fn test_relative_url_with_subdir() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        let address = Address::Relative("/foo/".into());
        assert_eq!(urls.url_for(&address, rel()), "/blog/foo/");
        assert_eq!(urls.url_for(&address, abs()), "http://example.com/blog/foo/");
    }

    #[test]
    fn test_named_paths() {
        let config = config("http://example.com/blog");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::Named(NamedPath::Home), rel()), "/blog/");
        assert_eq!(urls.url_for(&Address::Named(NamedPath::Rss), rel()), "/blog/rss/");
        assert_eq!(
            urls.url_for(&Address::Named(NamedPath::Rss), abs()),
            "http://example.com/blog/rss/"
        );
        assert_eq!(
            urls.url_for(&Address::Named(NamedPath::SitemapXsl), rel()),
            "/blog/sitemap.xsl"
        );
        assert_eq!(
            urls.url_for(&Address::Named(NamedPath::Api), rel()),
            "/blog/ghost/api/v0.1/"
        );
    }

    #[test]
    fn test_unknown_address_is_root() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::keyword("nonsense"), rel()), "/blog/");
        assert_eq!(
            urls.url_for(&Address::keyword("nonsense"), abs()),
            "http://example.com/blog/"
        );
    }

    // =========================================================================
    // Home
    // =========================================================================

    #[test]
    fn test_home() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::Home, rel()), "/");
        assert_eq!(urls.url_for(&Address::Home, abs()), "http://example.com/");
        assert_eq!(
            urls.url_for(&Address::Home, abs().trailing_slash(false)),
            "http://example.com"
        );
        assert_eq!(
            urls.url_for(&Address::Home, abs().secure(true)),
            "https://example.com/"
        );
    }

    #[test]
    fn test_home_with_subdir() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::Home, rel()), "/blog/");
        assert_eq!(urls.url_for(&Address::Home, abs()), "http://example.com/blog/");
        assert_eq!(
            urls.url_for(&Address::Home, abs().trailing_slash(false)),
            "http://example.com/blog"
        );
    }

    // =========================================================================
    // Known objects
    // =========================================================================

    #[test]
    fn test_post() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        let post = Address::post("/welcome/");
        assert_eq!(urls.url_for(&post, rel()), "/blog/welcome/");
        assert_eq!(urls.url_for(&post, abs()), "http://example.com/blog/welcome/");

        let secure_post = Address::Post(Some(Post {
            url: "/welcome/".into(),
            secure: Some(true),
        }));
        assert_eq!(
            urls.url_for(&secure_post, abs()),
            "https://example.com/blog/welcome/"
        );
    }

    #[test]
    fn test_post_external_url_is_terminal() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        let post = Address::post("https://elsewhere.com/story/");
        assert_eq!(urls.url_for(&post, rel()), "https://elsewhere.com/story/");
        assert_eq!(urls.url_for(&post, abs()), "https://elsewhere.com/story/");
    }

    #[test]
    fn test_tag_and_author() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::tag("news"), rel()), "/blog/tag/news/");
        assert_eq!(
            urls.url_for(&Address::author("jo"), abs()),
            "http://example.com/blog/author/jo/"
        );

        let tag = Address::Tag(Some(Slugged {
            slug: "news".into(),
            secure: Some(true),
        }));
        assert_eq!(urls.url_for(&tag, abs()), "https://example.com/blog/tag/news/");
    }

    #[test]
    fn test_entity_secure_replaces_caller_flag() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        let options = abs().secure(true);

        assert_eq!(
            urls.url_for(&Address::post("/welcome/"), options),
            "http://example.com/blog/welcome/"
        );
        assert_eq!(
            urls.url_for(&Address::tag("news"), options),
            "http://example.com/blog/tag/news/"
        );
        assert_eq!(
            urls.url_for(&Address::author("jo"), options),
            "http://example.com/blog/author/jo/"
        );
        assert_eq!(urls.url_for(&Address::Home, options), "https://example.com/blog/");
    }

    #[test]
    fn test_tag_custom_route_keyword() {
        let config = test_parse_config("http://example.com", "[routes]\ntag = \"topic\"");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::tag("rust"), rel()), "/topic/rust/");
    }

    #[test]
    fn test_object_without_entity_is_root() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        for kind in ["post", "tag", "author", "image", "nav"] {
            assert_eq!(urls.url_for(&Address::keyword(kind), rel()), "/blog/", "{kind}");
        }
    }

    // =========================================================================
    // Images
    // =========================================================================

    #[test]
    fn test_image_relative_untouched() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let image = Address::image("/content/images/x.png");
        assert_eq!(urls.url_for(&image, rel()), "/content/images/x.png");
    }

    #[test]
    fn test_image_absolute() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let image = Address::image("/content/images/x.png");
        assert_eq!(
            urls.url_for(&image, abs()),
            "http://example.com/content/images/x.png"
        );
        assert_eq!(
            urls.url_for(&image, abs().secure(true)),
            "https://example.com/content/images/x.png"
        );
    }

    #[test]
    fn test_image_absolute_with_subdir() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        let image = Address::image("/blog/content/images/x.png");
        assert_eq!(
            urls.url_for(&image, abs()),
            "http://example.com/blog/content/images/x.png"
        );
        // Not under the subdirectory's image prefix: stays relative
        let foreign = Address::image("/content/images/x.png");
        assert_eq!(urls.url_for(&foreign, abs()), "/content/images/x.png");
    }

    #[test]
    fn test_image_external_untouched() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let image = Address::image("https://cdn.example.org/x.png");
        assert_eq!(urls.url_for(&image, abs()), "https://cdn.example.org/x.png");
    }

    // =========================================================================
    // Nav
    // =========================================================================

    #[test]
    fn test_nav_same_host_becomes_absolute() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let nav = Address::nav("http://example.com/about");
        assert_eq!(urls.url_for(&nav, rel()), "http://example.com/about");

        // Idempotent under re-resolution
        let again = Address::nav(urls.url_for(&nav, rel()));
        assert_eq!(urls.url_for(&again, rel()), "http://example.com/about");
    }

    #[test]
    fn test_nav_other_scheme_normalized() {
        let config = config("https://example.com/");
        let urls = SiteUrls::new(&config);
        let nav = Address::nav("http://example.com/about/");
        assert_eq!(urls.url_for(&nav, rel()), "https://example.com/about/");
    }

    #[test]
    fn test_nav_secure_flag() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let nav = Address::Nav(Some(NavItem {
            url: "http://example.com/about/".into(),
            secure: Some(true),
        }));
        assert_eq!(urls.url_for(&nav, rel()), "https://example.com/about/");
    }

    #[test]
    fn test_nav_subdomain_and_mailto_untouched() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let sub = Address::nav("http://blog.example.com/about/");
        assert_eq!(urls.url_for(&sub, rel()), "http://blog.example.com/about/");

        let mail = Address::nav("mailto:hello@example.com/");
        assert_eq!(urls.url_for(&mail, rel()), "mailto:hello@example.com/");
    }

    #[test]
    fn test_nav_relative_and_anchor() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::nav("/about/"), rel()), "/blog/about/");
        assert_eq!(urls.url_for(&Address::nav("#footer"), rel()), "#footer");
        assert_eq!(
            urls.url_for(&Address::nav("//cdn.example.com/x"), rel()),
            "//cdn.example.com/x"
        );
    }

    #[test]
    fn test_nav_same_host_with_subdir() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        let nav = Address::nav("http://example.com/blog/about/");
        assert_eq!(urls.url_for(&nav, rel()), "http://example.com/blog/about/");
    }

    // =========================================================================
    // Admin and API
    // =========================================================================

    #[test]
    fn test_admin() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::Admin, rel()), "/ghost/");
        assert_eq!(urls.url_for(&Address::Admin, abs()), "http://example.com/ghost/");
    }

    #[test]
    fn test_admin_with_admin_url() {
        let config = with_admin("http://example.com/blog/", "https://admin.example.com");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::Admin, rel()), "/blog/ghost/");
        assert_eq!(
            urls.url_for(&Address::Admin, abs()),
            "https://admin.example.com/blog/ghost/"
        );
    }

    #[test]
    fn test_api() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.url_for(&Address::Api, rel()), "/blog/ghost/api/v0.1/");
        assert_eq!(
            urls.url_for(&Address::Api, abs()),
            "http://example.com/blog/ghost/api/v0.1/"
        );
    }

    #[test]
    fn test_api_cors() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        assert_eq!(
            urls.url_for(&Address::Api, abs().cors(true)),
            "//example.com/ghost/api/v0.1/"
        );

        let config = with_admin("http://example.com", "https://admin.example.com");
        let urls = SiteUrls::new(&config);
        assert_eq!(
            urls.url_for(&Address::Api, abs().cors(true)),
            "https://admin.example.com/ghost/api/v0.1/"
        );
    }

    // =========================================================================
    // Terminal short-circuit
    // =========================================================================

    #[test]
    fn test_terminal_paths_bypass_subdir() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        for path in [
            "http://other.com/x",
            "//cdn.example.com/x.js",
            "#top",
            "mailto:me@example.com",
            "tel:123",
            "x-custom:thing",
        ] {
            let address = Address::Relative(path.into());
            assert_eq!(urls.url_for(&address, rel()), path);
            assert_eq!(urls.url_for(&address, abs()), path);
        }
    }

    #[test]
    fn test_resolve_exposes_flags() {
        let config = config("http://example.com");
        let urls = SiteUrls::new(&config);
        let resolution = urls.resolve(&Address::nav("http://example.com/about"), rel());
        assert_eq!(resolution.path, ResolvedPath::Path("/about".into()));
        assert!(resolution.absolute);

        let resolution = urls.resolve(&Address::image("/content/images/a.png"), abs());
        assert!(matches!(resolution.path, ResolvedPath::Terminal(_)));
    }

    #[test]
    fn test_subdir_never_doubled() {
        let config = config("http://example.com/blog/");
        let urls = SiteUrls::new(&config);
        let address = Address::Relative("/blog/foo/".into());
        assert_eq!(urls.url_for(&address, rel()), "/blog/foo/");
        assert_eq!(urls.url_for(&address, abs()), "http://example.com/blog/foo/");
    }
}
