//! Final URL assembly from a resolved path.

use super::SiteUrls;

impl SiteUrls<'_> {
    /// Base URL of the site, always with a trailing `/`.
    ///
    /// With `secure`, an `http://` base is served as `https://` (e.g. a proxy
    /// terminating TLS in front of a site configured for plain http).
    pub fn blog_url(&self, secure: bool) -> String {
        let url = self.config.site.url();
        let mut blog_url = if secure {
            url.replacen("http://", "https://", 1)
        } else {
            url.to_string()
        };

        if !blog_url.ends_with('/') {
            blog_url.push('/');
        }
        blog_url
    }

    /// Build a URL from a path, honouring the subdirectory.
    ///
    /// Relative URLs are joined onto the subdirectory, absolute ones onto
    /// [`Self::blog_url`]. An empty path means `/`.
    ///
    /// ```ignore
    /// // site at http://example.com/blog/
    /// urls.create_url("/welcome/", false, false) -> "/blog/welcome/"
    /// urls.create_url("/", true, true)           -> "https://example.com/blog/"
    /// ```
    pub fn create_url(&self, path: &str, absolute: bool, secure: bool) -> String {
        let path = if path.is_empty() { "/" } else { path };

        if absolute {
            let base = self.blog_url(secure);
            self.join(&[base.as_str(), path])
        } else {
            self.join(&[self.subdir(), path])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_blog_url() {
        let config = test_parse_config("http://example.com", "");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.blog_url(false), "http://example.com/");
        assert_eq!(urls.blog_url(true), "https://example.com/");

        let config = test_parse_config("https://example.com/blog/", "");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.blog_url(false), "https://example.com/blog/");
        assert_eq!(urls.blog_url(true), "https://example.com/blog/");
    }

    #[test]
    fn test_create_url_relative() {
        let config = test_parse_config("http://example.com", "");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.create_url("/welcome/", false, false), "/welcome/");
        assert_eq!(urls.create_url("", false, false), "/");

        let config = test_parse_config("http://example.com/blog/", "");
        let urls = SiteUrls::new(&config);
        assert_eq!(urls.create_url("/welcome/", false, false), "/blog/welcome/");
        assert_eq!(urls.create_url("/", false, false), "/blog/");
        assert_eq!(urls.create_url("/blog/welcome/", false, false), "/blog/welcome/");
    }

    #[test]
    fn test_create_url_absolute() {
        let config = test_parse_config("http://example.com/blog", "");
        let urls = SiteUrls::new(&config);
        assert_eq!(
            urls.create_url("/welcome/", true, false),
            "http://example.com/blog/welcome/"
        );
        assert_eq!(
            urls.create_url("/welcome/", true, true),
            "https://example.com/blog/welcome/"
        );
        assert_eq!(urls.create_url("", true, false), "http://example.com/blog/");
    }
}
