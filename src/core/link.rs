//! Link classification utilities.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Link with a URL scheme (https://, mailto:, tel:, etc.) or a `://` anywhere
    External(&'a str),
    /// Protocol-relative link (//cdn.example.com/x)
    ProtocolRelative(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /posts/hello).
    SiteRoot(&'a str),
    /// Document-relative path (image.png, ../other).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if link.contains("://") || has_scheme(link) {
            Self::External(link)
        } else if link.starts_with("//") {
            Self::ProtocolRelative(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Already qualified enough that it must never be joined onto a base.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::External(_) | Self::ProtocolRelative(_) | Self::Fragment(_)
        )
    }
}

/// Check if a link starts with a scheme (`[A-Za-z0-9-]+:`).
///
/// # Examples
/// ```ignore
/// assert!(has_scheme("https://example.com"));
/// assert!(has_scheme("mailto:user@example.com"));
/// assert!(!has_scheme("/about"));
/// assert!(!has_scheme("./file.txt"));
/// ```
#[inline]
pub fn has_scheme(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://example.com"),
            LinkKind::External("https://example.com")
        ));
        assert!(matches!(
            LinkKind::parse("mailto:user@example.com"),
            LinkKind::External("mailto:user@example.com")
        ));
        assert!(matches!(
            LinkKind::parse("tel:+1234567890"),
            LinkKind::External(_)
        ));
        // `://` anywhere counts
        assert!(matches!(
            LinkKind::parse("/redirect?to=http://x.com"),
            LinkKind::External(_)
        ));
    }

    #[test]
    fn test_parse_protocol_relative() {
        assert!(matches!(
            LinkKind::parse("//cdn.example.com/a.js"),
            LinkKind::ProtocolRelative("//cdn.example.com/a.js")
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(
            LinkKind::parse("#section"),
            LinkKind::Fragment("section")
        ));
        assert!(matches!(LinkKind::parse("#"), LinkKind::Fragment("")));
    }

    #[test]
    fn test_parse_site_root_and_relative() {
        assert!(matches!(
            LinkKind::parse("/about#team"),
            LinkKind::SiteRoot("/about#team")
        ));
        assert!(matches!(
            LinkKind::parse("../other"),
            LinkKind::Relative("../other")
        ));
        assert!(matches!(
            LinkKind::parse("image.png"),
            LinkKind::Relative("image.png")
        ));
    }

    #[test]
    fn test_scheme_charset() {
        assert!(!has_scheme("web+app:thing"));
        assert!(has_scheme("x-custom:thing"));
        assert!(has_scheme("c:thing"));
        assert!(!has_scheme(":thing"));
        assert!(!has_scheme("a.b:thing"));
    }

    #[test]
    fn test_is_terminal() {
        assert!(LinkKind::parse("http://example.com").is_terminal());
        assert!(LinkKind::parse("//example.com").is_terminal());
        assert!(LinkKind::parse("#top").is_terminal());
        assert!(LinkKind::parse("ftp:x").is_terminal());
        assert!(!LinkKind::parse("/about/").is_terminal());
        assert!(!LinkKind::parse("about/").is_terminal());
    }
}
