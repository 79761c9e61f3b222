//! Addresses - logical descriptions of what a URL should point at.
//!
//! An [`Address`] says *what* to link to; [`SiteUrls::url_for`] turns it into
//! a URL string for this site.
//!
//! # Relationship with [`LinkKind`](crate::core::LinkKind)
//!
//! - [`LinkKind`](crate::core::LinkKind): **Syntactic** classification of a
//!   produced string (decides whether it is already terminal)
//! - [`SiteUrls::url_for`]: **Semantic** resolution (needs site context)
//!
//! # Module Structure
//!
//! - [`resolve`]: address dispatch and the terminal-URL short-circuit
//! - [`permalink`]: post URL paths from the permalink pattern
//!
//! # Usage
//!
//! ```ignore
//! let urls = SiteUrls::new(&config);
//!
//! urls.url_for(&Address::Home, UrlOptions::absolute());          // http://example.com/blog/
//! urls.url_for(&Address::tag("news"), UrlOptions::default());    // /blog/tag/news/
//! urls.url_for(&Address::Relative("/about/".into()), UrlOptions::default());
//! ```
//!
//! [`SiteUrls::url_for`]: crate::url::SiteUrls::url_for

pub mod permalink;
pub mod resolve;

use serde::{Deserialize, Serialize};

pub use permalink::PostRecord;
pub use resolve::{Resolution, ResolvedPath};

// ============================================================================
// Address
// ============================================================================

/// What a URL should point at.
///
/// The known-object variants carry `Option` data: `None` means the kind was
/// requested without its entity, which resolves to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// Explicit site-relative path, used verbatim.
    Relative(String),

    /// A post with its precomputed URL.
    Post(Option<Post>),
    /// A tag collection (`/<routes.tag>/<slug>/`).
    Tag(Option<Slugged>),
    /// An author collection (`/<routes.author>/<slug>/`).
    Author(Option<Slugged>),
    /// An uploaded image asset path.
    Image(Option<String>),
    /// A navigation entry with a raw URL.
    Nav(Option<NavItem>),

    /// A fixed named path.
    Named(NamedPath),

    /// Site home. Absolute requests yield the full base URL.
    Home,
    /// Admin entry point.
    Admin,
    /// API root.
    Api,

    /// Unrecognized address name; resolves to the site root.
    Unknown(String),
}

impl Address {
    /// Map a keyword (as used by templates) to an address.
    ///
    /// Object kinds map to their variant without data.
    pub fn keyword(name: &str) -> Self {
        match name {
            "home" => Self::Home,
            "admin" => Self::Admin,
            "api" => Self::Api,
            "rss" => Self::Named(NamedPath::Rss),
            "sitemap_xsl" => Self::Named(NamedPath::SitemapXsl),
            "post" => Self::Post(None),
            "tag" => Self::Tag(None),
            "author" => Self::Author(None),
            "image" => Self::Image(None),
            "nav" => Self::Nav(None),
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::Post(Some(Post::new(url)))
    }

    pub fn tag(slug: impl Into<String>) -> Self {
        Self::Tag(Some(Slugged::new(slug)))
    }

    pub fn author(slug: impl Into<String>) -> Self {
        Self::Author(Some(Slugged::new(slug)))
    }

    pub fn image(path: impl Into<String>) -> Self {
        Self::Image(Some(path.into()))
    }

    pub fn nav(url: impl Into<String>) -> Self {
        Self::Nav(Some(NavItem::new(url)))
    }
}

/// Fixed logical names mapped to constant paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedPath {
    Home,
    Rss,
    Api,
    SitemapXsl,
}

impl NamedPath {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Rss => "/rss/",
            Self::Api => crate::url::API_PATH,
            Self::SitemapXsl => "/sitemap.xsl",
        }
    }
}

// ============================================================================
// Entity data
// ============================================================================

/// Post data needed to link to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Precomputed URL path (see [`permalink`]).
    pub url: String,
    pub secure: Option<bool>,
}

impl Post {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secure: None,
        }
    }
}

/// Tag or author data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slugged {
    pub slug: String,
    pub secure: Option<bool>,
}

impl Slugged {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            secure: None,
        }
    }
}

/// Navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub url: String,
    /// Only `Some(true)` has an effect: it forces https.
    pub secure: Option<bool>,
}

impl NavItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secure: None,
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Per-call URL options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlOptions {
    /// Produce a full URL instead of a site-relative path.
    pub absolute: bool,
    /// Force https (`None` keeps the configured scheme).
    pub secure: Option<bool>,
    /// Keep the trailing slash on an absolute home URL.
    pub trailing_slash: bool,
    /// Make the API URL protocol-relative unless it is already https.
    pub cors: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            absolute: false,
            secure: None,
            trailing_slash: true,
            cors: false,
        }
    }
}

impl UrlOptions {
    /// Options for an absolute URL.
    pub fn absolute() -> Self {
        Self {
            absolute: true,
            ..Self::default()
        }
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = trailing_slash;
        self
    }

    pub fn cors(mut self, cors: bool) -> Self {
        self.cors = cors;
        self
    }
}
