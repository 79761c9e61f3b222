//! Post URL paths.
//!
//! Posts are linked through the `site.permalinks` pattern, pages always live
//! at `/:slug/`. Dates are rendered in the configured timezone.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::Address;
use crate::url::SiteUrls;

/// Matches `:name` tokens in a permalink pattern.
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([a-z_]+)").unwrap());

/// Pattern used for static pages regardless of configuration.
const PAGE_PERMALINK: &str = "/:slug/";

/// Post fields a permalink can reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub slug: String,
    /// Static page (ignores the permalink pattern).
    #[serde(default)]
    pub page: bool,
    /// Unpublished posts use the current time.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Author slug.
    pub author: String,
    /// Primary tag slug.
    #[serde(default)]
    pub primary_tag: Option<String>,
}

impl SiteUrls<'_> {
    /// Compute the URL path of a post from the permalink pattern.
    ///
    /// ```ignore
    /// // permalinks = "/:year/:month/:slug/"
    /// urls.url_path_for_post(&post) -> "/2024/03/hello-world/"
    /// ```
    pub fn url_path_for_post(&self, post: &PostRecord) -> String {
        self.url_path_for_post_at(post, Utc::now())
    }

    /// Same as [`Self::url_path_for_post`] with an explicit "now".
    pub fn url_path_for_post_at(&self, post: &PostRecord, now: DateTime<Utc>) -> String {
        let config = self.config();
        let pattern = if post.page {
            PAGE_PERMALINK
        } else {
            config.site.permalinks.as_str()
        };

        let published = config
            .site
            .timezone()
            .local(post.published_at.unwrap_or(now));

        RE_TOKEN
            .replace_all(pattern, |caps: &Captures| match &caps[1] {
                "year" => published.format("%Y").to_string(),
                "month" => published.format("%m").to_string(),
                "day" => published.format("%d").to_string(),
                "author" => post.author.clone(),
                "primary_tag" => post
                    .primary_tag
                    .clone()
                    .unwrap_or_else(|| config.routes.primary_tag_fallback.clone()),
                "slug" => post.slug.clone(),
                "id" => post.id.clone(),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Address of a post, with its path computed from the permalink pattern.
    pub fn post_address(&self, post: &PostRecord) -> Address {
        Address::post(self.url_path_for_post(post))
    }
}
