//! `[routes]` section configuration.
//!
//! Route keywords are the fixed URL segments the site uses for collections
//! and request markers.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! tag = "tag"                     # /tag/<slug>/
//! author = "author"               # /author/<slug>/
//! primary_tag_fallback = "all"    # :primary_tag when a post has none
//! private = "private"
//! subscribe = "subscribe"
//! amp = "amp"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Route keyword strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub tag: String,
    pub author: String,
    pub primary_tag_fallback: String,
    pub private: String,
    pub subscribe: String,
    pub amp: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            tag: "tag".into(),
            author: "author".into(),
            primary_tag_fallback: "all".into(),
            private: "private".into(),
            subscribe: "subscribe".into(),
            amp: "amp".into(),
        }
    }
}

impl RoutesConfig {
    pub const TAG: FieldPath = FieldPath::new("routes.tag");
    pub const AUTHOR: FieldPath = FieldPath::new("routes.author");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [(Self::TAG, &self.tag), (Self::AUTHOR, &self.author)] {
            if value.is_empty() || value.contains('/') {
                diag.error_with_hint(
                    field,
                    format!("invalid route keyword `{value}`"),
                    "route keywords are single, non-empty path segments",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_default() {
        let routes = RoutesConfig::default();
        assert_eq!(routes.tag, "tag");
        assert_eq!(routes.author, "author");
        assert_eq!(routes.primary_tag_fallback, "all");
    }

    #[test]
    fn test_routes_validate_segment() {
        let routes = RoutesConfig {
            tag: "tags/all".into(),
            author: String::new(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        routes.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
