//! `[slugs]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [slugs]
//! protected = ["ghost", "rss", "amp"]
//! ```

use serde::{Deserialize, Serialize};

/// Reserved slugs that content may not claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugsConfig {
    pub protected: Vec<String>,
}

impl Default for SlugsConfig {
    fn default() -> Self {
        Self {
            protected: vec!["ghost".into(), "rss".into(), "amp".into()],
        }
    }
}
