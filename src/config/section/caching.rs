//! `[caching]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [caching]
//! redirect_max_age = 31536000   # Cache-Control max-age for 301 redirects (seconds)
//! ```

use serde::{Deserialize, Serialize};

/// Response caching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CachingConfig {
    /// `max-age` sent with permanent redirects, in seconds.
    pub redirect_max_age: u64,
}

impl Default for CachingConfig {
    fn default() -> Self {
        Self {
            redirect_max_age: 31_536_000,
        }
    }
}
