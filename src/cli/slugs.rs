//! `slugs` command: list reserved slugs.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::url::SiteUrls;

/// Execute slugs command
pub fn run_slugs(config: &SiteConfig) -> Result<()> {
    for slug in SiteUrls::new(config).protected_slugs() {
        println!("{slug}");
    }
    Ok(())
}
