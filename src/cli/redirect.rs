//! `redirect` command: print an admin redirect as JSON.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::url::SiteUrls;

/// Execute redirect command
pub fn run_redirect(admin_path: &str, status: u16, config: &SiteConfig) -> Result<()> {
    let command = SiteUrls::new(config).redirect_to_admin(status, admin_path);
    println!("{}", serde_json::to_string_pretty(&command)?);
    Ok(())
}
