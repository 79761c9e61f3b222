//! Configuration section definitions.
//!
//! Each module corresponds to a section in `canon.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `site`    | `[site]`     | Base URL, admin URL, permalinks, zone   |
//! | `routes`  | `[routes]`   | Route keyword segments                   |
//! | `slugs`   | `[slugs]`    | Protected slugs                          |
//! | `caching` | `[caching]`  | Redirect cache lifetime                  |

mod caching;
mod routes;
pub mod site;
mod slugs;

pub use caching::CachingConfig;
pub use routes::RoutesConfig;
pub use site::{SiteSectionConfig, SiteTimezone};
pub use slugs::SlugsConfig;
