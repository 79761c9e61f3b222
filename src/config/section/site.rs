//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com/blog/"        # Base URL, path used as subdirectory
//! admin_url = "https://admin.example.com"  # Optional separate admin host
//! permalinks = "/:year/:month/:slug/"      # Post permalink pattern
//! timezone = "Europe/Berlin"               # Zone used for permalink dates
//! ```

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site addressing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Base URL of the site. Its path component is the deployment subdirectory.
    pub url: Option<String>,

    /// Separate admin base URL (e.g., "https://admin.example.com").
    pub admin_url: Option<String>,

    /// Permalink pattern for posts. Pages always use `/:slug/`.
    pub permalinks: String,

    /// Timezone for permalink dates: an IANA name (`Europe/Berlin`) or a
    /// fixed offset (`+HH:MM`, `-HHMM`, `UTC`).
    pub timezone: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            admin_url: None,
            permalinks: "/:slug/".into(),
            timezone: "Etc/UTC".into(),
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const ADMIN_URL: FieldPath = FieldPath::new("site.admin_url");
    pub const PERMALINKS: FieldPath = FieldPath::new("site.permalinks");
    pub const TIMEZONE: FieldPath = FieldPath::new("site.timezone");

    /// Configured base URL, or empty if unset.
    #[inline]
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    /// Parsed timezone, falling back to UTC when invalid.
    pub fn timezone(&self) -> SiteTimezone {
        SiteTimezone::parse(&self.timezone).unwrap_or(SiteTimezone::Fixed(utc()))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.url.as_deref() {
            None | Some("") => diag.error_with_hint(
                Self::URL,
                "site url is required",
                "set `url = \"https://example.com/\"` under [site]",
            ),
            Some(url) => validate_http_url(url, Self::URL, diag),
        }

        if let Some(admin) = self.admin_url.as_deref()
            && !admin.is_empty()
        {
            validate_http_url(admin, Self::ADMIN_URL, diag);
        }

        if !self.permalinks.starts_with('/') || !self.permalinks.ends_with('/') {
            diag.error_with_hint(
                Self::PERMALINKS,
                format!("invalid permalink pattern `{}`", self.permalinks),
                "patterns must start and end with `/`, e.g. \"/:slug/\"",
            );
        }

        if SiteTimezone::parse(&self.timezone).is_none() {
            diag.error_with_hint(
                Self::TIMEZONE,
                format!("invalid timezone `{}`", self.timezone),
                "use a zone name like \"Europe/Berlin\" or an offset like \"+02:00\"",
            );
        }
    }
}

fn validate_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        Ok(parsed) => diag.error(
            field,
            format!("unsupported scheme `{}` in `{value}`", parsed.scheme()),
        ),
        Err(e) => diag.error(field, format!("invalid url `{value}`: {e}")),
    }
}

/// Timezone used to render permalink dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteTimezone {
    /// IANA zone, with daylight saving.
    Named(Tz),
    /// Fixed UTC offset.
    Fixed(FixedOffset),
}

impl SiteTimezone {
    /// Parse a fixed offset or an IANA zone name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(offset) = parse_offset(s) {
            return Some(Self::Fixed(offset));
        }
        s.parse::<Tz>().ok().map(Self::Named)
    }

    /// Wall-clock time of `at` in this zone.
    pub fn local(&self, at: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Named(tz) => at.with_timezone(tz).naive_local(),
            Self::Fixed(offset) => at.with_timezone(offset).naive_local(),
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Parse `UTC`, `Z`, `+HH:MM`, `-HH:MM`, `+HHMM` or `+H` into a fixed offset.
pub fn parse_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("utc") || s == "Z" {
        return Some(utc());
    }

    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m),
        Some(_) => return None,
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    if !is_offset_component(hours) || !is_offset_component(minutes) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// One or two ASCII digits, no sign.
fn is_offset_component(s: &str) -> bool {
    (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
