//! Command-line interface definitions.

use chrono::{DateTime, Utc};
use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Canon URL resolution toolkit
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = "canon.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override `site.url` from the config file.
    ///
    /// When given, a missing config file is not an error:
    ///   canon --site-url "https://example.com/blog/" url home --absolute
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve an address to a URL
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        options: UrlFlags,

        #[command(subcommand)]
        address: AddressArgs,
    },

    /// Make relative links in a markup fragment absolute
    #[command(visible_alias = "a")]
    Absolutize {
        #[command(flatten)]
        args: AbsolutizeArgs,
    },

    /// Print the redirect for an admin path as JSON
    #[command(visible_alias = "r")]
    Redirect {
        /// Path inside the admin (e.g. `posts`, `#/signup/`)
        #[arg(default_value = "/")]
        admin_path: String,

        /// HTTP status (301 is cacheable, anything else becomes 302)
        #[arg(short, long, default_value_t = 301)]
        status: u16,
    },

    /// List slugs reserved by the site
    Slugs,

    /// Serve admin shortcut redirects (`/admin/`, `/login/`, ...)
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long, default_value = "127.0.0.1")]
        interface: IpAddr,

        /// Port number to listen on
        #[arg(short, long, default_value_t = 2368)]
        port: u16,
    },
}

/// Flags shared by every `url` address.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct UrlFlags {
    /// Produce a full URL instead of a site-relative path
    #[arg(short, long)]
    pub absolute: bool,

    /// Force https
    #[arg(short, long)]
    pub secure: bool,

    /// Drop the trailing slash from an absolute home URL
    #[arg(long)]
    pub no_trailing_slash: bool,

    /// Protocol-relative API URL unless it is already https
    #[arg(long)]
    pub cors: bool,
}

/// Address to resolve.
#[derive(Subcommand, Debug, Clone)]
pub enum AddressArgs {
    /// Site home
    Home,
    /// Admin entry point
    Admin,
    /// API root
    Api,
    /// RSS feed
    Rss,
    /// Sitemap stylesheet
    SitemapXsl,

    /// Explicit site-relative path
    Relative { path: String },

    /// A post by its URL path
    Post { url: String },

    /// A post from its fields, through the permalink pattern
    Permalink {
        #[command(flatten)]
        post: PermalinkArgs,
    },

    /// A tag collection
    Tag { slug: String },

    /// An author collection
    Author { slug: String },

    /// An uploaded image
    Image { path: String },

    /// A navigation link
    Nav { url: String },

    /// Any address keyword (unknown keywords resolve to the site root)
    Keyword { name: String },
}

/// Post fields for `url permalink`.
#[derive(clap::Args, Debug, Clone)]
pub struct PermalinkArgs {
    pub slug: String,

    #[arg(long, default_value = "")]
    pub id: String,

    /// Author slug
    #[arg(long, default_value = "")]
    pub author: String,

    /// Primary tag slug
    #[arg(long)]
    pub primary_tag: Option<String>,

    /// Publication time (RFC 3339); defaults to now
    #[arg(long)]
    pub published_at: Option<DateTime<Utc>>,

    /// Static page (ignores the permalink pattern)
    #[arg(long)]
    pub page: bool,
}

/// Absolutize command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct AbsolutizeArgs {
    /// Markup file, or `-` for stdin
    #[arg(default_value = "-", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Base for relative values (defaults to the absolute home URL)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub item_url: Option<String>,

    /// Base for root-relative values (defaults to the absolute home URL)
    #[arg(long = "base", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
