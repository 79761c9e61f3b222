//! `url` command: resolve one address and print it.

use anyhow::Result;

use super::args::{AddressArgs, UrlFlags};
use crate::address::{Address, NamedPath, PostRecord, UrlOptions};
use crate::config::SiteConfig;
use crate::url::SiteUrls;

/// Execute url command
pub fn run_url(address: &AddressArgs, flags: &UrlFlags, config: &SiteConfig) -> Result<()> {
    let urls = SiteUrls::new(config);
    println!("{}", resolve(&urls, address, flags));
    Ok(())
}

/// Resolve CLI arguments to a URL string.
pub fn resolve(urls: &SiteUrls, address: &AddressArgs, flags: &UrlFlags) -> String {
    let address = match address {
        AddressArgs::Home => Address::Home,
        AddressArgs::Admin => Address::Admin,
        AddressArgs::Api => Address::Api,
        AddressArgs::Rss => Address::Named(NamedPath::Rss),
        AddressArgs::SitemapXsl => Address::Named(NamedPath::SitemapXsl),
        AddressArgs::Relative { path } => Address::Relative(path.clone()),
        AddressArgs::Post { url } => Address::post(url.as_str()),
        AddressArgs::Permalink { post } => urls.post_address(&PostRecord {
            id: post.id.clone(),
            slug: post.slug.clone(),
            page: post.page,
            published_at: post.published_at,
            author: post.author.clone(),
            primary_tag: post.primary_tag.clone(),
        }),
        AddressArgs::Tag { slug } => Address::tag(slug.as_str()),
        AddressArgs::Author { slug } => Address::author(slug.as_str()),
        AddressArgs::Image { path } => Address::image(path.as_str()),
        AddressArgs::Nav { url } => Address::nav(url.as_str()),
        AddressArgs::Keyword { name } => Address::keyword(name),
    };

    urls.url_for(&address, options_from(flags))
}

fn options_from(flags: &UrlFlags) -> UrlOptions {
    UrlOptions {
        absolute: flags.absolute,
        secure: flags.secure.then_some(true),
        trailing_slash: !flags.no_trailing_slash,
        cors: flags.cors,
    }
}
