//! `absolutize` command: rewrite relative links in a markup fragment.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::args::AbsolutizeArgs;
use crate::address::{Address, UrlOptions};
use crate::config::SiteConfig;
use crate::url::SiteUrls;
use crate::{debug, log};

/// Execute absolutize command
pub fn run_absolutize(args: &AbsolutizeArgs, config: &SiteConfig) -> Result<()> {
    let input = read_input(&args.input)?;
    let output = absolutize(&input, args, config);

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("absolutize"; "wrote {}", path.display());
        }
        None => std::io::stdout().write_all(output.as_bytes())?,
    }
    Ok(())
}

/// Rewrite `html` with the bases from `args`, falling back to the home URL.
pub fn absolutize(html: &str, args: &AbsolutizeArgs, config: &SiteConfig) -> String {
    let urls = SiteUrls::new(config);
    let home = urls.url_for(&Address::Home, UrlOptions::absolute());

    let site_url = args.base_url.as_deref().unwrap_or(&home);
    let item_url = args.item_url.as_deref().unwrap_or(site_url);
    debug!("absolutize"; "site {} item {}", site_url, item_url);

    urls.make_absolute_urls(html, site_url, item_url)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markup from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(item_url: Option<&str>) -> AbsolutizeArgs {
        AbsolutizeArgs {
            input: PathBuf::from("-"),
            item_url: item_url.map(str::to_string),
            base_url: None,
            output: None,
        }
    }

    #[test]
    fn test_defaults_to_home_url() {
        let config = test_parse_config("http://example.com/blog/", "");
        let out = absolutize(r#"<a href="/x/">x</a><img src="a.png">"#, &args(None), &config);
        assert_eq!(
            out,
            r#"<a href="http://example.com/blog/x/">x</a><img src="http://example.com/blog/a.png">"#
        );
    }

    #[test]
    fn test_item_url_for_relative_values() {
        let config = test_parse_config("http://example.com/", "");
        let out = absolutize(
            r#"<img src="a.png">"#,
            &args(Some("http://example.com/post/")),
            &config,
        );
        assert_eq!(out, r#"<img src="http://example.com/post/a.png">"#);
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.html");
        let output = dir.path().join("out.html");
        fs::write(&input, r#"<a href="/about/">a</a>"#).unwrap();

        let config = test_parse_config("http://example.com", "");
        let args = AbsolutizeArgs {
            input,
            item_url: None,
            base_url: None,
            output: Some(output.clone()),
        };
        run_absolutize(&args, &config).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            r#"<a href="http://example.com/about/">a</a>"#
        );
    }

    #[test]
    fn test_missing_input_file() {
        let config = test_parse_config("http://example.com", "");
        let mut args = args(None);
        args.input = PathBuf::from("/definitely/not/here.html");
        assert!(run_absolutize(&args, &config).is_err());
    }
}
