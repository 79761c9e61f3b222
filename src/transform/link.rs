//! Relative link absolutizer.
//!
//! Rewrites `href` and `src` attribute values in a markup fragment:
//!
//! | Value | Example | Result |
//! |-------|---------|--------|
//! | Has a scheme | `https://...`, `mailto:...` | Preserved |
//! | Protocol-relative | `//cdn.example.com/x` | Preserved |
//! | Fragment | `#section` | Preserved |
//! | Unparseable | `http://[bad` | Preserved |
//! | Site root | `/about/` | Joined onto the site URL |
//! | Relative | `img.png` | Joined onto the item URL |
//! | Empty or missing | `href=""`, `href` | The item URL |
//!
//! Attribute names match case-insensitively and values may be quoted or
//! not. Text inside `<script>`, `<style>` and comments is never touched.
//!
//! Only the attribute values change. The fragment is never re-serialized, so
//! quoting, entities and attribute order come through byte-for-byte.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::LinkKind;
use crate::debug;
use crate::url::SiteUrls;

/// Attributes holding a URL.
const URL_ATTRS: [&str; 2] = ["href", "src"];

/// Start of a comment, or an opening `<script>`/`<style>` tag.
static RE_HIDDEN_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--|<(script|style)\b[^>]*>").unwrap());

static RE_SCRIPT_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</script").unwrap());

static RE_STYLE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</style").unwrap());

/// A start tag; group 1 is its attribute list.
static RE_START_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<[A-Za-z][^\s/>]*((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*/?>"#,
    )
    .unwrap()
});

/// One attribute of an attribute list; group 1 is its name.
static RE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#).unwrap()
});

/// The `=value` part following an attribute name.
static RE_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))?"#).unwrap()
});

/// Absolutizes relative links against a site URL and an item URL.
pub struct LinkRewriter<'a> {
    urls: &'a SiteUrls<'a>,
    site_url: &'a str,
    item_url: &'a str,
}

/// A replacement of `html[start..end]`. Insertions have `start == end`.
#[derive(Debug)]
struct Edit {
    start: usize,
    end: usize,
    value: String,
}

/// Where an attribute's value sits in the source.
#[derive(Debug, PartialEq, Eq)]
enum AttrValue {
    /// Bare attribute name, no `=`.
    Missing,
    /// Value bytes, without quotes.
    At(Range<usize>),
    /// `=` with nothing usable after it.
    Malformed,
}

impl<'a> LinkRewriter<'a> {
    pub fn new(urls: &'a SiteUrls<'a>, site_url: &'a str, item_url: &'a str) -> Self {
        Self {
            urls,
            site_url,
            item_url,
        }
    }

    /// Rewrite every relative `href`/`src` in `html`.
    ///
    /// Attributes come from the `tl` tree and from a scan of the start tags,
    /// so values the parser cannot represent (unquoted ones) are still found.
    pub fn rewrite(&self, html: &str) -> String {
        let hidden = hidden_ranges(html);
        let mut edits = Vec::new();

        match tl::parse(html, tl::ParserOptions::default()) {
            Ok(dom) => {
                for node in dom.nodes() {
                    let tl::Node::Tag(tag) = node else {
                        continue;
                    };
                    for (name, _) in tag.attributes().iter() {
                        if !is_url_attr(&name) {
                            continue;
                        }
                        let Some(start) = span_in(html, name.as_bytes()) else {
                            continue;
                        };
                        edits.extend(self.attribute_edit(html, start..start + name.len()));
                    }
                }
            }
            Err(_) => debug!("rewrite"; "markup not parsed as a tree, scanning tags only"),
        }

        for segment in visible_segments(html, &hidden) {
            let text = &html[segment.clone()];
            for tag in RE_START_TAG.captures_iter(text) {
                let Some(list) = tag.get(1) else {
                    continue;
                };
                for attr in RE_ATTR.captures_iter(list.as_str()) {
                    let Some(name) = attr.get(1) else {
                        continue;
                    };
                    if !is_url_attr(name.as_str()) {
                        continue;
                    }
                    let start = segment.start + list.start() + name.start();
                    edits.extend(self.attribute_edit(html, start..start + name.len()));
                }
            }
        }

        edits.retain(|edit| !hidden.iter().any(|r| r.contains(&edit.start)));
        apply_edits(html, edits)
    }

    /// Edit for the attribute whose name occupies `name` in `html`.
    fn attribute_edit(&self, html: &str, name: Range<usize>) -> Option<Edit> {
        match attr_value(html, name.end) {
            AttrValue::At(span) => {
                let value = self.absolutize(&html[span.clone()])?;
                Some(Edit {
                    start: span.start,
                    end: span.end,
                    value,
                })
            }
            AttrValue::Missing => {
                let value = self.absolutize("")?;
                Some(Edit {
                    start: name.end,
                    end: name.end,
                    value: format!("=\"{value}\""),
                })
            }
            AttrValue::Malformed => None,
        }
    }

    /// Absolute form of a single attribute value, or `None` to keep it.
    ///
    /// An empty value resolves to the item URL.
    pub fn absolutize(&self, value: &str) -> Option<String> {
        if LinkKind::parse(value).is_terminal() {
            return None;
        }

        match url::Url::parse(value) {
            Err(url::ParseError::RelativeUrlWithoutBase) => {}
            // Not a URL we can reason about
            _ => return None,
        }

        let base = if value.starts_with('/') {
            self.site_url
        } else {
            self.item_url
        };
        Some(self.urls.join(&[base, value]))
    }
}

impl SiteUrls<'_> {
    /// Make every relative link in `html` absolute.
    ///
    /// Root-relative values are joined onto `site_url`, other relative
    /// values onto `item_url`.
    pub fn make_absolute_urls(&self, html: &str, site_url: &str, item_url: &str) -> String {
        LinkRewriter::new(self, site_url, item_url).rewrite(html)
    }
}

#[inline]
fn is_url_attr(name: &str) -> bool {
    URL_ATTRS.iter().any(|attr| name.eq_ignore_ascii_case(attr))
}

/// Locate the value of the attribute whose name ends at `name_end`.
fn attr_value(html: &str, name_end: usize) -> AttrValue {
    let Some(caps) = RE_VALUE.captures(&html[name_end..]) else {
        return AttrValue::Missing;
    };
    match caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) {
        Some(m) => AttrValue::At(name_end + m.start()..name_end + m.end()),
        None => AttrValue::Malformed,
    }
}

/// Byte ranges whose markup is not markup: comments, and the bodies of
/// `<script>` and `<style>` elements.
fn hidden_ranges(html: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut pos = 0;

    while let Some(open) = RE_HIDDEN_OPEN.captures_at(html, pos) {
        let Some(tag) = open.get(0) else {
            break;
        };
        let range = match open.get(1) {
            None => {
                let end = html[tag.end()..]
                    .find("-->")
                    .map_or(html.len(), |i| tag.end() + i + 3);
                tag.start()..end
            }
            Some(name) => {
                let close = if name.as_str().eq_ignore_ascii_case("script") {
                    &*RE_SCRIPT_CLOSE
                } else {
                    &*RE_STYLE_CLOSE
                };
                let end = close
                    .find_at(html, tag.end())
                    .map_or(html.len(), |m| m.start());
                tag.end()..end
            }
        };
        pos = range.end.max(tag.end());
        ranges.push(range);
    }
    ranges
}

/// Complement of `hidden` (sorted, disjoint) within `html`.
fn visible_segments(html: &str, hidden: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut segments = Vec::with_capacity(hidden.len() + 1);
    let mut cursor = 0;
    for range in hidden {
        if range.start > cursor {
            segments.push(cursor..range.start);
        }
        cursor = cursor.max(range.end);
    }
    if cursor < html.len() {
        segments.push(cursor..html.len());
    }
    segments
}

/// Byte offset of `part` inside `whole`, if `part` borrows from it.
fn span_in(whole: &str, part: &[u8]) -> Option<usize> {
    let base = whole.as_ptr() as usize;
    let ptr = part.as_ptr() as usize;
    let start = ptr.checked_sub(base)?;
    let end = start.checked_add(part.len())?;

    (end <= whole.len() && whole.as_bytes().get(start..end) == Some(part)).then_some(start)
}

/// Splice edits into `html`. Edits may arrive in any order.
fn apply_edits(html: &str, mut edits: Vec<Edit>) -> String {
    if edits.is_empty() {
        return html.to_string();
    }

    edits.sort_by_key(|e| e.start);
    edits.dedup_by_key(|e| e.start);

    let mut out = String::with_capacity(html.len() + edits.len() * 32);
    let mut cursor = 0;
    for edit in edits {
        if edit.start < cursor {
            continue;
        }
        out.push_str(&html[cursor..edit.start]);
        out.push_str(&edit.value);
        cursor = edit.end;
    }
    out.push_str(&html[cursor..]);
    out
}
