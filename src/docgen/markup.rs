//! Description rendering.
//!
//! Function descriptions are written in CommonMark, but they end up inside HTML table cells where Markdown is not
//! rendered, so they are converted to HTML fragments up front.
//!
//! ## Notes
//! - Output is XHTML-style (`<br />`, `<hr />`).
//! - Tables and smart punctuation are enabled.
//! - Links get `rel="nofollow"` and a percent-encoded target. Links to `javascript:`, `vbscript:`, `file:` and
//!   non-image `data:` URLs keep their text but lose the link.
//! - Raw HTML in a description is escaped and shown as text, never passed through. An HTML block becomes a
//!   paragraph.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use pulldown_cmark_escape::escape_href;

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "file:", "data:"];
const ALLOWED_DATA_IMAGES: &[&str] = &["data:image/gif;", "data:image/png;", "data:image/jpeg;", "data:image/webp;"];

fn description_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_SMART_PUNCTUATION
}

/// Render a CommonMark description to an HTML fragment.
///
/// ## Examples
/// ```rust
/// use sqldoc::docgen::markup::render_description;
///
/// assert_eq!(render_description("Returns `val`."), "<p>Returns <code>val</code>.</p>\n");
/// ```
pub fn render_description(info: &str) -> String {
    let mut events: Vec<Event<'_>> = Vec::new();
    // One flag per open link: whether its tags were emitted.
    let mut open_links: Vec<bool> = Vec::new();

    for event in Parser::new_ext(info, description_options()) {
        match event {
            Event::Start(Tag::Link { dest_url, title, .. }) => {
                let safe = is_safe_url(&dest_url);
                if safe {
                    events.push(Event::Html(open_link(&dest_url, &title).into()));
                }
                open_links.push(safe);
            }
            Event::End(TagEnd::Link) => {
                if open_links.pop().unwrap_or(false) {
                    events.push(Event::Html("</a>".into()));
                }
            }
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) if !is_safe_url(&dest_url) => {
                events.push(Event::Start(Tag::Image {
                    link_type,
                    dest_url: CowStr::Borrowed(""),
                    title,
                    id,
                }));
            }
            Event::Start(Tag::HtmlBlock) => events.push(Event::Start(Tag::Paragraph)),
            Event::End(TagEnd::HtmlBlock) => {
                if let Some(Event::Text(last)) = events.last_mut() {
                    let trimmed = last.trim_end_matches('\n').to_string();
                    *last = trimmed.into();
                }
                events.push(Event::End(TagEnd::Paragraph));
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(info.len() * 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Whether a link target may be emitted as a live link.
fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if !BLOCKED_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme)) {
        return true;
    }
    ALLOWED_DATA_IMAGES.iter().any(|prefix| normalized.starts_with(prefix))
}

fn open_link(href: &str, title: &str) -> String {
    let mut tag = String::from("<a href=\"");
    // Writing into a String cannot fail.
    let _ = escape_href(&mut tag, href);
    tag.push('"');
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_html(title)));
    }
    tag.push_str(" rel=\"nofollow\">");
    tag
}

/// Escape text for use inside HTML attributes and element bodies.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
