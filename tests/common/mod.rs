//! Minimal event splitter for well-formed test fixtures.
//!
//! Not a tokenizer: no entities, comments, or recovery. Tag names and
//! attribute names are taken as written, so fixtures use lowercase.

#![allow(dead_code)]

use htmlconvert::HtmlEvent;
use memchr::memchr;

/// Elements that never have content; they get an immediate close event.
const VOID: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

/// Split `html` into open, close and text events.
pub fn events(html: &str) -> Vec<HtmlEvent<'_>> {
    let bytes = html.as_bytes();
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(lt) = memchr(b'<', &bytes[pos..]).map(|i| pos + i) else {
            out.push(HtmlEvent::Text(&html[pos..]));
            break;
        };
        if lt > pos {
            out.push(HtmlEvent::Text(&html[pos..lt]));
        }
        let gt = memchr(b'>', &bytes[lt..])
            .map(|i| lt + i)
            .unwrap_or_else(|| panic!("unterminated tag at {lt} in {html:?}"));
        push_tag(&html[lt + 1..gt], &mut out);
        pos = gt + 1;
    }
    out
}

fn push_tag<'a>(inner: &'a str, out: &mut Vec<HtmlEvent<'a>>) {
    if let Some(name) = inner.strip_prefix('/') {
        out.push(HtmlEvent::Close(name.trim()));
        return;
    }
    let self_closing = inner.ends_with('/');
    let inner = inner.trim_end_matches('/').trim();
    let name_end = inner
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(inner.len());
    let name = &inner[..name_end];
    let attributes = parse_attributes(&inner[name_end..]);
    out.push(HtmlEvent::open_with(name, attributes));
    if self_closing || VOID.contains(&name) {
        out.push(HtmlEvent::Close(name));
    }
}

fn parse_attributes(mut rest: &str) -> Vec<(&str, &str)> {
    let mut attributes = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return attributes;
        }
        let name_end = rest
            .find(|c: char| c == '=' || c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();
        let Some(after_eq) = rest.strip_prefix('=') else {
            attributes.push((name, ""));
            continue;
        };
        let after_eq = after_eq.trim_start();
        let (value, remaining) = match after_eq.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &after_eq[1..];
                let end = body.find(quote).unwrap_or(body.len());
                (&body[..end], body.get(end + 1..).unwrap_or(""))
            }
            _ => {
                let end = after_eq
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(after_eq.len());
                (&after_eq[..end], &after_eq[end..])
            }
        };
        attributes.push((name, value));
        rest = remaining;
    }
}

/// Plain text of an HTML fixture.
pub fn plain(html: &str) -> String {
    htmlconvert::to_text(events(html))
}

/// Compact plain text of an HTML fixture.
pub fn compact(html: &str) -> String {
    htmlconvert::to_text_with_options(events(html), &htmlconvert::Options::compact())
}

/// Annotated text of an HTML fixture.
pub fn annotated(html: &str) -> htmlconvert::AnnotatedText {
    htmlconvert::to_annotated(events(html)).expect("balanced fixture")
}
