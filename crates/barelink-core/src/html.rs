use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::emit::LinkSink;
use crate::linkify::linkify;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HtmlEmitOptions {
    /// Wrap the output in a single `<p>` element.
    pub wrap_paragraph: bool,
    /// Value of the `rel` attribute put on every emitted link.
    pub link_rel: Option<String>,
}

/// [`LinkSink`] that writes an HTML fragment.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    out: String,
    link_rel: Option<String>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_rel(link_rel: Option<String>) -> Self {
        Self {
            out: String::new(),
            link_rel,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl LinkSink for HtmlBuilder {
    fn link(&mut self, href: &str, text: &str) {
        self.out.push_str("<a href=\"");
        self.out.push_str(&escape_attr(href));
        self.out.push('"');
        if let Some(rel) = &self.link_rel {
            self.out.push_str(" rel=\"");
            self.out.push_str(&escape_attr(rel));
            self.out.push('"');
        }
        self.out.push('>');
        self.out.push_str(&escape_html(text));
        self.out.push_str("</a>");
    }

    fn characters(&mut self, text: &str) {
        self.out.push_str(&escape_html(text));
    }
}

/// Emits raw, un-sanitized HTML for a run of inline text.
pub fn emit_html(text: &str) -> String {
    emit_html_with_options(text, &HtmlEmitOptions::default())
}

pub fn emit_html_with_options(text: &str, options: &HtmlEmitOptions) -> String {
    let mut builder = HtmlBuilder::with_link_rel(options.link_rel.clone());
    linkify(text, &mut builder);
    let html = builder.finish();
    if options.wrap_paragraph {
        format!("<p>{}</p>", html)
    } else {
        html
    }
}

/// Emits HTML and sanitizes it according to a safe allow-list.
pub fn emit_html_sanitized(text: &str) -> String {
    emit_html_sanitized_with_options(text, &HtmlEmitOptions::default())
}

pub fn emit_html_sanitized_with_options(text: &str, options: &HtmlEmitOptions) -> String {
    // ammonia sets `rel` itself and refuses it in the attribute allow-list.
    let raw_html = emit_html_with_options(
        text,
        &HtmlEmitOptions {
            link_rel: None,
            ..options.clone()
        },
    );

    let tags: HashSet<&str> = ["a", "p"].iter().copied().collect();
    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect::<HashSet<&str>>());

    Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes)
        .link_rel(options.link_rel.as_deref())
        .clean(&raw_html)
        .to_string()
}

fn escape_html(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
