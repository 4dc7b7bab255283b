use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::trim::{TrimResult, trim_candidate};

/// Everything except unreserved characters, sub-delims, `:`, `@`, `/` and `?`.
const FRAGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Candidates that are nothing but a scheme prefix once trimmed.
const DEGENERATE: [&str; 3] = ["www.", "http://", "https://"];

/// Receiver for the output of the linkifier.
pub trait LinkSink {
    /// Appends a hyperlink node.
    fn link(&mut self, href: &str, text: &str);
    /// Appends literal text; escaping is the sink's job.
    fn characters(&mut self, text: &str);
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EmissionDecision {
    Link {
        href: String,
        display_text: String,
        trailing_text: String,
    },
    PlainText {
        text: String,
    },
}

impl EmissionDecision {
    pub fn emit_into<S: LinkSink + ?Sized>(&self, sink: &mut S) {
        match self {
            EmissionDecision::Link {
                href,
                display_text,
                trailing_text,
            } => {
                sink.link(href, display_text);
                if !trailing_text.is_empty() {
                    sink.characters(trailing_text);
                }
            }
            EmissionDecision::PlainText { text } => sink.characters(text),
        }
    }
}

/// Decides how a raw candidate is rendered.
pub fn decide(raw: &str) -> EmissionDecision {
    let TrimResult {
        link_text,
        trailing_text,
    } = trim_candidate(raw);
    if DEGENERATE.contains(&link_text) {
        log::debug!("candidate {:?} is only a scheme prefix, keeping it as text", raw);
        return EmissionDecision::PlainText {
            text: raw.to_string(),
        };
    }
    let href = if link_text.starts_with("www.") {
        escape_href(&format!("http://{}", link_text))
    } else {
        escape_href(link_text)
    };
    EmissionDecision::Link {
        href,
        display_text: link_text.to_string(),
        trailing_text: trailing_text.to_string(),
    }
}

pub fn emit_candidate<S: LinkSink + ?Sized>(raw: &str, sink: &mut S) {
    decide(raw).emit_into(sink);
}

/// Percent-escapes an href for use in an anchor. `#` and `%` already present
/// in the input are left as they were.
pub fn escape_href(href: &str) -> String {
    utf8_percent_encode(href, FRAGMENT_ENCODE_SET)
        .to_string()
        .replace("%23", "#")
        .replace("%25", "%")
}

/// One call made on a [`LinkSink`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InlineEvent {
    Link { href: String, text: String },
    Characters(String),
}

impl InlineEvent {
    /// The text this event shows to a reader.
    pub fn text(&self) -> &str {
        match self {
            InlineEvent::Link { text, .. } => text,
            InlineEvent::Characters(text) => text,
        }
    }
}

impl LinkSink for Vec<InlineEvent> {
    fn link(&mut self, href: &str, text: &str) {
        self.push(InlineEvent::Link {
            href: href.to_string(),
            text: text.to_string(),
        });
    }

    fn characters(&mut self, text: &str) {
        self.push(InlineEvent::Characters(text.to_string()));
    }
}
