use crate::emit::{EmissionDecision, InlineEvent, LinkSink, decide, emit_candidate};
use crate::matcher::find_candidates;
use crate::span::Span;

/// A link found in a text, with the span of its visible text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FoundLink {
    pub span: Span,
    pub href: String,
    pub text: String,
}

/// Feeds `text` to `sink`, turning bare URLs into links and passing the rest
/// through as characters.
pub fn linkify<S: LinkSink + ?Sized>(text: &str, sink: &mut S) {
    let mut last = 0usize;
    for candidate in find_candidates(text) {
        if candidate.span.start > last {
            sink.characters(&text[last..candidate.span.start]);
        }
        emit_candidate(&candidate.raw, sink);
        last = candidate.span.end;
    }
    if last < text.len() {
        sink.characters(&text[last..]);
    }
}

pub fn linkify_events(text: &str) -> Vec<InlineEvent> {
    let mut events = Vec::new();
    linkify(text, &mut events);
    events
}

pub fn find_links(text: &str) -> Vec<FoundLink> {
    find_candidates(text)
        .filter_map(|candidate| match decide(&candidate.raw) {
            EmissionDecision::Link {
                href, display_text, ..
            } => Some(FoundLink {
                span: Span {
                    start: candidate.span.start,
                    end: candidate.span.start + display_text.len(),
                },
                href,
                text: display_text,
            }),
            EmissionDecision::PlainText { .. } => None,
        })
        .collect()
}
