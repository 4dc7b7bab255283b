mod emit;
mod html;
mod linkify;
mod matcher;
mod span;
mod trim;

pub use emit::{EmissionDecision, InlineEvent, LinkSink, decide, emit_candidate, escape_href};
pub use html::{
    HtmlBuilder, HtmlEmitOptions, emit_html, emit_html_sanitized,
    emit_html_sanitized_with_options, emit_html_with_options,
};
pub use linkify::{FoundLink, find_links, linkify, linkify_events};
pub use matcher::{Candidate, Candidates, find_candidates, is_candidate_boundary, match_candidate_at};
pub use span::{Span, SpanError};
pub use trim::{SCAN_FLOOR, TRIM_PUNCTUATION, TrimResult, entity_start, paren_balance, trim_candidate};
