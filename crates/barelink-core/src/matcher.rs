use once_cell::sync::Lazy;
use regex::{Match, Regex};

use crate::span::Span;

// The regex crate has no lookaround, so the boundary before a hit and the
// `http:///` exclusion are checked in `accept`.
static CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:https?://|www\.)[^\s<]*").expect("candidate pattern"));
static ANCHORED_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?://|www\.)[^\s<]*").expect("candidate pattern"));

/// A raw run of text that starts like a bare URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub span: Span,
    pub raw: String,
}

/// Iterator over the non-overlapping candidates of a text, left to right.
pub struct Candidates<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.pos < self.text.len() {
            let found = CANDIDATE.find_at(self.text, self.pos)?;
            match accept(self.text, found) {
                Some(candidate) => {
                    self.pos = candidate.span.end;
                    return Some(candidate);
                }
                // Hits always start with an ASCII letter.
                None => self.pos = found.start() + 1,
            }
        }
        None
    }
}

pub fn find_candidates(text: &str) -> Candidates<'_> {
    Candidates { text, pos: 0 }
}

/// Matches a candidate starting exactly at byte offset `start`.
pub fn match_candidate_at(text: &str, start: usize) -> Option<Candidate> {
    let rest = text.get(start..)?;
    let found = ANCHORED_CANDIDATE.find(rest)?;
    let raw = found.as_str();
    if !is_candidate_boundary(text[..start].chars().next_back()) || !is_acceptable_body(raw) {
        return None;
    }
    Some(Candidate {
        span: Span {
            start,
            end: start + raw.len(),
        },
        raw: raw.to_string(),
    })
}

/// Candidates may only start at the beginning of the text or after
/// whitespace or punctuation.
pub fn is_candidate_boundary(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(ch) => ch.is_whitespace() || ch.is_ascii_punctuation(),
    }
}

fn accept(text: &str, found: Match<'_>) -> Option<Candidate> {
    let prev = text[..found.start()].chars().next_back();
    if !is_candidate_boundary(prev) {
        log::trace!("candidate at {} rejected: no boundary before it", found.start());
        return None;
    }
    let raw = found.as_str();
    if !is_acceptable_body(raw) {
        log::trace!("candidate {:?} rejected: bad scheme or character", raw);
        return None;
    }
    log::trace!("candidate {:?} at {}..{}", raw, found.start(), found.end());
    Some(Candidate {
        span: Span {
            start: found.start(),
            end: found.end(),
        },
        raw: raw.to_string(),
    })
}

fn is_acceptable_body(raw: &str) -> bool {
    if raw.starts_with("http:///") || raw.starts_with("https:///") {
        return false;
    }
    // Anything outside printable ASCII (e.g. a non-ASCII host) rejects the
    // whole run instead of cutting it short.
    raw.bytes().all(|b| b.is_ascii_graphic() && b != b'<')
}
