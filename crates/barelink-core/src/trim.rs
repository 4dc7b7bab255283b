/// Lowest index the backward scan may touch; keeps the scheme prefix intact.
pub const SCAN_FLOOR: usize = 4;

/// Trailing characters that read as prose punctuation rather than URL content.
pub const TRIM_PUNCTUATION: &[u8] = b"?!'\"*.:_~";

/// A candidate split into the part that gets linked and the part that stays text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrimResult<'a> {
    pub link_text: &'a str,
    pub trailing_text: &'a str,
}

pub fn trim_candidate(raw: &str) -> TrimResult<'_> {
    let (link_text, trailing_text) = raw.split_at(link_end(raw));
    TrimResult {
        link_text,
        trailing_text,
    }
}

/// Net count of `(` over `)` in `raw`.
pub fn paren_balance(raw: &str) -> i64 {
    raw.bytes().fold(0, |balance, b| match b {
        b'(' => balance + 1,
        b')' => balance - 1,
        _ => balance,
    })
}

/// Given the index of a `;`, returns the index of the `&` opening the
/// entity reference it closes, or `semicolon` itself when the run before it
/// is not shaped like `&name`.
pub fn entity_start(raw: &str, semicolon: usize) -> usize {
    let bytes = raw.as_bytes();
    if bytes.get(semicolon) != Some(&b';') {
        return semicolon;
    }
    let mut idx = semicolon;
    while idx > SCAN_FLOOR {
        idx -= 1;
        match bytes[idx] {
            b'&' if idx + 1 < semicolon => return idx,
            b if b.is_ascii_alphanumeric() => {}
            _ => break,
        }
    }
    semicolon
}

// All positions the scan can stop at hold ASCII bytes, so the returned
// boundary is always a char boundary.
fn link_end(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let mut balance = paren_balance(raw);
    let mut boundary = bytes.len();
    let mut idx = bytes.len();
    while idx > SCAN_FLOOR {
        idx -= 1;
        match bytes[idx] {
            b if TRIM_PUNCTUATION.contains(&b) => boundary = idx,
            // More closers than openers: this one is not part of the URL.
            b')' if balance < 0 => {
                balance += 1;
                boundary = idx;
            }
            b';' => {
                idx = entity_start(raw, idx);
                boundary = idx;
            }
            _ => break,
        }
    }
    boundary
}
