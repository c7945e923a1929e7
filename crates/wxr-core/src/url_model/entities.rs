//! HTML entity decoding for URL candidates.

use std::borrow::Cow;

/// Longest entity body we try to decode (between `&` and `;`).
const MAX_ENTITY_LEN: usize = 10;

const NAMED: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{00A0}'),
    ("sol", '/'),
    ("colon", ':'),
    ("period", '.'),
    ("quest", '?'),
    ("equals", '='),
    ("num", '#'),
];

/// Decodes HTML entities until the string no longer changes.
///
/// Handles numeric references (`&#38;`, `&#x26;`) and a small set of named
/// entities, matched case-insensitively. Unknown or unterminated entities are
/// left as-is. Repeating the pass unwraps double-encoded input such as
/// `&amp;amp;`, so the output never contains a decodable entity.
pub fn decode_html_entities(input: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(input);
    // Every successful pass makes the string strictly shorter.
    while let Some(next) = decode_once(&current) {
        current = Cow::Owned(next);
    }
    current
}

/// One decoding pass; `None` when nothing was decoded.
fn decode_once(s: &str) -> Option<String> {
    if !s.contains('&') {
        return None;
    }

    let mut out = String::with_capacity(s.len());
    let mut changed = false;
    let mut rest = s;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let decoded = after
            .bytes()
            .take(MAX_ENTITY_LEN + 1)
            .position(|b| b == b';')
            .and_then(|end| decode_entity(&after[..end]).map(|c| (end, c)));

        match decoded {
            Some((end, c)) => {
                out.push(c);
                rest = &after[end + 1..];
                changed = true;
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    changed.then_some(out)
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}
