//! MAC address text matching.
//!
//! Two deliberately different matchers:
//! - [`is_valid_mac`] is strict: six colon-separated pairs of hex digits,
//!   nothing before or after.
//! - [`find_mac_like`] is loose: the first run of six colon-separated pairs
//!   of word characters (alphanumerics or `_`) anywhere in a block of text.
//!
//! The reader uses the loose form on tool output, so a value it reports is
//! not guaranteed to pass the strict check.

/// Number of characters in `xx:xx:xx:xx:xx:xx`.
pub const MAC_TEXT_LEN: usize = 17;

/// Returns true if `text` is exactly `xx:xx:xx:xx:xx:xx` with hex digits.
///
/// Case-insensitive. Surrounding whitespace, dashes, and any other
/// group count are rejected.
pub fn is_valid_mac(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != MAC_TEXT_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| {
        if i % 3 == 2 {
            *b == b':'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

/// Word character as understood by the loose matcher.
///
/// Unicode alphanumerics plus `_`. This is the `Alphabetic` property, so it
/// also admits the combining marks in `Other_Alphabetic` (e.g. U+093E), which
/// a letter-category test would reject. Only matters for non-ASCII tool output.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the first MAC-shaped substring in `text`.
///
/// Each group is two word characters, so `ff:ff:ff:ff:ff:ff` and
/// `zz:zz:zz:zz:zz:zz` both match. Returns `None` if nothing matches.
pub fn find_mac_like(text: &str) -> Option<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if chars.len() < MAC_TEXT_LEN {
        return None;
    }

    for start in 0..=(chars.len() - MAC_TEXT_LEN) {
        let window = &chars[start..start + MAC_TEXT_LEN];
        let matches = window.iter().enumerate().all(|(i, (_, c))| {
            if i % 3 == 2 {
                *c == ':'
            } else {
                is_word_char(*c)
            }
        });

        if matches {
            let begin = window[0].0;
            let (last_pos, last_char) = window[MAC_TEXT_LEN - 1];
            return Some(&text[begin..last_pos + last_char.len_utf8()]);
        }
    }

    None
}
