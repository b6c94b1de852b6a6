//! Lenient HTML character reference decoding.
//!
//! Named references are resolved against the HTML5 entity table shipped with
//! `quick-xml`. Anything that does not parse as a reference (a bare `&`, an
//! unknown name, an out-of-range code point) is kept as written, so
//! descriptions containing plain ampersands survive untouched.

use std::borrow::Cow;

use quick_xml::escape::resolve_html5_entity;

/// Longest reference body considered, in bytes, excluding `&` and `;`.
const MAX_REFERENCE_LEN: usize = 32;

/// Decode every HTML character reference in `input` once.
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        match decode_reference(after) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &after[consumed..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Names HTML allows without a terminating `;` (`&nbsp`, `&copy2024`).
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig",
    "agrave", "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy",
    "curren", "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14",
    "frac34", "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt",
    "macr", "micro", "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf",
    "ordm", "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg",
    "sect", "shy", "sup1", "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc",
    "ugrave", "uml", "uuml", "yacute", "yen", "yuml",
];

/// Decode the reference at the start of `text` (just after `&`). Returns the
/// replacement and the number of bytes consumed.
fn decode_reference(text: &str) -> Option<(Cow<'static, str>, usize)> {
    if let Some(number) = text.strip_prefix('#') {
        let end = terminator(number)?;
        let decoded = decode_numeric(&number[..end])?;
        return Some((Cow::Owned(decoded.to_string()), end + 2));
    }
    terminated_name(text).or_else(|| legacy_name(text))
}

/// Byte offset of the `;` closing a reference body, if close enough.
fn terminator(text: &str) -> Option<usize> {
    text.char_indices()
        .take(MAX_REFERENCE_LEN + 1)
        .find(|(_, ch)| *ch == ';')
        .map(|(idx, _)| idx)
}

fn terminated_name(text: &str) -> Option<(Cow<'static, str>, usize)> {
    let end = terminator(text)?;
    let body = &text[..end];
    if body.is_empty() || !body.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return None;
    }
    Some((Cow::Borrowed(resolve_html5_entity(body)?), end + 1))
}

/// Longest legacy name prefixing `text`, consumed without a `;`.
fn legacy_name(text: &str) -> Option<(Cow<'static, str>, usize)> {
    let run = text
        .bytes()
        .take(MAX_REFERENCE_LEN)
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    (1..=run).rev().find_map(|len| {
        let name = &text[..len];
        if !LEGACY_NAMES.contains(&name) {
            return None;
        }
        resolve_html5_entity(name).map(|value| (Cow::Borrowed(value), len))
    })
}

fn decode_numeric(number: &str) -> Option<char> {
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse::<u32>().ok()?,
    };
    if code == 0 {
        return Some(char::REPLACEMENT_CHARACTER);
    }
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric_references() {
        assert_eq!(decode_entities("Fish &amp; Chips"), "Fish & Chips");
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{a0}b");
        assert_eq!(decode_entities("&lt;p&gt;"), "<p>");
        assert_eq!(decode_entities("&#39;quoted&#x27;"), "'quoted'");
        assert_eq!(decode_entities("&eacute;t&eacute;"), "\u{e9}t\u{e9}");
    }

    #[test]
    fn keeps_text_that_is_not_a_reference() {
        assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("R&D; team"), "R&D; team");
        assert_eq!(decode_entities("&#xZZ; &;"), "&#xZZ; &;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn legacy_names_need_no_semicolon() {
        assert_eq!(decode_entities("A&nbsp B"), "A\u{a0} B");
        assert_eq!(decode_entities("&copy2024 Acme"), "\u{a9}2024 Acme");
        assert_eq!(decode_entities("Salt &amp Pepper"), "Salt & Pepper");
        assert_eq!(decode_entities("&notit;"), "\u{ac}it;");
    }

    #[test]
    fn non_legacy_names_still_need_a_semicolon() {
        assert_eq!(decode_entities("&hellip and"), "&hellip and");
        assert_eq!(decode_entities("&hellip;"), "\u{2026}");
    }

    #[test]
    fn single_pass_leaves_double_encoding() {
        let once = decode_entities("&amp;nbsp;");
        assert_eq!(once, "&nbsp;");
        assert_eq!(decode_entities(&once), "\u{a0}");
    }

    #[test]
    fn borrows_when_nothing_to_decode() {
        assert!(matches!(decode_entities("plain"), Cow::Borrowed("plain")));
    }
}
