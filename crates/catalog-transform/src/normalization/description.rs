//! Plain-text rendering of HTML product descriptions.

use std::sync::LazyLock;

use regex::Regex;

use super::entities::decode_entities;

/// `<br>`, `<br/>`, `<br />`, with or without attributes.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br(?:\s[^>]*)?/?>").expect("Invalid line break regex")
});

/// Opening paragraph and division tags start a new line.
static BLOCK_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:p|div)(?:\s[^>]*)?>").expect("Invalid block open regex")
});

static BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:p|div)\s*>").expect("Invalid block close regex"));

/// Headings, table rows and other sectioning blocks sit on lines of their own.
static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:h[1-6]|tr|table|section|article|blockquote)(?:\s[^>]*)?>")
        .expect("Invalid section regex")
});

/// List items become `- ` bullets on their own line.
static LIST_ITEM_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li(?:\s[^>]*)?>").expect("Invalid list item regex"));

static LIST_ITEM_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</li\s*>").expect("Invalid list item close regex"));

static LIST_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:ul|ol)(?:\s[^>]*)?>").expect("Invalid list container regex")
});

static INLINE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:strong|b|em|i|u|span)(?:\s[^>]*)?>").expect("Invalid inline tag regex")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));

/// Any remaining element tag. Requires a letter after `<` so that text like
/// `a < b` is not mistaken for markup.
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("Invalid tag regex"));

static TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("Invalid trailing space regex"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));

/// Convert an HTML description to plain printable-ASCII text.
///
/// Entities are decoded twice because exports are often double-encoded.
/// Structural tags map to line breaks or `- ` bullets, every other tag is
/// removed, and non-breaking or mis-encoded spaces become plain spaces.
/// Characters outside printable ASCII are dropped (newlines are kept), runs of
/// three or more newlines collapse to a blank line, and the result is trimmed.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::clean_description;
///
/// assert_eq!(clean_description("<p>Hello&nbsp;World</p><br>Line2"), "Hello World\nLine2");
/// assert_eq!(clean_description(""), "");
/// ```
pub fn clean_description(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let once = decode_entities(raw);
    let decoded = decode_entities(&once).into_owned();

    let text = COMMENT.replace_all(&decoded, "");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = BLOCK_OPEN.replace_all(&text, "\n");
    let text = BLOCK_CLOSE.replace_all(&text, "");
    let text = SECTION.replace_all(&text, "\n");
    let text = LIST_ITEM_OPEN.replace_all(&text, "\n- ");
    let text = LIST_ITEM_CLOSE.replace_all(&text, "");
    let text = LIST_CONTAINER.replace_all(&text, "\n");
    let text = INLINE_EMPHASIS.replace_all(&text, "");
    let text = ANY_TAG.replace_all(&text, "");

    let printable: String = text
        .chars()
        .filter_map(normalize_char)
        .filter(|ch| *ch == '\n' || (' '..='~').contains(ch))
        .collect();

    let text = TRAILING_SPACE.replace_all(&printable, "\n");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Map space-like and mis-encoding artifacts before the ASCII filter.
fn normalize_char(ch: char) -> Option<char> {
    match ch {
        // no-break, narrow no-break, figure, thin and ideographic spaces
        '\u{a0}' | '\u{202f}' | '\u{2007}' | '\u{2009}' | '\u{3000}' | '\t' => Some(' '),
        // "Â" left behind when a UTF-8 no-break space is read as Latin-1,
        // zero-width space, byte order mark
        '\u{c2}' | '\u{200b}' | '\u{feff}' => None,
        '\r' => None,
        other => Some(other),
    }
}
