//! TML escape sequences.
//!
//! | source | meaning |
//! |---|---|
//! | `\[` `\]` `\|` | literal bracket or divider |
//! | `\s` | space |
//! | `\t` | tab |
//! | `\n` | newline |
//! | `\r` | carriage return |
//! | `\\` | backslash |
//!
//! The scanner hides structural escapes behind private-use placeholders
//! while it splits the source, then [`resolve_escapes`] turns each text run
//! into its final text. [`escape_text`] is the inverse used by writers that
//! need to emit re-parseable source.

/// Stands in for `\[` until the text run is resolved.
pub const OPEN_PLACEHOLDER: char = '\u{E000}';
/// Stands in for `\]` until the text run is resolved.
pub const CLOSE_PLACEHOLDER: char = '\u{E001}';
/// Stands in for `\|` until the text run is resolved.
pub const DIVIDER_PLACEHOLDER: char = '\u{E002}';

pub const ESCAPE_CHAR: char = '\\';

/// Applied in order, each as a whole-string replacement.
const RESOLUTIONS: [(&str, &str); 8] = [
    ("\u{E000}", "["),
    ("\u{E001}", "]"),
    ("\u{E002}", "|"),
    ("\\s", " "),
    ("\\t", "\t"),
    ("\\n", "\n"),
    ("\\r", "\r"),
    ("\\\\", "\\"),
];

/// Placeholder for an escaped structural character, if `ch` is one.
pub fn placeholder_for(ch: char) -> Option<char> {
    match ch {
        '[' => Some(OPEN_PLACEHOLDER),
        ']' => Some(CLOSE_PLACEHOLDER),
        '|' => Some(DIVIDER_PLACEHOLDER),
        _ => None,
    }
}

fn has_pending_escape(raw: &str) -> bool {
    raw.chars().any(|c| {
        matches!(
            c,
            ESCAPE_CHAR | OPEN_PLACEHOLDER | CLOSE_PLACEHOLDER | DIVIDER_PLACEHOLDER
        )
    })
}

/// Resolve a scanned text run into its final leaf text.
///
/// Unknown sequences such as `\?`, `\*` or a trailing `\` are kept verbatim.
pub fn resolve_escapes(raw: &str) -> String {
    if !has_pending_escape(raw) {
        return raw.to_string();
    }
    RESOLUTIONS
        .iter()
        .fold(raw.to_string(), |text, (from, to)| text.replace(from, to))
}

/// Escape leaf text so that scanning it yields the same text again.
///
/// Some text has no escaped form and does not come back unchanged:
///
/// - a backslash directly followed by `s`, `t`, `n` or `r`, since those
///   sequences are resolved before `\\` when scanning
/// - form feed and vertical tab, which separate tokens but have no escape
/// - the placeholders U+E000, U+E001, U+E002, which scan as `[`, `]`, `|`
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            '|' => out.push_str("\\|"),
            ' ' => out.push_str("\\s"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
