//! Markup helpers shared by the layouts and the table of contents.

use std::borrow::Cow;

/// Escape text content: `&`, `<`, `>`.
///
/// Quotes are left alone, so post titles and summaries stay readable in the
/// page source. Borrowed when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    replace_entities(s, escape_text_char)
}

/// Escape a double-quoted attribute value: text escapes plus both quotes.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    replace_entities(s, |c| match c {
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        other => escape_text_char(other),
    })
}

fn escape_text_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

fn replace_entities(s: &str, entity: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = s.find(|c| entity(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match entity(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Join class fragments with single spaces. Empty fragments vanish and
/// multi-line fragments are collapsed.
pub fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
