//! Slug generation for post paths and heading anchors.

use super::hash::fingerprint;
use std::borrow::Cow;

/// Slugify text: Unicode → ASCII, lowercase, dash-separated.
///
/// Runs of non-alphanumeric characters collapse to one `-`, leading and
/// trailing dashes are dropped. Returns an empty string when nothing
/// alphanumeric survives transliteration.
///
/// ```ignore
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Ünïcödé"), "unicode");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Whether `name` can be used verbatim as one output directory name.
pub fn is_path_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_control)
}

/// Directory name for a tag or category page.
///
/// The name itself when it is a single safe component, else its slug, else
/// (nothing alphanumeric left) a fingerprint of the name.
pub fn path_segment(name: &str) -> Cow<'_, str> {
    if is_path_segment(name) {
        return Cow::Borrowed(name);
    }
    let slug = slugify(name);
    if slug.is_empty() {
        Cow::Owned(format!("t-{}", fingerprint(name)))
    } else {
        Cow::Owned(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Getting   Started  "), "getting-started");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Ünïcödé"), "unicode");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_path_segment_keeps_safe_names() {
        assert!(matches!(path_segment("C++"), Cow::Borrowed("C++")));
        assert_eq!(path_segment("中文"), "中文");
        assert_eq!(path_segment(".hidden"), ".hidden");
    }

    #[test]
    fn test_path_segment_replaces_unsafe_names() {
        assert_eq!(path_segment("CI/CD"), "ci-cd");
        assert_eq!(path_segment("../../escaped"), "escaped");
        assert_eq!(path_segment("a\\b"), "a-b");
        assert!(path_segment("..").starts_with("t-"));
        assert!(is_path_segment(&path_segment("/")));
    }
}
