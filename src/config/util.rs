//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract path component from a URL string
///
/// Uses `url` crate for proper parsing. Returns `None` if the URL is invalid.
///
/// ```ignore
/// extract_url_path("https://example.github.io/my-blog/") -> Some("my-blog")
/// extract_url_path("https://example.com")                -> Some("")
/// extract_url_path("invalid")                            -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    Some(path.to_string())
}

/// Find config file by searching upward from `start`
///
/// Returns the absolute path to the config file if found.
///
/// ```text
/// /home/user/blog/posts/     ← start
/// /home/user/blog/nobelium.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/my-blog/").as_deref(),
            Some("my-blog")
        );
        assert_eq!(extract_url_path("https://example.com").as_deref(), Some(""));
        assert_eq!(
            extract_url_path("https://example.com:8080/a/b?q=1").as_deref(),
            Some("a/b")
        );
        assert_eq!(extract_url_path("invalid"), None);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("posts/2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("nobelium.toml"), "").unwrap();

        let found = find_config_file(Path::new("nobelium.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("nobelium.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file(Path::new("no-such-config.toml"), dir.path()).is_none());
    }
}
