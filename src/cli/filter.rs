//! Filter command: the list filter from the command line.

use crate::cli::FilterArgs;
use crate::config::SiteConfig;
use crate::page::{FilterState, SiteData};
use anyhow::{Context, Result};

/// Print the posts matching `args.key` as JSON.
pub fn run_filter(args: &FilterArgs, config: &SiteConfig) -> Result<()> {
    let data_path = config.data_path();
    let data = SiteData::load(&data_path)
        .with_context(|| format!("Failed to load site data '{}'", data_path.display()))?;

    println!("{}", filter_json(&data, &args.key, args.pretty)?);
    Ok(())
}

fn filter_json(data: &SiteData, key: &str, pretty: bool) -> Result<String> {
    let state = FilterState::new(key);
    let posts = state.apply(&data.posts);
    let json = if pretty {
        serde_json::to_string_pretty(&posts)?
    } else {
        serde_json::to_string(&posts)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn data() -> SiteData {
        SiteData::from_json(
            r#"{"posts": [
                {"slug": "foo", "title": "Foo", "summary": "bar", "tags": ["x"]},
                {"slug": "rust", "title": "Rust", "password": "pw"}
            ]}"#,
        )
        .unwrap()
    }

    fn slugs(json: &str) -> Vec<String> {
        let value: Value = serde_json::from_str(json).unwrap();
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|post| post["slug"].as_str().unwrap().to_owned())
            .collect()
    }

    #[test]
    fn test_filter_json() {
        let data = data();
        assert_eq!(slugs(&filter_json(&data, "", false).unwrap()), ["foo", "rust"]);
        assert_eq!(slugs(&filter_json(&data, "BAR", false).unwrap()), ["foo"]);
        assert!(slugs(&filter_json(&data, "baz", false).unwrap()).is_empty());
    }

    #[test]
    fn test_filter_json_hides_passwords() {
        let json = filter_json(&data(), "rust", true).unwrap();
        assert!(json.contains('\n'));
        assert!(!json.contains("pw"));
    }
}
