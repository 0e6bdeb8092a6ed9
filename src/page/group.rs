//! Category and tag options, archive groups.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::Post;

/// Tag color used when the site data names none.
pub const DEFAULT_TAG_COLOR: &str = "gray";

/// Title of the archive group for posts without a valid date.
pub const UNDATED_GROUP: &str = "Undated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagOption {
    pub name: String,
    pub count: usize,
    pub color: String,
}

/// Count non-empty names, most frequent first, ties by name.
fn count_sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for name in names.filter(|name| !name.is_empty()) {
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts
        .into_iter()
        .map(|(name, count)| (name.to_owned(), count))
        .collect();
    sorted.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });
    sorted
}

pub fn category_options(posts: &[Post]) -> Vec<CategoryOption> {
    count_sorted(posts.iter().filter_map(|post| post.category.as_deref()))
        .into_iter()
        .map(|(name, count)| CategoryOption { name, count })
        .collect()
}

pub fn tag_options(posts: &[Post], colors: &FxHashMap<String, String>) -> Vec<TagOption> {
    count_sorted(posts.iter().flat_map(|post| post.tags.iter().map(String::as_str)))
        .into_iter()
        .map(|(name, count)| {
            let color = colors
                .get(&name)
                .cloned()
                .unwrap_or_else(|| DEFAULT_TAG_COLOR.to_owned());
            TagOption { name, count, color }
        })
        .collect()
}

/// Group posts by `YYYY-MM`, newest month first, undated posts last.
///
/// Posts keep their input order inside a group.
pub fn archive_groups(posts: &[Post]) -> Vec<(String, Vec<Post>)> {
    let mut months: FxHashMap<String, Vec<Post>> = FxHashMap::default();
    let mut undated = Vec::new();

    for post in posts {
        match post.parsed_date() {
            Some(date) => months.entry(date.month_key()).or_default().push(post.clone()),
            None => undated.push(post.clone()),
        }
    }

    let mut groups: Vec<_> = months.into_iter().collect();
    groups.sort_by(|(a, _), (b, _)| b.cmp(a));
    if !undated.is_empty() {
        groups.push((UNDATED_GROUP.to_owned(), undated));
    }
    groups
}
