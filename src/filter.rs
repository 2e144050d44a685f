use std::collections::BTreeSet;

use crate::content::ContentItem;

/// Tag selector value meaning "no tag restriction".
pub const ALL_TAGS: &str = "all";

/// Search box and tag selector state held by the blog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub tag: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            tag: ALL_TAGS.to_string(),
        }
    }
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.tag != ALL_TAGS
    }

    pub fn apply<'a>(&self, items: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        filter(items, &self.query, &self.tag)
    }
}

fn matches_query(item: &ContentItem, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.summary.to_lowercase().contains(needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Posts matching `query` (case-insensitive, over title, summary and tags) and
/// carrying `tag` exactly, newest first. Equal dates keep their list order.
pub fn filter<'a>(items: &'a [ContentItem], query: &str, tag: &str) -> Vec<&'a ContentItem> {
    let needle = query.trim().to_lowercase();

    let mut matched: Vec<&ContentItem> = items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .filter(|item| tag == ALL_TAGS || item.has_tag(tag))
        .collect();

    // sort_by is stable
    matched.sort_by(|a, b| b.published_at.cmp(a.published_at));
    matched
}

/// Options for the tag selector: `"all"` first, then every tag once, sorted.
pub fn available_tags(items: &[ContentItem]) -> Vec<&str> {
    let unique: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.tags.iter().copied())
        .collect();

    std::iter::once(ALL_TAGS).chain(unique).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::POSTS;

    fn ids(items: &[&ContentItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    fn item(id: &'static str, published_at: &'static str, tags: &'static [&'static str]) -> ContentItem {
        ContentItem {
            id,
            title: id,
            published_at,
            summary: "",
            tags,
            body: &[],
            author: "",
            reading_minutes: 1,
        }
    }

    #[test]
    fn test_no_filters_sorts_newest_first() {
        let result = filter(&POSTS, "", ALL_TAGS);
        assert_eq!(result.len(), POSTS.len());
        assert_eq!(
            ids(&result),
            vec![
                "composite-bonding-aftercare",
                "smile-design-first-principles",
                "conservative-makeover",
            ]
        );
    }

    #[test]
    fn test_query_matches_title_summary_and_tags() {
        let result = filter(&POSTS, "bonding", ALL_TAGS);
        assert_eq!(
            ids(&result),
            vec!["composite-bonding-aftercare", "conservative-makeover"]
        );

        // summary only
        assert_eq!(
            ids(&filter(&POSTS, "gum line", ALL_TAGS)),
            vec!["smile-design-first-principles"]
        );
        // tag only
        assert_eq!(
            ids(&filter(&POSTS, "case stud", ALL_TAGS)),
            vec!["conservative-makeover"]
        );
    }

    #[test]
    fn test_query_is_trimmed_and_case_folded() {
        assert_eq!(
            ids(&filter(&POSTS, "  BONDING \t", ALL_TAGS)),
            ids(&filter(&POSTS, "bonding", ALL_TAGS))
        );
        assert_eq!(filter(&POSTS, "   ", ALL_TAGS).len(), POSTS.len());
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(&POSTS, "zzz-no-match", ALL_TAGS).is_empty());
        assert!(filter(&POSTS, "", "Orthodontics").is_empty());
    }

    #[test]
    fn test_tag_filter_is_exact() {
        assert_eq!(
            ids(&filter(&POSTS, "", "Whitening")),
            vec!["conservative-makeover"]
        );
        assert!(filter(&POSTS, "", "whitening").is_empty());
        assert_eq!(
            ids(&filter(&POSTS, "", "Bonding")),
            vec!["composite-bonding-aftercare", "conservative-makeover"]
        );
    }

    #[test]
    fn test_query_and_tag_combine() {
        assert_eq!(
            ids(&filter(&POSTS, "aftercare", "Bonding")),
            vec!["composite-bonding-aftercare"]
        );
        assert!(filter(&POSTS, "aftercare", "Whitening").is_empty());
    }

    #[test]
    fn test_equal_dates_keep_list_order() {
        let items = [
            item("first", "2024-06-01", &["A"]),
            item("older", "2023-01-01", &["A"]),
            item("second", "2024-06-01", &["A"]),
            item("newest", "2025-01-01", &["A"]),
            item("third", "2024-06-01", &["A"]),
        ];
        assert_eq!(
            ids(&filter(&items, "", ALL_TAGS)),
            vec!["newest", "first", "second", "third", "older"]
        );
    }

    #[test]
    fn test_refiltering_never_reintroduces_items() {
        let narrowed: Vec<ContentItem> = filter(&POSTS, "bonding", ALL_TAGS)
            .into_iter()
            .cloned()
            .collect();
        let widened = filter(&narrowed, "", ALL_TAGS);
        assert_eq!(widened.len(), narrowed.len());
        assert!(widened.iter().all(|p| p.id != "smile-design-first-principles"));
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let before: Vec<&str> = POSTS.iter().map(|p| p.id).collect();
        let _ = filter(&POSTS, "", ALL_TAGS);
        let after: Vec<&str> = POSTS.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_available_tags() {
        assert_eq!(
            available_tags(&POSTS),
            vec![
                "all",
                "Aftercare",
                "Bonding",
                "Case Study",
                "Cosmetic",
                "Planning",
                "Whitening",
            ]
        );
        assert_eq!(available_tags(&[]), vec!["all"]);
    }

    #[test]
    fn test_filter_state() {
        let mut state = FilterState::default();
        assert!(!state.is_active());
        assert_eq!(state.apply(&POSTS).len(), 3);

        state.query = "whitening".to_string();
        assert!(state.is_active());
        assert_eq!(ids(&state.apply(&POSTS)), vec!["conservative-makeover"]);

        state = FilterState::default();
        state.tag = "Planning".to_string();
        assert!(state.is_active());
        assert_eq!(ids(&state.apply(&POSTS)), vec!["smile-design-first-principles"]);
    }
}
