//! Prefix filtering over option lists
//!
//! The console narrows long vendor/model listings by a typed prefix. The
//! match is case-sensitive and anchored at the start of the display text.

/// Keep only the entries whose display text starts with `prefix`
///
/// An empty prefix keeps everything.
pub fn filter_by_prefix<T>(items: Vec<T>, prefix: &str, name: impl Fn(&T) -> &str) -> Vec<T> {
    if prefix.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| name(item).starts_with(prefix))
        .collect()
}

/// First entry whose display text starts with `prefix`
///
/// Mirrors pick-first selection: an empty prefix selects nothing.
pub fn find_by_prefix<'a, T>(
    items: &'a [T],
    prefix: &str,
    name: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    if prefix.is_empty() {
        return None;
    }

    items.iter().find(|item| name(item).starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec![
            "Sony".to_string(),
            "Samsung".to_string(),
            "Sharp".to_string(),
            "Panasonic".to_string(),
        ]
    }

    #[test]
    fn test_filter_keeps_prefix_matches_only() {
        let filtered = filter_by_prefix(names(), "S", |name| name.as_str());
        assert_eq!(filtered, vec!["Sony", "Samsung", "Sharp"]);

        let filtered = filter_by_prefix(names(), "Sa", |name| name.as_str());
        assert_eq!(filtered, vec!["Samsung"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let filtered = filter_by_prefix(names(), "s", |name| name.as_str());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_prefix_keeps_everything() {
        let filtered = filter_by_prefix(names(), "", |name| name.as_str());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_find_picks_the_first_match() {
        let items = names();

        let found = find_by_prefix(&items, "S", |name| name.as_str());
        assert_eq!(found.map(String::as_str), Some("Sony"));

        assert!(find_by_prefix(&items, "X", |name| name.as_str()).is_none());
        assert!(find_by_prefix(&items, "", |name| name.as_str()).is_none());
    }
}
