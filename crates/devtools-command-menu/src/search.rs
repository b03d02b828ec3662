//! Fuzzy filtering of delegate-provided list items

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::command::KEY_SEPARATOR;

/// Items offered to a fuzzy-filtered list
///
/// The list asks the delegate for item keys to match the query against and
/// for a score to rank the surviving items.
pub trait ListDelegate {
    fn item_count(&self) -> usize;

    /// Key matched against the query; `None` for out-of-range indices
    fn item_key_at(&self, index: usize) -> Option<&str>;

    /// Rank of an item for a query, higher is better
    fn item_score_at(&self, index: usize, query: &str) -> u32;

    /// Act on the chosen item; `None` when nothing is selected
    fn select_item(&self, index: Option<usize>, prompt_value: &str);

    fn case_sensitive(&self) -> bool {
        false
    }
}

/// Compile the query into a single fuzzy atom
///
/// Whitespace stays part of the needle. Accents in the haystack are folded
/// only when the query itself has none, so "cafe" and "café" both find
/// "Café".
fn query_atom(query: &str, case_sensitive: bool) -> Atom {
    let case = if case_sensitive {
        CaseMatching::Respect
    } else {
        CaseMatching::Ignore
    };
    Atom::new(query, case, Normalization::Smart, AtomKind::Fuzzy, false)
}

/// Filter and rank the delegate's items for a query
///
/// An item survives when the query fuzzy matches at least one
/// separator-delimited segment of its key. Survivors are ordered by the
/// delegate's score (highest first); equal scores keep delegate order.
///
/// # Returns
///
/// Vector of (item index, score) pairs. A blank query returns every item in
/// delegate order with score 0.
pub fn filter_items<D: ListDelegate + ?Sized>(delegate: &D, query: &str) -> Vec<(usize, u32)> {
    // Empty query - return all items
    if query.trim().is_empty() {
        return (0..delegate.item_count()).map(|i| (i, 0)).collect();
    }

    let atom = query_atom(query, delegate.case_sensitive());
    let mut matcher = Matcher::new(Config::DEFAULT);

    // Reusable buffer for UTF-32 conversion
    let mut haystack_buf = Vec::new();

    let mut results: Vec<(usize, u32)> = (0..delegate.item_count())
        .filter(|&index| {
            let Some(key) = delegate.item_key_at(index) else {
                return false;
            };

            key.split(KEY_SEPARATOR).any(|segment| {
                haystack_buf.clear();
                let haystack = Utf32Str::new(segment, &mut haystack_buf);
                atom.score(haystack, &mut matcher).is_some()
            })
        })
        .map(|index| (index, delegate.item_score_at(index, query)))
        .collect();

    // Stable sort keeps delegate order for equal scores
    results.sort_by(|a, b| b.1.cmp(&a.1));

    log::trace!(
        "Query '{}' matched {} of {} items",
        query,
        results.len(),
        delegate.item_count()
    );

    results
}

/// Pick the best item for a query and hand it to the delegate
///
/// Returns the selected index, or `None` when nothing matched.
pub fn select_best<D: ListDelegate + ?Sized>(delegate: &D, query: &str) -> Option<usize> {
    let best = filter_items(delegate, query).first().map(|(index, _)| *index);
    delegate.select_item(best, query);
    best
}

/// Character indices of `text` matched by `query`, for highlighting
///
/// Indices are sorted and unique; empty when the query does not match.
pub fn highlight_indices(text: &str, query: &str, case_sensitive: bool) -> Vec<usize> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let atom = query_atom(query, case_sensitive);
    let mut matcher = Matcher::new(Config::DEFAULT);

    let mut haystack_buf = Vec::new();
    let mut indices = Vec::new();

    let haystack = Utf32Str::new(text, &mut haystack_buf);
    if atom.indices(haystack, &mut matcher, &mut indices).is_none() {
        return Vec::new();
    }

    indices.sort_unstable();
    indices.dedup();
    indices.into_iter().map(|i| i as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct TestList {
        keys: Vec<String>,
        scores: Vec<u32>,
        selected: RefCell<Vec<Option<usize>>>,
        case: bool,
    }

    impl TestList {
        fn new(items: &[(&str, u32)]) -> Self {
            Self {
                keys: items.iter().map(|(k, _)| k.to_string()).collect(),
                scores: items.iter().map(|(_, s)| *s).collect(),
                selected: RefCell::new(Vec::new()),
                case: false,
            }
        }
    }

    impl ListDelegate for TestList {
        fn item_count(&self) -> usize {
            self.keys.len()
        }

        fn item_key_at(&self, index: usize) -> Option<&str> {
            self.keys.get(index).map(String::as_str)
        }

        fn item_score_at(&self, index: usize, _query: &str) -> u32 {
            self.scores.get(index).copied().unwrap_or(0)
        }

        fn select_item(&self, index: Option<usize>, _prompt_value: &str) {
            self.selected.borrow_mut().push(index);
        }

        fn case_sensitive(&self) -> bool {
            self.case
        }
    }

    #[test]
    fn test_empty_query_returns_all() {
        let list = TestList::new(&[("Panel\0Show Console\0", 1), ("Panel\0Show Network\0", 5)]);
        let results = filter_items(&list, "");
        assert_eq!(results, vec![(0, 0), (1, 0)]);

        let results = filter_items(&list, "   ");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_fuzzy_match() {
        let list = TestList::new(&[("Panel\0Show Console\0", 1), ("Panel\0Show Network\0", 5)]);
        let results = filter_items(&list, "ntwk");
        assert_eq!(results, vec![(1, 5)]);
    }

    #[test]
    fn test_case_insensitive() {
        let list = TestList::new(&[("Panel\0Show Network\0", 1)]);
        assert_eq!(filter_items(&list, "NETWORK").len(), 1);
    }

    #[test]
    fn test_no_match() {
        let list = TestList::new(&[("Panel\0Show Network\0", 1)]);
        assert!(filter_items(&list, "xyz123").is_empty());
    }

    #[test]
    fn test_match_does_not_span_segments() {
        // "lsh" would need 'l' from the category and "sh" from the title
        let list = TestList::new(&[("Panel\0Show Network\0", 1)]);
        assert!(filter_items(&list, "lsh").is_empty());
    }

    #[test]
    fn test_search_includes_tags() {
        let list = TestList::new(&[("Panel\0Show Network\0http\0xhr", 1)]);
        assert_eq!(filter_items(&list, "xhr").len(), 1);
    }

    #[test]
    fn test_scoring_order_is_stable() {
        let list = TestList::new(&[
            ("A\0show a\0", 1),
            ("B\0show b\0", 7),
            ("C\0show c\0", 1),
            ("D\0show d\0", 7),
        ]);
        let order: Vec<usize> = filter_items(&list, "show").into_iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_select_best() {
        let list = TestList::new(&[("A\0show a\0", 1), ("B\0show b\0", 7)]);
        assert_eq!(select_best(&list, "show"), Some(1));
        assert_eq!(select_best(&list, "qqq"), None);
        assert_eq!(*list.selected.borrow(), vec![Some(1), None]);
    }

    #[test]
    fn test_highlight_indices() {
        assert_eq!(highlight_indices("Show Network", "net", false), vec![5, 6, 7]);
        assert!(highlight_indices("Show Network", "xyz", false).is_empty());
        assert!(highlight_indices("Show Network", "", false).is_empty());
    }

    #[test]
    fn test_accented_title_matches() {
        let list = TestList::new(&[("Panel\0Show Café\0", 2), ("Panel\0Show Network\0", 2)]);
        assert_eq!(filter_items(&list, "café"), vec![(0, 2)]);
        assert_eq!(filter_items(&list, "CAFÉ"), vec![(0, 2)]);
        // Unaccented queries still fold the title's accents
        assert_eq!(filter_items(&list, "cafe"), vec![(0, 2)]);

        assert_eq!(highlight_indices("Show Café", "café", false), vec![5, 6, 7, 8]);
        assert_eq!(highlight_indices("Show Café", "cafe", false), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_case_sensitive_query() {
        let mut list = TestList::new(&[("Panel\0Show Network\0", 1)]);
        list.case = true;
        assert!(filter_items(&list, "network").is_empty());
        assert_eq!(filter_items(&list, "Network").len(), 1);
        assert!(highlight_indices("Show Network", "network", true).is_empty());
    }
}
