use std::collections::HashSet;
use std::hash::Hash;

/// Order-preserving union: every item of `primary`, then every item of
/// `secondary` not seen yet. First occurrence wins on both sides.
pub fn merge<T: Eq + Hash + Clone>(primary: &[T], secondary: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(primary.len() + secondary.len());
    primary
        .iter()
        .chain(secondary)
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn history_first_then_new_scan_results() {
        let history = ["/x", "/y"];
        let scanned = ["/y", "/z"];
        assert_eq!(merge(&history, &scanned), vec!["/x", "/y", "/z"]);
    }

    #[test]
    fn duplicates_within_either_list_are_dropped() {
        let primary = ["a", "b", "a", "c"];
        let secondary = ["d", "c", "d", "e", "b"];
        assert_eq!(merge(&primary, &secondary), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn empty_sides() {
        let empty: [&str; 0] = [];
        assert_eq!(merge(&empty, &["a", "b"]), vec!["a", "b"]);
        assert_eq!(merge(&["a", "b"], &empty), vec!["a", "b"]);
        assert!(merge(&empty, &empty).is_empty());
    }

    #[test]
    fn primary_items_precede_new_secondary_items() {
        let primary = [3, 1, 4, 1, 5];
        let secondary = [9, 2, 6, 5, 3, 5];
        let merged = merge(&primary, &secondary);

        assert_eq!(merged, vec![3, 1, 4, 5, 9, 2, 6]);
        let distinct: HashSet<_> = primary.iter().chain(&secondary).collect();
        assert_eq!(merged.len(), distinct.len());
    }
}
