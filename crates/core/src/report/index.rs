use std::collections::HashMap;

use crate::model::CallPath;

/// Assigns a small, stable integer to each distinct (method, ancestor path)
/// pair, in first-seen order.
///
/// Counters are independent per method name: the first context of every
/// method receives index 1. Entries are never evicted, so re-encountering a
/// context anywhere later in the same run returns the original index — this
/// is what keeps `fn=name(i)` / `cfn=name(i)` references consistent across
/// blocks in the calltree output.
///
/// One report run owns one `PathIndex`; it is passed into each writer
/// invocation rather than held as shared state, and must not be reused
/// across concurrent report generations.
#[derive(Debug, Default)]
pub struct PathIndex {
    by_method: HashMap<String, HashMap<String, u32>>,
}

impl PathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for the path's (method, ancestor path) pair, assigning the next
    /// per-method integer (starting at 1) on first sight.
    pub fn index_of(&mut self, path: &CallPath) -> u32 {
        let method = path.method_name().unwrap_or_default();
        let by_parent = self.by_method.entry(method.to_string()).or_default();
        let next = by_parent.len() as u32 + 1;
        *by_parent.entry(path.parent_key()).or_insert(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> CallPath {
        segments.iter().copied().collect()
    }

    #[test]
    fn assigns_in_first_seen_order_and_memoizes() {
        let mut index = PathIndex::new();
        assert_eq!(index.index_of(&path(&["main", "bar", "foo"])), 1);
        assert_eq!(index.index_of(&path(&["main", "baz", "foo"])), 2);
        // Re-encountering either context returns the original index.
        assert_eq!(index.index_of(&path(&["main", "bar", "foo"])), 1);
        assert_eq!(index.index_of(&path(&["main", "baz", "foo"])), 2);
    }

    #[test]
    fn counters_are_independent_per_method() {
        let mut index = PathIndex::new();
        assert_eq!(index.index_of(&path(&["main", "foo"])), 1);
        assert_eq!(index.index_of(&path(&["main", "bar"])), 1);
        assert_eq!(index.index_of(&path(&["other", "foo"])), 2);
    }

    #[test]
    fn single_segment_paths_share_the_root_key() {
        let mut index = PathIndex::new();
        assert_eq!(index.index_of(&path(&["main"])), 1);
        assert_eq!(index.index_of(&path(&["main"])), 1);
    }

    #[test]
    fn deterministic_across_runs() {
        let sequence = [
            path(&["a", "x"]),
            path(&["b", "x"]),
            path(&["a", "y", "x"]),
            path(&["b", "x"]),
        ];
        let run = || {
            let mut index = PathIndex::new();
            sequence.iter().map(|p| index.index_of(p)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
        assert_eq!(run(), vec![1, 2, 3, 2]);
    }
}
