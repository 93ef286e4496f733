use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter used when rendering a path as a single string.
pub const PATH_DELIMITER: &str = "->";

/// Parent key of a path with a single segment (a direct child of the
/// profiling root).
pub const ROOT_KEY: &str = "root";

/// The ordered chain of method names from the profiling root down to and
/// including a call edge's target.
///
/// Stored as an explicit segment sequence, not a delimited string, so that
/// ancestry checks are structural and method names containing the delimiter
/// cannot produce false matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallPath {
    segments: Vec<String>,
}

impl CallPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The path one level deeper, ending in `name`.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(name.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Name of the method this path ends in.
    pub fn method_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The ancestor portion of the path rendered as an index key, or
    /// [`ROOT_KEY`] when the path has at most one segment.
    pub fn parent_key(&self) -> String {
        match self.segments.split_last() {
            Some((_, ancestors)) if !ancestors.is_empty() => ancestors.join(PATH_DELIMITER),
            _ => ROOT_KEY.to_string(),
        }
    }

    /// Structural ancestry test: does this path start with every segment of
    /// `ancestor`, in order?
    ///
    /// A path extends itself. This replaces the substring containment the
    /// exchange format historically relied on, which could conflate paths
    /// when a method name itself contained the delimiter.
    pub fn extends(&self, ancestor: &CallPath) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }
}

impl fmt::Display for CallPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(PATH_DELIMITER))
    }
}

impl<S: Into<String>> FromIterator<S> for CallPath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extends_is_a_segment_prefix_relation() {
        let abc: CallPath = ["a", "b", "c"].into_iter().collect();
        let ab: CallPath = ["a", "b"].into_iter().collect();
        let ax: CallPath = ["a", "x"].into_iter().collect();

        assert!(abc.extends(&ab));
        assert!(!abc.extends(&ax));
        assert!(abc.extends(&abc));
        assert!(!ab.extends(&abc));
    }

    #[test]
    fn delimiter_in_method_name_does_not_confuse_ancestry() {
        // Serialized, "a->b->c" contains "b->c" as a substring; structurally
        // the two-segment path ["b->c"] extends nothing here.
        let weird: CallPath = ["a", "b->c"].into_iter().collect();
        let bc: CallPath = ["b", "c"].into_iter().collect();
        assert!(!weird.extends(&bc));
        assert!(!bc.extends(&weird));
    }

    #[test]
    fn parent_key_of_shallow_paths_is_root() {
        let single: CallPath = ["main"].into_iter().collect();
        assert_eq!(single.parent_key(), "root");
        assert_eq!(CallPath::default().parent_key(), "root");

        let deep: CallPath = ["main", "bar", "foo"].into_iter().collect();
        assert_eq!(deep.parent_key(), "main->bar");
    }

    #[test]
    fn display_joins_segments() {
        let path: CallPath = ["main", "foo"].into_iter().collect();
        assert_eq!(path.to_string(), "main->foo");
        assert_eq!(path.child("baz").to_string(), "main->foo->baz");
    }
}
