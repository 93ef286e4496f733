use crate::model::{EdgeId, MethodRecord, ThreadRecord};

/// The caller context a method's children are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentContext {
    /// No caller — top of stack.
    Root,
    /// A specific incoming edge of the method.
    Caller(EdgeId),
}

/// Partition a method's outgoing edges by the incoming context that
/// produced them.
///
/// Each incoming edge that itself has a parent forms its own group, keeping
/// only the children whose call path extends that incoming edge's path —
/// the containment test is against the exact ancestor chain, not the caller
/// method's identity, which is what keeps distinct paths separate. All
/// parentless incoming edges collapse into a single [`ParentContext::Root`]
/// group holding every child unconditionally, inserted where the first such
/// edge appears. A method with no incoming edges at all (the program's
/// top-level entry) yields exactly one `Root` group.
///
/// A child whose path extends no caller context is silently absent from
/// every non-root group; see the crate docs on malformed paths.
pub fn partition_by_parent(
    thread: &ThreadRecord,
    method: &MethodRecord,
) -> Vec<(ParentContext, Vec<EdgeId>)> {
    let mut groups: Vec<(ParentContext, Vec<EdgeId>)> = Vec::new();
    let mut root_seen = false;

    for &caller_id in &method.callers {
        let caller = thread.edge(caller_id);
        if caller.parent.is_some() {
            let children = method
                .children
                .iter()
                .copied()
                .filter(|&child| thread.edge(child).path.extends(&caller.path))
                .collect();
            groups.push((ParentContext::Caller(caller_id), children));
        } else if !root_seen {
            root_seen = true;
            groups.push((ParentContext::Root, method.children.clone()));
        }
    }

    if method.callers.is_empty() {
        groups.push((ParentContext::Root, method.children.clone()));
    }

    groups
}
