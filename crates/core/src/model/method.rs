use serde::{Deserialize, Serialize};

use super::CallPath;

/// Index of a [`MethodRecord`] within its thread's method arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodId(pub usize);

/// Index of a [`CallEdge`] within its thread's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

/// One distinct calling context of a target method.
///
/// A `CallEdge` is not a single concrete call: it carries the aggregate
/// timing and count for every invocation of `target` reached through this
/// exact ancestor chain. Its `path` extends the parent edge's path by
/// exactly one segment (the target's name); an edge with no parent sits
/// directly under the synthetic profiling root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallEdge {
    pub target: MethodId,
    pub parent: Option<EdgeId>,
    pub path: CallPath,
    /// Inclusive time for this context.
    pub total_time: f64,
    /// Exclusive time for this context.
    pub self_time: f64,
    /// Time spent blocked or waiting.
    pub wait_time: f64,
    /// Time attributed to descendants.
    pub children_time: f64,
    /// Invocation count for this context.
    pub called: u64,
    /// Call-site line number, 0 when unknown.
    pub line: u32,
}

/// Aggregate record for one profiled method, with its incoming and outgoing
/// call edges.
///
/// Immutable during reporting. `total_time >= self_time`, and
/// `total_time ≈ self_time + children_time` up to rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Qualified display name.
    pub name: String,
    /// Defining source file, as resolved upstream.
    pub source_file: String,
    /// Defining line number, 0 when unknown.
    pub line: u32,
    pub total_time: f64,
    pub self_time: f64,
    pub wait_time: f64,
    pub children_time: f64,
    /// Total invocation count across all contexts.
    pub called: u64,
    /// Incoming edges, one per distinct caller context, in first-seen order.
    pub callers: Vec<EdgeId>,
    /// Outgoing edges, in their natural order.
    pub children: Vec<EdgeId>,
}
