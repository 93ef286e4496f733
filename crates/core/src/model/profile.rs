use serde::{Deserialize, Serialize};

use super::{CallEdge, EdgeId, MethodId, MethodRecord};

/// One profiled thread: its method records plus the arena of call edges
/// they reference.
///
/// Edge and method ids are indices into these vectors and are only
/// meaningful within the owning thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub id: u64,
    pub methods: Vec<MethodRecord>,
    pub edges: Vec<CallEdge>,
}

impl ThreadRecord {
    pub fn method(&self, id: MethodId) -> &MethodRecord {
        &self.methods[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &CallEdge {
        &self.edges[id.0]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub name: Option<String>,
    /// What the time values measure (e.g. "wall_time", "process_time",
    /// "samples"). Echoed in the calltree `events:` header.
    pub measure: String,
    /// Source format identifier (e.g. "collapsed", "json").
    pub format: String,
}

/// A fully collected profiling result, ready for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub metadata: ProfileMetadata,
    pub threads: Vec<ThreadRecord>,
}
