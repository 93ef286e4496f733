use std::collections::HashMap;
use thiserror::Error;

use crate::model::{
    CallEdge, CallPath, EdgeId, MethodId, MethodRecord, ProfileData, ProfileMetadata, ThreadRecord,
};

#[derive(Debug, Error)]
pub enum CollapsedParseError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("no valid stack lines found")]
    Empty,
}

/// Parse Brendan Gregg's collapsed/folded stack format.
///
/// Each line has the format: `stack_frame;stack_frame;... count`
/// where frames are separated by `;` and the count is the last
/// whitespace-separated token.
///
/// Every distinct stack prefix becomes one call edge carrying its own
/// [`CallPath`], so the resulting profile is path-sensitive from the start:
/// samples of `main;bar;foo` and `main;baz;foo` land on two different edges
/// targeting the same `foo` method record. Counts are the time unit
/// (`measure` = "samples").
pub fn parse_collapsed(data: &[u8]) -> Result<ProfileData, CollapsedParseError> {
    let text = std::str::from_utf8(data)?;
    let mut builder = ThreadBuilder::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Split into stack and count: "a;b;c 42"
        let Some(pos) = line.rfind(' ') else { continue };
        let count: f64 = line[pos + 1..].trim().parse().unwrap_or(1.0);
        let stack_str = line[..pos].trim();
        if stack_str.is_empty() {
            continue;
        }

        let frames: Vec<&str> = stack_str
            .split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        if frames.is_empty() {
            continue;
        }
        builder.record_stack(&frames, count);
    }

    let thread = builder.finish();
    if thread.methods.is_empty() {
        return Err(CollapsedParseError::Empty);
    }

    Ok(ProfileData {
        metadata: ProfileMetadata {
            name: None,
            measure: "samples".to_string(),
            format: "collapsed".to_string(),
        },
        threads: vec![thread],
    })
}

#[derive(Default)]
struct ThreadBuilder {
    methods: Vec<MethodRecord>,
    method_ids: HashMap<String, MethodId>,
    edges: Vec<CallEdge>,
    edge_ids: HashMap<Vec<String>, EdgeId>,
}

impl ThreadBuilder {
    /// Accumulate one folded stack: `count` units of inclusive time on
    /// every prefix edge, exclusive time on the leaf edge.
    fn record_stack(&mut self, frames: &[&str], count: f64) {
        let mut parent: Option<EdgeId> = None;
        let mut path = CallPath::default();

        for (depth, name) in frames.iter().enumerate() {
            path = path.child(name);
            let edge_id = self.edge_for(&path, parent);

            let edge = &mut self.edges[edge_id.0];
            edge.total_time += count;
            edge.called += count.round() as u64;
            if depth == frames.len() - 1 {
                edge.self_time += count;
            }
            parent = Some(edge_id);
        }
    }

    fn method_for(&mut self, name: &str) -> MethodId {
        if let Some(&id) = self.method_ids.get(name) {
            return id;
        }
        let id = MethodId(self.methods.len());
        self.methods.push(MethodRecord {
            name: name.to_string(),
            // Folded stacks carry no source locations.
            source_file: "???".to_string(),
            line: 0,
            total_time: 0.0,
            self_time: 0.0,
            wait_time: 0.0,
            children_time: 0.0,
            called: 0,
            callers: Vec::new(),
            children: Vec::new(),
        });
        self.method_ids.insert(name.to_string(), id);
        id
    }

    fn edge_for(&mut self, path: &CallPath, parent: Option<EdgeId>) -> EdgeId {
        if let Some(&id) = self.edge_ids.get(path.segments()) {
            return id;
        }
        let name = path.method_name().unwrap_or_default().to_string();
        let target = self.method_for(&name);
        let id = EdgeId(self.edges.len());
        self.edges.push(CallEdge {
            target,
            parent,
            path: path.clone(),
            total_time: 0.0,
            self_time: 0.0,
            wait_time: 0.0,
            children_time: 0.0,
            called: 0,
            line: 0,
        });
        self.edge_ids.insert(path.segments().to_vec(), id);

        // Register the new context on both endpoints.
        self.methods[target.0].callers.push(id);
        if let Some(parent_id) = parent {
            let caller = self.edges[parent_id.0].target;
            self.methods[caller.0].children.push(id);
        }
        id
    }

    fn finish(mut self) -> ThreadRecord {
        for edge in &mut self.edges {
            edge.children_time = edge.total_time - edge.self_time;
        }
        // Method aggregates are the sums over their incoming contexts.
        // Recursive stacks attribute cost once per nesting level, matching
        // the inclusive edge costs the reports expect.
        for edge in &self.edges {
            let method = &mut self.methods[edge.target.0];
            method.total_time += edge.total_time;
            method.self_time += edge.self_time;
            method.called += edge.called;
        }
        for method in &mut self.methods {
            method.children_time = method.total_time - method.self_time;
        }
        ThreadRecord {
            id: 0,
            methods: self.methods,
            edges: self.edges,
        }
    }
}
