use std::fmt::{self, Write};

use crate::model::{EdgeId, MethodRecord, ProfileData, ThreadRecord};

use super::partition::{ParentContext, partition_by_parent};
use super::{PathIndex, ReportConfig};

/// Emits the calltree exchange format consumed by kcachegrind and
/// compatible tools, one block per (method, caller context) pair.
///
/// Same-named functions reached via different ancestor chains are kept
/// apart by suffixing the name with the context's [`PathIndex`] integer, so
/// downstream tools see two distinct functions instead of one aggregate.
pub struct CalltreeWriter {
    config: ReportConfig,
}

impl CalltreeWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Write the file header and every thread's blocks.
    ///
    /// `index` carries the path-to-integer assignments for this run; the
    /// caller constructs one per report and must not share it across
    /// concurrent generations.
    pub fn write_profile(
        &self,
        profile: &ProfileData,
        index: &mut PathIndex,
        out: &mut impl Write,
    ) -> fmt::Result {
        writeln!(out, "events: {}", profile.metadata.measure)?;
        writeln!(out)?;
        for thread in &profile.threads {
            self.write_thread(thread, index, out)?;
        }
        Ok(())
    }

    /// Write one thread's methods, deepest-registered first.
    pub fn write_thread(
        &self,
        thread: &ThreadRecord,
        index: &mut PathIndex,
        out: &mut impl Write,
    ) -> fmt::Result {
        for method in thread.methods.iter().rev() {
            for (context, children) in partition_by_parent(thread, method) {
                self.write_block(thread, method, context, &children, index, out)?;
            }
        }
        Ok(())
    }

    fn write_block(
        &self,
        thread: &ThreadRecord,
        method: &MethodRecord,
        context: ParentContext,
        children: &[EdgeId],
        index: &mut PathIndex,
        out: &mut impl Write,
    ) -> fmt::Result {
        writeln!(out, "fl={}", method.source_file)?;
        match context {
            ParentContext::Root => writeln!(out, "fn={}", method.name)?,
            ParentContext::Caller(id) => {
                // The suffix is assigned from the incoming context's own
                // path, so every distinct ancestor chain gets its own
                // function identity.
                let suffix = index.index_of(&thread.edge(id).path);
                writeln!(out, "fn={}({suffix})", method.name)?;
            }
        }
        writeln!(out, "{} {}", method.line, self.config.convert(method.self_time))?;

        for &child_id in children {
            let child = thread.edge(child_id);
            let target = thread.method(child.target);
            writeln!(out, "cfl={}", target.source_file)?;
            writeln!(out, "cfn={}({})", target.name, index.index_of(&child.path))?;
            writeln!(out, "calls={} {}", child.called, child.line)?;
            writeln!(out, "{} {}", child.line, self.config.convert(child.total_time))?;
        }
        writeln!(out)
    }
}
