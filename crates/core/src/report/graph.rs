use std::fmt::{self, Write};

use crate::model::{CallEdge, EdgeId, MethodRecord, ProfileData, ThreadRecord};

use super::partition::{ParentContext, partition_by_parent};
use super::ReportConfig;

const PERCENT_WIDTH: usize = 8;
const TIME_WIDTH: usize = 10;
const CALL_WIDTH: usize = 17;
const RULE_WIDTH: usize = 80;

/// Emits the human-readable ranked call-graph report: one block per
/// (method, caller context) pair, threshold-filtered and ordered by total
/// time, with parent and child rollup rows.
///
/// All columns are fixed-width and right-justified so rows align down the
/// page regardless of value magnitude.
pub struct GraphWriter {
    config: ReportConfig,
}

impl GraphWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn write_profile(&self, profile: &ProfileData, out: &mut impl Write) -> fmt::Result {
        for thread in &profile.threads {
            self.write_thread(thread, out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn write_thread(&self, thread: &ThreadRecord, out: &mut impl Write) -> fmt::Result {
        // Longest total time is the wall-clock denominator for percentages.
        let mut ranked: Vec<&MethodRecord> = thread.methods.iter().collect();
        ranked.sort_by(|a, b| a.total_time.total_cmp(&b.total_time));

        let mut denominator = ranked.last().map_or(0.0, |m| m.total_time);
        if denominator == 0.0 {
            denominator = 0.01;
        }

        self.write_heading(thread.id, denominator, out)?;

        for method in ranked.iter().rev() {
            let total_percent = method.total_time / denominator * 100.0;
            let self_percent = method.self_time / denominator * 100.0;
            if total_percent < self.config.min_percent {
                continue;
            }

            for (context, children) in partition_by_parent(thread, method) {
                writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
                if let ParentContext::Caller(id) = context {
                    self.write_parent_row(thread, thread.edge(id), method, out)?;
                }
                self.write_method_row(method, total_percent, self_percent, out)?;
                for child_id in children {
                    self.write_child_row(thread, child_id, out)?;
                }
            }
        }
        Ok(())
    }

    fn write_heading(&self, thread_id: u64, total: f64, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "Thread ID: {thread_id}")?;
        writeln!(out, "Total: {total:.2}")?;
        write!(out, "{:>w$}", "%total", w = PERCENT_WIDTH)?;
        write!(out, "{:>w$}", "%self", w = PERCENT_WIDTH)?;
        write!(out, "{:>w$}", "total", w = TIME_WIDTH)?;
        write!(out, "{:>w$}", "self", w = TIME_WIDTH)?;
        write!(out, "{:>w$}", "wait", w = TIME_WIDTH)?;
        write!(out, "{:>w$}", "child", w = TIME_WIDTH)?;
        write!(out, "{:>w$}", "calls", w = CALL_WIDTH)?;
        writeln!(out, "     name")
    }

    fn write_times(&self, values: [f64; 4], out: &mut impl Write) -> fmt::Result {
        for value in values {
            write!(out, "{value:>w$.2}", w = TIME_WIDTH)?;
        }
        Ok(())
    }

    /// Rollup row for the caller context: the incoming edge's own times and
    /// how many of the method's calls it accounts for.
    fn write_parent_row(
        &self,
        thread: &ThreadRecord,
        context: &CallEdge,
        method: &MethodRecord,
        out: &mut impl Write,
    ) -> fmt::Result {
        write!(out, "{:w$}", "", w = 2 * PERCENT_WIDTH)?;
        self.write_times(
            [
                context.total_time,
                context.self_time,
                context.wait_time,
                context.children_time,
            ],
            out,
        )?;
        let calls = format!("{}/{}", context.called, method.called);
        write!(out, "{calls:>w$}", w = CALL_WIDTH)?;
        // The row is labeled with the calling method: the context edge's
        // parent edge targets it. Caller contexts always have a parent.
        if let Some(parent_id) = context.parent {
            let caller = thread.method(thread.edge(parent_id).target);
            write!(out, "     {}", caller.name)?;
        }
        writeln!(out)
    }

    fn write_method_row(
        &self,
        method: &MethodRecord,
        total_percent: f64,
        self_percent: f64,
        out: &mut impl Write,
    ) -> fmt::Result {
        write!(out, "{total_percent:>w$.2}%", w = PERCENT_WIDTH - 1)?;
        write!(out, "{self_percent:>w$.2}%", w = PERCENT_WIDTH - 1)?;
        self.write_times(
            [
                method.total_time,
                method.self_time,
                method.wait_time,
                method.children_time,
            ],
            out,
        )?;
        write!(out, "{:>w$}", method.called, w = CALL_WIDTH)?;
        write!(out, "     {}", method.name)?;
        if self.config.print_file {
            write!(out, "  {}:{}", method.source_file, method.line)?;
        }
        writeln!(out)
    }

    fn write_child_row(
        &self,
        thread: &ThreadRecord,
        child_id: EdgeId,
        out: &mut impl Write,
    ) -> fmt::Result {
        let child = thread.edge(child_id);
        let target = thread.method(child.target);
        write!(out, "{:w$}", "", w = 2 * PERCENT_WIDTH)?;
        self.write_times(
            [
                child.total_time,
                child.self_time,
                child.wait_time,
                child.children_time,
            ],
            out,
        )?;
        let calls = format!("{}/{}", child.called, target.called);
        write!(out, "{calls:>w$}", w = CALL_WIDTH)?;
        writeln!(out, "     {}", target.name)
    }
}
