pub mod calltree;
pub mod graph;
pub mod index;
pub mod partition;

pub use calltree::CalltreeWriter;
pub use graph::GraphWriter;
pub use index::PathIndex;
pub use partition::{ParentContext, partition_by_parent};

/// Settings shared by the report writers.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Methods whose total-time percentage falls strictly below this are
    /// omitted from the graph report.
    pub min_percent: f64,
    /// Append `file:line` to method rows in the graph report.
    pub print_file: bool,
    /// Multiplier from stored time values to integer display units in the
    /// calltree output (e.g. 1e6 for seconds -> microseconds).
    pub unit_scale: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_percent: 0.0,
            print_file: false,
            unit_scale: 1.0,
        }
    }
}

impl ReportConfig {
    /// Scale a time value to integer display units.
    pub(crate) fn convert(&self, value: f64) -> u64 {
        (value * self.unit_scale).round().max(0.0) as u64
    }
}
