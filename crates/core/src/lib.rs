//! Path-sensitive call-graph reporting.
//!
//! Converts collected profiling data (per-thread call graphs with timing
//! and call-count data) into the calltree exchange format and a ranked
//! human-readable call-graph report. Unlike an aggregating reporter, every
//! distinct chain of callers keeps its own record in the output.
//!
//! The core assumes well-formed input: call paths that extend their parent
//! edge's path by one segment, non-negative times. A child edge whose path
//! extends no caller context is silently left out of every non-root group
//! rather than reported — required for byte compatibility with existing
//! exchange-format consumers.

pub mod model;
pub mod parsers;
pub mod report;
