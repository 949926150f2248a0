// src/queue/mod.rs

//! Queue construction, execution and reporting.
//!
//! - [`graph`] holds the ordered task storage and the parent-edge
//!   operations with their structural checks.
//! - [`runner`] contains the sequential execution pass with the
//!   first-succeeding-parent fallback scan.
//! - [`report`] renders per-task status lines and the dependency chain.

pub mod graph;
pub mod report;
pub mod runner;

pub use graph::Queue;
pub use runner::RunEntry;
