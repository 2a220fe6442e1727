//! Worker loops for the network's node roles.
//!
//! Each function here is spawned as its own Tokio task by the orchestrator
//! and runs until the shared stop token is cancelled or a channel endpoint
//! it depends on closes. None of them propagate errors upward: a closed
//! channel during teardown is a normal exit, and the orchestrator detects
//! genuine failures through the lost completion signal instead.
//!
//! ## Structure
//!
//! - [`transformer`] - multiply-by-factor stage on the feedback edges.
//! - [`collator`] - ordered, deduplicating three-way merge.
//! - [`splitter`] - order-preserving broadcast at the fan-out point.
//! - [`sink`] - delivery of the first N values, then drain-after-target.

pub(crate) mod collator;
pub(crate) mod sink;
pub(crate) mod splitter;
pub(crate) mod transformer;

#[cfg(test)]
mod tests;
