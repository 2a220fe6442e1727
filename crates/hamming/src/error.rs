//! Error types for the Hamming network.
//!
//! The taxonomy is deliberately small. Misconfiguration is detected once, at
//! wiring time, before any worker starts. Cancellation is a normal exit path
//! for every worker and never surfaces here.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for wiring and running the network.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The splitter was wired with an empty output set.
    #[error("splitter requires at least one output channel")]
    EmptyFanOut,

    /// An internal channel endpoint closed while the network still needed
    /// it (e.g. a worker died before the countdown completed).
    #[error("channel closed unexpectedly: {context}")]
    ChannelClosed { context: &'static str },
}
