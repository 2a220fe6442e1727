mod channel;
mod error;
mod factor;
mod network;
mod node;

pub use crate::error::*;
pub use crate::factor::Factor;
pub use crate::network::*;

/// Re-exported so callers of [`run_with_shutdown`] don't need a direct
/// `tokio-util` dependency for the stop token.
pub use tokio_util::sync::CancellationToken;

/// Integer type carried by every channel in the network.
///
/// `u64` comfortably covers any realistic target count; the 10,000th Hamming
/// number is still below 2^42. Overflow for absurd counts is a documented
/// limit, not a handled error.
pub type Value = u64;
