//! Cancellation-aware channel plumbing for the dataflow network.
//!
//! Every edge in the topology is an unbounded FIFO queue of [`Value`]s with
//! a static label used in trace output and channel errors. Sends never
//! block; receives block until a value arrives, the writing side closes, or
//! the shared stop token is cancelled. Racing the queue against the token
//! is what lets a worker blocked mid-read wake up and exit promptly during
//! shutdown.

use crate::{Error, Value};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Creates the sending and receiving halves of one labelled network edge.
pub(crate) fn channel(label: &'static str) -> (Sender, Receiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Sender { tx, label }, Receiver { rx, label })
}

/// Writing half of a network edge.
///
/// Cloneable so the orchestrator can seed an edge that a worker also writes
/// to (the collator's output carries the bootstrap value before the collator
/// itself starts).
#[derive(Clone)]
pub(crate) struct Sender {
    tx: mpsc::UnboundedSender<Value>,
    label: &'static str,
}

impl Sender {
    /// Enqueues a value at the tail. Never blocks: edges are unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelClosed`] if the reading half is gone, which
    /// only happens once the network is tearing down. Workers treat it as
    /// an exit condition, not a failure.
    pub(crate) fn send(&self, value: Value) -> crate::Result<()> {
        self.tx
            .send(value)
            .map_err(|_| Error::ChannelClosed { context: self.label })
    }
}

/// Reading half of a network edge.
pub(crate) struct Receiver {
    rx: mpsc::UnboundedReceiver<Value>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    label: &'static str,
}

impl Receiver {
    /// Dequeues the next value from the head, waiting until one arrives.
    ///
    /// Returns `None` once `shutdown` is cancelled or every writing half has
    /// been dropped; both mean the caller should exit its loop. Values
    /// already delivered before cancellation are never corrupted, they are
    /// simply left undelivered in the queue.
    pub(crate) async fn recv(&mut self, shutdown: &CancellationToken) -> Option<Value> {
        tokio::select! {
            () = shutdown.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::trace!("receiver on {} unblocked by shutdown", self.label);
                None
            }
            value = self.rx.recv() => value,
        }
    }
}
