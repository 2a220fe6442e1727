use crate::{
    Error,
    channel::{Receiver, Sender},
};
use tokio_util::sync::CancellationToken;

/// Validated, non-empty broadcast set for the splitter.
///
/// Constructed at wiring time so an empty output set is rejected before any
/// worker starts. The network must never start in an inconsistent topology.
pub(crate) struct FanOut(Vec<Sender>);

impl FanOut {
    /// # Errors
    ///
    /// Returns [`Error::EmptyFanOut`] when `outputs` is empty.
    pub(crate) fn new(outputs: Vec<Sender>) -> crate::Result<Self> {
        if outputs.is_empty() {
            return Err(Error::EmptyFanOut);
        }
        Ok(Self(outputs))
    }
}

/// Broadcast stage at the cycle's fan-out point.
///
/// Copies each input value to every output in the set, preserving the
/// per-output stream order. No transformation, no deduplication.
pub(crate) async fn splitter_loop(
    mut input: Receiver,
    outputs: FanOut,
    shutdown: CancellationToken,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!("splitter started ({} outputs)", outputs.0.len());

    'outer: while let Some(value) = input.recv(&shutdown).await {
        for output in &outputs.0 {
            if output.send(value).is_err() {
                break 'outer;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("splitter stopped");
}
