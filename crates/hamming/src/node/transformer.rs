use crate::{
    Factor,
    channel::{Receiver, Sender},
};
use tokio_util::sync::CancellationToken;

/// Multiplication stage on one of the cycle's feedback edges.
///
/// Takes each value from `input`, multiplies it by `factor`, and forwards
/// the product to `output` in the same relative order. The take blocks; the
/// write never does (edges are unbounded).
pub(crate) async fn transformer_loop(
    factor: Factor,
    mut input: Receiver,
    output: Sender,
    shutdown: CancellationToken,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!("transformer x{factor} started");

    while let Some(value) = input.recv(&shutdown).await {
        if output.send(value * factor.multiplier()).is_err() {
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("transformer x{factor} stopped");
}
