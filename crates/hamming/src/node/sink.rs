use crate::{Value, channel::Receiver};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// Terminal stage: hands the first `count` values to the caller's callback.
///
/// The callback runs inline on this task, so invocations are sequential and
/// ordered. Once the countdown reaches zero the `done` signal fires exactly
/// once, and the loop keeps draining its input without invoking the
/// callback until stopped. Upstream workers never learn that the sink has
/// finished; draining keeps them from wedging on a queue nobody reads.
pub(crate) async fn sink_loop<F>(
    mut input: Receiver,
    count: usize,
    mut deliver: F,
    done: oneshot::Sender<()>,
    shutdown: CancellationToken,
) where
    F: FnMut(Value),
{
    #[cfg(feature = "tracing")]
    tracing::trace!("sink started (target {count})");

    let mut remaining = count;
    let mut done = Some(done);

    while let Some(value) = input.recv(&shutdown).await {
        if remaining > 0 {
            deliver(value);
            remaining -= 1;
            if remaining == 0 {
                if let Some(done) = done.take() {
                    // The orchestrator only disappears when it was cancelled
                    // externally, in which case there is nobody to notify.
                    let _ = done.send(());
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("sink stopped ({remaining} undelivered)");
}
