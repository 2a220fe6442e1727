//! Network wiring and the public run entry points.
//!
//! The topology is a single cycle with one external tap: the collator's
//! output feeds the splitter, which fans out to the sink and to the three
//! transformers (x2, x3, x5), and each transformer feeds back into one of
//! the collator's tagged inputs. The orchestrator allocates every edge,
//! seeds the cycle, spawns one task per node, waits for the countdown (or
//! an external abort), then cancels the shared stop token exactly once and
//! joins every worker before returning.

use crate::{
    Error, Factor, Result, Value,
    channel::channel,
    factor::FactorMap,
    node::{
        collator::collator_loop,
        sink::sink_loop,
        splitter::{FanOut, splitter_loop},
        transformer::transformer_loop,
    },
};
use futures::future::join_all;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// The first value injected into the cycle before any worker starts.
const SEED: Value = 1;

/// Produces the first `count` Hamming numbers.
///
/// Blocks (asynchronously) until `count` values have been delivered, then
/// stops every worker and returns. `deliver` is invoked exactly `count`
/// times, sequentially, in strictly increasing order starting at 1.
/// `count = 0` returns immediately without invoking the callback.
///
/// # Example
///
/// ```
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut produced = Vec::new();
/// // Closures can't borrow across the spawn boundary, so collect through a
/// // channel when you need the values back.
/// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
/// hamming::run(10, move |value| {
///     let _ = tx.send(value);
/// })
/// .await
/// .unwrap();
/// while let Ok(value) = rx.try_recv() {
///     produced.push(value);
/// }
/// assert_eq!(produced, [1, 2, 3, 4, 5, 6, 8, 9, 10, 12]);
/// # });
/// ```
///
/// # Errors
///
/// Returns [`Error::ChannelClosed`] if a worker dies before the countdown
/// completes. This does not happen under correct wiring.
pub async fn run<F>(count: usize, deliver: F) -> Result<()>
where
    F: FnMut(Value) + Send + 'static,
{
    run_with_shutdown(count, deliver, CancellationToken::new()).await
}

/// Like [`run`], with a caller-supplied stop token for early abort.
///
/// Cancelling `shutdown` stops every worker promptly and returns `Ok`:
/// cancellation is a normal exit path, not an error. The orchestrator
/// cancels the token itself once the countdown completes, so a finished run
/// leaves it cancelled either way; the cancel is idempotent and completion
/// and abort can race without double-signalling anyone.
///
/// # Errors
///
/// Returns [`Error::ChannelClosed`] if a worker dies before the countdown
/// completes and nobody asked for an abort.
pub async fn run_with_shutdown<F>(
    count: usize,
    deliver: F,
    shutdown: CancellationToken,
) -> Result<()>
where
    F: FnMut(Value) + Send + 'static,
{
    if count == 0 {
        return Ok(());
    }

    // One labelled edge per arrow in the fixed topology.
    let (collator_tx, collator_rx) = channel("collator->splitter");
    let (sink_tx, sink_rx) = channel("splitter->sink");
    let (to_x2_tx, to_x2_rx) = channel("splitter->x2");
    let (to_x3_tx, to_x3_rx) = channel("splitter->x3");
    let (to_x5_tx, to_x5_rx) = channel("splitter->x5");
    let (from_x2_tx, from_x2_rx) = channel("x2->collator");
    let (from_x3_tx, from_x3_rx) = channel("x3->collator");
    let (from_x5_tx, from_x5_rx) = channel("x5->collator");

    // Wiring checks happen here, before anything is spawned. The splitter's
    // set is validated non-empty; the collator's inputs are a FactorMap, so
    // a missing tagged input is unrepresentable.
    let fan_out = FanOut::new(vec![sink_tx, to_x2_tx, to_x3_tx, to_x5_tx])?;
    let collator_inputs = FactorMap::new(from_x2_rx, from_x3_rx, from_x5_rx);

    // Seed the cycle. The collator sits downstream of its own output, so
    // the bootstrap value must be injected onto the collator->splitter edge
    // by hand; the merge produces everything after it.
    collator_tx.send(SEED)?;

    let (done_tx, done_rx) = oneshot::channel();

    let handles = vec![
        tokio::spawn(transformer_loop(
            Factor::Two,
            to_x2_rx,
            from_x2_tx,
            shutdown.clone(),
        )),
        tokio::spawn(transformer_loop(
            Factor::Three,
            to_x3_rx,
            from_x3_tx,
            shutdown.clone(),
        )),
        tokio::spawn(transformer_loop(
            Factor::Five,
            to_x5_rx,
            from_x5_tx,
            shutdown.clone(),
        )),
        tokio::spawn(collator_loop(collator_inputs, collator_tx, shutdown.clone())),
        tokio::spawn(splitter_loop(collator_rx, fan_out, shutdown.clone())),
        tokio::spawn(sink_loop(sink_rx, count, deliver, done_tx, shutdown.clone())),
    ];

    let result = tokio::select! {
        res = done_rx => match res {
            Ok(()) => Ok(()),
            // The completion signal was dropped. If nobody cancelled us a
            // worker died mid-run, which is a wiring failure worth
            // surfacing; otherwise the abort simply won the race.
            Err(_) if shutdown.is_cancelled() => Ok(()),
            Err(_) => Err(Error::ChannelClosed {
                context: "network stopped before the countdown completed",
            }),
        },
        () = shutdown.cancelled() => Ok(()),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!("stopping network ({result:?})");

    shutdown.cancel();
    join_all(handles).await;

    #[cfg(feature = "tracing")]
    tracing::debug!("all workers stopped");

    result
}
