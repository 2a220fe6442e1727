use crate::{
    Factor, Value,
    channel::{Receiver, Sender},
    factor::FactorMap,
};
use tokio_util::sync::CancellationToken;

/// Ordered, deduplicating merge of the three tagged feedback edges.
///
/// The collator holds exactly one looked-ahead value per tagged input and a
/// watermark recording the last value it emitted. One round of the loop:
///
/// 1. Refresh every stale slot. A slot is stale when its held value is at or
///    below the watermark, meaning the merge has already consumed it. All
///    slots start at zero, so the first round pulls from all three inputs.
///    Never pulling from a fresh slot is what bounds the lookahead to one
///    value per input and guarantees the refresh step terminates.
/// 2. Emit the minimum of the three held values and advance the watermark
///    to it. When inputs tie for the minimum, the lowest factor wins
///    ([`Factor::ALL`] order); the losing slots keep their value, become
///    stale the moment the watermark advances, and are pulled forward next
///    round without ever being re-emitted. That is the whole deduplication
///    story: equal values arriving on different edges collapse into one
///    emission.
///
/// The emitted stream is strictly increasing with no duplicates, and the
/// table never grows. The bootstrap value 1 is injected onto this node's
/// output edge by the orchestrator, since the collator sits downstream of
/// the very cycle it feeds.
pub(crate) async fn collator_loop(
    mut inputs: FactorMap<Receiver>,
    output: Sender,
    shutdown: CancellationToken,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!("collator started");

    let mut held: FactorMap<Value> = FactorMap::default();
    let mut watermark: Value = 0;

    loop {
        for factor in Factor::ALL {
            if held[factor] <= watermark {
                match inputs[factor].recv(&shutdown).await {
                    Some(value) => held[factor] = value,
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::trace!("collator stopped");
                        return;
                    }
                }
            }
        }

        let mut next = Value::MAX;
        for factor in Factor::ALL {
            if held[factor] < next {
                next = held[factor];
            }
        }

        watermark = next;
        if output.send(next).is_err() {
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("collator stopped");
}
