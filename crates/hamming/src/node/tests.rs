use crate::{
    Error, Factor,
    channel::channel,
    factor::FactorMap,
    node::{
        collator::collator_loop,
        sink::sink_loop,
        splitter::{FanOut, splitter_loop},
        transformer::transformer_loop,
    },
};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn transformer_multiplies_and_preserves_order() {
    let shutdown = CancellationToken::new();
    let (in_tx, in_rx) = channel("test->x3");
    let (out_tx, mut out_rx) = channel("x3->test");
    let handle = tokio::spawn(transformer_loop(
        Factor::Three,
        in_rx,
        out_tx,
        shutdown.clone(),
    ));

    for value in [1, 2, 7] {
        in_tx.send(value).unwrap();
    }
    assert_eq!(out_rx.recv(&shutdown).await, Some(3));
    assert_eq!(out_rx.recv(&shutdown).await, Some(6));
    assert_eq!(out_rx.recv(&shutdown).await, Some(21));

    shutdown.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn splitter_copies_to_every_output_in_order() {
    let shutdown = CancellationToken::new();
    let (in_tx, in_rx) = channel("test->splitter");

    let mut outputs = Vec::new();
    let mut taps = Vec::new();
    for _ in 0..4 {
        let (tx, rx) = channel("splitter->out");
        outputs.push(tx);
        taps.push(rx);
    }
    let fan_out = FanOut::new(outputs).unwrap();
    let handle = tokio::spawn(splitter_loop(in_rx, fan_out, shutdown.clone()));

    for value in [4, 5, 6] {
        in_tx.send(value).unwrap();
    }
    for tap in &mut taps {
        for expected in [4, 5, 6] {
            assert_eq!(tap.recv(&shutdown).await, Some(expected));
        }
    }

    shutdown.cancel();
    handle.await.unwrap();
}

#[test]
fn empty_fan_out_is_rejected_at_wiring_time() {
    assert!(matches!(FanOut::new(Vec::new()), Err(Error::EmptyFanOut)));
}

#[tokio::test]
async fn collator_merges_orders_and_dedups() {
    let shutdown = CancellationToken::new();
    let (in2_tx, in2_rx) = channel("x2->collator");
    let (in3_tx, in3_rx) = channel("x3->collator");
    let (in5_tx, in5_rx) = channel("x5->collator");
    let (out_tx, mut out_rx) = channel("collator->test");

    let inputs = FactorMap::new(in2_rx, in3_rx, in5_rx);
    let handle = tokio::spawn(collator_loop(inputs, out_tx, shutdown.clone()));

    // The streams a seeded cycle would feed back for the prefix 1..=8.
    // 6 arrives on both the x2 and the x3 edge and must be emitted once.
    for value in [2, 4, 6, 8] {
        in2_tx.send(value).unwrap();
    }
    for value in [3, 6, 9, 12] {
        in3_tx.send(value).unwrap();
    }
    for value in [5, 10, 15, 20] {
        in5_tx.send(value).unwrap();
    }

    for expected in [2, 3, 4, 5, 6, 8] {
        assert_eq!(out_rx.recv(&shutdown).await, Some(expected));
    }

    shutdown.cancel();
    assert_eq!(out_rx.recv(&shutdown).await, None);
    handle.await.unwrap();
}

#[tokio::test]
async fn collator_refresh_is_deterministic_from_same_state() {
    // Two collators fed identical inputs must emit identical prefixes; the
    // merge depends only on the held table and watermark, never on timing.
    for _ in 0..2 {
        let shutdown = CancellationToken::new();
        let (in2_tx, in2_rx) = channel("x2->collator");
        let (in3_tx, in3_rx) = channel("x3->collator");
        let (in5_tx, in5_rx) = channel("x5->collator");
        let (out_tx, mut out_rx) = channel("collator->test");

        let inputs = FactorMap::new(in2_rx, in3_rx, in5_rx);
        let handle = tokio::spawn(collator_loop(inputs, out_tx, shutdown.clone()));

        // 10 ties between the x2 and x5 edges and must collapse into a
        // single emission.
        for value in [2, 10] {
            in2_tx.send(value).unwrap();
        }
        for value in [3, 9, 27] {
            in3_tx.send(value).unwrap();
        }
        for value in [5, 10] {
            in5_tx.send(value).unwrap();
        }

        for expected in [2, 3, 5, 9, 10] {
            assert_eq!(out_rx.recv(&shutdown).await, Some(expected));
        }

        shutdown.cancel();
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn sink_delivers_target_then_drains() {
    let shutdown = CancellationToken::new();
    let (in_tx, in_rx) = channel("splitter->sink");
    let (done_tx, done_rx) = oneshot::channel();

    let produced = Arc::new(Mutex::new(Vec::new()));
    let out = Arc::clone(&produced);
    let handle = tokio::spawn(sink_loop(
        in_rx,
        3,
        move |value| out.lock().unwrap().push(value),
        done_tx,
        shutdown.clone(),
    ));

    for value in [1, 2, 3, 4, 5] {
        in_tx.send(value).unwrap();
    }
    done_rx.await.unwrap();
    assert_eq!(*produced.lock().unwrap(), [1, 2, 3]);

    // Values past the target keep flowing but never reach the callback.
    in_tx.send(6).unwrap();
    shutdown.cancel();
    handle.await.unwrap();
    assert_eq!(*produced.lock().unwrap(), [1, 2, 3]);
}
