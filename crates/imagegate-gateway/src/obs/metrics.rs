//! Decision-outcome counters and Prometheus rendering.
//!
//! One monotone counter per [`ReasonCode`], seeded to zero before the first
//! record so the exported label set is complete from the first scrape.
//! The aggregation task is the sole owner of the counters; producers and
//! snapshot readers reach it through one bounded FIFO channel.

use std::fmt::Write;

use tokio::sync::{mpsc, oneshot};

use imagegate_core::decision::ReasonCode;
use imagegate_core::error::{ImageGateError, Result};

/// Max in-flight decision events. Producers await capacity when the queue is
/// full: a slow aggregator throttles request throughput instead of dropping
/// decision counts.
pub const EVENT_QUEUE_CAPACITY: usize = 128;

/// Metric name for decision outcomes.
pub const DECISIONS_METRIC: &str = "imagegate_decisions_total";

enum Event {
    Record(ReasonCode),
    Snapshot(oneshot::Sender<DecisionSnapshot>),
}

/// Point-in-time view of all decision counters, in exposition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionSnapshot {
    counts: [(ReasonCode, u64); 6],
}

impl DecisionSnapshot {
    /// All `(label, count)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counts.iter().map(|(r, c)| (r.as_label(), *c))
    }

    /// Count for a single reason code.
    pub fn count(&self, reason: ReasonCode) -> u64 {
        self.counts
            .iter()
            .find(|(r, _)| *r == reason)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}

/// Cloneable producer/reader handle to the aggregation task.
#[derive(Clone)]
pub struct MetricsHandle {
    tx: mpsc::Sender<Event>,
}

impl MetricsHandle {
    /// Spawn the aggregation task and return its handle.
    ///
    /// Counters start at zero for every reason code. Must be called from
    /// within a tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        tokio::spawn(aggregate(rx));
        Self { tx }
    }

    /// Enqueue a one-count increment for `reason`.
    ///
    /// Awaits channel capacity when the queue is saturated (backpressure).
    pub async fn record(&self, reason: ReasonCode) {
        if self.tx.send(Event::Record(reason)).await.is_err() {
            // The aggregation task only stops at shutdown.
            tracing::warn!(
                reason = reason.as_label(),
                "metrics channel closed; decision not counted"
            );
        }
    }

    /// Read the current value of every counter.
    ///
    /// Reflects every `record` whose enqueue completed before this call
    /// began: the channel is FIFO and the snapshot request queues behind
    /// those events.
    pub async fn snapshot(&self) -> Result<DecisionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Event::Snapshot(reply_tx))
            .await
            .map_err(|_| ImageGateError::Internal("metrics channel closed".into()))?;
        reply_rx
            .await
            .map_err(|_| ImageGateError::Internal("metrics task dropped snapshot request".into()))
    }
}

async fn aggregate(mut rx: mpsc::Receiver<Event>) {
    let mut counts = ReasonCode::ALL.map(|r| (r, 0u64));

    while let Some(event) = rx.recv().await {
        match event {
            Event::Record(reason) => {
                if let Some(slot) = counts.iter_mut().find(|(r, _)| *r == reason) {
                    slot.1 += 1;
                }
            }
            Event::Snapshot(reply) => {
                let _ = reply.send(DecisionSnapshot { counts });
            }
        }
    }
}

/// Render a snapshot in Prometheus text exposition format.
pub fn render(snapshot: &DecisionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# TYPE {DECISIONS_METRIC} counter");
    for (label, count) in snapshot.entries() {
        let _ = writeln!(out, "{DECISIONS_METRIC}{{state=\"{label}\"}} {count}");
    }
    out
}
