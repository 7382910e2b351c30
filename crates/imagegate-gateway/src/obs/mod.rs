//! Decision metrics (in-process, channel-fed).
//!
//! Producers send one event per policed decision into a bounded channel; a
//! single aggregation task owns the counters. Snapshot requests travel
//! through the same FIFO channel, so a snapshot reflects every record whose
//! enqueue completed before the snapshot was requested.

pub mod metrics;

pub use metrics::{DecisionSnapshot, MetricsHandle, EVENT_QUEUE_CAPACITY};
