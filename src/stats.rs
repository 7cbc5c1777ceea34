//! Runtime statistics and data structures.
//!
//! [Stats] accumulates per-probe results and emits a final [Summary].
//! Both [ProbeResult] and [Summary] are serde-serialisable so the
//! formatting layer can dump them directly.

use serde::Serialize;
use std::net::SocketAddr;

/// Terminal outcome of one probe cycle.
///
/// Every sequence number ends in exactly one of these; there is no
/// retry state.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The echo arrived before the deadline.
    Replied {
        rtt_ms: f64,
        from: SocketAddr,
        data: String,
    },
    /// No usable reply before the deadline. Transport failures are
    /// folded in here as well: they count as loss, not as run errors.
    TimedOut,
}

/// Result of a single probe, in send order.
#[derive(Clone, Debug, Serialize)]
pub struct ProbeResult {
    pub seq: usize,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

/// RTT aggregate over the replied probes only.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RttSummary {
    pub min_ms: f64,
    pub avg_ms: f64,
    pub max_ms: f64,
}

/// Roll-up of an entire run.
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub dest: SocketAddr,
    pub sent: usize,
    pub received: usize,
    pub lost: usize,
    pub loss_pct: f64,
    /// `None` when nothing was received; min/avg/max are undefined then.
    pub rtt: Option<RttSummary>,
}

/// Mutable accumulator used during a run.
pub struct Stats {
    dest: SocketAddr,
    sent: usize,
    received: usize,
    total_rtt: f64,
    min_rtt: f64,
    max_rtt: f64,
}

impl Stats {
    /// Create a new accumulator.
    pub fn new(dest: SocketAddr) -> Self {
        Self {
            dest,
            sent: 0,
            received: 0,
            total_rtt: 0.0,
            min_rtt: f64::MAX,
            max_rtt: 0.0,
        }
    }

    /// Feed one outcome and obtain a [ProbeResult] to hand to the formatter.
    pub fn feed(&mut self, seq: usize, outcome: ProbeOutcome) -> ProbeResult {
        self.sent += 1;

        if let ProbeOutcome::Replied { rtt_ms, .. } = &outcome {
            let rtt = *rtt_ms;
            self.received += 1;
            self.total_rtt += rtt;
            self.min_rtt = self.min_rtt.min(rtt);
            self.max_rtt = self.max_rtt.max(rtt);
        }

        ProbeResult { seq, outcome }
    }

    /// Produce the final [Summary].
    pub fn summary(&self) -> Summary {
        let lost = self.sent - self.received;
        let loss_pct = if self.sent == 0 {
            0.0
        } else {
            100.0 * lost as f64 / self.sent as f64
        };

        let rtt = (self.received > 0).then(|| RttSummary {
            min_ms: self.min_rtt,
            avg_ms: self.total_rtt / self.received as f64,
            max_ms: self.max_rtt,
        });

        Summary {
            dest: self.dest,
            sent: self.sent,
            received: self.received,
            lost,
            loss_pct,
            rtt,
        }
    }
}
