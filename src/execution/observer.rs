use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Events emitted by [`crate::execution::Collector`] during a run.
#[derive(Debug, Clone)]
pub enum CollectEvent {
    RunStarted,
    /// The guard clause tripped: absent or empty source collection.
    EmptyInput,
    /// A pair is about to be evaluated. `name` is `None` in the single form.
    PairStarted { name: Option<String> },
    /// A pair consumed an earlier named result as its source collection.
    SourceChained { name: String, from: String },
    /// A pair consumed an earlier named result as its initial accumulator.
    InitChained { name: String, from: String },
    /// A pair finished. `entries` counts the entries enumerated from its
    /// input collection.
    PairFinished {
        name: Option<String>,
        entries: usize,
        reduced: bool,
    },
    RunFinished {
        elapsed: Duration,
        metrics: CollectMetricsSnapshot,
    },
}

/// Observer hook for collect events.
pub trait CollectObserver: Send + Sync {
    fn on_event(&self, event: &CollectEvent);
}

/// A simple stderr logger for collect events.
#[derive(Default)]
pub struct StdErrCollectObserver;

impl CollectObserver for StdErrCollectObserver {
    fn on_event(&self, event: &CollectEvent) {
        eprintln!("{event:?}");
    }
}

/// Real-time metrics for a collect run.
///
/// The engine updates these counters during execution; callers can snapshot
/// them at any time. Counters are atomic only so a metrics handle can be
/// shared with `Send + Sync` observers; runs themselves are sequential.
pub struct CollectMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,

    pairs_evaluated: AtomicU64,
    entries_processed: AtomicU64,
    reductions_run: AtomicU64,
    sources_chained: AtomicU64,
    inits_chained: AtomicU64,
}

impl CollectMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            pairs_evaluated: AtomicU64::new(0),
            entries_processed: AtomicU64::new(0),
            reductions_run: AtomicU64::new(0),
            sources_chained: AtomicU64::new(0),
            inits_chained: AtomicU64::new(0),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);
        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.pairs_evaluated.store(0, Ordering::SeqCst);
        self.entries_processed.store(0, Ordering::SeqCst);
        self.reductions_run.store(0, Ordering::SeqCst);
        self.sources_chained.store(0, Ordering::SeqCst);
        self.inits_chained.store(0, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    pub fn on_pair(&self, entries: usize, reduced: bool) {
        let _ = self.pairs_evaluated.fetch_add(1, Ordering::SeqCst);
        let _ = self.entries_processed.fetch_add(entries as u64, Ordering::SeqCst);
        if reduced {
            let _ = self.reductions_run.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn on_source_chained(&self) {
        let _ = self.sources_chained.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_init_chained(&self) {
        let _ = self.inits_chained.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> CollectMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        CollectMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed,
            pairs_evaluated: self.pairs_evaluated.load(Ordering::SeqCst),
            entries_processed: self.entries_processed.load(Ordering::SeqCst),
            reductions_run: self.reductions_run.load(Ordering::SeqCst),
            sources_chained: self.sources_chained.load(Ordering::SeqCst),
            inits_chained: self.inits_chained.load(Ordering::SeqCst),
        }
    }
}

impl Default for CollectMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`CollectMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    pub pairs_evaluated: u64,
    pub entries_processed: u64,
    pub reductions_run: u64,
    pub sources_chained: u64,
    pub inits_chained: u64,
}

impl fmt::Display for CollectMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, pairs={}, entries={}, reductions={}, chained={}/{}, elapsed={:?}",
            self.run_id,
            self.pairs_evaluated,
            self.entries_processed,
            self.reductions_run,
            self.sources_chained,
            self.inits_chained,
            self.elapsed
        )
    }
}
