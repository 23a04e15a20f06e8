//! Observed execution for collect runs.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Observer hooks for run/pair/chaining events
//! - Real-time metrics with snapshots
//!
//! The engine computes exactly what [`crate::processing::collect()`] computes,
//! driven through the same guards and single-pair evaluator. Runs are
//! sequential and synchronous; the metrics are atomic only so handles can be
//! shared with `Send + Sync` observers.

mod observer;

use std::sync::Arc;
use std::time::Instant;

use crate::processing::collect::{eval_pair, is_empty_input, CollectOptions};
use crate::transform::TransformSet;
use crate::types::Value;

pub use observer::{
    CollectEvent, CollectMetrics, CollectMetricsSnapshot, CollectObserver, StdErrCollectObserver,
};

/// A collect engine with observer hooks and metrics.
pub struct Collector {
    observer: Option<Arc<dyn CollectObserver>>,
    metrics: Arc<CollectMetrics>,
}

impl Collector {
    /// Create a new engine with no observer attached.
    pub fn new() -> Self {
        Self {
            observer: None,
            metrics: Arc::new(CollectMetrics::new()),
        }
    }

    /// Attach an observer for collect events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn CollectObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time collect metrics.
    pub fn metrics(&self) -> Arc<CollectMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Run `transforms` against `source`, reporting progress as it goes.
    ///
    /// Returns the same value [`crate::processing::collect()`] would.
    pub fn collect(
        &self,
        source: &Value,
        transforms: &TransformSet,
        _options: &CollectOptions,
    ) -> Value {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(CollectEvent::RunStarted);

        let out = if is_empty_input(source) {
            self.emit(CollectEvent::EmptyInput);
            Value::Record(Vec::new())
        } else {
            match transforms {
                TransformSet::Single(pair) => {
                    self.emit(CollectEvent::PairStarted { name: None });
                    let eval = eval_pair(source, pair, &[]);
                    self.metrics.on_pair(eval.entries_in, eval.reduced);
                    self.emit(CollectEvent::PairFinished {
                        name: None,
                        entries: eval.entries_in,
                        reduced: eval.reduced,
                    });
                    eval.value
                }
                TransformSet::Named(pairs) => {
                    let mut results: Vec<(String, Value)> = Vec::with_capacity(pairs.len());
                    for (name, pair) in pairs {
                        self.emit(CollectEvent::PairStarted {
                            name: Some(name.clone()),
                        });
                        let eval = eval_pair(source, pair, &results);
                        if eval.chained_data {
                            self.metrics.on_source_chained();
                            if let Some(from) = pair.data() {
                                self.emit(CollectEvent::SourceChained {
                                    name: name.clone(),
                                    from: from.to_string(),
                                });
                            }
                        }
                        if eval.chained_init {
                            self.metrics.on_init_chained();
                            if let Some(Value::Utf8(from)) = pair.init() {
                                self.emit(CollectEvent::InitChained {
                                    name: name.clone(),
                                    from: from.clone(),
                                });
                            }
                        }
                        self.metrics.on_pair(eval.entries_in, eval.reduced);
                        self.emit(CollectEvent::PairFinished {
                            name: Some(name.clone()),
                            entries: eval.entries_in,
                            reduced: eval.reduced,
                        });
                        results.push((name.clone(), eval.value));
                    }
                    Value::Record(results)
                }
            }
        };

        let elapsed = start.elapsed();
        self.metrics.end_run(elapsed);
        self.emit(CollectEvent::RunFinished {
            elapsed,
            metrics: self.metrics.snapshot(),
        });

        out
    }

    fn emit(&self, event: CollectEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}
