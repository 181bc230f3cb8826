//! Translation lookup metrics.
//!
//! Counts how often UI string lookups hit the table and how often they fell
//! back to the raw key, so incomplete localization shows up in numbers and
//! not only on screen.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a `TranslationTable`.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of lookups that found the key
    hits: AtomicUsize,

    /// Number of lookups that fell back to the key
    misses: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup that found its key.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to its key.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let miss_rate = if total > 0 {
            (misses as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            lookups: total,
            miss_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of lookups that found the key
    pub hits: usize,

    /// Number of lookups that fell back to the key
    pub misses: usize,

    /// Total lookups
    pub lookups: usize,

    /// Miss rate as a percentage (0-100)
    pub miss_rate: f64,
}
