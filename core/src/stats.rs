use std::sync::atomic::{AtomicU64, Ordering};

use crate::worker::WorkerId;

/// Counters shared by every task of a table.
#[derive(Debug)]
pub struct TableStats {
  published: AtomicU64,
  dropped: AtomicU64,
  emitted: AtomicU64,
  transmit_failures: AtomicU64,
  meals: Vec<AtomicU64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
  pub published: u64,
  pub dropped: u64,
  pub emitted: u64,
  pub transmit_failures: u64,
  pub meals: Vec<u64>,
}

impl StatsSnapshot {
  pub fn total_meals(&self) -> u64 {
    self.meals.iter().sum()
  }
}

impl TableStats {
  pub fn new(workers: usize) -> Self {
    Self {
      published: AtomicU64::new(0),
      dropped: AtomicU64::new(0),
      emitted: AtomicU64::new(0),
      transmit_failures: AtomicU64::new(0),
      meals: (0..workers).map(|_| AtomicU64::new(0)).collect(),
    }
  }

  pub(crate) fn record_published(&self) {
    self.published.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn record_dropped(&self) {
    self.dropped.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn record_emitted(&self) {
    self.emitted.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn record_transmit_failure(&self) {
    self.transmit_failures.fetch_add(1, Ordering::Relaxed);
  }

  pub(crate) fn record_meal(&self, worker: WorkerId) {
    if let Some(meals) = self.meals.get(worker.index()) {
      meals.fetch_add(1, Ordering::Relaxed);
    }
  }

  pub fn snapshot(&self) -> StatsSnapshot {
    StatsSnapshot {
      published: self.published.load(Ordering::Relaxed),
      dropped: self.dropped.load(Ordering::Relaxed),
      emitted: self.emitted.load(Ordering::Relaxed),
      transmit_failures: self.transmit_failures.load(Ordering::Relaxed),
      meals: self.meals.iter().map(|m| m.load(Ordering::Relaxed)).collect(),
    }
  }
}
