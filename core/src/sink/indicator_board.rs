use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::sink::OutputSink;
use crate::worker::WorkerId;

#[cfg(test)]
mod tests;

/// In-memory indicator panel for a ring of `size` workers.
///
/// Lighting an indicator while a ring neighbour's is lit counts as a violation: neighbours
/// share a resource and can never eat at the same time.
#[derive(Debug, Clone)]
pub struct IndicatorBoard {
  inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
  lit: Vec<AtomicBool>,
  toggles: AtomicU64,
  violations: AtomicU64,
  faulted: AtomicBool,
}

impl IndicatorBoard {
  pub fn new(size: usize) -> Self {
    Self {
      inner: Arc::new(Inner {
        lit: (0..size).map(|_| AtomicBool::new(false)).collect(),
        toggles: AtomicU64::new(0),
        violations: AtomicU64::new(0),
        faulted: AtomicBool::new(false),
      }),
    }
  }

  pub fn is_lit(&self, worker: WorkerId) -> bool {
    self
      .inner
      .lit
      .get(worker.index())
      .map(|l| l.load(Ordering::SeqCst))
      .unwrap_or(false)
  }

  pub fn lit_workers(&self) -> Vec<WorkerId> {
    self
      .inner
      .lit
      .iter()
      .enumerate()
      .filter(|(_, l)| l.load(Ordering::SeqCst))
      .map(|(i, _)| WorkerId::new(i))
      .collect()
  }

  pub fn toggles(&self) -> u64 {
    self.inner.toggles.load(Ordering::SeqCst)
  }

  pub fn violations(&self) -> u64 {
    self.inner.violations.load(Ordering::SeqCst)
  }

  pub fn is_faulted(&self) -> bool {
    self.inner.faulted.load(Ordering::SeqCst)
  }
}

impl OutputSink for IndicatorBoard {
  fn set_indicator(&self, worker: WorkerId, on: bool) {
    let size = self.inner.lit.len();
    let Some(slot) = self.inner.lit.get(worker.index()) else {
      return;
    };
    if on {
      let left = (worker.index() + size - 1) % size;
      let right = (worker.index() + 1) % size;
      if self.inner.lit[left].load(Ordering::SeqCst) || self.inner.lit[right].load(Ordering::SeqCst) {
        self.inner.violations.fetch_add(1, Ordering::SeqCst);
      }
    }
    slot.store(on, Ordering::SeqCst);
    self.inner.toggles.fetch_add(1, Ordering::SeqCst);
  }

  fn indicate_fault(&self) {
    for slot in &self.inner.lit {
      slot.store(false, Ordering::SeqCst);
    }
    self.inner.faulted.store(true, Ordering::SeqCst);
  }
}
