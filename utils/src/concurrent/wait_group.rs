use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

#[cfg(test)]
mod tests;

/// Counts outstanding tasks; `wait` resolves once every `add` has been matched by a `done`.
#[derive(Debug, Clone, Default)]
pub struct WaitGroup {
  inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
  count: Mutex<usize>,
  notify: Notify,
}

impl WaitGroup {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn add(&self, n: usize) {
    let mut count = self.inner.count.lock().await;
    *count += n;
  }

  pub async fn done(&self) {
    let mut count = self.inner.count.lock().await;
    if *count == 0 {
      tracing::warn!("WaitGroup::done called more often than add");
      return;
    }
    *count -= 1;
    tracing::trace!("done: count={}", *count);
    if *count == 0 {
      self.inner.notify.notify_waiters();
    }
  }

  pub async fn count(&self) -> usize {
    *self.inner.count.lock().await
  }

  pub async fn wait(&self) {
    loop {
      let notified = self.inner.notify.notified();
      tokio::pin!(notified);
      // Register before checking so a `done` between the check and the await is not lost.
      notified.as_mut().enable();
      if *self.inner.count.lock().await == 0 {
        return;
      }
      notified.await;
    }
  }
}
