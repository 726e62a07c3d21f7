use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Semaphore;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemaphoreError {
  #[error("semaphore is already given")]
  AlreadyGiven,
  #[error("semaphore is closed")]
  Closed,
  #[error("timed out waiting for the semaphore")]
  Timeout,
}

static_assertions::assert_impl_all!(SemaphoreError: Send, Sync);

/// A semaphore whose count is either zero (taken) or one (given).
///
/// Unlike a mutex there is no guard: whoever took the semaphore gives it back explicitly,
/// and giving an already given semaphore is refused instead of raising the count.
/// Waiters are woken one at a time.
#[derive(Clone)]
pub struct BinarySemaphore {
  inner: Arc<Inner>,
}

struct Inner {
  permits: Semaphore,
  taken: AtomicBool,
}

impl Debug for BinarySemaphore {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BinarySemaphore").field("count", &self.count()).finish()
  }
}

impl Default for BinarySemaphore {
  fn default() -> Self {
    Self::new(true)
  }
}

impl BinarySemaphore {
  /// Creates a semaphore, initially given when `given` is true.
  pub fn new(given: bool) -> Self {
    Self {
      inner: Arc::new(Inner {
        permits: Semaphore::new(usize::from(given)),
        taken: AtomicBool::new(!given),
      }),
    }
  }

  /// Point-in-time count: `1` when given, `0` when taken.
  ///
  /// Nothing ties this observation to a later [`BinarySemaphore::take`].
  pub fn count(&self) -> usize {
    self.inner.permits.available_permits()
  }

  pub fn is_given(&self) -> bool {
    self.count() == 1
  }

  /// Waits without bound until the semaphore is given, then takes it.
  pub async fn take(&self) -> Result<(), SemaphoreError> {
    let permit = self.inner.permits.acquire().await.map_err(|_| SemaphoreError::Closed)?;
    permit.forget();
    self.inner.taken.store(true, Ordering::Release);
    Ok(())
  }

  /// Takes the semaphore only if it is given right now.
  pub fn try_take(&self) -> bool {
    match self.inner.permits.try_acquire() {
      Ok(permit) => {
        permit.forget();
        self.inner.taken.store(true, Ordering::Release);
        true
      }
      Err(_) => false,
    }
  }

  pub async fn take_timeout(&self, timeout: Duration) -> Result<(), SemaphoreError> {
    tokio::time::timeout(timeout, self.take())
      .await
      .map_err(|_| SemaphoreError::Timeout)?
  }

  /// Gives the semaphore back, waking at most one waiter.
  pub fn give(&self) -> Result<(), SemaphoreError> {
    if self
      .inner
      .taken
      .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
      .is_err()
    {
      return Err(SemaphoreError::AlreadyGiven);
    }
    self.inner.permits.add_permits(1);
    Ok(())
  }
}
