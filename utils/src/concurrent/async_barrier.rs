use std::sync::Arc;
use tokio::sync::{Mutex, Notify};


/// Reusable rendezvous point for a fixed number of parties.
///
/// Each call to [`AsyncBarrier::wait`] blocks until `parties` callers have arrived, then all of
/// them are released together and the barrier resets for the next round.
#[derive(Debug, Clone)]
pub struct AsyncBarrier {
  inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
  parties: usize,
  state: Mutex<Round>,
  notify: Notify,
}

#[derive(Debug)]
struct Round {
  arrived: usize,
  generation: u64,
}

impl AsyncBarrier {
  /// # Panics
  /// Panics if `parties` is zero.
  pub fn new(parties: usize) -> Self {
    assert!(parties > 0, "A barrier needs at least one party");
    AsyncBarrier {
      inner: Arc::new(Inner {
        parties,
        state: Mutex::new(Round {
          arrived: 0,
          generation: 0,
        }),
        notify: Notify::new(),
      }),
    }
  }

  pub fn parties(&self) -> usize {
    self.inner.parties
  }

  /// Waits for the rest of the round. Returns `true` for exactly one caller per round, the one
  /// whose arrival completed it.
  pub async fn wait(&self) -> bool {
    let mut round = self.inner.state.lock().await;
    let generation = round.generation;
    round.arrived += 1;
    if round.arrived == self.inner.parties {
      round.arrived = 0;
      round.generation += 1;
      tracing::trace!(generation, "barrier round complete");
      self.inner.notify.notify_waiters();
      return true;
    }
    loop {
      let notified = self.inner.notify.notified();
      tokio::pin!(notified);
      notified.as_mut().enable();
      drop(round);
      notified.await;
      round = self.inner.state.lock().await;
      if round.generation != generation {
        return false;
      }
    }
  }
}
