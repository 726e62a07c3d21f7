use std::time::Duration;

use symposium_utils_rs::collections::{
  BlockingQueueBase, BlockingQueueReader, BlockingQueueWriter, MpscBoundedChannelQueue, QueueBase, QueueReader,
  QueueWriter,
};

use crate::report::ReportEntry;

#[cfg(test)]
mod tests;

/// Bounded FIFO of report entries shared by all workers and read by one reporter.
///
/// Enqueue is best-effort: an entry that does not fit is handed back as `false` and the caller
/// drops it. Entries that do get in come out once, in insertion order.
#[derive(Debug, Clone)]
pub struct ReportChannel {
  queue: MpscBoundedChannelQueue<ReportEntry>,
}

impl ReportChannel {
  /// # Panics
  /// Panics if `capacity` is zero; table configuration rejects that before it gets here.
  pub fn new(capacity: usize) -> Self {
    Self {
      queue: MpscBoundedChannelQueue::new(capacity),
    }
  }

  pub async fn len(&self) -> usize {
    self.queue.len().await.to_usize()
  }

  pub async fn is_empty(&self) -> bool {
    self.queue.is_empty().await
  }

  pub async fn capacity(&self) -> usize {
    self.queue.capacity().await.to_usize()
  }

  /// Point-in-time check for free capacity; a later enqueue may still be refused.
  pub async fn has_space(&self) -> bool {
    self.queue.remaining_capacity().await.to_usize() > 0
  }

  /// Stores `entry` if space appears within `max_wait`. A zero wait never suspends.
  pub async fn try_enqueue(&mut self, entry: ReportEntry, max_wait: Duration) -> bool {
    let result = if max_wait.is_zero() {
      self.queue.offer(entry).await
    } else {
      self.queue.offer_timeout(entry, max_wait).await
    };
    result.is_ok()
  }

  /// Waits up to `max_wait` (without bound when `None`) for the oldest entry.
  ///
  /// Returns `None` on timeout or once the channel has been closed.
  pub async fn dequeue(&mut self, max_wait: Option<Duration>) -> Option<ReportEntry> {
    match max_wait {
      None => self.queue.take().await.ok(),
      Some(wait) => self.queue.take_timeout(wait).await.ok().flatten(),
    }
  }

  /// Closes the channel for every clone and discards pending entries.
  pub async fn close(&mut self) {
    self.queue.clean_up().await;
  }
}
