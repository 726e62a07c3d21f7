use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::collections::element::Element;
use crate::collections::{
  BlockingQueueBase, BlockingQueueReader, BlockingQueueWriter, QueueBase, QueueError, QueueReader, QueueSize,
  QueueWriter,
};
use async_trait::async_trait;
use tokio::sync::mpsc::error::{SendError, SendTimeoutError, TryRecvError, TrySendError};
use tokio::sync::{mpsc, Mutex};

#[cfg(test)]
mod tests;

/// Bounded multi-producer FIFO backed by a tokio channel.
///
/// Clones share one channel. Every clone may offer; readers serialize on an internal lock,
/// so the queue always has a single logical consumer.
#[derive(Debug, Clone)]
pub struct MpscBoundedChannelQueue<E> {
  sender: mpsc::Sender<E>,
  receiver: Arc<Mutex<mpsc::Receiver<E>>>,
  capacity: usize,
  closed: Arc<AtomicBool>,
}

impl<E> MpscBoundedChannelQueue<E> {
  /// Creates a queue holding at most `capacity` elements.
  ///
  /// # Panics
  /// Panics if `capacity` is zero.
  pub fn new(capacity: usize) -> Self {
    assert!(capacity > 0, "Capacity must be greater than zero");
    let (sender, receiver) = mpsc::channel(capacity);
    Self {
      sender,
      receiver: Arc::new(Mutex::new(receiver)),
      capacity,
      closed: Arc::new(AtomicBool::new(false)),
    }
  }

  fn is_closed(&self) -> bool {
    self.closed.load(Ordering::Acquire)
  }

  // Permits held by in-flight sends count as occupied slots.
  fn current_len(&self) -> usize {
    if self.is_closed() {
      return 0;
    }
    self.capacity.saturating_sub(self.sender.capacity())
  }
}

#[async_trait]
impl<E: Element> QueueBase<E> for MpscBoundedChannelQueue<E> {
  async fn len(&self) -> QueueSize {
    QueueSize::Limited(self.current_len())
  }

  async fn capacity(&self) -> QueueSize {
    QueueSize::Limited(self.capacity)
  }
}

#[async_trait]
impl<E: Element> QueueWriter<E> for MpscBoundedChannelQueue<E> {
  async fn offer(&mut self, element: E) -> Result<(), QueueError<E>> {
    if self.is_closed() {
      return Err(QueueError::OfferError(element));
    }
    match self.sender.try_send(element) {
      Ok(()) => Ok(()),
      Err(TrySendError::Full(e)) | Err(TrySendError::Closed(e)) => Err(QueueError::OfferError(e)),
    }
  }
}

#[async_trait]
impl<E: Element> QueueReader<E> for MpscBoundedChannelQueue<E> {
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>> {
    let mut receiver = self.receiver.lock().await;
    match receiver.try_recv() {
      Ok(element) => Ok(Some(element)),
      Err(TryRecvError::Empty) if self.is_closed() => Err(QueueError::PoolError),
      Err(TryRecvError::Empty) => Ok(None),
      Err(TryRecvError::Disconnected) => Err(QueueError::PoolError),
    }
  }

  async fn clean_up(&mut self) {
    let mut receiver = self.receiver.lock().await;
    self.closed.store(true, Ordering::Release);
    receiver.close();
    while receiver.try_recv().is_ok() {}
  }
}

#[async_trait]
impl<E: Element> BlockingQueueBase<E> for MpscBoundedChannelQueue<E> {
  async fn remaining_capacity(&self) -> QueueSize {
    QueueSize::Limited(self.capacity - self.current_len())
  }
}

#[async_trait]
impl<E: Element> BlockingQueueWriter<E> for MpscBoundedChannelQueue<E> {
  async fn put(&mut self, element: E) -> Result<(), QueueError<E>> {
    if self.is_closed() {
      return Err(QueueError::OfferError(element));
    }
    self
      .sender
      .send(element)
      .await
      .map_err(|SendError(e)| QueueError::OfferError(e))
  }

  async fn offer_timeout(&mut self, element: E, timeout: Duration) -> Result<(), QueueError<E>> {
    if self.is_closed() {
      return Err(QueueError::OfferError(element));
    }
    match self.sender.send_timeout(element, timeout).await {
      Ok(()) => Ok(()),
      Err(SendTimeoutError::Timeout(e)) | Err(SendTimeoutError::Closed(e)) => Err(QueueError::OfferError(e)),
    }
  }
}

#[async_trait]
impl<E: Element> BlockingQueueReader<E> for MpscBoundedChannelQueue<E> {
  async fn take(&mut self) -> Result<E, QueueError<E>> {
    let mut receiver = self.receiver.lock().await;
    receiver.recv().await.ok_or(QueueError::PoolError)
  }

  async fn take_timeout(&mut self, timeout: Duration) -> Result<Option<E>, QueueError<E>> {
    let mut receiver = self.receiver.lock().await;
    match tokio::time::timeout(timeout, receiver.recv()).await {
      Ok(Some(element)) => Ok(Some(element)),
      Ok(None) => Err(QueueError::PoolError),
      Err(_) => Ok(None),
    }
  }
}
