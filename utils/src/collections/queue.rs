use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use thiserror::Error;

mod mpsc_bounded_channel_queue;

pub use self::mpsc_bounded_channel_queue::*;

use crate::collections::element::Element;

/// An error that occurs when a queue operation fails.<br/>
/// キューの操作に失敗した場合に発生するエラー。
#[derive(Error, Debug, PartialEq)]
pub enum QueueError<E> {
  #[error("Failed to offer an element: {0:?}")]
  OfferError(E),
  #[error("Failed to poll an element")]
  PoolError,
}

impl<E> QueueError<E> {
  /// Returns the element that could not be inserted, if any.<br/>
  /// 挿入できなかった要素があれば返します。
  pub fn into_element(self) -> Option<E> {
    match self {
      QueueError::OfferError(e) => Some(e),
      _ => None,
    }
  }
}

/// The size of the queue.<br/>
/// キューのサイズ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// The queue has no capacity limit.<br/>
  /// キューに容量制限がない。
  Limitless,
  /// The queue has a capacity limit.<br/>
  /// キューに容量制限がある。
  Limited(usize),
}

impl QueueSize {
  /// Returns whether the queue has no capacity limit.<br/>
  /// キューに容量制限がないかどうかを返します。
  pub fn is_limitless(&self) -> bool {
    matches!(self, QueueSize::Limitless)
  }

  /// Converts to a usize type.<br/>
  /// usize型に変換します。
  ///
  /// # Return Value / 戻り値
  /// - `usize::MAX` - If the queue has no capacity limit. / キューに容量制限がない場合。
  /// - `num` - If the queue has a capacity limit. / キューに容量制限がある場合。
  pub fn to_usize(&self) -> usize {
    match self {
      QueueSize::Limitless => usize::MAX,
      QueueSize::Limited(c) => *c,
    }
  }
}

/// A trait that defines the behavior of a queue.<br/>
/// キューの振る舞いを定義するトレイト。
#[async_trait]
pub trait QueueBase<E: Element>: Debug + Send + Sync {
  /// Returns whether this queue is empty.<br/>
  /// このキューが空かどうかを返します。
  async fn is_empty(&self) -> bool {
    self.len().await == QueueSize::Limited(0)
  }

  /// Returns whether the queue size has reached its capacity.<br/>
  /// このキューのサイズが容量まで到達したかどうかを返します。
  async fn is_full(&self) -> bool {
    self.capacity().await == self.len().await
  }

  /// Returns whether the queue size has not reached its capacity.<br/>
  /// このキューのサイズが容量まで到達してないかどうかを返します。
  async fn non_full(&self) -> bool {
    !self.is_full().await
  }

  /// Returns the length of this queue.<br/>
  /// このキューの長さを返します。
  async fn len(&self) -> QueueSize;

  /// Returns the capacity of this queue.<br/>
  /// このキューの最大容量を返します。
  async fn capacity(&self) -> QueueSize;
}

#[async_trait]
pub trait QueueWriter<E: Element>: QueueBase<E> {
  /// The specified element will be inserted into this queue,
  /// if the queue can be executed immediately without violating the capacity limit.<br/>
  /// 容量制限に違反せずにすぐ実行できる場合は、指定された要素をこのキューに挿入します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element is inserted successfully. / 要素が正常に挿入された場合。
  /// - `Err(QueueError::OfferError(element))` - If the element cannot be inserted. / 要素を挿入できなかった場合。
  async fn offer(&mut self, element: E) -> Result<(), QueueError<E>>;
}

#[async_trait]
pub trait QueueReader<E: Element>: QueueBase<E> {
  /// Retrieves and deletes the head of the queue. Returns None if the queue is empty.<br/>
  /// キューの先頭を取得および削除します。キューが空の場合は None を返します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(Some(element))` - If the element is retrieved successfully. / 要素が正常に取得された場合。
  /// - `Ok(None)` - If the queue is empty. / キューが空の場合。
  /// - `Err(QueueError::PoolError)` - If the queue has been cleaned up. / キューが破棄済みの場合。
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>>;

  /// Closes the queue and discards the remaining elements.<br/>
  /// キューを閉じ、残りの要素を破棄します。
  async fn clean_up(&mut self);
}

/// A trait that defines the behavior of a blocking queue.<br/>
/// ブロッキングキューの振る舞いを定義するトレイト。
#[async_trait]
pub trait BlockingQueueBase<E: Element>: QueueBase<E> + Send {
  /// Returns the number of elements that can be inserted into this queue without blocking.<br/>
  /// ブロックせずにこのキューに挿入できる要素数を返します。
  async fn remaining_capacity(&self) -> QueueSize;
}

#[async_trait]
pub trait BlockingQueueWriter<E: Element>: BlockingQueueBase<E> + QueueWriter<E> {
  /// Inserts the specified element into this queue. If necessary, waits until space is available.<br/>
  /// 指定された要素をこのキューに挿入します。必要に応じて、空きが生じるまで待機します。
  async fn put(&mut self, element: E) -> Result<(), QueueError<E>>;

  /// Inserts the specified element, waiting at most `timeout` for space.<br/>
  /// 指定された要素を挿入します。空きが生じるまで最大 `timeout` だけ待機します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element is inserted in time. / 時間内に挿入された場合。
  /// - `Err(QueueError::OfferError(element))` - If no space appeared in time or the queue is closed. / 時間内に空きがない、またはキューが閉じている場合。
  async fn offer_timeout(&mut self, element: E, timeout: Duration) -> Result<(), QueueError<E>>;
}

#[async_trait]
pub trait BlockingQueueReader<E: Element>: BlockingQueueBase<E> {
  /// Retrieve the head of this queue and delete it. If necessary, wait until an element becomes available.<br/>
  /// このキューの先頭を取得して削除します。必要に応じて、要素が利用可能になるまで待機します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(element)` - If the element is retrieved successfully. / 要素が正常に取得された場合。
  /// - `Err(QueueError::PoolError)` - If the queue has been cleaned up. / キューが破棄済みの場合。
  async fn take(&mut self) -> Result<E, QueueError<E>>;

  /// Like [`BlockingQueueReader::take`], but gives up after `timeout`.<br/>
  /// [`BlockingQueueReader::take`] と同様ですが、`timeout` 経過後に諦めます。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(Some(element))` - If an element arrived in time. / 時間内に要素が届いた場合。
  /// - `Ok(None)` - If the timeout elapsed. / タイムアウトした場合。
  async fn take_timeout(&mut self, timeout: Duration) -> Result<Option<E>, QueueError<E>>;
}
