use std::time::Duration;

use crate::collections::element::Element;
use crate::collections::queue::mpsc_bounded_channel_queue::MpscBoundedChannelQueue;
use crate::collections::{
  BlockingQueueBase, BlockingQueueReader, BlockingQueueWriter, QueueBase, QueueError, QueueReader, QueueSize,
  QueueWriter,
};

#[derive(Debug, Clone, PartialEq)]
struct TestElement(i32);

impl Element for TestElement {}

#[tokio::test]
async fn test_new_queue() {
  let queue = MpscBoundedChannelQueue::<TestElement>::new(10);
  assert_eq!(queue.capacity().await, QueueSize::Limited(10));
  assert_eq!(queue.len().await, QueueSize::Limited(0));
  assert_eq!(queue.remaining_capacity().await, QueueSize::Limited(10));
  assert!(queue.is_empty().await);
}

#[test]
#[should_panic(expected = "Capacity must be greater than zero")]
fn test_zero_capacity_is_rejected() {
  let _ = MpscBoundedChannelQueue::<TestElement>::new(0);
}

#[tokio::test]
async fn test_offer_and_poll_preserve_order() {
  let mut queue = MpscBoundedChannelQueue::<TestElement>::new(5);

  for i in 0..5 {
    assert!(queue.offer(TestElement(i)).await.is_ok());
  }
  assert_eq!(queue.len().await, QueueSize::Limited(5));
  assert!(queue.is_full().await);

  for i in 0..5 {
    let element = queue.poll().await.unwrap().unwrap();
    assert_eq!(element, TestElement(i));
  }

  assert_eq!(queue.len().await, QueueSize::Limited(0));
  assert!(queue.poll().await.unwrap().is_none());
}

#[tokio::test]
async fn test_offer_to_full_queue_returns_element() {
  let mut queue = MpscBoundedChannelQueue::<TestElement>::new(2);

  assert!(queue.offer(TestElement(1)).await.is_ok());
  assert!(queue.offer(TestElement(2)).await.is_ok());

  match queue.offer(TestElement(3)).await {
    Err(QueueError::OfferError(e)) => assert_eq!(e, TestElement(3)),
    other => panic!("Expected OfferError, got {:?}", other),
  }

  assert_eq!(queue.len().await, QueueSize::Limited(2));
  assert_eq!(queue.remaining_capacity().await, QueueSize::Limited(0));
}

#[tokio::test(start_paused = true)]
async fn test_offer_timeout_gives_up_when_full() {
  let mut queue = MpscBoundedChannelQueue::<TestElement>::new(1);
  queue.offer(TestElement(1)).await.unwrap();

  let started = tokio::time::Instant::now();
  let result = queue.offer_timeout(TestElement(2), Duration::from_millis(1)).await;

  assert_eq!(result.map_err(QueueError::into_element), Err(Some(TestElement(2))));
  assert!(started.elapsed() >= Duration::from_millis(1));
  assert_eq!(queue.len().await, QueueSize::Limited(1));
}

#[tokio::test(start_paused = true)]
async fn test_offer_timeout_succeeds_when_space_frees_up() {
  let mut queue = MpscBoundedChannelQueue::<TestElement>::new(1);
  queue.offer(TestElement(1)).await.unwrap();

  let mut reader = queue.clone();
  let drain = tokio::spawn(async move {
    tokio::time::sleep(Duration::from_millis(5)).await;
    reader.poll().await.unwrap()
  });

  let result = queue.offer_timeout(TestElement(2), Duration::from_millis(50)).await;
  assert!(result.is_ok());
  assert_eq!(drain.await.unwrap(), Some(TestElement(1)));
  assert_eq!(queue.take().await.unwrap(), TestElement(2));
}

#[tokio::test(start_paused = true)]
async fn test_take_timeout_returns_none_when_empty() {
  let mut queue = MpscBoundedChannelQueue::<TestElement>::new(3);
  let result = queue.take_timeout(Duration::from_millis(10)).await;
  assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn test_take_waits_for_producer() {
  let mut queue = MpscBoundedChannelQueue::<TestElement>::new(3);
  let mut producer = queue.clone();

  let handle = tokio::spawn(async move {
    tokio::task::yield_now().await;
    producer.put(TestElement(7)).await.unwrap();
  });

  assert_eq!(queue.take().await.unwrap(), TestElement(7));
  handle.await.unwrap();
}

#[tokio::test]
async fn test_clean_up() {
  let mut queue = MpscBoundedChannelQueue::<TestElement>::new(5);

  for i in 0..3 {
    assert!(queue.offer(TestElement(i)).await.is_ok());
  }

  queue.clean_up().await;

  assert_eq!(queue.len().await, QueueSize::Limited(0));
  match queue.poll().await {
    Err(QueueError::PoolError) => (),
    other => panic!("Expected PoolError after clean_up, got {:?}", other),
  }
  match queue.take().await {
    Err(QueueError::PoolError) => (),
    other => panic!("Expected PoolError after clean_up, got {:?}", other),
  }
  match queue.offer(TestElement(4)).await {
    Err(QueueError::OfferError(_)) => (),
    other => panic!("Expected OfferError after clean_up, got {:?}", other),
  }
}

#[tokio::test]
async fn test_concurrent_producers_never_exceed_capacity() {
  let queue = MpscBoundedChannelQueue::<TestElement>::new(4);
  let mut handles = vec![];

  for i in 0..10 {
    let mut q = queue.clone();
    handles.push(tokio::spawn(async move {
      let mut accepted = 0;
      for j in 0..10 {
        if q.offer(TestElement(i * 10 + j)).await.is_ok() {
          accepted += 1;
        }
        assert!(q.len().await.to_usize() <= 4);
        tokio::task::yield_now().await;
      }
      accepted
    }));
  }

  let mut accepted = 0;
  for handle in handles {
    accepted += handle.await.unwrap();
  }

  let mut reader = queue.clone();
  let mut drained = 0;
  while reader.poll().await.unwrap().is_some() {
    drained += 1;
  }
  assert_eq!(accepted, drained);
  assert!(drained <= 4);
}
