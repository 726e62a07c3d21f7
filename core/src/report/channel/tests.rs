use std::time::Duration;

use crate::report::{ReportChannel, ReportEntry};
use crate::worker::WorkerId;

fn entry(i: usize) -> ReportEntry {
  ReportEntry::new(WorkerId::new(i))
}

#[tokio::test(start_paused = true)]
async fn test_full_channel_refuses_without_changing_length() {
  let mut channel = ReportChannel::new(10);
  for i in 0..10 {
    assert!(channel.try_enqueue(entry(i % 5), Duration::from_millis(1)).await);
  }
  assert_eq!(channel.len().await, 10);
  assert!(!channel.has_space().await);

  assert!(!channel.try_enqueue(entry(3), Duration::from_millis(1)).await);
  assert_eq!(channel.len().await, 10);
}

#[tokio::test]
async fn test_zero_wait_enqueue_never_suspends() {
  let mut channel = ReportChannel::new(1);
  assert!(channel.try_enqueue(entry(0), Duration::ZERO).await);
  assert!(!channel.try_enqueue(entry(1), Duration::ZERO).await);
}

#[tokio::test]
async fn test_entries_come_out_in_insertion_order() {
  let mut channel = ReportChannel::new(4);
  let mut producer = channel.clone();
  for i in [2, 0, 3, 1] {
    assert!(producer.try_enqueue(entry(i), Duration::ZERO).await);
  }

  let mut seen = Vec::new();
  while let Some(e) = channel.dequeue(Some(Duration::ZERO)).await {
    seen.push(e.worker().index());
  }
  assert_eq!(seen, vec![2, 0, 3, 1]);
  assert!(channel.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_bounded_dequeue_times_out() {
  let mut channel = ReportChannel::new(2);
  assert_eq!(channel.dequeue(Some(Duration::from_millis(5))).await, None);
}

#[tokio::test]
async fn test_closed_channel_ends_unbounded_dequeue() {
  let mut channel = ReportChannel::new(2);
  let mut closer = channel.clone();
  closer.close().await;
  assert_eq!(channel.dequeue(None).await, None);
  assert!(!channel.try_enqueue(entry(0), Duration::ZERO).await);
}
