use std::time::Duration;

use crate::concurrent::CountDownLatch;

#[tokio::test]
async fn test_wait_returns_immediately_when_zero() {
  let latch = CountDownLatch::new(0);
  latch.wait().await;
  assert!(latch.is_released().await);
}

#[tokio::test(start_paused = true)]
async fn test_waiters_released_after_last_count_down() {
  let latch = CountDownLatch::new(2);
  let waiter = {
    let latch = latch.clone();
    tokio::spawn(async move { latch.wait().await })
  };

  latch.count_down().await;
  tokio::time::sleep(Duration::from_millis(1)).await;
  assert!(!waiter.is_finished());
  assert_eq!(latch.count().await, 1);

  latch.count_down().await;
  waiter.await.unwrap();
  assert!(latch.is_released().await);
}

#[tokio::test]
async fn test_extra_count_down_is_ignored() {
  let latch = CountDownLatch::new(1);
  latch.count_down().await;
  latch.count_down().await;
  assert_eq!(latch.count().await, 0);
}

#[tokio::test]
async fn test_clones_share_state() {
  let latch = CountDownLatch::default();
  let other = latch.clone();
  assert_eq!(latch, other);
  other.count_down().await;
  assert!(latch.is_released().await);
  assert_ne!(latch, CountDownLatch::default());
}
