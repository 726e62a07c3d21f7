use std::time::Duration;

use crate::concurrent::WaitGroup;

#[tokio::test]
async fn test_wait_without_tasks() {
  let wg = WaitGroup::new();
  wg.wait().await;
  assert_eq!(wg.count().await, 0);
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_all_tasks() {
  let wg = WaitGroup::new();
  wg.add(3).await;

  for i in 0..3u64 {
    let wg = wg.clone();
    tokio::spawn(async move {
      tokio::time::sleep(Duration::from_millis(10 * (i + 1))).await;
      wg.done().await;
    });
  }

  let started = tokio::time::Instant::now();
  wg.wait().await;
  assert!(started.elapsed() >= Duration::from_millis(30));
  assert_eq!(wg.count().await, 0);
}

#[tokio::test]
async fn test_surplus_done_keeps_count_at_zero() {
  let wg = WaitGroup::new();
  wg.add(1).await;
  wg.done().await;
  wg.done().await;
  assert_eq!(wg.count().await, 0);
}
