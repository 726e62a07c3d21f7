use std::fmt::{Debug, Display, Formatter};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use strum::Display as StrumDisplay;
use symposium_utils_rs::concurrent::CountDownLatch;

use crate::config::{AcquisitionPolicy, Config};
use crate::error::ResourceError;
use crate::report::{ReportChannel, ReportEntry};
use crate::resource::{ResourceId, ResourceSet};
use crate::sink::OutputSink;
use crate::stats::TableStats;
use crate::table::TableContext;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(usize);

impl WorkerId {
  pub const fn new(index: usize) -> Self {
    Self(index)
  }

  pub const fn index(&self) -> usize {
    self.0
  }

  /// The worker's own resource.
  pub const fn left(&self) -> ResourceId {
    ResourceId::new(self.0)
  }

  /// The resource shared with the next worker around a ring of `ring` workers.
  pub const fn right(&self, ring: usize) -> ResourceId {
    ResourceId::new((self.0 + 1) % ring)
  }
}

impl Display for WorkerId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "worker-{}", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[repr(u8)]
pub enum WorkerState {
  Thinking = 0,
  Probing = 1,
  Eating = 2,
}

impl WorkerState {
  fn from_u8(value: u8) -> Self {
    match value {
      1 => WorkerState::Probing,
      2 => WorkerState::Eating,
      _ => WorkerState::Thinking,
    }
  }
}

/// Latest published state of every worker. Each slot has a single writer, its worker.
#[derive(Debug)]
pub struct StateBoard {
  states: Vec<AtomicU8>,
}

impl StateBoard {
  pub fn new(workers: usize) -> Self {
    Self {
      states: (0..workers).map(|_| AtomicU8::new(WorkerState::Thinking as u8)).collect(),
    }
  }

  pub fn get(&self, worker: WorkerId) -> Option<WorkerState> {
    self
      .states
      .get(worker.index())
      .map(|s| WorkerState::from_u8(s.load(Ordering::SeqCst)))
  }

  pub(crate) fn set(&self, worker: WorkerId, state: WorkerState) {
    if let Some(slot) = self.states.get(worker.index()) {
      slot.store(state as u8, Ordering::SeqCst);
    }
  }

  pub fn snapshot(&self) -> Vec<WorkerState> {
    self
      .states
      .iter()
      .map(|s| WorkerState::from_u8(s.load(Ordering::SeqCst)))
      .collect()
  }

  pub fn eating(&self) -> Vec<WorkerId> {
    self
      .snapshot()
      .into_iter()
      .enumerate()
      .filter(|(_, s)| *s == WorkerState::Eating)
      .map(|(i, _)| WorkerId::new(i))
      .collect()
  }
}

/// Called between a successful probe and the first acquire.
///
/// The gap it marks is where the look-then-acquire race lives; tests use it to line up
/// neighbours inside that gap.
#[async_trait]
pub trait ProbeHook: Debug + Send + Sync + 'static {
  async fn after_probe(&self, worker: WorkerId);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProbeHook;

#[async_trait]
impl ProbeHook for NoopProbeHook {
  async fn after_probe(&self, _worker: WorkerId) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
  /// Ate and thought once. `published` tells whether the report made it into the channel.
  Completed { published: bool },
  /// Shutdown arrived before the worker started eating; nothing is held.
  Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerTiming {
  pub eat: Duration,
  pub think: Duration,
  pub probe_interval: Duration,
  pub enqueue_wait: Duration,
}

impl From<&Config> for WorkerTiming {
  fn from(config: &Config) -> Self {
    Self {
      eat: config.eat_duration,
      think: config.think_duration,
      probe_interval: config.probe_interval,
      enqueue_wait: config.enqueue_wait,
    }
  }
}

/// One seat at the table: Thinking → Probing → Eating → Thinking, forever.
#[derive(Debug)]
pub struct Worker {
  id: WorkerId,
  ring: usize,
  policy: AcquisitionPolicy,
  timing: WorkerTiming,
  resources: Arc<ResourceSet>,
  channel: ReportChannel,
  indicator: Arc<dyn OutputSink>,
  board: Arc<StateBoard>,
  stats: Arc<TableStats>,
  probe_hook: Arc<dyn ProbeHook>,
  shutdown: CountDownLatch,
}

impl Worker {
  pub fn new(id: WorkerId, context: &TableContext) -> Self {
    let config = context.config();
    Self {
      id,
      ring: config.workers,
      policy: config.acquisition_policy,
      timing: WorkerTiming::from(config),
      resources: context.resources().clone(),
      channel: context.channel(),
      indicator: context.indicator().clone(),
      board: context.board().clone(),
      stats: context.stats().clone(),
      probe_hook: context.probe_hook().clone(),
      shutdown: context.shutdown().clone(),
    }
  }

  pub fn id(&self) -> WorkerId {
    self.id
  }

  pub fn left(&self) -> ResourceId {
    self.id.left()
  }

  pub fn right(&self) -> ResourceId {
    self.id.right(self.ring)
  }

  pub fn state(&self) -> WorkerState {
    self.board.get(self.id).unwrap_or(WorkerState::Thinking)
  }

  /// Cycles until the table shuts down.
  pub async fn run(mut self) {
    tracing::debug!(worker = %self.id, "worker started");
    while !self.shutdown.is_released().await {
      match self.run_cycle().await {
        Ok(CycleOutcome::Completed { .. }) => {}
        Ok(CycleOutcome::Interrupted) => break,
        Err(error) => {
          tracing::error!(worker = %self.id, %error, "worker stopped on resource error");
          break;
        }
      }
    }
    self.set_state(WorkerState::Thinking);
    tracing::debug!(worker = %self.id, "worker stopped");
  }

  /// Runs one full cycle. A meal that has started is always finished and its resources
  /// released before this returns.
  pub async fn run_cycle(&mut self) -> Result<CycleOutcome, ResourceError> {
    self.set_state(WorkerState::Probing);
    if !self.probe().await {
      self.set_state(WorkerState::Thinking);
      return Ok(CycleOutcome::Interrupted);
    }
    self.probe_hook.after_probe(self.id).await;

    let mut held = Vec::with_capacity(2);
    for resource in self.acquisition_order() {
      if !self.acquire_or_shutdown(resource).await? {
        self.set_state(WorkerState::Thinking);
        self.release_all(&held)?;
        return Ok(CycleOutcome::Interrupted);
      }
      held.push(resource);
    }

    self.set_state(WorkerState::Eating);
    self.indicator.set_indicator(self.id, true);
    let published = self.publish().await;
    sleep_or_yield(self.timing.eat).await;
    self.indicator.set_indicator(self.id, false);
    self.stats.record_meal(self.id);

    self.set_state(WorkerState::Thinking);
    self.release_all(&held)?;
    self.pause(self.timing.think).await;
    Ok(CycleOutcome::Completed { published })
  }

  fn set_state(&self, state: WorkerState) {
    self.board.set(self.id, state);
    tracing::debug!(worker = %self.id, %state, "state");
  }

  /// Busy-polls both resources until they are seen available in the same pass.
  /// Returns `false` if shutdown arrived first.
  async fn probe(&self) -> bool {
    let (left, right) = (self.left(), self.right());
    loop {
      if self.resources.is_available(left) && self.resources.is_available(right) {
        return true;
      }
      if !self.pause(self.timing.probe_interval).await {
        return false;
      }
    }
  }

  fn acquisition_order(&self) -> [ResourceId; 2] {
    let (left, right) = (self.left(), self.right());
    match self.policy {
      AcquisitionPolicy::LookThenAcquire => [left, right],
      AcquisitionPolicy::OrderedAcquire if right < left => [right, left],
      AcquisitionPolicy::OrderedAcquire => [left, right],
    }
  }

  async fn acquire_or_shutdown(&self, resource: ResourceId) -> Result<bool, ResourceError> {
    tokio::select! {
      biased;
      _ = self.shutdown.wait() => Ok(false),
      acquired = self.resources.acquire(resource, self.id) => acquired.map(|_| true),
    }
  }

  /// Releases in reverse acquisition order. Keeps going past a failure and reports the first.
  fn release_all(&self, held: &[ResourceId]) -> Result<(), ResourceError> {
    let mut outcome = Ok(());
    for resource in held.iter().rev() {
      if let Err(error) = self.resources.release(*resource, self.id) {
        tracing::warn!(worker = %self.id, %error, "release failed");
        if outcome.is_ok() {
          outcome = Err(error);
        }
      }
    }
    outcome
  }

  /// One best-effort report. A full channel skips the report; nothing is retried.
  async fn publish(&mut self) -> bool {
    let published = self.channel.has_space().await
      && self
        .channel
        .try_enqueue(ReportEntry::new(self.id), self.timing.enqueue_wait)
        .await;
    if published {
      self.stats.record_published();
    } else {
      self.stats.record_dropped();
      tracing::debug!(worker = %self.id, "report channel full, report dropped");
    }
    published
  }

  /// Sleeps for `duration` unless shutdown comes first. Returns `false` on shutdown.
  async fn pause(&self, duration: Duration) -> bool {
    tokio::select! {
      biased;
      _ = self.shutdown.wait() => false,
      _ = sleep_or_yield(duration) => true,
    }
  }
}

async fn sleep_or_yield(duration: Duration) {
  if duration.is_zero() {
    tokio::task::yield_now().await;
  } else {
    tokio::time::sleep(duration).await;
  }
}
