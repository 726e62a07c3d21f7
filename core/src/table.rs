use std::sync::Arc;

use symposium_utils_rs::concurrent::{CountDownLatch, WaitGroup};

use crate::config::Config;
use crate::dispatch::{Dispatcher, Runnable};
use crate::error::TableError;
use crate::report::{ReportChannel, Reporter};
use crate::resource::ResourceSet;
use crate::sink::{shared_transmitter, OutputSink, SharedTransmitter, TransmitSink};
use crate::stats::{StatsSnapshot, TableStats};
use crate::worker::{NoopProbeHook, ProbeHook, StateBoard, Worker, WorkerId};


/// Everything the tasks of one table share.
#[derive(Debug, Clone)]
pub struct TableContext {
  config: Config,
  resources: Arc<ResourceSet>,
  channel: ReportChannel,
  indicator: Arc<dyn OutputSink>,
  transmitter: SharedTransmitter,
  board: Arc<StateBoard>,
  stats: Arc<TableStats>,
  probe_hook: Arc<dyn ProbeHook>,
  shutdown: CountDownLatch,
}

impl TableContext {
  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn resources(&self) -> &Arc<ResourceSet> {
    &self.resources
  }

  /// A new handle onto the shared report channel.
  pub fn channel(&self) -> ReportChannel {
    self.channel.clone()
  }

  pub fn indicator(&self) -> &Arc<dyn OutputSink> {
    &self.indicator
  }

  pub fn transmitter(&self) -> &SharedTransmitter {
    &self.transmitter
  }

  pub fn board(&self) -> &Arc<StateBoard> {
    &self.board
  }

  pub fn stats(&self) -> &Arc<TableStats> {
    &self.stats
  }

  pub fn probe_hook(&self) -> &Arc<dyn ProbeHook> {
    &self.probe_hook
  }

  pub fn shutdown(&self) -> &CountDownLatch {
    &self.shutdown
  }
}

/// A validated, not yet running table.
///
/// Construction is the only place a table can fail. On failure the indicator is put into its
/// fault state and nothing is spawned.
#[derive(Debug)]
pub struct Table {
  context: TableContext,
}

impl Table {
  pub fn new(config: Config, indicator: Arc<dyn OutputSink>, transmitter: impl TransmitSink) -> Result<Self, TableError> {
    if let Err(error) = config.validate() {
      tracing::error!(%error, "table initialization failed");
      indicator.indicate_fault();
      return Err(error.into());
    }
    let workers = config.workers;
    let context = TableContext {
      resources: Arc::new(ResourceSet::new(workers)),
      channel: ReportChannel::new(config.report_capacity),
      indicator,
      transmitter: shared_transmitter(transmitter),
      board: Arc::new(StateBoard::new(workers)),
      stats: Arc::new(TableStats::new(workers)),
      probe_hook: Arc::new(NoopProbeHook),
      shutdown: CountDownLatch::new(1),
      config,
    };
    Ok(Self { context })
  }

  pub fn with_probe_hook(mut self, hook: Arc<dyn ProbeHook>) -> Self {
    self.context.probe_hook = hook;
    self
  }

  pub fn context(&self) -> &TableContext {
    &self.context
  }

  /// Builds the worker for seat `id`, or `None` if the ring has no such seat.
  pub fn worker(&self, id: WorkerId) -> Option<Worker> {
    (id.index() < self.context.config.workers).then(|| Worker::new(id, &self.context))
  }

  pub fn reporter(&self) -> Reporter {
    Reporter::new(
      self.context.channel(),
      self.context.transmitter.clone(),
      self.context.config.transmit_timeout,
      self.context.stats.clone(),
      self.context.shutdown.clone(),
    )
  }

  /// Spawns the reporter, then every worker.
  pub async fn start(self) -> TableHandle {
    let workers = self.context.config.workers;
    let wait_group = WaitGroup::new();
    wait_group.add(workers + 1).await;

    let reporter = self.reporter();
    let done = wait_group.clone();
    self
      .context
      .config
      .reporter_dispatcher
      .schedule(Runnable::new(move || async move {
        reporter.run().await;
        done.done().await;
      }))
      .await;

    for index in 0..workers {
      let worker = Worker::new(WorkerId::new(index), &self.context);
      let done = wait_group.clone();
      self
        .context
        .config
        .worker_dispatcher
        .schedule(Runnable::new(move || async move {
          worker.run().await;
          done.done().await;
        }))
        .await;
    }

    tracing::info!(
      workers,
      capacity = self.context.config.report_capacity,
      policy = %self.context.config.acquisition_policy,
      "table started"
    );
    TableHandle {
      context: self.context,
      wait_group,
    }
  }
}

/// A running table.
#[derive(Debug)]
pub struct TableHandle {
  context: TableContext,
  wait_group: WaitGroup,
}

impl TableHandle {
  pub fn context(&self) -> &TableContext {
    &self.context
  }

  pub fn stats(&self) -> StatsSnapshot {
    self.context.stats.snapshot()
  }

  /// Signals every task to stop and waits for all of them. Workers finish a meal in progress
  /// and release what they hold; pending reports are discarded.
  pub async fn shutdown(self) -> StatsSnapshot {
    tracing::info!("table shutting down");
    self.context.shutdown.count_down().await;
    self.wait_group.wait().await;
    let snapshot = self.context.stats.snapshot();
    tracing::info!(
      meals = snapshot.total_meals(),
      emitted = snapshot.emitted,
      dropped = snapshot.dropped,
      "table stopped"
    );
    snapshot
  }
}
