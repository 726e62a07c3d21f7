use std::sync::Arc;
use std::time::Duration;

use crate::config::{AcquisitionPolicy, Config};
use crate::dispatch::Dispatcher;

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetWorkers(usize),
  SetReportCapacity(usize),
  SetEatDuration(Duration),
  SetThinkDuration(Duration),
  SetProbeInterval(Duration),
  SetEnqueueWait(Duration),
  SetTransmitTimeout(Duration),
  SetAcquisitionPolicy(AcquisitionPolicy),
  SetWorkerDispatcher(Arc<dyn Dispatcher>),
  SetReporterDispatcher(Arc<dyn Dispatcher>),
}

impl ConfigOption {
  pub(crate) fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetWorkers(workers) => {
        config.workers = *workers;
      }
      ConfigOption::SetReportCapacity(capacity) => {
        config.report_capacity = *capacity;
      }
      ConfigOption::SetEatDuration(duration) => {
        config.eat_duration = *duration;
      }
      ConfigOption::SetThinkDuration(duration) => {
        config.think_duration = *duration;
      }
      ConfigOption::SetProbeInterval(interval) => {
        config.probe_interval = *interval;
      }
      ConfigOption::SetEnqueueWait(wait) => {
        config.enqueue_wait = *wait;
      }
      ConfigOption::SetTransmitTimeout(timeout) => {
        config.transmit_timeout = *timeout;
      }
      ConfigOption::SetAcquisitionPolicy(policy) => {
        config.acquisition_policy = *policy;
      }
      ConfigOption::SetWorkerDispatcher(dispatcher) => {
        config.worker_dispatcher = Arc::clone(dispatcher);
      }
      ConfigOption::SetReporterDispatcher(dispatcher) => {
        config.reporter_dispatcher = Arc::clone(dispatcher);
      }
    }
  }

  pub fn with_workers(workers: usize) -> ConfigOption {
    ConfigOption::SetWorkers(workers)
  }

  pub fn with_report_capacity(capacity: usize) -> ConfigOption {
    ConfigOption::SetReportCapacity(capacity)
  }

  /// Sets both the eating and the thinking duration, which are equal by default.
  pub fn with_meal_period(duration: Duration) -> Vec<ConfigOption> {
    vec![
      ConfigOption::SetEatDuration(duration),
      ConfigOption::SetThinkDuration(duration),
    ]
  }

  pub fn with_acquisition_policy(policy: AcquisitionPolicy) -> ConfigOption {
    ConfigOption::SetAcquisitionPolicy(policy)
  }
}
