use std::sync::Arc;
use std::time::Duration;

use strum::{Display, EnumString};

use crate::config_option::ConfigOption;
use crate::dispatch::{Dispatcher, SingleWorkerDispatcher, TokioRuntimeContextDispatcher};
use crate::error::InitializationError;

#[cfg(test)]
mod tests;

/// How a worker turns a successful probe into holding both of its resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum AcquisitionPolicy {
  /// Probe both, then acquire own resource, then the right neighbour's. The probe and the two
  /// acquisitions are separate steps, so two neighbours may both pass the probe and then
  /// block on each other.
  #[default]
  LookThenAcquire,
  /// Probe both, then acquire the lower-indexed resource first. This removes circular wait
  /// and therefore deviates from the look-then-acquire behaviour.
  OrderedAcquire,
}

#[derive(Debug, Clone)]
pub struct Config {
  pub workers: usize,
  pub report_capacity: usize,
  pub eat_duration: Duration,
  pub think_duration: Duration,
  pub probe_interval: Duration,
  pub enqueue_wait: Duration,
  pub transmit_timeout: Duration,
  pub acquisition_policy: AcquisitionPolicy,
  pub worker_dispatcher: Arc<dyn Dispatcher>,
  pub reporter_dispatcher: Arc<dyn Dispatcher>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      workers: 5,
      report_capacity: 10,
      eat_duration: Duration::from_millis(250),
      think_duration: Duration::from_millis(250),
      probe_interval: Duration::from_millis(1),
      enqueue_wait: Duration::from_millis(1),
      transmit_timeout: Duration::from_millis(100),
      acquisition_policy: AcquisitionPolicy::default(),
      worker_dispatcher: Arc::new(TokioRuntimeContextDispatcher::new()),
      reporter_dispatcher: Arc::new(TokioRuntimeContextDispatcher::new()),
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Moves the reporter onto its own single-thread runtime.
  pub fn with_dedicated_reporter(mut self) -> Result<Self, InitializationError> {
    let dispatcher = SingleWorkerDispatcher::new().map_err(|e| InitializationError::Runtime(e.to_string()))?;
    self.reporter_dispatcher = Arc::new(dispatcher);
    Ok(self)
  }

  pub fn validate(&self) -> Result<(), InitializationError> {
    if self.workers < 2 {
      return Err(InitializationError::TooFewWorkers(self.workers));
    }
    if self.report_capacity == 0 {
      return Err(InitializationError::ZeroReportCapacity);
    }
    if self.transmit_timeout.is_zero() {
      return Err(InitializationError::ZeroDuration {
        name: "transmit_timeout",
        value: self.transmit_timeout,
      });
    }
    Ok(())
  }
}
