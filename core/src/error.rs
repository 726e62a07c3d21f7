use std::time::Duration;

use symposium_utils_rs::sync::SemaphoreError;
use thiserror::Error;

use crate::resource::ResourceId;
use crate::worker::WorkerId;

/// Why a table could not be brought up. Every variant is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitializationError {
  #[error("a ring needs at least 2 workers, got {0}")]
  TooFewWorkers(usize),
  #[error("report channel capacity must be positive")]
  ZeroReportCapacity,
  #[error("{name} must be positive, got {value:?}")]
  ZeroDuration { name: &'static str, value: Duration },
  #[error("failed to build dispatcher runtime: {0}")]
  Runtime(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
  #[error("initialization failed: {0}")]
  Initialization(#[from] InitializationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
  #[error("unknown resource {0}")]
  UnknownResource(ResourceId),
  #[error("{resource} is not held by {worker}")]
  NotHeld { resource: ResourceId, worker: WorkerId },
  #[error("semaphore failure: {0}")]
  Semaphore(#[from] SemaphoreError),
}

/// Failure reported by a transmit sink. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransmitError {
  #[error("io error: {0}")]
  Io(String),
  #[error("transmission timed out")]
  Timeout,
  #[error("transmission rejected by the sink")]
  Rejected,
}

impl From<std::io::Error> for TransmitError {
  fn from(value: std::io::Error) -> Self {
    TransmitError::Io(value.to_string())
  }
}

static_assertions::assert_impl_all!(TableError: Send, Sync);
static_assertions::assert_impl_all!(ResourceError: Send, Sync);
static_assertions::assert_impl_all!(TransmitError: Send, Sync);
