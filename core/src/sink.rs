//! Contracts for the two external collaborators of the table, with host implementations.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::TransmitError;
use crate::worker::WorkerId;

mod indicator_board;
mod tracing_indicator;
mod transcript;
mod writer_transmitter;

pub use self::{indicator_board::*, tracing_indicator::*, transcript::*, writer_transmitter::*};

/// Per-worker on/off indicator, lit while the worker eats. Calls must return quickly.
pub trait OutputSink: Debug + Send + Sync + 'static {
  fn set_indicator(&self, worker: WorkerId, on: bool);

  /// Enters the error-indication state after a fatal initialization failure.
  fn indicate_fault(&self) {}
}

/// Line-oriented transmitter for report messages.
#[async_trait]
pub trait TransmitSink: Debug + Send + 'static {
  async fn emit(&mut self, message: &[u8]) -> Result<(), TransmitError>;
}

pub type SharedTransmitter = Arc<Mutex<Box<dyn TransmitSink>>>;

pub fn shared_transmitter(sink: impl TransmitSink) -> SharedTransmitter {
  Arc::new(Mutex::new(Box::new(sink)))
}
