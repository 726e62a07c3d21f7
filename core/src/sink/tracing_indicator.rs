use crate::sink::OutputSink;
use crate::worker::WorkerId;

/// Renders indicator changes as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingIndicator;

impl OutputSink for TracingIndicator {
  fn set_indicator(&self, worker: WorkerId, on: bool) {
    tracing::info!(worker = %worker, on, "indicator");
  }

  fn indicate_fault(&self) {
    tracing::error!("fault indicator lit; all worker indicators off");
  }
}
