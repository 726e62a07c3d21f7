use std::sync::Arc;
use std::time::Duration;

use symposium_utils_rs::concurrent::CountDownLatch;

use crate::error::TransmitError;
use crate::report::{ReportChannel, ReportEntry};
use crate::sink::SharedTransmitter;
use crate::stats::TableStats;


/// The single consumer of the report channel.
///
/// Each entry becomes one line on the transmit sink. Transmission failures, including an
/// elapsed `transmit_timeout`, are counted and otherwise ignored.
#[derive(Debug)]
pub struct Reporter {
  channel: ReportChannel,
  transmitter: SharedTransmitter,
  transmit_timeout: Duration,
  stats: Arc<TableStats>,
  shutdown: CountDownLatch,
}

impl Reporter {
  pub fn new(
    channel: ReportChannel,
    transmitter: SharedTransmitter,
    transmit_timeout: Duration,
    stats: Arc<TableStats>,
    shutdown: CountDownLatch,
  ) -> Self {
    Self {
      channel,
      transmitter,
      transmit_timeout,
      stats,
      shutdown,
    }
  }

  /// Drains the channel until shutdown or until the channel is closed.
  pub async fn run(mut self) {
    tracing::debug!("reporter started");
    loop {
      let next = tokio::select! {
        biased;
        _ = self.shutdown.wait() => None,
        entry = self.channel.dequeue(None) => entry,
      };
      match next {
        Some(entry) => {
          let _ = self.report(entry).await;
        }
        None => break,
      }
    }
    tracing::debug!("reporter stopped");
  }

  /// Transmits one entry. The result is returned for callers that care; `run` discards it.
  pub async fn report(&self, entry: ReportEntry) -> Result<(), TransmitError> {
    let line = entry.to_line();
    // Only the reporter writes to the sink; the lock keeps it that way if that ever changes.
    let mut transmitter = self.transmitter.lock().await;
    let result = match tokio::time::timeout(self.transmit_timeout, transmitter.emit(line.as_bytes())).await {
      Ok(result) => result,
      Err(_) => Err(TransmitError::Timeout),
    };
    drop(transmitter);
    match &result {
      Ok(()) => self.stats.record_emitted(),
      Err(_) => self.stats.record_transmit_failure(),
    }
    result
  }
}
