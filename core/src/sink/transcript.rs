use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::TransmitError;
use crate::sink::TransmitSink;

#[cfg(test)]
mod tests;

/// Transmit sink that keeps every emitted line in memory.
///
/// When switched to failing, each emit is rejected and nothing is recorded.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
  lines: Arc<Mutex<Vec<String>>>,
  failing: Arc<AtomicBool>,
  attempts: Arc<AtomicU64>,
}

impl Transcript {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing() -> Self {
    let transcript = Self::default();
    transcript.set_failing(true);
    transcript
  }

  pub fn set_failing(&self, failing: bool) {
    self.failing.store(failing, Ordering::SeqCst);
  }

  pub fn attempts(&self) -> u64 {
    self.attempts.load(Ordering::SeqCst)
  }

  pub async fn lines(&self) -> Vec<String> {
    self.lines.lock().await.clone()
  }
}

#[async_trait]
impl TransmitSink for Transcript {
  async fn emit(&mut self, message: &[u8]) -> Result<(), TransmitError> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    if self.failing.load(Ordering::SeqCst) {
      return Err(TransmitError::Rejected);
    }
    self.lines.lock().await.push(String::from_utf8_lossy(message).into_owned());
    Ok(())
  }
}
