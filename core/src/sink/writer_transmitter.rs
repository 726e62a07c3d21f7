use std::fmt::Debug;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::TransmitError;
use crate::sink::TransmitSink;

/// Writes each message to an async writer and flushes it, e.g. `tokio::io::stdout()`.
#[derive(Debug)]
pub struct WriterTransmitter<W> {
  writer: W,
}

impl<W> WriterTransmitter<W> {
  pub fn new(writer: W) -> Self {
    Self { writer }
  }

  pub fn into_inner(self) -> W {
    self.writer
  }
}

#[async_trait]
impl<W> TransmitSink for WriterTransmitter<W>
where
  W: AsyncWrite + Unpin + Debug + Send + 'static,
{
  async fn emit(&mut self, message: &[u8]) -> Result<(), TransmitError> {
    self.writer.write_all(message).await?;
    self.writer.flush().await?;
    Ok(())
  }
}
