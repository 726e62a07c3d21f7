use crate::error::TransmitError;
use crate::sink::{TransmitSink, Transcript};

#[tokio::test]
async fn test_records_lines_in_order() {
  let transcript = Transcript::new();
  let mut sink = transcript.clone();

  sink.emit(b"first").await.unwrap();
  sink.emit(b"second").await.unwrap();

  assert_eq!(transcript.lines().await, vec!["first".to_string(), "second".to_string()]);
  assert_eq!(transcript.attempts(), 2);
}

#[tokio::test]
async fn test_failing_transcript_rejects_without_recording() {
  let transcript = Transcript::failing();
  let mut sink = transcript.clone();

  assert_eq!(sink.emit(b"lost").await, Err(TransmitError::Rejected));
  assert!(transcript.lines().await.is_empty());

  transcript.set_failing(false);
  sink.emit(b"kept").await.unwrap();
  assert_eq!(transcript.lines().await, vec!["kept".to_string()]);
  assert_eq!(transcript.attempts(), 2);
}
