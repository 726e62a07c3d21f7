//! Placement of table tasks onto tokio runtimes.

use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio::runtime::{Builder, Runtime};


pub struct Runnable(Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send + 'static>);

impl Runnable {
  pub fn new<F, Fut>(f: F) -> Self
  where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static, {
    Self(Box::new(move || Box::pin(f()) as BoxFuture<'static, ()>))
  }

  pub async fn run(self) {
    (self.0)().await;
  }
}

impl Debug for Runnable {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Runnable")
  }
}

#[async_trait]
pub trait Dispatcher: Debug + Send + Sync + 'static {
  async fn schedule(&self, runner: Runnable);
}

// --- TokioRuntimeContextDispatcher implementation

/// Spawns onto whichever tokio runtime the caller is running in.
#[derive(Debug, Clone, Default)]
pub struct TokioRuntimeContextDispatcher;

impl TokioRuntimeContextDispatcher {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl Dispatcher for TokioRuntimeContextDispatcher {
  async fn schedule(&self, runner: Runnable) {
    tokio::spawn(runner.run());
  }
}

// --- SingleWorkerDispatcher implementation

/// Dispatcher that executes work on a dedicated single-thread tokio runtime.
///
/// Tasks placed here never compete with the caller's runtime for a worker thread, which is how
/// the reporter is kept ahead of the workers without task priorities.
///
/// ## Runtime lifecycle
/// The internal runtime is owned via `Option<Arc<Runtime>>`. When the last clone is dropped,
/// `shutdown_background()` is called so dropping inside an async context does not panic.
#[derive(Debug, Clone)]
pub struct SingleWorkerDispatcher {
  runtime: Option<Arc<Runtime>>,
}

impl SingleWorkerDispatcher {
  pub fn new() -> Result<Self, std::io::Error> {
    let runtime = Builder::new_multi_thread()
      .worker_threads(1)
      .thread_name("symposium-reporter")
      .enable_all()
      .build()?;
    Ok(Self {
      runtime: Some(Arc::new(runtime)),
    })
  }
}

#[async_trait]
impl Dispatcher for SingleWorkerDispatcher {
  async fn schedule(&self, runner: Runnable) {
    if let Some(runtime) = &self.runtime {
      runtime.spawn(runner.run());
    } else {
      tracing::warn!("SingleWorkerDispatcher runtime already shut down");
    }
  }
}

impl Drop for SingleWorkerDispatcher {
  fn drop(&mut self) {
    if let Some(runtime_arc) = self.runtime.take() {
      if let Ok(runtime) = Arc::try_unwrap(runtime_arc) {
        runtime.shutdown_background();
      }
    }
  }
}
