//! A ring of workers that each need two adjacent binary resources to do their work, and a
//! best-effort reporting pipeline that tells the outside world who is working.
//!
//! The workers use a look-before-acquire policy: a worker only starts acquiring once it has
//! seen both of its resources available. Observation and acquisition are separate steps, so
//! neighbours can still end up waiting on each other; [`AcquisitionPolicy::OrderedAcquire`] is
//! available as a deadlock-free alternative.
//!
//! ```no_run
//! use std::sync::Arc;
//! use symposium_core_rs::{Config, Table, TracingIndicator, WriterTransmitter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::new(
//!   Config::default(),
//!   Arc::new(TracingIndicator),
//!   WriterTransmitter::new(tokio::io::stdout()),
//! )?;
//! let handle = table.start().await;
//! tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//! let stats = handle.shutdown().await;
//! println!("{} meals", stats.total_meals());
//! # Ok(())
//! # }
//! ```

mod config;
mod config_option;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod report;
pub mod resource;
pub mod sink;
pub mod stats;
pub mod table;
pub mod worker;

pub use self::{
  config::*,
  config_option::*,
  error::*,
  report::{ReportChannel, ReportEntry, Reporter},
  resource::{ResourceId, ResourceSet, ResourceState},
  sink::{IndicatorBoard, OutputSink, TracingIndicator, TransmitSink, Transcript, WriterTransmitter},
  stats::{StatsSnapshot, TableStats},
  table::{Table, TableContext, TableHandle},
  worker::{CycleOutcome, NoopProbeHook, ProbeHook, StateBoard, Worker, WorkerId, WorkerState},
};
