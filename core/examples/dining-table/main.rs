use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use symposium_core_rs::logging::init_tracing;
use symposium_core_rs::{AcquisitionPolicy, Config, ConfigOption, Table, TracingIndicator, WriterTransmitter};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  #[clap(long, default_value = "5")]
  workers: usize,

  #[clap(long, default_value = "10")]
  capacity: usize,

  #[clap(long, default_value = "250")]
  eat_ms: u64,

  #[clap(long, default_value = "250")]
  think_ms: u64,

  /// `look-then-acquire` or `ordered-acquire`
  #[clap(long, default_value = "look-then-acquire")]
  policy: AcquisitionPolicy,

  /// Stop after this many seconds; runs until Ctrl-C when omitted.
  #[clap(long)]
  seconds: Option<u64>,

  /// Run the reporter on its own runtime thread.
  #[clap(long)]
  dedicated_reporter: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  init_tracing("dining_table=info,symposium_core_rs=info");
  let args = Args::parse();

  let mut config = Config::from([
    ConfigOption::with_workers(args.workers),
    ConfigOption::with_report_capacity(args.capacity),
    ConfigOption::SetEatDuration(Duration::from_millis(args.eat_ms)),
    ConfigOption::SetThinkDuration(Duration::from_millis(args.think_ms)),
    ConfigOption::with_acquisition_policy(args.policy),
  ]);
  if args.dedicated_reporter {
    config = config.with_dedicated_reporter()?;
  }

  let table = Table::new(
    config,
    Arc::new(TracingIndicator),
    WriterTransmitter::new(tokio::io::stdout()),
  )?;
  let handle = table.start().await;

  match args.seconds {
    Some(seconds) => {
      tokio::select! {
        _ = tokio::time::sleep(Duration::from_secs(seconds)) => {}
        _ = tokio::signal::ctrl_c() => {}
      }
    }
    None => tokio::signal::ctrl_c().await?,
  }

  let stats = handle.shutdown().await;
  tracing::info!(
    meals = stats.total_meals(),
    published = stats.published,
    dropped = stats.dropped,
    emitted = stats.emitted,
    transmit_failures = stats.transmit_failures,
    "done"
  );
  for (index, meals) in stats.meals.iter().enumerate() {
    println!("worker {}: {} meals", index + 1, meals);
  }
  Ok(())
}
