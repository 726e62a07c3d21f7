use std::fmt::{Display, Formatter};

use symposium_utils_rs::collections::Element;

use crate::worker::WorkerId;

/// A worker identifier copied into the report channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportEntry(WorkerId);

impl Element for ReportEntry {}

impl ReportEntry {
  pub const fn new(worker: WorkerId) -> Self {
    Self(worker)
  }

  pub const fn worker(&self) -> WorkerId {
    self.0
  }

  /// The report line as transmitted. Workers are numbered from one on the wire.
  pub fn to_line(&self) -> String {
    self.to_string()
  }
}

impl Display for ReportEntry {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "Philosopher {} is eating.\n\r", self.0.index() + 1)
  }
}
