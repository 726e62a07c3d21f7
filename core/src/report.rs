//! The best-effort pipeline carrying "worker is eating" notices to the transmit sink.

mod channel;
mod entry;
mod reporter;

pub use self::{channel::*, entry::*, reporter::*};
