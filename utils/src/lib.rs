//! Async coordination primitives used by the Symposium dining table.
//!
//! - [`sync::BinarySemaphore`] models an RTOS binary semaphore.
//! - [`collections::MpscBoundedChannelQueue`] is a bounded FIFO with waiting and non-waiting operations.
//! - [`concurrent`] holds the latch, wait group and barrier used for lifecycle and test choreography.

pub mod collections;
pub mod concurrent;
pub mod sync;
