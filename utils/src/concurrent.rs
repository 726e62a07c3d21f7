mod async_barrier;
mod count_down_latch;
mod wait_group;

pub use self::{async_barrier::*, count_down_latch::*, wait_group::*};
