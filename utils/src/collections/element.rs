use std::fmt::Debug;

/// Constraints for values stored in the queues of this crate.
///
/// Elements cross task boundaries, so they must be `Send + Sync + 'static`.
pub trait Element: Debug + Send + Sync + 'static {}

macro_rules! impl_element_for_primitives {
  ($($ty:ty),* $(,)?) => {
    $(impl Element for $ty {})*
  };
}

impl_element_for_primitives!(i8, i16, i32, i64, isize);
impl_element_for_primitives!(u8, u16, u32, u64, usize);
impl_element_for_primitives!(bool, char);

impl Element for String {}
