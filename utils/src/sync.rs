mod binary_semaphore;

pub use self::binary_semaphore::*;
