use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::Display as StrumDisplay;
use symposium_utils_rs::sync::BinarySemaphore;

use crate::error::ResourceError;
use crate::worker::WorkerId;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(usize);

impl ResourceId {
  pub const fn new(index: usize) -> Self {
    Self(index)
  }

  pub const fn index(&self) -> usize {
    self.0
  }
}

impl Display for ResourceId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "resource-{}", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum ResourceState {
  Available,
  Held,
}

const NO_HOLDER: usize = usize::MAX;

#[derive(Debug)]
struct Resource {
  semaphore: BinarySemaphore,
  holder: AtomicUsize,
}

impl Resource {
  fn new() -> Self {
    Self {
      semaphore: BinarySemaphore::new(true),
      holder: AtomicUsize::new(NO_HOLDER),
    }
  }
}

/// The ring of binary resources shared by the workers.
///
/// Every resource starts available. Observation ([`ResourceSet::is_available`]) and acquisition
/// ([`ResourceSet::acquire`]) are separate operations; a snapshot may be stale by the time the
/// caller acts on it.
#[derive(Debug)]
pub struct ResourceSet {
  resources: Vec<Resource>,
}

impl ResourceSet {
  pub fn new(size: usize) -> Self {
    Self {
      resources: (0..size).map(|_| Resource::new()).collect(),
    }
  }

  pub fn len(&self) -> usize {
    self.resources.len()
  }

  pub fn is_empty(&self) -> bool {
    self.resources.is_empty()
  }

  pub fn ids(&self) -> impl Iterator<Item = ResourceId> {
    (0..self.resources.len()).map(ResourceId::new)
  }

  fn get(&self, id: ResourceId) -> Result<&Resource, ResourceError> {
    self.resources.get(id.index()).ok_or(ResourceError::UnknownResource(id))
  }

  /// Non-blocking snapshot. Unknown resources are never available.
  pub fn is_available(&self, id: ResourceId) -> bool {
    self.get(id).map(|r| r.semaphore.is_given()).unwrap_or(false)
  }

  pub fn state(&self, id: ResourceId) -> Result<ResourceState, ResourceError> {
    let resource = self.get(id)?;
    Ok(if resource.semaphore.is_given() {
      ResourceState::Available
    } else {
      ResourceState::Held
    })
  }

  pub fn holder(&self, id: ResourceId) -> Option<WorkerId> {
    let resource = self.get(id).ok()?;
    match resource.holder.load(Ordering::Acquire) {
      NO_HOLDER => None,
      index => Some(WorkerId::new(index)),
    }
  }

  /// Waits without bound until `id` is available, then marks it held by `by`.
  pub async fn acquire(&self, id: ResourceId, by: WorkerId) -> Result<(), ResourceError> {
    let resource = self.get(id)?;
    resource.semaphore.take().await?;
    let previous = resource.holder.swap(by.index(), Ordering::AcqRel);
    debug_assert_eq!(previous, NO_HOLDER, "{} was taken while still held", id);
    tracing::trace!(resource = %id, worker = %by, "acquired");
    Ok(())
  }

  /// Hands `id` back and wakes at most one waiter. Only the current holder may release.
  pub fn release(&self, id: ResourceId, by: WorkerId) -> Result<(), ResourceError> {
    let resource = self.get(id)?;
    resource
      .holder
      .compare_exchange(by.index(), NO_HOLDER, Ordering::AcqRel, Ordering::Acquire)
      .map_err(|_| ResourceError::NotHeld {
        resource: id,
        worker: by,
      })?;
    resource.semaphore.give()?;
    tracing::trace!(resource = %id, worker = %by, "released");
    Ok(())
  }
}
