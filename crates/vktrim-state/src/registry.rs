//! Generic handle -> object-info registry, one instance per category.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::warn;

/// Implemented by every per-category object-info struct.
pub trait TrackedInfo {
    type Handle: Copy + Eq + Hash + Debug;

    /// Fresh record for `handle` with every payload field default-initialized.
    /// The dispatch shim populates fields as it observes later calls.
    fn new(handle: Self::Handle) -> Self;

    fn handle(&self) -> Self::Handle;
}

/// Maps one category's live handles to their object info.
///
/// Not internally synchronized; callers serialize access to a tracker
/// instance (every mutating method takes `&mut self`).
#[derive(Debug, Clone)]
pub struct Registry<T: TrackedInfo> {
    objects: HashMap<T::Handle, T>,
}

impl<T: TrackedInfo> Default for Registry<T> {
    fn default() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }
}

impl<T: TrackedInfo> Registry<T> {
    /// Insert a default-initialized record for `handle` and return it for
    /// the caller to populate. If `handle` is somehow still tracked, the
    /// prior record is released and replaced; the driver does not reuse a
    /// handle while it is alive, so this indicates a missed destroy.
    pub fn add(&mut self, handle: T::Handle) -> &mut T {
        if self.objects.insert(handle, T::new(handle)).is_some() {
            warn!(?handle, "re-added a tracked handle; prior record released");
        }
        self.objects
            .get_mut(&handle)
            .expect("record inserted above")
    }

    pub fn get(&self, handle: T::Handle) -> Option<&T> {
        self.objects.get(&handle)
    }

    pub fn get_mut(&mut self, handle: T::Handle) -> Option<&mut T> {
        self.objects.get_mut(&handle)
    }

    /// Remove and return the record for `handle`, releasing every owned
    /// call record and array it holds when the return value drops.
    /// A no-op (returns `None`) when `handle` is not tracked.
    pub fn remove(&mut self, handle: T::Handle) -> Option<T> {
        self.objects.remove(&handle)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = T::Handle> + '_ {
        self.objects.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.objects.values()
    }

    /// Remove one live handle at a time until the registry is empty, so
    /// every record runs the same teardown path as a single `remove`.
    pub fn clear(&mut self) {
        while let Some(handle) = self.objects.keys().next().copied() {
            self.objects.remove(&handle);
        }
    }
}

/// Wires an object-info struct to its handle type. The struct must have a
/// `handle` field and derive `Default`.
macro_rules! tracked_info {
    ($info:ty, $handle:ty) => {
        impl $crate::registry::TrackedInfo for $info {
            type Handle = $handle;

            fn new(handle: $handle) -> Self {
                Self {
                    handle,
                    ..Self::default()
                }
            }

            fn handle(&self) -> $handle {
                self.handle
            }
        }
    };
}

pub(crate) use tracked_info;
