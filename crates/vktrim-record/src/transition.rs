//! Pending layout/access-mask transition tuples.
//!
//! Barrier and render-pass commands declare these at record time, but they
//! take effect only at submission. The tracker caches them per recording
//! buffer; a submission-time consumer walks the cache to update the
//! authoritative object state. Layout and mask values are raw API scalars
//! and are never interpreted here.

use serde::{Deserialize, Serialize};

use crate::handle::{BufferHandle, ImageHandle};

/// Deferred image layout/access change declared during command recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTransition {
    pub image: ImageHandle,
    /// Raw VkImageLayout value before the transition.
    pub old_layout: u32,
    /// Raw VkImageLayout value after the transition.
    pub new_layout: u32,
    pub src_access_mask: u32,
    pub dst_access_mask: u32,
}

/// Deferred buffer access-mask change declared during command recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferTransition {
    pub buffer: BufferHandle,
    pub src_access_mask: u32,
    pub dst_access_mask: u32,
}
