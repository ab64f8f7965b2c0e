//! Device memory, buffer, and buffer-view object info.

use vktrim_record::handle::{BufferHandle, BufferViewHandle, DeviceHandle, DeviceMemoryHandle};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

#[derive(Debug, Clone, Default)]
pub struct DeviceMemoryInfo {
    pub handle: DeviceMemoryHandle,
    pub device: DeviceHandle,
    pub allocate_record: Option<CallRecord>,
    /// Allocation size in bytes.
    pub size: u64,
    pub memory_type_index: u32,
    /// vkMapMemory record, present while the memory is persistently mapped.
    /// Replayed at trim start so the application's pointer is valid again.
    pub map_record: Option<CallRecord>,
    pub mapped_offset: u64,
    pub mapped_size: u64,
}
tracked_info!(DeviceMemoryInfo, DeviceMemoryHandle);

#[derive(Debug, Clone, Default)]
pub struct BufferInfo {
    pub handle: BufferHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    pub bind_memory_record: Option<CallRecord>,
    pub bound_memory: DeviceMemoryHandle,
    pub bound_offset: u64,
    pub size: u64,
    /// Most recent access mask (raw VkAccessFlags); updated by the
    /// submission-time transition consumer, not at record time.
    pub access_mask: u32,
}
tracked_info!(BufferInfo, BufferHandle);

#[derive(Debug, Clone, Default)]
pub struct BufferViewInfo {
    pub handle: BufferViewHandle,
    pub device: DeviceHandle,
    pub buffer: BufferHandle,
    pub create_record: Option<CallRecord>,
}
tracked_info!(BufferViewInfo, BufferViewHandle);
