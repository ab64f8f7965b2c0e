//! Command pool and command buffer object info.
//!
//! The per-buffer call log and transition caches live on the tracker,
//! not here: their lifetime follows explicit reset/destroy, independent
//! of the registry entry.

use vktrim_record::handle::{CommandBufferHandle, CommandPoolHandle, DeviceHandle};
use vktrim_record::record::CallRecord;

use crate::registry::tracked_info;

#[derive(Debug, Clone, Default)]
pub struct CommandPoolInfo {
    pub handle: CommandPoolHandle,
    pub device: DeviceHandle,
    pub create_record: Option<CallRecord>,
    pub queue_family_index: u32,
}
tracked_info!(CommandPoolInfo, CommandPoolHandle);

#[derive(Debug, Clone, Default)]
pub struct CommandBufferInfo {
    pub handle: CommandBufferHandle,
    pub device: DeviceHandle,
    pub pool: CommandPoolHandle,
    /// Raw VkCommandBufferLevel value.
    pub level: u32,
    pub allocate_record: Option<CallRecord>,
}
tracked_info!(CommandBufferInfo, CommandBufferHandle);
